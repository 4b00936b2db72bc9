use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub mod entity;
pub mod graph;
pub mod rating;
pub mod source;

pub use entity::{DebateStatus, DebateSummary, LeaderboardEntry, User};
pub use graph::{ArgumentEdge, ArgumentNode, DebateGraph, GraphIssue};
pub use rating::stars;
pub use source::{GraphSource, SourceError};

/// Identifier of one debate. Opaque to everything except the source that
/// resolves it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DebateId(pub String);

impl DebateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for DebateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DebateId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier of one argument node, unique within its debate graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArgumentId(pub String);

impl ArgumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ArgumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ArgumentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Role of a statement within a debate. Exactly one RESOLUTION node is
/// expected per graph; `DebateGraph::validate` reports deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum ArgumentKind {
    RESOLUTION,
    SUPPORT,
    REFUTE,
    EVIDENCE,
}

impl ArgumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentKind::RESOLUTION => "resolution",
            ArgumentKind::SUPPORT => "support",
            ArgumentKind::REFUTE => "refute",
            ArgumentKind::EVIDENCE => "evidence",
        }
    }
}

/// Relation carried by an edge between two arguments.
///
/// The wire format only ever produces `supports`, `refutes` and `proves`;
/// anything else is a conversion error at the boundary rather than a
/// free-form label inside the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum RelationKind {
    SUPPORTS,
    REFUTES,
    PROVES,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::SUPPORTS => "supports",
            RelationKind::REFUTES => "refutes",
            RelationKind::PROVES => "proves",
        }
    }
}

/// Error type for enum conversion failures
#[derive(Error, Debug, Clone)]
pub enum EnumConversionError {
    #[error("Invalid ArgumentKind value: {0}")]
    InvalidArgumentKind(i32),
    #[error("Invalid RelationKind value: {0}")]
    InvalidRelationKind(i32),
    #[error("Unknown argument kind: {0}")]
    UnknownArgumentKind(String),
    #[error("Unknown relation kind: {0}")]
    UnknownRelationKind(String),
    #[error("Unknown debate status: {0}")]
    UnknownDebateStatus(String),
}

impl TryFrom<i32> for ArgumentKind {
    type Error = EnumConversionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ArgumentKind::RESOLUTION),
            1 => Ok(ArgumentKind::SUPPORT),
            2 => Ok(ArgumentKind::REFUTE),
            3 => Ok(ArgumentKind::EVIDENCE),
            _ => Err(EnumConversionError::InvalidArgumentKind(value)),
        }
    }
}

impl FromStr for ArgumentKind {
    type Err = EnumConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resolution" => Ok(ArgumentKind::RESOLUTION),
            "support" => Ok(ArgumentKind::SUPPORT),
            "refute" => Ok(ArgumentKind::REFUTE),
            "evidence" => Ok(ArgumentKind::EVIDENCE),
            other => Err(EnumConversionError::UnknownArgumentKind(other.to_string())),
        }
    }
}

impl TryFrom<i32> for RelationKind {
    type Error = EnumConversionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RelationKind::SUPPORTS),
            1 => Ok(RelationKind::REFUTES),
            2 => Ok(RelationKind::PROVES),
            _ => Err(EnumConversionError::InvalidRelationKind(value)),
        }
    }
}

impl FromStr for RelationKind {
    type Err = EnumConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "supports" => Ok(RelationKind::SUPPORTS),
            "refutes" => Ok(RelationKind::REFUTES),
            "proves" => Ok(RelationKind::PROVES),
            other => Err(EnumConversionError::UnknownRelationKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip_i32() {
        for v in 0..4 {
            let kind = ArgumentKind::try_from(v).unwrap();
            assert_eq!(kind as i32, v);
        }
        assert!(ArgumentKind::try_from(99).is_err());
    }

    #[test]
    fn test_relation_from_str() {
        assert_eq!(
            RelationKind::from_str("proves").unwrap(),
            RelationKind::PROVES
        );
        assert!(RelationKind::from_str("clarifies").is_err());
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(ArgumentKind::RESOLUTION.as_str(), "resolution");
        let json = serde_json::to_string(&RelationKind::SUPPORTS).unwrap();
        assert_eq!(json, "\"supports\"");
    }
}
