use crate::{ArgumentId, ArgumentKind, DebateId, RelationKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One statement in a debate.
///
/// `label` holds the full statement text; truncation is strictly a display
/// concern. Simulation position state lives in the layout arena, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentNode {
    pub id: ArgumentId,
    pub label: String,
    pub kind: ArgumentKind,
    pub author: String,
    /// Small integer used only for coloring/clustering; redundant with
    /// `kind` in every sample dataset.
    pub group: i32,
    /// Relative rendered radius. Positive.
    pub val: f32,
    /// Average rating in [0, 5], one decimal of meaningful precision.
    pub rating: f32,
}

/// A directed relation between two arguments, by node id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentEdge {
    pub source: ArgumentId,
    pub target: ArgumentId,
    pub relation: RelationKind,
}

/// Structural problems reported by [`DebateGraph::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum GraphIssue {
    /// Edge at this position references a node id not present in the graph.
    MissingEndpoint { edge: usize, id: ArgumentId },
    /// Graphs are expected to carry exactly one RESOLUTION node.
    ResolutionCount(usize),
}

/// The node/edge collection for one debate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateGraph {
    pub debate_id: DebateId,
    pub nodes: Vec<ArgumentNode>,
    pub edges: Vec<ArgumentEdge>,
}

impl DebateGraph {
    pub fn new(debate_id: DebateId) -> Self {
        Self {
            debate_id,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn node(&self, id: &ArgumentId) -> Option<&ArgumentNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    /// The root statement the debate is about, if the graph has one.
    pub fn resolution(&self) -> Option<&ArgumentNode> {
        self.nodes
            .iter()
            .find(|n| n.kind == ArgumentKind::RESOLUTION)
    }

    /// Check referential integrity and the single-resolution expectation.
    ///
    /// Callers are expected to validate before building a layout arena; the
    /// arena drops dangling edges rather than mispositioning them, and this
    /// is how callers find out which ones.
    pub fn validate(&self) -> Vec<GraphIssue> {
        let mut issues = Vec::new();
        let ids: HashSet<&ArgumentId> = self.nodes.iter().map(|n| &n.id).collect();

        for (i, edge) in self.edges.iter().enumerate() {
            if !ids.contains(&edge.source) {
                issues.push(GraphIssue::MissingEndpoint {
                    edge: i,
                    id: edge.source.clone(),
                });
            }
            if !ids.contains(&edge.target) {
                issues.push(GraphIssue::MissingEndpoint {
                    edge: i,
                    id: edge.target.clone(),
                });
            }
        }

        let resolutions = self
            .nodes
            .iter()
            .filter(|n| n.kind == ArgumentKind::RESOLUTION)
            .count();
        if resolutions != 1 {
            issues.push(GraphIssue::ResolutionCount(resolutions));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, kind: ArgumentKind) -> ArgumentNode {
        ArgumentNode {
            id: ArgumentId::from(id),
            label: format!("statement {id}"),
            kind,
            author: "someone".to_string(),
            group: 1,
            val: 20.0,
            rating: 4.0,
        }
    }

    #[test]
    fn test_valid_graph_has_no_issues() {
        let graph = DebateGraph {
            debate_id: DebateId::from("1"),
            nodes: vec![
                node("root", ArgumentKind::RESOLUTION),
                node("a1", ArgumentKind::SUPPORT),
            ],
            edges: vec![ArgumentEdge {
                source: ArgumentId::from("a1"),
                target: ArgumentId::from("root"),
                relation: RelationKind::SUPPORTS,
            }],
        };
        assert!(graph.validate().is_empty());
        assert_eq!(graph.resolution().unwrap().id, ArgumentId::from("root"));
    }

    #[test]
    fn test_dangling_edge_and_missing_resolution_reported() {
        let graph = DebateGraph {
            debate_id: DebateId::from("1"),
            nodes: vec![node("a1", ArgumentKind::SUPPORT)],
            edges: vec![ArgumentEdge {
                source: ArgumentId::from("a1"),
                target: ArgumentId::from("ghost"),
                relation: RelationKind::REFUTES,
            }],
        };
        let issues = graph.validate();
        assert!(issues.contains(&GraphIssue::MissingEndpoint {
            edge: 0,
            id: ArgumentId::from("ghost"),
        }));
        assert!(issues.contains(&GraphIssue::ResolutionCount(0)));
    }
}
