use agora_core::{
    ArgumentEdge, ArgumentId, ArgumentKind, ArgumentNode, DebateGraph, DebateId, DebateSummary,
    EnumConversionError, RelationKind, User,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User record as the backend sends it. Only the fields the app surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub reputation: i64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub debates_count: u32,
    #[serde(default)]
    pub arguments_count: u32,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User {
            username: dto.username,
            reputation: dto.reputation,
            verified: dto.verified,
            debates_count: dto.debates_count,
            arguments_count: dto.arguments_count,
        }
    }
}

/// Payload of `/auth/login`, `/auth/register` and `/auth/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: UserDto,
    pub token: String,
    #[serde(rename = "refreshToken", default)]
    pub refresh_token: Option<String>,
}

/// Node shape on the wire: kinds travel as lowercase strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDto {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub author: String,
    pub group: i32,
    pub val: f32,
    pub rating: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDto {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub relation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDto {
    pub nodes: Vec<NodeDto>,
    pub links: Vec<LinkDto>,
}

impl GraphDto {
    /// Convert into the typed model, rejecting unknown kind strings.
    pub fn into_graph(self, debate_id: DebateId) -> Result<DebateGraph, EnumConversionError> {
        let mut graph = DebateGraph::new(debate_id);
        for node in self.nodes {
            graph.nodes.push(ArgumentNode {
                id: ArgumentId(node.id),
                label: node.label,
                kind: ArgumentKind::from_str(&node.kind)?,
                author: node.author,
                group: node.group,
                val: node.val,
                rating: node.rating,
            });
        }
        for link in self.links {
            graph.edges.push(ArgumentEdge {
                source: ArgumentId(link.source),
                target: ArgumentId(link.target),
                relation: RelationKind::from_str(&link.relation)?,
            });
        }
        Ok(graph)
    }
}

/// Payload of `/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub debates: Vec<DebateSummary>,
    #[serde(default)]
    pub total_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_dto_conversion() {
        let json = r#"{
            "nodes": [
                {"id": "root", "label": "The resolution", "type": "resolution",
                 "author": "Someone", "group": 1, "val": 30.0, "rating": 4.5},
                {"id": "e1", "label": "A study", "type": "evidence",
                 "author": "Researcher", "group": 2, "val": 12.0, "rating": 4.8}
            ],
            "links": [
                {"source": "e1", "target": "root", "type": "proves"}
            ]
        }"#;
        let dto: GraphDto = serde_json::from_str(json).unwrap();
        let graph = dto.into_graph(DebateId::from("1")).unwrap();
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.nodes[1].kind, ArgumentKind::EVIDENCE);
        assert_eq!(graph.edges[0].relation, RelationKind::PROVES);
    }

    #[test]
    fn test_unknown_relation_is_rejected() {
        let dto = GraphDto {
            nodes: vec![],
            links: vec![LinkDto {
                source: "a".to_string(),
                target: "b".to_string(),
                relation: "clarifies".to_string(),
            }],
        };
        assert!(dto.into_graph(DebateId::from("1")).is_err());
    }

    #[test]
    fn test_auth_payload_uses_camel_case_refresh_token() {
        let json = r#"{
            "user": {"id": "u1", "username": "TechEthicist"},
            "token": "jwt",
            "refreshToken": "refresh-jwt"
        }"#;
        let payload: AuthPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.refresh_token.as_deref(), Some("refresh-jwt"));
        let user: User = payload.user.into();
        assert_eq!(user.username, "TechEthicist");
        assert_eq!(user.reputation, 0);
    }
}
