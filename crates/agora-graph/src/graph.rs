use agora_core::{ArgumentId, ArgumentKind, DebateGraph, RelationKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f32::consts::TAU;
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeIndex(pub usize);

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeIndex(pub usize);

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// One argument as the simulation sees it.
///
/// While a simulation is running it has exclusive ownership of `pos` and
/// `vel`; renderers only read them. `pin` is the drag contract: while set,
/// the node stays exactly there and the integrator zeroes its velocity.
#[derive(Debug, Clone)]
pub struct SimNode {
    pub id: ArgumentId,
    pub label: String,
    pub kind: ArgumentKind,
    pub author: String,
    pub val: f32,
    pub rating: f32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub pin: Option<Vec2>,
}

/// An edge with its endpoints resolved to arena indices at build time.
///
/// Paint-time code goes through `source_idx`/`target_idx`, never back
/// through the id strings, so an edge can never read a stale position.
#[derive(Debug, Clone)]
pub struct SimEdge {
    pub source: ArgumentId,
    pub target: ArgumentId,
    pub relation: RelationKind,
    pub source_idx: NodeIndex,
    pub target_idx: NodeIndex,
}

/// Extra reach around a node's circle that still counts as a hit.
pub const HIT_SLOP: f32 = 4.0;

/// Index-based arena for one debate graph.
///
/// Owned exclusively by the active view for its lifetime; a new view of the
/// same debate builds a fresh arena.
#[derive(Debug)]
pub struct GraphArena {
    nodes: Vec<SimNode>,
    edges: Vec<SimEdge>,
    node_map: HashMap<ArgumentId, NodeIndex>,
}

impl GraphArena {
    /// Build an arena from a debate graph, placing nodes on a circle of
    /// `spread` radius around `center` as the starting layout.
    ///
    /// Edges referencing a missing node id are dropped here, with a warning;
    /// see `DebateGraph::validate` for reporting them to the user.
    pub fn build(graph: &DebateGraph, center: Vec2, spread: f32) -> Self {
        let mut nodes = Vec::with_capacity(graph.nodes.len());
        let mut node_map = HashMap::new();

        let count = graph.nodes.len().max(1) as f32;
        for (i, node) in graph.nodes.iter().enumerate() {
            let angle = i as f32 * TAU / count;
            let pos = center + Vec2::new(angle.cos(), angle.sin()) * spread;
            node_map.insert(node.id.clone(), NodeIndex(nodes.len()));
            nodes.push(SimNode {
                id: node.id.clone(),
                label: node.label.clone(),
                kind: node.kind,
                author: node.author.clone(),
                val: node.val,
                rating: node.rating,
                pos,
                vel: Vec2::ZERO,
                pin: None,
            });
        }

        let mut edges = Vec::with_capacity(graph.edges.len());
        for edge in &graph.edges {
            match (node_map.get(&edge.source), node_map.get(&edge.target)) {
                (Some(&source_idx), Some(&target_idx)) => {
                    edges.push(SimEdge {
                        source: edge.source.clone(),
                        target: edge.target.clone(),
                        relation: edge.relation,
                        source_idx,
                        target_idx,
                    });
                }
                _ => {
                    tracing::warn!(
                        "Dropping edge {} -> {} because an endpoint is missing from debate {}",
                        edge.source,
                        edge.target,
                        graph.debate_id
                    );
                }
            }
        }

        Self {
            nodes,
            edges,
            node_map,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.nodes.len()).map(NodeIndex)
    }

    pub fn nodes(&self) -> &[SimNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [SimNode] {
        &mut self.nodes
    }

    pub fn edges(&self) -> &[SimEdge] {
        &self.edges
    }

    pub fn index_of(&self, id: &ArgumentId) -> Option<NodeIndex> {
        self.node_map.get(id).copied()
    }

    /// Topmost node whose circle (plus a small slop) contains `p`.
    /// Nodes paint in arena order, so a later node wins on overlap.
    pub fn node_at(&self, p: Vec2) -> Option<NodeIndex> {
        let mut found = None;
        for (i, node) in self.nodes.iter().enumerate() {
            if (node.pos - p).length() <= node.val + HIT_SLOP {
                found = Some(NodeIndex(i));
            }
        }
        found
    }

    /// Pin a node to a position for the duration of a drag.
    pub fn pin_node(&mut self, idx: NodeIndex, pos: Vec2) {
        let node = &mut self.nodes[idx.0];
        node.pin = Some(pos);
        node.pos = pos;
        node.vel = Vec2::ZERO;
    }

    /// Release a dragged node back to the simulation.
    pub fn release_node(&mut self, idx: NodeIndex) {
        self.nodes[idx.0].pin = None;
    }

    /// Axis-aligned bounds of all node circles, for zoom-to-fit.
    pub fn bounds(&self) -> Option<(Vec2, Vec2)> {
        let first = self.nodes.first()?;
        let mut min = first.pos - Vec2::new(first.val, first.val);
        let mut max = first.pos + Vec2::new(first.val, first.val);
        for node in &self.nodes[1..] {
            min.x = min.x.min(node.pos.x - node.val);
            min.y = min.y.min(node.pos.y - node.val);
            max.x = max.x.max(node.pos.x + node.val);
            max.y = max.y.max(node.pos.y + node.val);
        }
        Some((min, max))
    }
}

impl Index<NodeIndex> for GraphArena {
    type Output = SimNode;
    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index.0]
    }
}

impl IndexMut<NodeIndex> for GraphArena {
    fn index_mut(&mut self, index: NodeIndex) -> &mut Self::Output {
        &mut self.nodes[index.0]
    }
}

impl Index<EdgeIndex> for GraphArena {
    type Output = SimEdge;
    fn index(&self, index: EdgeIndex) -> &Self::Output {
        &self.edges[index.0]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use agora_core::{ArgumentEdge, ArgumentNode, DebateId};

    pub(crate) fn sample_graph() -> DebateGraph {
        let node = |id: &str, kind, val: f32| ArgumentNode {
            id: ArgumentId::from(id),
            label: format!("statement {id}"),
            kind,
            author: "someone".to_string(),
            group: 1,
            val,
            rating: 4.0,
        };
        let edge = |source: &str, target: &str, relation| ArgumentEdge {
            source: ArgumentId::from(source),
            target: ArgumentId::from(target),
            relation,
        };
        DebateGraph {
            debate_id: DebateId::from("1"),
            nodes: vec![
                node("root", ArgumentKind::RESOLUTION, 30.0),
                node("a1", ArgumentKind::SUPPORT, 20.0),
                node("r1", ArgumentKind::REFUTE, 18.0),
                node("e1", ArgumentKind::EVIDENCE, 12.0),
            ],
            edges: vec![
                edge("a1", "root", RelationKind::SUPPORTS),
                edge("r1", "root", RelationKind::REFUTES),
                edge("e1", "a1", RelationKind::PROVES),
            ],
        }
    }

    #[test]
    fn test_build_resolves_edges_to_indices() {
        let arena = GraphArena::build(&sample_graph(), Vec2::ZERO, 100.0);
        assert_eq!(arena.node_count(), 4);
        assert_eq!(arena.edge_count(), 3);
        for edge in arena.edges() {
            assert_eq!(arena[edge.source_idx].id, edge.source);
            assert_eq!(arena[edge.target_idx].id, edge.target);
        }
    }

    #[test]
    fn test_dangling_edge_is_dropped() {
        let mut graph = sample_graph();
        graph.edges.push(ArgumentEdge {
            source: ArgumentId::from("ghost"),
            target: ArgumentId::from("root"),
            relation: RelationKind::SUPPORTS,
        });
        let arena = GraphArena::build(&graph, Vec2::ZERO, 100.0);
        assert_eq!(arena.edge_count(), 3);
    }

    #[test]
    fn test_node_at_prefers_topmost() {
        let graph = sample_graph();
        let mut arena = GraphArena::build(&graph, Vec2::ZERO, 100.0);
        let a = NodeIndex(0);
        let b = NodeIndex(1);
        arena[a].pos = Vec2::new(10.0, 10.0);
        arena[b].pos = Vec2::new(12.0, 10.0);
        // Both circles cover the probe; the later-painted node wins.
        assert_eq!(arena.node_at(Vec2::new(11.0, 10.0)), Some(b));
        assert_eq!(arena.node_at(Vec2::new(500.0, 500.0)), None);
    }

    #[test]
    fn test_pin_and_release() {
        let graph = sample_graph();
        let mut arena = GraphArena::build(&graph, Vec2::ZERO, 100.0);
        let idx = arena.index_of(&ArgumentId::from("a1")).unwrap();
        let target = Vec2::new(42.0, -17.0);
        arena.pin_node(idx, target);
        assert_eq!(arena[idx].pos, target);
        assert_eq!(arena[idx].pin, Some(target));
        arena.release_node(idx);
        assert_eq!(arena[idx].pin, None);
    }
}
