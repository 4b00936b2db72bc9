use crate::graph::{GraphArena, NodeIndex, Vec2};
use agora_core::{ArgumentKind, RelationKind};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Fixed node palette. EVIDENCE shares the fallback purple.
pub const RESOLUTION_BLUE: Color = Color::new(0x3b, 0x82, 0xf6);
pub const SUPPORT_GREEN: Color = Color::new(0x10, 0xb9, 0x81);
pub const REFUTE_RED: Color = Color::new(0xef, 0x44, 0x44);
pub const FALLBACK_PURPLE: Color = Color::new(0x8b, 0x5c, 0xf6);

pub const NODE_OUTLINE: Color = Color::new(0x1e, 0x29, 0x3b);
pub const EDGE_SLATE: Color = Color::new(0x33, 0x41, 0x55);
pub const CANVAS_BG: Color = Color::new(0x0f, 0x17, 0x2a);

pub fn kind_color(kind: ArgumentKind) -> Color {
    match kind {
        ArgumentKind::RESOLUTION => RESOLUTION_BLUE,
        ArgumentKind::SUPPORT => SUPPORT_GREEN,
        ArgumentKind::REFUTE => REFUTE_RED,
        _ => FALLBACK_PURPLE,
    }
}

/// Character budget for node captions.
pub const LABEL_LIMIT: usize = 15;

/// Shorten a statement for display under its circle. The stored label is
/// never touched; only the caption is bounded.
pub fn truncate_label(label: &str, limit: usize) -> String {
    if label.chars().count() <= limit {
        return label.to_string();
    }
    let mut out: String = label.chars().take(limit).collect();
    out.push_str("...");
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub relation: RelationKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeSprite {
    pub index: NodeIndex,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
    pub caption: String,
}

/// Everything a painter needs for one frame, in paint order: edges first,
/// then nodes on top.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub edges: Vec<EdgeSegment>,
    pub nodes: Vec<NodeSprite>,
}

/// Snapshot the arena's current positions into paintable primitives.
///
/// Endpoints come from the edge's resolved indices, so a segment always
/// matches the positions its nodes have right now.
pub fn build_scene(arena: &GraphArena) -> Scene {
    let edges = arena
        .edges()
        .iter()
        .map(|edge| EdgeSegment {
            from: arena[edge.source_idx].pos,
            to: arena[edge.target_idx].pos,
            relation: edge.relation,
        })
        .collect();

    let nodes = arena
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, node)| NodeSprite {
            index: NodeIndex(i),
            pos: node.pos,
            radius: node.val,
            color: kind_color(node.kind),
            caption: truncate_label(&node.label, LABEL_LIMIT),
        })
        .collect();

    Scene { edges, nodes }
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a static SVG snapshot of the scene, used by the CLI exporter.
pub fn to_svg(scene: &Scene, width: f32, height: f32) -> String {
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(
        svg,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        CANVAS_BG.to_hex()
    );
    for edge in &scene.edges {
        let _ = writeln!(
            svg,
            r#"  <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-opacity="0.6" stroke-width="2"/>"#,
            edge.from.x,
            edge.from.y,
            edge.to.x,
            edge.to.y,
            EDGE_SLATE.to_hex()
        );
    }
    for node in &scene.nodes {
        let _ = writeln!(
            svg,
            r#"  <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="{}" stroke-width="3"/>"#,
            node.pos.x,
            node.pos.y,
            node.radius,
            node.color.to_hex(),
            NODE_OUTLINE.to_hex()
        );
        let _ = writeln!(
            svg,
            r#"  <text x="{:.1}" y="{:.1}" fill="white" font-size="12" text-anchor="middle">{}</text>"#,
            node.pos.x,
            node.pos.y + node.radius + 16.0,
            xml_escape(&node.caption)
        );
    }
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::sample_graph;

    #[test]
    fn test_palette_is_fixed() {
        assert_eq!(kind_color(ArgumentKind::RESOLUTION).to_hex(), "#3b82f6");
        assert_eq!(kind_color(ArgumentKind::SUPPORT).to_hex(), "#10b981");
        assert_eq!(kind_color(ArgumentKind::REFUTE).to_hex(), "#ef4444");
        assert_eq!(kind_color(ArgumentKind::EVIDENCE).to_hex(), "#8b5cf6");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 15), "short");
        assert_eq!(
            truncate_label("Should AI-generated content require a watermark?", 15),
            "Should AI-gener..."
        );
        // Bound counts characters, not bytes.
        assert_eq!(truncate_label("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_scene_edges_follow_current_positions() {
        let graph = sample_graph();
        let mut arena = GraphArena::build(&graph, Vec2::ZERO, 100.0);
        let idx = arena.index_of(&"root".into()).unwrap();
        arena[idx].pos = Vec2::new(77.0, -31.0);

        let scene = build_scene(&arena);
        for (segment, edge) in scene.edges.iter().zip(arena.edges()) {
            assert_eq!(segment.from, arena[edge.source_idx].pos);
            assert_eq!(segment.to, arena[edge.target_idx].pos);
        }
        // The moved node's outgoing edge picked up the new position.
        let touching = scene
            .edges
            .iter()
            .filter(|s| s.from == Vec2::new(77.0, -31.0) || s.to == Vec2::new(77.0, -31.0))
            .count();
        assert_eq!(touching, 2);
    }

    #[test]
    fn test_svg_snapshot_shape() {
        let graph = sample_graph();
        let arena = GraphArena::build(&graph, Vec2::new(400.0, 300.0), 100.0);
        let svg = to_svg(&build_scene(&arena), 800.0, 600.0);
        assert_eq!(svg.matches("<circle").count(), arena.node_count());
        assert_eq!(svg.matches("<line").count(), arena.edge_count());
        assert_eq!(svg.matches("<text").count(), arena.node_count());
        assert!(svg.contains("#3b82f6"));
    }
}
