use crate::settings::GraphSettings;
use crate::theme;
use agora_graph::{ForceSimulation, GraphArena, NodeIndex, Scene, Vec2, build_scene};
use eframe::egui;

// Responsibility checklist for the custom canvas:
// - Edges, node circles and captions from the current simulation positions
// - Hover, click-to-select, node drag (pin) vs background drag (pan)
// - Zoom about the pointer, with stroke widths following the zoom
// - Selection ring for the sidebar's current node
//
// Drag pinning mutates the arena *before* the scene is built, so the
// painted node sits under the pointer in the same frame.

#[derive(Debug, Default)]
pub struct CanvasOutput {
    pub clicked_node: Option<NodeIndex>,
    pub hovered_node: Option<NodeIndex>,
}

#[derive(Clone, Copy)]
struct PanDrag {
    start_pan: egui::Vec2,
    start_pos: egui::Pos2,
}

pub struct GraphCanvas {
    zoom: f32,
    pan: egui::Vec2,
    pan_drag: Option<PanDrag>,
    dragging_node: Option<NodeIndex>,
}

impl GraphCanvas {
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: egui::Vec2::ZERO,
            pan_drag: None,
            dragging_node: None,
        }
    }

    fn graph_to_screen(&self, center: egui::Pos2, p: Vec2) -> egui::Pos2 {
        center + self.pan + egui::vec2(p.x * self.zoom, p.y * self.zoom)
    }

    fn screen_to_graph(&self, center: egui::Pos2, p: egui::Pos2) -> Vec2 {
        let rel = p - center - self.pan;
        Vec2::new(rel.x / self.zoom, rel.y / self.zoom)
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        rect: egui::Rect,
        arena: &mut GraphArena,
        sim: &mut ForceSimulation,
        selected: Option<NodeIndex>,
        settings: &GraphSettings,
    ) -> CanvasOutput {
        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, theme::BACKGROUND);

        let center = rect.center();
        let mut output = CanvasOutput::default();

        // Zoom about the pointer so the point under the cursor stays put.
        let zoom_delta = ui.input(|i| i.zoom_delta());
        if response.hovered() && (zoom_delta - 1.0).abs() > f32::EPSILON {
            let prev_zoom = self.zoom;
            self.zoom = (self.zoom * zoom_delta).clamp(0.2, 4.0);
            if let Some(pointer) = response.hover_pos() {
                let rel = pointer - center - self.pan;
                let graph_pos = Vec2::new(rel.x / prev_zoom, rel.y / prev_zoom);
                let new_screen = self.graph_to_screen(center, graph_pos);
                self.pan += pointer - new_screen;
            }
        }

        let pointer_graph = response
            .hover_pos()
            .map(|pointer| self.screen_to_graph(center, pointer));
        output.hovered_node = pointer_graph.and_then(|p| arena.node_at(p));

        if response.clicked() {
            output.clicked_node = output.hovered_node;
        }

        // Node drag wins over pan; pan only starts on empty canvas.
        if response.drag_started() {
            if let (Some(idx), Some(p)) = (output.hovered_node, pointer_graph) {
                self.dragging_node = Some(idx);
                sim.begin_drag(arena, idx, p);
            } else if let Some(pointer) = response.interact_pointer_pos() {
                self.pan_drag = Some(PanDrag {
                    start_pan: self.pan,
                    start_pos: pointer,
                });
            }
        }

        if let Some(idx) = self.dragging_node {
            if let Some(pointer) = response.interact_pointer_pos() {
                sim.drag_to(arena, idx, self.screen_to_graph(center, pointer));
            }
            if ui.input(|i| !i.pointer.primary_down()) {
                self.dragging_node = None;
                sim.end_drag(arena, idx);
            }
        } else if response.dragged() {
            if let (Some(drag), Some(pointer)) = (self.pan_drag, response.interact_pointer_pos()) {
                self.pan = drag.start_pan + (pointer - drag.start_pos);
            }
        }
        if self.pan_drag.is_some() && ui.input(|i| !i.pointer.primary_down()) {
            self.pan_drag = None;
        }

        let scene = build_scene(arena);
        self.paint(&painter, center, &scene, output.hovered_node, selected, settings);

        if output.hovered_node.is_some() {
            ui.output_mut(|o| o.cursor_icon = egui::CursorIcon::PointingHand);
        }

        output
    }

    fn paint(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        scene: &Scene,
        hovered: Option<NodeIndex>,
        selected: Option<NodeIndex>,
        settings: &GraphSettings,
    ) {
        let edge_stroke = egui::Stroke::new(
            2.0 * self.zoom,
            theme::with_alpha(agora_graph::scene::EDGE_SLATE, 153),
        );
        for edge in &scene.edges {
            painter.line_segment(
                [
                    self.graph_to_screen(center, edge.from),
                    self.graph_to_screen(center, edge.to),
                ],
                edge_stroke,
            );
        }

        let outline = theme::color32(agora_graph::scene::NODE_OUTLINE);
        for node in &scene.nodes {
            let pos = self.graph_to_screen(center, node.pos);
            let radius = node.radius * self.zoom;
            painter.circle_filled(pos, radius, theme::color32(node.color));
            painter.circle_stroke(pos, radius, egui::Stroke::new(3.0 * self.zoom, outline));

            let ring = if selected == Some(node.index) {
                Some(egui::Color32::WHITE)
            } else if hovered == Some(node.index) {
                Some(egui::Color32::from_white_alpha(140))
            } else {
                None
            };
            if let Some(color) = ring {
                painter.circle_stroke(
                    pos,
                    radius + 3.0 * self.zoom,
                    egui::Stroke::new(1.5 * self.zoom, color),
                );
            }

            if settings.show_labels {
                painter.text(
                    egui::pos2(pos.x, pos.y + radius + 6.0 * self.zoom),
                    egui::Align2::CENTER_TOP,
                    &node.caption,
                    egui::FontId::proportional((12.0 * self.zoom).max(8.0)),
                    egui::Color32::WHITE,
                );
            }
        }
    }
}
