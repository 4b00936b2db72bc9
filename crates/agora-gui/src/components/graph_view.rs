use crate::components::graph_canvas::GraphCanvas;
use crate::components::sidebar::Sidebar;
use crate::settings::GraphSettings;
use agora_core::{DebateGraph, DebateId};
use agora_graph::{ForceSimulation, GraphArena, Vec2};
use eframe::egui;

/// Initial ring radius for freshly placed nodes.
const SPREAD: f32 = 150.0;

/// One debate's live view: arena, simulation, canvas and detail sidebar.
///
/// Built fresh whenever a load finishes, dropped when the identifier
/// changes or the user navigates back. Dropping it stops the simulation
/// with it, so nothing ever ticks into a disposed view.
pub struct GraphView {
    debate_id: DebateId,
    arena: GraphArena,
    sim: ForceSimulation,
    canvas: GraphCanvas,
    sidebar: Sidebar,
}

impl GraphView {
    pub fn new(graph: &DebateGraph, settings: &GraphSettings) -> Self {
        for issue in graph.validate() {
            tracing::warn!("debate {} graph issue: {issue:?}", graph.debate_id);
        }
        Self {
            debate_id: graph.debate_id.clone(),
            arena: GraphArena::build(graph, Vec2::ZERO, SPREAD),
            sim: ForceSimulation::new(Vec2::ZERO, settings.simulation_params()),
            canvas: GraphCanvas::new(),
            sidebar: Sidebar::new(),
        }
    }

    pub fn debate_id(&self) -> &DebateId {
        &self.debate_id
    }

    pub fn node_count(&self) -> usize {
        self.arena.node_count()
    }

    /// Swap in new simulation parameters and restart from full energy.
    pub fn apply_settings(&mut self, settings: &GraphSettings) {
        self.sim = ForceSimulation::new(Vec2::ZERO, settings.simulation_params());
    }

    pub fn ui(&mut self, ctx: &egui::Context, settings: &GraphSettings) {
        // Tick fully before any paint reads positions.
        if self.sim.tick(&mut self.arena) {
            ctx.request_repaint();
        }

        self.sidebar.ui(ctx, &self.arena);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let output = self.canvas.show(
                    ui,
                    rect,
                    &mut self.arena,
                    &mut self.sim,
                    self.sidebar.selected(),
                    settings,
                );

                if let Some(idx) = output.clicked_node {
                    self.sidebar.select(idx);
                }
            });
    }
}
