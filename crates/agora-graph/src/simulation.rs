use crate::graph::{GraphArena, NodeIndex, Vec2};

/// Tuning knobs for the force simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimulationParams {
    /// Rest length an edge pulls its endpoints toward.
    pub link_distance: f32,
    pub link_strength: f32,
    /// Pairwise repulsion scale; falls off inversely with distance.
    pub charge_strength: f32,
    /// Pull of every node toward the layout center.
    pub center_strength: f32,
    /// Velocity kept per tick after forces apply (1.0 = frictionless).
    pub velocity_decay: f32,
    /// Below this alpha the simulation is considered converged.
    pub alpha_min: f32,
    pub alpha_decay: f32,
    /// Alpha target while a drag is in progress, so neighbors keep moving.
    pub drag_alpha_target: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            link_distance: 120.0,
            link_strength: 0.1,
            charge_strength: 2500.0,
            center_strength: 0.05,
            velocity_decay: 0.6,
            alpha_min: 0.001,
            alpha_decay: 0.0228,
            drag_alpha_target: 0.3,
        }
    }
}

/// Cooperative, tick-driven force layout.
///
/// The host schedules `tick` (an egui frame loop, or a plain loop in the
/// CLI); nothing here spawns threads or owns a clock. One tick fully
/// applies every position mutation before it returns, so a paint that
/// follows a tick never sees a half-updated layout.
#[derive(Debug)]
pub struct ForceSimulation {
    params: SimulationParams,
    center: Vec2,
    alpha: f32,
    alpha_target: f32,
}

impl ForceSimulation {
    pub fn new(center: Vec2, params: SimulationParams) -> Self {
        Self {
            params,
            center,
            alpha: 1.0,
            alpha_target: 0.0,
        }
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Whether another tick is wanted. A drag in progress keeps the
    /// simulation warm through its raised alpha target.
    pub fn active(&self) -> bool {
        self.alpha >= self.params.alpha_min || self.alpha_target > 0.0
    }

    /// Raise the alpha target so the layout visibly responds to a drag.
    pub fn reheat(&mut self) {
        self.alpha_target = self.params.drag_alpha_target;
    }

    /// Drop the alpha target back to zero; the layout cools naturally.
    pub fn cool(&mut self) {
        self.alpha_target = 0.0;
    }

    /// Restart from full energy, e.g. for a freshly built arena.
    pub fn restart(&mut self) {
        self.alpha = 1.0;
    }

    /// Advance the simulation one step. Returns whether it is still active.
    pub fn tick(&mut self, arena: &mut GraphArena) -> bool {
        if !self.active() {
            return false;
        }
        self.alpha += (self.alpha_target - self.alpha) * self.params.alpha_decay;

        let mut forces = vec![Vec2::ZERO; arena.node_count()];
        self.accumulate_link_forces(arena, &mut forces);
        self.accumulate_charge_forces(arena, &mut forces);
        self.accumulate_center_forces(arena, &mut forces);
        self.integrate(arena, &forces);

        self.active()
    }

    /// Connected nodes spring toward `link_distance` apart.
    fn accumulate_link_forces(&self, arena: &GraphArena, forces: &mut [Vec2]) {
        for edge in arena.edges() {
            let source = &arena[edge.source_idx];
            let target = &arena[edge.target_idx];
            let delta = target.pos - source.pos;
            let dist = delta.length().max(1.0);
            let stretch = (dist - self.params.link_distance) / dist;
            let pull = delta * (stretch * self.params.link_strength * self.alpha * 0.5);
            forces[edge.source_idx.0] += pull;
            forces[edge.target_idx.0] += pull * -1.0;
        }
    }

    /// Every pair repels, inversely with distance, so nodes never stack.
    fn accumulate_charge_forces(&self, arena: &GraphArena, forces: &mut [Vec2]) {
        let nodes = arena.nodes();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let delta = nodes[j].pos - nodes[i].pos;
                let dist_sq = (delta.x * delta.x + delta.y * delta.y).max(1.0);
                let push = delta * (self.params.charge_strength * self.alpha / dist_sq);
                forces[i] += push * -1.0;
                forces[j] += push;
            }
        }
    }

    fn accumulate_center_forces(&self, arena: &GraphArena, forces: &mut [Vec2]) {
        for (i, node) in arena.nodes().iter().enumerate() {
            forces[i] += (self.center - node.pos) * (self.params.center_strength * self.alpha);
        }
    }

    /// Apply accumulated forces. Pinned nodes stay exactly where the drag
    /// put them and carry no velocity into release.
    fn integrate(&self, arena: &mut GraphArena, forces: &[Vec2]) {
        for (i, node) in arena.nodes_mut().iter_mut().enumerate() {
            if let Some(pin) = node.pin {
                node.pos = pin;
                node.vel = Vec2::ZERO;
                continue;
            }
            node.vel = (node.vel + forces[i]) * self.params.velocity_decay;
            node.pos += node.vel;
        }
    }

    /// Run ticks until convergence or `max_ticks`, whichever comes first.
    /// Returns the number of ticks executed. Headless hosts (CLI export,
    /// tests) use this instead of a frame loop.
    pub fn run_to_rest(&mut self, arena: &mut GraphArena, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks && self.tick(arena) {
            ticks += 1;
        }
        ticks
    }

    /// Convenience used by drag handling: pin, and keep the layout warm.
    pub fn begin_drag(&mut self, arena: &mut GraphArena, idx: NodeIndex, pos: Vec2) {
        arena.pin_node(idx, pos);
        self.reheat();
    }

    pub fn drag_to(&self, arena: &mut GraphArena, idx: NodeIndex, pos: Vec2) {
        arena.pin_node(idx, pos);
    }

    pub fn end_drag(&mut self, arena: &mut GraphArena, idx: NodeIndex) {
        arena.release_node(idx);
        self.cool();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::tests::sample_graph;
    use proptest::prelude::*;

    fn arena() -> GraphArena {
        GraphArena::build(&sample_graph(), Vec2::ZERO, 100.0)
    }

    #[test]
    fn test_converges_within_tick_budget() {
        let mut arena = arena();
        let mut sim = ForceSimulation::new(Vec2::ZERO, SimulationParams::default());
        let ticks = sim.run_to_rest(&mut arena, 1_000);
        assert!(ticks < 1_000, "simulation never cooled ({ticks} ticks)");
        assert!(!sim.active());
        for node in arena.nodes() {
            assert!(node.pos.x.is_finite() && node.pos.y.is_finite());
        }
    }

    #[test]
    fn test_nodes_spread_apart() {
        let mut arena = arena();
        let mut sim = ForceSimulation::new(Vec2::ZERO, SimulationParams::default());
        sim.run_to_rest(&mut arena, 1_000);
        let nodes = arena.nodes();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let dist = (nodes[i].pos - nodes[j].pos).length();
                assert!(dist > 1.0, "nodes {i} and {j} collapsed onto each other");
            }
        }
    }

    #[test]
    fn test_pinned_node_tracks_pin_exactly_each_tick() {
        let mut arena = arena();
        let mut sim = ForceSimulation::new(Vec2::ZERO, SimulationParams::default());
        let idx = NodeIndex(1);
        let held = Vec2::new(200.0, -50.0);
        sim.begin_drag(&mut arena, idx, held);
        for _ in 0..50 {
            sim.tick(&mut arena);
            assert_eq!(arena[idx].pos, held);
        }
    }

    #[test]
    fn test_released_node_moves_again() {
        let mut arena = arena();
        let mut sim = ForceSimulation::new(Vec2::ZERO, SimulationParams::default());
        let idx = NodeIndex(1);
        let held = Vec2::new(400.0, 400.0);
        sim.begin_drag(&mut arena, idx, held);
        for _ in 0..10 {
            sim.tick(&mut arena);
        }
        sim.end_drag(&mut arena, idx);
        sim.reheat();
        for _ in 0..10 {
            sim.tick(&mut arena);
        }
        assert_ne!(arena[idx].pos, held, "released node never moved");
    }

    #[test]
    fn test_reheat_reactivates_converged_simulation() {
        let mut arena = arena();
        let mut sim = ForceSimulation::new(Vec2::ZERO, SimulationParams::default());
        sim.run_to_rest(&mut arena, 1_000);
        assert!(!sim.active());
        sim.reheat();
        assert!(sim.active());
        assert!(sim.tick(&mut arena));
        sim.cool();
        let ticks = sim.run_to_rest(&mut arena, 1_000);
        assert!(ticks < 1_000);
    }

    proptest! {
        #[test]
        fn prop_pin_holds_anywhere(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            ticks in 1usize..100,
        ) {
            let mut arena = arena();
            let mut sim = ForceSimulation::new(Vec2::ZERO, SimulationParams::default());
            let idx = NodeIndex(2);
            let held = Vec2::new(x, y);
            sim.begin_drag(&mut arena, idx, held);
            for _ in 0..ticks {
                sim.tick(&mut arena);
            }
            prop_assert_eq!(arena[idx].pos, held);
        }
    }

    #[test]
    fn test_linked_nodes_settle_near_link_distance() {
        let mut arena = arena();
        let params = SimulationParams::default();
        let mut sim = ForceSimulation::new(Vec2::ZERO, params);
        sim.run_to_rest(&mut arena, 1_000);
        for edge in arena.edges() {
            let dist = (arena[edge.source_idx].pos - arena[edge.target_idx].pos).length();
            assert!(
                dist < params.link_distance * 4.0,
                "linked pair drifted to {dist}"
            );
        }
    }
}
