use agora_graph::SimulationParams;

/// User-adjustable view options, applied when the layout is reheated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphSettings {
    pub link_distance: f32,
    pub charge_strength: f32,
    pub show_labels: bool,
}

impl Default for GraphSettings {
    fn default() -> Self {
        let defaults = SimulationParams::default();
        Self {
            link_distance: defaults.link_distance,
            charge_strength: defaults.charge_strength,
            show_labels: true,
        }
    }
}

impl GraphSettings {
    pub fn simulation_params(&self) -> SimulationParams {
        SimulationParams {
            link_distance: self.link_distance,
            charge_strength: self.charge_strength,
            ..SimulationParams::default()
        }
    }
}
