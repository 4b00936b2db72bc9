pub mod graph;
pub mod scene;
pub mod simulation;

pub use graph::{EdgeIndex, GraphArena, NodeIndex, SimEdge, SimNode, Vec2};
pub use scene::{
    Color, EdgeSegment, LABEL_LIMIT, NodeSprite, Scene, build_scene, kind_color, to_svg,
    truncate_label,
};
pub use simulation::{ForceSimulation, SimulationParams};
