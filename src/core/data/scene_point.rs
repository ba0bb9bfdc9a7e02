/// A position in scene units (the logical coordinate space of a built scene).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}
