use glam::{DQuat, DVec3};

/// A layout point instantiated in the scene.
///
/// Created once by the projector; afterwards only the visibility flag is
/// mutated, never the placement itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLandmark {
    /// Landmark label, matching its layout point.
    pub name: String,
    /// World position after projection.
    pub position: DVec3,
    /// World orientation, up-axis toward the head center on a hit.
    pub orientation: DQuat,
    /// Whether the landmark is currently displayed.
    pub visible: bool,
}

impl PlacedLandmark {
    /// Create a visible landmark at a pose.
    pub fn new(name: impl Into<String>, position: DVec3, orientation: DQuat) -> Self {
        Self {
            name: name.into(),
            position,
            orientation,
            visible: true,
        }
    }
}
