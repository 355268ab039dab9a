use std::collections::HashMap;

use glam::DVec3;

use crate::landmark::PlacedLandmark;

/// Resolves landmark names to their instantiated world positions.
///
/// Unknown names resolve to the zero vector rather than an error: callers
/// combining pairs tolerate a missing landmark degrading to a zero
/// contribution.
#[derive(Debug, Clone, Default)]
pub struct LandmarkLocator {
    positions: HashMap<String, DVec3>,
}

impl LandmarkLocator {
    /// Build a locator over a set of placed landmarks.
    pub fn from_landmarks(landmarks: &[PlacedLandmark]) -> Self {
        Self {
            positions: landmarks
                .iter()
                .map(|landmark| (landmark.name.clone(), landmark.position))
                .collect(),
        }
    }

    /// Current world position of a landmark, zero vector if unknown.
    pub fn position_of(&self, name: &str) -> DVec3 {
        self.positions.get(name).copied().unwrap_or(DVec3::ZERO)
    }

    /// Midpoint of two landmarks resolved by name.
    pub fn midpoint(&self, name_a: &str, name_b: &str) -> DVec3 {
        Self::midpoint_of(self.position_of(name_a), self.position_of(name_b))
    }

    /// Midpoint of two resolved positions.
    pub fn midpoint_of(a: DVec3, b: DVec3) -> DVec3 {
        (a + b) * 0.5
    }
}
