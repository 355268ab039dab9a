use glam::DVec3;

use crate::landmark::PlacedLandmark;

/// Update per-landmark visibility against a viewer position.
///
/// Runs once per frame. Landmarks farther from the viewer than
/// `max_view_distance` are hidden. Without a viewer there is nothing to
/// cull and every landmark stays visible.
pub fn update_visibility(
    landmarks: &mut [PlacedLandmark],
    viewer: Option<DVec3>,
    max_view_distance: f64,
) {
    let Some(viewer) = viewer else {
        for landmark in landmarks.iter_mut() {
            landmark.visible = true;
        }
        return;
    };
    for landmark in landmarks.iter_mut() {
        landmark.visible = landmark.position.distance(viewer) <= max_view_distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DQuat;

    fn landmark_at(x: f64) -> PlacedLandmark {
        PlacedLandmark::new("Cz", DVec3::new(x, 0.0, 0.0), DQuat::IDENTITY)
    }

    #[test]
    fn test_distance_culling() {
        let mut landmarks = vec![landmark_at(0.5), landmark_at(3.0)];
        update_visibility(&mut landmarks, Some(DVec3::ZERO), 1.0);
        assert!(landmarks[0].visible);
        assert!(!landmarks[1].visible);
    }

    #[test]
    fn test_absent_viewer_disables_culling() {
        let mut landmarks = vec![landmark_at(0.5), landmark_at(3.0)];
        update_visibility(&mut landmarks, Some(DVec3::ZERO), 1.0);
        assert!(!landmarks[1].visible);

        update_visibility(&mut landmarks, None, 1.0);
        assert!(landmarks[0].visible);
        assert!(landmarks[1].visible);
    }
}
