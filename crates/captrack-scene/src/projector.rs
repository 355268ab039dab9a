use glam::{DQuat, DVec3};

use captrack_geometry::{Ray, SurfaceSet};
use captrack_layout::Layout;

use crate::landmark::PlacedLandmark;

/// Configuration for the one-shot layout projection.
#[derive(Debug, Clone)]
pub struct ProjectorConfig {
    /// World-space origin the cap layout is spawned around.
    pub spawn_origin: DVec3,
    /// Interior reference point the projection rays aim at.
    pub head_center: DVec3,
    /// Uniform scale from cap-native units to world units.
    pub pre_scale: f64,
    /// Upper bound on the projection ray length.
    pub max_ray_distance: f64,
    /// Surface layer the rays are restricted to.
    pub surface_layer: String,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            spawn_origin: DVec3::ZERO,
            head_center: DVec3::ZERO,
            // unit-sphere cap coordinates to an adult head radius, meters
            pre_scale: 0.095,
            max_ray_distance: 1.0,
            surface_layer: "head".to_string(),
        }
    }
}

/// Map a cap-native position into world axes.
///
/// The cap frame is x-anterior, y-left, z-superior; the world frame is
/// X-right, Y-up, Z-forward, so `(x, y, z)` lands on `(-y, z, x)`.
#[inline]
fn remap_axes(local: [f64; 3]) -> DVec3 {
    DVec3::new(-local[1], local[2], local[0])
}

/// Project every layout point onto the target surface layer.
///
/// Deterministic and one-shot: each layout point produces exactly one
/// placed landmark, and placements are never re-evaluated afterwards.
///
/// Per point: the candidate world position is the remapped, pre-scaled
/// local position offset from the spawn origin. A ray from the candidate
/// toward the head center is intersected with the configured layer; on a
/// hit the landmark moves to the hit point with its up-axis turned toward
/// the head center, on a miss it keeps the candidate position and default
/// orientation.
pub fn project_layout(
    layout: &Layout,
    surfaces: &SurfaceSet,
    config: &ProjectorConfig,
) -> Vec<PlacedLandmark> {
    layout
        .all()
        .iter()
        .map(|point| {
            let candidate = config.spawn_origin + config.pre_scale * remap_axes(point.local_position);
            let inward = (config.head_center - candidate).normalize_or_zero();
            if inward == DVec3::ZERO {
                // candidate sits on the reference point, nothing to aim at
                return PlacedLandmark::new(point.name.clone(), candidate, DQuat::IDENTITY);
            }

            let ray = Ray::new(candidate, inward);
            match surfaces.raycast_layer(&ray, config.max_ray_distance, &config.surface_layer) {
                Some(hit) => {
                    let orientation = DQuat::from_rotation_arc(DVec3::Y, inward);
                    PlacedLandmark::new(point.name.clone(), hit.point, orientation)
                }
                None => PlacedLandmark::new(point.name.clone(), candidate, DQuat::IDENTITY),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use captrack_geometry::Sphere;
    use captrack_layout::{Layout, LayoutPoint};

    fn single_point_layout(name: &str, local: [f64; 3]) -> Layout {
        Layout::from_points(vec![LayoutPoint {
            name: name.to_string(),
            local_position: local,
        }])
        .unwrap()
    }

    #[test]
    fn test_axis_remap_and_pre_scale() {
        let layout = single_point_layout("Cz", [0.0, 0.0, 1.0]);
        let config = ProjectorConfig {
            pre_scale: 2.0,
            ..Default::default()
        };

        // no surfaces: the candidate position is kept as-is
        let placed = project_layout(&layout, &SurfaceSet::new(), &config);
        assert_eq!(placed.len(), 1);
        // cap-superior maps to world up
        assert_relative_eq!(placed[0].position.y, 2.0, epsilon = 1e-12);
        assert_eq!(placed[0].orientation, DQuat::IDENTITY);
        assert!(placed[0].visible);
    }

    #[test]
    fn test_projection_pulls_onto_surface() {
        let layout = single_point_layout("Cz", [0.0, 0.0, 1.0]);
        let config = ProjectorConfig {
            pre_scale: 2.0,
            ..Default::default()
        };
        let mut surfaces = SurfaceSet::new();
        surfaces.insert("head", Box::new(Sphere::new(DVec3::ZERO, 1.0)));

        let placed = project_layout(&layout, &surfaces, &config);
        // candidate at (0, 2, 0) projects down onto the unit sphere
        assert_relative_eq!(placed[0].position.y, 1.0, epsilon = 1e-12);
        // up-axis turned toward the head center
        let up = placed[0].orientation * DVec3::Y;
        assert_relative_eq!(up.y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_projection_ignores_other_layers() {
        let layout = single_point_layout("Cz", [0.0, 0.0, 1.0]);
        let config = ProjectorConfig {
            pre_scale: 2.0,
            ..Default::default()
        };
        let mut surfaces = SurfaceSet::new();
        surfaces.insert("table", Box::new(Sphere::new(DVec3::ZERO, 1.0)));

        let placed = project_layout(&layout, &surfaces, &config);
        assert_relative_eq!(placed[0].position.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let layout = Layout::standard_cap().unwrap();
        let config = ProjectorConfig::default();
        let mut surfaces = SurfaceSet::new();
        surfaces.insert("head", Box::new(Sphere::new(DVec3::ZERO, 0.09)));

        let first = project_layout(&layout, &surfaces, &config);
        let second = project_layout(&layout, &surfaces, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_nearest_surface_wins() {
        let layout = single_point_layout("Cz", [0.0, 0.0, 1.0]);
        let config = ProjectorConfig {
            pre_scale: 2.0,
            ..Default::default()
        };
        let mut surfaces = SurfaceSet::new();
        surfaces.insert("head", Box::new(Sphere::new(DVec3::ZERO, 1.0)));
        surfaces.insert("head", Box::new(Sphere::new(DVec3::ZERO, 1.5)));

        let placed = project_layout(&layout, &surfaces, &config);
        // the outer sphere occludes the inner one along the ray
        assert_relative_eq!(placed[0].position.y, 1.5, epsilon = 1e-12);
    }
}
