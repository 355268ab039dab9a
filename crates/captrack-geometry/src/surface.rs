use glam::DVec3;

use crate::ray::{Ray, RayHit};

/// A surface that can answer nearest-hit ray queries.
pub trait Surface {
    /// Intersect a ray with the surface.
    ///
    /// Returns the nearest intersection within `max_distance` in front of
    /// the ray origin, or `None` when the ray misses.
    fn raycast(&self, ray: &Ray, max_distance: f64) -> Option<RayHit>;
}

/// A sphere surface.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: DVec3,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere from a center and radius.
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Surface for Sphere {
    fn raycast(&self, ray: &Ray, max_distance: f64) -> Option<RayHit> {
        let oc = ray.origin - self.center;
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();

        // Nearest root in front of the origin; the far root covers rays
        // starting inside the sphere.
        let mut t = -b - sqrt_d;
        if t < 0.0 {
            t = -b + sqrt_d;
        }
        if t < 0.0 || t > max_distance {
            return None;
        }

        Some(RayHit {
            point: ray.at(t),
            distance: t,
        })
    }
}

/// Axis-aligned bounding box surface.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the box.
    pub min: DVec3,
    /// Maximum corner of the box.
    pub max: DVec3,
}

impl Aabb {
    /// Create an AABB from min and max corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from a center position and size.
    pub fn from_center_size(center: DVec3, size: DVec3) -> Self {
        let half_size = size * 0.5;
        Self {
            min: center - half_size,
            max: center + half_size,
        }
    }
}

impl Surface for Aabb {
    fn raycast(&self, ray: &Ray, max_distance: f64) -> Option<RayHit> {
        let inv_dir = DVec3::new(
            1.0 / ray.direction.x,
            1.0 / ray.direction.y,
            1.0 / ray.direction.z,
        );

        let t1 = (self.min.x - ray.origin.x) * inv_dir.x;
        let t2 = (self.max.x - ray.origin.x) * inv_dir.x;
        let t3 = (self.min.y - ray.origin.y) * inv_dir.y;
        let t4 = (self.max.y - ray.origin.y) * inv_dir.y;
        let t5 = (self.min.z - ray.origin.z) * inv_dir.z;
        let t6 = (self.max.z - ray.origin.z) * inv_dir.z;

        let tmin = t1.min(t2).max(t3.min(t4)).max(t5.min(t6));
        let tmax = t1.max(t2).min(t3.max(t4)).min(t5.max(t6));

        // tmax < 0: the whole box is behind the origin.
        if tmax < 0.0 || tmin > tmax {
            return None;
        }

        // tmin < 0: the origin is inside the box.
        let t = if tmin < 0.0 { tmax } else { tmin };
        if t > max_distance {
            return None;
        }

        Some(RayHit {
            point: ray.at(t),
            distance: t,
        })
    }
}

/// A collection of surfaces grouped by a named layer.
///
/// This is the seam a host physics engine plugs into: queries are scoped
/// to one layer and return the nearest hit among that layer's surfaces.
#[derive(Default)]
pub struct SurfaceSet {
    surfaces: Vec<(String, Box<dyn Surface>)>,
}

impl SurfaceSet {
    /// Create an empty surface set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a surface under a layer name.
    pub fn insert(&mut self, layer: impl Into<String>, surface: Box<dyn Surface>) {
        self.surfaces.push((layer.into(), surface));
    }

    /// Number of registered surfaces across all layers.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// Check whether the set holds no surfaces.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Nearest hit among the surfaces of `layer` within `max_distance`.
    pub fn raycast_layer(&self, ray: &Ray, max_distance: f64, layer: &str) -> Option<RayHit> {
        self.surfaces
            .iter()
            .filter(|(name, _)| name == layer)
            .filter_map(|(_, surface)| surface.raycast(ray, max_distance))
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_hit_from_outside() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0);
        let ray = Ray::new(DVec3::new(0.0, 0.0, 3.0), DVec3::new(0.0, 0.0, -1.0));

        let hit = sphere.raycast(&ray, 10.0).unwrap();
        assert_relative_eq!(hit.distance, 2.0, epsilon = 1e-12);
        assert_relative_eq!(hit.point.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0);
        let ray = Ray::new(DVec3::ZERO, DVec3::X);

        let hit = sphere.raycast(&ray, 10.0).unwrap();
        assert_relative_eq!(hit.distance, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0);
        let ray = Ray::new(DVec3::new(0.0, 2.0, 3.0), DVec3::new(0.0, 0.0, -1.0));
        assert!(sphere.raycast(&ray, 10.0).is_none());
    }

    #[test]
    fn test_sphere_beyond_max_distance() {
        let sphere = Sphere::new(DVec3::ZERO, 1.0);
        let ray = Ray::new(DVec3::new(0.0, 0.0, 3.0), DVec3::new(0.0, 0.0, -1.0));
        assert!(sphere.raycast(&ray, 1.5).is_none());
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = Aabb::from_center_size(DVec3::ZERO, DVec3::ONE);
        let ray = Ray::new(DVec3::new(0.0, 0.0, 2.0), DVec3::new(0.0, 0.0, -1.0));

        let hit = aabb.raycast(&ray, 10.0).unwrap();
        assert_relative_eq!(hit.distance, 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_aabb_miss() {
        let aabb = Aabb::from_center_size(DVec3::ZERO, DVec3::ONE);
        let ray = Ray::new(DVec3::new(2.0, 0.0, 2.0), DVec3::new(0.0, 0.0, -1.0));
        assert!(aabb.raycast(&ray, 10.0).is_none());
    }

    #[test]
    fn test_layered_query_picks_nearest_in_layer() {
        let mut set = SurfaceSet::new();
        set.insert("head", Box::new(Sphere::new(DVec3::ZERO, 1.0)));
        set.insert("head", Box::new(Sphere::new(DVec3::ZERO, 2.0)));
        set.insert("table", Box::new(Sphere::new(DVec3::ZERO, 2.5)));

        let ray = Ray::new(DVec3::new(0.0, 0.0, 5.0), DVec3::new(0.0, 0.0, -1.0));

        // nearest hit in the queried layer is the outer head sphere
        let hit = set.raycast_layer(&ray, 10.0, "head").unwrap();
        assert_relative_eq!(hit.distance, 3.0, epsilon = 1e-12);

        // the other layer is not consulted
        let hit = set.raycast_layer(&ray, 10.0, "table").unwrap();
        assert_relative_eq!(hit.distance, 2.5, epsilon = 1e-12);

        assert!(set.raycast_layer(&ray, 10.0, "floor").is_none());
    }
}
