use glam::DVec3;

/// A ray in world space.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin of the ray.
    pub origin: DVec3,
    /// Direction of the ray.
    pub direction: DVec3,
}

impl Ray {
    /// Create a ray from an origin and a direction.
    ///
    /// The direction is normalized so that hit distances are metric.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Create a ray from an origin pointing toward a target point.
    pub fn toward(origin: DVec3, target: DVec3) -> Self {
        Self::new(origin, target - origin)
    }

    /// The point at parameter `t` along the ray.
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}

/// Result of a successful raycast.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// Position where the ray hit the surface.
    pub point: DVec3,
    /// Distance from the ray origin to the hit point.
    pub distance: f64,
}
