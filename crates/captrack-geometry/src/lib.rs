#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Ray types for surface queries.
pub mod ray;

/// Surface primitives and the layered raycast query.
pub mod surface;

pub use ray::{Ray, RayHit};
pub use surface::{Aabb, Sphere, Surface, SurfaceSet};
