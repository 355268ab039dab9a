#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Per-frame visibility culling.
pub mod culling;

/// The alignment frame, manual offset, and their composition.
pub mod frame;

/// Placed landmark scene objects.
pub mod landmark;

/// Name-to-world-position resolution over placed landmarks.
pub mod locator;

/// Projection of layout points onto a target surface.
pub mod projector;

/// Calibration session orchestration and collaborator seams.
pub mod session;

pub use culling::update_visibility;
pub use frame::{AlignmentFrame, HeadFrame, ManualOffset};
pub use landmark::PlacedLandmark;
pub use locator::LandmarkLocator;
pub use projector::{project_layout, ProjectorConfig};
pub use session::{AlignmentDiagnostics, CalibrationSession, FiducialDisplay};
