#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Anchor roles and role-indexed point quintets.
pub mod anchor;

/// Error types for registration and solving.
pub mod errors;

/// The fiducial observation registry and calibration state machine.
pub mod registry;

/// The closed-form similarity alignment solver.
pub mod solver;

pub use anchor::{Anchor, AnchorSet, FiducialPose};
pub use errors::{AlignmentError, Baseline};
pub use registry::{CalibrationState, FiducialRegistry};
pub use solver::{solve, AlignmentResult};
