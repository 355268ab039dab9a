use crate::anchor::{Anchor, FiducialPose};
use crate::errors::AlignmentError;

/// Whether a calibration has been committed for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalibrationState {
    /// Observations are accepted; no alignment has been committed.
    #[default]
    Uncalibrated,
    /// An alignment has been committed; observations are frozen.
    Calibrated,
}

/// Accumulates the most recent pose observation per anchor.
///
/// The registry owns a bounded map over the fixed anchor domain: at most
/// one observation is retained per anchor, later observations superseding
/// earlier ones until the calibration is committed.
#[derive(Debug, Clone, Default)]
pub struct FiducialRegistry {
    observations: [Option<FiducialPose>; 5],
    state: CalibrationState,
}

impl FiducialRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current calibration state.
    pub fn state(&self) -> CalibrationState {
        self.state
    }

    /// Record a marker observation from the detection stream.
    ///
    /// Ids outside the anchor domain are ignored, as is everything that
    /// arrives after the calibration has been committed.
    pub fn observe(&mut self, id: i32, pose: FiducialPose) {
        if self.state == CalibrationState::Calibrated {
            return;
        }
        let Some(anchor) = Anchor::from_raw(id) else {
            log::debug!("ignoring observation with unknown marker id {id}");
            return;
        };
        self.observations[anchor.index()] = Some(pose);
    }

    /// The latest observation for an anchor, if any.
    pub fn get(&self, anchor: Anchor) -> Option<&FiducialPose> {
        self.observations[anchor.index()].as_ref()
    }

    /// All five observations in id order.
    ///
    /// Fails with [`AlignmentError::Incomplete`] naming the missing anchors
    /// until every anchor has been observed at least once.
    pub fn try_get_all(&self) -> Result<[FiducialPose; 5], AlignmentError> {
        match self.observations {
            [Some(front), Some(back), Some(left), Some(right), Some(top)] => {
                Ok([front, back, left, right, top])
            }
            _ => Err(AlignmentError::Incomplete {
                missing: Anchor::ALL
                    .iter()
                    .copied()
                    .filter(|anchor| self.observations[anchor.index()].is_none())
                    .collect(),
            }),
        }
    }

    /// Freeze the registry after a committed calibration.
    pub fn freeze(&mut self) {
        self.state = CalibrationState::Calibrated;
    }

    /// Clear all observations and reopen the registry.
    pub fn reset(&mut self) {
        self.observations = [None; 5];
        self.state = CalibrationState::Uncalibrated;
    }
}
