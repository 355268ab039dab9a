use captrack_align::{
    solve, AlignmentError, AlignmentResult, Anchor, AnchorSet, FiducialPose, FiducialRegistry,
};

use crate::frame::AlignmentFrame;
use crate::locator::LandmarkLocator;

/// Visibility control over the marker visualization collaborator.
///
/// The session hides the markers once a calibration is committed and
/// shows them again on reset.
pub trait FiducialDisplay {
    /// Show or hide the marker visualization.
    fn set_visible(&mut self, visible: bool);
}

/// Optional observer of every solve, for diagnostic rendering.
///
/// Production and diagnostics see the output of the identical solve call,
/// so the two paths cannot diverge.
pub trait AlignmentDiagnostics {
    /// Called after each successful solve, before it is committed.
    fn on_solve(&mut self, reference: &AnchorSet, observed: &AnchorSet, result: &AlignmentResult);
}

/// Electrode pair whose midpoint anchors a marker role.
fn anchor_pair(anchor: Anchor) -> (&'static str, &'static str) {
    match anchor {
        Anchor::Front => ("AFz", "Fpz"),
        Anchor::Back => ("OI1h", "OI2h"),
        Anchor::Left => ("C5", "T7"),
        Anchor::Right => ("C6", "T8"),
        Anchor::Top => ("Cz", "FCz"),
    }
}

/// Owns the registry and alignment frame and wires the collaborators.
///
/// Detection events flow in through [`observe`](Self::observe); a
/// calibration attempt is a single synchronous [`calibrate`](Self::calibrate)
/// call that either commits a full solve or aborts with no side effects.
#[derive(Debug, Default)]
pub struct CalibrationSession {
    registry: FiducialRegistry,
    frame: AlignmentFrame,
}

impl CalibrationSession {
    /// Create a session with an empty registry and identity frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// The marker registry.
    pub fn registry(&self) -> &FiducialRegistry {
        &self.registry
    }

    /// The alignment frame the last calibration committed to.
    pub fn frame(&self) -> &AlignmentFrame {
        &self.frame
    }

    /// Forward a detection-stream event to the registry.
    pub fn observe(&mut self, id: i32, pose: FiducialPose) {
        self.registry.observe(id, pose);
    }

    /// The reference quintet: electrode-pair midpoints per anchor role.
    pub fn reference_anchors(&self, locator: &LandmarkLocator) -> AnchorSet {
        AnchorSet::from_fn(|anchor| {
            let (a, b) = anchor_pair(anchor);
            locator.midpoint(a, b)
        })
    }

    /// Run one calibration attempt.
    ///
    /// Solves the alignment between the layout-derived reference anchors
    /// and the observed marker positions, commits it to the frame,
    /// freezes the registry, and hides the marker visualization. On
    /// [`AlignmentError::Incomplete`] or a degenerate reference the
    /// attempt aborts before any state is touched.
    pub fn calibrate(
        &mut self,
        locator: &LandmarkLocator,
        display: &mut dyn FiducialDisplay,
        diagnostics: Option<&mut dyn AlignmentDiagnostics>,
    ) -> Result<AlignmentResult, AlignmentError> {
        let observations = self.registry.try_get_all()?;
        let observed = AnchorSet::from_fn(|anchor| observations[anchor.index()].position);
        let reference = self.reference_anchors(locator);

        let result = solve(&reference, &observed)?;
        if let Some(diagnostics) = diagnostics {
            diagnostics.on_solve(&reference, &observed, &result);
        }

        self.frame.commit(&result);
        self.registry.freeze();
        display.set_visible(false);
        log::debug!("calibration committed: {result:?}");
        Ok(result)
    }

    /// Undo the calibration: identity frame, reopened registry, markers
    /// shown again.
    pub fn reset(&mut self, display: &mut dyn FiducialDisplay) {
        self.frame.reset();
        self.registry.reset();
        display.set_visible(true);
    }
}
