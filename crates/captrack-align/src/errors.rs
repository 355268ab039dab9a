use crate::anchor::Anchor;

/// The scale baseline whose reference length degenerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// Distance between the left and right anchors.
    LeftRight,
    /// Distance between the front and back anchors.
    FrontBack,
    /// Distance from the top anchor to the front/back midline.
    TopMidline,
}

impl std::fmt::Display for Baseline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Baseline::LeftRight => "left-right",
            Baseline::FrontBack => "front-back",
            Baseline::TopMidline => "top-midline",
        };
        write!(f, "{name}")
    }
}

/// Errors that can occur while registering markers or solving an alignment.
#[derive(Debug, thiserror::Error)]
pub enum AlignmentError {
    /// Fewer than five distinct anchors have been observed.
    ///
    /// Recoverable: keep feeding detections and retry.
    #[error("calibration incomplete, missing anchors: {missing:?}")]
    Incomplete {
        /// Anchors with no observation yet.
        missing: Vec<Anchor>,
    },

    /// A reference baseline has effectively zero length, so the per-axis
    /// scale along it is undefined.
    #[error("degenerate {baseline} baseline in reference set")]
    DegenerateBaseline {
        /// The degenerate baseline.
        baseline: Baseline,
    },

    /// Failed to compute U in SVD.
    #[error("failed to compute U in SVD")]
    SvdU,

    /// Failed to compute V^T in SVD.
    #[error("failed to compute V^T in SVD")]
    SvdVT,
}
