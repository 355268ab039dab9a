use glam::{DMat3, DQuat, DVec3};
use nalgebra::{Matrix3, SVD};
use serde::{Deserialize, Serialize};

use crate::anchor::AnchorSet;
use crate::errors::{AlignmentError, Baseline};

/// Reference baselines shorter than this cannot anchor a scale axis.
const BASELINE_EPSILON: f64 = 1e-10;

/// The similarity transform mapping the reference set onto the observed set.
///
/// Applied in fixed order: per-axis scale, then rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlignmentResult {
    /// Per-axis scale factors.
    pub scale: DVec3,
    /// Rotation taking the scaled reference frame onto the observed frame.
    pub rotation: DQuat,
    /// Translation delta recentering the scaled/rotated set.
    pub translation: DVec3,
}

impl Default for AlignmentResult {
    fn default() -> Self {
        Self {
            scale: DVec3::ONE,
            rotation: DQuat::IDENTITY,
            translation: DVec3::ZERO,
        }
    }
}

impl AlignmentResult {
    /// Transform a point: scale, then rotate, then translate.
    pub fn apply(&self, point: DVec3) -> DVec3 {
        self.rotation * (self.scale * point) + self.translation
    }
}

fn axis_scale(
    observed_len: f64,
    reference_len: f64,
    baseline: Baseline,
) -> Result<f64, AlignmentError> {
    if reference_len < BASELINE_EPSILON {
        return Err(AlignmentError::DegenerateBaseline { baseline });
    }
    Ok(observed_len / reference_len)
}

/// Solve for the similarity transform between two anchor quintets.
///
/// Closed form, one shot: per-axis scales come from role-pair distances,
/// the rotation from an SVD of the cross-covariance of the co-scaled sets
/// (Kabsch), and the translation from the transformed reference centroid.
///
/// # Arguments
///
/// * `reference` - Anchor points derived from the static layout.
/// * `observed` - Anchor points reported by the tracked markers.
///
/// # Returns
///
/// The [`AlignmentResult`] mapping reference onto observed, or
/// [`AlignmentError::DegenerateBaseline`] when a reference baseline has no
/// usable length.
///
/// Example:
///
/// ```
/// use captrack_align::{solve, AnchorSet};
/// use glam::DVec3;
///
/// let reference = AnchorSet {
///     front: DVec3::new(0.0, 0.0, 1.0),
///     back: DVec3::new(0.0, 0.0, -1.0),
///     left: DVec3::new(-1.0, 0.0, 0.0),
///     right: DVec3::new(1.0, 0.0, 0.0),
///     top: DVec3::new(0.0, 1.0, 0.0),
/// };
/// let observed = reference.map(|p| p * 2.0);
/// let result = solve(&reference, &observed).unwrap();
/// assert!((result.scale - DVec3::splat(2.0)).length() < 1e-9);
/// ```
pub fn solve(reference: &AnchorSet, observed: &AnchorSet) -> Result<AlignmentResult, AlignmentError> {
    // Centroids, then recenter both quintets.
    let reference_center = reference.centroid();
    let observed_center = observed.centroid();
    let r = reference.map(|p| p - reference_center);
    let o = observed.map(|p| p - observed_center);

    // Per-axis scale from role baselines: x spans the ears, z the
    // nose-inion line, y is measured against the front/back midline.
    let scale = DVec3::new(
        axis_scale(
            o.left.distance(o.right),
            r.left.distance(r.right),
            Baseline::LeftRight,
        )?,
        axis_scale(
            o.top.distance(o.front.midpoint(o.back)),
            r.top.distance(r.front.midpoint(r.back)),
            Baseline::TopMidline,
        )?,
        axis_scale(
            o.front.distance(o.back),
            r.front.distance(r.back),
            Baseline::FrontBack,
        )?,
    );
    log::debug!("estimated axis scales: {scale:?}");

    // The rotation estimate assumes pre-scaled inputs.
    let r_scaled = r.map(|p| scale * p);

    // Cross-covariance H = Σ (o_i)(r_i')ᵀ / n
    let mut h = [[0.0f64; 3]; 3];
    for (p_o, p_r) in o.as_array().iter().zip(r_scaled.as_array().iter()) {
        let oc = p_o.to_array();
        let rc = p_r.to_array();
        for (row, &oc_row) in oc.iter().enumerate() {
            for (col, &rc_col) in rc.iter().enumerate() {
                h[row][col] += oc_row * rc_col;
            }
        }
    }
    for row in &mut h {
        for val in row {
            *val /= 5.0;
        }
    }

    let h_na = Matrix3::<f64>::from_row_slice(&[
        h[0][0], h[0][1], h[0][2], h[1][0], h[1][1], h[1][2], h[2][0], h[2][1], h[2][2],
    ]);

    let svd = SVD::new(h_na, true, true);
    let Some(mut u) = svd.u else {
        return Err(AlignmentError::SvdU);
    };
    let Some(v_t) = svd.v_t else {
        return Err(AlignmentError::SvdVT);
    };

    // Reflection case: flip the U column paired with the smallest singular
    // value so U·Vᵀ is a proper rotation.
    if (u * v_t).determinant() < 0.0 {
        u.column_mut(2).scale_mut(-1.0);
    }
    let r_na = u * v_t;

    // nalgebra is row-indexed, glam columns are contiguous.
    let rotation = DQuat::from_mat3(&DMat3::from_cols_array(&[
        r_na[(0, 0)],
        r_na[(1, 0)],
        r_na[(2, 0)],
        r_na[(0, 1)],
        r_na[(1, 1)],
        r_na[(2, 1)],
        r_na[(0, 2)],
        r_na[(1, 2)],
        r_na[(2, 2)],
    ]))
    .normalize();

    // Recenter the scaled/rotated reference onto the observed centroid.
    let translation = observed_center - rotation * (scale * reference_center);

    Ok(AlignmentResult {
        scale,
        rotation,
        translation,
    })
}
