use glam::{DAffine3, DQuat, DVec3, EulerRot};

use captrack_align::AlignmentResult;

/// The transform node the solved alignment is applied to.
///
/// Scale, rotation, and translation compose in that fixed order. The node
/// is dedicated to automatic alignment; user adjustments live in the
/// separate [`ManualOffset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentFrame {
    /// Per-axis scale of the aligned layout.
    pub scale: DVec3,
    /// Rotation of the aligned layout.
    pub rotation: DQuat,
    /// Translation delta recentering the aligned layout.
    pub translation: DVec3,
}

impl Default for AlignmentFrame {
    fn default() -> Self {
        Self {
            scale: DVec3::ONE,
            rotation: DQuat::IDENTITY,
            translation: DVec3::ZERO,
        }
    }
}

impl AlignmentFrame {
    /// Apply a solved alignment to the frame.
    ///
    /// Assigns all three properties; committing the same result twice
    /// leaves the frame in the same state, nothing accumulates.
    pub fn commit(&mut self, result: &AlignmentResult) {
        self.scale = result.scale;
        self.rotation = result.rotation;
        self.translation = result.translation;
    }

    /// Restore the identity frame, unconditionally.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The frame as an affine transform.
    pub fn to_affine(&self) -> DAffine3 {
        DAffine3::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// The independently user-controlled offset frame.
///
/// Accepted from an external control surface every frame and applied on
/// top of the automatic alignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualOffset {
    /// Offset position.
    pub position: DVec3,
    /// Offset rotation as yaw/pitch/roll Euler angles, radians.
    pub rotation_euler: DVec3,
    /// Offset scale.
    pub scale: DVec3,
}

impl Default for ManualOffset {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation_euler: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

impl ManualOffset {
    /// Replace the offset from the external control surface.
    pub fn set(&mut self, position: DVec3, rotation_euler: DVec3, scale: DVec3) {
        self.position = position;
        self.rotation_euler = rotation_euler;
        self.scale = scale;
    }

    /// The offset as an affine transform.
    pub fn to_affine(&self) -> DAffine3 {
        let rotation = DQuat::from_euler(
            EulerRot::YXZ,
            self.rotation_euler.y,
            self.rotation_euler.x,
            self.rotation_euler.z,
        );
        DAffine3::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// The composed head transform: manual offset over the alignment frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeadFrame {
    /// The user-controlled offset, parent of the alignment frame.
    pub manual: ManualOffset,
    /// The automatically solved alignment frame.
    pub alignment: AlignmentFrame,
}

impl HeadFrame {
    /// The full world transform of the aligned layout.
    pub fn world_affine(&self) -> DAffine3 {
        self.manual.to_affine() * self.alignment.to_affine()
    }

    /// Transform a layout-frame point into the world.
    pub fn transform_point(&self, point: DVec3) -> DVec3 {
        self.world_affine().transform_point3(point)
    }
}
