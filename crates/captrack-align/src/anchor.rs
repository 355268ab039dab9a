use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// The five anchor roles a tracked marker can take on the head.
///
/// The discriminant doubles as the wire id the detection stream reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Anchor {
    /// Above the forehead, on the midline.
    Front = 1,
    /// Above the inion, on the midline.
    Back = 2,
    /// Above the left ear.
    Left = 3,
    /// Above the right ear.
    Right = 4,
    /// At the vertex.
    Top = 5,
}

impl Anchor {
    /// All anchors in id order.
    pub const ALL: [Anchor; 5] = [
        Anchor::Front,
        Anchor::Back,
        Anchor::Left,
        Anchor::Right,
        Anchor::Top,
    ];

    /// Map a raw detection-stream id onto an anchor role.
    ///
    /// Ids outside the fixed 1..=5 domain yield `None` and are ignored by
    /// the registry.
    pub fn from_raw(id: i32) -> Option<Self> {
        match id {
            1 => Some(Anchor::Front),
            2 => Some(Anchor::Back),
            3 => Some(Anchor::Left),
            4 => Some(Anchor::Right),
            5 => Some(Anchor::Top),
            _ => None,
        }
    }

    /// Zero-based storage index of the anchor.
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Anchor::Front => "front",
            Anchor::Back => "back",
            Anchor::Left => "left",
            Anchor::Right => "right",
            Anchor::Top => "top",
        };
        write!(f, "{name}")
    }
}

/// A tracked marker pose in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiducialPose {
    /// World position of the marker.
    pub position: DVec3,
    /// World orientation of the marker.
    pub orientation: DQuat,
}

impl FiducialPose {
    /// Create a pose from a position and orientation.
    pub fn new(position: DVec3, orientation: DQuat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Create a pose at a position with identity orientation.
    pub fn at(position: DVec3) -> Self {
        Self::new(position, DQuat::IDENTITY)
    }
}

/// A quintet of points indexed by anchor role.
///
/// Both sides of the alignment problem are expressed as anchor sets: the
/// reference side from electrode-pair midpoints, the observed side from
/// the registered marker positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSet {
    /// The front anchor point.
    pub front: DVec3,
    /// The back anchor point.
    pub back: DVec3,
    /// The left anchor point.
    pub left: DVec3,
    /// The right anchor point.
    pub right: DVec3,
    /// The top anchor point.
    pub top: DVec3,
}

impl AnchorSet {
    /// Build a set by evaluating a closure per anchor role.
    pub fn from_fn(mut f: impl FnMut(Anchor) -> DVec3) -> Self {
        Self {
            front: f(Anchor::Front),
            back: f(Anchor::Back),
            left: f(Anchor::Left),
            right: f(Anchor::Right),
            top: f(Anchor::Top),
        }
    }

    /// The point for a given anchor role.
    pub fn get(&self, anchor: Anchor) -> DVec3 {
        match anchor {
            Anchor::Front => self.front,
            Anchor::Back => self.back,
            Anchor::Left => self.left,
            Anchor::Right => self.right,
            Anchor::Top => self.top,
        }
    }

    /// The five points in id order.
    pub fn as_array(&self) -> [DVec3; 5] {
        [self.front, self.back, self.left, self.right, self.top]
    }

    /// Arithmetic mean of the five points.
    pub fn centroid(&self) -> DVec3 {
        (self.front + self.back + self.left + self.right + self.top) / 5.0
    }

    /// Apply a function to every point, producing a new set.
    pub fn map(&self, mut f: impl FnMut(DVec3) -> DVec3) -> Self {
        Self {
            front: f(self.front),
            back: f(self.back),
            left: f(self.left),
            right: f(self.right),
            top: f(self.top),
        }
    }
}
