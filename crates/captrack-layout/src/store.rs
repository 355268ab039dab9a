use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::LayoutError;
use crate::tables;

/// A named electrode position in the cap's local reference frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    /// Unique landmark label.
    pub name: String,
    /// Position in cap-native coordinates (x anterior, y left, z superior).
    pub local_position: [f64; 3],
}

/// The immutable, ordered table of named electrode positions.
///
/// Loaded once at startup and read-only afterwards. Names are unique and
/// serve as stable keys for pairwise distance computations.
#[derive(Debug, Clone)]
pub struct Layout {
    points: Vec<LayoutPoint>,
    index: HashMap<String, usize>,
}

impl Layout {
    /// Build a layout from a list of points, validating name uniqueness.
    pub fn from_points(points: Vec<LayoutPoint>) -> Result<Self, LayoutError> {
        let mut index = HashMap::with_capacity(points.len());
        for (i, point) in points.iter().enumerate() {
            if index.insert(point.name.clone(), i).is_some() {
                return Err(LayoutError::DuplicateLandmark(point.name.clone()));
            }
        }
        Ok(Self { points, index })
    }

    /// The built-in standard cap layout.
    pub fn standard_cap() -> Result<Self, LayoutError> {
        let points = tables::STANDARD_CAP
            .iter()
            .map(|(name, local_position)| LayoutPoint {
                name: (*name).to_string(),
                local_position: *local_position,
            })
            .collect();
        Self::from_points(points)
    }

    /// Look up a layout point by name.
    pub fn get(&self, name: &str) -> Result<&LayoutPoint, LayoutError> {
        self.index
            .get(name)
            .map(|&i| &self.points[i])
            .ok_or_else(|| LayoutError::UnknownLandmark(name.to_string()))
    }

    /// All layout points in table order.
    pub fn all(&self) -> &[LayoutPoint] {
        &self.points
    }

    /// Number of points in the layout.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the layout holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
