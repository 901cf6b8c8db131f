use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::{geometry_utils::midpoint, GridPoint};

/// A connected group of pressed pixels. `position` is the median-by-column
/// pixel of the group (not a centroid); downstream distance and angle
/// computations depend on exactly that convention.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Blob {
    pub position: GridPoint,
    pub size: usize,
}

impl Blob {
    pub fn new(position: GridPoint, size: usize) -> Self {
        Blob { position, size }
    }

    /// Merge two blobs into a pseudo-blob: unweighted midpoint position,
    /// sizes summed
    pub fn merge(&self, other: &Blob) -> Blob {
        Blob {
            position: midpoint(&self.position, &other.position),
            size: self.size + other.size,
        }
    }

    pub fn row(&self) -> f32 {
        self.position.0
    }

    pub fn col(&self) -> f32 {
        self.position.1
    }
}

/// A calibrated hand. Replaced wholesale whenever a recalibration succeeds,
/// never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    pub palm: Blob,
    /// The four non-thumb fingers, sorted by squared distance to the thumb
    /// ascending; `fingers[0]` is the presumed index finger
    pub fingers: [Blob; 4],
    pub thumb: Blob,
    pub is_left: bool,
    /// Points from the index finger towards the far fingers, as
    /// (column delta, row delta)
    pub direction: Vector2<f32>,
    /// Empirical finger pitch; the key-bucket half-width scales off this
    pub separation: f32,
}

impl Hand {
    /// The presumed index finger: the non-thumb finger closest to the thumb
    pub fn index_finger(&self) -> &Blob {
        &self.fingers[0]
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum HandSide {
    Left,
    Right,
}

/// Which of the three key buckets a contact fell into, relative to the
/// hand's home column. A full per-column key table would slot in here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum KeySymbol {
    Leftmost,
    Middle,
    Rightmost,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    pub side: HandSide,
    pub symbol: KeySymbol,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sums_sizes() {
        let a = Blob::new((2., 4.), 3);
        let b = Blob::new((6., 10.), 5);
        assert_eq!(a.merge(&b).size, 8);
    }

    #[test]
    fn test_merge_is_unweighted_and_order_independent() {
        // sizes deliberately lopsided; the midpoint must ignore them
        let a = Blob::new((0., 0.), 100);
        let b = Blob::new((4., 8.), 1);
        assert_eq!(a.merge(&b).position, (2., 4.));
        assert_eq!(a.merge(&b).position, b.merge(&a).position);
    }
}
