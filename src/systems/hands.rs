use log::debug;
use thiserror::Error;

use crate::{
    blob::{Blob, Hand},
    geometry_utils::distance2,
    systems::geometry::{formulate, GeometryError, FINGERS_PER_HAND},
};

/// Minimum blob count that triggers a recalibration attempt: two palm
/// contacts plus ten fingers
pub const MIN_CALIBRATION_BLOBS: usize = 12;

/// Reasons a recalibration attempt was abandoned. These are absorbed by
/// the session (prior hands kept), never surfaced to the caller.
#[derive(Debug, Error, PartialEq)]
pub enum ClusterError {
    #[error("unsupported blob count {0} for recalibration")]
    UnsupportedBlobCount(usize),
    #[error("lopsided palm assignment: {first} vs {second} contacts")]
    LopsidedAssignment { first: usize, second: usize },
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

pub struct HandClusterer {
    separation_scale: f32,
}

impl HandClusterer {
    pub fn new(separation_scale: f32) -> Self {
        HandClusterer { separation_scale }
    }

    /// Partition 12/13/14 blobs (sorted by size descending) into two
    /// calibrated hands, returned as (left, right).
    pub fn separate_hands(&self, blobs: &[Blob]) -> Result<(Hand, Hand), ClusterError> {
        let mut working = blobs.to_vec();
        let d = |a: usize, b: usize| distance2(&blobs[a].position, &blobs[b].position);

        let (palm1, palm2, consumed) = match working.len() {
            // the two largest contacts are the palms, no distance check
            12 => (working[0], working[1], 2),
            // one palm arrived split in two: merge the closest pair among
            // the three largest, the remaining one is the other palm
            13 => {
                let (d1, d2, d3) = (d(0, 1), d(0, 2), d(1, 2));
                let mut palms = (working[0].merge(&working[1]), working[2]);
                if d2 <= d1 {
                    palms = (working[0].merge(&working[2]), working[1]);
                }
                if d3 <= d1.min(d2) {
                    palms = (working[1].merge(&working[2]), working[0]);
                }
                (palms.0, palms.1, 3)
            }
            // both palms split: try the three disjoint pairings of the four
            // largest and keep the one with the smallest summed spread
            14 => {
                let s1 = d(0, 1) + d(2, 3);
                let s2 = d(0, 2) + d(1, 3);
                let s3 = d(0, 3) + d(1, 2);
                let mut palms = (
                    working[0].merge(&working[1]),
                    working[2].merge(&working[3]),
                );
                if s2 <= s1 {
                    palms = (
                        working[0].merge(&working[2]),
                        working[1].merge(&working[3]),
                    );
                }
                if s3 <= s1.min(s2) {
                    palms = (
                        working[0].merge(&working[3]),
                        working[1].merge(&working[2]),
                    );
                }
                (palms.0, palms.1, 4)
            }
            n => return Err(ClusterError::UnsupportedBlobCount(n)),
        };
        working.drain(0..consumed);

        debug!(
            "Palms placed at {:?} and {:?}; assigning {} finger blobs",
            palm1.position,
            palm2.position,
            working.len()
        );

        // nearest palm wins; ties go to the first palm
        let mut first: Vec<Blob> = Vec::with_capacity(FINGERS_PER_HAND);
        let mut second: Vec<Blob> = Vec::with_capacity(FINGERS_PER_HAND);
        for blob in working {
            if distance2(&blob.position, &palm2.position)
                < distance2(&blob.position, &palm1.position)
            {
                second.push(blob);
            } else {
                first.push(blob);
            }
        }

        if first.len() < FINGERS_PER_HAND || second.len() < FINGERS_PER_HAND {
            return Err(ClusterError::LopsidedAssignment {
                first: first.len(),
                second: second.len(),
            });
        }

        let hand1 = formulate(palm1, &first, self.separation_scale)?;
        let hand2 = formulate(palm2, &second, self.separation_scale)?;

        if hand1.is_left {
            Ok((hand1, hand2))
        } else {
            Ok((hand2, hand1))
        }
    }
}
