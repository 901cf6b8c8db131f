use nalgebra::Vector2;
use thiserror::Error;

use crate::{
    blob::{Blob, Hand},
    geometry_utils::{distance, distance2},
};

use std::f32::consts::PI;

pub const FINGERS_PER_HAND: usize = 5;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("need {FINGERS_PER_HAND} finger-role blobs to calibrate a hand, got {0}")]
    NotEnoughFingers(usize),
    #[error("degenerate zero-length {0} vector")]
    DegenerateVector(&'static str),
}

/// Calibrate one hand's geometry from its palm and five finger-role blobs:
/// pick the thumb, derive the pointing direction and handedness, and
/// estimate the finger separation.
pub fn formulate(palm: Blob, assigned: &[Blob], separation_scale: f32) -> Result<Hand, GeometryError> {
    if assigned.len() < FINGERS_PER_HAND {
        return Err(GeometryError::NotEnoughFingers(assigned.len()));
    }

    let mut blobs = assigned.to_vec();
    blobs.sort_by(|a, b| b.size.cmp(&a.size));
    let thumb = blobs.remove(0);
    blobs.sort_by(|a, b| {
        distance2(&a.position, &thumb.position).total_cmp(&distance2(&b.position, &thumb.position))
    });

    let f1 = blobs[0];
    // the two fingers furthest from the thumb, collapsed to one point,
    // anchor the far end of the hand's axis
    let spread = blobs[2].merge(&blobs[3]);

    // axis convention: x from column deltas, y from row deltas
    let direction = Vector2::new(spread.col() - f1.col(), spread.row() - f1.row());
    let thumb_dir = Vector2::new(thumb.col() - f1.col(), thumb.row() - f1.row());
    if direction.norm_squared() == 0. {
        return Err(GeometryError::DegenerateVector("direction"));
    }
    if thumb_dir.norm_squared() == 0. {
        return Err(GeometryError::DegenerateVector("thumb"));
    }

    // signed angle from the finger axis to the thumb; which side the thumb
    // falls on decides handedness
    let angle = thumb_dir.y.atan2(thumb_dir.x) - direction.y.atan2(direction.x);
    let is_left = (angle > -PI && angle < 0.) || angle > PI;

    let separation = (distance(&f1.position, &blobs[1].position)
        + distance(&blobs[1].position, &blobs[2].position)
        + distance(&blobs[2].position, &blobs[3].position))
        / 4.
        * separation_scale;

    Ok(Hand {
        palm,
        fingers: [blobs[0], blobs[1], blobs[2], blobs[3]],
        thumb,
        is_left,
        direction,
        separation,
    })
}
