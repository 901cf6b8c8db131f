use nalgebra::{Rotation2, Vector2};

use crate::{
    blob::{Hand, KeySymbol},
    GridPoint,
};

use std::f32::consts::PI;

/// Maps a contact position into a calibrated hand's local frame and
/// buckets it into one of three key symbols. A full per-column key table
/// would replace the bucketing here.
pub struct KeyMapper {
    bucket_factor: f32,
}

impl KeyMapper {
    pub fn new(bucket_factor: f32) -> Self {
        KeyMapper { bucket_factor }
    }

    pub fn get_key(&self, hand: &Hand, contact: &GridPoint) -> KeySymbol {
        // undo the hand's orientation; left hands point the other way
        let correction = -hand.direction.y.atan2(hand.direction.x)
            + if hand.is_left { PI } else { 0. };

        let f1 = hand.index_finger();
        // contact relative to the index finger, row axis flipped to match
        // the direction vector's orientation
        let local = Vector2::new(contact.1 - f1.col(), -(contact.0 - f1.row()));
        let aligned = Rotation2::new(correction) * local;

        let edge = self.bucket_factor * hand.separation;
        if aligned.x >= edge {
            KeySymbol::Rightmost
        } else if aligned.x <= -edge {
            KeySymbol::Leftmost
        } else {
            KeySymbol::Middle
        }
    }
}
