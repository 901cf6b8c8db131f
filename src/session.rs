use log::{debug, info, warn};

use crate::{
    backend_config::BackendConfig,
    blob::{Hand, HandSide, KeyEvent},
    frame::{FrameError, PressureFrame},
    geometry_utils::distance2,
    systems::{contact, hands::MIN_CALIBRATION_BLOBS, segmentation, Systems},
};

/// All state for one logical touchpad: baseline, warm-up progress and the
/// two calibrated hands. Owned by the caller, which is also responsible
/// for serializing frame delivery; nothing here is shared or locked.
pub struct TouchSession {
    systems: Systems,
    left: Option<Hand>,
    right: Option<Hand>,
}

impl TouchSession {
    pub fn new(config: &BackendConfig) -> TouchSession {
        TouchSession {
            systems: Systems::new(config),
            left: None,
            right: None,
        }
    }

    pub fn left(&self) -> Option<&Hand> {
        self.left.as_ref()
    }

    pub fn right(&self) -> Option<&Hand> {
        self.right.as_ref()
    }

    pub fn is_calibrated(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    pub fn warmup_frames_absorbed(&self) -> usize {
        self.systems.baseline.frames_absorbed()
    }

    /// Run one frame through the pipeline. Key events come back only once
    /// both hands are calibrated and the frame is not a recalibration
    /// frame; everything else yields an empty list.
    pub fn process_frame(&mut self, frame: &PressureFrame) -> Result<Vec<KeyEvent>, FrameError> {
        if let Some(expected) = self.systems.baseline.shape() {
            if frame.dim() != expected {
                return Err(FrameError::ShapeMismatch {
                    got: frame.dim(),
                    expected,
                });
            }
        }

        let mask = match self.systems.baseline.baseline() {
            None => {
                self.systems.baseline.absorb(frame);
                return Ok(Vec::new());
            }
            Some(baseline) => {
                contact::contact_mask(baseline, frame.data(), self.systems.press_threshold)
            }
        };

        let mut blobs = segmentation::segment(&mask);
        blobs.sort_by(|a, b| b.size.cmp(&a.size));

        if blobs.len() >= MIN_CALIBRATION_BLOBS {
            // full hand placement: recalibrate instead of emitting keys
            match self.systems.clusterer.separate_hands(&blobs) {
                Ok((left, right)) => {
                    info!("Hands recalibrated from {} contact blobs", blobs.len());
                    self.left = Some(left);
                    self.right = Some(right);
                }
                Err(e) => {
                    warn!("Recalibration abandoned ({e}); keeping previous hands");
                }
            }
            return Ok(Vec::new());
        }

        let (Some(left), Some(right)) = (&self.left, &self.right) else {
            debug!(
                "Skipping frame with {} blobs; hands not calibrated yet",
                blobs.len()
            );
            return Ok(Vec::new());
        };

        let mut events = Vec::with_capacity(blobs.len());
        for blob in &blobs {
            let to_left = distance2(&blob.position, &left.palm.position);
            let to_right = distance2(&blob.position, &right.palm.position);
            let (hand, side) = if to_right < to_left {
                (right, HandSide::Right)
            } else {
                (left, HandSide::Left)
            };
            let symbol = self.systems.key_mapper.get_key(hand, &blob.position);
            events.push(KeyEvent { side, symbol });
        }
        Ok(events)
    }

    /// Restart from scratch: clears the baseline, the warm-up progress and
    /// both calibrated hands
    pub fn reset(&mut self) {
        self.systems.baseline.reset();
        self.left = None;
        self.right = None;
        info!("Session reset; warm-up restarts on the next frame");
    }
}
