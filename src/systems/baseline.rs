use log::{debug, info};
use ndarray::Array2;

use crate::frame::PressureFrame;

/// Accumulates the warm-up frames and freezes the idle-surface baseline.
/// The baseline never adapts after the warm-up window; a `reset` is the
/// only way to start over.
pub struct BaselineCalibrator {
    warmup_frames: usize,
    buffer: Vec<Array2<f32>>,
    baseline: Option<Array2<f32>>,
}

impl BaselineCalibrator {
    pub fn new(warmup_frames: usize) -> Self {
        BaselineCalibrator {
            warmup_frames,
            buffer: Vec::with_capacity(warmup_frames),
            baseline: None,
        }
    }

    /// The grid shape this session has committed to, from the baseline or
    /// the first buffered frame; None until the first frame arrives
    pub fn shape(&self) -> Option<(usize, usize)> {
        self.baseline
            .as_ref()
            .or_else(|| self.buffer.first())
            .map(|grid| grid.dim())
    }

    pub fn is_ready(&self) -> bool {
        self.baseline.is_some()
    }

    pub fn baseline(&self) -> Option<&Array2<f32>> {
        self.baseline.as_ref()
    }

    pub fn frames_absorbed(&self) -> usize {
        self.buffer.len()
    }

    /// Buffer one warm-up frame; on the final one, average the buffer into
    /// the baseline and drop it. The caller must have validated the shape.
    pub fn absorb(&mut self, frame: &PressureFrame) {
        self.buffer.push(frame.data().clone());
        debug!(
            "Warm-up frame {}/{} buffered",
            self.buffer.len(),
            self.warmup_frames
        );
        if self.buffer.len() >= self.warmup_frames {
            let mut sum: Array2<f32> = Array2::zeros(frame.dim());
            for buffered in &self.buffer {
                sum += buffered;
            }
            // divide by the configured warm-up count, not the buffer
            // length; they only coincide because the buffer is full here
            self.baseline = Some(sum / self.warmup_frames as f32);
            self.buffer.clear();
            info!("Baseline frozen after {} warm-up frames", self.warmup_frames);
        }
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.baseline = None;
    }
}
