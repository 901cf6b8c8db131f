use ndarray::Array2;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("jagged frame: row {row} has {got} columns, expected {expected}")]
    JaggedRows {
        row: usize,
        got: usize,
        expected: usize,
    },
    #[error("frame is {got:?} but the session expects {expected:?}")]
    ShapeMismatch {
        got: (usize, usize),
        expected: (usize, usize),
    },
}

/// One immutable snapshot of sensor readings, rows all equal length
#[derive(Debug, Clone, PartialEq)]
pub struct PressureFrame {
    data: Array2<f32>,
}

impl PressureFrame {
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self, FrameError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut data = Array2::zeros((height, width));
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(FrameError::JaggedRows {
                    row: r,
                    got: row.len(),
                    expected: width,
                });
            }
            for (c, &value) in row.iter().enumerate() {
                data[[r, c]] = value;
            }
        }
        Ok(PressureFrame { data })
    }

    pub fn from_array(data: Array2<f32>) -> Self {
        PressureFrame { data }
    }

    pub fn data(&self) -> &Array2<f32> {
        &self.data
    }

    pub fn dim(&self) -> (usize, usize) {
        self.data.dim()
    }
}
