pub mod baseline;
pub mod contact;
pub mod geometry;
pub mod hands;
pub mod keymap;
pub mod segmentation;

use baseline::BaselineCalibrator;
use hands::HandClusterer;
use keymap::KeyMapper;

use crate::backend_config::BackendConfig;

pub struct Systems {
    pub baseline: BaselineCalibrator,
    pub clusterer: HandClusterer,
    pub key_mapper: KeyMapper,
    pub press_threshold: f32,
}

impl Systems {
    pub fn new(config: &BackendConfig) -> Systems {
        Systems {
            baseline: BaselineCalibrator::new(config.warmup_frames),
            clusterer: HandClusterer::new(config.separation_scale),
            key_mapper: KeyMapper::new(config.key_bucket_factor),
            press_threshold: config.press_threshold,
        }
    }
}
