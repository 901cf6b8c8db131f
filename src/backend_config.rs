use std::fs;

use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    // -------- CONTACT DETECTION SETTINGS
    /// How far a reading must drop below the baseline before the pixel
    /// counts as pressed. One-sided; there is no hysteresis.
    pub press_threshold: f32,

    /// How many idle frames are averaged into the baseline image before
    /// contact detection starts
    pub warmup_frames: usize,

    // -------- KEY MAPPING SETTINGS
    /// Key bucket half-width, as a multiple of the hand's finger separation
    pub key_bucket_factor: f32,

    /// Scale applied to the mean inter-finger distance when estimating a
    /// hand's finger separation
    pub separation_scale: f32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            press_threshold: 40.,
            warmup_frames: 10,
            key_bucket_factor: 1.5,
            separation_scale: 0.8,
        }
    }
}

impl BackendConfig {
    pub fn write_config_to_file(&self, config_file_path: &str) -> Result<()> {
        info!("Current state of config: {:?}", self);
        let text = serde_json::to_string_pretty(self)?;
        match fs::write(config_file_path, text) {
            Ok(()) => {
                info!("Wrote config to file: {:?}", config_file_path);
                Ok(())
            }
            Err(e) => Err(anyhow!("error writing config to file: {:?}", e)),
        }
    }
}

pub fn load_config_from_file(config_file_path: &str) -> Result<BackendConfig> {
    let config = BackendConfig::default();
    debug!("Created init config object {:?}", config);

    match std::fs::read_to_string(config_file_path) {
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                warn!(
                    "Backend config file not found; using defaults instead of {}",
                    &config_file_path
                );
                Ok(config)
            } else {
                Err(anyhow!("failed to read config from disk: {:?}", e))
            }
        }
        Ok(s) => {
            info!("Loaded backend config OK from \"{}\"", config_file_path);
            match serde_json::from_str::<BackendConfig>(&s) {
                Ok(loaded_config) => {
                    debug!("Config parsed data from file: {:?}", &loaded_config);
                    Ok(loaded_config)
                }
                Err(e) => Err(anyhow!("failed to parse config data: {}", e)),
            }
        }
    }
}
