use clap::{command, Parser};

// Some defaults; some of which can be overriden via CLI args
const CONFIG_FILE_PATH: &str = "./blindtype.json";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load touchpad backend config
    #[arg(long="configPath",default_value_t=String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,

    /// Override the configured press threshold (pressure drop below
    /// baseline that counts as a contact)
    #[arg(long = "pressThreshold")]
    pub press_threshold: Option<f32>,

    /// Override the configured number of warm-up frames
    #[arg(long = "warmupFrames")]
    pub warmup_frames: Option<usize>,

    /// Write the effective config back to configPath on startup
    #[arg(long = "saveConfig")]
    pub save_config: bool,
}
