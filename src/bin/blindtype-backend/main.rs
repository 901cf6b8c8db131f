use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use blindtype::backend_config::load_config_from_file;
use blindtype::frame::PressureFrame;
use blindtype::session::TouchSession;

mod cli;
use cli::Cli;

/// Reads newline-delimited JSON frames (each a rectangular array of
/// readings) on stdin and writes one JSON array of key events per frame
/// on stdout. The literal line "reset" restarts the session's warm-up.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize the logger from the environment

    env_logger::Builder::from_env(Env::default().default_filter_or(&cli.log_level)).init();

    debug!("Started; args: {:?}", cli);

    let mut config = load_config_from_file(&cli.config_path)?;
    if let Some(threshold) = cli.press_threshold {
        config.press_threshold = threshold;
    }
    if let Some(frames) = cli.warmup_frames {
        config.warmup_frames = frames;
    }
    if cli.save_config {
        config.write_config_to_file(&cli.config_path)?;
    }

    let mut session = TouchSession::new(&config);
    info!(
        "Waiting for frames on stdin ({} warm-up frames, press threshold {})",
        config.warmup_frames, config.press_threshold
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for (index, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read frame line")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "reset" {
            session.reset();
            continue;
        }

        let rows: Vec<Vec<f32>> = serde_json::from_str(line)
            .with_context(|| format!("failed to parse frame on line {}", index + 1))?;
        let frame = PressureFrame::from_rows(&rows)
            .with_context(|| format!("malformed frame on line {}", index + 1))?;
        let events = session
            .process_frame(&frame)
            .with_context(|| format!("failed to process frame on line {}", index + 1))?;

        if !events.is_empty() {
            debug!("{} key event(s) on line {}", events.len(), index + 1);
        }
        serde_json::to_writer(&mut out, &events)?;
        writeln!(out)?;
    }

    info!("Input closed; shutting down");
    Ok(())
}
