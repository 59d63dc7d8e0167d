mod capture;
mod display;
mod error;
mod export;
mod sampler;
mod shared;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::capture::RtspCapture;
use crate::display::HighguiWindow;
use crate::export::JpegWriter;
use crate::sampler::{GrabConfig, StopReason};
use crate::shared::constants;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// RTSP URL of the stream to connect to
    #[arg(short, long, default_value = constants::DEFAULT_STREAM_URL)]
    url: String,
    /// Number of raw frames between saved ones
    #[arg(short, long, default_value_t = constants::DEFAULT_SAMPLE_INTERVAL,
          value_parser = clap::value_parser!(u64).range(1..))]
    interval: u64,
    /// Directory the JPEG frames are written to
    #[arg(short, long, default_value = constants::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
    /// Append a timestamp to the output directory name
    #[arg(long, default_value_t = false)]
    unique: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))?;

    let config = GrabConfig {
        stream_url: cli.url,
        sample_interval: cli.interval,
        output_dir: export::resolve_output_dir(&cli.output_dir, cli.unique),
        window_name: constants::WINDOW_NAME.to_string(),
    };

    // Open first: a stream we cannot reach should not leave a directory behind
    let mut source = RtspCapture::open(&config.stream_url)?;
    info!("connected to {}", config.stream_url);

    export::prepare_output_dir(&config.output_dir)?;

    let mut sink = HighguiWindow::new(&config.window_name)?;
    let mut writer = JpegWriter;

    let report = sampler::run(&config, &mut source, &mut sink, &mut writer, &interrupted)?;

    let reason = match report.stop {
        StopReason::StreamEnd => "stream ended",
        StopReason::UserQuit => "quit requested",
        StopReason::Interrupted => "interrupted",
    };
    info!(
        "{reason}: read {} frames, saved {} to {}",
        report.frames_read,
        report.frames_saved,
        config.output_dir.display()
    );

    Ok(())
}
