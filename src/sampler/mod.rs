use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};

use crate::capture::FrameSource;
use crate::display::FrameSink;
use crate::error::GrabError;
use crate::export::FrameWriter;
use crate::shared::constants;

pub struct GrabConfig {
    pub stream_url: String,
    pub sample_interval: u64,
    pub output_dir: PathBuf,
    pub window_name: String,
}

/// Why the loop stopped. None of these are errors: an ended stream, a quit
/// key and a Ctrl-C all take the same shutdown path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    StreamEnd,
    UserQuit,
    Interrupted,
}

#[derive(Debug)]
pub struct GrabReport {
    pub frames_read: u64,
    pub frames_saved: u64,
    pub stop: StopReason,
}

/// Drives the read -> show -> conditionally-save loop, then releases the
/// capture and closes the display exactly once, whatever the outcome.
pub fn run<S, D, W>(
    config: &GrabConfig,
    source: &mut S,
    sink: &mut D,
    writer: &mut W,
    interrupted: &AtomicBool,
) -> Result<GrabReport, GrabError>
where
    S: FrameSource,
    D: FrameSink<Frame = S::Frame>,
    W: FrameWriter<Frame = S::Frame>,
{
    let outcome = sample_loop(config, source, sink, writer, interrupted);
    source.release();
    sink.close();
    outcome
}

fn sample_loop<S, D, W>(
    config: &GrabConfig,
    source: &mut S,
    sink: &mut D,
    writer: &mut W,
    interrupted: &AtomicBool,
) -> Result<GrabReport, GrabError>
where
    S: FrameSource,
    D: FrameSink<Frame = S::Frame>,
    W: FrameWriter<Frame = S::Frame>,
{
    // Loop-local, never reset. frames_read counts every grab, frames_saved
    // only the ones written, so saved frames are exactly `sample_interval`
    // grabs apart starting at frame 0.
    let mut frames_read: u64 = 0;
    let mut frames_saved: u64 = 0;

    loop {
        let Some(frame) = source.read_frame() else {
            warn!("failed to grab frame, stream ended");
            return Ok(GrabReport {
                frames_read,
                frames_saved,
                stop: StopReason::StreamEnd,
            });
        };

        sink.show(&frame);

        if frames_read % config.sample_interval == 0 {
            let path = config.output_dir.join(format!("frame_{frames_saved}.jpg"));
            writer.write(&path, &frame)?;
            info!("saved {}", path.display());
            frames_saved += 1;
        }

        frames_read += 1;

        if sink.poll_key(constants::KEY_POLL_WAIT_MS) == Some(constants::QUIT_KEY) {
            return Ok(GrabReport {
                frames_read,
                frames_saved,
                stop: StopReason::UserQuit,
            });
        }

        if interrupted.load(Ordering::SeqCst) {
            return Ok(GrabReport {
                frames_read,
                frames_saved,
                stop: StopReason::Interrupted,
            });
        }
    }
}
