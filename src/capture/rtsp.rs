use log::warn;
use opencv::{prelude::*, videoio};

use super::FrameSource;
use crate::error::GrabError;

/// OpenCV `VideoCapture` bound to one RTSP URL.
///
/// CAP_ANY lets OpenCV pick the backend; for network URLs that is FFmpeg on
/// every platform we care about.
pub struct RtspCapture {
    inner: videoio::VideoCapture,
}

impl RtspCapture {
    pub fn open(url: &str) -> Result<Self, GrabError> {
        let inner = videoio::VideoCapture::from_file(url, videoio::CAP_ANY)
            .map_err(|err| {
                warn!("VideoCapture init failed: {err}");
                GrabError::CaptureOpen(url.to_string())
            })?;

        if !inner.is_opened().unwrap_or(false) {
            return Err(GrabError::CaptureOpen(url.to_string()));
        }

        Ok(Self { inner })
    }
}

impl FrameSource for RtspCapture {
    type Frame = Mat;

    fn read_frame(&mut self) -> Option<Mat> {
        let mut frame = Mat::default();
        match self.inner.read(&mut frame) {
            Ok(true) if !frame.empty() => Some(frame),
            Ok(_) => None,
            Err(err) => {
                warn!("frame read failed: {err}");
                None
            }
        }
    }

    fn release(&mut self) {
        if let Err(err) = self.inner.release() {
            warn!("capture release failed: {err}");
        }
    }
}
