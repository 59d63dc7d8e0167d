use anyhow::Result;
use log::warn;
use opencv::{core::Mat, highgui};

use super::FrameSink;

/// OpenCV highgui window. `wait_key` doubles as the GUI event pump, so the
/// sampler's per-iteration key poll also keeps the window responsive.
pub struct HighguiWindow {
    name: String,
}

impl HighguiWindow {
    pub fn new(name: &str) -> Result<Self> {
        highgui::named_window(name, highgui::WINDOW_AUTOSIZE)?;
        Ok(Self {
            name: name.to_string(),
        })
    }
}

impl FrameSink for HighguiWindow {
    type Frame = Mat;

    fn show(&mut self, frame: &Mat) {
        if let Err(err) = highgui::imshow(&self.name, frame) {
            warn!("imshow failed: {err}");
        }
    }

    fn poll_key(&mut self, wait_ms: i32) -> Option<char> {
        match highgui::wait_key(wait_ms) {
            // Mask to the low byte, key codes differ across highgui backends
            Ok(code) if code >= 0 => char::from_u32((code & 0xff) as u32),
            Ok(_) => None,
            Err(err) => {
                warn!("key poll failed: {err}");
                None
            }
        }
    }

    fn close(&mut self) {
        if let Err(err) = highgui::destroy_all_windows() {
            warn!("closing windows failed: {err}");
        }
    }
}
