mod window;

pub use window::HighguiWindow;

/// Live presentation of frames plus the quit-key poll.
///
/// `show` is fire-and-forget: the sampler does not care whether a frame
/// actually made it to the screen. `poll_key` waits at most `wait_ms` and
/// reports a pressed key, if any.
pub trait FrameSink {
    type Frame;

    fn show(&mut self, frame: &Self::Frame);
    fn poll_key(&mut self, wait_ms: i32) -> Option<char>;
    fn close(&mut self);
}
