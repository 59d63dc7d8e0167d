mod rtsp;

pub use rtsp::RtspCapture;

/// A stream of decoded frames, opened once and released once.
///
/// `read_frame` returning `None` means the stream is over; there is no retry,
/// the caller is expected to shut down.
pub trait FrameSource {
    type Frame;

    fn read_frame(&mut self) -> Option<Self::Frame>;
    fn release(&mut self);
}
