pub const DEFAULT_STREAM_URL: &str = "rtsp://192.168.1.124:8554/gopro";
pub const DEFAULT_SAMPLE_INTERVAL: u64 = 30;
pub const DEFAULT_OUTPUT_DIR: &str = "saved_frames";

pub const WINDOW_NAME: &str = "RTSP Stream";

pub const QUIT_KEY: char = 'q';
pub const KEY_POLL_WAIT_MS: i32 = 1;

/// Timestamp format appended to the output directory in `--unique` mode.
pub const UNIQUE_DIR_FORMAT: &str = "%Y%m%d_%H%M%S";
