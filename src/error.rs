use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrabError {
    #[error("could not open stream {0}")]
    CaptureOpen(String),
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write frame to {path}: {source}")]
    FrameWrite {
        path: PathBuf,
        #[source]
        source: opencv::Error,
    },
}
