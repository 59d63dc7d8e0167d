mod jpeg;

pub use jpeg::JpegWriter;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GrabError;
use crate::shared::constants;

/// Persists one frame to one path.
pub trait FrameWriter {
    type Frame;

    fn write(&mut self, path: &Path, frame: &Self::Frame) -> Result<(), GrabError>;
}

/// In `--unique` mode the directory gets a local-time suffix so repeated runs
/// never overwrite each other's frames.
pub fn resolve_output_dir(base: &Path, unique: bool) -> PathBuf {
    if unique {
        let stamp = chrono::Local::now().format(constants::UNIQUE_DIR_FORMAT);
        PathBuf::from(format!("{}_{}", base.display(), stamp))
    } else {
        base.to_path_buf()
    }
}

pub fn prepare_output_dir(dir: &Path) -> Result<(), GrabError> {
    fs::create_dir_all(dir).map_err(|source| GrabError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_creates_nested_directories() {
        let dir = std::env::temp_dir()
            .join("framesnap_export_test")
            .join("deep")
            .join("nested");
        let _ = fs::remove_dir_all(&dir);

        prepare_output_dir(&dir).unwrap();
        assert!(dir.is_dir());

        // Re-running against an existing directory is fine
        prepare_output_dir(&dir).unwrap();

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn resolve_without_unique_is_identity() {
        let base = PathBuf::from("saved_frames");
        assert_eq!(resolve_output_dir(&base, false), base);
    }

    #[test]
    fn resolve_with_unique_appends_timestamp() {
        let base = PathBuf::from("saved_frames");
        let resolved = resolve_output_dir(&base, true);
        let name = resolved.to_string_lossy();

        assert!(name.starts_with("saved_frames_"));
        // %Y%m%d_%H%M%S
        assert_eq!(name.len(), "saved_frames_".len() + 15);
    }
}
