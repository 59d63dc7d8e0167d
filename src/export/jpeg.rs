use std::path::Path;

use opencv::core::{Mat, Vector};
use opencv::imgcodecs;

use super::FrameWriter;
use crate::error::GrabError;

/// Writes frames through `imgcodecs::imwrite`; the format is picked from the
/// `.jpg` extension of the target path.
pub struct JpegWriter;

impl FrameWriter for JpegWriter {
    type Frame = Mat;

    fn write(&mut self, path: &Path, frame: &Mat) -> Result<(), GrabError> {
        let target = path.to_string_lossy();
        let written = imgcodecs::imwrite(&target, frame, &Vector::new()).map_err(|source| {
            GrabError::FrameWrite {
                path: path.to_path_buf(),
                source,
            }
        })?;

        if !written {
            return Err(GrabError::FrameWrite {
                path: path.to_path_buf(),
                source: opencv::Error::new(
                    opencv::core::StsError,
                    "imwrite returned false".to_string(),
                ),
            });
        }

        Ok(())
    }
}
