use std::path::PathBuf;

use thiserror::Error;

/// Failures at the raster I/O boundary.
///
/// Both variants are fatal for the run: there is no partial-output mode,
/// so callers surface them immediately.
#[derive(Debug, Error)]
pub enum RasterIoError {
    #[error("unreadable image {}: {detail}", .path.display())]
    UnreadableImage { path: PathBuf, detail: String },

    #[error("unwritable destination {}: {detail}", .path.display())]
    UnwritableDestination { path: PathBuf, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_image_message() {
        let error = RasterIoError::UnreadableImage {
            path: PathBuf::from("missing.png"),
            detail: "No such file or directory".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unreadable image missing.png: No such file or directory"
        );
    }

    #[test]
    fn test_unwritable_destination_message() {
        let error = RasterIoError::UnwritableDestination {
            path: PathBuf::from("out/restored.png"),
            detail: "Permission denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unwritable destination out/restored.png: Permission denied"
        );
    }
}
