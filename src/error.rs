use thiserror::Error;

/// Failures rejecting malformed external input at the image boundary.
///
/// These never originate inside the geometry engine; an image item is only
/// constructed from an already-validated pixel buffer.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported or corrupt image data: {0}")]
    Malformed(#[from] image::ImageError),

    #[error("pixel buffer length {actual} does not match {width}x{height} RGBA")]
    SizeMismatch {
        width: u32,
        height: u32,
        actual: usize,
    },

    #[error("image has zero width or height")]
    EmptyImage,
}

/// Failures reading or writing the stroke-preset list.
#[derive(Debug, Error)]
pub enum PresetsError {
    #[error("preset storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed preset data: {0}")]
    Format(#[from] serde_json::Error),
}
