//! Decoded pixel buffers for image items.
//!
//! Decoding happens at the boundary, before any shape is constructed;
//! malformed bytes are rejected here and never reach the geometry engine.
//! The buffer itself is opaque to the engine — the rendering backend owns
//! texture creation and looks buffers up by item identity.

use std::sync::Arc;

use egui::Vec2;
use log::info;

use crate::error::DecodeError;

/// An immutable RGBA8 pixel buffer plus its dimensions.
#[derive(Clone, PartialEq)]
pub struct ImageData {
    pixels: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl ImageData {
    /// Decode an encoded image (PNG, JPEG, ...) into an RGBA8 buffer.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let decoded = image::load_from_memory(bytes)?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        info!("decoded image: {width}x{height} ({} bytes in)", bytes.len());
        Self::from_rgba8(rgba.into_raw(), width, height)
    }

    /// Wrap an already-decoded RGBA8 buffer, validating its length.
    pub fn from_rgba8(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::EmptyImage);
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(DecodeError::SizeMismatch {
                width,
                height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels: pixels.into(),
            width,
            height,
        })
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Natural size in plane units.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
