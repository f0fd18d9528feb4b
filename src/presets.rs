//! Stroke-width/color presets.
//!
//! The engine only owns the list; an external store persists it. The wire
//! format is a JSON array of `{width, color}` records — per-preset ids are
//! runtime-only and regenerate on load.

use std::path::Path;

use egui::Rgba;
use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::PresetsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresetId(Uuid);

impl Default for PresetId {
    fn default() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePreset {
    pub width: f32,
    /// RGBA components in unmultiplied form.
    pub color: [f32; 4],
    #[serde(skip)]
    pub id: PresetId,
}

impl StrokePreset {
    pub fn new(width: f32, color: Rgba) -> Self {
        Self {
            width,
            color: color.to_rgba_unmultiplied(),
            id: PresetId::default(),
        }
    }

    pub fn rgba(&self) -> Rgba {
        Rgba::from_rgba_unmultiplied(self.color[0], self.color[1], self.color[2], self.color[3])
    }
}

/// The user's stroke presets, with change tracking so an unchanged list is
/// not rewritten on shutdown.
#[derive(Debug, Default)]
pub struct Presets {
    presets: Vec<StrokePreset>,
    changed: bool,
}

impl Presets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[StrokePreset] {
        &self.presets
    }

    pub fn has_changed(&self) -> bool {
        self.changed
    }

    pub fn add(&mut self, preset: StrokePreset) {
        self.presets.push(preset);
        self.changed = true;
    }

    pub fn remove(&mut self, id: PresetId) -> bool {
        let before = self.presets.len();
        self.presets.retain(|preset| preset.id != id);
        let removed = self.presets.len() != before;
        if removed {
            self.changed = true;
        }
        removed
    }

    /// Serialize the record list for the external store.
    pub fn to_json(&self) -> Result<String, PresetsError> {
        Ok(serde_json::to_string(&self.presets)?)
    }

    pub fn from_json(json: &str) -> Result<Self, PresetsError> {
        Ok(Self {
            presets: serde_json::from_str(json)?,
            changed: false,
        })
    }

    /// Write the list out if it changed since load.
    pub fn save(&mut self, path: &Path) -> Result<(), PresetsError> {
        if !self.changed {
            return Ok(());
        }
        std::fs::write(path, self.to_json()?)?;
        self.changed = false;
        Ok(())
    }

    /// Load the list, falling back to an empty one if the store does not
    /// exist yet.
    pub fn load(path: &Path) -> Result<Self, PresetsError> {
        match std::fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!("no preset store at {}, starting empty", path.display());
                Ok(Self::new())
            }
            Err(err) => Err(err.into()),
        }
    }
}
