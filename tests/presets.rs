use egui::Rgba;
use whiteboard_geom::error::DecodeError;
use whiteboard_geom::image::ImageData;
use whiteboard_geom::presets::{Presets, StrokePreset};

#[test]
fn json_round_trip_preserves_records() {
    let mut presets = Presets::new();
    presets.add(StrokePreset::new(2.0, Rgba::BLACK));
    presets.add(StrokePreset::new(8.0, Rgba::from_rgb(1.0, 0.0, 0.0)));

    let json = presets.to_json().unwrap();
    let loaded = Presets::from_json(&json).unwrap();
    assert_eq!(loaded.list().len(), 2);
    assert_eq!(loaded.list()[0].width, 2.0);
    assert_eq!(loaded.list()[1].color, [1.0, 0.0, 0.0, 1.0]);
    // Ids are runtime-only and regenerate on load.
    assert!(!loaded.has_changed());
}

#[test]
fn remove_by_id_tracks_changes() {
    let mut presets = Presets::new();
    let preset = StrokePreset::new(4.0, Rgba::BLACK);
    let id = preset.id;
    presets.add(preset);

    let mut loaded = Presets::from_json(&presets.to_json().unwrap()).unwrap();
    assert!(!loaded.has_changed());

    // The reloaded record carries a fresh id; the original is gone.
    assert!(!loaded.remove(id));
    assert!(!loaded.has_changed());

    let fresh_id = loaded.list()[0].id;
    assert!(loaded.remove(fresh_id));
    assert!(loaded.has_changed());
    assert!(loaded.list().is_empty());
}

#[test]
fn load_missing_store_starts_empty() {
    let path = std::env::temp_dir().join("whiteboard-presets-missing.json");
    let _ = std::fs::remove_file(&path);
    let presets = Presets::load(&path).unwrap();
    assert!(presets.list().is_empty());
    assert!(!presets.has_changed());
}

#[test]
fn save_skips_unchanged_lists() {
    let path = std::env::temp_dir().join(format!(
        "whiteboard-presets-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let mut presets = Presets::new();
    presets.add(StrokePreset::new(3.0, Rgba::BLACK));
    presets.save(&path).unwrap();
    assert!(path.exists());
    assert!(!presets.has_changed());

    // Unchanged since the save: a second save must not rewrite the store.
    std::fs::remove_file(&path).unwrap();
    presets.save(&path).unwrap();
    assert!(!path.exists());

    presets.add(StrokePreset::new(5.0, Rgba::BLACK));
    presets.save(&path).unwrap();
    let reloaded = Presets::load(&path).unwrap();
    assert_eq!(reloaded.list().len(), 2);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn preset_color_converts_back_to_rgba() {
    let preset = StrokePreset::new(2.0, Rgba::from_rgba_unmultiplied(0.5, 0.25, 1.0, 0.75));
    let rgba = preset.rgba();
    assert!((rgba.a() - 0.75).abs() < 1e-5);
}

#[test]
fn garbage_bytes_do_not_decode() {
    let result = ImageData::decode(b"definitely not an image");
    assert!(matches!(result, Err(DecodeError::Malformed(_))));
}

#[test]
fn pixel_buffer_length_is_validated() {
    let result = ImageData::from_rgba8(vec![0u8; 10], 2, 2);
    assert!(matches!(
        result,
        Err(DecodeError::SizeMismatch { actual: 10, .. })
    ));
    let result = ImageData::from_rgba8(Vec::new(), 0, 4);
    assert!(matches!(result, Err(DecodeError::EmptyImage)));
}

#[test]
fn valid_buffer_reports_its_size() {
    let image = ImageData::from_rgba8(vec![255u8; 2 * 3 * 4], 2, 3).unwrap();
    assert_eq!(image.width(), 2);
    assert_eq!(image.height(), 3);
    assert_eq!(image.size(), egui::vec2(2.0, 3.0));
}
