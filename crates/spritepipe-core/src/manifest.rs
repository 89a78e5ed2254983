//! Sprite manifest records consumed by the game's asset loader.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from manifest serialization.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry in the sprite manifest. Field names are camelCase on the wire
/// to match the loader's expectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteRecord {
    /// Entity id, stringly keyed in the manifest.
    pub id: String,
    /// Display name, e.g. "pikachu".
    pub name: String,
    /// Path to the sheet relative to the asset root.
    pub path: String,
    /// Width of one frame in pixels.
    pub frame_width: u32,
    /// Height of one frame in pixels.
    pub frame_height: u32,
    /// Frames per direction row.
    pub frame_count: u32,
    /// Number of direction rows.
    pub directions: u32,
}

/// Write the full manifest as a pretty JSON array, replacing any previous
/// version wholesale.
pub fn write_manifest(records: &[SpriteRecord], path: &Path) -> Result<(), ManifestError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Render a single record as a manifest fragment for copy-pasting, used by
/// the sheet builder which does not know the final key.
pub fn manifest_snippet(record: &SpriteRecord) -> String {
    let fragment = serde_json::json!({
        "key": record.id,
        "path": record.path,
        "frameWidth": record.frame_width,
        "frameHeight": record.frame_height,
        "frameCount": record.frame_count,
        "directions": record.directions,
    });
    serde_json::to_string_pretty(&fragment).expect("static JSON value serializes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SpriteRecord {
        SpriteRecord {
            id: "25".to_string(),
            name: "pikachu".to_string(),
            path: "assets/sprites/25.png".to_string(),
            frame_width: 32,
            frame_height: 40,
            frame_count: 4,
            directions: 8,
        }
    }

    #[test]
    fn test_records_serialize_camel_case() {
        let json = serde_json::to_string(&record()).unwrap();
        assert!(json.contains("\"frameWidth\":32"));
        assert!(json.contains("\"frameHeight\":40"));
        assert!(json.contains("\"frameCount\":4"));
        assert!(json.contains("\"directions\":8"));
        assert!(!json.contains("frame_width"));
    }

    #[test]
    fn test_round_trip() {
        let json = serde_json::to_string(&record()).unwrap();
        let back: SpriteRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record());
    }

    #[test]
    fn test_manifest_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets").join("manifest.json");

        write_manifest(&[record(), record()], &path).unwrap();
        write_manifest(&[record()], &path).unwrap();

        let parsed: Vec<SpriteRecord> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_snippet_uses_key_field() {
        let mut rec = record();
        rec.id = "TODO_KEY_NAME".to_string();
        let snippet = manifest_snippet(&rec);
        assert!(snippet.contains("\"key\": \"TODO_KEY_NAME\""));
        assert!(snippet.contains("\"frameWidth\": 32"));
        assert!(!snippet.contains("\"name\""));
    }
}
