use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sprite manifest describing every named sprite and the background
/// role table. Loaded from a JSON file by the host page at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteManifest {
    /// Named sprite lookup: name → sheet path + cell coordinates.
    pub sprites: HashMap<String, SpriteDescriptor>,
    /// Which sprites tile the background border and interior.
    #[serde(default)]
    pub background: BackgroundSpec,
}

/// Describes a named sprite: a sub-rectangle of a sheet image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Relative path to the sheet PNG (e.g. "./images/map-sprite-sheet.png").
    pub sheet: String,
    /// Square sprite size in pixels.
    pub size: u32,
    /// Column in the sheet grid.
    pub col: u32,
    /// Row in the sheet grid.
    pub row: u32,
}

/// Background tiling roles: the outer ring uses the edge sprites, the
/// interior uses `middle`. `color` fills the page behind the canvas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackgroundSpec {
    pub color: String,
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub middle: String,
}

impl Default for BackgroundSpec {
    fn default() -> Self {
        Self {
            color: "#191c19".to_string(),
            top: "ROCK_1".to_string(),
            bottom: "ROCK_1".to_string(),
            left: "ROCK_1".to_string(),
            right: "ROCK_1".to_string(),
            middle: "GRASS_1".to_string(),
        }
    }
}

impl SpriteManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_manifest() {
        let json = r#"{
            "sprites": {
                "GRASS_1": { "sheet": "./images/map.png", "size": 8, "col": 0, "row": 0 },
                "FIRE_1": { "sheet": "./images/fire.png", "size": 16, "col": 0, "row": 2 }
            }
        }"#;
        let manifest = SpriteManifest::from_json(json).unwrap();
        assert_eq!(manifest.sprites.len(), 2);
        assert_eq!(manifest.sprites["FIRE_1"].size, 16);
        assert_eq!(manifest.sprites["FIRE_1"].row, 2);
        // Background falls back to the default role table.
        assert_eq!(manifest.background, BackgroundSpec::default());
    }

    #[test]
    fn parse_manifest_with_background() {
        let json = r##"{
            "sprites": {
                "GRASS_1": { "sheet": "./images/map.png", "size": 8, "col": 0, "row": 0 }
            },
            "background": {
                "color": "#000000",
                "top": "GRASS_1",
                "bottom": "GRASS_1",
                "left": "GRASS_1",
                "right": "GRASS_1",
                "middle": "GRASS_1"
            }
        }"##;
        let manifest = SpriteManifest::from_json(json).unwrap();
        assert_eq!(manifest.background.color, "#000000");
        assert_eq!(manifest.background.middle, "GRASS_1");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SpriteManifest::from_json("{ not json").is_err());
    }
}
