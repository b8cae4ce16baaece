use std::collections::HashMap;

use crate::assets::manifest::SpriteManifest;
use crate::assets::AssetError;

/// A resolved sprite: sheet index plus sub-rectangle coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sprite {
    /// Index into the registry's deduplicated sheet list.
    pub sheet: u32,
    pub col: u32,
    pub row: u32,
    pub size_px: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SheetState {
    Pending,
    Loaded,
    Failed,
}

/// Registry of named sprites built from a manifest. Sheet paths are
/// deduplicated so the host loads each image once, in parallel; the
/// host reports completion back per sheet.
pub struct SpriteRegistry {
    sprites: HashMap<String, Sprite>,
    sheet_paths: Vec<String>,
    sheet_states: Vec<SheetState>,
}

impl SpriteRegistry {
    pub fn from_manifest(manifest: &SpriteManifest) -> Self {
        let mut sheet_paths: Vec<String> = manifest
            .sprites
            .values()
            .map(|desc| desc.sheet.clone())
            .collect();
        sheet_paths.sort();
        sheet_paths.dedup();

        let mut sprites = HashMap::with_capacity(manifest.sprites.len());
        for (name, desc) in &manifest.sprites {
            // Index lookup cannot fail: the path list was built from
            // these same descriptors.
            let sheet = sheet_paths.iter().position(|p| *p == desc.sheet).unwrap_or(0) as u32;
            sprites.insert(
                name.clone(),
                Sprite {
                    sheet,
                    col: desc.col,
                    row: desc.row,
                    size_px: desc.size,
                },
            );
        }

        let sheet_states = vec![SheetState::Pending; sheet_paths.len()];
        Self {
            sprites,
            sheet_paths,
            sheet_states,
        }
    }

    /// Look up a sprite by name. An unknown id is a configuration
    /// mismatch and fails loudly.
    pub fn get(&self, name: &str) -> Result<&Sprite, AssetError> {
        self.sprites
            .get(name)
            .ok_or_else(|| AssetError::UnknownSprite(name.to_string()))
    }

    /// Unique sheet paths, in stable order. Indexes match `Sprite::sheet`.
    pub fn sheet_paths(&self) -> &[String] {
        &self.sheet_paths
    }

    /// Record that the host finished loading a sheet image.
    /// Returns false if the path is not part of this registry.
    pub fn mark_loaded(&mut self, path: &str) -> bool {
        match self.sheet_paths.iter().position(|p| p == path) {
            Some(idx) => {
                self.sheet_states[idx] = SheetState::Loaded;
                true
            }
            None => false,
        }
    }

    /// Record that a sheet image failed to load. Poisons initialization.
    pub fn mark_failed(&mut self, path: &str) {
        log::error!("sprite sheet failed to load: {}", path);
        if let Some(idx) = self.sheet_paths.iter().position(|p| p == path) {
            self.sheet_states[idx] = SheetState::Failed;
        }
    }

    /// True once every sheet has loaded successfully.
    pub fn is_ready(&self) -> bool {
        self.sheet_states.iter().all(|s| *s == SheetState::Loaded)
    }

    /// The first recorded sheet failure, if any.
    pub fn load_error(&self) -> Option<AssetError> {
        self.sheet_states
            .iter()
            .position(|s| *s == SheetState::Failed)
            .map(|idx| AssetError::SheetLoadFailed(self.sheet_paths[idx].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> SpriteManifest {
        SpriteManifest::from_json(
            r#"{
            "sprites": {
                "GRASS_1": { "sheet": "./images/map.png", "size": 8, "col": 0, "row": 0 },
                "ROCK_1":  { "sheet": "./images/map.png", "size": 8, "col": 0, "row": 2 },
                "FIRE_1":  { "sheet": "./images/fire.png", "size": 16, "col": 0, "row": 2 }
            }
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn dedupes_sheet_paths() {
        let reg = SpriteRegistry::from_manifest(&manifest());
        assert_eq!(reg.sheet_paths().len(), 2);
    }

    #[test]
    fn sprites_resolve_to_their_sheet() {
        let reg = SpriteRegistry::from_manifest(&manifest());
        let grass = reg.get("GRASS_1").unwrap();
        let rock = reg.get("ROCK_1").unwrap();
        let fire = reg.get("FIRE_1").unwrap();
        assert_eq!(grass.sheet, rock.sheet);
        assert_ne!(grass.sheet, fire.sheet);
        assert_eq!(fire.size_px, 16);
    }

    #[test]
    fn unknown_sprite_fails_loudly() {
        let reg = SpriteRegistry::from_manifest(&manifest());
        assert!(matches!(
            reg.get("NOT_A_SPRITE"),
            Err(AssetError::UnknownSprite(_))
        ));
    }

    #[test]
    fn ready_only_after_every_sheet_loads() {
        let mut reg = SpriteRegistry::from_manifest(&manifest());
        assert!(!reg.is_ready());
        assert!(reg.mark_loaded("./images/fire.png"));
        assert!(!reg.is_ready());
        assert!(reg.mark_loaded("./images/map.png"));
        assert!(reg.is_ready());
    }

    #[test]
    fn failure_poisons_initialization() {
        let mut reg = SpriteRegistry::from_manifest(&manifest());
        reg.mark_loaded("./images/map.png");
        reg.mark_failed("./images/fire.png");
        assert!(!reg.is_ready());
        assert!(matches!(
            reg.load_error(),
            Some(AssetError::SheetLoadFailed(p)) if p == "./images/fire.png"
        ));
    }

    #[test]
    fn unknown_path_is_ignored() {
        let mut reg = SpriteRegistry::from_manifest(&manifest());
        assert!(!reg.mark_loaded("./images/unrelated.png"));
    }
}
