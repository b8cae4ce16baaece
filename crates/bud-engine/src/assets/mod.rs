pub mod manifest;
pub mod registry;

use thiserror::Error;

/// Asset failure taxonomy. Sheet load failures and unknown sprite ids
/// are loud; out-of-bounds cell access is not an error at all.
#[derive(Debug, Error)]
pub enum AssetError {
    /// A sprite id named by a render state or the background role table
    /// has no entry in the manifest. Fails the frame rather than
    /// drawing over it silently.
    #[error("unknown sprite id `{0}`")]
    UnknownSprite(String),

    /// A sprite sheet image failed to load in the host. Fatal to
    /// initialization.
    #[error("sprite sheet `{0}` failed to load")]
    SheetLoadFailed(String),

    /// Rendering was attempted before every sheet finished loading.
    #[error("sprite sheets are still loading")]
    SheetsNotLoaded,

    #[error("manifest parse error: {0}")]
    Manifest(#[from] serde_json::Error),
}
