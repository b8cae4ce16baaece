pub mod assets;
pub mod camera;
pub mod core;
pub mod game;
pub mod objects;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use assets::manifest::{BackgroundSpec, SpriteManifest};
pub use assets::registry::SpriteRegistry;
pub use assets::AssetError;
pub use camera::{Camera, CameraState, ZoomDirection};
pub use crate::core::grid::{Cell, Direction, Grid};
pub use crate::core::rng::{RandomSource, XorShiftRng};
pub use crate::core::time::TickTimer;
pub use game::{Game, GameConfig};
pub use objects::{BittyBud, Building, GameObject, GameObjectId, Tap};
pub use renderer::{CameraTransform, GameRenderer, RenderBuffer, RenderInstance, RenderState};
