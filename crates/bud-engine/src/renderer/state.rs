use glam::Vec2;

use crate::assets::manifest::BackgroundSpec;
use crate::camera::CameraState;
use crate::objects::ObjectRenderState;

/// Everything the renderer needs for one frame, produced fresh by the
/// game each time. Plain values only; the renderer never reaches back
/// into live game state.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub background: BackgroundSpec,
    pub camera: CameraState,
    pub game_objects: Vec<ObjectRenderState>,
}

/// Camera transform the host applies to the canvas element as a whole:
/// `translate(x, y) scale(zoom)` in CSS terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub translate: Vec2,
    pub scale: f32,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
        }
    }
}
