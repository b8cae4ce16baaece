pub mod draw;
pub mod instance;
pub mod state;

pub use draw::GameRenderer;
pub use instance::{RenderBuffer, RenderInstance};
pub use state::{CameraTransform, RenderState};
