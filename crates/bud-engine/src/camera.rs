use crate::core::grid::{Cell, Direction, Grid};

/// Zoom adjustment direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Decode from the numeric protocol value used by the host page.
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(ZoomDirection::In),
            1 => Some(ZoomDirection::Out),
            _ => None,
        }
    }
}

/// Pure snapshot of the camera for the renderer. Derived fresh each
/// frame; holds no behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub position: Cell,
    pub zoom: u32,
}

/// Grid-space camera. Position is a cell coordinate, zoom an integer
/// level in [1, MAX_ZOOM]. Only explicit `pan`/`zoom` calls mutate it;
/// the camera never auto-scrolls.
pub struct Camera {
    position: Cell,
    zoom: u32,
    max_cell_x: i32,
    max_cell_y: i32,
}

impl Camera {
    pub const MAX_ZOOM: u32 = 4;

    /// Create a camera centered on the grid.
    pub fn create(grid: &Grid) -> Self {
        Self {
            position: (grid.cells_x() / 2, grid.cells_y() / 2),
            zoom: 1,
            // The border ring makes the edge positions meaningful, so
            // the pan range is [0, cells] inclusive on each axis.
            max_cell_x: grid.cells_x(),
            max_cell_y: grid.cells_y(),
        }
    }

    pub fn render_state(&self) -> CameraState {
        CameraState {
            position: self.position,
            zoom: self.zoom,
        }
    }

    /// Shift the camera one cell. No-op at the bounds.
    pub fn pan(&mut self, direction: Direction) {
        let (x, y) = direction.step(self.position);
        if x < 0 || x > self.max_cell_x || y < 0 || y > self.max_cell_y {
            return;
        }
        self.position = (x, y);
    }

    /// Adjust zoom one level. No-op at the limits.
    pub fn zoom(&mut self, direction: ZoomDirection) {
        match direction {
            ZoomDirection::In => {
                if self.zoom < Self::MAX_ZOOM {
                    self.zoom += 1;
                }
            }
            ZoomDirection::Out => {
                if self.zoom > 1 {
                    self.zoom -= 1;
                }
            }
        }
    }
}
