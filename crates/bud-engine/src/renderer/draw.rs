use glam::Vec2;

use crate::assets::registry::SpriteRegistry;
use crate::assets::AssetError;
use crate::core::grid::Direction;
use crate::renderer::instance::{RenderBuffer, RenderInstance};
use crate::renderer::state::{CameraTransform, RenderState};

/// Turns a frame's `RenderState` into a flat instance buffer plus a
/// camera transform for the host to apply. Holds the sprite registry
/// and the board geometry; all game knowledge stays on the game side.
pub struct GameRenderer {
    registry: SpriteRegistry,
    cell_size: u32,
    cells_x: i32,
    cells_y: i32,
    camera_transform: CameraTransform,
    // Scratch for the per-frame z-sort.
    draw_order: Vec<usize>,
}

impl GameRenderer {
    pub fn new(registry: SpriteRegistry, cell_size: u32, cells_x: u32, cells_y: u32) -> Self {
        Self {
            registry,
            cell_size,
            cells_x: cells_x as i32,
            cells_y: cells_y as i32,
            camera_transform: CameraTransform::default(),
            draw_order: Vec::new(),
        }
    }

    pub fn registry(&self) -> &SpriteRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut SpriteRegistry {
        &mut self.registry
    }

    /// Canvas dimensions: the playfield plus a one-cell border ring.
    pub fn canvas_width(&self) -> u32 {
        self.cell_size * (self.cells_x as u32 + 2)
    }

    pub fn canvas_height(&self) -> u32 {
        self.cell_size * (self.cells_y as u32 + 2)
    }

    /// The transform computed by the last successful `render`.
    pub fn camera_transform(&self) -> CameraTransform {
        self.camera_transform
    }

    /// Render one frame into `buf`. Fails if any sheet failed to load,
    /// if sheets are still loading, or if a state names an unknown
    /// sprite. On error the buffer contents are unspecified.
    pub fn render(
        &mut self,
        state: &RenderState,
        buf: &mut RenderBuffer,
    ) -> Result<(), AssetError> {
        if let Some(err) = self.registry.load_error() {
            return Err(err);
        }
        if !self.registry.is_ready() {
            return Err(AssetError::SheetsNotLoaded);
        }

        self.camera_transform = self.compute_camera_transform(state);

        buf.clear();
        self.draw_background(state, buf)?;
        self.draw_game_objects(state, buf)?;
        Ok(())
    }

    /// The camera centers the canvas on its cell: offset by the cell's
    /// distance from the board midpoint, scaled by zoom, then nudged
    /// back half a cell so the cell itself sits centered.
    fn compute_camera_transform(&self, state: &RenderState) -> CameraTransform {
        let cell = self.cell_size as f32;
        let zoom = state.camera.zoom as f32;
        let (cam_x, cam_y) = state.camera.position;

        let mid_x = (self.cells_x + 1) / 2;
        let mid_y = (self.cells_y + 1) / 2;

        let diff_x = (mid_x - cam_x) as f32 * cell * zoom;
        let diff_y = (mid_y - cam_y) as f32 * cell * zoom;
        let half_cell = (cell / 2.0) * zoom;

        CameraTransform {
            translate: Vec2::new(diff_x - half_cell, diff_y - half_cell),
            scale: zoom,
        }
    }

    /// Tile the full canvas including the border ring: the outer ring
    /// takes the edge role sprites, everything inside takes `middle`.
    /// Corners resolve to the top/bottom roles.
    fn draw_background(
        &self,
        state: &RenderState,
        buf: &mut RenderBuffer,
    ) -> Result<(), AssetError> {
        let bg = &state.background;
        for y in 0..self.cells_y + 2 {
            for x in 0..self.cells_x + 2 {
                let role = if y == 0 {
                    &bg.top
                } else if y == self.cells_y + 1 {
                    &bg.bottom
                } else if x == 0 {
                    &bg.left
                } else if x == self.cells_x + 1 {
                    &bg.right
                } else {
                    &bg.middle
                };
                let sprite = self.registry.get(role)?;
                buf.push(RenderInstance {
                    x: (x * self.cell_size as i32) as f32,
                    y: (y * self.cell_size as i32) as f32,
                    size: sprite.size_px as f32,
                    sheet: sprite.sheet as f32,
                    col: sprite.col as f32,
                    row: sprite.row as f32,
                    alpha: 1.0,
                    _pad: 0.0,
                });
            }
        }
        Ok(())
    }

    fn draw_game_objects(
        &mut self,
        state: &RenderState,
        buf: &mut RenderBuffer,
    ) -> Result<(), AssetError> {
        let cell = self.cell_size as f32;

        self.draw_order.clear();
        self.draw_order.extend(0..state.game_objects.len());
        // Stable: equal z-indexes keep insertion order.
        self.draw_order
            .sort_by_key(|&i| state.game_objects[i].z_index);

        for &i in &self.draw_order {
            let obj = &state.game_objects[i];
            let mut offset_x = obj.offset_x;
            let mut offset_y = obj.offset_y;

            // In-flight movement shifts the sprite up to one full cell
            // toward the target.
            if let (Some(moving), Some(progress)) = (obj.moving, obj.moving_progress) {
                match moving {
                    Direction::Up => offset_y -= cell * progress,
                    Direction::Down => offset_y += cell * progress,
                    Direction::Left => offset_x -= cell * progress,
                    Direction::Right => offset_x += cell * progress,
                }
            }

            let sprite = self.registry.get(obj.sprite_id)?;
            // +1 cell on each axis steps over the border ring.
            buf.push(RenderInstance {
                x: (obj.position.0 + 1) as f32 * cell + offset_x,
                y: (obj.position.1 + 1) as f32 * cell + offset_y,
                size: sprite.size_px as f32,
                sheet: sprite.sheet as f32,
                col: sprite.col as f32,
                row: sprite.row as f32,
                alpha: 1.0,
                _pad: 0.0,
            });
        }
        Ok(())
    }
}
