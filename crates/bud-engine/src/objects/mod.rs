//! Game object variants and the per-tick contract they share.
//!
//! Objects are owned exclusively by the `Game`'s collection. Each tick
//! they run against a read-only view of the world (grid bounds plus a
//! start-of-tick occupancy snapshot) and report whether they stay alive.

pub mod bitty_bud;
pub mod building;
pub mod tap;

use crate::core::grid::{Cell, Direction, Grid};
use crate::core::rng::RandomSource;

pub use bitty_bud::BittyBud;
pub use building::Building;
pub use tap::Tap;

/// Opaque unique token identifying a game object. Allocated
/// monotonically by the owning `Game`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameObjectId(pub u32);

/// Result of one simulation tick for a single object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Live,
    /// The object's lifecycle ended. `explode_at` asks the game to
    /// place a transient explosion marker at that cell.
    Remove { explode_at: Option<Cell> },
}

/// Read-only world view passed to object ticks, plus the shared
/// random source.
pub struct TickContext<'a> {
    pub grid: &'a Grid,
    /// Cells occupied by blocking objects at the start of the tick.
    pub blocked: &'a [Cell],
    pub rng: &'a mut dyn RandomSource,
}

impl TickContext<'_> {
    /// Out-of-bounds or occupied by a blocking object.
    pub fn is_cell_blocked(&self, cell_x: i32, cell_y: i32) -> bool {
        !self.grid.is_valid_cell(cell_x, cell_y) || self.blocked.contains(&(cell_x, cell_y))
    }
}

/// Per-object render descriptor, flattened into the frame's render
/// state. A plain value derived from live state each tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectRenderState {
    pub position: Cell,
    pub moving: Option<Direction>,
    pub moving_progress: Option<f32>,
    /// Static pixel offsets applied on top of movement interpolation.
    pub offset_x: f32,
    pub offset_y: f32,
    pub z_index: i32,
    pub sprite_id: &'static str,
}

/// A game object variant. Dispatch is a plain match over the three
/// variants.
pub enum GameObject {
    BittyBud(BittyBud),
    Tap(Tap),
    Building(Building),
}

impl GameObject {
    pub fn id(&self) -> GameObjectId {
        match self {
            GameObject::BittyBud(b) => b.id(),
            GameObject::Tap(t) => t.id(),
            GameObject::Building(b) => b.id(),
        }
    }

    /// Whether this object occupies (cellX, cellY) for lookup purposes.
    pub fn is_at(&self, cell_x: i32, cell_y: i32) -> bool {
        match self {
            GameObject::BittyBud(b) => b.is_at(cell_x, cell_y),
            // Taps are purely visual and occupy no cell.
            GameObject::Tap(_) => false,
            GameObject::Building(b) => b.is_at(cell_x, cell_y),
        }
    }

    /// Whether other objects may not share this object's cells.
    pub fn is_blocking(&self) -> bool {
        match self {
            GameObject::BittyBud(b) => b.is_blocking(),
            GameObject::Tap(_) => false,
            GameObject::Building(b) => b.is_blocking(),
        }
    }

    /// Append the cells this object blocks to `cells`.
    pub fn collect_blocking(&self, cells: &mut Vec<Cell>) {
        match self {
            GameObject::BittyBud(b) => cells.push(b.cell()),
            GameObject::Tap(_) => {}
            GameObject::Building(b) => cells.extend(b.footprint()),
        }
    }

    pub fn tick(&mut self, ctx: &mut TickContext<'_>) -> TickOutcome {
        match self {
            GameObject::BittyBud(b) => b.tick(ctx),
            GameObject::Tap(t) => t.tick(),
            GameObject::Building(_) => TickOutcome::Live,
        }
    }

    /// Append this object's render descriptors to `out`. Most variants
    /// emit one; a building emits one per footprint cell.
    pub fn render_states(&self, z_index_size: i32, out: &mut Vec<ObjectRenderState>) {
        match self {
            GameObject::BittyBud(b) => out.push(b.render_state(z_index_size)),
            GameObject::Tap(t) => out.push(t.render_state(z_index_size)),
            GameObject::Building(b) => b.render_states(z_index_size, out),
        }
    }
}
