use crate::core::grid::{Cell, Direction};
use crate::objects::{GameObjectId, ObjectRenderState, TickContext, TickOutcome};

/// Ticks between wander moves. Ignited buds retry three times as fast.
const MOVE_INTERVAL_TICKS: u32 = 30;
/// Movement interpolation advance per tick.
const PROGRESS_STEP: f32 = 0.2;
const IGNITED_PROGRESS_STEP: f32 = 0.3;
/// Default tick count an ignited bud survives before burning out.
const DEFAULT_DEATH_FRAMES: u32 = 90;

const SPRITE_FRONT: &str = "BITTY_BUD_FRONT";
const SPRITE_HOTT_FRONT: &str = "BITTY_BUD_HOTT_FRONT";

/// A wandering inhabitant of the grid. Idles on a cooldown, picks a
/// random direction, and walks one cell at a time. Igniting it speeds
/// it up, swaps its sprite and starts a burn-out countdown.
pub struct BittyBud {
    id: GameObjectId,
    cell: Cell,
    moving: Option<Direction>,
    progress: f32,
    ignited: bool,
    death_frames: u32,
    frame: u32,
    ticks_until_next_move: u32,
    sprite_id: &'static str,
}

impl BittyBud {
    pub fn new(id: GameObjectId, cell_x: i32, cell_y: i32) -> Self {
        Self {
            id,
            cell: (cell_x, cell_y),
            moving: None,
            progress: 0.0,
            ignited: false,
            death_frames: DEFAULT_DEATH_FRAMES,
            frame: 1,
            ticks_until_next_move: MOVE_INTERVAL_TICKS,
            sprite_id: SPRITE_FRONT,
        }
    }

    pub fn id(&self) -> GameObjectId {
        self.id
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn is_at(&self, cell_x: i32, cell_y: i32) -> bool {
        self.cell == (cell_x, cell_y)
    }

    pub fn is_blocking(&self) -> bool {
        true
    }

    pub fn is_ignited(&self) -> bool {
        self.ignited
    }

    /// Set the bud on fire with the default burn-out countdown.
    pub fn ignite(&mut self) {
        self.ignite_after(DEFAULT_DEATH_FRAMES);
    }

    /// Set the bud on fire. The sprite swaps to the hot variant, the
    /// move cooldown clears so the next move attempt is immediate, and
    /// the burn-out counter starts against `death_frames`.
    pub fn ignite_after(&mut self, death_frames: u32) {
        self.ignited = true;
        self.sprite_id = SPRITE_HOTT_FRONT;
        self.ticks_until_next_move = 0;
        self.death_frames = death_frames;
    }

    pub fn tick(&mut self, ctx: &mut TickContext<'_>) -> TickOutcome {
        if self.ignited {
            if self.frame <= self.death_frames {
                self.frame += 1;
            } else {
                return TickOutcome::Remove {
                    explode_at: Some(self.cell),
                };
            }
        }

        if let Some(direction) = self.moving {
            self.progress += if self.ignited {
                IGNITED_PROGRESS_STEP
            } else {
                PROGRESS_STEP
            };
            if self.progress >= 1.0 {
                // Done moving: commit the new cell.
                self.cell = direction.step(self.cell);
                self.progress = 0.0;
                self.moving = None;
            }
        } else {
            self.tick_wander(ctx);
        }

        TickOutcome::Live
    }

    fn tick_wander(&mut self, ctx: &mut TickContext<'_>) {
        if self.ticks_until_next_move > 0 {
            self.ticks_until_next_move -= 1;
            return;
        }

        let direction = Direction::ALL[ctx.rng.next_int(4) as usize];
        let (target_x, target_y) = direction.step(self.cell);
        if ctx.is_cell_blocked(target_x, target_y) {
            // Stay idle; the cooldown only resets on a successful start.
            return;
        }

        self.ticks_until_next_move = if self.ignited {
            MOVE_INTERVAL_TICKS / 3
        } else {
            MOVE_INTERVAL_TICKS
        };
        self.moving = Some(direction);
        self.progress = 0.0;
    }

    pub fn render_state(&self, z_index_size: i32) -> ObjectRenderState {
        ObjectRenderState {
            position: self.cell,
            moving: self.moving,
            moving_progress: self.moving.map(|_| self.progress),
            offset_x: 0.0,
            offset_y: -3.0,
            z_index: self.cell.1 * z_index_size + 1,
            sprite_id: self.sprite_id,
        }
    }
}
