use crate::core::grid::Cell;
use crate::objects::{GameObjectId, ObjectRenderState, TickOutcome};

const SMOKE_FRAMES: [&str; 8] = [
    "SMOKE_1", "SMOKE_2", "SMOKE_3", "SMOKE_4", "SMOKE_5", "SMOKE_6", "SMOKE_7", "SMOKE_8",
];
const FIRE_FRAMES: [&str; 8] = [
    "FIRE_1", "FIRE_2", "FIRE_3", "FIRE_4", "FIRE_5", "FIRE_6", "FIRE_7", "FIRE_8",
];
/// Simulation ticks each animation frame is held for.
const TICKS_PER_FRAME: u32 = 4;

/// Transient visual marker: a puff of smoke, or fire when ignited.
/// Plays its frames once, then reports removal. Never blocks and is
/// invisible to cell lookups.
pub struct Tap {
    id: GameObjectId,
    cell: Cell,
    frames: &'static [&'static str; 8],
    frame: usize,
    ticks_in_frame: u32,
}

impl Tap {
    pub fn new(id: GameObjectId, cell_x: i32, cell_y: i32, ignite: bool) -> Self {
        Self {
            id,
            cell: (cell_x, cell_y),
            frames: if ignite { &FIRE_FRAMES } else { &SMOKE_FRAMES },
            frame: 0,
            ticks_in_frame: 0,
        }
    }

    pub fn id(&self) -> GameObjectId {
        self.id
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.ticks_in_frame += 1;
        if self.ticks_in_frame >= TICKS_PER_FRAME {
            self.ticks_in_frame = 0;
            self.frame += 1;
            if self.frame >= self.frames.len() {
                return TickOutcome::Remove { explode_at: None };
            }
        }
        TickOutcome::Live
    }

    pub fn render_state(&self, z_index_size: i32) -> ObjectRenderState {
        ObjectRenderState {
            position: self.cell,
            moving: None,
            moving_progress: None,
            // The 16px effect sprite is centered over the 8px cell and
            // lifted so flames rise above whatever sits there.
            offset_x: -4.0,
            offset_y: -8.0,
            // Drawn above buds on the same row.
            z_index: self.cell.1 * z_index_size + 2,
            sprite_id: self.frames[self.frame],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_smoke_frames_then_removes() {
        let mut tap = Tap::new(GameObjectId(1), 2, 3, false);
        assert_eq!(tap.render_state(10).sprite_id, "SMOKE_1");

        let mut outcome = TickOutcome::Live;
        let mut ticks = 0;
        while outcome == TickOutcome::Live {
            outcome = tap.tick();
            ticks += 1;
            assert!(ticks <= 100, "tap never finished");
        }
        assert_eq!(outcome, TickOutcome::Remove { explode_at: None });
        assert_eq!(ticks, 8 * 4);
    }

    #[test]
    fn ignited_tap_plays_fire() {
        let mut tap = Tap::new(GameObjectId(1), 0, 0, true);
        assert_eq!(tap.render_state(10).sprite_id, "FIRE_1");
        for _ in 0..4 {
            tap.tick();
        }
        assert_eq!(tap.render_state(10).sprite_id, "FIRE_2");
    }

    #[test]
    fn draws_above_buds_on_its_row() {
        let tap = Tap::new(GameObjectId(1), 0, 3, false);
        assert_eq!(tap.render_state(10).z_index, 32);
    }
}
