use crate::core::grid::Cell;
use crate::objects::{GameObjectId, ObjectRenderState};

/// Post sprite for each footprint cell, as (sprite, dx, dy) from the
/// anchor (top-left) cell.
const POST_SPRITES: [(&str, i32, i32); 4] = [
    ("BLDG_POST_0_0", 0, 0),
    ("BLDG_POST_1_0", 1, 0),
    ("BLDG_POST_0_1", 0, 1),
    ("BLDG_POST_1_1", 1, 1),
];

/// A static 2x2 structure. Occupancy is a real contract here: lookup,
/// blocking and placement validation all cover the full footprint.
pub struct Building {
    id: GameObjectId,
    anchor: Cell,
}

impl Building {
    pub fn new(id: GameObjectId, cell_x: i32, cell_y: i32) -> Self {
        Self {
            id,
            anchor: (cell_x, cell_y),
        }
    }

    /// The four cells a building anchored at (cellX, cellY) occupies.
    pub fn footprint_at(cell_x: i32, cell_y: i32) -> [Cell; 4] {
        [
            (cell_x, cell_y),
            (cell_x + 1, cell_y),
            (cell_x, cell_y + 1),
            (cell_x + 1, cell_y + 1),
        ]
    }

    pub fn id(&self) -> GameObjectId {
        self.id
    }

    pub fn footprint(&self) -> [Cell; 4] {
        Self::footprint_at(self.anchor.0, self.anchor.1)
    }

    pub fn is_at(&self, cell_x: i32, cell_y: i32) -> bool {
        self.footprint().contains(&(cell_x, cell_y))
    }

    pub fn is_blocking(&self) -> bool {
        true
    }

    /// One post sprite per footprint cell, z-ordered by row so buds
    /// walking past the lower posts are drawn behind them.
    pub fn render_states(&self, z_index_size: i32, out: &mut Vec<ObjectRenderState>) {
        for (sprite_id, dx, dy) in POST_SPRITES {
            let cell = (self.anchor.0 + dx, self.anchor.1 + dy);
            out.push(ObjectRenderState {
                position: cell,
                moving: None,
                moving_progress: None,
                offset_x: 0.0,
                offset_y: 0.0,
                z_index: cell.1 * z_index_size + 1,
                sprite_id,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupies_all_four_cells() {
        let bldg = Building::new(GameObjectId(1), 2, 2);
        assert!(bldg.is_at(2, 2));
        assert!(bldg.is_at(3, 2));
        assert!(bldg.is_at(2, 3));
        assert!(bldg.is_at(3, 3));
        assert!(!bldg.is_at(4, 2));
        assert!(!bldg.is_at(1, 2));
    }

    #[test]
    fn renders_one_post_per_cell() {
        let bldg = Building::new(GameObjectId(1), 1, 1);
        let mut out = Vec::new();
        bldg.render_states(10, &mut out);
        assert_eq!(out.len(), 4);
        assert_eq!(out[0].sprite_id, "BLDG_POST_0_0");
        assert_eq!(out[0].z_index, 11);
        // Lower row posts sit above the upper row.
        assert_eq!(out[3].sprite_id, "BLDG_POST_1_1");
        assert_eq!(out[3].z_index, 21);
    }
}
