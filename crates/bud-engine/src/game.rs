use crate::assets::manifest::BackgroundSpec;
use crate::camera::{Camera, ZoomDirection};
use crate::core::grid::{Cell, Direction, Grid};
use crate::core::rng::{RandomSource, XorShiftRng};
use crate::objects::{BittyBud, Building, GameObject, GameObjectId, Tap, TickContext, TickOutcome};
use crate::renderer::RenderState;

/// Board geometry and tuning. The defaults match the shipped game; the
/// host may override any of them before construction.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub cell_size: u32,
    pub cells_x: u32,
    pub cells_y: u32,
    /// Z-index span reserved per row, so objects on the same row can
    /// still layer against each other.
    pub z_index_size: i32,
    /// Simulation rate in ticks per second.
    pub fps: u32,
    pub background: BackgroundSpec,
    pub rng_seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 8,
            cells_x: 8,
            cells_y: 8,
            z_index_size: 10,
            fps: 60,
            background: BackgroundSpec::default(),
            rng_seed: 0x00c0_ffee,
        }
    }
}

/// Owns the world: grid, camera, the object collection and the shared
/// random source. All input is applied synchronously as it arrives;
/// `tick` advances the simulation one step.
pub struct Game {
    grid: Grid,
    camera: Camera,
    objects: Vec<GameObject>,
    next_id: u32,
    rng: Box<dyn RandomSource>,
    adding_building: bool,
    background: BackgroundSpec,
    cell_size: u32,
    z_index_size: i32,
    fps: u32,
    // Reused across ticks for the occupancy snapshot.
    blocked_scratch: Vec<Cell>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let rng = Box::new(XorShiftRng::new(config.rng_seed));
        Self::with_rng(config, rng)
    }

    /// Construct with an explicit random source.
    pub fn with_rng(config: GameConfig, rng: Box<dyn RandomSource>) -> Self {
        let grid = Grid::new(config.cells_x, config.cells_y);
        let camera = Camera::create(&grid);
        Self {
            grid,
            camera,
            objects: Vec::new(),
            next_id: 0,
            rng,
            adding_building: false,
            background: config.background,
            cell_size: config.cell_size,
            z_index_size: config.z_index_size,
            fps: config.fps,
            blocked_scratch: Vec::new(),
        }
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn cells_x(&self) -> u32 {
        self.grid.cells_x() as u32
    }

    pub fn cells_y(&self) -> u32 {
        self.grid.cells_y() as u32
    }

    pub fn background(&self) -> &BackgroundSpec {
        &self.background
    }

    pub fn set_background(&mut self, background: BackgroundSpec) {
        self.background = background;
    }

    pub fn move_camera(&mut self, direction: Direction) {
        self.camera.pan(direction);
    }

    pub fn zoom_camera(&mut self, direction: ZoomDirection) {
        self.camera.zoom(direction);
    }

    pub fn set_adding_building(&mut self, adding: bool) {
        self.adding_building = adding;
    }

    /// Handle a pointer-down at canvas pixel coordinates. Clicks on the
    /// border ring or outside the canvas are ignored.
    pub fn handle_click(&mut self, x: f32, y: f32) {
        let Some((cell_x, cell_y)) = self.cell_at(x, y) else {
            return;
        };

        if self.adding_building {
            self.add_building(cell_x, cell_y);
            return;
        }

        if let Some(idx) = self.objects.iter().position(|o| o.is_at(cell_x, cell_y)) {
            if matches!(self.objects[idx], GameObject::Building(_)) {
                // Poking a building burns at the poked post and has a
                // 50% chance of shaking a bud loose nearby.
                self.add_tap(cell_x, cell_y, true);
                if self.rng.next_f32() > 0.5 {
                    if let Some((safe_x, safe_y)) = self.closest_empty_cell(cell_x, cell_y) {
                        let ignite = self.rng.next_f32() > 0.5;
                        self.add_bitty_bud(safe_x, safe_y, ignite);
                        self.add_tap(safe_x, safe_y, false);
                    }
                }
            } else {
                self.add_tap(cell_x, cell_y, true);
                if let GameObject::BittyBud(bud) = &mut self.objects[idx] {
                    bud.ignite();
                }
            }
            return;
        }

        if self.rng.next_f32() > 0.8 {
            self.add_bitty_bud(cell_x, cell_y, false);
        } else {
            self.add_tap(cell_x, cell_y, false);
        }
    }

    /// Map canvas pixels to a playfield cell, stepping over the border
    /// ring. `None` for the ring itself or anything outside the canvas.
    fn cell_at(&self, x: f32, y: f32) -> Option<Cell> {
        let cell_x = (x / self.cell_size as f32).floor() as i32;
        let cell_y = (y / self.cell_size as f32).floor() as i32;

        if cell_x <= 0 || cell_x > self.grid.cells_x() {
            return None;
        }
        if cell_y <= 0 || cell_y > self.grid.cells_y() {
            return None;
        }

        Some((cell_x - 1, cell_y - 1))
    }

    pub fn object_at(&self, cell_x: i32, cell_y: i32) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.is_at(cell_x, cell_y))
    }

    /// Out of bounds counts as blocked.
    pub fn is_cell_blocked(&self, cell_x: i32, cell_y: i32) -> bool {
        if !self.grid.is_valid_cell(cell_x, cell_y) {
            return true;
        }
        self.objects
            .iter()
            .any(|o| o.is_at(cell_x, cell_y) && o.is_blocking())
    }

    /// The cell itself, then its four neighbors in a fixed order.
    pub fn closest_empty_cell(&self, cell_x: i32, cell_y: i32) -> Option<Cell> {
        let candidates = [
            (cell_x, cell_y),
            (cell_x + 1, cell_y),
            (cell_x - 1, cell_y),
            (cell_x, cell_y + 1),
            (cell_x, cell_y - 1),
        ];
        candidates
            .into_iter()
            .find(|&(x, y)| !self.is_cell_blocked(x, y))
    }

    pub fn add_bitty_bud(&mut self, cell_x: i32, cell_y: i32, ignite: bool) -> GameObjectId {
        let id = self.alloc_id();
        let mut bud = BittyBud::new(id, cell_x, cell_y);
        if ignite {
            bud.ignite();
        }
        self.objects.push(GameObject::BittyBud(bud));
        id
    }

    pub fn add_tap(&mut self, cell_x: i32, cell_y: i32, ignite: bool) -> GameObjectId {
        let id = self.alloc_id();
        self.objects
            .push(GameObject::Tap(Tap::new(id, cell_x, cell_y, ignite)));
        id
    }

    /// Place a 2x2 building anchored at (cellX, cellY). Fails when any
    /// footprint cell is blocked or out of bounds.
    pub fn add_building(&mut self, cell_x: i32, cell_y: i32) -> Option<GameObjectId> {
        let blocked = Building::footprint_at(cell_x, cell_y)
            .into_iter()
            .any(|(x, y)| self.is_cell_blocked(x, y));
        if blocked {
            log::debug!("building placement at ({}, {}) rejected", cell_x, cell_y);
            return None;
        }

        let id = self.alloc_id();
        self.objects
            .push(GameObject::Building(Building::new(id, cell_x, cell_y)));
        Some(id)
    }

    /// Remove an object, optionally leaving an explosion marker behind.
    pub fn remove_object(&mut self, id: GameObjectId, explode_at: Option<Cell>) {
        if let Some((x, y)) = explode_at {
            self.add_tap(x, y, false);
        }
        self.objects.retain(|o| o.id() != id);
    }

    /// Advance the simulation one step. Objects tick in insertion order
    /// against a start-of-tick occupancy snapshot; removals they report
    /// apply after every object has ticked.
    pub fn tick(&mut self) {
        let mut blocked = std::mem::take(&mut self.blocked_scratch);
        blocked.clear();
        for obj in &self.objects {
            obj.collect_blocking(&mut blocked);
        }

        let mut removals: Vec<(GameObjectId, Option<Cell>)> = Vec::new();
        for obj in &mut self.objects {
            let mut ctx = TickContext {
                grid: &self.grid,
                blocked: &blocked,
                rng: self.rng.as_mut(),
            };
            if let TickOutcome::Remove { explode_at } = obj.tick(&mut ctx) {
                removals.push((obj.id(), explode_at));
            }
        }

        for (id, explode_at) in removals {
            self.remove_object(id, explode_at);
        }

        self.blocked_scratch = blocked;
    }

    /// Snapshot the whole world for the renderer.
    pub fn render_state(&self) -> RenderState {
        let mut game_objects = Vec::with_capacity(self.objects.len());
        for obj in &self.objects {
            obj.render_states(self.z_index_size, &mut game_objects);
        }
        RenderState {
            background: self.background.clone(),
            camera: self.camera.render_state(),
            game_objects,
        }
    }

    fn alloc_id(&mut self) -> GameObjectId {
        let id = GameObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    #[cfg(test)]
    pub(crate) fn insert_object(&mut self, obj: GameObject) {
        self.objects.push(obj);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedRandom;

    fn game_with(ints: Vec<u32>, floats: Vec<f32>) -> Game {
        Game::with_rng(
            GameConfig::default(),
            Box::new(ScriptedRandom::new(ints, floats)),
        )
    }

    #[test]
    fn allocates_distinct_ids() {
        let mut game = game_with(vec![0], vec![]);
        let a = game.add_bitty_bud(0, 0, false);
        let b = game.add_tap(1, 1, false);
        let c = game.add_building(4, 4).unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
    }

    #[test]
    fn click_on_border_ring_is_ignored() {
        let mut game = game_with(vec![0], vec![1.0]);
        // Cell size 8: pixel (4, 4) is inside the ring.
        game.handle_click(4.0, 4.0);
        // Past the far edge: cells 8x8 end at pixel 72.
        game.handle_click(75.0, 20.0);
        assert!(game.render_state().game_objects.is_empty());
    }

    #[test]
    fn click_spawns_bud_on_a_high_roll() {
        let mut game = game_with(vec![0], vec![0.9]);
        // Pixel (8, 8) is cell (0, 0).
        game.handle_click(8.0, 8.0);
        let state = game.render_state();
        assert_eq!(state.game_objects.len(), 1);
        assert_eq!(state.game_objects[0].sprite_id, "BITTY_BUD_FRONT");
    }

    #[test]
    fn click_spawns_tap_on_a_low_roll() {
        let mut game = game_with(vec![0], vec![0.2]);
        game.handle_click(8.0, 8.0);
        let state = game.render_state();
        assert_eq!(state.game_objects.len(), 1);
        assert_eq!(state.game_objects[0].sprite_id, "SMOKE_1");
    }

    #[test]
    fn clicking_a_bud_ignites_it() {
        let mut game = game_with(vec![0], vec![0.0]);
        game.add_bitty_bud(2, 2, false);
        // Cell (2, 2) is pixels [24, 32).
        game.handle_click(25.0, 25.0);

        let state = game.render_state();
        let sprites: Vec<_> = state.game_objects.iter().map(|o| o.sprite_id).collect();
        assert!(sprites.contains(&"BITTY_BUD_HOTT_FRONT"));
        assert!(sprites.contains(&"FIRE_1"));
        match game.object_at(2, 2) {
            Some(GameObject::BittyBud(bud)) => assert!(bud.is_ignited()),
            other => panic!("expected a bud, got {:?}", other.map(|o| o.id())),
        }
    }

    #[test]
    fn clicking_a_building_can_shake_a_bud_loose() {
        // First float: spawn roll passes; second: bud spawns unignited.
        let mut game = game_with(vec![0], vec![0.6, 0.2]);
        game.add_building(2, 2);
        game.handle_click(25.0, 25.0);

        let state = game.render_state();
        let sprites: Vec<_> = state.game_objects.iter().map(|o| o.sprite_id).collect();
        assert!(sprites.contains(&"FIRE_1"));
        assert!(sprites.contains(&"BITTY_BUD_FRONT"));
        assert!(sprites.contains(&"SMOKE_1"));
        // Footprint cells are blocked, so the bud lands beside them.
        match game.object_at(1, 2) {
            Some(GameObject::BittyBud(_)) => {}
            _ => panic!("expected the bud on the first empty neighbor"),
        }
    }

    #[test]
    fn clicking_a_building_may_only_burn() {
        let mut game = game_with(vec![0], vec![0.3]);
        game.add_building(2, 2);
        game.handle_click(25.0, 25.0);

        let state = game.render_state();
        let sprites: Vec<_> = state.game_objects.iter().map(|o| o.sprite_id).collect();
        assert!(sprites.contains(&"FIRE_1"));
        assert!(!sprites.contains(&"BITTY_BUD_FRONT"));
    }

    #[test]
    fn building_mode_places_buildings() {
        let mut game = game_with(vec![0], vec![]);
        game.set_adding_building(true);
        game.handle_click(25.0, 25.0);
        assert!(matches!(
            game.object_at(2, 2),
            Some(GameObject::Building(_))
        ));
        // The whole footprint resolves to the same building.
        assert!(game.object_at(3, 3).is_some());
    }

    #[test]
    fn building_rejects_blocked_footprint() {
        let mut game = game_with(vec![0], vec![]);
        game.add_bitty_bud(3, 3, false);
        assert!(game.add_building(2, 2).is_none());
        // Out of bounds anchor: footprint would leave the grid.
        assert!(game.add_building(7, 7).is_none());
        assert!(game.add_building(4, 4).is_some());
    }

    #[test]
    fn cell_blocking_covers_bounds_and_occupants() {
        let mut game = game_with(vec![0], vec![]);
        game.add_bitty_bud(1, 1, false);
        game.add_tap(2, 2, false);
        assert!(game.is_cell_blocked(-1, 0));
        assert!(game.is_cell_blocked(8, 0));
        assert!(game.is_cell_blocked(1, 1));
        // Taps never block.
        assert!(!game.is_cell_blocked(2, 2));
    }

    #[test]
    fn closest_empty_cell_prefers_self_then_neighbors() {
        let mut game = game_with(vec![0], vec![]);
        assert_eq!(game.closest_empty_cell(3, 3), Some((3, 3)));
        game.add_bitty_bud(3, 3, false);
        assert_eq!(game.closest_empty_cell(3, 3), Some((4, 3)));
        game.add_bitty_bud(4, 3, false);
        assert_eq!(game.closest_empty_cell(3, 3), Some((2, 3)));
    }

    #[test]
    fn closest_empty_cell_respects_grid_edges() {
        let mut game = game_with(vec![0], vec![]);
        game.add_bitty_bud(0, 0, false);
        game.add_bitty_bud(1, 0, false);
        assert_eq!(game.closest_empty_cell(0, 0), Some((0, 1)));
    }

    #[test]
    fn burned_out_bud_leaves_an_explosion() {
        let mut game = game_with(vec![1], vec![]);
        let mut bud = BittyBud::new(GameObjectId(900), 2, 2);
        bud.ignite_after(1);
        game.insert_object(GameObject::BittyBud(bud));

        game.tick();
        game.tick();

        let sprites: Vec<_> = game
            .render_state()
            .game_objects
            .iter()
            .map(|o| o.sprite_id)
            .collect();
        assert!(!sprites.iter().any(|s| s.starts_with("BITTY_BUD")));
        assert_eq!(sprites, vec!["SMOKE_1"]);
    }

    #[test]
    fn taps_expire_on_their_own() {
        let mut game = game_with(vec![0], vec![]);
        game.add_tap(1, 1, false);
        for _ in 0..32 {
            game.tick();
        }
        assert!(game.render_state().game_objects.is_empty());
    }

    #[test]
    fn render_state_flattens_every_object() {
        let mut game = game_with(vec![0], vec![]);
        game.add_bitty_bud(0, 0, false);
        game.add_building(4, 4);
        let state = game.render_state();
        // One bud descriptor plus four building posts.
        assert_eq!(state.game_objects.len(), 5);
        assert_eq!(state.camera.position, (4, 4));
        assert_eq!(state.background, BackgroundSpec::default());
    }
}
