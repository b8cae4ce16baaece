use bud_engine::{
    AssetError, Direction, Game, GameConfig, GameRenderer, RenderBuffer, SpriteManifest,
    SpriteRegistry, TickTimer, ZoomDirection,
};

/// Owns the whole wasm-side game: simulation, renderer and the frame
/// buffer the host reads. The host drives it from requestAnimationFrame
/// and reports asset loads back as they finish.
///
/// Input is applied synchronously as each call arrives; only `tick`
/// advances the simulation.
pub struct GameRunner {
    game: Game,
    renderer: Option<GameRenderer>,
    buffer: RenderBuffer,
    timer: TickTimer,
    running: bool,
    rendered_first_frame: bool,
}

impl GameRunner {
    pub fn new(config: GameConfig) -> Self {
        let timer = TickTimer::new(config.fps);
        Self {
            game: Game::new(config),
            renderer: None,
            buffer: RenderBuffer::new(),
            timer,
            running: true,
            rendered_first_frame: false,
        }
    }

    /// Parse the sprite manifest and build the renderer. The host then
    /// loads every path in `sheet_paths` and reports each result.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), AssetError> {
        let manifest = SpriteManifest::from_json(json)?;
        self.game.set_background(manifest.background.clone());

        let registry = SpriteRegistry::from_manifest(&manifest);
        log::info!(
            "manifest loaded: {} sprites across {} sheets",
            manifest.sprites.len(),
            registry.sheet_paths().len()
        );
        self.renderer = Some(GameRenderer::new(
            registry,
            self.game.cell_size(),
            self.game.cells_x(),
            self.game.cells_y(),
        ));
        Ok(())
    }

    pub fn sheet_loaded(&mut self, path: &str) -> bool {
        match self.renderer.as_mut() {
            Some(renderer) => renderer.registry_mut().mark_loaded(path),
            None => false,
        }
    }

    pub fn sheet_load_failed(&mut self, path: &str) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.registry_mut().mark_failed(path);
        }
        self.running = false;
    }

    /// True once the manifest is loaded and every sheet arrived.
    pub fn is_ready(&self) -> bool {
        self.renderer
            .as_ref()
            .map(|r| r.registry().is_ready())
            .unwrap_or(false)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Halt the loop. Subsequent ticks are no-ops.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance by the elapsed wall-clock milliseconds. Runs zero or
    /// more simulation steps, then renders once if anything stepped.
    pub fn tick(&mut self, elapsed_ms: f32) -> Result<(), AssetError> {
        if !self.running || !self.is_ready() {
            return Ok(());
        }

        let steps = self.timer.advance(elapsed_ms);
        for _ in 0..steps {
            self.game.tick();
        }

        if steps > 0 || !self.rendered_first_frame {
            let state = self.game.render_state();
            if let Some(renderer) = self.renderer.as_mut() {
                renderer.render(&state, &mut self.buffer)?;
                self.rendered_first_frame = true;
            }
        }
        Ok(())
    }

    // ---- Input, applied immediately ----

    pub fn handle_click(&mut self, x: f32, y: f32) {
        self.game.handle_click(x, y);
    }

    pub fn move_camera(&mut self, direction: Direction) {
        self.game.move_camera(direction);
    }

    pub fn zoom_camera(&mut self, direction: ZoomDirection) {
        self.game.zoom_camera(direction);
    }

    pub fn set_building_mode(&mut self, adding: bool) {
        self.game.set_adding_building(adding);
    }

    // ---- Frame data accessors for host-side reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.buffer.instance_count()
    }

    pub fn camera_translate_x(&self) -> f32 {
        self.renderer
            .as_ref()
            .map(|r| r.camera_transform().translate.x)
            .unwrap_or(0.0)
    }

    pub fn camera_translate_y(&self) -> f32 {
        self.renderer
            .as_ref()
            .map(|r| r.camera_transform().translate.y)
            .unwrap_or(0.0)
    }

    pub fn camera_scale(&self) -> f32 {
        self.renderer
            .as_ref()
            .map(|r| r.camera_transform().scale)
            .unwrap_or(1.0)
    }

    pub fn canvas_width(&self) -> u32 {
        self.game.cell_size() * (self.game.cells_x() + 2)
    }

    pub fn canvas_height(&self) -> u32 {
        self.game.cell_size() * (self.game.cells_y() + 2)
    }

    pub fn background_color(&self) -> String {
        self.game.background().color.clone()
    }

    pub fn sheet_count(&self) -> u32 {
        self.renderer
            .as_ref()
            .map(|r| r.registry().sheet_paths().len() as u32)
            .unwrap_or(0)
    }

    pub fn sheet_path(&self, index: u32) -> Option<String> {
        self.renderer
            .as_ref()
            .and_then(|r| r.registry().sheet_paths().get(index as usize).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST_JSON: &str = r#"{
        "sprites": {
            "GRASS_1": { "sheet": "./images/map.png", "size": 8, "col": 0, "row": 0 },
            "ROCK_1":  { "sheet": "./images/map.png", "size": 8, "col": 0, "row": 2 }
        }
    }"#;

    fn ready_runner() -> GameRunner {
        let mut runner = GameRunner::new(GameConfig::default());
        runner.load_manifest(MANIFEST_JSON).unwrap();
        assert!(runner.sheet_loaded("./images/map.png"));
        runner
    }

    #[test]
    fn refuses_to_tick_before_assets_arrive() {
        let mut runner = GameRunner::new(GameConfig::default());
        runner.tick(100.0).unwrap();
        assert_eq!(runner.instance_count(), 0);

        runner.load_manifest(MANIFEST_JSON).unwrap();
        assert!(!runner.is_ready());
        runner.tick(100.0).unwrap();
        assert_eq!(runner.instance_count(), 0);
    }

    #[test]
    fn renders_after_sheets_load() {
        let mut runner = ready_runner();
        assert!(runner.is_ready());
        runner.tick(100.0).unwrap();
        // Background ring for the default 8x8 board: (8 + 2)^2 tiles.
        assert_eq!(runner.instance_count(), 100);
    }

    #[test]
    fn first_frame_renders_without_a_full_interval() {
        let mut runner = ready_runner();
        runner.tick(1.0).unwrap();
        assert_eq!(runner.instance_count(), 100);
    }

    #[test]
    fn sheet_failure_halts_the_loop() {
        let mut runner = GameRunner::new(GameConfig::default());
        runner.load_manifest(MANIFEST_JSON).unwrap();
        runner.sheet_load_failed("./images/map.png");
        assert!(!runner.is_running());
        runner.tick(100.0).unwrap();
        assert_eq!(runner.instance_count(), 0);
    }

    #[test]
    fn stop_halts_ticking() {
        let mut runner = ready_runner();
        runner.tick(100.0).unwrap();
        runner.stop();
        assert!(!runner.is_running());
    }

    #[test]
    fn reports_board_geometry() {
        let runner = ready_runner();
        assert_eq!(runner.canvas_width(), 80);
        assert_eq!(runner.canvas_height(), 80);
        assert_eq!(runner.background_color(), "#191c19");
        assert_eq!(runner.sheet_count(), 1);
        assert_eq!(runner.sheet_path(0).as_deref(), Some("./images/map.png"));
        assert_eq!(runner.sheet_path(5), None);
    }
}
