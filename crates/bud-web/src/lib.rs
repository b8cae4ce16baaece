pub mod runner;

pub use runner::GameRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use bud_engine::{Direction, GameConfig, ZoomDirection};

/// Manifest baked into the bundle; `game_load_manifest` can replace it
/// with one fetched by the host.
pub const DEFAULT_MANIFEST: &str = include_str!("../assets/manifest.json");

thread_local! {
    static RUNNER: RefCell<Option<GameRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut GameRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Game not initialized. Call game_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = GameConfig {
        // Wall-clock seed so every page load wanders differently.
        rng_seed: js_sys::Date::now() as u64,
        ..GameConfig::default()
    };
    let runner = GameRunner::new(config);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("bud-world: initialized");
}

/// Load a sprite manifest. Pass `DEFAULT_MANIFEST` via
/// `game_default_manifest()` or a host-fetched JSON string.
#[wasm_bindgen]
pub fn game_load_manifest(json: &str) -> Result<(), JsValue> {
    with_runner(|r| r.load_manifest(json)).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn game_default_manifest() -> String {
    DEFAULT_MANIFEST.to_string()
}

#[wasm_bindgen]
pub fn game_sheet_loaded(path: &str) -> bool {
    with_runner(|r| r.sheet_loaded(path))
}

#[wasm_bindgen]
pub fn game_sheet_load_failed(path: &str) {
    with_runner(|r| r.sheet_load_failed(path));
}

#[wasm_bindgen]
pub fn game_is_ready() -> bool {
    with_runner(|r| r.is_ready())
}

#[wasm_bindgen]
pub fn game_tick(elapsed_ms: f32) -> Result<(), JsValue> {
    with_runner(|r| r.tick(elapsed_ms)).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn game_stop() {
    with_runner(|r| r.stop());
}

// ---- Input, applied immediately ----

#[wasm_bindgen]
pub fn game_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.handle_click(x, y));
}

/// Direction protocol: 0 = up, 1 = down, 2 = left, 3 = right.
#[wasm_bindgen]
pub fn game_camera_move(direction: u32) {
    if let Some(direction) = Direction::from_u32(direction) {
        with_runner(|r| r.move_camera(direction));
    } else {
        log::warn!("unknown camera direction {}", direction);
    }
}

/// Zoom protocol: 0 = in, 1 = out.
#[wasm_bindgen]
pub fn game_camera_zoom(direction: u32) {
    if let Some(direction) = ZoomDirection::from_u32(direction) {
        with_runner(|r| r.zoom_camera(direction));
    } else {
        log::warn!("unknown zoom direction {}", direction);
    }
}

#[wasm_bindgen]
pub fn game_set_building_mode(adding: bool) {
    with_runner(|r| r.set_building_mode(adding));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_camera_translate_x() -> f32 {
    with_runner(|r| r.camera_translate_x())
}

#[wasm_bindgen]
pub fn get_camera_translate_y() -> f32 {
    with_runner(|r| r.camera_translate_y())
}

#[wasm_bindgen]
pub fn get_camera_scale() -> f32 {
    with_runner(|r| r.camera_scale())
}

#[wasm_bindgen]
pub fn get_canvas_width() -> u32 {
    with_runner(|r| r.canvas_width())
}

#[wasm_bindgen]
pub fn get_canvas_height() -> u32 {
    with_runner(|r| r.canvas_height())
}

#[wasm_bindgen]
pub fn get_background_color() -> String {
    with_runner(|r| r.background_color())
}

#[wasm_bindgen]
pub fn get_sheet_count() -> u32 {
    with_runner(|r| r.sheet_count())
}

#[wasm_bindgen]
pub fn get_sheet_path(index: u32) -> Option<String> {
    with_runner(|r| r.sheet_path(index))
}
