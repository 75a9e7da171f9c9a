pub mod runner;

pub use runner::CardRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use snowcard_core::{CardConfig, InputEvent};

// There is exactly one card per page, so the exports are concrete free
// functions over a thread_local runner; wasm-bindgen cannot export structs
// with lifetimes or generics directly.
thread_local! {
    static RUNNER: RefCell<Option<CardRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut CardRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Card not initialized. Call card_init() first.");
        f(runner)
    })
}

#[wasm_bindgen]
pub fn card_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let runner = CardRunner::new(CardConfig::default());
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    log::info!("greeting card: initialized");
}

#[wasm_bindgen]
pub fn card_tick(dt: f32) {
    with_runner(|r| r.tick(dt));
}

// ---- Input ----

#[wasm_bindgen]
pub fn card_pointer_move(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
}

#[wasm_bindgen]
pub fn card_pointer_down(x: f32, y: f32) {
    with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
}

#[wasm_bindgen]
pub fn card_pointer_leave() {
    with_runner(|r| r.push_input(InputEvent::PointerLeave));
}

#[wasm_bindgen]
pub fn card_resize(width: f32, height: f32, dpr: f32) {
    with_runner(|r| r.push_input(InputEvent::Resize { width, height, dpr }));
}

#[wasm_bindgen]
pub fn card_open_panel() {
    with_runner(|r| r.push_input(InputEvent::OpenPanel));
}

#[wasm_bindgen]
pub fn card_close_panel() {
    with_runner(|r| r.push_input(InputEvent::ClosePanel));
}

// ---- Host callbacks ----

/// The host rendered the banner text to an offscreen canvas and extracted
/// the alpha channel; rebuild the particle field from it.
#[wasm_bindgen]
pub fn card_load_raster(device_width: u32, device_height: u32, dpr: f32, alpha: &[u8]) {
    with_runner(|r| r.load_raster(device_width, device_height, dpr, alpha));
}

#[wasm_bindgen]
pub fn card_music_started() {
    with_runner(|r| r.music_started());
}

#[wasm_bindgen]
pub fn card_music_failed() {
    with_runner(|r| r.music_failed());
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> *const f32 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn get_buffer_total_floats() -> u32 {
    with_runner(|r| r.buffer_total_floats())
}
