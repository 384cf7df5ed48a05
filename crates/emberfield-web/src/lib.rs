//! wasm-bindgen exports for the interactive particle background.
//!
//! The host page mounts the background onto a full-viewport canvas and
//! unmounts it when the page component is destroyed. Everything in
//! between — resize handling, pointer tracking, the frame loop — runs
//! inside the driver.

pub mod canvas;
pub mod driver;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use emberfield_core::FieldConfig;

use driver::Driver;

thread_local! {
    static DRIVER: RefCell<Option<Driver>> = RefCell::new(None);
}

fn mount_with(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    // Remounting replaces any running instance
    background_unmount();

    let driver = Driver::mount(canvas, config)?;
    log::info!("emberfield: mounted ({} particles)", driver.particle_count());
    DRIVER.with(|cell| {
        *cell.borrow_mut() = Some(driver);
    });
    Ok(())
}

/// Mount the background onto the given canvas with default tuning.
/// Fails if the canvas cannot provide a 2d context.
#[wasm_bindgen]
pub fn background_mount(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    mount_with(canvas, FieldConfig::default())
}

/// Mount with host-supplied tuning overrides (JSON, all keys optional).
#[wasm_bindgen]
pub fn background_mount_with_options(
    canvas: HtmlCanvasElement,
    options_json: &str,
) -> Result<(), JsValue> {
    let config = FieldConfig::from_json(options_json)
        .map_err(|err| JsValue::from_str(&format!("invalid options: {}", err)))?;
    mount_with(canvas, config)
}

/// Stop the frame loop and release all listeners. Safe to call twice,
/// or before ever mounting.
#[wasm_bindgen]
pub fn background_unmount() {
    let driver = DRIVER.with(|cell| cell.borrow_mut().take());
    if let Some(driver) = driver {
        driver.shutdown();
        log::info!("emberfield: unmounted");
    }
}
