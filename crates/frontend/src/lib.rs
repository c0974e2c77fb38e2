//! Courseware view with a per-course sidebar state provider.

pub mod app;
pub mod courseware;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Mounts the course view; sidebar transitions are logged at debug level.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("console logger already installed");
    }

    leptos::mount::mount_to_body(app::App);
}
