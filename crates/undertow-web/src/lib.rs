//! Browser bindings for the undertow caustics background
//!
//! Exposes `mountBackground(container, optionsJson)` and
//! `availablePalettes()` to JavaScript. Framework adapters are expected to
//! be one-liners: mount on attach, `dispose()` on detach.

use wasm_bindgen::prelude::*;

mod handle;
mod host;
mod surface;
mod util;

pub use handle::{available_palettes, mount_background, BackgroundHandle};
pub use host::DomHost;
pub use surface::WebSurface;

/// Module initialization
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
