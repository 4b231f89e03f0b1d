//! JavaScript entry points
//!
//! ```js
//! const handle = mountBackground(container, JSON.stringify({ palette: "gold" }));
//! // ...
//! handle.dispose();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use undertow_background::{BackgroundMount, MountOptions, MountState, PalettePreset};

use crate::host::{DomHost, MountSlot};
use crate::util::log_background;

/// Handle returned by `mountBackground`
#[wasm_bindgen]
pub struct BackgroundHandle {
    slot: MountSlot,
    /// State reported while no mount lives in the slot
    inert: Cell<MountState>,
}

impl BackgroundHandle {
    fn inert(state: MountState) -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
            inert: Cell::new(state),
        }
    }
}

#[wasm_bindgen]
impl BackgroundHandle {
    /// Re-read the container size
    #[wasm_bindgen]
    pub fn resize(&self) {
        if let Ok(mut slot) = self.slot.try_borrow_mut() {
            if let Some(mount) = slot.as_mut() {
                mount.on_container_resize();
            }
        }
    }

    /// Resize to an explicit size in CSS pixels
    #[wasm_bindgen(js_name = resizeTo)]
    pub fn resize_to(&self, width: f32, height: f32) {
        if let Ok(mut slot) = self.slot.try_borrow_mut() {
            if let Some(mount) = slot.as_mut() {
                mount.resize(width, height);
            }
        }
    }

    /// Tear the background down. Safe to call more than once.
    #[wasm_bindgen]
    pub fn dispose(&self) {
        let mount = match self.slot.try_borrow_mut() {
            Ok(mut slot) => slot.take(),
            Err(_) => {
                log_background("dispose called re-entrantly; ignored");
                return;
            }
        };
        if let Some(mut mount) = mount {
            mount.dispose();
        }
        self.inert.set(MountState::Unmounted);
    }

    /// Whether frames are still being produced
    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.slot
            .try_borrow()
            .map(|slot| slot.as_ref().is_some_and(|m| m.is_running()))
            .unwrap_or(true)
    }

    /// Lifecycle state: "running", "degraded", "unmounted", ...
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        let state = match self.slot.try_borrow() {
            Ok(slot) => slot.as_ref().map(|m| m.state()),
            Err(_) => Some(MountState::Running),
        };
        state.unwrap_or_else(|| self.inert.get()).as_str().to_string()
    }
}

/// Mount a caustics background into `container`.
///
/// `options_json` uses camelCase keys; omit it for the defaults. Never
/// throws: bad options or a missing GPU yield a degraded handle.
#[wasm_bindgen(js_name = mountBackground)]
pub fn mount_background(
    container: web_sys::HtmlElement,
    options_json: Option<String>,
) -> BackgroundHandle {
    let options = match options_json.as_deref() {
        None | Some("") => MountOptions::default(),
        Some(json) => match MountOptions::from_json(json) {
            Ok(options) => options,
            Err(e) => {
                log_background(&format!("degraded: {}", e));
                return BackgroundHandle::inert(MountState::Degraded);
            }
        },
    };

    let handle = BackgroundHandle::inert(MountState::Mounting);
    let host = match DomHost::new(container, &handle.slot) {
        Ok(host) => host,
        Err(e) => {
            log_background(&format!("degraded: {:?}", e));
            handle.inert.set(MountState::Degraded);
            return handle;
        }
    };

    let mount = BackgroundMount::mount(host, options);
    *handle.slot.borrow_mut() = Some(mount);
    handle
}

/// Available palette presets as JSON
/// Returns: [{ "id": "ocean", "name": "Ocean" }, ...]
#[wasm_bindgen(js_name = availablePalettes)]
pub fn available_palettes() -> String {
    let palettes: Vec<serde_json::Value> = PalettePreset::all()
        .iter()
        .map(|p| {
            serde_json::json!({
                "id": p.id(),
                "name": p.name()
            })
        })
        .collect();
    serde_json::to_string(&palettes).unwrap_or_else(|_| "[]".to_string())
}
