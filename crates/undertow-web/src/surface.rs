//! Canvas-backed render surface
//!
//! The canvas is appended synchronously so the mount can start at once.
//! GPU adapter and device acquisition finish later on the microtask queue;
//! frames are skipped until then.

use std::cell::RefCell;
use std::rc::Rc;

use undertow_background::gpu::CausticRenderer;
use undertow_background::{CausticProgram, RenderSurface, SurfaceConfig, SurfaceError, Uniforms};

use crate::util::log_background;

const CANVAS_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;\
display:block;pointer-events:none;";

/// Renderer lifecycle behind the canvas
enum RendererState {
    /// Waiting for the device; holds the latest requested size
    Pending(Option<(u32, u32)>),
    Ready(CausticRenderer),
    Failed(String),
    Disposed,
}

/// Surface drawing into a `<canvas>` inside the container
pub struct WebSurface {
    canvas: web_sys::HtmlCanvasElement,
    state: Rc<RefCell<RendererState>>,
}

impl WebSurface {
    /// Prepare `canvas` and start GPU initialization in the background
    pub fn new(
        canvas: web_sys::HtmlCanvasElement,
        program: CausticProgram,
        config: SurfaceConfig,
        physical: (u32, u32),
    ) -> Self {
        canvas.set_width(physical.0.max(1));
        canvas.set_height(physical.1.max(1));
        let _ = canvas.set_attribute("style", CANVAS_STYLE);
        let _ = canvas.set_attribute("aria-hidden", "true");

        let state = Rc::new(RefCell::new(RendererState::Pending(None)));
        Self::spawn_init(canvas.clone(), Rc::clone(&state), program, config);

        Self { canvas, state }
    }

    fn spawn_init(
        canvas: web_sys::HtmlCanvasElement,
        state: Rc<RefCell<RendererState>>,
        program: CausticProgram,
        config: SurfaceConfig,
    ) {
        wasm_bindgen_futures::spawn_local(async move {
            let result = CausticRenderer::new(canvas.clone(), program, config).await;

            let mut state = state.borrow_mut();
            let pending_size = match &*state {
                RendererState::Pending(size) => *size,
                // Disposed while waiting: the renderer is dropped here
                _ => return,
            };

            match result {
                Ok(mut renderer) => {
                    if let Some((w, h)) = pending_size {
                        renderer.resize(w, h);
                    }
                    log_background(&format!("renderer ready ({})", program.label()));
                    *state = RendererState::Ready(renderer);
                }
                Err(e) => {
                    log_background(&format!("renderer unavailable: {}", e));
                    canvas.remove();
                    *state = RendererState::Failed(e);
                }
            }
        });
    }
}

impl RenderSurface for WebSurface {
    fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        // Once ready, the renderer owns the canvas size (it may clamp it)
        match &mut *self.state.borrow_mut() {
            RendererState::Ready(renderer) => renderer.resize(width, height),
            RendererState::Pending(size) => {
                self.canvas.set_width(width);
                self.canvas.set_height(height);
                *size = Some((width, height));
            }
            RendererState::Failed(_) | RendererState::Disposed => {}
        }
    }

    fn render(&mut self, uniforms: &Uniforms) -> Result<(), SurfaceError> {
        match &mut *self.state.borrow_mut() {
            RendererState::Pending(_) => Ok(()),
            RendererState::Ready(renderer) => renderer.render(uniforms),
            RendererState::Failed(e) => Err(SurfaceError::ContextUnavailable(e.clone())),
            RendererState::Disposed => Err(SurfaceError::SurfaceLost),
        }
    }

    fn dispose(&mut self) {
        let mut state = self.state.borrow_mut();
        if matches!(&*state, RendererState::Disposed) {
            return;
        }
        *state = RendererState::Disposed;
        self.canvas.remove();
    }
}
