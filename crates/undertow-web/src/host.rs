//! DOM implementation of `BackgroundHost`
//!
//! Every browser callback (animation frame, resize observer, pointer
//! events) holds a weak reference to the mount slot. Once the handle drops
//! the mount, late callbacks find nothing and return.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use undertow_background::constants::RIPPLE_SIZE_PX;
use undertow_background::{
    BackgroundHost, BackgroundMount, CausticProgram, ClientRect, FrameHandle, FrameScheduler,
    HostError, ListenerKind, Ripple, RippleAppearance, RippleId, Size, SurfaceConfig,
    SurfaceError, Vec2,
};

use crate::surface::WebSurface;
use crate::util::{describe, log_background};

/// Shared home of one mount, owned by its JS handle
pub type MountSlot = Rc<RefCell<Option<BackgroundMount<DomHost>>>>;

type WeakSlot = Weak<RefCell<Option<BackgroundMount<DomHost>>>>;

/// Run `f` on the mount if it is still alive and not already borrowed
pub(crate) fn with_mount(slot: &WeakSlot, f: impl FnOnce(&mut BackgroundMount<DomHost>)) {
    let Some(slot) = slot.upgrade() else {
        return;
    };
    let Ok(mut guard) = slot.try_borrow_mut() else {
        return;
    };
    if let Some(mount) = guard.as_mut() {
        f(mount);
    }
}

/// An attached DOM subscription
enum Listener {
    Event {
        target: web_sys::EventTarget,
        name: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    },
    Observer {
        observer: web_sys::ResizeObserver,
        _closure: Closure<dyn FnMut(JsValue)>,
    },
}

impl Listener {
    fn remove(self) {
        match self {
            Listener::Event {
                target,
                name,
                closure,
            } => {
                let _ = target
                    .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
            }
            Listener::Observer { observer, .. } => observer.disconnect(),
        }
    }
}

/// Browser host bound to one container element
pub struct DomHost {
    window: web_sys::Window,
    document: web_sys::Document,
    container: web_sys::HtmlElement,
    frame_callback: Closure<dyn FnMut(f64)>,
    listeners: HashMap<ListenerKind, Listener>,
    ripples: HashMap<RippleId, web_sys::HtmlElement>,
    slot: WeakSlot,
}

impl DomHost {
    /// Create a host for `container` that forwards callbacks into `slot`
    pub fn new(container: web_sys::HtmlElement, slot: &MountSlot) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document"))?;

        let weak = Rc::downgrade(slot);
        let frame_slot = weak.clone();
        let frame_callback = Closure::wrap(Box::new(move |_timestamp: f64| {
            with_mount(&frame_slot, |mount| mount.on_frame());
        }) as Box<dyn FnMut(f64)>);

        Ok(Self {
            window,
            document,
            container,
            frame_callback,
            listeners: HashMap::new(),
            ripples: HashMap::new(),
            slot: weak,
        })
    }

    fn client_rect(container: &web_sys::HtmlElement) -> ClientRect {
        let rect = container.get_bounding_client_rect();
        ClientRect {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        }
    }

    /// Normalized position of a mouse or first-touch event
    fn event_position(container: &web_sys::HtmlElement, event: &web_sys::Event) -> Option<Vec2> {
        let (x, y) = if let Some(mouse) = event.dyn_ref::<web_sys::MouseEvent>() {
            (mouse.client_x() as f32, mouse.client_y() as f32)
        } else if let Some(touch_event) = event.dyn_ref::<web_sys::TouchEvent>() {
            let touch = touch_event.touches().get(0)?;
            (touch.client_x() as f32, touch.client_y() as f32)
        } else {
            return None;
        };
        Self::client_rect(container).normalize(x, y)
    }

    fn event_closure(&self, kind: ListenerKind) -> Closure<dyn FnMut(web_sys::Event)> {
        let slot = self.slot.clone();
        let container = self.container.clone();
        Closure::wrap(Box::new(move |event: web_sys::Event| match kind {
            ListenerKind::WindowResize => with_mount(&slot, |m| m.on_container_resize()),
            ListenerKind::PointerEnter => with_mount(&slot, |m| m.on_pointer_enter()),
            ListenerKind::PointerLeave => with_mount(&slot, |m| m.on_pointer_leave()),
            ListenerKind::PointerMove | ListenerKind::TouchMove => {
                if let Some(p) = Self::event_position(&container, &event) {
                    with_mount(&slot, |m| m.on_pointer_move(p));
                }
            }
            ListenerKind::Click | ListenerKind::TouchStart => {
                if let Some(p) = Self::event_position(&container, &event) {
                    with_mount(&slot, |m| m.on_tap(p));
                }
            }
            ListenerKind::ResizeObserver => {}
        }) as Box<dyn FnMut(web_sys::Event)>)
    }

    fn attach_observer(&self) -> Result<Listener, HostError> {
        let supported = js_sys::Reflect::has(&self.window, &"ResizeObserver".into()).unwrap_or(false);
        if !supported {
            return Err(HostError::NotSupported("ResizeObserver"));
        }

        let slot = self.slot.clone();
        let closure = Closure::wrap(Box::new(move |_entries: JsValue| {
            with_mount(&slot, |m| m.on_container_resize());
        }) as Box<dyn FnMut(JsValue)>);

        let observer = web_sys::ResizeObserver::new(closure.as_ref().unchecked_ref())
            .map_err(|e| HostError::ListenerFailed(describe(&e)))?;
        observer.observe(&self.container);

        Ok(Listener::Observer {
            observer,
            _closure: closure,
        })
    }

    fn attach_event(&self, kind: ListenerKind) -> Result<Listener, HostError> {
        let name = kind
            .event_name()
            .ok_or(HostError::NotSupported("event"))?;
        let target: web_sys::EventTarget = if kind == ListenerKind::WindowResize {
            self.window.clone().into()
        } else {
            self.container.clone().into()
        };

        let closure = self.event_closure(kind);
        target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .map_err(|e| HostError::ListenerFailed(describe(&e)))?;

        Ok(Listener::Event {
            target,
            name,
            closure,
        })
    }

    fn style_ripple(marker: &web_sys::HtmlElement, appearance: RippleAppearance) {
        let style = marker.style();
        let _ = style.set_property(
            "transform",
            &format!("translate(-50%, -50%) scale({:.3})", appearance.scale),
        );
        let _ = style.set_property("opacity", &format!("{:.3}", appearance.opacity));
    }
}

impl FrameScheduler for DomHost {
    fn request_frame(&mut self) -> Result<FrameHandle, HostError> {
        self.window
            .request_animation_frame(self.frame_callback.as_ref().unchecked_ref())
            .map_err(|_| HostError::SchedulerUnavailable)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = self.window.cancel_animation_frame(handle);
    }
}

impl BackgroundHost for DomHost {
    type Surface = WebSurface;

    fn container_size(&self) -> Option<Size> {
        if !self.container.is_connected() {
            return None;
        }
        Some(Size::new(
            self.container.client_width() as f32,
            self.container.client_height() as f32,
        ))
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.window.device_pixel_ratio()
    }

    fn touch_capable(&self) -> bool {
        self.window.navigator().max_touch_points() > 0
            || js_sys::Reflect::has(&self.window, &"ontouchstart".into()).unwrap_or(false)
    }

    fn create_surface(
        &mut self,
        program: &CausticProgram,
        config: &SurfaceConfig,
        physical: (u32, u32),
    ) -> Result<WebSurface, SurfaceError> {
        if !self.container.is_connected() {
            return Err(SurfaceError::ContainerDetached);
        }
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(|e| SurfaceError::Other(describe(&e)))?
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .map_err(|_| SurfaceError::Other("canvas element has wrong type".to_string()))?;

        let surface = WebSurface::new(canvas.clone(), *program, *config, physical);
        self.container
            .append_child(&canvas)
            .map_err(|e| SurfaceError::ContextUnavailable(describe(&e)))?;
        Ok(surface)
    }

    fn attach_listener(&mut self, kind: ListenerKind) -> Result<(), HostError> {
        let listener = match kind {
            ListenerKind::ResizeObserver => self.attach_observer()?,
            _ => self.attach_event(kind)?,
        };
        if let Some(previous) = self.listeners.insert(kind, listener) {
            previous.remove();
        }
        Ok(())
    }

    fn detach_listener(&mut self, kind: ListenerKind) {
        if let Some(listener) = self.listeners.remove(&kind) {
            listener.remove();
        }
    }

    fn show_ripple(&mut self, ripple: &Ripple, appearance: RippleAppearance) {
        let marker = match self
            .document
            .create_element("span")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            Some(marker) => marker,
            None => return,
        };

        let (left, top) = ripple.percent();
        let size = RIPPLE_SIZE_PX;
        let _ = marker.set_attribute(
            "style",
            &format!(
                "position:absolute;left:{:.2}%;top:{:.2}%;width:{}px;height:{}px;\
                 border-radius:50%;pointer-events:none;\
                 background:radial-gradient(circle, rgba(255,255,255,0.35) 0%, rgba(255,255,255,0) 70%);",
                left, top, size, size
            ),
        );
        let _ = marker.set_attribute("aria-hidden", "true");
        Self::style_ripple(&marker, appearance);

        if self.container.append_child(&marker).is_ok() {
            self.ripples.insert(ripple.id, marker);
        }
    }

    fn update_ripple(&mut self, id: RippleId, appearance: RippleAppearance) {
        if let Some(marker) = self.ripples.get(&id) {
            Self::style_ripple(marker, appearance);
        }
    }

    fn hide_ripple(&mut self, id: RippleId) {
        if let Some(marker) = self.ripples.remove(&id) {
            marker.remove();
        }
    }

    fn now_ms(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn debug_write(&self, msg: &str) {
        log_background(msg);
    }
}

impl Drop for DomHost {
    fn drop(&mut self) {
        for (_, listener) in self.listeners.drain() {
            listener.remove();
        }
        for (_, marker) in self.ripples.drain() {
            marker.remove();
        }
    }
}
