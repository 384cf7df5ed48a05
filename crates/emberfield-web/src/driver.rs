//! Animation driver: frame scheduling and window event wiring.
//!
//! Mount acquires the surface, listeners, and the first animation frame;
//! unmount releases all three. The pending frame is tracked by its
//! `requestAnimationFrame` id so cancellation is deterministic — a bare
//! "keep going" flag would still let one queued callback fire against
//! torn-down state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use emberfield_core::{FieldConfig, Simulation};

use crate::canvas::CanvasSurface;

struct DriverState {
    sim: Simulation,
    surface: CanvasSurface,
}

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A mounted background instance. Dropping it without `shutdown` leaks
/// the listener closures, so the exported unmount path always calls
/// `shutdown` explicitly.
pub struct Driver {
    state: Rc<RefCell<DriverState>>,
    /// Pending rAF id, if a frame is scheduled.
    frame: Rc<Cell<Option<i32>>>,
    raf: FrameClosure,
    on_resize: Closure<dyn FnMut(web_sys::Event)>,
    on_pointer: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

fn viewport_size(window: &Window) -> (f32, f32) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width as f32, height as f32)
}

fn schedule_frame(
    window: &Window,
    raf: &FrameClosure,
    frame: &Rc<Cell<Option<i32>>>,
) -> Result<(), JsValue> {
    let cb = raf.borrow();
    let cb = cb
        .as_ref()
        .ok_or_else(|| JsValue::from_str("frame callback missing"))?;
    let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    frame.set(Some(id));
    Ok(())
}

impl Driver {
    /// Size the surface, build the field, wire up listeners, and start
    /// the frame loop. Any failure after partial acquisition releases
    /// everything acquired so far before the error propagates.
    pub fn mount(
        canvas: web_sys::HtmlCanvasElement,
        config: FieldConfig,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let mut surface = CanvasSurface::new(canvas)?;

        // Field layout is deliberately re-randomized on every mount
        let seed = js_sys::Date::now() as u64;
        let mut sim = Simulation::new(config, seed);

        let (width, height) = viewport_size(&window);
        surface.set_raster_size(width, height);
        sim.resize(width, height);

        let state = Rc::new(RefCell::new(DriverState { sim, surface }));
        let frame = Rc::new(Cell::new(None));
        let raf: FrameClosure = Rc::new(RefCell::new(None));

        let tick = {
            let state = Rc::clone(&state);
            let frame = Rc::clone(&frame);
            let raf = Rc::clone(&raf);
            Closure::wrap(Box::new(move || {
                frame.set(None);
                {
                    let mut s = state.borrow_mut();
                    let s = &mut *s;
                    s.sim.step(&mut s.surface);
                }
                if let Some(window) = web_sys::window() {
                    let _ = schedule_frame(&window, &raf, &frame);
                }
            }) as Box<dyn FnMut()>)
        };
        *raf.borrow_mut() = Some(tick);

        let on_resize = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |_: web_sys::Event| {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let (width, height) = viewport_size(&window);
                let mut s = state.borrow_mut();
                s.surface.set_raster_size(width, height);
                s.sim.resize(width, height);
            }) as Box<dyn FnMut(web_sys::Event)>)
        };

        let on_pointer = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                state
                    .borrow_mut()
                    .sim
                    .pointer_moved(event.client_x() as f32, event.client_y() as f32);
            }) as Box<dyn FnMut(web_sys::MouseEvent)>)
        };

        let driver = Self {
            state,
            frame,
            raf,
            on_resize,
            on_pointer,
        };

        if let Err(err) = driver.start(&window) {
            driver.shutdown();
            return Err(err);
        }
        Ok(driver)
    }

    fn start(&self, window: &Window) -> Result<(), JsValue> {
        window.add_event_listener_with_callback(
            "resize",
            self.on_resize.as_ref().unchecked_ref(),
        )?;
        window.add_event_listener_with_callback(
            "mousemove",
            self.on_pointer.as_ref().unchecked_ref(),
        )?;
        schedule_frame(window, &self.raf, &self.frame)
    }

    pub fn particle_count(&self) -> usize {
        self.state.borrow().sim.particle_count()
    }

    /// Cancel the pending frame and deregister both listeners. Removing
    /// a listener that never got registered is a no-op, so this is safe
    /// on every exit path, including a partially failed mount.
    pub fn shutdown(self) {
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.frame.take() {
                let _ = window.cancel_animation_frame(id);
            }
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                "mousemove",
                self.on_pointer.as_ref().unchecked_ref(),
            );
        }
        // Drop the frame closure to break the Rc cycle with itself
        self.raf.borrow_mut().take();
    }
}
