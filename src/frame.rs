use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop that keeps exactly one frame pending and
/// can be stopped.
///
/// Cloning yields another handle to the same loop.
#[derive(Clone)]
pub struct RenderLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    in_tick: Rc<Cell<bool>>,
}

impl RenderLoop {
    /// Run `step` once per display refresh until `stop` is called.
    pub fn start(mut step: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let lp = RenderLoop {
            tick: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
            running: Rc::new(Cell::new(true)),
            in_tick: Rc::new(Cell::new(false)),
        };
        let inner = lp.clone();
        *lp.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            inner.pending.set(None);
            if !inner.running.get() {
                return;
            }
            inner.in_tick.set(true);
            step();
            inner.in_tick.set(false);
            if inner.running.get() {
                inner.schedule();
            }
        }) as Box<dyn FnMut()>));
        lp.schedule();
        if lp.pending.get().is_none() {
            lp.stop();
            anyhow::bail!("requestAnimationFrame unavailable");
        }
        Ok(lp)
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame. Safe to call from inside the step.
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // The closure owns a handle to itself; dropping it here breaks the
        // cycle. Inside a tick it is still executing, so it is left in place.
        if !self.in_tick.get() {
            self.tick.borrow_mut().take();
        }
    }

    fn schedule(&self) {
        let Some(w) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        if let Some(cb) = tick.as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.pending.set(Some(id)),
                Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
            }
        }
    }
}
