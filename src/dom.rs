use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Look up an element by id and cast it, naming the id on failure.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("#{} has an unexpected element type", id))
}

pub fn listen(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn listen_mouse(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::MouseEvent) + 'static,
) {
    let closure =
        Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Fire `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        if let Err(e) =
            w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms)
        {
            log::error!("setTimeout failed: {:?}", e);
        }
    }
}

/// Repeating timer whose callback can cancel itself through `Interval::clear`.
#[derive(Clone)]
pub struct Interval {
    handle: Rc<Cell<Option<i32>>>,
}

impl Interval {
    pub fn start(period_ms: i32, mut f: impl FnMut(&Interval) + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let interval = Interval {
            handle: Rc::new(Cell::new(None)),
        };
        let inner = interval.clone();
        let closure = Closure::wrap(Box::new(move || f(&inner)) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(js_err)?;
        closure.forget();
        interval.handle.set(Some(id));
        Ok(interval)
    }

    pub fn clear(&self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            w.clear_interval_with_handle(id);
        }
    }
}

/// Backing size of a full-viewport canvas, in CSS pixels.
pub fn viewport_size() -> Option<(u32, u32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width.max(1.0) as u32, height.max(1.0) as u32))
}
