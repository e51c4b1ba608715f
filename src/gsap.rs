//! Bindings to the page's global GSAP + ScrollTrigger scripts.
//!
//! Every call is `catch`ed: if GSAP failed to load the tween is skipped and
//! logged instead of aborting the module.
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = gsap, js_name = to)]
    fn gsap_to(target: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = from)]
    fn gsap_from(target: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = fromTo)]
    fn gsap_from_to(target: &JsValue, from: &Object, to: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = registerPlugin)]
    fn gsap_register_plugin(plugin: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["gsap", "utils"], js_name = toArray)]
    fn gsap_to_array(target: &JsValue) -> Result<js_sys::Array, JsValue>;

    pub type Timeline;

    #[wasm_bindgen(catch, js_namespace = gsap, js_name = timeline)]
    fn gsap_timeline() -> Result<Timeline, JsValue>;

    #[wasm_bindgen(catch, method, js_name = to)]
    fn timeline_to(this: &Timeline, target: &JsValue, vars: &Object) -> Result<Timeline, JsValue>;
}

/// Tween parameter object built up field by field.
pub struct Vars(Object);

impl Vars {
    pub fn new() -> Self {
        Vars(Object::new())
    }

    pub fn value(self, key: &str, value: &JsValue) -> Self {
        _ = Reflect::set(&self.0, &JsValue::from_str(key), value);
        self
    }

    pub fn num(self, key: &str, value: f64) -> Self {
        self.value(key, &JsValue::from_f64(value))
    }

    pub fn str(self, key: &str, value: &str) -> Self {
        self.value(key, &JsValue::from_str(value))
    }

    pub fn nested(self, key: &str, value: Vars) -> Self {
        self.value(key, value.0.as_ref())
    }

    /// Attach a one-shot callback such as `onComplete`.
    pub fn callback(self, key: &str, f: impl FnOnce() + 'static) -> Self {
        let cb = Closure::once_into_js(f);
        self.value(key, &cb)
    }
}

impl Default for Vars {
    fn default() -> Self {
        Self::new()
    }
}

fn report(what: &str, res: Result<JsValue, JsValue>) {
    if let Err(e) = res {
        log::warn!("gsap.{} skipped: {:?}", what, e);
    }
}

pub fn to(target: &JsValue, vars: Vars) {
    report("to", gsap_to(target, &vars.0));
}

pub fn from(target: &JsValue, vars: Vars) {
    report("from", gsap_from(target, &vars.0));
}

pub fn from_to(target: &JsValue, from: Vars, to: Vars) {
    report("fromTo", gsap_from_to(target, &from.0, &to.0));
}

/// Register the global `ScrollTrigger` plugin if the page loaded it.
pub fn register_scroll_trigger() -> bool {
    let plugin = Reflect::get(&js_sys::global(), &JsValue::from_str("ScrollTrigger"))
        .unwrap_or(JsValue::UNDEFINED);
    if plugin.is_undefined() {
        log::warn!("ScrollTrigger not loaded; scroll reveals disabled");
        return false;
    }
    match gsap_register_plugin(&plugin) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("gsap.registerPlugin failed: {:?}", e);
            false
        }
    }
}

/// `gsap.utils.toArray(selector)`; empty when GSAP is missing.
pub fn to_array(selector: &str) -> Vec<JsValue> {
    match gsap_to_array(&JsValue::from_str(selector)) {
        Ok(arr) => arr.iter().collect(),
        Err(e) => {
            log::warn!("gsap.utils.toArray({}) failed: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// `gsap.timeline().to(target, vars)`.
pub fn timeline_to_once(target: &JsValue, vars: Vars) -> bool {
    let res = gsap_timeline().and_then(|tl| timeline_to(&tl, target, &vars.0));
    match res {
        Ok(_) => true,
        Err(e) => {
            log::warn!("gsap.timeline skipped: {:?}", e);
            false
        }
    }
}
