#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod constants;
mod core;
mod cursor;
mod dom;
mod frame;
mod gsap;
mod hero;
mod hud;
mod logo;
mod overlay;
mod particle_canvas;
mod reveal;

use frame::RenderLoop;

thread_local! {
    // Keeps the running loops reachable for `stop_effects`.
    static LOOPS: RefCell<Vec<RenderLoop>> = RefCell::new(Vec::new());
}

fn keep_loop(name: &str, res: anyhow::Result<RenderLoop>) {
    match res {
        Ok(lp) => LOOPS.with(|l| l.borrow_mut().push(lp)),
        Err(e) => log::error!("[{}] disabled: {:?}", name, e),
    }
}

fn report(name: &str, res: anyhow::Result<()>) {
    if let Err(e) = res {
        log::warn!("[{}] disabled: {:?}", name, e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("waarp-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Halt every per-frame effect; the page keeps its last rendered frame.
#[wasm_bindgen]
pub fn stop_effects() {
    LOOPS.with(|l| {
        for lp in l.borrow_mut().drain(..).filter(RenderLoop::is_running) {
            lp.stop();
        }
    });
    log::info!("render loops stopped");
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Each effect degrades on its own; one missing anchor never blocks the rest.
    keep_loop("background", background::init(&document));
    keep_loop("particles", particle_canvas::init(&document));
    report("cursor", cursor::init(&document));
    report("hud", hud::init(&document));
    report("logo", logo::init(&document));
    report("editor", overlay::init(&document).map(|_| ()));
    hero::start_timeline();
    reveal::init();

    Ok(())
}
