use crate::constants::*;
use crate::dom;
use crate::gsap::{self, Vars};
use wasm_bindgen::JsValue;
use web_sys as web;

fn follower_idle() -> Vars {
    Vars::new()
        .num("scale", 1.0)
        .str("backgroundColor", "transparent")
        .str("border", "1px solid rgba(255, 255, 255, 0.5)")
}

fn follower_hover() -> Vars {
    Vars::new()
        .num("scale", FOLLOWER_HOVER_SCALE)
        .str("backgroundColor", "rgba(255, 255, 255, 0.1)")
        .str("border", "none")
}

/// Dot + trailing ring that chase the pointer; the ring swells over links.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let cursor = document.query_selector(CURSOR_SELECTOR).map_err(dom::js_err)?;
    let follower = document
        .query_selector(FOLLOWER_SELECTOR)
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("missing {}", FOLLOWER_SELECTOR))?;

    let targets = document
        .query_selector_all(HOVER_TARGETS_SELECTOR)
        .map_err(dom::js_err)?;
    for i in 0..targets.length() {
        let Some(node) = targets.item(i) else {
            continue;
        };
        let f_enter: JsValue = follower.clone().into();
        dom::listen(&node, "mouseenter", move || gsap::to(&f_enter, follower_hover()));
        let f_leave: JsValue = follower.clone().into();
        dom::listen(&node, "mouseleave", move || gsap::to(&f_leave, follower_idle()));
    }

    dom::listen_mouse(document, "mousemove", move |ev| {
        let x = ev.client_x() as f64;
        let y = ev.client_y() as f64;
        if let Some(c) = &cursor {
            gsap::to(
                c,
                Vars::new()
                    .num("x", x)
                    .num("y", y)
                    .num("duration", CURSOR_DURATION_SEC),
            );
        }
        gsap::to(
            &follower,
            Vars::new()
                .num("x", x)
                .num("y", y)
                .num("duration", FOLLOWER_DURATION_SEC),
        );
    });
    Ok(())
}
