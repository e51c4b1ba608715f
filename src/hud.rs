use crate::constants::*;
use crate::core::hud::{clock_text, coords_text, ScrollReadout};
use crate::dom::{self, Interval};
use web_sys as web;

fn update_clock(document: &web::Document) {
    if let Some(clock) = document.get_element_by_id(CLOCK_ID) {
        let now = js_sys::Date::new_0();
        clock.set_text_content(Some(&clock_text(
            now.get_hours(),
            now.get_minutes(),
            now.get_seconds(),
        )));
    }
}

fn update_scroll(document: &web::Document) {
    let Some(indicator) = document.get_element_by_id(SCROLL_INDICATOR_ID) else {
        return;
    };
    let Some(window) = web::window() else {
        return;
    };
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let inner_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let readout = ScrollReadout::new(scroll_top, scroll_height - inner_height);
    indicator.set_text_content(Some(&readout.render()));
}

fn ensure_indicator(document: &web::Document) -> anyhow::Result<()> {
    if document.get_element_by_id(SCROLL_INDICATOR_ID).is_some() {
        return Ok(());
    }
    let indicator = document.create_element("div").map_err(dom::js_err)?;
    indicator.set_id(SCROLL_INDICATOR_ID);
    document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?
        .append_child(&indicator)
        .map_err(dom::js_err)?;
    Ok(())
}

/// Clock, pointer readout and ASCII scroll bar.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;

    update_clock(document);
    let doc_clock = document.clone();
    Interval::start(CLOCK_INTERVAL_MS, move |_| update_clock(&doc_clock))?;

    let doc_coords = document.clone();
    dom::listen_mouse(document, "mousemove", move |ev| {
        if let Some(coords) = doc_coords.get_element_by_id(COORDS_ID) {
            coords.set_text_content(Some(&coords_text(ev.client_x(), ev.client_y())));
        }
    });

    ensure_indicator(document)?;
    for event in ["scroll", "resize"] {
        let doc_scroll = document.clone();
        dom::listen(&window, event, move || update_scroll(&doc_scroll));
    }
    update_scroll(document);
    Ok(())
}
