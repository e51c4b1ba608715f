use crate::constants::*;
use crate::core::decode::{DecodeConfig, DecodeSequencer};
use crate::dom::{self, Interval};
use crate::gsap::{self, Vars};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Slide the hero lines up; once they land, kick off the decode heading.
pub fn start_timeline() {
    let vars = Vars::new()
        .num("y", 0.0)
        .num("duration", HERO_LINE_DURATION_SEC)
        .num("stagger", HERO_LINE_STAGGER_SEC)
        .str("ease", "power4.out")
        .num("delay", HERO_LINE_DELAY_SEC)
        .callback("onComplete", schedule_decode);
    if !gsap::timeline_to_once(&JsValue::from_str(HERO_LINE_SELECTOR), vars) {
        // No GSAP means no completion callback to wait for.
        schedule_decode();
    }
}

fn schedule_decode() {
    dom::set_timeout(DECODE_START_DELAY_MS, || {
        if let Err(e) = start_decode() {
            log::warn!("[decode] skipped: {:?}", e);
        }
    });
}

fn render(document: &web::Document, target: &web::HtmlElement, lines: &[String], expanded: bool) {
    target.set_text_content(None);
    for line in lines {
        let Ok(span) = document.create_element("span") else {
            continue;
        };
        span.set_class_name("decode-line");
        span.set_text_content(Some(line));
        _ = target.append_child(&span);
    }
    let style = target.style();
    if expanded {
        _ = style.set_property("letter-spacing", DECODE_SPACING_EXPANDED);
    } else {
        _ = style.remove_property("letter-spacing");
    }
}

/// Run the glitch/scramble/decode sequence on the `[data-decode]` heading.
pub fn start_decode() -> anyhow::Result<Interval> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let target: web::HtmlElement = document
        .query_selector(DECODE_TARGET_SELECTOR)
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("missing {}", DECODE_TARGET_SELECTOR))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("{} is not an HTML element", DECODE_TARGET_SELECTOR))?;

    let source = target
        .text_content()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DECODE_FALLBACK_SOURCE.to_string());
    let mut seq = DecodeSequencer::new(
        &source,
        &DECODE_LINES,
        DecodeConfig::default(),
        StdRng::from_entropy(),
    );
    seq.start();
    log::info!(
        "[decode] {} -> {} ({} chars)",
        source,
        DECODE_LINES.concat(),
        seq.total_len()
    );

    Interval::start(DECODE_TICK_MS, move |interval| {
        if seq.tick() {
            render(&document, &target, seq.lines(), seq.spacing_expanded());
        }
        if seq.is_settled() {
            log::debug!("[decode] {:?}", seq.phase());
            interval.clear();
        }
    })
}
