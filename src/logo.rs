use crate::constants::*;
use crate::core::logo::{hidden_mask, reveal_mask};
use crate::core::pointer::relative_to;
use crate::dom;
use crate::gsap::{self, Vars};
use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const WRAPPER_STYLE: &str = "position:absolute;top:50%;left:50%;transform:translate(-50%,-50%);\
     width:100%;max-width:1440px;height:auto;z-index:10;opacity:0;pointer-events:auto;";
const SHARP_STYLE: &str = "width:100%;height:auto;display:block;pointer-events:none;";
const BLURRED_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;\
     display:block;pointer-events:none;filter:blur(8px);\
     -webkit-mask-repeat:no-repeat;mask-repeat:no-repeat;\
     will-change:mask-image,-webkit-mask-image;";

fn set_mask(img: &web::HtmlElement, gradient: &str) {
    let style = img.style();
    _ = style.set_property("-webkit-mask-image", gradient);
    _ = style.set_property("mask-image", gradient);
}

fn logo_image(style: &str) -> anyhow::Result<web::HtmlImageElement> {
    let img = web::HtmlImageElement::new().map_err(dom::js_err)?;
    img.set_src(LOGO_SRC);
    _ = img.set_attribute("style", style);
    Ok(img)
}

/// Sharp logo with a blurred copy on top, revealed under the cursor.
fn build(document: &web::Document, hero: &web::Element) -> anyhow::Result<web::HtmlElement> {
    let wrapper: web::HtmlElement = document
        .create_element("div")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("div is not an HTML element"))?;
    _ = wrapper.set_attribute("style", WRAPPER_STYLE);

    let sharp = logo_image(SHARP_STYLE)?;
    let blurred = logo_image(BLURRED_STYLE)?;
    set_mask(&blurred, &hidden_mask());

    wrapper.append_child(&sharp).map_err(dom::js_err)?;
    wrapper.append_child(&blurred).map_err(dom::js_err)?;
    hero.append_child(&wrapper).map_err(dom::js_err)?;

    let wrapper_move = wrapper.clone();
    let blurred_move = blurred.clone();
    dom::listen_mouse(&wrapper, "mousemove", move |ev| {
        let rect = wrapper_move.get_bounding_client_rect();
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let at = relative_to(client, rect.left() as f32, rect.top() as f32);
        set_mask(&blurred_move, &reveal_mask(at.x, at.y));
    });
    dom::listen(&wrapper, "mouseleave", move || {
        set_mask(&blurred, &hidden_mask());
    });

    if let Some(window) = web::window() {
        let wrapper_unload = wrapper.clone();
        dom::listen(&window, "beforeunload", move || wrapper_unload.remove());
    }
    Ok(wrapper)
}

/// After a pause, fade the text title out and swap in the interactive logo.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let hero = document
        .get_element_by_id(HERO_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", HERO_ID))?;
    if let Ok(Some(_)) = hero.query_selector(LOGO_EXISTING_SELECTOR) {
        log::info!("[logo] already present");
        return Ok(());
    }

    let document = document.clone();
    dom::set_timeout(LOGO_START_DELAY_MS, move || {
        let vars = Vars::new()
            .num("opacity", 0.0)
            .num("duration", LOGO_TITLE_FADE_SEC)
            .callback("onComplete", move || match build(&document, &hero) {
                Ok(wrapper) => gsap::to(
                    &wrapper,
                    Vars::new()
                        .num("opacity", 1.0)
                        .num("duration", LOGO_FADE_IN_SEC)
                        .str("ease", "power2.inOut"),
                ),
                Err(e) => log::warn!("[logo] not created: {:?}", e),
            });
        gsap::to(&JsValue::from_str(HERO_TITLE_SELECTOR), vars);
    });
    Ok(())
}
