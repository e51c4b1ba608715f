use crate::constants::EDITOR_PANEL_ID;
use crate::core::editor::{accept_value, edit_cursor, Setting, FONT_CHOICES};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_STYLE: &str = "position:fixed;bottom:20px;right:20px;width:300px;\
     background-color:rgba(0,0,0,0.9);border:1px solid #333;border-radius:8px;padding:20px;\
     font-family:'Inter',sans-serif;color:#fff;z-index:999999;\
     box-shadow:0 10px 30px rgba(0,0,0,0.5);display:flex;flex-direction:column;gap:15px;";
const TITLE_STYLE: &str = "margin:0 0 10px 0;font-size:14px;text-transform:uppercase;\
     border-bottom:1px solid #333;padding-bottom:10px;";
const GROUP_STYLE: &str = "display:flex;justify-content:space-between;align-items:center;";
const LABEL_STYLE: &str = "font-size:12px;color:#888;";
const SELECT_STYLE: &str =
    "background-color:#222;color:#fff;border:1px solid #444;padding:5px;border-radius:4px;";
const CLOSE_STYLE: &str = "position:absolute;top:10px;right:10px;cursor:pointer;font-size:20px;";

fn html<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(dom::js_err)?
        .dyn_into::<T>()
        .map_err(|_| anyhow::anyhow!("<{}> has an unexpected type", tag))
}

fn control(
    document: &web::Document,
    label: &str,
    input: &web::Element,
) -> anyhow::Result<web::Element> {
    let group: web::Element = html(document, "div")?;
    _ = group.set_attribute("style", GROUP_STYLE);
    let label_el: web::Element = html(document, "label")?;
    label_el.set_text_content(Some(label));
    _ = label_el.set_attribute("style", LABEL_STYLE);
    group.append_child(&label_el).map_err(dom::js_err)?;
    group.append_child(input).map_err(dom::js_err)?;
    Ok(group)
}

/// Write `value` to the `:root` custom property behind `setting`.
pub fn apply(document: &web::Document, setting: Setting, value: &str) {
    let Some(value) = accept_value(setting, value) else {
        log::warn!("[editor] rejected {:?} value {:?}", setting, value);
        return;
    };
    let root = document
        .document_element()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
    if let Some(root) = root {
        _ = root.style().set_property(setting.css_property(), &value);
    }
}

fn color_input(document: &web::Document, setting: Setting) -> anyhow::Result<web::Element> {
    let input: web::HtmlInputElement = html(document, "input")?;
    input.set_type("color");
    input.set_value(setting.default_value());
    let doc = document.clone();
    let source = input.clone();
    dom::listen(&input, "input", move || apply(&doc, setting, &source.value()));
    control(document, setting.label(), &input)
}

fn font_select(document: &web::Document) -> anyhow::Result<web::Element> {
    let select: web::HtmlSelectElement = html(document, "select")?;
    _ = select.set_attribute("style", SELECT_STYLE);
    for font in FONT_CHOICES.iter() {
        let opt: web::HtmlOptionElement = html(document, "option")?;
        opt.set_value(font.value);
        opt.set_text_content(Some(font.name));
        select.append_child(&opt).map_err(dom::js_err)?;
    }
    let doc = document.clone();
    let source = select.clone();
    dom::listen(&select, "change", move || {
        apply(&doc, Setting::Font, &source.value())
    });
    control(document, Setting::Font.label(), &select)
}

fn edit_toggle(document: &web::Document) -> anyhow::Result<web::Element> {
    let toggle: web::HtmlInputElement = html(document, "input")?;
    toggle.set_type("checkbox");
    let doc = document.clone();
    let source = toggle.clone();
    dom::listen(&toggle, "change", move || {
        let on = source.checked();
        if let Some(body) = doc.body() {
            body.set_content_editable(if on { "true" } else { "false" });
            _ = body.style().set_property("cursor", edit_cursor(on));
        }
    });
    control(document, "Edit Text Content", &toggle)
}

/// Build the floating live-editing panel and attach it to `<body>`.
pub fn init(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    if let Some(existing) = document.get_element_by_id(EDITOR_PANEL_ID) {
        return existing
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("#{} is not an HTML element", EDITOR_PANEL_ID));
    }
    let panel: web::HtmlElement = html(document, "div")?;
    panel.set_id(EDITOR_PANEL_ID);
    _ = panel.set_attribute("style", PANEL_STYLE);

    let title: web::Element = html(document, "h3")?;
    title.set_text_content(Some("Visual Editor 🎨"));
    _ = title.set_attribute("style", TITLE_STYLE);
    panel.append_child(&title).map_err(dom::js_err)?;

    panel.append_child(&edit_toggle(document)?).map_err(dom::js_err)?;
    for setting in Setting::ALL.into_iter().filter(|s| *s != Setting::Font) {
        panel
            .append_child(&color_input(document, setting)?)
            .map_err(dom::js_err)?;
    }
    panel.append_child(&font_select(document)?).map_err(dom::js_err)?;

    let close: web::Element = html(document, "div")?;
    close.set_text_content(Some("×"));
    _ = close.set_attribute("style", CLOSE_STYLE);
    let panel_close = panel.clone();
    dom::listen(&close, "click", move || {
        _ = panel_close.style().set_property("display", "none");
    });
    panel.append_child(&close).map_err(dom::js_err)?;

    document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no body"))?
        .append_child(&panel)
        .map_err(dom::js_err)?;
    log::info!("Visual Editor Loaded");
    Ok(panel)
}
