use crate::constants::*;
use crate::core::particles::{
    font_size_for_width, line_center_y, sample_coverage, ParticleField, ParticleParams,
};
use crate::core::pointer::relative_to;
use crate::core::{PARTICLE_ALPHA_THRESHOLD, PARTICLE_SAMPLE_STRIDE};
use crate::dom;
use crate::frame::RenderLoop;
use glam::Vec2;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ParticleCanvas {
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    field: ParticleField,
}

impl ParticleCanvas {
    fn frame(&mut self) {
        self.field.step();
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        self.ctx.set_fill_style_str(PARTICLE_FILL);
        for p in self.field.particles() {
            self.ctx.begin_path();
            _ = self
                .ctx
                .arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, TAU);
            self.ctx.fill();
        }
    }
}

/// Rasterise each line, read its pixels back and seed one particle per
/// covered sample.
fn sample_lines(
    ctx: &web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
    lines: &[&str],
) -> anyhow::Result<Vec<Vec2>> {
    let font_size = font_size_for_width(width as f32) as f64;
    ctx.set_font(&format!(
        "{} {}px {}",
        PARTICLE_FONT_WEIGHT, font_size, PARTICLE_FONT_FAMILY
    ));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    let mut origins = Vec::new();
    for (i, text) in lines.iter().enumerate() {
        let x = width / 2.0;
        let y = line_center_y(height as f32, font_size as f32, i, lines.len()) as f64;
        ctx.set_fill_style_str("#fff");
        ctx.fill_text(text, x, y).map_err(dom::js_err)?;

        let text_width = ctx.measure_text(text).map_err(dom::js_err)?.width();
        let left = x - text_width / 2.0;
        let top = y - font_size / 2.0;
        let image = ctx
            .get_image_data(left, top, text_width.max(1.0), font_size.max(1.0))
            .map_err(dom::js_err)?;
        ctx.clear_rect(0.0, 0.0, width, height);

        let data = image.data();
        origins.extend(sample_coverage(
            &data,
            image.width() as usize,
            image.height() as usize,
            PARTICLE_SAMPLE_STRIDE,
            PARTICLE_ALPHA_THRESHOLD,
            Vec2::new(left as f32, top as f32),
        ));
    }
    Ok(origins)
}

/// Build the hero particle text and start animating it.
pub fn init(document: &web::Document) -> anyhow::Result<RenderLoop> {
    let canvas: web::HtmlCanvasElement = dom::element_by_id(document, PARTICLE_CANVAS_ID)?;
    let hero: web::HtmlElement = dom::element_by_id(document, HERO_ID)?;

    let width = hero.offset_width().max(1) as u32;
    let height = hero.offset_height().max(1) as u32;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("2d context has unexpected type"))?;

    let origins = sample_lines(&ctx, width as f64, height as f64, &PARTICLE_LINES)?;
    let field = ParticleField::new(origins, ParticleParams::default());
    if field.is_empty() {
        log::warn!("[particles] no glyph pixels sampled");
    } else {
        log::info!("[particles] {} particles sampled", field.len());
    }

    let pc = Rc::new(RefCell::new(ParticleCanvas {
        ctx,
        width: width as f64,
        height: height as f64,
        field,
    }));

    let pc_move = pc.clone();
    let canvas_move = canvas.clone();
    dom::listen_mouse(&canvas, "mousemove", move |ev| {
        let rect = canvas_move.get_bounding_client_rect();
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let local = relative_to(client, rect.left() as f32, rect.top() as f32);
        pc_move.borrow_mut().field.set_pointer(Some(local));
    });
    let pc_leave = pc.clone();
    dom::listen(&canvas, "mouseleave", move || {
        pc_leave.borrow_mut().field.set_pointer(None);
    });

    let pc_frame = pc.clone();
    let lp = RenderLoop::start(move || pc_frame.borrow_mut().frame())?;

    // Placement depends on the hero size; re-derive it from a fresh load.
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let lp_resize = lp.clone();
    dom::listen(&window, "resize", move || {
        lp_resize.stop();
        if let Some(w) = web::window() {
            if let Err(e) = w.location().reload() {
                log::error!("reload failed: {:?}", e);
            }
        }
    });
    Ok(lp)
}
