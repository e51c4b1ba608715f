use crate::constants::{BACKGROUND_CANVAS_ID, BACKGROUND_CANVAS_STYLE, QUAD_VERTICES};
use crate::core::uniforms::{grid_fragment_source, ShaderUniforms, Viewport};
use crate::core::{GRID_FRAG, GRID_VERT, MOUSE_SMOOTHING};
use crate::dom;
use crate::frame::RenderLoop;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;
use web_sys::WebGlRenderingContext as GL;

#[derive(Debug, thiserror::Error)]
pub enum ShaderError {
    #[error("WebGL context unavailable")]
    Context,
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: &'static str, log: String },
    #[error("program failed to link: {0}")]
    Link(String),
    #[error("attribute `{0}` not found")]
    MissingAttribute(&'static str),
    #[error("uniform `{0}` not found")]
    MissingUniform(&'static str),
    #[error("could not allocate {0}")]
    Alloc(&'static str),
}

/// Full-viewport grid that lenses toward the smoothed pointer.
pub struct GridBackground {
    gl: GL,
    canvas: web::HtmlCanvasElement,
    u_resolution: web::WebGlUniformLocation,
    u_mouse: web::WebGlUniformLocation,
    // Optimised away by drivers that see it unused; uploads become no-ops.
    u_time: Option<web::WebGlUniformLocation>,
    uniforms: ShaderUniforms,
    started: Instant,
}

impl GridBackground {
    fn new(gl: GL, canvas: web::HtmlCanvasElement) -> Result<Self, ShaderError> {
        let vs = compile_shader(&gl, GL::VERTEX_SHADER, "vertex", GRID_VERT)?;
        let frag = grid_fragment_source(GRID_FRAG);
        let fs = compile_shader(&gl, GL::FRAGMENT_SHADER, "fragment", &frag)?;
        let program = link_program(&gl, &vs, &fs)?;
        gl.use_program(Some(&program));

        let buffer = gl.create_buffer().ok_or(ShaderError::Alloc("vertex buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let verts = js_sys::Float32Array::from(&QUAD_VERTICES[..]);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &verts, GL::STATIC_DRAW);

        let position = gl.get_attrib_location(&program, "position");
        if position < 0 {
            return Err(ShaderError::MissingAttribute("position"));
        }
        gl.enable_vertex_attrib_array(position as u32);
        gl.vertex_attrib_pointer_with_i32(position as u32, 2, GL::FLOAT, false, 0, 0);

        let u_resolution = gl
            .get_uniform_location(&program, "u_resolution")
            .ok_or(ShaderError::MissingUniform("u_resolution"))?;
        let u_mouse = gl
            .get_uniform_location(&program, "u_mouse")
            .ok_or(ShaderError::MissingUniform("u_mouse"))?;
        let u_time = gl.get_uniform_location(&program, "u_time");

        Ok(Self {
            gl,
            canvas,
            u_resolution,
            u_mouse,
            u_time,
            uniforms: ShaderUniforms::new(MOUSE_SMOOTHING),
            started: Instant::now(),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Viewport {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let vp = self.uniforms.resize(width, height);
        self.gl.viewport(vp.x, vp.y, vp.width, vp.height);
        let res = self.uniforms.resolution;
        self.gl.uniform2f(Some(&self.u_resolution), res.x, res.y);
        vp
    }

    pub fn set_pointer_target(&mut self, client: Vec2) {
        self.uniforms.pointer.set_target(client);
    }

    pub fn frame(&mut self) {
        self.uniforms.advance(self.started.elapsed().as_secs_f32());
        let mouse = self.uniforms.mouse_gl();
        self.gl.uniform2f(Some(&self.u_mouse), mouse.x, mouse.y);
        self.gl.uniform1f(self.u_time.as_ref(), self.uniforms.time);
        self.gl.draw_arrays(GL::TRIANGLES, 0, 6);
    }
}

fn compile_shader(
    gl: &GL,
    kind: u32,
    stage: &'static str,
    source: &str,
) -> Result<web::WebGlShader, ShaderError> {
    let shader = gl.create_shader(kind).ok_or(ShaderError::Alloc("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(ShaderError::Compile { stage, log })
    }
}

fn link_program(
    gl: &GL,
    vs: &web::WebGlShader,
    fs: &web::WebGlShader,
) -> Result<web::WebGlProgram, ShaderError> {
    let program = gl.create_program().ok_or(ShaderError::Alloc("program"))?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);
    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(ShaderError::Link(log))
    }
}

fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("canvas element has unexpected type"))?;
    canvas.set_id(BACKGROUND_CANVAS_ID);
    _ = canvas.set_attribute("style", BACKGROUND_CANVAS_STYLE);
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    body.prepend_with_node_1(&canvas).map_err(dom::js_err)?;
    Ok(canvas)
}

fn webgl_context(canvas: &web::HtmlCanvasElement) -> Result<GL, ShaderError> {
    let opts = js_sys::Object::new();
    _ = js_sys::Reflect::set(&opts, &"alpha".into(), &JsValue::TRUE);
    _ = js_sys::Reflect::set(&opts, &"premultipliedAlpha".into(), &JsValue::FALSE);
    canvas
        .get_context_with_context_options("webgl", &opts)
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<GL>().ok())
        .ok_or(ShaderError::Context)
}

/// Insert the background canvas and start its render loop.
///
/// On any GL failure the canvas stays in the page, transparent.
pub fn init(document: &web::Document) -> anyhow::Result<RenderLoop> {
    let canvas = create_canvas(document)?;
    let gl = webgl_context(&canvas)?;
    let bg = Rc::new(RefCell::new(GridBackground::new(gl, canvas)?));

    let fit = {
        let bg = bg.clone();
        move || {
            if let Some((w, h)) = dom::viewport_size() {
                bg.borrow_mut().resize(w, h);
            }
        }
    };
    fit();
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    dom::listen(&window, "resize", fit);

    let bg_pointer = bg.clone();
    dom::listen_mouse(&window, "mousemove", move |ev| {
        bg_pointer
            .borrow_mut()
            .set_pointer_target(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    });

    let bg_frame = bg.clone();
    let lp = RenderLoop::start(move || bg_frame.borrow_mut().frame())?;
    log::info!("[background] grid shader running");
    Ok(lp)
}
