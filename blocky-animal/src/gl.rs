// src/gl.rs
// WebGL 1 implementation of `RenderBackend`.
use crate::backend::{DrawCall, DrawMode, RenderBackend};
use crate::error::{Result, SetupError, ShaderStage};
use crate::render_buffers::BufferPool;
use glam::Mat4;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGlBuffer, WebGlContextAttributes, WebGlProgram,
    WebGlRenderingContext as GL, WebGlShader, WebGlUniformLocation,
};

const VSHADER_SOURCE: &str = r#"
attribute vec4 a_Position;
uniform mat4 u_Matrix;
uniform mat4 u_GlobalRotateMatrix;
void main() {
  gl_Position = u_GlobalRotateMatrix * u_Matrix * a_Position;
}"#;

const FSHADER_SOURCE: &str = r#"
precision mediump float;
uniform vec4 u_FragColor;
void main() {
  gl_FragColor = u_FragColor;
}"#;

pub struct GlRenderer {
    gl: GL,
    program: WebGlProgram,
    a_position: u32,
    u_frag_color: WebGlUniformLocation,
    u_matrix: WebGlUniformLocation,
    u_global_rotate: WebGlUniformLocation,
    buffers: BufferPool<WebGlBuffer>,
}

impl GlRenderer {
    pub fn new(canvas: &HtmlCanvasElement, clear_color: [f32; 4]) -> Result<Self> {
        let gl = context(canvas)?;
        let program = link_program(&gl)?;
        gl.use_program(Some(&program));

        let a_position = attribute(&gl, &program, "a_Position")?;
        let u_frag_color = uniform(&gl, &program, "u_FragColor")?;
        let u_matrix = uniform(&gl, &program, "u_Matrix")?;
        let u_global_rotate = uniform(&gl, &program, "u_GlobalRotateMatrix")?;

        gl.enable(GL::DEPTH_TEST);
        gl.depth_func(GL::LEQUAL);
        let [r, g, b, a] = clear_color;
        gl.clear_color(r, g, b, a);

        log::info!(
            "WebGL ready on a {}x{} canvas",
            canvas.width(),
            canvas.height()
        );

        Ok(Self {
            gl,
            program,
            a_position,
            u_frag_color,
            u_matrix,
            u_global_rotate,
            buffers: BufferPool::new(),
        })
    }
}

impl RenderBackend for GlRenderer {
    fn begin_frame(&mut self) -> Result<()> {
        self.buffers.begin_frame();
        self.gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        Ok(())
    }

    fn set_global_rotation(&mut self, rotation: &Mat4) {
        self.gl.uniform_matrix4fv_with_f32_array(
            Some(&self.u_global_rotate),
            false,
            &rotation.to_cols_array(),
        );
    }

    fn draw(&mut self, call: &DrawCall<'_>) -> Result<()> {
        let gl = &self.gl;
        let [r, g, b, a] = call.rgba();
        gl.uniform4f(Some(&self.u_frag_color), r, g, b, a);
        gl.uniform_matrix4fv_with_f32_array(
            Some(&self.u_matrix),
            false,
            &call.model.to_cols_array(),
        );

        let buffer = self.buffers.acquire(|| gl.create_buffer())?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        let data = js_sys::Float32Array::from(call.vertices);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &data, GL::DYNAMIC_DRAW);
        gl.vertex_attrib_pointer_with_i32(self.a_position, 3, GL::FLOAT, false, 0, 0);
        gl.enable_vertex_attrib_array(self.a_position);

        let mode = match call.mode {
            DrawMode::Triangles => GL::TRIANGLES,
            DrawMode::TriangleFan => GL::TRIANGLE_FAN,
        };
        gl.draw_arrays(mode, 0, call.vertex_count() as i32);
        Ok(())
    }
}

impl Drop for GlRenderer {
    fn drop(&mut self) {
        for buffer in self.buffers.drain() {
            self.gl.delete_buffer(Some(&buffer));
        }
        self.gl.delete_program(Some(&self.program));
    }
}

fn context(canvas: &HtmlCanvasElement) -> Result<GL> {
    let options = WebGlContextAttributes::new();
    options.set_preserve_drawing_buffer(false);
    canvas
        .get_context_with_context_options("webgl", &options)
        .map_err(SetupError::dom)?
        .ok_or(SetupError::ContextUnavailable)?
        .dyn_into::<GL>()
        .map_err(|_| SetupError::ContextUnavailable)
}

fn compile_shader(gl: &GL, stage: ShaderStage, source: &str) -> Result<WebGlShader> {
    let kind = match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    };
    let shader = gl
        .create_shader(kind)
        .ok_or(SetupError::ShaderCreation(stage))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let compiled = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if compiled {
        return Ok(shader);
    }
    let log = gl.get_shader_info_log(&shader).unwrap_or_default();
    gl.delete_shader(Some(&shader));
    Err(SetupError::ShaderCompile { stage, log })
}

fn link_program(gl: &GL) -> Result<WebGlProgram> {
    let vertex = compile_shader(gl, ShaderStage::Vertex, VSHADER_SOURCE)?;
    let fragment = compile_shader(gl, ShaderStage::Fragment, FSHADER_SOURCE)?;
    let program = gl
        .create_program()
        .ok_or_else(|| SetupError::ProgramLink("createProgram returned null".into()))?;
    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    // Shaders are owned by the program from here on.
    gl.delete_shader(Some(&vertex));
    gl.delete_shader(Some(&fragment));

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if linked {
        return Ok(program);
    }
    let log = gl.get_program_info_log(&program).unwrap_or_default();
    gl.delete_program(Some(&program));
    Err(SetupError::ProgramLink(log))
}

fn attribute(gl: &GL, program: &WebGlProgram, name: &str) -> Result<u32> {
    let location = gl.get_attrib_location(program, name);
    u32::try_from(location).map_err(|_| SetupError::AttributeNotFound(name.to_string()))
}

fn uniform(gl: &GL, program: &WebGlProgram, name: &str) -> Result<WebGlUniformLocation> {
    gl.get_uniform_location(program, name)
        .ok_or_else(|| SetupError::UniformNotFound(name.to_string()))
}
