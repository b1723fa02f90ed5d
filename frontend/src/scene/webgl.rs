//! WebGL2 render target for the hero scene.

use super::geometry::MeshData;
use super::graph::SceneGraph;
use super::host::RenderTarget;
use super::SceneError;
use glam::Mat4;
use js_sys::{Float32Array, Object, Reflect, Uint16Array};
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    HtmlCanvasElement, HtmlElement, WebGl2RenderingContext as Gl, WebGlBuffer, WebGlProgram,
    WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject, WebglLoseContext,
};

const MESH_VERTEX: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;
uniform mat4 u_normal_matrix;

out vec3 v_world;
out vec3 v_normal;

void main() {
    vec4 world = u_model * vec4(a_position, 1.0);
    v_world = world.xyz;
    v_normal = mat3(u_normal_matrix) * a_normal;
    gl_Position = u_projection * u_view * world;
}
"#;

const MESH_FRAGMENT: &str = r#"#version 300 es
precision highp float;

in vec3 v_world;
in vec3 v_normal;

uniform vec3 u_camera;
uniform vec3 u_color;
uniform float u_metalness;
uniform float u_roughness;
uniform vec3 u_emissive;
uniform bool u_unlit;

uniform vec3 u_ambient;
uniform vec3 u_dir_direction[2];
uniform vec3 u_dir_color[2];
uniform vec3 u_point_position[2];
uniform vec3 u_point_color[2];
uniform float u_point_range[2];

out vec4 frag_color;

const float EXPOSURE = 1.2;

// Narkowicz fit of the ACES filmic curve
vec3 aces(vec3 x) {
    return clamp((x * (2.51 * x + 0.03)) / (x * (2.43 * x + 0.59) + 0.14), 0.0, 1.0);
}

vec3 shade(vec3 n, vec3 v, vec3 l, vec3 radiance) {
    float ndl = max(dot(n, l), 0.0);
    vec3 h = normalize(l + v);
    float shininess = mix(256.0, 4.0, u_roughness);
    float spec = pow(max(dot(n, h), 0.0), shininess) * (1.0 - u_roughness * 0.8);
    vec3 diffuse = u_color * (1.0 - u_metalness);
    vec3 specular = mix(vec3(0.04), u_color, u_metalness);
    return (diffuse * ndl + specular * spec) * radiance;
}

void main() {
    if (u_unlit) {
        frag_color = vec4(pow(u_color, vec3(1.0 / 2.2)), 1.0);
        return;
    }

    vec3 n = normalize(v_normal);
    if (!gl_FrontFacing) {
        n = -n;
    }
    vec3 v = normalize(u_camera - v_world);

    vec3 base = u_color * (1.0 - u_metalness) + mix(vec3(0.04), u_color, u_metalness) * 0.5;
    vec3 color = u_ambient * base + u_emissive;

    for (int i = 0; i < 2; i++) {
        color += shade(n, v, normalize(u_dir_direction[i]), u_dir_color[i]);
    }
    for (int i = 0; i < 2; i++) {
        vec3 to_light = u_point_position[i] - v_world;
        float falloff = clamp(1.0 - length(to_light) / u_point_range[i], 0.0, 1.0);
        color += shade(n, v, normalize(to_light), u_point_color[i] * falloff * falloff);
    }

    color = aces(color * EXPOSURE);
    frag_color = vec4(pow(color, vec3(1.0 / 2.2)), 1.0);
}
"#;

const POINTS_VERTEX: &str = r#"#version 300 es
layout(location = 0) in vec3 a_position;

uniform mat4 u_view;
uniform mat4 u_projection;
uniform float u_time;

void main() {
    float angle = u_time * 0.2 + a_position.y * 0.1;
    float c = cos(angle);
    float s = sin(angle);
    vec3 p = vec3(
        a_position.x * c - a_position.z * s,
        a_position.y,
        a_position.x * s + a_position.z * c
    );
    vec4 mv = u_view * vec4(p, 1.0);
    gl_PointSize = 3.0 * (10.0 / -mv.z);
    gl_Position = u_projection * mv;
}
"#;

const POINTS_FRAGMENT: &str = r#"#version 300 es
precision highp float;

uniform vec3 u_color;

out vec4 frag_color;

void main() {
    if (length(gl_PointCoord - vec2(0.5)) > 0.5) {
        discard;
    }
    frag_color = vec4(pow(u_color, vec3(1.0 / 2.2)), 0.8);
}
"#;

struct GpuMesh {
    vao: WebGlVertexArrayObject,
    buffers: Vec<WebGlBuffer>,
    index_count: i32,
}

struct MeshUniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    normal_matrix: Option<WebGlUniformLocation>,
    camera: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
    metalness: Option<WebGlUniformLocation>,
    roughness: Option<WebGlUniformLocation>,
    emissive: Option<WebGlUniformLocation>,
    unlit: Option<WebGlUniformLocation>,
    ambient: Option<WebGlUniformLocation>,
    dir_direction: Option<WebGlUniformLocation>,
    dir_color: Option<WebGlUniformLocation>,
    point_position: Option<WebGlUniformLocation>,
    point_color: Option<WebGlUniformLocation>,
    point_range: Option<WebGlUniformLocation>,
}

impl MeshUniforms {
    fn locate(gl: &Gl, program: &WebGlProgram) -> Self {
        let at = |name: &str| gl.get_uniform_location(program, name);
        Self {
            model: at("u_model"),
            view: at("u_view"),
            projection: at("u_projection"),
            normal_matrix: at("u_normal_matrix"),
            camera: at("u_camera"),
            color: at("u_color"),
            metalness: at("u_metalness"),
            roughness: at("u_roughness"),
            emissive: at("u_emissive"),
            unlit: at("u_unlit"),
            ambient: at("u_ambient"),
            dir_direction: at("u_dir_direction"),
            dir_color: at("u_dir_color"),
            point_position: at("u_point_position"),
            point_color: at("u_point_color"),
            point_range: at("u_point_range"),
        }
    }
}

struct PointUniforms {
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    time: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
}

pub struct WebGlTarget {
    canvas: HtmlCanvasElement,
    gl: Gl,
    pixel_ratio: f64,
    mesh_program: WebGlProgram,
    mesh_uniforms: MeshUniforms,
    meshes: Vec<GpuMesh>,
    point_program: WebGlProgram,
    point_uniforms: PointUniforms,
    points: GpuMesh,
    disposed: bool,
}

fn compile(gl: &Gl, kind: u32, source: &str) -> Result<WebGlShader, SceneError> {
    let shader = gl.create_shader(kind).ok_or(SceneError::Buffer("shader"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    if gl
        .get_shader_parameter(&shader, Gl::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(shader)
    } else {
        let log = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(SceneError::Shader(log))
    }
}

fn link(gl: &Gl, vertex: &str, fragment: &str) -> Result<WebGlProgram, SceneError> {
    let vs = compile(gl, Gl::VERTEX_SHADER, vertex)?;
    let fs = match compile(gl, Gl::FRAGMENT_SHADER, fragment) {
        Ok(fs) => fs,
        Err(e) => {
            gl.delete_shader(Some(&vs));
            return Err(e);
        }
    };
    let program = gl.create_program().ok_or(SceneError::Buffer("program"))?;
    gl.attach_shader(&program, &vs);
    gl.attach_shader(&program, &fs);
    gl.link_program(&program);
    // the program keeps what it needs once linked
    gl.delete_shader(Some(&vs));
    gl.delete_shader(Some(&fs));

    if gl
        .get_program_parameter(&program, Gl::LINK_STATUS)
        .as_bool()
        .unwrap_or(false)
    {
        Ok(program)
    } else {
        let log = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(SceneError::Link(log))
    }
}

fn upload_floats(gl: &Gl, location: u32, data: &[f32]) -> Result<WebGlBuffer, SceneError> {
    let buffer = gl.create_buffer().ok_or(SceneError::Buffer("vertex buffer"))?;
    gl.bind_buffer(Gl::ARRAY_BUFFER, Some(&buffer));
    gl.buffer_data_with_array_buffer_view(
        Gl::ARRAY_BUFFER,
        &Float32Array::from(data),
        Gl::STATIC_DRAW,
    );
    gl.enable_vertex_attrib_array(location);
    gl.vertex_attrib_pointer_with_i32(location, 3, Gl::FLOAT, false, 0, 0);
    Ok(buffer)
}

fn upload_mesh(gl: &Gl, mesh: &MeshData) -> Result<GpuMesh, SceneError> {
    let vao = gl
        .create_vertex_array()
        .ok_or(SceneError::Buffer("vertex array"))?;
    gl.bind_vertex_array(Some(&vao));

    let mut buffers = vec![
        upload_floats(gl, 0, &mesh.positions)?,
        upload_floats(gl, 1, &mesh.normals)?,
    ];
    let indices = gl.create_buffer().ok_or(SceneError::Buffer("index buffer"))?;
    gl.bind_buffer(Gl::ELEMENT_ARRAY_BUFFER, Some(&indices));
    gl.buffer_data_with_array_buffer_view(
        Gl::ELEMENT_ARRAY_BUFFER,
        &Uint16Array::from(mesh.indices.as_slice()),
        Gl::STATIC_DRAW,
    );
    buffers.push(indices);

    gl.bind_vertex_array(None);
    Ok(GpuMesh {
        vao,
        buffers,
        index_count: mesh.indices.len() as i32,
    })
}

fn upload_points(gl: &Gl, positions: &[f32]) -> Result<GpuMesh, SceneError> {
    let vao = gl
        .create_vertex_array()
        .ok_or(SceneError::Buffer("vertex array"))?;
    gl.bind_vertex_array(Some(&vao));
    let buffer = upload_floats(gl, 0, positions)?;
    gl.bind_vertex_array(None);
    Ok(GpuMesh {
        vao,
        buffers: vec![buffer],
        index_count: (positions.len() / 3) as i32,
    })
}

fn release(gl: &Gl, mesh: &GpuMesh) {
    for buffer in &mesh.buffers {
        gl.delete_buffer(Some(buffer));
    }
    gl.delete_vertex_array(Some(&mesh.vao));
}

fn context_options() -> Result<JsValue, SceneError> {
    let options = Object::new();
    Reflect::set(&options, &"antialias".into(), &JsValue::TRUE)?;
    Reflect::set(&options, &"alpha".into(), &JsValue::TRUE)?;
    Ok(options.into())
}

impl WebGlTarget {
    /// Creates a canvas inside `container` and uploads every mesh and the
    /// particle cloud. Nothing is left attached to the page on error.
    pub fn new(
        container: &HtmlElement,
        pixel_ratio: f64,
        meshes: &[MeshData],
        particles: &[f32],
    ) -> Result<Self, SceneError> {
        let document = container.owner_document().ok_or(SceneError::NoContainer)?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| SceneError::Js("created element is not a canvas".into()))?;
        let style = canvas.style();
        style.set_property("display", "block")?;
        style.set_property("width", "100%")?;
        style.set_property("height", "100%")?;

        let gl: Gl = canvas
            .get_context_with_context_options("webgl2", &context_options()?)?
            .ok_or(SceneError::ContextUnavailable)?
            .dyn_into()
            .map_err(|_| SceneError::ContextUnavailable)?;

        let mesh_program = link(&gl, MESH_VERTEX, MESH_FRAGMENT)?;
        let point_program = match link(&gl, POINTS_VERTEX, POINTS_FRAGMENT) {
            Ok(program) => program,
            Err(e) => {
                gl.delete_program(Some(&mesh_program));
                return Err(e);
            }
        };

        let mut gpu_meshes = Vec::with_capacity(meshes.len());
        let uploaded = meshes
            .iter()
            .try_for_each(|mesh| upload_mesh(&gl, mesh).map(|m| gpu_meshes.push(m)))
            .and_then(|_| upload_points(&gl, particles));
        let points = match uploaded {
            Ok(points) => points,
            Err(e) => {
                gpu_meshes.iter().for_each(|m| release(&gl, m));
                gl.delete_program(Some(&mesh_program));
                gl.delete_program(Some(&point_program));
                return Err(e);
            }
        };

        let mesh_uniforms = MeshUniforms::locate(&gl, &mesh_program);
        let point_uniforms = PointUniforms {
            view: gl.get_uniform_location(&point_program, "u_view"),
            projection: gl.get_uniform_location(&point_program, "u_projection"),
            time: gl.get_uniform_location(&point_program, "u_time"),
            color: gl.get_uniform_location(&point_program, "u_color"),
        };

        gl.enable(Gl::DEPTH_TEST);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        container.append_child(&canvas)?;
        debug!(
            "scene surface ready: {} meshes, {} particles",
            gpu_meshes.len(),
            points.index_count
        );

        Ok(Self {
            canvas,
            gl,
            pixel_ratio,
            mesh_program,
            mesh_uniforms,
            meshes: gpu_meshes,
            point_program,
            point_uniforms,
            points,
            disposed: false,
        })
    }

    fn draw_meshes(&self, graph: &SceneGraph, view: &Mat4, projection: &Mat4) {
        let gl = &self.gl;
        let u = &self.mesh_uniforms;
        gl.use_program(Some(&self.mesh_program));
        gl.uniform_matrix4fv_with_f32_array(u.view.as_ref(), false, &view.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(
            u.projection.as_ref(),
            false,
            &projection.to_cols_array(),
        );
        gl.uniform3fv_with_f32_array(u.camera.as_ref(), &graph.camera_position().to_array());

        let lights = &graph.lights;
        let ambient = lights.ambient.color * lights.ambient.intensity;
        gl.uniform3fv_with_f32_array(u.ambient.as_ref(), &ambient.to_array());

        let mut directions = [0.0; 6];
        let mut dir_colors = [0.0; 6];
        for (i, light) in [lights.key, lights.front].iter().enumerate() {
            directions[i * 3..i * 3 + 3].copy_from_slice(&light.direction.to_array());
            dir_colors[i * 3..i * 3 + 3]
                .copy_from_slice(&(light.color * light.intensity).to_array());
        }
        gl.uniform3fv_with_f32_array(u.dir_direction.as_ref(), &directions);
        gl.uniform3fv_with_f32_array(u.dir_color.as_ref(), &dir_colors);

        let mut positions = [0.0; 6];
        let mut point_colors = [0.0; 6];
        let mut ranges = [0.0; 2];
        for (i, light) in [lights.accent, lights.fill].iter().enumerate() {
            positions[i * 3..i * 3 + 3].copy_from_slice(&light.position.to_array());
            point_colors[i * 3..i * 3 + 3]
                .copy_from_slice(&(light.color * light.intensity).to_array());
            ranges[i] = light.range;
        }
        gl.uniform3fv_with_f32_array(u.point_position.as_ref(), &positions);
        gl.uniform3fv_with_f32_array(u.point_color.as_ref(), &point_colors);
        gl.uniform1fv_with_f32_array(u.point_range.as_ref(), &ranges);

        let group = graph.group_matrix();
        for node in &graph.nodes {
            let Some(mesh) = self.meshes.get(node.mesh) else {
                continue;
            };
            let model = group * node.local;
            let normal_matrix = model.inverse().transpose();
            let material = graph.materials.get(node.material);

            gl.uniform_matrix4fv_with_f32_array(u.model.as_ref(), false, &model.to_cols_array());
            gl.uniform_matrix4fv_with_f32_array(
                u.normal_matrix.as_ref(),
                false,
                &normal_matrix.to_cols_array(),
            );
            gl.uniform3fv_with_f32_array(u.color.as_ref(), &material.color.to_array());
            gl.uniform1f(u.metalness.as_ref(), material.metalness);
            gl.uniform1f(u.roughness.as_ref(), material.roughness);
            gl.uniform3fv_with_f32_array(u.emissive.as_ref(), &material.emissive.to_array());
            gl.uniform1i(u.unlit.as_ref(), i32::from(material.unlit));

            gl.bind_vertex_array(Some(&mesh.vao));
            gl.draw_elements_with_i32(Gl::TRIANGLES, mesh.index_count, Gl::UNSIGNED_SHORT, 0);
        }
        gl.bind_vertex_array(None);
    }

    fn draw_particles(&self, graph: &SceneGraph, view: &Mat4, projection: &Mat4) {
        let gl = &self.gl;
        let u = &self.point_uniforms;
        gl.use_program(Some(&self.point_program));
        gl.uniform_matrix4fv_with_f32_array(u.view.as_ref(), false, &view.to_cols_array());
        gl.uniform_matrix4fv_with_f32_array(
            u.projection.as_ref(),
            false,
            &projection.to_cols_array(),
        );
        gl.uniform1f(u.time.as_ref(), graph.particles.time);
        gl.uniform3fv_with_f32_array(u.color.as_ref(), &graph.particles.color.to_array());

        gl.enable(Gl::BLEND);
        gl.blend_func(Gl::SRC_ALPHA, Gl::ONE_MINUS_SRC_ALPHA);
        gl.depth_mask(false);
        gl.bind_vertex_array(Some(&self.points.vao));
        gl.draw_arrays(Gl::POINTS, 0, self.points.index_count);
        gl.bind_vertex_array(None);
        gl.depth_mask(true);
        gl.disable(Gl::BLEND);
    }
}

impl RenderTarget for WebGlTarget {
    fn resize(&mut self, width: f64, height: f64) {
        let width = (width * self.pixel_ratio).max(1.0) as u32;
        let height = (height * self.pixel_ratio).max(1.0) as u32;
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
    }

    fn render(&mut self, graph: &SceneGraph) {
        if self.disposed {
            return;
        }
        let view = graph.view_matrix();
        let projection = graph.projection_matrix();
        self.gl.clear(Gl::COLOR_BUFFER_BIT | Gl::DEPTH_BUFFER_BIT);
        self.draw_meshes(graph, &view, &projection);
        self.draw_particles(graph, &view, &projection);
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        for mesh in &self.meshes {
            release(&self.gl, mesh);
        }
        release(&self.gl, &self.points);
        self.meshes.clear();
        self.gl.delete_program(Some(&self.mesh_program));
        self.gl.delete_program(Some(&self.point_program));

        match self.gl.get_extension("WEBGL_lose_context") {
            Ok(Some(ext)) => ext.unchecked_into::<WebglLoseContext>().lose_context(),
            Ok(None) => debug!("WEBGL_lose_context not available"),
            Err(e) => warn!("failed to query WEBGL_lose_context: {:?}", e),
        }
        self.canvas.remove();
        debug!("scene surface disposed");
    }
}
