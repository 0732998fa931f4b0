//! Phong lighting with per-fragment shading and a procedural material.
//!
//! Uniform slots:
//! - 0: view matrix
//! - 1: projection matrix
//! - 2: light position (world space)
//! - 3: camera position (world space)
//!
//! Attribute slots 0 (position) and 1 (normal) are fetched as vec3 and
//! forwarded to the fragment stage unchanged.

use softgpu_engine::math::{Mat4, Vec3, Vec4};
use softgpu_engine::{
    AttributeType, BufferId, ColorRgba, Gpu, InFragment, InVertex, IndexType, OutFragment, OutVertex, ProgramId,
    PullerId, Uniforms,
};

use crate::mesh::{Mesh, MeshVertex};

const VIEW: usize = 0;
const PROJECTION: usize = 1;
const LIGHT: usize = 2;
const CAMERA: usize = 3;

const POSITION: usize = 0;
const NORMAL: usize = 1;

const SHININESS: f32 = 40.0;
const STRIPE_GREEN: Vec3 = Vec3::new(0.0, 0.5, 0.0);
const STRIPE_YELLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0);

/// Device objects for drawing one mesh with the Phong program.
#[derive(Debug)]
pub struct PhongMethod {
    vertices: BufferId,
    indices: BufferId,
    puller: PullerId,
    program: ProgramId,
    index_count: u32,
}

impl PhongMethod {
    /// Uploads `mesh` and configures an indexed puller plus the Phong program.
    pub fn new(gpu: &mut Gpu, mesh: &Mesh) -> Self {
        let vertex_bytes = mesh.vertex_bytes();
        let vertices = gpu.create_buffer(vertex_bytes.len());
        gpu.set_buffer_data(vertices, 0, vertex_bytes);

        let index_bytes = mesh.index_bytes();
        let indices = gpu.create_buffer(index_bytes.len());
        gpu.set_buffer_data(indices, 0, index_bytes);

        let puller = gpu.create_vertex_puller();
        gpu.set_vertex_puller_indexing(puller, IndexType::U32, indices);
        gpu.set_vertex_puller_head(
            puller,
            POSITION,
            AttributeType::Vec3,
            MeshVertex::STRIDE,
            MeshVertex::POSITION_OFFSET,
            vertices,
        );
        gpu.enable_vertex_puller_head(puller, POSITION);
        gpu.set_vertex_puller_head(
            puller,
            NORMAL,
            AttributeType::Vec3,
            MeshVertex::STRIDE,
            MeshVertex::NORMAL_OFFSET,
            vertices,
        );
        gpu.enable_vertex_puller_head(puller, NORMAL);

        let program = gpu.create_program();
        gpu.attach_shaders(program, phong_vs, phong_fs);
        gpu.set_vs2fs_type(program, POSITION, AttributeType::Vec3);
        gpu.set_vs2fs_type(program, NORMAL, AttributeType::Vec3);

        log::debug!(
            "phong method ready: {} vertices, {} indices",
            mesh.vertices.len(),
            mesh.index_count()
        );

        Self {
            vertices,
            indices,
            puller,
            program,
            index_count: mesh.index_count(),
        }
    }

    /// Clears to mid-grey and draws the whole mesh.
    pub fn draw(&self, gpu: &mut Gpu, proj: Mat4, view: Mat4, light: Vec3, camera: Vec3) {
        gpu.clear(0.5, 0.5, 0.5, 1.0);
        gpu.bind_vertex_puller(self.puller);
        gpu.use_program(self.program);
        gpu.program_uniform_matrix_4f(self.program, VIEW, view);
        gpu.program_uniform_matrix_4f(self.program, PROJECTION, proj);
        gpu.program_uniform_3f(self.program, LIGHT, light);
        gpu.program_uniform_3f(self.program, CAMERA, camera);
        gpu.draw_triangles(self.index_count);
        gpu.unbind_vertex_puller();
    }

    /// Deletes every device object this method created.
    pub fn release(self, gpu: &mut Gpu) {
        gpu.delete_program(self.program);
        gpu.delete_vertex_puller(self.puller);
        gpu.delete_buffer(self.vertices);
        gpu.delete_buffer(self.indices);
    }
}

/// Projects the world-space position and forwards position and normal.
pub fn phong_vs(out: &mut OutVertex, input: &InVertex, uniforms: &Uniforms) {
    let view_proj = uniforms[PROJECTION].m4() * uniforms[VIEW].m4();
    let position = input.attributes[POSITION].v3();
    out.position = view_proj * Vec4::from_vec3(position, 1.0);
    out.attributes[POSITION] = input.attributes[POSITION];
    out.attributes[NORMAL] = input.attributes[NORMAL];
}

/// Diffuse + specular lighting of the procedural material. White light, no ambient term.
pub fn phong_fs(out: &mut OutFragment, input: &InFragment, uniforms: &Uniforms) {
    let position = input.attributes[POSITION].v3();
    // Interpolated normals are shorter than unit length.
    let n = input.attributes[NORMAL].v3().normalize();
    let l = (uniforms[LIGHT].v3() - position).normalize();
    let v = (uniforms[CAMERA].v3() - position).normalize();

    let diffuse = n.dot(l).clamp(0.0, 1.0);
    let reflected = n * (2.0 * l.dot(n)) - l;
    let specular = v.dot(reflected).max(0.0).powf(SHININESS);

    let base = material(position, n);
    let lit = base * diffuse;
    out.color = ColorRgba::new(
        (lit.x + specular).min(1.0),
        (lit.y + specular).min(1.0),
        (lit.z + specular).min(1.0),
        1.0,
    );
}

/// Stripes blended towards white snow as the normal turns upwards (`t = y²`).
pub fn material(position: Vec3, normal: Vec3) -> Vec3 {
    let t = if normal.y >= 0.0 { normal.y * normal.y } else { 0.0 };
    let stripe = stripes(position);
    Vec3::new(1.0, 1.0, 1.0) * t + stripe * (1.0 - t)
}

/// Ten equal vertical stripes per unit in x, alternating green and yellow,
/// displaced by `sin(10 y) / 10` and repeating in both directions.
pub fn stripes(position: Vec3) -> Vec3 {
    let u = (position.x + (position.y * 10.0).sin() / 10.0).rem_euclid(1.0);
    let band = (u * 10.0) as u32;
    if band % 2 == 0 { STRIPE_GREEN } else { STRIPE_YELLOW }
}

#[cfg(test)]
mod tests {
    use super::*;
    use softgpu_engine::Attribute;

    fn uniforms(light: Vec3, camera: Vec3) -> Uniforms {
        let mut u = Uniforms::default();
        u.slots[VIEW].set_m4(Mat4::identity());
        u.slots[PROJECTION].set_m4(Mat4::identity());
        u.slots[LIGHT].set_v3(light);
        u.slots[CAMERA].set_v3(camera);
        u
    }

    fn fragment(position: Vec3, normal: Vec3) -> InFragment {
        let mut f = InFragment::default();
        f.attributes[POSITION] = Attribute::from_v3(position);
        f.attributes[NORMAL] = Attribute::from_v3(normal);
        f
    }

    // ── material ──────────────────────────────────────────────────────────

    #[test]
    fn stripes_alternate_every_tenth() {
        assert_eq!(stripes(Vec3::new(0.05, 0.0, 0.0)), STRIPE_GREEN);
        assert_eq!(stripes(Vec3::new(0.15, 0.0, 0.0)), STRIPE_YELLOW);
        assert_eq!(stripes(Vec3::new(0.95, 0.0, 0.0)), STRIPE_YELLOW);
    }

    #[test]
    fn stripes_repeat_for_negative_coordinates() {
        assert_eq!(stripes(Vec3::new(-0.95, 0.0, 0.0)), stripes(Vec3::new(0.05, 0.0, 0.0)));
        assert_eq!(stripes(Vec3::new(-0.05, 0.0, 0.0)), STRIPE_YELLOW);
    }

    #[test]
    fn upward_normal_is_snow_white() {
        let c = material(Vec3::new(0.05, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(c, Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn sideways_and_downward_normals_show_stripes() {
        let p = Vec3::new(0.05, 0.0, 0.0);
        assert_eq!(material(p, Vec3::new(1.0, 0.0, 0.0)), STRIPE_GREEN);
        assert_eq!(material(p, Vec3::new(0.0, -1.0, 0.0)), STRIPE_GREEN);
    }

    // ── shaders ───────────────────────────────────────────────────────────

    #[test]
    fn vertex_shader_applies_view_projection() {
        let mut u = uniforms(Vec3::zero(), Vec3::zero());
        u.slots[VIEW].set_m4(Mat4::translation(Vec3::new(1.0, 2.0, 3.0)));

        let mut input = InVertex::default();
        input.attributes[POSITION] = Attribute::from_v3(Vec3::new(1.0, 1.0, 1.0));
        input.attributes[NORMAL] = Attribute::from_v3(Vec3::new(0.0, 0.0, 1.0));

        let mut out = OutVertex::default();
        phong_vs(&mut out, &input, &u);
        assert_eq!(out.position, Vec4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(out.attributes[NORMAL], input.attributes[NORMAL]);
    }

    #[test]
    fn light_behind_surface_leaves_it_black() {
        let u = uniforms(Vec3::new(0.0, 0.0, -10.0), Vec3::new(0.0, 0.0, 10.0));
        let f = fragment(Vec3::zero(), Vec3::new(0.0, 0.0, 1.0));
        let mut out = OutFragment::default();
        phong_fs(&mut out, &f, &u);
        assert_eq!(out.color, ColorRgba::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn head_on_light_saturates_with_highlight() {
        let u = uniforms(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 10.0));
        // Short normal: must be renormalized.
        let f = fragment(Vec3::new(0.05, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.5));
        let mut out = OutFragment::default();
        phong_fs(&mut out, &f, &u);
        assert!(out.color.r > 0.99 && out.color.g > 0.99 && out.color.b > 0.99);
        assert_eq!(out.color.a, 1.0);
    }

    #[test]
    fn method_draws_and_releases_its_objects() {
        let mut gpu = Gpu::new();
        gpu.create_framebuffer(16, 16);
        let mesh = Mesh::uv_sphere(0.5, 6, 12);
        let method = PhongMethod::new(&mut gpu, &mesh);

        let proj = Mat4::perspective(core::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
        let eye = Vec3::new(0.0, 0.0, 1.5);
        let view = Mat4::look_at(eye, Vec3::zero(), Vec3::new(0.0, 1.0, 0.0));
        method.draw(&mut gpu, proj, view, Vec3::new(10.0, 10.0, 10.0), eye);

        // The sphere sits in the middle of the frame, the corners stay grey.
        let fb = gpu.framebuffer();
        assert_eq!(fb.color_at(0, 0).map(|t| t.r), Some(128));
        assert!(fb.depth_at(8, 8).is_some_and(|d| d < 1.0));
        assert_eq!(gpu.bound_vertex_puller(), PullerId::EMPTY);

        let program = method.program;
        let vertices = method.vertices;
        method.release(&mut gpu);
        assert!(!gpu.is_program(program));
        assert!(!gpu.is_buffer(vertices));
    }
}
