use crate::device::Framebuffer;
use crate::math::{Vec2, Vec4};
use crate::shader::{
    Attribute, AttributeType, FragmentShader, InFragment, MAX_ATTRIBUTES, OutFragment, OutVertex,
    Uniforms,
};

use super::{DrawStats, Triangle};

/// Rasterizes one screen-space triangle into `framebuffer`.
///
/// Every pixel of the framebuffer is tested (rows outer, columns inner).
/// A pixel is covered when the three edge functions at its center are all
/// `>= 0` or all `<= 0`, so both windings rasterize and degenerate
/// triangles cover the pixels their edges pass exactly through. Restricting
/// the scan to the bounding box would drop those, so the scan stays
/// full-frame.
pub(crate) fn rasterize(
    triangle: &Triangle,
    fragment_shader: &dyn FragmentShader,
    uniforms: &Uniforms,
    vs2fs: &[AttributeType; MAX_ATTRIBUTES],
    framebuffer: &mut Framebuffer,
    stats: &mut DrawStats,
) {
    let a = triangle.a.position.xy();
    let b = triangle.b.position.xy();
    let c = triangle.c.position.xy();

    let ab = b - a;
    let bc = c - b;
    let ca = a - c;

    for y in 0..framebuffer.height() {
        for x in 0..framebuffer.width() {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

            let e0 = ab.perp_dot(p - a);
            let e1 = bc.perp_dot(p - b);
            let e2 = ca.perp_dot(p - c);

            let inside = (e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0) || (e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0);
            if !inside {
                continue;
            }

            let fragment = interpolate_fragment(triangle, p, vs2fs);

            let mut output = OutFragment::default();
            fragment_shader.shade(&mut output, &fragment, uniforms);
            stats.fragments += 1;

            if framebuffer.depth_test_write(x, y, fragment.coord.z, output.color) {
                stats.fragments_written += 1;
            }
        }
    }
}

/// Barycentric weights `(l0, l1, l2)` of `p` against screen positions `a, b, c`.
///
/// Zero-area triangles divide by zero; the resulting NaN/inf is not filtered.
#[inline]
pub(crate) fn barycentric(a: Vec2, b: Vec2, c: Vec2, p: Vec2) -> [f32; 3] {
    let v0 = b - a;
    let v1 = c - a;
    let v2 = p - a;

    let d00 = v0.dot(v0);
    let d01 = v0.dot(v1);
    let d11 = v1.dot(v1);
    let d20 = v2.dot(v0);
    let d21 = v2.dot(v1);
    let denom = d00 * d11 - d01 * d01;

    let l1 = (d11 * d20 - d01 * d21) / denom;
    let l2 = (d00 * d21 - d01 * d20) / denom;
    let l0 = 1.0 - l1 - l2;
    [l0, l1, l2]
}

/// Perspective-correct blend of per-vertex values.
///
/// `l` are screen-space barycentric weights, `h` the clip-space `w` of each
/// vertex: `Σ(v·l/h) / Σ(l/h)`.
#[inline]
pub(crate) fn perspective_mix(v: [f32; 3], l: [f32; 3], h: [f32; 3]) -> f32 {
    (v[0] * l[0] / h[0] + v[1] * l[1] / h[1] + v[2] * l[2] / h[2])
        / (l[0] / h[0] + l[1] / h[1] + l[2] / h[2])
}

/// Builds the fragment at pixel center `p`: interpolated depth plus every
/// attribute slot the program forwards. Slots typed `Empty` stay default.
fn interpolate_fragment(
    triangle: &Triangle,
    p: Vec2,
    vs2fs: &[AttributeType; MAX_ATTRIBUTES],
) -> InFragment {
    let Triangle { a, b, c } = triangle;
    let l = barycentric(a.position.xy(), b.position.xy(), c.position.xy(), p);
    let h = [a.position.w, b.position.w, c.position.w];

    let mut fragment = InFragment::default();
    for (slot, ty) in vs2fs.iter().enumerate() {
        if ty.is_empty() {
            continue;
        }
        fragment.attributes[slot] = interpolate_attribute(*ty, [a, b, c], slot, l, h);
    }

    let depth = perspective_mix([a.position.z, b.position.z, c.position.z], l, h);
    fragment.coord = Vec4::new(p.x, p.y, depth, 1.0);
    fragment
}

fn interpolate_attribute(
    ty: AttributeType,
    vertices: [&OutVertex; 3],
    slot: usize,
    l: [f32; 3],
    h: [f32; 3],
) -> Attribute {
    let [a, b, c] = vertices.map(|v| *v.attributes[slot].as_array());
    let mut out = Attribute::default();
    for (i, dst) in out.as_array_mut().iter_mut().enumerate().take(ty.components()) {
        *dst = perspective_mix([a[i], b[i], c[i]], l, h);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorRgba, Rgba8};
    use crate::math::Vec3;

    fn vertex(x: f32, y: f32, z: f32, w: f32) -> OutVertex {
        OutVertex {
            position: Vec4::new(x, y, z, w),
            ..OutVertex::default()
        }
    }

    fn solid(color: ColorRgba) -> impl Fn(&mut OutFragment, &InFragment, &Uniforms) {
        move |out: &mut OutFragment, _: &InFragment, _: &Uniforms| out.color = color
    }

    fn draw(tri: &Triangle, fb: &mut Framebuffer, color: ColorRgba) -> DrawStats {
        let mut stats = DrawStats::default();
        let shader = solid(color);
        rasterize(tri, &shader, &Uniforms::default(), &Default::default(), fb, &mut stats);
        stats
    }

    fn covered(fb: &Framebuffer) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.color_at(x, y) == Some(Rgba8::new(255, 255, 255, 255)) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    // ── barycentrics ──────────────────────────────────────────────────────

    #[test]
    fn barycentric_weights_at_vertices_and_centroid() {
        let (a, b, c) = (Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(0.0, 4.0));
        assert_eq!(barycentric(a, b, c, a), [1.0, 0.0, 0.0]);
        assert_eq!(barycentric(a, b, c, b), [0.0, 1.0, 0.0]);
        assert_eq!(barycentric(a, b, c, c), [0.0, 0.0, 1.0]);

        let l = barycentric(a, b, c, Vec2::new(4.0 / 3.0, 4.0 / 3.0));
        for w in l {
            assert!((w - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn perspective_mix_with_equal_w_is_linear() {
        let v = perspective_mix([0.0, 3.0, 6.0], [0.5, 0.25, 0.25], [2.0, 2.0, 2.0]);
        assert!((v - 2.25).abs() < 1e-6);
    }

    #[test]
    fn perspective_mix_differs_from_screen_linear_when_w_varies() {
        let third = 1.0 / 3.0;
        let l = [third, third, third];
        let h = [1.0, 2.0, 4.0];
        let v = [0.0, 1.0, 2.0];

        let correct = perspective_mix(v, l, h);
        // Interpolate v/w and 1/w linearly, then divide.
        let expected = (0.0 / 1.0 + 1.0 / 2.0 + 2.0 / 4.0) / (1.0 / 1.0 + 1.0 / 2.0 + 1.0 / 4.0);
        let naive = (v[0] + v[1] + v[2]) * third;

        assert!((correct - expected).abs() < 1e-6);
        assert!((correct - naive).abs() > 0.1);
    }

    // ── coverage ──────────────────────────────────────────────────────────

    #[test]
    fn both_windings_cover_same_pixels() {
        let ccw = Triangle {
            a: vertex(0.0, 0.0, 0.0, 1.0),
            b: vertex(4.0, 0.0, 0.0, 1.0),
            c: vertex(0.0, 4.0, 0.0, 1.0),
        };
        let cw = Triangle { a: ccw.a, b: ccw.c, c: ccw.b };

        let mut fb1 = Framebuffer::new(4, 4);
        let mut fb2 = Framebuffer::new(4, 4);
        draw(&ccw, &mut fb1, ColorRgba::white());
        draw(&cw, &mut fb2, ColorRgba::white());

        let px = covered(&fb1);
        assert_eq!(px, covered(&fb2));
        // Centers with x + y <= 4 lie inside or on the hypotenuse.
        assert_eq!(px.len(), 10);
        assert!(px.contains(&(0, 0)));
        assert!(px.contains(&(1, 2)));
        assert!(!px.contains(&(2, 2)));
    }

    #[test]
    fn pixel_centers_on_an_edge_are_covered() {
        // Edge x = 1.5 passes through the centers of column 1.
        let tri = Triangle {
            a: vertex(1.5, -10.0, 0.0, 1.0),
            b: vertex(10.0, -10.0, 0.0, 1.0),
            c: vertex(1.5, 10.0, 0.0, 1.0),
        };
        let mut fb = Framebuffer::new(3, 1);
        draw(&tri, &mut fb, ColorRgba::white());
        assert_eq!(covered(&fb), [(1, 0), (2, 0)]);
    }

    #[test]
    fn triangle_outside_framebuffer_covers_nothing() {
        let tri = Triangle {
            a: vertex(10.0, 10.0, 0.0, 1.0),
            b: vertex(12.0, 10.0, 0.0, 1.0),
            c: vertex(10.0, 12.0, 0.0, 1.0),
        };
        let mut fb = Framebuffer::new(4, 4);
        let stats = draw(&tri, &mut fb, ColorRgba::white());
        assert_eq!(stats.fragments, 0);
    }

    // ── depth + attributes ────────────────────────────────────────────────

    #[test]
    fn fragment_depth_and_attributes_are_interpolated() {
        let mut a = vertex(0.0, 0.0, 0.0, 1.0);
        let mut b = vertex(4.0, 0.0, 0.5, 1.0);
        let mut c = vertex(0.0, 4.0, 0.5, 1.0);
        a.attributes[2] = Attribute::from_v3(Vec3::new(0.0, 0.0, 9.0));
        b.attributes[2] = Attribute::from_v3(Vec3::new(4.0, 0.0, 9.0));
        c.attributes[2] = Attribute::from_v3(Vec3::new(0.0, 4.0, 9.0));
        let tri = Triangle { a, b, c };

        let mut vs2fs = [AttributeType::Empty; MAX_ATTRIBUTES];
        vs2fs[2] = AttributeType::Vec2;

        let f = interpolate_fragment(&tri, Vec2::new(1.0, 2.0), &vs2fs);
        assert!((f.coord.z - 0.375).abs() < 1e-6);
        assert_eq!((f.coord.x, f.coord.y), (1.0, 2.0));
        let v = f.attributes[2].as_array();
        assert!((v[0] - 1.0).abs() < 1e-6);
        assert!((v[1] - 2.0).abs() < 1e-6);
        // Only the declared vec2 components are carried.
        assert_eq!(v[2], 0.0);
        assert_eq!(f.attributes[0], Attribute::default());
    }

    #[test]
    fn nearer_fragment_wins_regardless_of_order() {
        let quad = |z: f32| Triangle {
            a: vertex(-10.0, -10.0, z, 1.0),
            b: vertex(30.0, -10.0, z, 1.0),
            c: vertex(-10.0, 30.0, z, 1.0),
        };

        let mut fb = Framebuffer::new(4, 4);
        draw(&quad(0.2), &mut fb, ColorRgba::white());
        let stats = draw(&quad(0.8), &mut fb, ColorRgba::black());
        assert_eq!(stats.fragments, 16);
        assert_eq!(stats.fragments_written, 0);
        assert_eq!(covered(&fb).len(), 16);
    }
}
