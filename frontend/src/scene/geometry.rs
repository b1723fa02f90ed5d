//! Mesh builders for the hero emblem and its particle field.

use glam::{Vec2, Vec3};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u16>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u16 {
        let index = self.vertex_count() as u16;
        self.positions.extend_from_slice(&position.to_array());
        self.normals.extend_from_slice(&normal.normalize_or_zero().to_array());
        index
    }

    fn push_triangle(&mut self, a: u16, b: u16, c: u16) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let i: Vec<u16> = corners.iter().map(|c| self.push_vertex(*c, normal)).collect();
        self.push_triangle(i[0], i[1], i[2]);
        self.push_triangle(i[0], i[2], i[3]);
    }
}

fn quadratic(from: Vec2, control: Vec2, to: Vec2, segments: usize, out: &mut Vec<Vec2>) {
    for step in 1..=segments {
        let t = step as f32 / segments as f32;
        let u = 1.0 - t;
        out.push(from * (u * u) + control * (2.0 * u * t) + to * (t * t));
    }
}

/// Closed outline of the shield, counter-clockwise, centred on its bounding box.
pub fn shield_outline(curve_segments: usize) -> Vec<Vec2> {
    let (w, h) = (2.4, 2.8);
    let top_left = Vec2::new(-w, h * 0.8);
    let top_right = Vec2::new(w, h * 0.8);
    let mid_right = Vec2::new(w, -h * 0.2);
    let tip = Vec2::new(0.0, -h * 1.5);
    let mid_left = Vec2::new(-w, -h * 0.2);

    let mut points = vec![top_left];
    quadratic(top_left, Vec2::new(0.0, h), top_right, curve_segments, &mut points);
    points.push(mid_right);
    quadratic(mid_right, Vec2::new(w, -h), tip, curve_segments, &mut points);
    quadratic(tip, Vec2::new(-w, -h), mid_left, curve_segments, &mut points);

    // traced clockwise above; flip so the front cap faces +z
    points.reverse();

    let (min, max) = points.iter().fold(
        (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
        |(min, max), p| (min.min(*p), max.max(*p)),
    );
    let centre = (min + max) * 0.5;
    points.iter().map(|p| *p - centre).collect()
}

/// Extrudes a convex outline along z. Returns the two caps and the side wall
/// as separate meshes so they can carry different materials.
pub fn extrude(outline: &[Vec2], depth: f32) -> (MeshData, MeshData) {
    let half = depth * 0.5;
    let mut caps = MeshData::default();
    let centroid = outline.iter().copied().sum::<Vec2>() / outline.len() as f32;

    for (z, normal) in [(half, Vec3::Z), (-half, Vec3::NEG_Z)] {
        let hub = caps.push_vertex(centroid.extend(z), normal);
        let ring: Vec<u16> = outline
            .iter()
            .map(|p| caps.push_vertex(p.extend(z), normal))
            .collect();
        for i in 0..ring.len() {
            let (a, b) = (ring[i], ring[(i + 1) % ring.len()]);
            if normal.z > 0.0 {
                caps.push_triangle(hub, a, b);
            } else {
                caps.push_triangle(hub, b, a);
            }
        }
    }

    let mut sides = MeshData::default();
    for i in 0..outline.len() {
        let a = outline[i];
        let b = outline[(i + 1) % outline.len()];
        let edge = b - a;
        let normal = Vec3::new(edge.y, -edge.x, 0.0);
        sides.push_quad(
            [a.extend(-half), b.extend(-half), b.extend(half), a.extend(half)],
            normal,
        );
    }

    (caps, sides)
}

pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let h = Vec3::new(width, height, depth) * 0.5;
    let mut mesh = MeshData::default();
    let faces = [
        (Vec3::X, Vec3::Y),
        (Vec3::NEG_X, Vec3::Y),
        (Vec3::Y, Vec3::Z),
        (Vec3::NEG_Y, Vec3::Z),
        (Vec3::Z, Vec3::Y),
        (Vec3::NEG_Z, Vec3::Y),
    ];
    for (normal, up) in faces {
        let centre = normal * h;
        // side x up == normal keeps every face counter-clockwise from outside
        let u = up.cross(normal) * h;
        let v = up * h;
        mesh.push_quad(
            [centre - u - v, centre + u - v, centre + u + v, centre - u + v],
            normal,
        );
    }
    mesh
}

/// Partial torus in the xy plane, sweeping `arc` radians from +x.
pub fn torus_arc(radius: f32, tube: f32, radial: usize, tubular: usize, arc: f32) -> MeshData {
    let mut mesh = MeshData::default();
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * arc;
            let centre = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let position = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            mesh.push_vertex(position, position - centre);
        }
    }
    let row = (tubular + 1) as u16;
    for j in 1..=radial as u16 {
        for i in 1..=tubular as u16 {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.push_triangle(a, b, d);
            mesh.push_triangle(b, c, d);
        }
    }
    mesh
}

pub fn disc(radius: f32, segments: usize) -> MeshData {
    let mut mesh = MeshData::default();
    let hub = mesh.push_vertex(Vec3::ZERO, Vec3::Z);
    let ring: Vec<u16> = (0..segments)
        .map(|i| {
            let a = i as f32 / segments as f32 * TAU;
            mesh.push_vertex(Vec3::new(radius * a.cos(), radius * a.sin(), 0.0), Vec3::Z)
        })
        .collect();
    for i in 0..segments {
        mesh.push_triangle(hub, ring[i], ring[(i + 1) % segments]);
    }
    mesh
}

pub fn plane(width: f32, height: f32) -> MeshData {
    let (w, h) = (width * 0.5, height * 0.5);
    let mut mesh = MeshData::default();
    mesh.push_quad(
        [
            Vec3::new(-w, -h, 0.0),
            Vec3::new(w, -h, 0.0),
            Vec3::new(w, h, 0.0),
            Vec3::new(-w, h, 0.0),
        ],
        Vec3::Z,
    );
    mesh
}

/// Uniformly scattered points in a cube of side `spread`, flattened xyz.
pub fn particle_field(count: usize, spread: f32, seed: u64) -> Vec<f32> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count * 3)
        .map(|_| (rng.gen::<f32>() - 0.5) * spread)
        .collect()
}

pub const SHACKLE_ARC: f32 = PI;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_well_formed(mesh: &MeshData) {
        assert_eq!(mesh.positions.len(), mesh.normals.len());
        assert_eq!(mesh.indices.len() % 3, 0);
        let count = mesh.vertex_count() as u16;
        assert!(mesh.indices.iter().all(|i| *i < count));
        for n in mesh.normals.chunks(3) {
            let len = Vec3::new(n[0], n[1], n[2]).length();
            assert!((len - 1.0).abs() < 1e-4, "normal length {len}");
        }
    }

    #[test]
    fn shield_outline_is_centred_and_symmetric() {
        let outline = shield_outline(8);
        let (min, max) = outline.iter().fold(
            (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
            |(min, max), p| (min.min(*p), max.max(*p)),
        );
        assert!(((min + max) * 0.5).length() < 1e-4);
        assert!((min.x + max.x).abs() < 1e-4);
        // 2.8 * 0.8 ... -2.8 * 1.5 with the top curve bulging up to 2.8 * 0.9
        assert!((max.y - min.y - 2.8 * 2.4).abs() < 1e-3);
    }

    #[test]
    fn shield_outline_winds_counter_clockwise() {
        let outline = shield_outline(8);
        let area: f32 = (0..outline.len())
            .map(|i| outline[i].perp_dot(outline[(i + 1) % outline.len()]))
            .sum();
        assert!(area > 0.0);
    }

    #[test]
    fn builders_produce_valid_meshes() {
        let (caps, sides) = extrude(&shield_outline(6), 0.9);
        for mesh in [
            caps,
            sides,
            cuboid(1.4, 1.2, 0.4),
            torus_arc(0.55, 0.15, 16, 32, SHACKLE_ARC),
            disc(0.15, 32),
            plane(0.15, 0.4),
        ] {
            assert_well_formed(&mesh);
        }
    }

    #[test]
    fn particle_field_stays_inside_its_cube() {
        let field = particle_field(400, 20.0, 7);
        assert_eq!(field.len(), 1200);
        assert!(field.iter().all(|v| v.abs() <= 10.0));
        assert_eq!(field, particle_field(400, 20.0, 7));
    }
}
