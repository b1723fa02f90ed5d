//! Scene description for the hero emblem: meshes, materials, lights, camera
//! and the per-frame motion. Pure data; the render target turns it into
//! draw calls.

use super::geometry::{self, MeshData, SHACKLE_ARC};
use super::layout::{TierLayout, ViewportTier};
use crate::theme::Theme;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

pub const PARTICLE_COUNT: usize = 400;
pub const CAMERA_FOV_DEG: f32 = 40.0;

/// Per-frame easing toward the pointer target.
const ROTATION_EASING: f32 = 0.05;
const POINTER_TILT: f32 = 0.2;
const BOB_AMPLITUDE: f32 = 0.05;

/// sRGB hex to linear RGB.
pub fn hex(rgb: u32) -> Vec3 {
    let channel = |shift: u32| (((rgb >> shift) & 0xff) as f32 / 255.0).powf(2.2);
    Vec3::new(channel(16), channel(8), channel(0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
    pub emissive: Vec3,
    pub unlit: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialSlot {
    Gold,
    Obsidian,
    Matte,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Materials {
    pub gold: Material,
    pub obsidian: Material,
    pub matte: Material,
}

impl Materials {
    pub fn get(&self, slot: MaterialSlot) -> &Material {
        match slot {
            MaterialSlot::Gold => &self.gold,
            MaterialSlot::Obsidian => &self.obsidian,
            MaterialSlot::Matte => &self.matte,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: Vec3,
    /// Points from the scene toward the light.
    pub direction: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub position: Vec3,
    pub intensity: f32,
    pub range: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lights {
    pub ambient: AmbientLight,
    pub key: DirectionalLight,
    pub front: DirectionalLight,
    pub accent: PointLight,
    pub fill: PointLight,
}

/// Everything the theme swaps, in one place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemePalette {
    pub ambient: f32,
    pub key: f32,
    pub front: f32,
    pub obsidian_color: Vec3,
    pub obsidian_roughness: f32,
    pub particle_color: Vec3,
}

impl ThemePalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                ambient: 2.0,
                key: 4.0,
                front: 2.0,
                obsidian_color: hex(0x050505),
                obsidian_roughness: 0.1,
                particle_color: hex(0xD4AF37),
            },
            // darker particles so they read on a pale background
            Theme::Light => Self {
                ambient: 1.5,
                key: 2.0,
                front: 1.5,
                obsidian_color: hex(0x1A1A1A),
                obsidian_roughness: 0.2,
                particle_color: hex(0x8B6914),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub mesh: usize,
    pub material: MaterialSlot,
    /// Transform relative to the emblem group.
    pub local: Mat4,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particles {
    pub color: Vec3,
    pub time: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneGraph {
    pub nodes: Vec<Node>,
    pub materials: Materials,
    pub lights: Lights,
    pub particles: Particles,
    pub tier: ViewportTier,
    pub layout: TierLayout,
    pub rotation: Vec2,
    pub bob: f32,
    pub aspect: f32,
    pub theme: Theme,
}

/// Meshes referenced by `Node::mesh`, in index order.
pub fn build_meshes() -> Vec<MeshData> {
    let (caps, sides) = geometry::extrude(&geometry::shield_outline(12), 0.9);
    vec![
        caps,
        sides,
        geometry::cuboid(1.4, 1.2, 0.4),
        geometry::torus_arc(0.55, 0.15, 16, 32, SHACKLE_ARC),
        geometry::disc(0.15, 32),
        geometry::plane(0.15, 0.4),
    ]
}

fn build_nodes() -> Vec<Node> {
    let lock =
        Mat4::from_translation(Vec3::new(0.0, 0.0, 0.55)) * Mat4::from_scale(Vec3::splat(1.3));
    let keyhole = lock * Mat4::from_translation(Vec3::new(0.0, 0.0, 0.21));
    vec![
        Node {
            mesh: 0,
            material: MaterialSlot::Obsidian,
            local: Mat4::IDENTITY,
        },
        Node {
            mesh: 1,
            material: MaterialSlot::Gold,
            local: Mat4::IDENTITY,
        },
        Node {
            mesh: 2,
            material: MaterialSlot::Gold,
            local: lock,
        },
        Node {
            mesh: 3,
            material: MaterialSlot::Gold,
            local: lock * Mat4::from_translation(Vec3::new(0.0, 0.6, 0.0)),
        },
        Node {
            mesh: 4,
            material: MaterialSlot::Matte,
            local: keyhole * Mat4::from_translation(Vec3::new(0.0, 0.1, 0.0)),
        },
        Node {
            mesh: 5,
            material: MaterialSlot::Matte,
            local: keyhole * Mat4::from_translation(Vec3::new(0.0, -0.1, 0.0)),
        },
    ]
}

impl SceneGraph {
    pub fn new(theme: Theme, tier: ViewportTier, aspect: f32) -> Self {
        let mut graph = Self {
            nodes: build_nodes(),
            materials: Materials {
                gold: Material {
                    color: hex(0xFFD700),
                    metalness: 1.0,
                    roughness: 0.15,
                    emissive: hex(0x332200) * 0.2,
                    unlit: false,
                },
                obsidian: Material {
                    color: hex(0x050505),
                    metalness: 0.9,
                    roughness: 0.1,
                    emissive: Vec3::ZERO,
                    unlit: false,
                },
                matte: Material {
                    color: Vec3::ZERO,
                    metalness: 0.0,
                    roughness: 1.0,
                    emissive: Vec3::ZERO,
                    unlit: true,
                },
            },
            lights: Lights {
                ambient: AmbientLight { color: Vec3::ONE, intensity: 0.6 },
                key: DirectionalLight {
                    color: Vec3::ONE,
                    direction: Vec3::new(5.0, 5.0, 10.0).normalize(),
                    intensity: 3.0,
                },
                front: DirectionalLight {
                    color: Vec3::ONE,
                    direction: Vec3::Z,
                    intensity: 1.5,
                },
                accent: PointLight {
                    color: hex(0xD4AF37),
                    position: Vec3::new(-5.0, 2.0, -5.0),
                    intensity: 8.0,
                    range: 50.0,
                },
                // warm light from below so the underside has no hard shadow
                fill: PointLight {
                    color: hex(0xFFEEB1),
                    position: Vec3::new(0.0, -8.0, 5.0),
                    intensity: 5.0,
                    range: 50.0,
                },
            },
            particles: Particles { color: hex(0xD4AF37), time: 0.0 },
            tier,
            layout: tier.layout(),
            rotation: Vec2::ZERO,
            bob: 0.0,
            aspect,
            theme,
        };
        graph.apply_theme(theme);
        graph
    }

    pub fn apply_layout(&mut self, tier: ViewportTier, aspect: f32) {
        self.tier = tier;
        self.layout = tier.layout();
        self.aspect = aspect;
    }

    /// Swaps every theme-dependent parameter at once; the node list is untouched.
    pub fn apply_theme(&mut self, theme: Theme) {
        let palette = ThemePalette::for_theme(theme);
        self.lights.ambient.intensity = palette.ambient;
        self.lights.key.intensity = palette.key;
        self.lights.front.intensity = palette.front;
        self.materials.obsidian.color = palette.obsidian_color;
        self.materials.obsidian.roughness = palette.obsidian_roughness;
        self.particles.color = palette.particle_color;
        self.theme = theme;
    }

    /// Advances the animation to `time` seconds with the pointer in
    /// normalized device coordinates.
    pub fn advance(&mut self, time: f32, pointer: Vec2) {
        self.particles.time = time;

        let target = Vec2::new(pointer.y, pointer.x) * POINTER_TILT;
        self.rotation += (target - self.rotation) * ROTATION_EASING;

        self.bob = (time * 0.8).sin() * BOB_AMPLITUDE;

        let orbit = time * 0.5;
        self.lights.accent.position.x = orbit.sin() * 10.0;
        self.lights.accent.position.z = orbit.cos() * 10.0 - 5.0;
        self.lights.accent.intensity = 8.0 + (time * 2.0).sin() * 2.0;
    }

    pub fn group_matrix(&self) -> Mat4 {
        let position = self.layout.group_position + Vec3::Y * self.bob;
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.layout.group_scale),
            Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0),
            position,
        )
    }

    pub fn camera_position(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.layout.camera_distance)
    }

    pub fn view_matrix(&self) -> Mat4 {
        let eye = self.camera_position();
        Mat4::look_at_rh(eye, eye + Vec3::NEG_Z, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(CAMERA_FOV_DEG.to_radians(), self.aspect.max(0.01), 0.1, 1000.0)
    }
}

/// Maps a client-space pointer to [-1, 1] with +y up.
pub fn normalize_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width * 2.0 - 1.0) as f32,
        (-(client_y / height) * 2.0 + 1.0) as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_swap_only_touches_parameters() {
        let mut graph = SceneGraph::new(Theme::Dark, ViewportTier::Wide, 1.5);
        let nodes = graph.nodes.clone();
        let gold = graph.materials.gold;

        graph.apply_theme(Theme::Light);
        assert_eq!(graph.lights.ambient.intensity, 1.5);
        assert_eq!(graph.lights.key.intensity, 2.0);
        assert_eq!(graph.lights.front.intensity, 1.5);
        assert_eq!(graph.materials.obsidian.roughness, 0.2);
        assert_eq!(graph.materials.obsidian.color, hex(0x1A1A1A));
        assert_eq!(graph.particles.color, hex(0x8B6914));
        assert_eq!(graph.nodes, nodes);
        assert_eq!(graph.materials.gold, gold);

        graph.apply_theme(Theme::Dark);
        assert_eq!(graph.lights.ambient.intensity, 2.0);
        assert_eq!(graph.lights.key.intensity, 4.0);
        assert_eq!(graph.particles.color, hex(0xD4AF37));
    }

    #[test]
    fn rotation_eases_toward_pointer_without_snapping() {
        let mut graph = SceneGraph::new(Theme::Dark, ViewportTier::Wide, 1.5);
        let pointer = Vec2::new(1.0, -1.0);
        graph.advance(0.016, pointer);
        let target = Vec2::new(-0.2, 0.2);
        assert!(graph.rotation.length() > 0.0);
        assert!(graph.rotation.length() < target.length() * 0.1);

        let mut previous = (target - graph.rotation).length();
        for frame in 2..150 {
            graph.advance(frame as f32 * 0.016, pointer);
            let remaining = (target - graph.rotation).length();
            assert!(remaining < previous);
            previous = remaining;
        }
        assert!(previous < 1e-3);
    }

    #[test]
    fn bob_stays_small_and_anchored() {
        let mut graph = SceneGraph::new(Theme::Dark, ViewportTier::Narrow, 0.5);
        for frame in 0..2_000 {
            graph.advance(frame as f32 * 0.016, Vec2::ZERO);
            assert!(graph.bob.abs() <= BOB_AMPLITUDE);
        }
        let y = graph.group_matrix().w_axis.y;
        assert!((y - 2.5).abs() <= BOB_AMPLITUDE + 1e-4);
    }

    #[test]
    fn accent_light_orbits() {
        let mut graph = SceneGraph::new(Theme::Dark, ViewportTier::Wide, 1.5);
        graph.advance(0.0, Vec2::ZERO);
        assert_eq!(graph.lights.accent.position.x, 0.0);
        assert_eq!(graph.lights.accent.position.z, 5.0);
        assert_eq!(graph.lights.accent.intensity, 8.0);
        graph.advance(std::f32::consts::PI, Vec2::ZERO);
        assert!((graph.lights.accent.position.x - 10.0).abs() < 1e-4);
        assert!((graph.lights.accent.position.z + 5.0).abs() < 1e-4);
    }

    #[test]
    fn layout_switch_moves_camera_and_group() {
        let mut graph = SceneGraph::new(Theme::Dark, ViewportTier::Wide, 1.5);
        graph.apply_layout(ViewportTier::Medium, 1.2);
        assert_eq!(graph.camera_position().z, 14.0);
        assert_eq!(graph.layout.group_scale, 0.5);
        assert_eq!(graph.aspect, 1.2);
    }

    #[test]
    fn every_node_points_at_a_mesh() {
        let meshes = build_meshes();
        let graph = SceneGraph::new(Theme::Dark, ViewportTier::Wide, 1.5);
        assert!(graph.nodes.iter().all(|n| n.mesh < meshes.len()));
    }

    #[test]
    fn pointer_normalization() {
        assert_eq!(normalize_pointer(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(normalize_pointer(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
        assert_eq!(normalize_pointer(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 0.0), Vec2::ZERO);
    }
}
