//! Owns one mounted hero scene: the render target, the frame loop and every
//! listener feeding it. Dropping the handle tears all of it down.

use super::geometry;
use super::graph::{build_meshes, SceneGraph, PARTICLE_COUNT};
use super::host::{RenderTarget, SceneHost};
use super::layout::ViewportTier;
use super::SceneError;
use crate::lifecycle::Registration;
use crate::theme::{Theme, ThemeStore};
use glam::Vec2;
use log::{debug, info, warn};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

const PARTICLE_SPREAD: f32 = 20.0;
const PARTICLE_SEED: u64 = 0x5EC0_41D5;

struct SceneState {
    graph: SceneGraph,
    target: Box<dyn RenderTarget>,
    started_at: Option<f64>,
}

impl SceneState {
    fn step(&mut self, time: f32, pointer: Vec2, theme: Theme) {
        if self.graph.theme != theme {
            self.graph.apply_theme(theme);
        }
        self.graph.advance(time, pointer);
        self.target.render(&self.graph);
    }

    fn relayout(&mut self, host: &dyn SceneHost) {
        let (viewport_width, _) = host.viewport();
        let (width, height) = host.container_size();
        let tier = ViewportTier::classify(viewport_width);
        if tier != self.graph.tier {
            debug!("scene tier {:?} -> {:?}", self.graph.tier, tier);
        }
        self.graph.apply_layout(tier, aspect(width, height));
        self.target.resize(width, height);
    }
}

fn aspect(width: f64, height: f64) -> f32 {
    if width > 0.0 && height > 0.0 {
        (width / height) as f32
    } else {
        1.0
    }
}

/// Scene state shared between the handle and the callbacks feeding it.
struct SceneCore {
    state: RefCell<SceneState>,
    pointer: Cell<Vec2>,
    destroyed: Cell<bool>,
}

impl SceneCore {
    /// Advances the scene to `frame_time` seconds and renders one frame,
    /// swapping palettes first when `theme` differs from the scene's.
    fn update(&self, frame_time: f32, pointer: Vec2, theme: Theme) {
        if self.destroyed.get() {
            return;
        }
        self.pointer.set(pointer);
        match self.state.try_borrow_mut() {
            Ok(mut state) => state.step(frame_time, pointer, theme),
            Err(_) => debug!("scene state busy; frame skipped"),
        }
    }

    fn with_state(&self, f: impl FnOnce(&mut SceneState)) {
        if self.destroyed.get() {
            return;
        }
        if let Ok(mut state) = self.state.try_borrow_mut() {
            f(&mut state);
        }
    }
}

pub struct SceneHandle {
    core: Rc<SceneCore>,
    // torn down in declaration order by destroy()
    frame: Option<Registration>,
    pointer_listener: Option<Registration>,
    resize_listener: Option<Registration>,
    theme_subscription: Option<Registration>,
}

impl SceneHandle {
    /// Acquires a render target from `host`, builds the scene for the current
    /// viewport and theme, and starts the frame loop.
    pub fn create(host: Rc<dyn SceneHost>, theme: &Rc<ThemeStore>) -> Result<Self, SceneError> {
        let meshes = build_meshes();
        let particles = geometry::particle_field(PARTICLE_COUNT, PARTICLE_SPREAD, PARTICLE_SEED);
        let target = host.create_target(&meshes, &particles)?;

        let (viewport_width, _) = host.viewport();
        let tier = ViewportTier::classify(viewport_width);
        let mut state = SceneState {
            graph: SceneGraph::new(theme.get(), tier, 1.0),
            target,
            started_at: None,
        };
        state.relayout(host.as_ref());

        let mut handle = SceneHandle {
            core: Rc::new(SceneCore {
                state: RefCell::new(state),
                pointer: Cell::new(Vec2::ZERO),
                destroyed: Cell::new(false),
            }),
            frame: None,
            pointer_listener: None,
            resize_listener: None,
            theme_subscription: None,
        };
        // From here on an early return drops `handle`, which disposes the target.

        let weak = Rc::downgrade(&handle.core);
        handle.pointer_listener = Some(host.on_pointer_move(Box::new(move |p| {
            with_core(&weak, |core| core.pointer.set(p));
        }))?);

        let weak = Rc::downgrade(&handle.core);
        let resize_host = host.clone();
        handle.resize_listener = Some(host.on_resize(Box::new(move || {
            with_core(&weak, |core| {
                core.with_state(|state| state.relayout(resize_host.as_ref()))
            });
        }))?);

        let weak = Rc::downgrade(&handle.core);
        handle.theme_subscription = Some(theme.subscribe(move |theme| {
            with_core(&weak, |core| {
                core.with_state(|state| state.graph.apply_theme(theme))
            });
        }));

        let weak = Rc::downgrade(&handle.core);
        let store = theme.clone();
        handle.frame = Some(host.on_frame(Box::new(move |timestamp| {
            with_core(&weak, |core| {
                let Ok(mut state) = core.state.try_borrow_mut() else {
                    return;
                };
                let started_at = *state.started_at.get_or_insert(timestamp);
                drop(state);
                let time = ((timestamp - started_at) / 1000.0) as f32;
                core.update(time, core.pointer.get(), store.get());
            });
        }))?);

        info!("hero scene mounted ({:?})", tier);
        Ok(handle)
    }

    #[cfg(test)]
    fn tier(&self) -> ViewportTier {
        self.core.state.borrow().graph.tier
    }

    #[cfg(test)]
    fn theme(&self) -> Theme {
        self.core.state.borrow().graph.theme
    }

    /// Stops the frame loop, removes the listeners, drops the theme
    /// subscription, then disposes the surface. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.core.destroyed.replace(true) {
            return;
        }

        drop(self.frame.take());
        drop(self.pointer_listener.take());
        drop(self.resize_listener.take());
        drop(self.theme_subscription.take());

        match self.core.state.try_borrow_mut() {
            Ok(mut state) => state.target.dispose(),
            Err(_) => warn!("scene state busy during teardown; surface not disposed"),
        }
        debug!("hero scene destroyed");
    }
}

impl Drop for SceneHandle {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn with_core(weak: &Weak<SceneCore>, f: impl FnOnce(&SceneCore)) {
    if let Some(core) = weak.upgrade() {
        f(&core);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::geometry::MeshData;
    use crate::storage::MemoryStore;
    use crate::theme::DetachedRoot;
    use glam::Vec3;

    type Slot<F> = Rc<RefCell<Option<Rc<RefCell<F>>>>>;

    #[derive(Default)]
    struct Counters {
        targets_created: Cell<usize>,
        live_targets: Cell<i32>,
        live_listeners: Cell<i32>,
        renders: Cell<usize>,
        last_size: Cell<(f64, f64)>,
        teardown: RefCell<Vec<&'static str>>,
        store: RefCell<Option<Rc<ThemeStore>>>,
        subscribers_at_dispose: Cell<Option<usize>>,
    }

    struct FakeTarget {
        counters: Rc<Counters>,
    }

    impl RenderTarget for FakeTarget {
        fn resize(&mut self, width: f64, height: f64) {
            self.counters.last_size.set((width, height));
        }

        fn render(&mut self, _graph: &SceneGraph) {
            self.counters.renders.set(self.counters.renders.get() + 1);
        }

        fn dispose(&mut self) {
            let counters = &self.counters;
            counters.live_targets.set(counters.live_targets.get() - 1);
            counters.teardown.borrow_mut().push("dispose");
            if let Some(store) = counters.store.borrow().as_ref() {
                counters.subscribers_at_dispose.set(Some(store.listener_count()));
            }
        }
    }

    struct FakeHost {
        counters: Rc<Counters>,
        viewport: Cell<(f64, f64)>,
        container: Cell<(f64, f64)>,
        context_available: Cell<bool>,
        frame: Slot<Box<dyn FnMut(f64)>>,
        pointer: Slot<Box<dyn FnMut(Vec2)>>,
        resize: Slot<Box<dyn FnMut()>>,
    }

    impl FakeHost {
        fn new(viewport_width: f64) -> Rc<Self> {
            Rc::new(Self {
                counters: Rc::new(Counters::default()),
                viewport: Cell::new((viewport_width, 900.0)),
                container: Cell::new((viewport_width, 900.0)),
                context_available: Cell::new(true),
                frame: Rc::default(),
                pointer: Rc::default(),
                resize: Rc::default(),
            })
        }

        fn register<F: ?Sized + 'static>(
            &self,
            slot: &Slot<Box<F>>,
            callback: Box<F>,
            name: &'static str,
        ) -> Registration {
            *slot.borrow_mut() = Some(Rc::new(RefCell::new(callback)));
            let counters = self.counters.clone();
            counters.live_listeners.set(counters.live_listeners.get() + 1);
            let slot = slot.clone();
            Registration::new(move || {
                slot.borrow_mut().take();
                counters.live_listeners.set(counters.live_listeners.get() - 1);
                counters.teardown.borrow_mut().push(name);
            })
        }

        fn fire_frame(&self, timestamp: f64) {
            let callback = self.frame.borrow().clone();
            if let Some(callback) = callback {
                (*callback.borrow_mut())(timestamp);
            }
        }

        fn fire_pointer(&self, position: Vec2) {
            let callback = self.pointer.borrow().clone();
            if let Some(callback) = callback {
                (*callback.borrow_mut())(position);
            }
        }

        fn resize_to(&self, width: f64) {
            self.viewport.set((width, 900.0));
            self.container.set((width, 900.0));
            let callback = self.resize.borrow().clone();
            if let Some(callback) = callback {
                (*callback.borrow_mut())();
            }
        }
    }

    impl SceneHost for FakeHost {
        fn create_target(
            &self,
            meshes: &[MeshData],
            particles: &[f32],
        ) -> Result<Box<dyn RenderTarget>, SceneError> {
            if !self.context_available.get() {
                return Err(SceneError::ContextUnavailable);
            }
            assert_eq!(meshes.len(), 6);
            assert_eq!(particles.len(), PARTICLE_COUNT * 3);
            let counters = &self.counters;
            counters.targets_created.set(counters.targets_created.get() + 1);
            counters.live_targets.set(counters.live_targets.get() + 1);
            Ok(Box::new(FakeTarget { counters: counters.clone() }))
        }

        fn viewport(&self) -> (f64, f64) {
            self.viewport.get()
        }

        fn container_size(&self) -> (f64, f64) {
            self.container.get()
        }

        fn on_frame(&self, callback: Box<dyn FnMut(f64)>) -> Result<Registration, SceneError> {
            Ok(self.register(&self.frame, callback, "frame"))
        }

        fn on_pointer_move(
            &self,
            callback: Box<dyn FnMut(Vec2)>,
        ) -> Result<Registration, SceneError> {
            Ok(self.register(&self.pointer, callback, "pointer"))
        }

        fn on_resize(&self, callback: Box<dyn FnMut()>) -> Result<Registration, SceneError> {
            Ok(self.register(&self.resize, callback, "resize"))
        }
    }

    fn theme_store() -> Rc<ThemeStore> {
        ThemeStore::new(
            Box::new(DetachedRoot::default()),
            Rc::new(MemoryStore::default()),
        )
    }

    fn create(host: &Rc<FakeHost>, store: &Rc<ThemeStore>) -> SceneHandle {
        let host: Rc<dyn SceneHost> = host.clone();
        match SceneHandle::create(host, store) {
            Ok(handle) => handle,
            Err(e) => panic!("scene creation failed: {e}"),
        }
    }

    #[test]
    fn repeated_mounts_leak_nothing() {
        let host = FakeHost::new(1280.0);
        let store = theme_store();
        for i in 0..50 {
            let handle = create(&host, &store);
            host.fire_frame(f64::from(i) * 16.0);
            host.fire_frame(f64::from(i) * 16.0 + 16.0);
            drop(handle);
        }
        assert_eq!(host.counters.targets_created.get(), 50);
        assert_eq!(host.counters.live_targets.get(), 0);
        assert_eq!(host.counters.live_listeners.get(), 0);
        assert_eq!(store.listener_count(), 0);
        assert!(host.frame.borrow().is_none());
        assert_eq!(host.counters.renders.get(), 100);
    }

    #[test]
    fn teardown_runs_in_order() {
        let host = FakeHost::new(1280.0);
        let store = theme_store();
        *host.counters.store.borrow_mut() = Some(store.clone());

        let mut handle = create(&host, &store);
        assert_eq!(store.listener_count(), 1);
        handle.destroy();

        assert_eq!(
            *host.counters.teardown.borrow(),
            vec!["frame", "pointer", "resize", "dispose"]
        );
        assert_eq!(host.counters.subscribers_at_dispose.get(), Some(0));
        *host.counters.store.borrow_mut() = None;
    }

    #[test]
    fn destroy_is_idempotent() {
        let host = FakeHost::new(1280.0);
        let store = theme_store();
        let mut handle = create(&host, &store);
        handle.destroy();
        handle.destroy();
        drop(handle);
        let disposals = host
            .counters
            .teardown
            .borrow()
            .iter()
            .filter(|e| **e == "dispose")
            .count();
        assert_eq!(disposals, 1);
        assert_eq!(host.counters.live_targets.get(), 0);
    }

    #[test]
    fn tier_follows_viewport_width() {
        let store = theme_store();
        for (width, tier) in [
            (767.0, ViewportTier::Narrow),
            (768.0, ViewportTier::Medium),
            (1023.0, ViewportTier::Medium),
            (1024.0, ViewportTier::Wide),
        ] {
            let host = FakeHost::new(width);
            let handle = create(&host, &store);
            assert_eq!(handle.tier(), tier, "width {width}");
        }
    }

    #[test]
    fn resize_reclassifies_and_resizes_surface() {
        let host = FakeHost::new(1280.0);
        let store = theme_store();
        let handle = create(&host, &store);
        assert_eq!(host.counters.last_size.get(), (1280.0, 900.0));

        host.resize_to(767.0);
        assert_eq!(handle.tier(), ViewportTier::Narrow);
        assert_eq!(host.counters.last_size.get(), (767.0, 900.0));
        assert_eq!(handle.core.state.borrow().graph.layout.camera_distance, 16.0);

        host.resize_to(1024.0);
        assert_eq!(handle.tier(), ViewportTier::Wide);
    }

    #[test]
    fn resize_through_every_boundary_applies_the_tier_layout() {
        let host = FakeHost::new(1280.0);
        let store = theme_store();
        let handle = create(&host, &store);

        for (width, tier, distance, position, scale) in [
            (767.0, ViewportTier::Narrow, 16.0, Vec3::new(0.0, 2.5, 0.0), 0.55),
            (768.0, ViewportTier::Medium, 14.0, Vec3::new(2.0, 1.2, 0.0), 0.5),
            (1023.0, ViewportTier::Medium, 14.0, Vec3::new(2.0, 1.2, 0.0), 0.5),
            (1024.0, ViewportTier::Wide, 12.0, Vec3::new(3.5, -0.5, 0.0), 0.8),
        ] {
            host.resize_to(width);
            let state = handle.core.state.borrow();
            let layout = state.graph.layout;
            assert_eq!(state.graph.tier, tier, "width {width}");
            assert_eq!(layout.camera_distance, distance, "width {width}");
            assert_eq!(layout.group_position, position, "width {width}");
            assert_eq!(layout.group_scale, scale, "width {width}");
            assert_eq!(host.counters.last_size.get(), (width, 900.0));
        }
    }

    #[test]
    fn missing_context_degrades_without_side_effects() {
        let host = FakeHost::new(1280.0);
        host.context_available.set(false);
        let store = theme_store();
        let dyn_host: Rc<dyn SceneHost> = host.clone();

        let result = SceneHandle::create(dyn_host, &store);
        assert!(matches!(result, Err(SceneError::ContextUnavailable)));
        assert_eq!(host.counters.live_listeners.get(), 0);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn theme_toggle_swaps_parameters_in_place() {
        let host = FakeHost::new(1280.0);
        let store = theme_store();
        let handle = create(&host, &store);
        let nodes = handle.core.state.borrow().graph.nodes.clone();
        assert_eq!(handle.theme(), Theme::Dark);

        store.toggle();
        assert_eq!(handle.theme(), Theme::Light);
        let state = handle.core.state.borrow();
        assert_eq!(state.graph.lights.key.intensity, 2.0);
        assert_eq!(state.graph.nodes, nodes);
        assert_eq!(host.counters.targets_created.get(), 1);
    }

    #[test]
    fn frames_use_elapsed_time_and_latest_pointer() {
        let host = FakeHost::new(1280.0);
        let store = theme_store();
        let handle = create(&host, &store);

        host.fire_frame(5_000.0);
        assert_eq!(handle.core.state.borrow().graph.particles.time, 0.0);

        host.fire_pointer(Vec2::new(1.0, 1.0));
        host.fire_frame(6_000.0);
        let state = handle.core.state.borrow();
        assert_eq!(state.graph.particles.time, 1.0);
        assert!(state.graph.rotation.x > 0.0);
        assert!(state.graph.rotation.y > 0.0);
    }

    #[test]
    fn update_applies_a_changed_theme() {
        let host = FakeHost::new(1280.0);
        let store = theme_store();
        let handle = create(&host, &store);
        handle.core.update(0.5, Vec2::ZERO, Theme::Light);
        assert_eq!(handle.theme(), Theme::Light);
        assert_eq!(host.counters.renders.get(), 1);
    }

    #[test]
    fn frame_loop_follows_the_stored_theme() {
        let host = FakeHost::new(1280.0);
        let store = theme_store();
        let handle = create(&host, &store);

        handle.core.state.borrow_mut().graph.apply_theme(Theme::Light);
        host.fire_frame(0.0);
        assert_eq!(handle.theme(), Theme::Dark);

        store.toggle();
        host.fire_frame(16.0);
        assert_eq!(handle.theme(), Theme::Light);
        assert_eq!(host.counters.renders.get(), 2);
    }

    #[test]
    fn destroyed_scene_ignores_updates() {
        let host = FakeHost::new(1280.0);
        let store = theme_store();
        let mut handle = create(&host, &store);
        handle.destroy();
        handle.core.update(1.0, Vec2::ONE, Theme::Light);
        assert_eq!(host.counters.renders.get(), 0);
        assert_eq!(handle.theme(), Theme::Dark);
    }
}
