//! What the scene needs from its environment, and the browser implementation.

use super::geometry::MeshData;
use super::graph::{normalize_pointer, SceneGraph};
use super::webgl::WebGlTarget;
use super::SceneError;
use crate::lifecycle::Registration;
use glam::Vec2;
use log::warn;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, Window};

/// A GPU surface holding the uploaded scene resources.
pub trait RenderTarget {
    fn resize(&mut self, width: f64, height: f64);
    fn render(&mut self, graph: &SceneGraph);
    /// Detaches the surface from the page and releases every GPU resource.
    fn dispose(&mut self);
}

pub trait SceneHost {
    fn create_target(
        &self,
        meshes: &[MeshData],
        particles: &[f32],
    ) -> Result<Box<dyn RenderTarget>, SceneError>;
    /// Window inner width/height, which selects the layout tier.
    fn viewport(&self) -> (f64, f64);
    /// Size of the element the surface fills.
    fn container_size(&self) -> (f64, f64);
    /// Runs `callback` with the frame timestamp in milliseconds on every
    /// display refresh until the registration is dropped.
    fn on_frame(&self, callback: Box<dyn FnMut(f64)>) -> Result<Registration, SceneError>;
    /// Pointer position in normalized device coordinates.
    fn on_pointer_move(&self, callback: Box<dyn FnMut(Vec2)>) -> Result<Registration, SceneError>;
    fn on_resize(&self, callback: Box<dyn FnMut()>) -> Result<Registration, SceneError>;
}

pub struct BrowserHost {
    window: Window,
    container: HtmlElement,
}

impl BrowserHost {
    pub fn new(container: HtmlElement) -> Result<Self, SceneError> {
        let window = web_sys::window().ok_or(SceneError::NoWindow)?;
        Ok(Self { window, container })
    }

    fn listen<E: JsCast + 'static>(
        &self,
        event: &'static str,
        mut callback: impl FnMut(E) + 'static,
    ) -> Result<Registration, SceneError> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |e: web_sys::Event| {
            if let Ok(e) = e.dyn_into::<E>() {
                callback(e);
            }
        });
        self.window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;

        let window = self.window.clone();
        Ok(Registration::new(move || {
            if let Err(e) =
                window.remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            {
                warn!("failed to remove {} listener: {:?}", event, e);
            }
        }))
    }
}

fn window_size(window: &Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

impl SceneHost for BrowserHost {
    fn create_target(
        &self,
        meshes: &[MeshData],
        particles: &[f32],
    ) -> Result<Box<dyn RenderTarget>, SceneError> {
        let pixel_ratio = self.window.device_pixel_ratio().min(2.0);
        let target = WebGlTarget::new(&self.container, pixel_ratio, meshes, particles)?;
        Ok(Box::new(target))
    }

    fn viewport(&self) -> (f64, f64) {
        window_size(&self.window)
    }

    fn container_size(&self) -> (f64, f64) {
        (
            f64::from(self.container.client_width()),
            f64::from(self.container.client_height()),
        )
    }

    fn on_frame(&self, mut callback: Box<dyn FnMut(f64)>) -> Result<Registration, SceneError> {
        // The closure re-requests itself, so it lives in a slot it can reach.
        let slot: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None::<i32>));

        let inner_slot = slot.clone();
        let inner_id = request_id.clone();
        let window = self.window.clone();
        *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            if let Some(next) = inner_slot.borrow().as_ref() {
                inner_id.set(window.request_animation_frame(next.as_ref().unchecked_ref()).ok());
            }
            callback(timestamp);
        }));

        let first = slot
            .borrow()
            .as_ref()
            .map(|closure| self.window.request_animation_frame(closure.as_ref().unchecked_ref()));
        match first {
            Some(Ok(id)) => request_id.set(Some(id)),
            other => {
                slot.borrow_mut().take();
                return Err(match other {
                    Some(Err(e)) => e.into(),
                    _ => SceneError::Js("frame callback missing".into()),
                });
            }
        }

        let window = self.window.clone();
        Ok(Registration::new(move || {
            if let Some(id) = request_id.take() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    warn!("failed to cancel animation frame: {:?}", e);
                }
            }
            // breaks the closure -> slot cycle
            slot.borrow_mut().take();
        }))
    }

    fn on_pointer_move(
        &self,
        mut callback: Box<dyn FnMut(Vec2)>,
    ) -> Result<Registration, SceneError> {
        let window = self.window.clone();
        self.listen("mousemove", move |e: MouseEvent| {
            let (width, height) = window_size(&window);
            callback(normalize_pointer(
                f64::from(e.client_x()),
                f64::from(e.client_y()),
                width,
                height,
            ));
        })
    }

    fn on_resize(&self, mut callback: Box<dyn FnMut()>) -> Result<Registration, SceneError> {
        self.listen("resize", move |_: web_sys::Event| callback())
    }
}
