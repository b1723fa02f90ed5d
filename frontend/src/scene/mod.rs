//! Real-time 3D emblem behind the hero headline.

pub mod geometry;
pub mod graph;
pub mod handle;
pub mod host;
pub mod layout;
pub mod webgl;

use thiserror::Error;

pub use handle::SceneHandle;
pub use host::{BrowserHost, SceneHost};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no browser window")]
    NoWindow,
    #[error("scene container is not mounted")]
    NoContainer,
    #[error("WebGL2 context unavailable")]
    ContextUnavailable,
    #[error("shader compilation failed: {0}")]
    Shader(String),
    #[error("program link failed: {0}")]
    Link(String),
    #[error("failed to allocate GPU {0}")]
    Buffer(&'static str),
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for SceneError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SceneError::Js(format!("{:?}", value))
    }
}
