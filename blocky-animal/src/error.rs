// src/error.rs
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Fatal failures while bringing the viewer up. Nothing is retried.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to get the rendering context for WebGL")]
    ContextUnavailable,

    #[error("failed to create {0} shader object")]
    ShaderCreation(ShaderStage),

    #[error("failed to compile {stage} shader: {log}")]
    ShaderCompile { stage: ShaderStage, log: String },

    #[error("failed to link shader program: {0}")]
    ProgramLink(String),

    #[error("failed to get the storage location of attribute {0}")]
    AttributeNotFound(String),

    #[error("failed to get the storage location of uniform {0}")]
    UniformNotFound(String),

    #[error("could not create buffer")]
    BufferAllocation,

    #[error("element #{0} not found or has the wrong type")]
    ElementNotFound(String),

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("per-face colors need exactly 8 entries, got {found}")]
    FaceColorCount { found: usize },

    #[error("invalid viewer config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl std::fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

impl SetupError {
    /// Wraps a raw `JsValue` thrown by a DOM call.
    pub fn dom(value: JsValue) -> Self {
        SetupError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type Result<T, E = SetupError> = std::result::Result<T, E>;
