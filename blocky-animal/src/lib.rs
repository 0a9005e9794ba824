// src/lib.rs
use crate::config::ViewerConfig;
use wasm_bindgen::prelude::*;

pub mod backend;
pub mod config;
pub mod controls;
pub mod error;
pub mod geometry;
pub mod gl;
pub mod logging;
pub mod primitives;
pub mod render_buffers;
pub mod scene;
pub mod viewer;
pub mod web;

pub use error::{ConfigError, SetupError};
pub use viewer::Viewer;

#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
}

/// Handle the host page keeps while the cat is on screen.
#[wasm_bindgen]
pub struct BlockyAnimal {
    app: web::App,
}

#[wasm_bindgen]
impl BlockyAnimal {
    /// Starts the viewer. `config_json` may override any `ViewerConfig`
    /// field; setup failures are thrown with the failing resource named.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<BlockyAnimal, JsValue> {
        let config = match config_json.as_deref() {
            Some(text) => ViewerConfig::from_json(text)?,
            None => ViewerConfig::default(),
        };
        logging::init(config.log_level());

        let app =
            web::App::start(config).inspect_err(|err| log::error!("setup failed: {err}"))?;
        Ok(BlockyAnimal { app })
    }

    /// Returns whether the animation is running afterwards.
    pub fn toggle_animation(&self) -> Result<bool, JsValue> {
        Ok(self.app.toggle_animation()?)
    }

    pub fn frame(&self) -> f64 {
        self.app.frame() as f64
    }

    pub fn last_frame_ms(&self) -> f64 {
        self.app.last_frame_ms()
    }
}
