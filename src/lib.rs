// kairos_motion: Rust/WASM engine for the Kairos landing page.
// The engine renders the markup and owns every animation; JS forwards one
// event batch per animation frame and applies the returned updates.

pub mod ambient;
pub mod curve;
pub mod easing;
mod error;
pub mod frame;
pub mod markup;
pub mod media;
mod page;
pub mod parallax;
pub mod pointer;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod slider;
pub mod spring;
pub mod stagger;
pub mod style;
pub mod text;
pub mod ticker;
pub mod toggle;
pub mod trigger;
mod types;

use wasm_bindgen::prelude::*;

pub use error::MotionError;
pub use page::Page;
pub use types::*;

/// Install the panic hook and console logger.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Trace);
}

fn to_js(err: MotionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Main engine interface exposed to JavaScript.
/// Batch interface to minimize JS↔WASM crossings.
#[wasm_bindgen]
pub struct Engine {
    page: Page,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<Engine, JsValue> {
        let config: EngineConfig = serde_json::from_str(config_json)
            .map_err(|e| to_js(MotionError::InvalidConfig(e.to_string())))?;
        log::set_max_level(config.log_level.to_level().to_level_filter());
        log::info!(
            "engine ready: {} particles, slider {}s, contact {}",
            config.particle_count,
            config.slider_speed,
            config.contact_url
        );
        Ok(Engine {
            page: Page::new(&config),
        })
    }

    /// Full page markup with first-frame styles inline.
    pub fn render_html(&self) -> String {
        self.page.render_html()
    }

    pub fn render_section(&self, name: &str) -> Result<String, JsValue> {
        self.page.render_section(name).map_err(to_js)
    }

    /// Keyframes the rendered markup relies on.
    pub fn base_css(&self) -> String {
        self.page.base_css().to_string()
    }

    /// Apply one frame's events and return the updates as JSON.
    /// This is the main entry point, designed as a batch call to reduce JS↔WASM overhead.
    pub fn process_events(&mut self, batch_json: &str) -> Result<String, JsValue> {
        let batch: EventBatch = serde_json::from_str(batch_json)
            .map_err(|e| to_js(MotionError::from(e)))?;
        let output = self.page.process(batch);
        serde_json::to_string(&output).map_err(|e| to_js(MotionError::from(e)))
    }

    /// Name of the game video playing with sound, if any.
    pub fn active_video(&self) -> Option<String> {
        self.page.active_video().map(str::to_string)
    }

    pub fn section_names(&self) -> js_sys::Array {
        self.page
            .section_names()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }
}
