mod app;
mod app_state;
mod canvas;
mod drawing;
mod event_handler;
mod renderer;
mod settings;
mod state;
mod update_logic;
mod vertex;

pub mod math;

// Re-export the main public interface
pub use app::run;
pub use canvas::{CanvasTransform, CoordinateSystem, WheelModifier};
pub use drawing::{Shape, ShapeKind};
pub use settings::Settings;
pub use vertex::Vertex;

// Re-export for WASM compatibility
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg_attr(target_arch = "wasm32", wasm_bindgen(start))]
pub async fn start() {
    run(Settings::default()).await;
}
