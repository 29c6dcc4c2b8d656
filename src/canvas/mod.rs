mod canvas_transform;
mod coordinate_system;
mod uniform;

pub use canvas_transform::{CanvasTransform, WheelModifier};
pub use coordinate_system::CoordinateSystem;
pub use uniform::Uniforms;
