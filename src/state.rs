use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, Surface, SurfaceConfiguration};
use winit::event::MouseScrollDelta;
use winit::keyboard::ModifiersState;

use crate::canvas::{CanvasTransform, CoordinateSystem, Uniforms};
use crate::math::Point;

pub struct GpuContext {
    pub surface: Surface<'static>,
    pub device: Device,
    pub queue: Queue,
    pub config: SurfaceConfiguration,
    pub render_pipeline: RenderPipeline,
}

pub struct Canvas {
    pub transform: CanvasTransform,
    pub coordinates: CoordinateSystem,
    pub uniform: Uniforms,
    pub uniform_buffer: Buffer,
    pub uniform_bind_group: BindGroup,
}

pub struct GeometryBuffers {
    pub vertex: Option<Buffer>,
    pub index: Option<Buffer>,
    pub count: u32,
}

pub struct InputState {
    pub mouse_pos: Point,
    pub modifiers: ModifiersState,
    pub wheel: WheelAccumulator,
}

/// Turns raw scroll deltas into whole notches, carrying the remainder.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WheelAccumulator {
    pending: f32,
}

impl WheelAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, delta: MouseScrollDelta, pixels_per_notch: f32) -> i32 {
        let step = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) if pixels_per_notch > 0.0 => {
                pos.y as f32 / pixels_per_notch
            }
            MouseScrollDelta::PixelDelta(_) => 0.0,
        };

        self.pending += step;
        let notches = self.pending.trunc();
        self.pending -= notches;
        notches as i32
    }

    pub fn reset(&mut self) {
        self.pending = 0.0;
    }
}
