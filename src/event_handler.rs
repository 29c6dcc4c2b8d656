use crate::app_state::State;
use crate::canvas::{CanvasTransform, CoordinateSystem, WheelModifier};
use crate::drawing::Shape;
use crate::math::Point;

use winit::event::*;
use winit::keyboard::{KeyCode, PhysicalKey};

impl State {
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.gpu.config.width = new_size.width;
            self.gpu.config.height = new_size.height;
            self.gpu
                .surface
                .configure(&self.gpu.device, &self.gpu.config);

            let window_size = (new_size.width as f32, new_size.height as f32);
            self.canvas.coordinates =
                CoordinateSystem::new(self.settings.origin, window_size.0, window_size.1);
            self.canvas.uniform.update_screen_size(window_size);
            self.gpu.queue.write_buffer(
                &self.canvas.uniform_buffer,
                0,
                bytemuck::cast_slice(&[self.canvas.uniform]),
            );
        } else {
            log::debug!("Ignoring resize to {}x{}", new_size.width, new_size.height);
        }
    }

    pub fn input(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.input.modifiers = modifiers.state();
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.input.mouse_pos = Point::new(position.x as f32, position.y as f32);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let notches = self.input.wheel.push(*delta, self.settings.pixels_per_notch);
                if notches == 0 {
                    return true;
                }

                let modifier = WheelModifier::from(self.input.modifiers);
                let cursor = self.canvas.coordinates.undo_point(self.input.mouse_pos);
                if self
                    .canvas
                    .transform
                    .apply_wheel(notches, modifier, cursor, &self.settings)
                {
                    log::debug!("{:?} x{}: {:?}", modifier, notches, self.canvas.transform);
                }
                true
            }
            WindowEvent::KeyboardInput {
                event: key_event, ..
            } => {
                if key_event.state != ElementState::Pressed {
                    return false;
                }

                match key_event.physical_key {
                    PhysicalKey::Code(KeyCode::Tab) => {
                        self.shape = Shape::new(self.shape.kind().toggled());
                        log::info!("Showing {:?}", self.shape.kind());
                        true
                    }
                    PhysicalKey::Code(KeyCode::KeyR) => {
                        self.canvas.transform = CanvasTransform::new();
                        self.input.wheel.reset();
                        log::info!("Transform reset");
                        true
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }
}
