#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    screen_size: [f32; 2],
    _padding: [f32; 2], // Padding to make it 16-byte aligned
}

impl Uniforms {
    pub fn new(window_size: (f32, f32)) -> Self {
        Self {
            screen_size: [window_size.0, window_size.1],
            _padding: [0.0, 0.0],
        }
    }

    pub fn update_screen_size(&mut self, window_size: (f32, f32)) {
        self.screen_size = [window_size.0, window_size.1];
    }
}
