use crate::app_state::State;
use crate::canvas::{CanvasTransform, CoordinateSystem};
use crate::drawing::{
    AXIS_COLOR, AXIS_WIDTH, FILL_COLOR, Geometry, OUTLINE_COLOR, OUTLINE_WIDTH, Shape, axis_cross,
};
use wgpu::util::DeviceExt;

/// Projects the shape and axis cross into window space and tessellates them.
/// `None` when the transform cannot be composed.
pub fn build_scene(
    shape: &Shape,
    transform: &CanvasTransform,
    coordinates: &CoordinateSystem,
) -> Option<Geometry> {
    let shape_points = coordinates.adjustment(&transform.project(shape.points())?);
    let axis_points = coordinates.adjustment(&transform.project(&axis_cross())?);

    let mut geometry = Geometry::new();
    geometry.fill_polygon(&shape_points, FILL_COLOR);
    geometry.stroke_polygon(&shape_points, OUTLINE_WIDTH, OUTLINE_COLOR);
    for axis in axis_points.chunks_exact(2) {
        geometry.stroke_segment(axis[0], axis[1], AXIS_WIDTH, AXIS_COLOR);
    }

    Some(geometry)
}

impl State {
    pub fn update(&mut self) {
        self.update_hud();

        let Some(geometry) =
            build_scene(&self.shape, &self.canvas.transform, &self.canvas.coordinates)
        else {
            log::warn!("Keeping previous frame: transform {:?} is unusable", self.canvas.transform);
            return;
        };

        if geometry.is_empty() {
            self.geometry.count = 0;
            return;
        }

        self.geometry.vertex = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Vertex Buffer"),
                contents: bytemuck::cast_slice(&geometry.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        ));

        self.geometry.index = Some(self.gpu.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Index Buffer"),
                contents: bytemuck::cast_slice(&geometry.indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));

        self.geometry.count = geometry.indices.len() as u32;
    }

    fn update_hud(&mut self) {
        let hud = self.canvas.transform.hud_text();
        if hud != self.hud {
            log::debug!("{}", hud);
            self.window.set_title(&hud);
            self.hud = hud;
        }
    }
}
