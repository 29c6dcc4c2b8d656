use crate::math::Point;
use crate::vertex::Vertex;
use serde::{Deserialize, Serialize};

pub const FILL_COLOR: [f32; 4] = [100.0 / 255.0, 149.0 / 255.0, 237.0 / 255.0, 180.0 / 255.0];
pub const OUTLINE_COLOR: [f32; 4] = [0.0, 0.0, 139.0 / 255.0, 1.0];
pub const BACKGROUND_COLOR: wgpu::Color = wgpu::Color::WHITE;
pub const AXIS_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const OUTLINE_WIDTH: f32 = 2.0;
pub const AXIS_WIDTH: f32 = 1.0;

const AXIS_EXTENT: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Triangle,
}

impl ShapeKind {
    pub fn toggled(self) -> Self {
        match self {
            ShapeKind::Rectangle => ShapeKind::Triangle,
            ShapeKind::Triangle => ShapeKind::Rectangle,
        }
    }
}

/// A convex polygon in object space, centred on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    points: Vec<Point>,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Rectangle => Self::rectangle(),
            ShapeKind::Triangle => Self::triangle(),
        }
    }

    /// 150×100 rectangle.
    pub fn rectangle() -> Self {
        Self {
            kind: ShapeKind::Rectangle,
            points: vec![
                Point::new(-75.0, -50.0),
                Point::new(75.0, -50.0),
                Point::new(75.0, 50.0),
                Point::new(-75.0, 50.0),
            ],
        }
    }

    /// Triangle stored with its first point repeated to close the outline.
    pub fn triangle() -> Self {
        Self {
            kind: ShapeKind::Triangle,
            points: vec![
                Point::new(0.0, -60.0),
                Point::new(70.0, 50.0),
                Point::new(-70.0, 50.0),
                Point::new(0.0, -60.0),
            ],
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// Axis cross endpoints: x axis then y axis.
pub fn axis_cross() -> [Point; 4] {
    [
        Point::new(-AXIS_EXTENT, 0.0),
        Point::new(AXIS_EXTENT, 0.0),
        Point::new(0.0, -AXIS_EXTENT),
        Point::new(0.0, AXIS_EXTENT),
    ]
}

/// Drops the trailing point when it repeats the first.
pub fn polygon_outline(points: &[Point]) -> &[Point] {
    match points {
        [first, .., last] if points.len() > 2 && first == last => &points[..points.len() - 1],
        _ => points,
    }
}

/// Screen-space triangles ready for upload.
#[derive(Debug, Default)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Geometry {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_index(&self) -> u16 {
        self.vertices.len() as u16
    }

    /// Fan-triangulates a convex polygon.
    pub fn fill_polygon(&mut self, points: &[Point], color: [f32; 4]) {
        let outline = polygon_outline(points);
        if outline.len() < 3 {
            return;
        }

        let base = self.next_index();
        self.vertices.extend(outline.iter().map(|&p| Vertex {
            position: p.into(),
            color,
        }));
        for i in 1..outline.len() as u16 - 1 {
            self.indices.extend_from_slice(&[base, base + i, base + i + 1]);
        }
    }

    pub fn stroke_segment(&mut self, start: Point, end: Point, width: f32, color: [f32; 4]) {
        let dx = end.x - start.x;
        let dy = end.y - start.y;
        let len = (dx * dx + dy * dy).sqrt();

        if len > 0.0 {
            let nx = -dy / len * width * 0.5;
            let ny = dx / len * width * 0.5;
            let index_offset = self.next_index();

            self.vertices.extend_from_slice(&[
                Vertex { position: [start.x - nx, start.y - ny], color },
                Vertex { position: [start.x + nx, start.y + ny], color },
                Vertex { position: [end.x + nx, end.y + ny], color },
                Vertex { position: [end.x - nx, end.y - ny], color },
            ]);

            self.indices.extend_from_slice(&[
                index_offset, index_offset + 1, index_offset + 2,
                index_offset, index_offset + 2, index_offset + 3,
            ]);
        }
    }

    pub fn stroke_polygon(&mut self, points: &[Point], width: f32, color: [f32; 4]) {
        let outline = polygon_outline(points);
        for i in 0..outline.len() {
            self.stroke_segment(outline[i], outline[(i + 1) % outline.len()], width, color);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_point_sets() {
        assert_eq!(Shape::rectangle().points().len(), 4);
        let triangle = Shape::triangle();
        assert_eq!(triangle.points().len(), 4);
        assert_eq!(triangle.points()[0], triangle.points()[3]);
        assert_eq!(Shape::new(ShapeKind::Triangle), triangle);
        assert_eq!(ShapeKind::Rectangle.toggled(), ShapeKind::Triangle);
        assert_eq!(ShapeKind::Triangle.toggled(), ShapeKind::Rectangle);
    }

    #[test]
    fn test_outline_drops_closing_repeat() {
        assert_eq!(polygon_outline(Shape::triangle().points()).len(), 3);
        assert_eq!(polygon_outline(Shape::rectangle().points()).len(), 4);
        let degenerate = [Point::ORIGIN, Point::ORIGIN];
        assert_eq!(polygon_outline(&degenerate).len(), 2);
    }

    #[test]
    fn test_fill_rectangle() {
        let mut geometry = Geometry::new();
        geometry.fill_polygon(Shape::rectangle().points(), FILL_COLOR);

        assert_eq!(geometry.vertices.len(), 4);
        assert_eq!(geometry.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_stroke_triangle() {
        let mut geometry = Geometry::new();
        geometry.fill_polygon(Shape::triangle().points(), FILL_COLOR);
        geometry.stroke_polygon(Shape::triangle().points(), OUTLINE_WIDTH, OUTLINE_COLOR);

        // 3 fill vertices plus one quad per edge.
        assert_eq!(geometry.vertices.len(), 3 + 3 * 4);
        assert_eq!(geometry.indices.len(), 3 + 3 * 6);
        assert_eq!(&geometry.indices[3..9], &[3, 4, 5, 3, 5, 6]);
    }

    #[test]
    fn test_stroke_segment_width() {
        let mut geometry = Geometry::new();
        geometry.stroke_segment(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 2.0, AXIS_COLOR);

        assert_eq!(geometry.vertices[0].position, [0.0, -1.0]);
        assert_eq!(geometry.vertices[2].position, [10.0, 1.0]);
    }

    #[test]
    fn test_background_is_opaque_white() {
        assert_eq!(BACKGROUND_COLOR, wgpu::Color::WHITE);
        assert_eq!(BACKGROUND_COLOR.a, 1.0);
    }

    #[test]
    fn test_zero_length_segment_is_skipped() {
        let mut geometry = Geometry::new();
        geometry.stroke_segment(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 1.0, AXIS_COLOR);
        geometry.fill_polygon(&[Point::ORIGIN, Point::new(1.0, 0.0)], FILL_COLOR);
        assert!(geometry.is_empty());
        assert!(geometry.vertices.is_empty());
    }
}
