use crate::math::Point;

/// Maps object-space points, centred on the origin, into window space and back.
///
/// The object origin lands at the window centre displaced by `origin`.
/// Both directions add or subtract the same precomputed offset, so a round
/// trip is a single add followed by a single subtract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSystem {
    origin: Point,
    window_width: f32,
    window_height: f32,
}

impl CoordinateSystem {
    pub fn new(origin: Point, window_width: f32, window_height: f32) -> Self {
        Self {
            origin,
            window_width,
            window_height,
        }
    }

    pub fn offset(&self) -> Point {
        Point::new(
            self.origin.x + self.window_width / 2.0,
            self.origin.y + self.window_height / 2.0,
        )
    }

    pub fn adjust_point(&self, point: Point) -> Point {
        point + self.offset()
    }

    pub fn undo_point(&self, point: Point) -> Point {
        point - self.offset()
    }

    pub fn adjustment(&self, points: &[Point]) -> Vec<Point> {
        let offset = self.offset();
        points.iter().map(|&p| p + offset).collect()
    }

    pub fn undo_adjustment(&self, points: &[Point]) -> Vec<Point> {
        let offset = self.offset();
        points.iter().map(|&p| p - offset).collect()
    }
}
