mod matrix;
mod point;

pub use matrix::{Matrix, transform_point, transform_points};
pub use point::Point;

/// Applies a 2×2 rotation to every point.
pub fn rotate_points(points: &[Point], degrees: f32) -> Option<Vec<Point>> {
    transform_points(&Matrix::rotation(degrees), points)
}

/// Translates every point through a 3×3 homogeneous matrix.
pub fn translate_points(points: &[Point], dx: f32, dy: f32) -> Option<Vec<Point>> {
    transform_points(&Matrix::translation(dx, dy), points)
}
