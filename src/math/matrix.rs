use crate::math::Point;

/// Dense row-major matrix of arbitrary dimensions.
///
/// Multiplication is checked: operands whose inner dimensions disagree
/// produce `None` instead of a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Builds a matrix from row-major `data`. Returns `None` when the length
    /// does not match `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    pub fn from_rows<const R: usize, const C: usize>(rows: [[f32; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut result = Self::zeros(size, size);
        for i in 0..size {
            result[(i, i)] = 1.0;
        }
        result
    }

    /// 2×2 rotation by `degrees`, for column vectors.
    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::from_rows([[cos, -sin], [sin, cos]])
    }

    /// 3×3 homogeneous rotation by `degrees`.
    pub fn homogeneous_rotation(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::from_rows([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn translation(dx: f32, dy: f32) -> Self {
        Self::from_rows([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
    }

    pub fn scaling(scale: f32) -> Self {
        Self::from_rows([[scale, 0.0, 0.0], [0.0, scale, 0.0], [0.0, 0.0, 1.0]])
    }

    /// 2×1 column vector.
    pub fn column(point: Point) -> Self {
        Self::from_rows([[point.x], [point.y]])
    }

    /// 3×1 column vector `[x, y, 1]`.
    pub fn homogeneous_column(point: Point) -> Self {
        Self::from_rows([[point.x], [point.y], [1.0]])
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn multiply(&self, other: &Matrix) -> Option<Matrix> {
        if self.cols != other.rows {
            return None;
        }

        let mut result = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                for k in 0..self.cols {
                    result[(i, j)] += self[(i, k)] * other[(k, j)];
                }
            }
        }

        Some(result)
    }

    /// Inverse of a 3×3 affine matrix (last row `[0, 0, 1]`).
    pub fn affine_inverse(&self) -> Option<Matrix> {
        if self.dims() != (3, 3) || self.row(2) != [0.0, 0.0, 1.0] {
            return None;
        }

        let (a, b, c) = (self[(0, 0)], self[(0, 1)], self[(0, 2)]);
        let (d, e, f) = (self[(1, 0)], self[(1, 1)], self[(1, 2)]);
        let det = a * e - b * d;
        if det == 0.0 || !det.is_finite() {
            return None;
        }

        // Subnormal determinants overflow the reciprocal.
        let inv_det = 1.0 / det;
        if !inv_det.is_finite() {
            return None;
        }
        let ia = e * inv_det;
        let ib = -b * inv_det;
        let id = -d * inv_det;
        let ie = a * inv_det;

        let inverse = Self::from_rows([
            [ia, ib, -(ia * c + ib * f)],
            [id, ie, -(id * c + ie * f)],
            [0.0, 0.0, 1.0],
        ]);
        if inverse.data.iter().all(|v| v.is_finite()) {
            Some(inverse)
        } else {
            None
        }
    }

    fn row(&self, index: usize) -> &[f32] {
        &self.data[index * self.cols..(index + 1) * self.cols]
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &self.data[row * self.cols + col]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        assert!(row < self.rows && col < self.cols, "matrix index out of bounds");
        &mut self.data[row * self.cols + col]
    }
}

/// Applies a 2×2 linear or 3×3 homogeneous matrix to `point`.
pub fn transform_point(matrix: &Matrix, point: Point) -> Option<Point> {
    match matrix.dims() {
        (2, 2) => {
            let v = matrix.multiply(&Matrix::column(point))?;
            Some(Point::new(v[(0, 0)], v[(1, 0)]))
        }
        (3, 3) => {
            let v = matrix.multiply(&Matrix::homogeneous_column(point))?;
            let w = v[(2, 0)];
            if w != 0.0 && w != 1.0 {
                Some(Point::new(v[(0, 0)] / w, v[(1, 0)] / w))
            } else {
                Some(Point::new(v[(0, 0)], v[(1, 0)]))
            }
        }
        _ => None,
    }
}

pub fn transform_points(matrix: &Matrix, points: &[Point]) -> Option<Vec<Point>> {
    points.iter().map(|&p| transform_point(matrix, p)).collect()
}
