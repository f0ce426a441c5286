//! Matrix type for 2D numeric data.

use crate::error::{LinealError, Result};
use serde::{Deserialize, Serialize};

/// Absolute value below which a scalar is treated as zero.
///
/// Shared by the two near-zero tests in this module: skipping
/// Laplace-expansion terms with a near-zero leading coefficient, and
/// rejecting inversion of a matrix whose determinant is near zero.
pub const NEAR_ZERO_THRESHOLD: f32 = 1e-5;

/// A 2D matrix of floating-point values (row-major storage).
///
/// The backing buffer always holds exactly `rows * cols` elements.
/// Reallocation via [`Matrix::resize`] discards prior contents.
///
/// # Examples
///
/// ```
/// use lineal::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl<T> Matrix<T> {
    /// Creates an empty 0x0 matrix with no storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(LinealError::dimension_mismatch(
                "data length",
                rows * cols,
                data.len(),
            ));
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col] = value;
    }

    /// Returns a copy of one row's columns, in order.
    ///
    /// # Panics
    ///
    /// Panics if the row index is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vec<T> {
        assert!(
            row_idx < self.rows,
            "row {row_idx} out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        let start = row_idx * self.cols;
        let end = start + self.cols;
        self.data[start..end].to_vec()
    }

    /// Returns a copy of one column, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if the column index is out of bounds.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vec<T> {
        assert!(
            col_idx < self.cols,
            "column {col_idx} out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Default> Matrix<T> {
    /// Reallocates storage to `rows * cols` elements and sets the logical
    /// dimensions. Prior contents are discarded; the new storage is
    /// zero-initialized (default value of `T`).
    ///
    /// Zero rows or columns are legal and produce empty storage.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.data = vec![T::default(); rows * cols];
        self.rows = rows;
        self.cols = cols;
    }

    /// Resizes to `rows x cols` and copies `values` into row-major storage,
    /// stopping when either the input or the cells run out. Cells beyond the
    /// input keep the default value; input beyond `rows * cols` is ignored.
    pub fn assign(&mut self, rows: usize, cols: usize, values: &[T]) {
        self.resize(rows, cols);
        for (cell, value) in self.data.iter_mut().zip(values) {
            *cell = *value;
        }
    }
}

impl Matrix<f32> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a square identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        Self::identity(n, n)
    }

    /// Creates a `rows x cols` matrix with ones on the diagonal and zeros
    /// elsewhere.
    ///
    /// For `rows != cols` this is the rectangular generalization: ones up
    /// to `min(rows, cols)` along the diagonal.
    #[must_use]
    pub fn identity(rows: usize, cols: usize) -> Self {
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows.min(cols) {
            data[i * cols + i] = 1.0;
        }
        Self { data, rows, cols }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Transposes in place, returning `&mut self` for chaining.
    pub fn transpose_mut(&mut self) -> &mut Self {
        *self = self.transpose();
        self
    }

    /// Returns the minor: the `(rows-1) x (cols-1)` matrix formed by
    /// omitting the given row and column. Relative order of the remaining
    /// rows and columns is preserved. A 1x1 input yields the empty 0x0
    /// matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix has no rows or no columns.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LinealError::DimensionMismatch {
                expected: "at least 1x1".to_string(),
                actual: format!("{}x{}", self.rows, self.cols),
            });
        }
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                data.push(self.data[i * self.cols + j]);
            }
        }
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    /// Computes the determinant.
    ///
    /// Sizes 1x1 through 3x3 use closed forms; larger matrices use
    /// recursive Laplace expansion along row 0. Expansion terms whose
    /// leading coefficient is below [`NEAR_ZERO_THRESHOLD`] in magnitude
    /// are skipped, avoiding the recursive minor computation for a term
    /// that contributes nothing. The 0x0 determinant is 1 (empty product),
    /// which keeps cofactors of 1x1 matrices well-defined.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).expect("valid");
    /// assert!((m.determinant().expect("square") - (-2.0)).abs() < 1e-6);
    /// ```
    pub fn determinant(&self) -> Result<f32> {
        if self.rows != self.cols {
            return Err(LinealError::NonSquareMatrix {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> f32 {
        let d = &self.data;
        match self.rows {
            0 => 1.0,
            1 => d[0],
            2 => d[0] * d[3] - d[1] * d[2],
            3 => {
                d[0] * (d[4] * d[8] - d[5] * d[7]) - d[1] * (d[3] * d[8] - d[5] * d[6])
                    + d[2] * (d[3] * d[7] - d[4] * d[6])
            }
            _ => {
                let mut det = 0.0;
                for j in 0..self.cols {
                    let coeff = d[j];
                    if coeff.abs() < NEAR_ZERO_THRESHOLD {
                        continue;
                    }
                    let term = coeff * self.minor_unchecked(0, j).det_unchecked();
                    det += if j % 2 == 0 { term } else { -term };
                }
                det
            }
        }
    }

    /// Returns the matrix of cofactors: for every cell `(i, j)`, the
    /// determinant of the minor at `(i, j)`, negated when `i + j` is odd.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn cofactor_matrix(&self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(LinealError::NonSquareMatrix {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let mut data = Vec::with_capacity(self.rows * self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let minor_det = self.minor_unchecked(i, j).det_unchecked();
                data.push(if (i + j) % 2 == 0 { minor_det } else { -minor_det });
            }
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Returns the adjoint (adjugate): the transpose of the cofactor
    /// matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn adjoint(&self) -> Result<Self> {
        Ok(self.cofactor_matrix()?.transpose())
    }

    /// Computes the inverse via the adjoint: `adjoint / determinant`.
    ///
    /// # Errors
    ///
    /// Returns [`LinealError::NonSquareMatrix`] if the matrix is not
    /// square, or [`LinealError::SingularMatrix`] if the determinant is
    /// within [`NEAR_ZERO_THRESHOLD`] of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lineal::primitives::Matrix;
    ///
    /// let m = Matrix::from_vec(2, 2, vec![4.0, 7.0, 2.0, 6.0]).expect("valid");
    /// let inv = m.inverse().expect("non-singular");
    /// let product = m.matmul(&inv).expect("compatible dims");
    /// for i in 0..2 {
    ///     for j in 0..2 {
    ///         let expected = if i == j { 1.0 } else { 0.0 };
    ///         assert!((product.get(i, j) - expected).abs() < 1e-5);
    ///     }
    /// }
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det.abs() < NEAR_ZERO_THRESHOLD {
            return Err(LinealError::SingularMatrix { det });
        }
        Ok(self.adjoint()?.div_scalar(det))
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.cols != other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinealError::dimension_mismatch(
                "inner dimension",
                self.cols,
                other.rows,
            ));
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Adds another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, |a, b| a + b)
    }

    /// Subtracts another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, |a, b| a - b)
    }

    /// Divides by another matrix element-wise.
    ///
    /// # Errors
    ///
    /// Returns an error if dimensions don't match.
    pub fn div(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, |a, b| a / b)
    }

    fn elementwise(&self, other: &Self, op: impl Fn(f32, f32) -> f32) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(LinealError::shape_mismatch(
                (self.rows, self.cols),
                (other.rows, other.cols),
            ));
        }
        let data: Vec<f32> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        self.map(|x| x * scalar)
    }

    /// Divides each element by a scalar.
    #[must_use]
    pub fn div_scalar(&self, scalar: f32) -> Self {
        self.map(|x| x / scalar)
    }

    /// Adds a scalar to each element.
    #[must_use]
    pub fn add_scalar(&self, scalar: f32) -> Self {
        self.map(|x| x + scalar)
    }

    /// Subtracts a scalar from each element.
    #[must_use]
    pub fn sub_scalar(&self, scalar: f32) -> Self {
        self.map(|x| x - scalar)
    }

    fn map(&self, op: impl Fn(f32) -> f32) -> Self {
        Self {
            data: self.data.iter().map(|&x| op(x)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl std::ops::Add for &Matrix<f32> {
    type Output = Matrix<f32>;

    /// Element-wise sum.
    ///
    /// # Panics
    ///
    /// Panics if shapes differ; use [`Matrix::add`] for the fallible form.
    fn add(self, rhs: Self) -> Matrix<f32> {
        Matrix::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Sub for &Matrix<f32> {
    type Output = Matrix<f32>;

    /// Element-wise difference.
    ///
    /// # Panics
    ///
    /// Panics if shapes differ; use [`Matrix::sub`] for the fallible form.
    fn sub(self, rhs: Self) -> Matrix<f32> {
        Matrix::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Mul for &Matrix<f32> {
    type Output = Matrix<f32>;

    /// Matrix product.
    ///
    /// # Panics
    ///
    /// Panics if inner dimensions differ; use [`Matrix::matmul`] for the
    /// fallible form.
    fn mul(self, rhs: Self) -> Matrix<f32> {
        self.matmul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Div for &Matrix<f32> {
    type Output = Matrix<f32>;

    /// Element-wise quotient.
    ///
    /// # Panics
    ///
    /// Panics if shapes differ; use [`Matrix::div`] for the fallible form.
    fn div(self, rhs: Self) -> Matrix<f32> {
        Matrix::div(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl std::ops::Mul<f32> for &Matrix<f32> {
    type Output = Matrix<f32>;

    fn mul(self, scalar: f32) -> Matrix<f32> {
        self.mul_scalar(scalar)
    }
}

impl std::ops::Div<f32> for &Matrix<f32> {
    type Output = Matrix<f32>;

    fn div(self, scalar: f32) -> Matrix<f32> {
        self.div_scalar(scalar)
    }
}

impl std::ops::Add<f32> for &Matrix<f32> {
    type Output = Matrix<f32>;

    fn add(self, scalar: f32) -> Matrix<f32> {
        self.add_scalar(scalar)
    }
}

impl std::ops::Sub<f32> for &Matrix<f32> {
    type Output = Matrix<f32>;

    fn sub(self, scalar: f32) -> Matrix<f32> {
        self.sub_scalar(scalar)
    }
}

impl std::ops::MulAssign<f32> for Matrix<f32> {
    fn mul_assign(&mut self, scalar: f32) {
        *self = self.mul_scalar(scalar);
    }
}

impl std::ops::DivAssign<f32> for Matrix<f32> {
    fn div_assign(&mut self, scalar: f32) {
        *self = self.div_scalar(scalar);
    }
}

impl std::ops::AddAssign<f32> for Matrix<f32> {
    fn add_assign(&mut self, scalar: f32) {
        *self = self.add_scalar(scalar);
    }
}

impl std::ops::SubAssign<f32> for Matrix<f32> {
    fn sub_assign(&mut self, scalar: f32) {
        *self = self.sub_scalar(scalar);
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract_tests;
