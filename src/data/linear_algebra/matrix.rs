//! # Matrix implementation
//!
//! A dense, row-major matrix with the block operations the assembly pipeline is built from:
//! horizontal and vertical concatenation, block-diagonal placement, horizontal tiling and removal
//! of rows that are identically zero.
use std::ops::AddAssign;
use std::slice::Iter;

use index_utils::remove_indices;
use itertools::repeat_n;

use crate::data::linear_algebra::traits::Scalar;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Scalar> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided data.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let (nr_rows, nr_columns) = get_data_dimensions(&data);

        Self { data, nr_rows, nr_columns, }
    }

    /// Create a dense matrix of zeros of dimension `nr_rows` x `nr_columns`.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self {
        debug_assert_ne!(nr_rows, 0);
        debug_assert_ne!(nr_columns, 0);

        let data = (0..nr_rows)
            .map(|_| repeat_n(F::zero(), nr_columns).collect())
            .collect();

        Self { data, nr_rows, nr_columns, }
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        debug_assert_ne!(len, 0);

        let mut matrix = Self::zeros(len, len);
        for i in 0..len {
            matrix.set_value(i, i, F::one());
        }

        matrix
    }

    /// Tile this matrix `reps` times in the horizontal direction.
    ///
    /// A `(m, n)` matrix becomes a `(m, reps * n)` matrix in which each row is the original row
    /// repeated `reps` times.
    #[must_use]
    pub fn repeat_horizontally(&self, reps: usize) -> Self {
        debug_assert_ne!(reps, 0);

        let data = self.data.iter()
            .map(|row| {
                let mut new_row = Vec::with_capacity(reps * self.nr_columns);
                for _ in 0..reps {
                    new_row.extend(row.iter().cloned());
                }
                new_row
            })
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: reps * self.nr_columns, }
    }

    /// Concatenate another `DenseMatrix` to the "right" (high column indices) of this matrix
    /// "horizontally" (number of rows must be equal).
    #[must_use]
    pub fn hcat(self, other: Self) -> Self {
        debug_assert_eq!(other.nr_rows(), self.nr_rows());

        let nr_rows = self.nr_rows();
        let nr_columns = self.nr_columns() + other.nr_columns();

        let mut data = self.data;
        for (row, other_row) in data.iter_mut().zip(other.data) {
            row.extend(other_row);
        }

        Self { data, nr_rows, nr_columns, }
    }

    /// Stack matrices "vertically" (high row indices come from later matrices).
    ///
    /// All matrices must have the same number of columns.
    pub fn vstack(blocks: Vec<Self>) -> Self {
        debug_assert!(!blocks.is_empty());
        debug_assert!(blocks.iter().all(|block| block.nr_columns() == blocks[0].nr_columns()));

        let nr_columns = blocks[0].nr_columns();
        let nr_rows = blocks.iter().map(Self::nr_rows).sum();

        let mut data = Vec::with_capacity(nr_rows);
        for block in blocks {
            data.extend(block.data);
        }

        Self { data, nr_rows, nr_columns, }
    }

    /// Place matrices on the diagonal of a single larger matrix, all other values being zero.
    ///
    /// The result has as many rows and columns as the blocks have combined.
    pub fn block_diag(blocks: Vec<Self>) -> Self {
        debug_assert!(!blocks.is_empty());

        let nr_rows = blocks.iter().map(Self::nr_rows).sum();
        let nr_columns = blocks.iter().map(Self::nr_columns).sum();

        let mut data: Vec<Vec<F>> = Vec::with_capacity(nr_rows);
        let mut columns_before = 0;
        for block in blocks {
            let columns_after = nr_columns - columns_before - block.nr_columns();
            for row in block.data {
                let mut new_row = Vec::with_capacity(nr_columns);
                new_row.extend(repeat_n(F::zero(), columns_before));
                new_row.extend(row);
                new_row.extend(repeat_n(F::zero(), columns_after));
                data.push(new_row);
            }
            columns_before += block.nr_columns;
        }

        Self { data, nr_rows, nr_columns, }
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, F> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j].clone()).collect()
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> &F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        &self.data[i][j]
    }

    /// Set the value at coordinate (`i`, `j`) to `value`.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j] = value;
    }

    /// Indices of the rows that hold no nonzero value, in increasing order.
    pub fn zero_rows(&self) -> Vec<usize> {
        self.data.iter().enumerate()
            .filter(|(_, row)| row.iter().all(F::is_zero))
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of the columns that hold no nonzero value, in increasing order.
    pub fn zero_columns(&self) -> Vec<usize> {
        (0..self.nr_columns)
            .filter(|&j| self.data.iter().all(|row| row[j].is_zero()))
            .collect()
    }

    /// Remove the rows at the specified indices.
    ///
    /// # Arguments
    ///
    /// * `indices`: Rows to remove, sorted and without duplicates.
    pub fn remove_rows(&mut self, indices: &[usize]) {
        debug_assert!(indices.len() < self.nr_rows);
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.iter().all(|&i| i < self.nr_rows));

        remove_indices(&mut self.data, indices);
        self.nr_rows -= indices.len();
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the number of values in this matrix.
    pub fn size(&self) -> usize {
        self.nr_rows * self.nr_columns
    }

    /// Get the data of this matrix.
    pub fn data(self) -> Vec<Vec<F>> {
        self.data
    }
}

/// Element-wise addition, used to aggregate combination matrices over a constraint group.
impl<F: Scalar> AddAssign<&DenseMatrix<F>> for DenseMatrix<F> {
    fn add_assign(&mut self, other: &Self) {
        debug_assert_eq!(self.nr_rows, other.nr_rows);
        debug_assert_eq!(self.nr_columns, other.nr_columns);

        for (row, other_row) in self.data.iter_mut().zip(other.data.iter()) {
            for (value, other_value) in row.iter_mut().zip(other_row.iter()) {
                *value += other_value.clone();
            }
        }
    }
}

/// If all column sizes agree, return the dimensions of the vector `data`.
fn get_data_dimensions<F>(data: &[Vec<F>]) -> (usize, usize) {
    let nr_rows = data.len();
    let nr_columns = data[0].len();

    debug_assert!(nr_rows > 0);
    debug_assert!(nr_columns > 0);
    debug_assert!(
        data.iter().all(|row| row.len() == nr_columns),
        "Row lengths not equal: first row has length {}", nr_columns,
    );

    (nr_rows, nr_columns)
}
