//! # Dense vector
//!
//! Wrapping a `Vec` such that it has a fixed size. Objective coefficients and constraint
//! right-hand sides are stored in this type.
use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use itertools::repeat_n;

use crate::data::linear_algebra::traits::Scalar;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector<F> {
    data: Vec<F>,
}

impl<F: Scalar> DenseVector<F> {
    /// Create a `DenseVector` from the provided data.
    ///
    /// # Arguments
    ///
    /// * `data`: Internal data values. Will not be changed and directly used for creation.
    /// * `len`: Length of the vector represented.
    pub fn new(data: Vec<F>, len: usize) -> Self {
        debug_assert_eq!(data.len(), len);

        Self { data, }
    }

    /// Create a vector with all values being equal to a given value.
    ///
    /// # Arguments
    ///
    /// * `value`: The value which all elements of this vector are equal to.
    /// * `len`: Length of the vector, number of elements.
    pub fn constant(value: F, len: usize) -> Self {
        debug_assert_ne!(len, 0);

        Self { data: repeat_n(value, len).collect(), }
    }

    /// Create a vector of zeros of the specified length.
    pub fn zeros(len: usize) -> Self {
        Self::constant(F::zero(), len)
    }

    /// Append a value to this vector.
    pub fn push_value(&mut self, value: F) {
        self.data.push(value);
    }

    /// Append multiple values to this vector.
    ///
    /// # Arguments
    ///
    /// * `new_values`: An ordered collection of values to append.
    pub fn extend_with_values(&mut self, new_values: Vec<F>) {
        self.data.extend(new_values);
    }

    /// Iterate over the values of this vector.
    pub fn iter(&self) -> Iter<'_, F> {
        self.data.iter()
    }

    /// The length of this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the data of this vector.
    pub fn data(self) -> Vec<F> {
        self.data
    }
}

impl<F: Scalar> Index<usize> for DenseVector<F> {
    type Output = F;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len());

        &self.data[index]
    }
}

impl<F: Scalar> IndexMut<usize> for DenseVector<F> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < self.len());

        &mut self.data[index]
    }
}

impl<F: Display> Display for DenseVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for value in &self.data {
            writeln!(f, "{}", value)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create() {
        let v = DenseVector::new(vec![1_f64, 2_f64], 2);
        assert_eq!(v.len(), 2);
        assert_eq!(v[1], 2_f64);

        let v = DenseVector::constant(3_f64, 4);
        assert_eq!(v, DenseVector::new(vec![3_f64; 4], 4));

        let v = DenseVector::<f64>::zeros(3);
        assert!(v.iter().all(|value| *value == 0_f64));
    }

    #[test]
    fn extend() {
        let mut v = DenseVector::new(vec![1_f64], 1);
        v.push_value(2_f64);
        v.extend_with_values(vec![3_f64, 4_f64]);

        assert_eq!(v, DenseVector::new(vec![1_f64, 2_f64, 3_f64, 4_f64], 4));
    }
}
