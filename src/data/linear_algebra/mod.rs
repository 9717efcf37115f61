//! # Linear algebra primitives
//!
//! Dense vector and matrix types used to represent the assembled model, together with the element
//! trait they are generic over.

pub mod matrix;
pub mod traits;
pub mod vector;
