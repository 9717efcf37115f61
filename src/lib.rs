//! # A distribution network model assembler
//!
//! Formulates the linear program of a multi-product, multi-echelon distribution network: factories
//! produce and ship products to customers under demand, capacity and supply constraints. The crate
//! turns sparse, per-product dictionary inputs into one dense model (objective vector, constraint
//! matrix, right-hand side) that a linear program solver can consume directly.
#![warn(missing_docs)]

pub mod assembly;
pub mod data;

#[cfg(test)]
mod tests;
