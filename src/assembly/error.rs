//! # Error reporting for model assembly
//!
//! A collection of variants describing any problem a builder detects in its inputs or outputs.
//! Every error is raised eagerly at the boundary of the offending builder and is unrecoverable
//! for that optimization period; the caller must fix the upstream data and re-run.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// An `AssemblyError` is created when a builder rejects the model it was asked to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    /// A dictionary's key set does not match the product list exactly, or a vector or matrix
    /// dimension disagrees with the computed totals.
    ///
    /// The contained `String` describes the disagreement.
    Shape(String),
    /// A cost, efficiency, demand or capacity value is not strictly positive where strict
    /// positivity is required.
    Value(String),
    /// A capacity or supply group is empty, repeats a product, duplicates another group after
    /// order-insensitive comparison, or references a product outside the product list.
    Structure(String),
    /// The assembled constraint matrix contains a row or column that is identically zero.
    ///
    /// A zero column would mean an unused decision variable, a zero row a vacuous constraint;
    /// either signals an upstream data error.
    Degenerate(String),
}

impl Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Shape(description) => write!(f, "shape error: {}", description),
            Self::Value(description) => write!(f, "value error: {}", description),
            Self::Structure(description) => write!(f, "structure error: {}", description),
            Self::Degenerate(description) => write!(f, "degeneracy error: {}", description),
        }
    }
}

impl Error for AssemblyError {
}
