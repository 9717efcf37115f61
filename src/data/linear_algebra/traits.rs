//! # Element traits
//!
//! The dense structures in this module are generic over their element type. The `Scalar` trait
//! collects the operations the assembly pipeline needs: an additive and a multiplicative identity,
//! negation (the inbound combination blocks carry negated efficiencies), in-place addition (group
//! aggregation) and an ordering against zero (strict positivity checks).
use std::fmt::{Debug, Display};
use std::ops::{AddAssign, Neg};

use num_traits::{One, Zero};

/// Element of a `DenseVector` or `DenseMatrix`.
///
/// Automatically implemented for all types satisfying the trait's bounds, `f64` being the typical
/// instantiation.
pub trait Scalar:
    Zero +
    One +
    Neg<Output = Self> +
    AddAssign +
    PartialOrd +
    Clone +
    Debug +
    Display
{
}

impl<F> Scalar for F
where
    F: Zero +
        One +
        Neg<Output = Self> +
        AddAssign +
        PartialOrd +
        Clone +
        Debug +
        Display,
{
}
