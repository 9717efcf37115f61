//! # Storing the network and its linear program in memory
//!
//! This module provides the data structures the pipeline transforms between: the distribution
//! network description on the input side and the assembled linear program on the output side,
//! with the linear algebra primitives both are made of.

pub mod linear_algebra;
pub mod linear_program;
pub mod network;
