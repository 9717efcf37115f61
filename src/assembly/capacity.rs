//! # Capacity constraint builder
//!
//! Builds the inequality rows bounding the total shipped volume per factory group. Per capacity
//! group, the outbound combination matrices of its products are summed and the rows of factories
//! serving none of the group's products are stripped; one row remains per distinct factory in the
//! group, bounded by that factory's declared capacity volume.
use crate::assembly::combination::Combinations;
use crate::assembly::dimensions::Dimensions;
use crate::assembly::error::AssemblyError;
use crate::assembly::groups;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::traits::Scalar;
use crate::data::network::Network;

/// Build the capacity block of a network's model.
///
/// The production section is zero: capacity bounds shipments, not production. The result has one
/// row per (group, distinct serving factory) pair and one column per decision variable.
///
/// # Errors
///
/// If the capacity groups are malformed, if a combination sub-matrix is missing or misshapen, or
/// if the stripped block's row count disagrees with the groups' distinct-factory unions.
pub fn build<F: Scalar>(
    network: &Network<F>,
    dimensions: &Dimensions,
    combinations: &Combinations<F>,
) -> Result<DenseMatrix<F>, AssemblyError> {
    groups::validate(&network.capacity_groups, network, "capacity")?;
    groups::check_submatrices(
        &combinations.outbound,
        &network.products,
        network.factories.len(),
        dimensions.nr_shipment,
        "outbound combination",
    )?;

    let outbound = groups::aggregate(&network.capacity_groups, &combinations.outbound);
    let matrix = DenseMatrix::zeros(outbound.nr_rows(), dimensions.nr_production).hcat(outbound);

    groups::strip_zero_rows(matrix, &network.capacity_groups, network, "capacity")
}
