//! # Supply constraint builder
//!
//! Builds the material-balance rows: per supply group and factory, the negated efficiency-weighted
//! production plus the shipped volume, bounded above by zero. Unlike the capacity block, both
//! sections are aggregated here; the inbound section carries the production side of the balance.
use crate::assembly::combination::Combinations;
use crate::assembly::dimensions::Dimensions;
use crate::assembly::error::AssemblyError;
use crate::assembly::groups;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::traits::Scalar;
use crate::data::network::Network;

/// Build the supply block of a network's model.
///
/// Row `r` sums to "shipped volume minus efficiency-adjusted production" for one factory within
/// one group; against a right-hand side of zero this reads "shipped cannot exceed production".
/// The result has one row per (group, distinct serving factory) pair and one column per decision
/// variable.
///
/// # Errors
///
/// If the supply groups are malformed, if a combination sub-matrix is missing or misshapen, or if
/// the stripped block's row count disagrees with the groups' distinct-factory unions.
pub fn build<F: Scalar>(
    network: &Network<F>,
    dimensions: &Dimensions,
    combinations: &Combinations<F>,
) -> Result<DenseMatrix<F>, AssemblyError> {
    groups::validate(&network.supply_groups, network, "supply")?;
    groups::check_submatrices(
        &combinations.inbound,
        &network.products,
        network.factories.len(),
        dimensions.nr_production,
        "inbound combination",
    )?;
    groups::check_submatrices(
        &combinations.outbound,
        &network.products,
        network.factories.len(),
        dimensions.nr_shipment,
        "outbound combination",
    )?;

    let inbound = groups::aggregate(&network.supply_groups, &combinations.inbound);
    let outbound = groups::aggregate(&network.supply_groups, &combinations.outbound);
    let matrix = inbound.hcat(outbound);

    groups::strip_zero_rows(matrix, &network.supply_groups, network, "supply")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assembly::combination;
    use crate::tests::{shared_factory_network, two_product_network};

    #[test]
    fn minimal_scenario() {
        let network = two_product_network();
        let dimensions = Dimensions::new(&network).unwrap();
        let combinations = combination::build(&network, &dimensions).unwrap();
        let supply = build(&network, &dimensions, &combinations).unwrap();

        // One group per product, one serving factory each: 2 balance rows.
        assert_eq!(supply, DenseMatrix::from_data(vec![
            vec![-0.9_f64, 0_f64, 1_f64, 0_f64],
            vec![0_f64, -0.8_f64, 0_f64, 1_f64],
        ]));
    }

    #[test]
    fn per_product_groups_with_shared_factory() {
        let network = shared_factory_network();
        let dimensions = Dimensions::new(&network).unwrap();
        let combinations = combination::build(&network, &dimensions).unwrap();
        let supply = build(&network, &dimensions, &combinations).unwrap();

        // Group [A] keeps both of A's factories; group [B] keeps only f2. The zero row of f1 in
        // B's group is stripped without disturbing the rows around it.
        assert_eq!(supply, DenseMatrix::from_data(vec![
            vec![-0.5_f64, 0_f64, 0_f64, 1_f64, 1_f64, 0_f64, 0_f64, 0_f64],
            vec![0_f64, -0.25_f64, 0_f64, 0_f64, 0_f64, 1_f64, 1_f64, 0_f64],
            vec![0_f64, 0_f64, -0.125_f64, 0_f64, 0_f64, 0_f64, 0_f64, 1_f64],
        ]));
    }

    #[test]
    fn joint_group_sums_both_sections() {
        let mut network = shared_factory_network();
        network.supply_groups = vec![vec!["A".to_string(), "B".to_string()]];
        let dimensions = Dimensions::new(&network).unwrap();
        let combinations = combination::build(&network, &dimensions).unwrap();
        let supply = build(&network, &dimensions, &combinations).unwrap();

        // f2's single row balances its production of both products against all its shipments.
        assert_eq!(supply, DenseMatrix::from_data(vec![
            vec![-0.5_f64, 0_f64, 0_f64, 1_f64, 1_f64, 0_f64, 0_f64, 0_f64],
            vec![0_f64, -0.25_f64, -0.125_f64, 0_f64, 0_f64, 1_f64, 1_f64, 1_f64],
        ]));
    }

    #[test]
    fn malformed_groups() {
        let mut network = two_product_network();
        network.supply_groups = vec![vec!["A".to_string()], vec!["A".to_string()]];
        let dimensions = Dimensions::new(&network).unwrap();
        let combinations = combination::build(&network, &dimensions).unwrap();

        assert!(matches!(
            build(&network, &dimensions, &combinations),
            Err(AssemblyError::Structure(_)),
        ));
    }
}
