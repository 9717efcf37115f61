//! # Demand matrix builder
//!
//! Builds the equality-constraint block enforcing that the volume shipped to each customer equals
//! that customer's demand. Per product the block is a row-tiled identity: the identity matrix of
//! the customer count, tiled horizontally once per serving factory, so that row `c` selects every
//! (factory, customer `c`) shipment variable of the product. Production variables never satisfy
//! demand directly, so the production section of the block is zero.
use crate::assembly::check_product_keys;
use crate::assembly::dimensions::Dimensions;
use crate::assembly::error::AssemblyError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::traits::Scalar;
use crate::data::network::Network;

/// Build the demand block of a network's model.
///
/// The result has `dimensions.nr_customers` rows and one column per decision variable.
///
/// # Errors
///
/// If the per-product dictionaries do not cover the product list, or if the block-diagonal
/// outbound section does not come out at exactly (`nr_customers`, `nr_shipment`).
pub fn build<F: Scalar>(
    network: &Network<F>,
    dimensions: &Dimensions,
) -> Result<DenseMatrix<F>, AssemblyError> {
    check_product_keys(&network.products, &network.factories_per_product, "factories per product")?;
    check_product_keys(&network.products, &network.customer_sizes, "customer sizes")?;

    let mut blocks = Vec::with_capacity(network.products.len());
    for product in &network.products {
        let nr_factories = network.factories_per_product[product].len();
        let nr_customers = network.customer_sizes[product];
        if nr_factories == 0 || nr_customers == 0 {
            return Err(AssemblyError::Value(
                format!("product \"{}\" has no serving factories or no customers", product),
            ));
        }

        blocks.push(DenseMatrix::identity(nr_customers).repeat_horizontally(nr_factories));
    }

    let outbound = DenseMatrix::block_diag(blocks);
    if (outbound.nr_rows(), outbound.nr_columns()) != (dimensions.nr_customers, dimensions.nr_shipment) {
        return Err(AssemblyError::Shape(format!(
            "the outbound demand block is {}x{}, expected {}x{}",
            outbound.nr_rows(), outbound.nr_columns(),
            dimensions.nr_customers, dimensions.nr_shipment,
        )));
    }

    Ok(DenseMatrix::zeros(dimensions.nr_customers, dimensions.nr_production).hcat(outbound))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::{shared_factory_network, two_product_network};

    #[test]
    fn minimal_scenario() {
        let network = two_product_network();
        let dimensions = Dimensions::new(&network).unwrap();
        let demand = build(&network, &dimensions).unwrap();

        assert_eq!(demand, DenseMatrix::from_data(vec![
            vec![0_f64, 0_f64, 1_f64, 0_f64],
            vec![0_f64, 0_f64, 0_f64, 1_f64],
        ]));
    }

    #[test]
    fn tiled_identity() {
        let network = shared_factory_network();
        let dimensions = Dimensions::new(&network).unwrap();
        let demand = build(&network, &dimensions).unwrap();

        // Product A: 2 customers, 2 factories; product B: 1 customer, 1 factory.
        assert_eq!(demand, DenseMatrix::from_data(vec![
            vec![0_f64, 0_f64, 0_f64, 1_f64, 0_f64, 1_f64, 0_f64, 0_f64],
            vec![0_f64, 0_f64, 0_f64, 0_f64, 1_f64, 0_f64, 1_f64, 0_f64],
            vec![0_f64, 0_f64, 0_f64, 0_f64, 0_f64, 0_f64, 0_f64, 1_f64],
        ]));
    }

    #[test]
    fn row_sums_count_serving_factories() {
        let network = shared_factory_network();
        let dimensions = Dimensions::new(&network).unwrap();
        let demand = build(&network, &dimensions).unwrap();

        // Each customer row has one 1 per factory serving its product.
        assert_eq!(demand.row(0).sum::<f64>(), 2_f64);
        assert_eq!(demand.row(1).sum::<f64>(), 2_f64);
        assert_eq!(demand.row(2).sum::<f64>(), 1_f64);
    }
}
