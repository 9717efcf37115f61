//! # Objective assembler
//!
//! Builds the cost coefficient vector: the concatenation of all inbound (production) cost
//! sub-vectors, product-major, followed by all outbound (shipment) cost sub-vectors,
//! product-major and factory-major within each product.
use crate::assembly::check_product_keys;
use crate::assembly::dimensions::Dimensions;
use crate::assembly::error::AssemblyError;
use crate::data::linear_algebra::traits::Scalar;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::network::Network;

/// Build the objective vector of a network's model.
///
/// # Errors
///
/// If the cost dictionaries do not have exactly one entry per product, if a sub-vector's length
/// disagrees with the product's factory or customer count, or if any cost is not strictly
/// positive. The model assumes all activity has strictly positive cost; a free-flowing variable
/// would make the minimum degenerate.
pub fn build<F: Scalar>(
    network: &Network<F>,
    dimensions: &Dimensions,
) -> Result<DenseVector<F>, AssemblyError> {
    check_product_keys(&network.products, &network.inbound_cost, "inbound cost")?;
    check_product_keys(&network.products, &network.outbound_cost, "outbound cost")?;

    let mut values = Vec::with_capacity(dimensions.nr_variables());

    for product in &network.products {
        let costs = &network.inbound_cost[product];
        let nr_factories = network.factories_per_product[product].len();
        if costs.len() != nr_factories {
            return Err(AssemblyError::Shape(format!(
                "inbound cost for product \"{}\" has {} values, expected one per serving factory ({})",
                product, costs.len(), nr_factories,
            )));
        }

        values.extend(costs.iter().cloned());
    }
    debug_assert_eq!(values.len(), dimensions.nr_production);

    for product in &network.products {
        let costs = &network.outbound_cost[product];
        let nr_factories = network.factories_per_product[product].len();
        let nr_customers = network.customer_sizes[product];
        if costs.len() != nr_factories * nr_customers {
            return Err(AssemblyError::Shape(format!(
                "outbound cost for product \"{}\" has {} values, expected one per (factory, customer) pair ({})",
                product, costs.len(), nr_factories * nr_customers,
            )));
        }

        values.extend(costs.iter().cloned());
    }
    debug_assert_eq!(values.len(), dimensions.nr_variables());

    if values.iter().any(|value| !(*value > F::zero())) {
        return Err(AssemblyError::Value(
            "the objective vector must be strictly positive".to_string(),
        ));
    }

    Ok(DenseVector::new(values, dimensions.nr_variables()))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::{shared_factory_network, two_product_network};

    #[test]
    fn minimal_scenario() {
        let network = two_product_network();
        let dimensions = Dimensions::new(&network).unwrap();
        let objective = build(&network, &dimensions).unwrap();

        assert_eq!(objective, DenseVector::new(vec![2_f64, 3_f64, 5_f64, 7_f64], 4));
    }

    #[test]
    fn factory_major_order() {
        let network = shared_factory_network();
        let dimensions = Dimensions::new(&network).unwrap();
        let objective = build(&network, &dimensions).unwrap();

        // Inbound product-major, then outbound product-major and factory-major within product.
        assert_eq!(objective, DenseVector::new(
            vec![2_f64, 3_f64, 4_f64, 5_f64, 6_f64, 7_f64, 8_f64, 9_f64],
            8,
        ));
    }

    #[test]
    fn wrong_lengths() {
        let network = two_product_network();
        let dimensions = Dimensions::new(&network).unwrap();

        let mut broken = network.clone();
        broken.inbound_cost.insert("A".to_string(), vec![2_f64, 2_f64]);
        assert!(matches!(build(&broken, &dimensions), Err(AssemblyError::Shape(_))));

        let mut broken = network;
        broken.outbound_cost.remove("B");
        assert!(matches!(build(&broken, &dimensions), Err(AssemblyError::Shape(_))));
    }

    #[test]
    fn non_positive_cost() {
        let mut network = two_product_network();
        network.inbound_cost.insert("A".to_string(), vec![0_f64]);
        let dimensions = Dimensions::new(&network).unwrap();

        assert!(matches!(build(&network, &dimensions), Err(AssemblyError::Value(_))));

        // A NaN cost is incomparable, not strictly positive.
        let mut network = two_product_network();
        network.outbound_cost.insert("B".to_string(), vec![f64::NAN]);
        let dimensions = Dimensions::new(&network).unwrap();

        assert!(matches!(build(&network, &dimensions), Err(AssemblyError::Value(_))));
    }
}
