//! # Combination matrix builder
//!
//! The shared primitive behind the capacity and supply builders. Per product, two matrices of one
//! row per factory in the global universe: the inbound matrix carries the negated production
//! efficiency on each serving factory's production column, the outbound matrix a run of ones over
//! each serving factory's shipment columns. Summing them row-wise expresses "shipped volume minus
//! producible volume" without special-casing, which the supply builder turns into a balance
//! constraint.
use std::collections::HashMap;

use itertools::Itertools;

use crate::assembly::check_product_keys;
use crate::assembly::dimensions::Dimensions;
use crate::assembly::error::AssemblyError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::traits::Scalar;
use crate::data::network::Network;

/// The per-product combination matrices, keyed by product.
///
/// Every matrix has one row per factory in the global universe; rows of factories that do not
/// serve the product are zero. Inbound matrices span the production columns, outbound matrices
/// the shipment columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Combinations<F> {
    /// Per product, the negated-efficiency production block (`|factories|` x `nr_production`).
    pub inbound: HashMap<String, DenseMatrix<F>>,
    /// Per product, the shipment-selection block (`|factories|` x `nr_shipment`).
    pub outbound: HashMap<String, DenseMatrix<F>>,
}

/// Build the combination matrices of a network's model.
///
/// Efficiencies are looked up per (product, factory) through the serving order, so the layout
/// does not depend on any consumption order of a flattened sequence.
///
/// # Errors
///
/// If the efficiency dictionary does not cover the product list, if a product's efficiency count
/// disagrees with its serving-factory count, if an efficiency is not strictly positive, or if a
/// serving factory is repeated or absent from the global factory universe.
pub fn build<F: Scalar>(
    network: &Network<F>,
    dimensions: &Dimensions,
) -> Result<Combinations<F>, AssemblyError> {
    check_product_keys(&network.products, &network.factories_per_product, "factories per product")?;
    check_product_keys(&network.products, &network.efficiency, "efficiency")?;

    if network.factories.is_empty() {
        return Err(AssemblyError::Shape(
            "the number of factories to optimize must be positive".to_string(),
        ));
    }

    let nr_factory_rows = network.factories.len();
    let mut inbound = HashMap::with_capacity(network.products.len());
    let mut outbound = HashMap::with_capacity(network.products.len());

    for (product_index, product) in network.products.iter().enumerate() {
        let serving = &network.factories_per_product[product];
        let efficiencies = &network.efficiency[product];
        let nr_customers = network.customer_sizes[product];

        if serving.len() > network.factories.len() {
            return Err(AssemblyError::Shape(format!(
                "product \"{}\" has {} serving factories, more than the {} in the factory list",
                product, serving.len(), network.factories.len(),
            )));
        }
        if let Some(factory) = serving.iter().duplicates().next() {
            return Err(AssemblyError::Shape(format!(
                "factory \"{}\" serves product \"{}\" more than once", factory, product,
            )));
        }
        if efficiencies.len() != serving.len() {
            return Err(AssemblyError::Shape(format!(
                "efficiency for product \"{}\" has {} values, expected one per serving factory ({})",
                product, efficiencies.len(), serving.len(),
            )));
        }
        if efficiencies.iter().any(|value| !(*value > F::zero())) {
            return Err(AssemblyError::Value(
                format!("efficiencies for product \"{}\" must be strictly positive", product),
            ));
        }

        let production_offset = dimensions.production_offset(product_index);
        let shipment_offset = dimensions.shipment_offset(product_index);

        let mut inbound_block = DenseMatrix::zeros(nr_factory_rows, dimensions.nr_production);
        let mut outbound_block = DenseMatrix::zeros(nr_factory_rows, dimensions.nr_shipment);

        for (position, factory) in serving.iter().enumerate() {
            let row = network.factory_position(factory).ok_or_else(|| AssemblyError::Shape(
                format!("factory \"{}\" of product \"{}\" is not in the factory list", factory, product),
            ))?;
            let efficiency = network.efficiency_of(product, factory).ok_or_else(|| AssemblyError::Shape(
                format!("no efficiency is known for product \"{}\" at factory \"{}\"", product, factory),
            ))?;

            inbound_block.set_value(row, production_offset + position, -efficiency.clone());
            for customer in 0..nr_customers {
                outbound_block.set_value(row, shipment_offset + position * nr_customers + customer, F::one());
            }
        }

        inbound.insert(product.clone(), inbound_block);
        outbound.insert(product.clone(), outbound_block);
    }

    Ok(Combinations { inbound, outbound, })
}
