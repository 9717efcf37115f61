//! # Constraint model assembly
//!
//! The pipeline that turns a `Network` into an `AssembledModel`: dimensions first, then the
//! objective, demand, combination, capacity and supply builders, and finally the stacking of the
//! blocks into one constraint matrix and right-hand side. Everything is a pure, synchronous
//! transformation; each builder validates the inputs it consumes and the shapes it produces.
use std::collections::HashMap;

use cumsum::cumsum_array_owned;
use enum_map::enum_map;
use itertools::repeat_n;

use crate::assembly::dimensions::Dimensions;
use crate::assembly::error::AssemblyError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::traits::Scalar;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::{AssembledModel, ColumnGroup, RowGroup, VariableMeta};
use crate::data::network::Network;

pub mod capacity;
pub mod combination;
pub mod demand;
pub mod dimensions;
pub mod error;
mod groups;
pub mod objective;
pub mod supply;

/// Assemble the linear program of one optimization period.
///
/// Runs every builder in dependency order and stacks their blocks: the demand equalities on top,
/// then the capacity bounds, then the supply balances. The right-hand side is the declared demand
/// and capacity volumes followed by zeros for the balance rows.
///
/// # Errors
///
/// Any shape, value or structure error a builder detects in its part of the input, or a
/// degeneracy error if the assembled matrix has a row or column that is identically zero. All are
/// unrecoverable for this period.
pub fn assemble<F: Scalar>(network: &Network<F>) -> Result<AssembledModel<F>, AssemblyError> {
    let dimensions = Dimensions::new(network)?;
    let objective = objective::build(network, &dimensions)?;
    let demand = demand::build(network, &dimensions)?;
    let combinations = combination::build(network, &dimensions)?;
    let capacity = capacity::build(network, &dimensions, &combinations)?;
    let supply = supply::build(network, &dimensions, &combinations)?;

    let rhs = stack_rhs(network, &dimensions, capacity.nr_rows(), supply.nr_rows())?;

    let cumulative = cumsum_array_owned([demand.nr_rows(), capacity.nr_rows(), supply.nr_rows()]);
    let row_group_end = enum_map! {
        RowGroup::Demand   => cumulative[0],
        RowGroup::Capacity => cumulative[1],
        RowGroup::Supply   => cumulative[2],
    };
    let cumulative = cumsum_array_owned([dimensions.nr_production, dimensions.nr_shipment]);
    let column_group_end = enum_map! {
        ColumnGroup::Production => cumulative[0],
        ColumnGroup::Shipment   => cumulative[1],
    };

    let constraints = DenseMatrix::vstack(vec![demand, capacity, supply]);
    if let Some(&row) = constraints.zero_rows().first() {
        return Err(AssemblyError::Degenerate(
            format!("constraint row {} is identically zero", row),
        ));
    }
    if let Some(&column) = constraints.zero_columns().first() {
        return Err(AssemblyError::Degenerate(
            format!("no constraint touches decision variable {}", column),
        ));
    }

    Ok(AssembledModel::new(
        objective,
        constraints,
        rhs,
        row_group_end,
        column_group_end,
        column_info(network),
    ))
}

/// Stack the right-hand side: demand volumes, capacity volumes, zeros for the balance rows.
fn stack_rhs<F: Scalar>(
    network: &Network<F>,
    dimensions: &Dimensions,
    nr_capacity_rows: usize,
    nr_supply_rows: usize,
) -> Result<DenseVector<F>, AssemblyError> {
    if network.demand_volume.len() != dimensions.nr_customers {
        return Err(AssemblyError::Shape(format!(
            "the demand volume vector has {} values, expected one per customer ({})",
            network.demand_volume.len(), dimensions.nr_customers,
        )));
    }
    if network.demand_volume.iter().any(|value| !(*value > F::zero())) {
        return Err(AssemblyError::Value(
            "demand volumes must be strictly positive".to_string(),
        ));
    }
    if network.capacity_volume.len() != nr_capacity_rows {
        return Err(AssemblyError::Shape(format!(
            "the capacity volume vector has {} values, expected one per capacity row ({})",
            network.capacity_volume.len(), nr_capacity_rows,
        )));
    }
    if network.capacity_volume.iter().any(|value| !(*value > F::zero())) {
        return Err(AssemblyError::Value(
            "capacity volumes must be strictly positive".to_string(),
        ));
    }

    let mut rhs = network.demand_volume.clone();
    rhs.extend_with_values(network.capacity_volume.clone().data());
    rhs.extend_with_values(repeat_n(F::zero(), nr_supply_rows).collect());

    debug_assert_eq!(rhs.len(), dimensions.nr_customers + nr_capacity_rows + nr_supply_rows);

    Ok(rhs)
}

/// Describe every decision variable, in column order: production variables product-major and
/// factory-minor, then shipment variables product-major, factory-minor and customer-minor.
fn column_info<F>(network: &Network<F>) -> Vec<VariableMeta> {
    let mut info = Vec::new();

    for product in &network.products {
        for factory in &network.factories_per_product[product] {
            info.push(VariableMeta {
                product: product.clone(),
                factory: factory.clone(),
                customer: None,
            });
        }
    }
    for product in &network.products {
        for factory in &network.factories_per_product[product] {
            for customer in 0..network.customer_sizes[product] {
                info.push(VariableMeta {
                    product: product.clone(),
                    factory: factory.clone(),
                    customer: Some(customer),
                });
            }
        }
    }

    info
}

/// Check that a dictionary has exactly one entry per listed product.
pub(crate) fn check_product_keys<T>(
    products: &[String],
    map: &HashMap<String, T>,
    what: &str,
) -> Result<(), AssemblyError> {
    for product in products {
        if !map.contains_key(product) {
            return Err(AssemblyError::Shape(
                format!("{} has no entry for product \"{}\"", what, product),
            ));
        }
    }
    if map.len() != products.len() {
        return Err(AssemblyError::Shape(format!(
            "{} has {} entries, expected one per product ({})",
            what, map.len(), products.len(),
        )));
    }

    Ok(())
}
