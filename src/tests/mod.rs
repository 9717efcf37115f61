//! # Integration tests that require a look inside the crate.
//!
//! The fixtures below are shared with the unit tests of the individual builders. Their values are
//! chosen to be exactly representable in binary floating point, such that all comparisons can be
//! exact.
use std::collections::HashMap;

use crate::data::linear_algebra::vector::DenseVector;
use crate::data::network::Network;

pub mod problem_1;

/// Two products, each made in its own factory and sold to its own customer.
///
/// The smallest network in which every constraint group is non trivial.
pub fn two_product_network() -> Network<f64> {
    Network {
        products: vec!["A".to_string(), "B".to_string()],
        factories: vec!["f1".to_string(), "f2".to_string()],
        factories_per_product: HashMap::from([
            ("A".to_string(), vec!["f1".to_string()]),
            ("B".to_string(), vec!["f2".to_string()]),
        ]),
        customer_sizes: HashMap::from([
            ("A".to_string(), 1),
            ("B".to_string(), 1),
        ]),
        inbound_cost: HashMap::from([
            ("A".to_string(), vec![2_f64]),
            ("B".to_string(), vec![3_f64]),
        ]),
        outbound_cost: HashMap::from([
            ("A".to_string(), vec![5_f64]),
            ("B".to_string(), vec![7_f64]),
        ]),
        efficiency: HashMap::from([
            ("A".to_string(), vec![0.9_f64]),
            ("B".to_string(), vec![0.8_f64]),
        ]),
        capacity_groups: vec![vec!["A".to_string(), "B".to_string()]],
        supply_groups: vec![vec!["A".to_string()], vec!["B".to_string()]],
        demand_volume: DenseVector::new(vec![5_f64, 10_f64], 2),
        capacity_volume: DenseVector::new(vec![20_f64, 30_f64], 2),
    }
}

/// Two products sharing a factory, with different customer counts per product.
///
/// Exercises the parts the minimal network can not: tiled identities wider than one column,
/// aggregation over a factory that makes both products, and shipment runs longer than one.
pub fn shared_factory_network() -> Network<f64> {
    Network {
        products: vec!["A".to_string(), "B".to_string()],
        factories: vec!["f1".to_string(), "f2".to_string()],
        factories_per_product: HashMap::from([
            ("A".to_string(), vec!["f1".to_string(), "f2".to_string()]),
            ("B".to_string(), vec!["f2".to_string()]),
        ]),
        customer_sizes: HashMap::from([
            ("A".to_string(), 2),
            ("B".to_string(), 1),
        ]),
        inbound_cost: HashMap::from([
            ("A".to_string(), vec![2_f64, 3_f64]),
            ("B".to_string(), vec![4_f64]),
        ]),
        outbound_cost: HashMap::from([
            ("A".to_string(), vec![5_f64, 6_f64, 7_f64, 8_f64]),
            ("B".to_string(), vec![9_f64]),
        ]),
        efficiency: HashMap::from([
            ("A".to_string(), vec![0.5_f64, 0.25_f64]),
            ("B".to_string(), vec![0.125_f64]),
        ]),
        capacity_groups: vec![vec!["A".to_string(), "B".to_string()]],
        supply_groups: vec![vec!["A".to_string()], vec!["B".to_string()]],
        demand_volume: DenseVector::new(vec![10_f64, 20_f64, 30_f64], 3),
        capacity_volume: DenseVector::new(vec![100_f64, 200_f64], 2),
    }
}
