//! # Distribution network description
//!
//! The per-period input to the assembly pipeline: which factories serve which products, at what
//! cost and efficiency, under which grouped capacity and supply limits. Instances are plain
//! records; the builders in the `assembly` module validate the parts they consume.
use std::collections::HashMap;

use crate::data::linear_algebra::vector::DenseVector;

/// All inputs of one optimization period.
///
/// Immutable once assembled: every builder borrows the network and returns new values. Products
/// and factories are identified by name; customers are positional within their product (naming
/// them is an ingestion concern, outside this crate).
///
/// The order of `products` is load-bearing. It determines the global column layout of the model,
/// and every dictionary field must carry exactly one entry per listed product.
#[derive(Debug, Clone, PartialEq)]
pub struct Network<F> {
    /// Ordered, duplicate-free list of products to optimize.
    pub products: Vec<String>,
    /// Ordered universe of factories, across all products.
    pub factories: Vec<String>,
    /// Per product, the ordered subset of `factories` that produces it.
    pub factories_per_product: HashMap<String, Vec<String>>,
    /// Per product, the number of customers buying it.
    pub customer_sizes: HashMap<String, usize>,
    /// Per product, the production cost at each serving factory, in serving-factory order.
    pub inbound_cost: HashMap<String, Vec<F>>,
    /// Per product, the shipment cost for each (factory, customer) pair, flattened factory-major.
    pub outbound_cost: HashMap<String, Vec<F>>,
    /// Per product, the production efficiency of each serving factory, in serving-factory order.
    pub efficiency: HashMap<String, Vec<F>>,
    /// Product groups whose factories share a joint shipment-volume limit.
    pub capacity_groups: Vec<Vec<String>>,
    /// Product groups whose factories share a joint production/shipment balance limit.
    pub supply_groups: Vec<Vec<String>>,
    /// Demand per customer, product-major then customer-minor.
    pub demand_volume: DenseVector<F>,
    /// Capacity limit per (group, factory) row, in group order.
    pub capacity_volume: DenseVector<F>,
}

impl<F> Network<F> {
    /// The number of factories serving a product, if the product is known.
    pub fn nr_factories_for(&self, product: &str) -> Option<usize> {
        self.factories_per_product.get(product).map(Vec::len)
    }

    /// The number of customers buying a product, if the product is known.
    pub fn nr_customers_for(&self, product: &str) -> Option<usize> {
        self.customer_sizes.get(product).copied()
    }

    /// The position of a factory in the global factory universe.
    pub fn factory_position(&self, factory: &str) -> Option<usize> {
        self.factories.iter().position(|name| name == factory)
    }

    /// Whether a factory produces a product.
    pub fn serves(&self, product: &str, factory: &str) -> bool {
        self.factories_per_product.get(product)
            .is_some_and(|serving| serving.iter().any(|name| name == factory))
    }

    /// The efficiency of a factory for a product, if the factory serves it.
    ///
    /// Looked up by the factory's position in the product's serving order, which is also the order
    /// of the `efficiency` values.
    pub fn efficiency_of(&self, product: &str, factory: &str) -> Option<&F> {
        let serving = self.factories_per_product.get(product)?;
        let position = serving.iter().position(|name| name == factory)?;

        self.efficiency.get(product)?.get(position)
    }
}
