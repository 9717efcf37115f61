//! # Dimension and index model
//!
//! The canonical mapping from (product, factory, customer) identities to flat vector and matrix
//! positions. Every builder derives its layout from the totals and offsets computed here; two
//! builders disagreeing on layout would silently corrupt the model, so this is computed once and
//! passed around by reference.
use crate::assembly::check_product_keys;
use crate::assembly::error::AssemblyError;
use crate::data::network::Network;

/// Aggregate counts and per-product offsets of the variable layout.
///
/// The full decision vector has length `nr_production + nr_shipment`: first all production
/// variables (product-major, then factory-minor), then all shipment variables (product-major,
/// factory-minor, customer-minor).
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Total number of production variables, over all (product, serving factory) pairs.
    pub nr_production: usize,
    /// Total number of customers, over all products.
    pub nr_customers: usize,
    /// Total number of shipment variables, over all (product, serving factory, customer) triples.
    pub nr_shipment: usize,

    /// Per product (in product-list order), the first production column belonging to it.
    production_offsets: Vec<usize>,
    /// Per product, the first column within the shipment section belonging to it.
    shipment_offsets: Vec<usize>,
}

impl Dimensions {
    /// Compute the dimensions of a network's model.
    ///
    /// # Errors
    ///
    /// If the product list is empty, if `factories_per_product` or `customer_sizes` do not have
    /// exactly one entry per listed product, or if any per-product factory or customer count is
    /// zero.
    pub fn new<F>(network: &Network<F>) -> Result<Self, AssemblyError> {
        if network.products.is_empty() {
            return Err(AssemblyError::Shape(
                "the number of products to optimize must be positive".to_string(),
            ));
        }
        for (i, product) in network.products.iter().enumerate() {
            if network.products[..i].contains(product) {
                return Err(AssemblyError::Shape(
                    format!("product \"{}\" appears more than once in the product list", product),
                ));
            }
        }
        check_product_keys(&network.products, &network.factories_per_product, "factories per product")?;
        check_product_keys(&network.products, &network.customer_sizes, "customer sizes")?;

        let mut nr_production = 0;
        let mut nr_customers = 0;
        let mut nr_shipment = 0;
        let mut production_offsets = Vec::with_capacity(network.products.len());
        let mut shipment_offsets = Vec::with_capacity(network.products.len());

        for product in &network.products {
            let nr_factories = network.factories_per_product[product].len();
            let nr_product_customers = network.customer_sizes[product];

            if nr_factories == 0 {
                return Err(AssemblyError::Value(
                    format!("product \"{}\" has no serving factories", product),
                ));
            }
            if nr_product_customers == 0 {
                return Err(AssemblyError::Value(
                    format!("product \"{}\" has no customers", product),
                ));
            }

            production_offsets.push(nr_production);
            shipment_offsets.push(nr_shipment);

            nr_production += nr_factories;
            nr_customers += nr_product_customers;
            nr_shipment += nr_factories * nr_product_customers;
        }

        debug_assert!(nr_production > 0 && nr_customers > 0 && nr_shipment > 0);

        Ok(Self { nr_production, nr_customers, nr_shipment, production_offsets, shipment_offsets, })
    }

    /// The length of the full decision vector.
    pub fn nr_variables(&self) -> usize {
        self.nr_production + self.nr_shipment
    }

    /// The first production column of the product at `product_index` in the product list.
    pub fn production_offset(&self, product_index: usize) -> usize {
        debug_assert!(product_index < self.production_offsets.len());

        self.production_offsets[product_index]
    }

    /// The first column within the shipment section of the product at `product_index`.
    pub fn shipment_offset(&self, product_index: usize) -> usize {
        debug_assert!(product_index < self.shipment_offsets.len());

        self.shipment_offsets[product_index]
    }
}
