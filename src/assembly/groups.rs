//! # Constraint groups
//!
//! Validation and aggregation shared by the capacity and supply builders. A group is a set of
//! products whose serving factories share one limit; aggregating a group sums the per-product
//! combination matrices element-wise, leaving one candidate row per factory in the universe, of
//! which only the rows of factories serving the group survive the zero-row strip.
use std::collections::HashMap;
use std::collections::HashSet;

use fifo_set::FIFOSet;
use itertools::Itertools;

use crate::assembly::error::AssemblyError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::traits::Scalar;
use crate::data::network::Network;

/// Check that a family of constraint groups is well formed.
///
/// # Errors
///
/// If the family is empty, a group is empty, a group repeats a product, two groups are equal
/// after order-insensitive comparison, or a group references a product outside the product list.
pub(super) fn validate<F>(
    groups: &[Vec<String>],
    network: &Network<F>,
    family: &str,
) -> Result<(), AssemblyError> {
    if groups.is_empty() {
        return Err(AssemblyError::Structure(
            format!("at least one {} group must be defined", family),
        ));
    }

    for group in groups {
        if group.is_empty() {
            return Err(AssemblyError::Structure(
                format!("{} groups cannot be empty", family),
            ));
        }
        if let Some(product) = group.iter().duplicates().next() {
            return Err(AssemblyError::Structure(format!(
                "product \"{}\" appears more than once in one {} group", product, family,
            )));
        }
        for product in group {
            if !network.products.contains(product) {
                return Err(AssemblyError::Structure(format!(
                    "product \"{}\" in a {} group is not in the product list", product, family,
                )));
            }
        }
    }

    let orderless = groups.iter()
        .map(|group| group.iter().sorted().collect::<Vec<_>>())
        .collect::<HashSet<_>>();
    if orderless.len() != groups.len() {
        return Err(AssemblyError::Structure(
            format!("{} groups cannot repeat, in any product order", family),
        ));
    }

    Ok(())
}

/// Check that a dictionary of combination sub-matrices covers the product list at a given shape.
///
/// # Errors
///
/// If a product has no sub-matrix or a sub-matrix's dimensions disagree with the expected shape.
pub(super) fn check_submatrices<F: Scalar>(
    per_product: &HashMap<String, DenseMatrix<F>>,
    products: &[String],
    nr_rows: usize,
    nr_columns: usize,
    what: &str,
) -> Result<(), AssemblyError> {
    for product in products {
        let matrix = per_product.get(product).ok_or_else(|| AssemblyError::Shape(
            format!("there is no {} matrix for product \"{}\"", what, product),
        ))?;

        if (matrix.nr_rows(), matrix.nr_columns()) != (nr_rows, nr_columns) {
            return Err(AssemblyError::Shape(format!(
                "the {} matrix for product \"{}\" is {}x{}, expected {}x{}",
                what, product, matrix.nr_rows(), matrix.nr_columns(), nr_rows, nr_columns,
            )));
        }
    }

    Ok(())
}

/// Sum the sub-matrices of every product in each group and stack the groups vertically.
///
/// The result still contains the all-zero rows of factories not present in a group; the calling
/// builder strips those after concatenating its sections.
pub(super) fn aggregate<F: Scalar>(
    groups: &[Vec<String>],
    per_product: &HashMap<String, DenseMatrix<F>>,
) -> DenseMatrix<F> {
    debug_assert!(!groups.is_empty());
    debug_assert!(groups.iter().flatten().all(|product| per_product.contains_key(product)));

    let blocks = groups.iter()
        .map(|group| {
            let mut sum = per_product[&group[0]].clone();
            for product in &group[1..] {
                sum += &per_product[product];
            }
            sum
        })
        .collect();

    DenseMatrix::vstack(blocks)
}

/// The row count a family of groups must produce: per group, the number of distinct factories
/// serving any of its products, summed over the groups.
pub(super) fn nr_distinct_factories<F>(groups: &[Vec<String>], network: &Network<F>) -> usize {
    groups.iter()
        .map(|group| {
            group.iter()
                .flat_map(|product| network.factories_per_product[product].iter())
                .map(String::as_str)
                .collect::<FIFOSet<_>>()
                .len()
        })
        .sum()
}

/// Strip all-zero rows and check the survivor count against the distinct-factory unions.
///
/// # Errors
///
/// If the stripped matrix does not have one row per distinct factory over the groups.
pub(super) fn strip_zero_rows<F: Scalar>(
    mut matrix: DenseMatrix<F>,
    groups: &[Vec<String>],
    network: &Network<F>,
    family: &str,
) -> Result<DenseMatrix<F>, AssemblyError> {
    let zero_rows = matrix.zero_rows();
    matrix.remove_rows(&zero_rows);

    let expected = nr_distinct_factories(groups, network);
    if matrix.nr_rows() != expected {
        return Err(AssemblyError::Shape(format!(
            "the {} matrix has {} rows, expected one per distinct factory over its groups ({})",
            family, matrix.nr_rows(), expected,
        )));
    }

    Ok(matrix)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tests::{shared_factory_network, two_product_network};

    fn family(groups: &[&[&str]]) -> Vec<Vec<String>> {
        groups.iter()
            .map(|group| group.iter().map(|product| product.to_string()).collect())
            .collect()
    }

    #[test]
    fn valid_families() {
        let network = two_product_network();

        assert!(validate(&family(&[&["A", "B"]]), &network, "capacity").is_ok());
        assert!(validate(&family(&[&["A"], &["B"]]), &network, "supply").is_ok());
    }

    #[test]
    fn invalid_families() {
        let network = two_product_network();

        // No group at all.
        assert!(matches!(
            validate(&family(&[]), &network, "capacity"),
            Err(AssemblyError::Structure(_)),
        ));
        // An empty group.
        assert!(matches!(
            validate(&family(&[&["A"], &[]]), &network, "capacity"),
            Err(AssemblyError::Structure(_)),
        ));
        // A product repeated within one group.
        assert!(matches!(
            validate(&family(&[&["A", "A"]]), &network, "capacity"),
            Err(AssemblyError::Structure(_)),
        ));
        // Two groups equal up to reordering.
        assert!(matches!(
            validate(&family(&[&["A", "B"], &["B", "A"]]), &network, "capacity"),
            Err(AssemblyError::Structure(_)),
        ));
        // A product outside the product list.
        assert!(matches!(
            validate(&family(&[&["A", "C"]]), &network, "capacity"),
            Err(AssemblyError::Structure(_)),
        ));
    }

    #[test]
    fn distinct_factories() {
        let network = shared_factory_network();

        // A is served by f1 and f2, B by f2 only.
        assert_eq!(nr_distinct_factories(&family(&[&["A", "B"]]), &network), 2);
        assert_eq!(nr_distinct_factories(&family(&[&["A"], &["B"]]), &network), 2 + 1);
    }
}
