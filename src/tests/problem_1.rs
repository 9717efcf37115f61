//! Minimal two-product network.
//!
//! Each product has one factory and one customer, so every block of the assembled model can be
//! written out by hand and compared exactly.
use crate::assembly::assemble;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::DenseVector;
use crate::data::linear_program::{ColumnGroup, ConstraintType, RowGroup};
use crate::tests::two_product_network;

#[test]
fn assembly_pipeline() {
    let model = assemble(&two_product_network()).unwrap();

    assert_eq!(model.nr_rows(), 6);
    assert_eq!(model.nr_columns(), 4);
    assert_eq!(model.nr_production_variables(), 2);

    assert_eq!(
        *model.objective(),
        DenseVector::new(vec![2_f64, 3_f64, 5_f64, 7_f64], 4),
    );

    // Demand, capacity and supply, stacked top to bottom.
    assert_eq!(
        *model.constraints(),
        DenseMatrix::from_data(vec![
            vec![0_f64, 0_f64, 1_f64, 0_f64],
            vec![0_f64, 0_f64, 0_f64, 1_f64],
            vec![0_f64, 0_f64, 1_f64, 0_f64],
            vec![0_f64, 0_f64, 0_f64, 1_f64],
            vec![-0.9_f64, 0_f64, 1_f64, 0_f64],
            vec![0_f64, -0.8_f64, 0_f64, 1_f64],
        ]),
    );

    assert_eq!(
        *model.rhs(),
        DenseVector::new(vec![5_f64, 10_f64, 20_f64, 30_f64, 0_f64, 0_f64], 6),
    );

    assert_eq!(model.row_group(0), RowGroup::Demand);
    assert_eq!(model.row_group(1), RowGroup::Demand);
    assert_eq!(model.row_group(2), RowGroup::Capacity);
    assert_eq!(model.row_group(3), RowGroup::Capacity);
    assert_eq!(model.row_group(4), RowGroup::Supply);
    assert_eq!(model.row_group(5), RowGroup::Supply);

    assert_eq!(model.constraint_type(0), ConstraintType::Equal);
    assert_eq!(model.constraint_type(1), ConstraintType::Equal);
    for row in 2..6 {
        assert_eq!(model.constraint_type(row), ConstraintType::Less);
    }

    assert_eq!(model.column_group(0), ColumnGroup::Production);
    assert_eq!(model.column_group(1), ColumnGroup::Production);
    assert_eq!(model.column_group(2), ColumnGroup::Shipment);
    assert_eq!(model.column_group(3), ColumnGroup::Shipment);

    let info = model.column_info();
    assert_eq!(info.len(), 4);
    assert_eq!((info[0].product.as_str(), info[0].factory.as_str(), info[0].customer), ("A", "f1", None));
    assert_eq!((info[1].product.as_str(), info[1].factory.as_str(), info[1].customer), ("B", "f2", None));
    assert_eq!((info[2].product.as_str(), info[2].factory.as_str(), info[2].customer), ("A", "f1", Some(0)));
    assert_eq!((info[3].product.as_str(), info[3].factory.as_str(), info[3].customer), ("B", "f2", Some(0)));
}

#[test]
fn solution_interpretation() {
    let model = assemble(&two_product_network()).unwrap();

    // Shipping exactly the demanded volumes.
    let values = DenseVector::new(vec![5_f64, 10_f64, 5_f64, 10_f64], 4);
    let solution = model.interpret(&values).unwrap();

    assert_eq!(solution.production.len(), 2);
    assert_eq!(solution.shipment.len(), 2);
    assert_eq!(solution.production[0].volume, 5_f64);
    assert_eq!(solution.production[0].cost, 10_f64);
    assert_eq!(solution.shipment[1].volume, 10_f64);
    assert_eq!(solution.shipment[1].cost, 70_f64);
    // 5 * 2 + 10 * 3 + 5 * 5 + 10 * 7
    assert_eq!(solution.objective_value, 135_f64);
}
