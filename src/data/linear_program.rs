//! # Representing the assembled linear program
//!
//! The output side of the pipeline: a dense objective vector, constraint matrix and right-hand
//! side with row and column group bookkeeping, plus the interpretation of a solver's solution
//! vector back into per-variable volumes and costs.
use enum_map::{Enum, EnumMap};

use crate::assembly::error::AssemblyError;
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::traits::Scalar;
use crate::data::linear_algebra::vector::DenseVector;

/// A `ConstraintType` is a type of (in)equality.
///
/// Demand rows are equalities; capacity and supply rows bound their row sum from above.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConstraintType {
    Equal,
    Less,
}

/// The three horizontal sections of the constraint matrix, in row order.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum RowGroup {
    /// Equality rows: volume shipped to each customer equals its demand.
    Demand,
    /// Inequality rows: shipped volume per factory group stays within its capacity.
    Capacity,
    /// Inequality rows: shipped volume stays within efficiency-adjusted production.
    Supply,
}

/// The two vertical sections of the variable vector, in column order.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColumnGroup {
    /// Production volume at a factory for a product.
    Production,
    /// Volume shipped from a factory to a customer for a product.
    Shipment,
}

/// What a single decision variable stands for.
///
/// The analogue of naming a column: production variables are a (product, factory) pair, shipment
/// variables additionally carry the customer's position within the product.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VariableMeta {
    /// The product this variable moves.
    pub product: String,
    /// The factory this variable produces at or ships from.
    pub factory: String,
    /// For shipment variables, the customer's index within the product. `None` for production.
    pub customer: Option<usize>,
}

impl VariableMeta {
    /// Which section of the variable vector this variable belongs to.
    pub fn group(&self) -> ColumnGroup {
        match self.customer {
            None => ColumnGroup::Production,
            Some(_) => ColumnGroup::Shipment,
        }
    }
}

/// A fully assembled linear program for one optimization period.
///
/// Minimizing `objective * x` subject to the demand rows holding with equality and the capacity
/// and supply rows as upper bounds, over nonnegative `x`. Final once produced; the solver consumes
/// it and the instance is dropped when the period's solution has been extracted.
#[derive(Debug, PartialEq)]
pub struct AssembledModel<F> {
    /// Cost coefficients, strictly positive, one per variable.
    objective: DenseVector<F>,
    /// All constraint coefficients.
    constraints: DenseMatrix<F>,
    /// Right-hand sides, one per constraint row.
    rhs: DenseVector<F>,

    /// Index one past the last row of each row section.
    row_group_end: EnumMap<RowGroup, usize>,
    /// Index one past the last column of each column section.
    column_group_end: EnumMap<ColumnGroup, usize>,
    /// What each variable stands for, ordered by column index.
    column_info: Vec<VariableMeta>,
}

impl<F: Scalar> AssembledModel<F> {
    /// Create a new `AssembledModel`.
    ///
    /// A plain constructor; consistency of the parts is the assembler's responsibility.
    pub fn new(
        objective: DenseVector<F>,
        constraints: DenseMatrix<F>,
        rhs: DenseVector<F>,
        row_group_end: EnumMap<RowGroup, usize>,
        column_group_end: EnumMap<ColumnGroup, usize>,
        column_info: Vec<VariableMeta>,
    ) -> Self {
        debug_assert_eq!(objective.len(), constraints.nr_columns());
        debug_assert_eq!(rhs.len(), constraints.nr_rows());
        debug_assert_eq!(row_group_end[RowGroup::Supply], constraints.nr_rows());
        debug_assert_eq!(column_group_end[ColumnGroup::Shipment], constraints.nr_columns());
        debug_assert_eq!(column_info.len(), constraints.nr_columns());

        Self { objective, constraints, rhs, row_group_end, column_group_end, column_info, }
    }

    /// The objective coefficient vector.
    pub fn objective(&self) -> &DenseVector<F> {
        &self.objective
    }

    /// The constraint coefficient matrix.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// The constraint right-hand-side vector.
    pub fn rhs(&self) -> &DenseVector<F> {
        &self.rhs
    }

    /// Per-column variable descriptions, ordered by column index.
    pub fn column_info(&self) -> &[VariableMeta] {
        &self.column_info
    }

    /// The number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// The number of decision variables.
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// The number of production variables.
    ///
    /// This is the split point separating production from shipment variables; a solution vector's
    /// first this-many values are production volumes, the rest shipment volumes.
    pub fn nr_production_variables(&self) -> usize {
        self.column_group_end[ColumnGroup::Production]
    }

    /// Classify a row by section using the row index.
    pub fn row_group(&self, i: usize) -> RowGroup {
        debug_assert!(i < self.nr_rows());

        if i < self.row_group_end[RowGroup::Demand] {
            RowGroup::Demand
        } else if i < self.row_group_end[RowGroup::Capacity] {
            RowGroup::Capacity
        } else {
            RowGroup::Supply
        }
    }

    /// The (in)equality type of a constraint row.
    pub fn constraint_type(&self, i: usize) -> ConstraintType {
        match self.row_group(i) {
            RowGroup::Demand => ConstraintType::Equal,
            RowGroup::Capacity | RowGroup::Supply => ConstraintType::Less,
        }
    }

    /// Classify a column by section using the column index.
    pub fn column_group(&self, j: usize) -> ColumnGroup {
        debug_assert!(j < self.nr_columns());

        if j < self.column_group_end[ColumnGroup::Production] {
            ColumnGroup::Production
        } else {
            ColumnGroup::Shipment
        }
    }

    /// Interpret a solver's solution vector as per-variable volumes and costs.
    ///
    /// The solution's positions must align with this model's column layout.
    ///
    /// # Errors
    ///
    /// If the solution vector's length differs from the number of decision variables.
    pub fn interpret(&self, solution: &DenseVector<F>) -> Result<Solution<F>, AssemblyError> {
        if solution.len() != self.nr_columns() {
            return Err(AssemblyError::Shape(format!(
                "the solution vector has {} values, expected one per decision variable ({})",
                solution.len(), self.nr_columns(),
            )));
        }

        let mut objective_value = F::zero();
        let mut production = Vec::with_capacity(self.nr_production_variables());
        let mut shipment = Vec::with_capacity(self.nr_columns() - self.nr_production_variables());

        for (j, meta) in self.column_info.iter().enumerate() {
            let volume = solution[j].clone();
            let cost = volume.clone() * self.objective[j].clone();
            objective_value += cost.clone();

            let value = SolutionValue { meta: meta.clone(), volume, cost, };
            match meta.group() {
                ColumnGroup::Production => production.push(value),
                ColumnGroup::Shipment => shipment.push(value),
            }
        }

        Ok(Solution { objective_value, production, shipment, })
    }
}

/// One decision variable of a solved period: what it stands for, how much flowed, at what cost.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionValue<F> {
    /// Which (product, factory[, customer]) combination this value belongs to.
    pub meta: VariableMeta,
    /// The volume the solver assigned.
    pub volume: F,
    /// The volume multiplied by its objective coefficient.
    pub cost: F,
}

/// A solved period, split into its production and shipment sections.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<F> {
    /// Total cost over all variables.
    pub objective_value: F,
    /// Production volumes and costs, in column order.
    pub production: Vec<SolutionValue<F>>,
    /// Shipment volumes and costs, in column order.
    pub shipment: Vec<SolutionValue<F>>,
}
