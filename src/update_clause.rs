//! Builds the `SET` clause of a partial product update.
//!
//! Column names and placeholders are fixed fragments; every caller-provided
//! value travels as a bound parameter.

use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};

use crate::validation::ProductChanges;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assignment {
    /// `column = <next bound value>`
    Bind(&'static str),
    /// `column = CURRENT_TIMESTAMP`
    Now(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    Text(String),
    Decimal(Decimal),
    Integer(i32),
}

/// Assignments in a fixed order (`updated_at`, `name`, `price`, `stock`) and
/// the values for their `Bind` entries, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateClause {
    assignments: Vec<Assignment>,
    values: Vec<BoundValue>,
}

impl UpdateClause {
    pub fn new(changes: ProductChanges) -> Self {
        let mut assignments = vec![Assignment::Now("updated_at")];
        let mut values = Vec::new();

        if let Some(name) = changes.name {
            assignments.push(Assignment::Bind("name"));
            values.push(BoundValue::Text(name));
        }
        if let Some(price) = changes.price {
            assignments.push(Assignment::Bind("price"));
            values.push(BoundValue::Decimal(price));
        }
        if let Some(stock) = changes.stock {
            assignments.push(Assignment::Bind("stock"));
            values.push(BoundValue::Integer(stock));
        }

        Self {
            assignments,
            values,
        }
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    pub fn values(&self) -> &[BoundValue] {
        &self.values
    }

    /// Names of the columns the caller asked to change.
    pub fn changed_columns(&self) -> Vec<&'static str> {
        self.assignments
            .iter()
            .filter_map(|assignment| match assignment {
                Assignment::Bind(column) => Some(*column),
                Assignment::Now(_) => None,
            })
            .collect()
    }

    /// Append `a = …, b = …` to `builder`, binding each value in order.
    pub fn push_assignments(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        let mut values = self.values.iter();
        let mut set = builder.separated(", ");

        for assignment in &self.assignments {
            match assignment {
                Assignment::Now(column) => {
                    set.push(column);
                    set.push_unseparated(" = CURRENT_TIMESTAMP");
                }
                Assignment::Bind(column) => {
                    let Some(value) = values.next() else { break };
                    set.push(column);
                    set.push_unseparated(" = ");
                    match value {
                        BoundValue::Text(text) => set.push_bind_unseparated(text.clone()),
                        BoundValue::Decimal(decimal) => set.push_bind_unseparated(*decimal),
                        BoundValue::Integer(integer) => set.push_bind_unseparated(*integer),
                    };
                }
            }
        }
    }

    /// The full `UPDATE … RETURNING` statement for product `id`.
    pub fn statement(&self, id: i32, returning: &str) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("UPDATE products SET ");
        self.push_assignments(&mut builder);
        builder.push(" WHERE id = ");
        builder.push_bind(id);
        builder.push(" RETURNING ");
        builder.push(returning);
        builder
    }
}
