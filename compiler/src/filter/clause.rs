use std::fmt::{Display, Formatter};

use imgfilter_parser::ast::Comparison;
use serde::{Deserialize, Serialize};

/// A single `table.column comparator "value"` comparison.
///
/// Clauses are compared and hashed by value, so two clauses built from the same four fields are
/// interchangeable no matter which filter holds them. Neither the comparator nor the value is
/// validated or escaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clause {
    table: String,
    column: String,
    comparator: String,
    value: String,
}

impl Clause {
    /// The value is stored as text, so `1` and `"1"` produce equal clauses.
    pub fn new(
        table: impl Into<String>,
        column: impl Into<String>,
        comparator: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            comparator: comparator.into(),
            value: value.to_string(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn comparator(&self) -> &str {
        &self.comparator
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"{}.{} {} "{}""#,
            self.table, self.column, self.comparator, self.value
        )
    }
}

impl From<Comparison> for Clause {
    fn from(comparison: Comparison) -> Self {
        Clause {
            table: comparison.table,
            column: comparison.column,
            comparator: comparison.comparator,
            value: comparison.value,
        }
    }
}
