use serde::Deserialize;

use crate::errors::{Error, ErrorKind};

use super::Filter;

/// The optional fields used to seed a filter with its first clause.
///
/// Either all four fields are present, producing a single-clause filter, or none are, producing
/// an empty one. Anything in between is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterSeed {
    pub table: Option<String>,
    pub column: Option<String>,
    pub comparator: Option<String>,
    pub value: Option<String>,
}

impl FilterSeed {
    fn missing(&self) -> Vec<&'static str> {
        [
            ("table", self.table.is_none()),
            ("column", self.column.is_none()),
            ("comparator", self.comparator.is_none()),
            ("value", self.value.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, is_missing)| is_missing.then_some(name))
        .collect()
    }
}

impl TryFrom<FilterSeed> for Filter {
    type Error = Error;

    fn try_from(seed: FilterSeed) -> Result<Self, Self::Error> {
        match seed {
            FilterSeed {
                table: Some(table),
                column: Some(column),
                comparator: Some(comparator),
                value: Some(value),
            } => Ok(Filter::with_clause(table, column, comparator, value)),
            FilterSeed {
                table: None,
                column: None,
                comparator: None,
                value: None,
            } => Ok(Filter::new()),
            partial => Err(ErrorKind::PartialSeed {
                missing: partial.missing(),
            }
            .into()),
        }
    }
}
