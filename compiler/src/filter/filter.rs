use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    errors::{Error, ErrorKind, Result},
    options::{Options, TableOrder},
    sql::Select,
};

use super::{Clause, Conjunction, FilterSeed};

/// An ordered sequence of clauses joined left to right by conjunctions.
///
/// `conjunctions[i]` joins `clauses[i]` and `clauses[i + 1]`, so a filter with `n > 0` clauses
/// always holds `n - 1` conjunctions. Every public mutation keeps that parity. Filters only grow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFilter")]
pub struct Filter {
    clauses: Vec<Clause>,
    conjunctions: Vec<Conjunction>,
}

/// Unchecked form used while deserializing.
#[derive(Deserialize)]
struct RawFilter {
    #[serde(default)]
    clauses: Vec<Clause>,
    #[serde(default)]
    conjunctions: Vec<Conjunction>,
}

impl TryFrom<RawFilter> for Filter {
    type Error = Error;

    fn try_from(raw: RawFilter) -> Result<Self> {
        let filter = Filter {
            clauses: raw.clauses,
            conjunctions: raw.conjunctions,
        };
        filter.check_parity()?;
        Ok(filter)
    }
}

impl Filter {
    /// An empty filter. It cannot be rendered until a clause is added.
    pub fn new() -> Self {
        Self::default()
    }

    /// A filter holding exactly one clause.
    pub fn with_clause(
        table: impl Into<String>,
        column: impl Into<String>,
        comparator: impl Into<String>,
        value: impl ToString,
    ) -> Self {
        Self {
            clauses: vec![Clause::new(table, column, comparator, value)],
            conjunctions: vec![],
        }
    }

    /// Build a filter from optional seed fields. All four must be given, or none.
    pub fn from_seed(
        table: Option<&str>,
        column: Option<&str>,
        comparator: Option<&str>,
        value: Option<&str>,
    ) -> Result<Self> {
        FilterSeed {
            table: table.map(str::to_owned),
            column: column.map(str::to_owned),
            comparator: comparator.map(str::to_owned),
            value: value.map(str::to_owned),
        }
        .try_into()
    }

    /// Parse filter text such as `per_image.plate = "P1" OR per_image.plate = "P2"`.
    ///
    /// Blank input yields an empty filter.
    pub fn parse(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::new());
        }
        let ast = imgfilter_parser::parse(input).map_err(ErrorKind::Parse)?;
        let conjunctions = ast.conjunctions().map(Conjunction::from).collect();
        let clauses = ast.comparisons().cloned().map(Clause::from).collect();
        Ok(Self {
            clauses,
            conjunctions,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn conjunctions(&self) -> &[Conjunction] {
        &self.conjunctions
    }

    /// Append a clause joined by `AND`.
    pub fn add_column(
        &mut self,
        table: impl Into<String>,
        column: impl Into<String>,
        comparator: impl Into<String>,
        value: impl ToString,
    ) {
        self.add_column_with(table, column, comparator, value, Conjunction::default());
    }

    /// Append a clause joined by `conjunction`. On an empty filter the clause simply becomes the
    /// first one and the conjunction is dropped.
    pub fn add_column_with(
        &mut self,
        table: impl Into<String>,
        column: impl Into<String>,
        comparator: impl Into<String>,
        value: impl ToString,
        conjunction: Conjunction,
    ) {
        if !self.clauses.is_empty() {
            self.conjunctions.push(conjunction);
        }
        self.clauses.push(Clause::new(table, column, comparator, value));
    }

    /// Append a pre-built clause.
    ///
    /// A conjunction is required once the filter holds a clause, and refused while it is empty.
    /// The filter is left untouched when the conjunction does not fit.
    pub fn add_where_clause(
        &mut self,
        clause: Clause,
        conjunction: Option<Conjunction>,
    ) -> Result<()> {
        match (self.clauses.is_empty(), conjunction) {
            (true, None) => {}
            (false, Some(conjunction)) => self.conjunctions.push(conjunction),
            (is_empty, _) => {
                let err = ErrorKind::ConjunctionMismatch {
                    clauses: self.clauses.len() + 1,
                    conjunctions: self.conjunctions.len() + usize::from(is_empty),
                };
                warn!(clause = %clause, "rejected where clause: {err}");
                return Err(err.into());
            }
        }
        self.clauses.push(clause);
        Ok(())
    }

    /// Append every clause of `other`, joined to this filter by `AND`.
    pub fn add_filter(&mut self, other: &Filter) {
        self.add_filter_with(other, Conjunction::default());
    }

    /// Append every clause of `other`. `conjunction` joins the last clause of this filter to the
    /// first clause of `other`; the joins inside `other` are kept as they are.
    pub fn add_filter_with(&mut self, other: &Filter, conjunction: Conjunction) {
        if other.is_empty() {
            return;
        }
        if !self.is_empty() {
            self.conjunctions.push(conjunction);
        }
        self.clauses.extend(other.clauses.iter().cloned());
        self.conjunctions.extend(other.conjunctions.iter().copied());
        debug!(
            added = other.len(),
            clauses = self.clauses.len(),
            conjunction = %conjunction,
            "merged filter"
        );
    }

    /// Distinct table names referenced by the clauses.
    pub fn tables(&self, order: TableOrder) -> Vec<&str> {
        let tables = self.clauses.iter().map(Clause::table).unique();
        match order {
            TableOrder::FirstAppearance => tables.collect(),
            TableOrder::Alphabetical => tables.sorted().collect(),
        }
    }

    /// Clauses with value-equal duplicates removed, keeping the first occurrence.
    pub fn distinct_clauses(&self) -> Vec<&Clause> {
        self.clauses.iter().unique().collect()
    }

    /// The body of the `WHERE` clause: each clause joined by its conjunction.
    pub fn where_clause(&self) -> Result<String> {
        self.check_parity()?;
        let (first, rest) = self
            .clauses
            .split_first()
            .ok_or_else(|| Error::new(ErrorKind::EmptyFilter))?;
        let body = rest
            .iter()
            .zip(&self.conjunctions)
            .fold(first.to_string(), |body, (clause, conjunction)| {
                format!("{body} {conjunction} {clause}")
            });
        Ok(body)
    }

    /// Render the query selecting the identity of every image matched by this filter.
    pub fn render(&self, options: &Options) -> Result<String> {
        let select = Select {
            columns: options.unique_image_clause(),
            tables: self
                .tables(options.table_order)
                .into_iter()
                .map(str::to_owned)
                .collect(),
            conditions: self.where_clause()?,
        };
        debug!(
            clauses = self.clauses.len(),
            tables = select.tables.len(),
            "rendered filter"
        );
        Ok(select.to_string())
    }

    fn check_parity(&self) -> Result<()> {
        let expected = self.clauses.len().saturating_sub(1);
        if self.conjunctions.len() == expected {
            return Ok(());
        }
        Err(ErrorKind::ConjunctionMismatch {
            clauses: self.clauses.len(),
            conjunctions: self.conjunctions.len(),
        }
        .into())
    }
}
