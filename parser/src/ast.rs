use crate::tokens::{CONJUNCTION_AND, CONJUNCTION_OR};

/// A flat sequence of comparisons joined left to right by conjunctions. Grouping is not part of
/// the grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub first: Comparison,
    pub rest: Vec<(Conjunction, Comparison)>,
}

impl Filter {
    pub fn comparisons(&self) -> impl Iterator<Item = &Comparison> {
        std::iter::once(&self.first).chain(self.rest.iter().map(|(_, c)| c))
    }

    pub fn conjunctions(&self) -> impl Iterator<Item = Conjunction> + '_ {
        self.rest.iter().map(|(conjunction, _)| *conjunction)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub table: String,
    pub column: String,
    /// Canonical spelling of the operator, e.g. `NOT LIKE` regardless of the input's casing.
    pub comparator: String,
    /// Quoted strings are stored without their quotes. Numbers are stored as written.
    pub value: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Conjunction {
    #[default]
    And,
    Or,
}

impl Conjunction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conjunction::And => CONJUNCTION_AND,
            Conjunction::Or => CONJUNCTION_OR,
        }
    }

    /// Case-insensitive lookup of a conjunction keyword.
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case(CONJUNCTION_AND) {
            Some(Conjunction::And)
        } else if word.eq_ignore_ascii_case(CONJUNCTION_OR) {
            Some(Conjunction::Or)
        } else {
            None
        }
    }
}
