use chumsky::{prelude::*, text::*};

use crate::ast::*;
use crate::parser::utils::*;
use crate::tokens::*;

pub fn comparison() -> impl Psr<Comparison> {
    ident::<char, Simple<char>>()
        .then_ignore(just(TABLE_COLUMN_SEPARATOR))
        .then(ident())
        .then_ignore(whitespace())
        .then(comparator())
        .then_ignore(whitespace())
        .then(value())
        .map(|(((table, column), comparator), value)| Comparison {
            table,
            column,
            comparator,
            value,
        })
        .labelled("comparison")
}

fn comparator() -> impl Psr<String> {
    choice((
        // Keywords
        keyword_ci(KEYWORD_NOT)
            .then_ignore(whitespace())
            .then_ignore(keyword_ci(KEYWORD_LIKE))
            .to(COMPARE_NOT_LIKE.to_string()),
        keyword_ci(KEYWORD_LIKE).to(COMPARE_LIKE.to_string()),
        // Two character
        exactly(COMPARE_NEQ_ANSI),
        exactly(COMPARE_NEQ),
        exactly(COMPARE_GTE),
        exactly(COMPARE_LTE),
        // One character
        exactly(COMPARE_EQ),
        exactly(COMPARE_GT),
        exactly(COMPARE_LT),
    ))
    .labelled("comparator")
}

fn value() -> impl Psr<String> {
    quoted(VALUE_QUOTE).or(number()).labelled("value")
}
