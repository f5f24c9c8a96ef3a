use chumsky::{prelude::*, text::*};

use crate::ast::*;
use crate::parser::utils::*;

use super::comparison::comparison;

pub fn filter() -> impl Psr<Filter> {
    let joined = separator()
        .ignore_then(conjunction())
        .then_ignore(separator())
        .then(comparison());
    whitespace()
        .ignore_then(comparison())
        .then(joined.repeated())
        .then_ignore(whitespace())
        .then_ignore(end())
        .map(|(first, rest)| Filter { first, rest })
}

fn conjunction() -> impl Psr<Conjunction> {
    ident::<char, Simple<char>>()
        .try_map(|word, span| {
            Conjunction::from_keyword(&word)
                .ok_or_else(|| Simple::custom(span, format!("`{word}` is not a conjunction")))
        })
        .labelled("conjunction")
}
