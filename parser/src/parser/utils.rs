use chumsky::{prelude::*, text::*};

/// `Psr` is an abbreviation for "Parser". This is abbreviated because it is used in many places,
/// and we don't want it to conflict with Chumsky's `Parser` trait.
///
/// It would be easier to write as follows:
///
/// ```rs
/// pub type Psr<T> = Parser<char, T, Error = Simple<char>> + Clone + 'static;
/// ```
///
/// However, we can't do that without [trait aliases][1].
///
/// [1]: https://github.com/rust-lang/rust/issues/41517
pub trait Psr<T>: Parser<char, T, Error = Simple<char>> + Clone + 'static {}
impl<S, T> Psr<T> for S where S: Parser<char, T, Error = Simple<char>> + Clone + 'static {}

pub fn exactly(s: &str) -> impl Psr<String> {
    just(s.chars().collect::<Vec<char>>()).collect::<String>()
}

/// Matches a whole identifier-like word, ignoring ASCII case.
pub fn keyword_ci(word: &'static str) -> impl Psr<()> {
    ident::<char, Simple<char>>().try_map(move |found, span| {
        if found.eq_ignore_ascii_case(word) {
            Ok(())
        } else {
            Err(Simple::custom(
                span,
                format!("Expected `{word}` but found `{found}`"),
            ))
        }
    })
}

/// At least one whitespace character. Unlike `whitespace()`, this never matches nothing.
pub fn separator() -> impl Psr<()> {
    filter(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1)
        .ignored()
}

pub fn quoted(quote: char) -> impl Psr<String> {
    just(quote)
        .ignore_then(filter(move |c: &char| *c != quote).repeated())
        .then_ignore(just(quote))
        .collect::<String>()
}

/// An optionally negative decimal. Leading zeros are kept as written.
pub fn number() -> impl Psr<String> {
    use crate::tokens::{DECIMAL_POINT, NEGATIVE_SIGN};
    just(NEGATIVE_SIGN)
        .or_not()
        .chain::<char, _, _>(digits::<char, Simple<char>>(10))
        .chain::<char, _, _>(
            just(DECIMAL_POINT)
                .chain(digits::<char, Simple<char>>(10))
                .or_not()
                .flatten(),
        )
        .collect::<String>()
        .labelled("number")
}
