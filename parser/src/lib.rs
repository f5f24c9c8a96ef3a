mod parser;

pub mod ast;
pub mod tokens;

use chumsky::{
    error::{Simple, SimpleReason},
    Parser,
};
use parser::filter;

/// Parse filter text such as `per_image.plate = "P1" AND per_image.count > 10`.
pub fn parse(input: &str) -> Result<ast::Filter, String> {
    filter()
        .parse(input)
        .map_err(|errors| describe(input, errors))
}

fn describe(input: &str, errors: Vec<Simple<char>>) -> String {
    let input_len = input.chars().count();
    errors
        .into_iter()
        .next()
        .map(|e| {
            let position = e.span().start;
            match (e.reason(), e.found()) {
                (SimpleReason::Custom(reason), _) => {
                    format!("{reason} at position {position} of filter text.")
                }
                (_, Some(c)) => format!("Unexpected `{c}` at position {position} of filter text."),
                (_, None) if position >= input_len => {
                    format!("Unexpected end of filter text at position {position}.")
                }
                (_, None) => format!("Invalid filter text at position {position}."),
            }
        })
        .unwrap_or_else(|| "Invalid filter text.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_errors() {
        assert!(parse("").is_err());
        assert!(parse("A.a").is_err());
        assert!(parse("A.a =").is_err());
        assert!(parse("a = \"1\"").is_err());
        assert!(parse("A.a = \"1\" AND").is_err());
        assert!(parse("A.a = \"1\" XOR B.b = \"2\"").is_err());
        assert!(parse("A.a = \"1").is_err());
    }

    #[test]
    fn test_parse_error_message() {
        assert_eq!(
            parse("A.a ? \"1\""),
            Err("Unexpected `?` at position 4 of filter text.".to_string())
        );
        assert_eq!(
            parse("A.a ="),
            Err("Unexpected end of filter text at position 5.".to_string())
        );
    }

    #[test]
    fn test_error_inside_text_is_not_reported_as_end() {
        let err = parse(r#"A.a IS "x""#).unwrap_err();
        assert!(err.contains("at position 4 of filter text"), "{err}");
        assert!(!err.contains("end of filter text"), "{err}");

        assert_eq!(
            parse("A.a = 1e3"),
            Err("Unexpected `e` at position 7 of filter text.".to_string())
        );

        let err = parse(r#"A.a = "1" XOR B.b = "2""#).unwrap_err();
        assert!(err.contains("at position 10 of filter text"), "{err}");
        assert!(!err.contains("end of filter text"), "{err}");
    }
}
