use imgfilter::{Filter, QueryBuilder};
use wasm_bindgen::prelude::*;

/// Compile filter text to a query using the given properties JSON.
#[wasm_bindgen]
pub fn compile(properties_json: &str, input: &str) -> Result<String, String> {
    let builder = QueryBuilder::from_properties_json(properties_json).map_err(|e| e.to_string())?;
    builder.compile(input).map_err(|e| e.to_string())
}

/// Render only the `WHERE` body of the filter text, in canonical form.
#[wasm_bindgen]
pub fn normalize(input: &str) -> Result<String, String> {
    Filter::parse(input)
        .and_then(|filter| filter.where_clause())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROPERTIES: &str = r#"{"image_table": "per_image", "image_id": "ImageNumber"}"#;

    #[test]
    fn test_compile() {
        assert_eq!(
            compile(PROPERTIES, r#"per_image.plate = "P1""#),
            Ok(r#"SELECT per_image.ImageNumber FROM per_image WHERE per_image.plate = "P1""#
                .to_string())
        );
        assert_eq!(
            compile("{}", r#"per_image.plate = "P1""#).map_err(|e| e.starts_with("Properties")),
            Err(true)
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(
            normalize(r#"A.a   =  1 or A.b != "x""#),
            Ok(r#"A.a = "1" OR A.b != "x""#.to_string())
        );
        assert!(normalize("A.a").is_err());
    }
}
