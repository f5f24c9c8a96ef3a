pub fn invalid_properties_json(reason: &str) -> String {
    format!("Properties input is not valid JSON: {reason}")
}

pub fn invalid_properties_fields(reason: &str) -> String {
    format!("Properties input has missing or invalid fields: {reason}")
}

pub fn empty_property(name: &str) -> String {
    format!("Property `{name}` must not be empty.")
}

pub fn unknown_conjunction(word: &str) -> String {
    format!("`{word}` is not a conjunction. Expected `AND` or `OR`.")
}

pub fn unknown_table_order(name: &str) -> String {
    format!("Unknown table order `{name}`. Expected `first_appearance` or `alphabetical`.")
}
