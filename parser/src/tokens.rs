pub const TABLE_COLUMN_SEPARATOR: char = '.';
pub const VALUE_QUOTE: char = '"';
pub const DECIMAL_POINT: char = '.';
pub const NEGATIVE_SIGN: char = '-';

pub const CONJUNCTION_AND: &str = "AND";
pub const CONJUNCTION_OR: &str = "OR";

pub const KEYWORD_NOT: &str = "NOT";
pub const KEYWORD_LIKE: &str = "LIKE";

pub const COMPARE_EQ: &str = "=";
pub const COMPARE_NEQ: &str = "!=";
pub const COMPARE_NEQ_ANSI: &str = "<>";
pub const COMPARE_GT: &str = ">";
pub const COMPARE_GTE: &str = ">=";
pub const COMPARE_LT: &str = "<";
pub const COMPARE_LTE: &str = "<=";
pub const COMPARE_LIKE: &str = "LIKE";
pub const COMPARE_NOT_LIKE: &str = "NOT LIKE";
