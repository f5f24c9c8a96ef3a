use std::fmt::{Display, Formatter};

use itertools::Itertools;

/// The flat `SELECT ... FROM ... WHERE ...` statement a filter renders to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Select {
    pub columns: String,
    pub tables: Vec<String>,
    pub conditions: String,
}

impl Display for Select {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SELECT {} FROM {} WHERE {}",
            self.columns,
            self.tables.iter().join(", "),
            self.conditions
        )
    }
}
