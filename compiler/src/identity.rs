use itertools::Itertools;

use crate::properties::Properties;

/// Supplies the `SELECT` target that uniquely names an image.
pub trait ImageIdentity {
    /// The identity column(s) of `image_table`, qualified and comma separated.
    fn unique_image_clause(&self, image_table: &str) -> String;
}

impl<F> ImageIdentity for F
where
    F: Fn(&str) -> String,
{
    fn unique_image_clause(&self, image_table: &str) -> String {
        self(image_table)
    }
}

/// Identity made of the image id column, preceded by a table id column when images are keyed
/// per table (a composite key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyColumns {
    pub table_id: Option<String>,
    pub image_id: String,
}

impl KeyColumns {
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.table_id
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.image_id.as_str()))
    }
}

impl ImageIdentity for KeyColumns {
    fn unique_image_clause(&self, image_table: &str) -> String {
        self.columns()
            .map(|column| format!("{image_table}.{column}"))
            .join(", ")
    }
}

impl From<&Properties> for KeyColumns {
    fn from(properties: &Properties) -> Self {
        KeyColumns {
            table_id: properties.table_id.clone(),
            image_id: properties.image_id.clone(),
        }
    }
}
