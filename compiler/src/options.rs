use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    errors::{msg, Error, ErrorKind},
    identity::{ImageIdentity, KeyColumns},
    properties::Properties,
};

/// Order of the table names listed after `FROM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableOrder {
    /// The order in which tables are first referenced by the filter's clauses.
    #[default]
    FirstAppearance,
    Alphabetical,
}

impl FromStr for TableOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_appearance" => Ok(TableOrder::FirstAppearance),
            "alphabetical" => Ok(TableOrder::Alphabetical),
            _ => Err(ErrorKind::InvalidProperties(msg::unknown_table_order(s)).into()),
        }
    }
}

/// Everything a filter needs to render a full query.
pub struct Options {
    /// The table holding one row per image.
    pub image_table: String,
    pub identity: Box<dyn ImageIdentity + Send + Sync>,
    pub table_order: TableOrder,
}

impl Options {
    pub fn new(
        image_table: impl Into<String>,
        identity: impl ImageIdentity + Send + Sync + 'static,
    ) -> Self {
        Self {
            image_table: image_table.into(),
            identity: Box::new(identity),
            table_order: TableOrder::default(),
        }
    }

    pub fn with_table_order(mut self, table_order: TableOrder) -> Self {
        self.table_order = table_order;
        self
    }

    pub fn unique_image_clause(&self) -> String {
        self.identity.unique_image_clause(&self.image_table)
    }
}

impl From<&Properties> for Options {
    fn from(properties: &Properties) -> Self {
        Options::new(&properties.image_table, KeyColumns::from(properties))
            .with_table_order(properties.table_order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_from_str() {
        assert_eq!("alphabetical".parse::<TableOrder>(), Ok(TableOrder::Alphabetical));
        assert_eq!(
            "first_appearance".parse::<TableOrder>(),
            Ok(TableOrder::FirstAppearance)
        );
        assert!("random".parse::<TableOrder>().is_err());
    }

    #[test]
    fn test_custom_identity() {
        let options = Options::new("per_image", |table: &str| format!("DISTINCT {table}.id"));
        assert_eq!(options.unique_image_clause(), "DISTINCT per_image.id");
        assert_eq!(options.table_order, TableOrder::FirstAppearance);
    }

    #[test]
    fn test_from_properties() {
        let properties = Properties {
            image_table: "per_image".to_string(),
            image_id: "ImageNumber".to_string(),
            table_id: Some("TableNumber".to_string()),
            table_order: TableOrder::Alphabetical,
        };
        let options = Options::from(&properties);
        assert_eq!(options.image_table, "per_image");
        assert_eq!(
            options.unique_image_clause(),
            "per_image.TableNumber, per_image.ImageNumber"
        );
        assert_eq!(options.table_order, TableOrder::Alphabetical);
    }
}
