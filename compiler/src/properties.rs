use serde::{Deserialize, Serialize};
use serde_json::error::Category;

use crate::{
    errors::{msg, ErrorKind, Result},
    options::TableOrder,
};

/// Read-only settings describing the image database, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    /// Table with one row per image.
    pub image_table: String,
    /// Column holding the image number.
    pub image_id: String,
    /// Column holding the table number, when images are keyed by (table, image).
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub table_order: TableOrder,
}

impl Properties {
    pub fn from_json(json: &str) -> Result<Self> {
        let properties = serde_json::from_str::<Properties>(json).map_err(|e| {
            let reason = e.to_string();
            ErrorKind::InvalidProperties(match e.classify() {
                Category::Data => msg::invalid_properties_fields(&reason),
                Category::Io | Category::Syntax | Category::Eof => {
                    msg::invalid_properties_json(&reason)
                }
            })
        })?;
        properties.validate()?;
        Ok(properties)
    }

    fn validate(&self) -> Result<()> {
        let required = [
            ("image_table", Some(&self.image_table)),
            ("image_id", Some(&self.image_id)),
            ("table_id", self.table_id.as_ref()),
        ];
        for (name, value) in required {
            if value.is_some_and(|v| v.trim().is_empty()) {
                return Err(ErrorKind::InvalidProperties(msg::empty_property(name)).into());
            }
        }
        Ok(())
    }
}
