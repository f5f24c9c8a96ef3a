use tracing::{debug, trace};

use crate::{errors::Result, filter::Filter, properties::Properties, Options};

/// Renders filters, or filter text, into queries using a fixed set of options.
pub struct QueryBuilder {
    options: Options,
}

impl QueryBuilder {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn from_properties_json(properties_json: &str) -> Result<Self> {
        let properties = Properties::from_json(properties_json)?;
        debug!(image_table = %properties.image_table, "loaded properties");
        Ok(Self::new(Options::from(&properties)))
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn render(&self, filter: &Filter) -> Result<String> {
        let sql = filter.render(&self.options)?;
        trace!(%sql, "built query");
        Ok(sql)
    }

    /// Parse filter text and render it.
    pub fn compile(&self, input: &str) -> Result<String> {
        let filter = Filter::parse(input)?;
        self.render(&filter)
    }
}
