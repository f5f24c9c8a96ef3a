//! Compose boolean filters over the tables of an image database and render them as queries that
//! select the identity of every matching image.
//!
//! ```
//! use imgfilter::{Conjunction, Filter, KeyColumns, Options};
//!
//! let mut filter = Filter::with_clause("per_image", "plate", "=", "P1");
//! filter.add_column_with("per_well", "treated", "=", 1, Conjunction::Or);
//!
//! let options = Options::new(
//!     "per_image",
//!     KeyColumns { table_id: None, image_id: "ImageNumber".to_string() },
//! );
//! assert_eq!(
//!     filter.render(&options).unwrap(),
//!     r#"SELECT per_image.ImageNumber FROM per_image, per_well WHERE per_image.plate = "P1" OR per_well.treated = "1""#,
//! );
//! ```

mod compiler;
mod errors;
mod filter;
mod identity;
mod options;
mod properties;
mod sql;

pub use compiler::QueryBuilder;
pub use errors::{Error, ErrorKind, Result};
pub use filter::{Clause, Conjunction, Filter, FilterSeed};
pub use identity::{ImageIdentity, KeyColumns};
pub use options::{Options, TableOrder};
pub use properties::Properties;
