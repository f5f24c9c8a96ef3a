mod comparison;
mod filter;
mod utils;

pub use filter::filter;
