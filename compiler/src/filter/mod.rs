mod clause;
mod conjunction;
mod filter;
mod seed;

pub use clause::Clause;
pub use conjunction::Conjunction;
pub use filter::Filter;
pub use seed::FilterSeed;
