pub mod catalog;
pub mod types;

#[allow(unused_imports)]
pub use catalog::{ActivityFilter, RuleSet};
#[allow(unused_imports)]
pub use types::{Geometry, Rule};
