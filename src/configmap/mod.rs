pub mod catalog;
pub mod session;
pub mod types;

#[allow(unused_imports)]
pub use catalog::ConfigMapCatalog;
#[allow(unused_imports)]
pub use session::{EditSession, ViewMode};
#[allow(unused_imports)]
pub use types::{ConfigMap, ConfigMapVersion};

#[cfg(test)]
mod tests;
