mod catalog;
mod loader;
mod sample;

pub use catalog::Catalog;
pub use loader::{load_catalog_from_json, parse_catalog, LoadError};
pub use sample::SAMPLE_TITLE;
