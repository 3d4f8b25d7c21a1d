mod catalog_index;
mod playground;

pub use catalog_index::CatalogIndex;
pub use playground::Playground;
