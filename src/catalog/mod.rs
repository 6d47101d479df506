mod persistence;
mod provider;
mod snapshot;

pub use persistence::{load_catalog, load_prices, load_snapshot};
pub use provider::CatalogProvider;
pub use snapshot::CatalogSnapshot;
