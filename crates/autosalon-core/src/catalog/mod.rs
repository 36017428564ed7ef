//! Catalog read path: paged listing, lookup by id, featured cars, facets.

pub mod executor;
pub mod facets;
pub mod service;

pub use executor::PagedQueryExecutor;
pub use facets::FacetEnumerator;
pub use service::CatalogService;
