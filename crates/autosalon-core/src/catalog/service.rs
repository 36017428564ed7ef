//! `CatalogService` — the entry point the HTTP layer calls for catalog reads.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::config::CatalogConfig;
use crate::errors::CatalogError;
use crate::query::Predicate;
use crate::traits::ICatalogStore;
use crate::types::car::Car;
use crate::types::facets::Facets;
use crate::types::filter::FilterCriteria;
use crate::types::page::{PageRequest, PageResult};

use super::executor::PagedQueryExecutor;
use super::facets::FacetEnumerator;

/// Stateless apart from the injected store handle. Cheap to clone.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ICatalogStore>,
    config: CatalogConfig,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ICatalogStore>, config: CatalogConfig) -> Self {
        Self { store, config }
    }

    /// Non-sold cars matching every supplied criterion, one page at a time.
    #[instrument(skip(self), level = "debug")]
    pub fn list_cars(
        &self,
        criteria: &FilterCriteria,
        request: PageRequest,
    ) -> Result<PageResult<Car>, CatalogError> {
        let predicate = Predicate::for_listing(criteria);
        let request = request.capped(self.config.max_page_size);
        Ok(PagedQueryExecutor::new(Arc::clone(&self.store)).execute(&predicate, request)?)
    }

    /// Any car by id, whatever its status.
    pub fn get_car(&self, id: i64) -> Result<Car, CatalogError> {
        self.store
            .get_car(id)?
            .ok_or_else(|| CatalogError::CarNotFound { id: id.to_string() })
    }

    /// Lookup by the raw path segment. A non-numeric id cannot name a car.
    pub fn get_car_by_id(&self, raw_id: &str) -> Result<Car, CatalogError> {
        match raw_id.trim().parse::<i64>() {
            Ok(id) => self.get_car(id),
            Err(_) => {
                debug!(raw_id, "non-numeric car id");
                Err(CatalogError::CarNotFound {
                    id: raw_id.to_string(),
                })
            }
        }
    }

    /// First page of the unfiltered listing at the featured size.
    pub fn featured_cars(&self) -> Result<PageResult<Car>, CatalogError> {
        self.list_cars(
            &FilterCriteria::default(),
            PageRequest::first(self.config.featured_limit),
        )
    }

    pub fn facets(&self) -> Result<Facets, CatalogError> {
        Ok(FacetEnumerator::new(Arc::clone(&self.store)).enumerate()?)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }
}
