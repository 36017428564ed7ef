//! Paged Query Executor — count, then fetch the requested window.

use std::sync::Arc;

use tracing::debug;

use crate::errors::StorageError;
use crate::query::{PageWindow, Predicate};
use crate::traits::ICatalogStore;
use crate::types::car::Car;
use crate::types::page::{PageRequest, PageResult};

/// Runs one predicate twice: once for the total, once for the page.
///
/// The two reads are not wrapped in a transaction. A write landing between
/// them can leave `total` out of step with `items`.
pub struct PagedQueryExecutor {
    store: Arc<dyn ICatalogStore>,
}

impl PagedQueryExecutor {
    pub fn new(store: Arc<dyn ICatalogStore>) -> Self {
        Self { store }
    }

    pub fn execute(
        &self,
        predicate: &Predicate,
        request: PageRequest,
    ) -> Result<PageResult<Car>, StorageError> {
        let total = self.store.count_cars(predicate)?;
        let window = PageWindow::for_request(request);

        // Nothing to fetch past the end; skip the second round trip.
        let items = if window.offset >= total {
            Vec::new()
        } else {
            self.store.fetch_cars(predicate, window)?
        };

        debug!(
            total,
            page = request.page(),
            limit = request.limit(),
            returned = items.len(),
            "paged query executed"
        );

        Ok(PageResult {
            items,
            total,
            page: request.page(),
            limit: request.limit(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::storage::test_helpers::InMemoryStore;
    use crate::types::car::{CarStatus, FuelType, NewCar, Transmission};
    use crate::types::filter::FilterCriteria;

    fn car(make: &str) -> NewCar {
        NewCar {
            make: make.into(),
            model: "M".into(),
            year: 2020,
            body_type: "sedan".into(),
            transmission: Transmission::Manual,
            seats: 5,
            doors: 4,
            fuel_type: FuelType::Diesel,
            mileage: 1,
            price: 10.0,
            status: CarStatus::Available,
            image_url: None,
            description: None,
            vin: None,
            color: None,
            engine_volume: None,
            engine_power: None,
        }
    }

    fn executor() -> PagedQueryExecutor {
        PagedQueryExecutor::new(Arc::new(InMemoryStore::with_cars(vec![
            car("A"),
            car("B"),
            car("C"),
        ])))
    }

    #[test]
    fn pages_split_three_matches() {
        let exec = executor();
        let p = Predicate::for_listing(&FilterCriteria::default());

        let first = exec.execute(&p, PageRequest::new(1, 2)).unwrap();
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.total, 3);

        let second = exec.execute(&p, PageRequest::new(2, 2)).unwrap();
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.total, 3);
        assert_eq!(second.items[0].make, "C");
    }

    #[test]
    fn page_past_end_keeps_true_total() {
        let result = executor()
            .execute(&Predicate::for_listing(&FilterCriteria::default()), PageRequest::new(100, 2))
            .unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.total, 3);
        assert_eq!(result.page, 100);
    }

    #[test]
    fn store_failure_is_not_an_empty_page() {
        let store = Arc::new(InMemoryStore::with_cars(vec![car("A")]));
        store.set_failing(true);
        let exec = PagedQueryExecutor::new(store);
        assert!(exec.execute(&Predicate::new(), PageRequest::default()).is_err());
    }
}
