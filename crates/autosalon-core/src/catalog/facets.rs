//! Facet Enumerator — distinct filterable values across the whole catalog.

use std::sync::Arc;

use crate::errors::StorageError;
use crate::query::CarColumn;
use crate::traits::ICatalogStore;
use crate::types::facets::Facets;

pub struct FacetEnumerator {
    store: Arc<dyn ICatalogStore>,
}

impl FacetEnumerator {
    pub fn new(store: Arc<dyn ICatalogStore>) -> Self {
        Self { store }
    }

    /// Facets are global: sold cars contribute, no criteria refine them.
    pub fn enumerate(&self) -> Result<Facets, StorageError> {
        Ok(Facets {
            makes: self.text_facet(CarColumn::Make)?,
            types: self.text_facet(CarColumn::BodyType)?,
            transmissions: self.text_facet(CarColumn::Transmission)?,
            years: years_descending(self.store.distinct_years()?),
        })
    }

    fn text_facet(&self, column: CarColumn) -> Result<Vec<String>, StorageError> {
        Ok(sorted_distinct(self.store.distinct_text_values(column)?))
    }
}

/// Drop blanks, sort ascending, dedup.
fn sorted_distinct(values: Vec<String>) -> Vec<String> {
    let mut values: Vec<String> = values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect();
    values.sort();
    values.dedup();
    values
}

fn years_descending(mut years: Vec<i32>) -> Vec<i32> {
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
