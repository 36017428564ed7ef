//! Raw `/api/cars` query parameters and their permissive coercion.
//!
//! Everything arrives as text. Unparseable numbers are treated as absent
//! rather than rejected, so `?minPrice=abc` lists as if no lower bound
//! was given and `?page=x` falls back to the first page.

use serde::{Deserialize, Serialize};

use super::filter::FilterCriteria;
use super::page::PageRequest;
use crate::config::CatalogConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarListQuery {
    pub make: Option<String>,
    pub model: Option<String>,
    #[serde(rename = "type")]
    pub body_type: Option<String>,
    pub transmission: Option<String>,
    #[serde(rename = "fuelType")]
    pub fuel_type: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub year: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl CarListQuery {
    /// Build from raw `key=value` pairs. A key may repeat (two form
    /// controls for one filter); the first non-blank value wins and
    /// unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "make" => &mut query.make,
                "model" => &mut query.model,
                "type" => &mut query.body_type,
                "transmission" => &mut query.transmission,
                "fuelType" => &mut query.fuel_type,
                "minPrice" => &mut query.min_price,
                "maxPrice" => &mut query.max_price,
                "year" => &mut query.year,
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            let value = value.into();
            if slot.is_none() && !value.trim().is_empty() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            make: self.make.clone(),
            model: self.model.clone(),
            body_type: self.body_type.clone(),
            transmission: self.transmission.clone(),
            fuel_type: self.fuel_type.clone(),
            min_price: parse_number(self.min_price.as_deref()),
            max_price: parse_number(self.max_price.as_deref()),
            year: parse_number(self.year.as_deref()),
        }
        .normalized()
    }

    pub fn page_request(&self, config: &CatalogConfig) -> PageRequest {
        let page = parse_number::<i64>(self.page.as_deref()).unwrap_or(1);
        let limit = parse_number::<i64>(self.limit.as_deref()).unwrap_or(0);
        PageRequest::with_fallback(page, limit, config.default_page_size)
            .capped(config.max_page_size)
    }
}

fn parse_number<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}
