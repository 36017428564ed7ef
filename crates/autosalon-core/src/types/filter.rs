//! Sparse, user-supplied catalog filter criteria.

use serde::{Deserialize, Serialize};

/// Every field is independently optional; `None` means "no constraint".
/// Blank strings are normalised to `None` by [`FilterCriteria::normalized`],
/// so absent and empty inputs behave identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the make.
    pub make: Option<String>,
    /// Case-insensitive substring of the model.
    pub model: Option<String>,
    pub body_type: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound.
    pub max_price: Option<f64>,
    pub year: Option<i32>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_body_type(mut self, body_type: impl Into<String>) -> Self {
        self.body_type = Some(body_type.into());
        self
    }

    pub fn with_transmission(mut self, transmission: impl Into<String>) -> Self {
        self.transmission = Some(transmission.into());
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.fuel_type = Some(fuel_type.into());
        self
    }

    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Trim text fields, drop blank ones and non-finite prices.
    pub fn normalized(self) -> Self {
        Self {
            make: non_blank(self.make),
            model: non_blank(self.model),
            body_type: non_blank(self.body_type),
            transmission: non_blank(self.transmission),
            fuel_type: non_blank(self.fuel_type),
            min_price: self.min_price.filter(|p| p.is_finite()),
            max_price: self.max_price.filter(|p| p.is_finite()),
            year: self.year,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
