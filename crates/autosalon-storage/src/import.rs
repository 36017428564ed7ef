//! Catalog import from the brand/models JSON format:
//!
//! ```json
//! [{ "name": "Toyota",
//!    "models": [{ "id": "TOYOTA_CAMRY", "name": "Camry", "class": "D",
//!                 "year-from": 1982, "cyrillic-name": "Камри" }] }]
//! ```
//!
//! The source carries no trims or prices, so every car gets the same
//! placeholder figures.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use autosalon_core::errors::ImportError;
use autosalon_core::traits::ICatalogStore;
use autosalon_core::types::car::{CarStatus, FuelType, NewCar, Transmission};

const DEFAULT_YEAR: i32 = 2020;
const DEFAULT_BODY_TYPE: &str = "unknown";
const DEFAULT_MILEAGE: i64 = 10_000;
const DEFAULT_PRICE: f64 = 1_000_000.0;
const DEFAULT_ENGINE_VOLUME: f64 = 2.0;
const DEFAULT_ENGINE_POWER: i32 = 150;

#[derive(Debug, Clone, Deserialize)]
pub struct BrandRecord {
    pub name: String,
    #[serde(default)]
    pub models: Vec<ModelRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelRecord {
    pub id: Option<String>,
    pub name: String,
    pub class: Option<String>,
    #[serde(rename = "year-from")]
    pub year_from: Option<i32>,
    #[serde(rename = "cyrillic-name")]
    pub cyrillic_name: Option<String>,
}

pub fn parse_catalog(json: &str) -> Result<Vec<BrandRecord>, ImportError> {
    Ok(serde_json::from_str(json)?)
}

/// One car per model, brand name as make.
pub fn to_new_cars(brands: &[BrandRecord]) -> Vec<NewCar> {
    brands
        .iter()
        .flat_map(|brand| brand.models.iter().map(move |model| model_to_car(&brand.name, model)))
        .collect()
}

fn model_to_car(make: &str, model: &ModelRecord) -> NewCar {
    NewCar {
        make: make.to_string(),
        model: model.name.clone(),
        year: model.year_from.unwrap_or(DEFAULT_YEAR),
        body_type: non_blank(model.class.as_deref()).unwrap_or_else(|| DEFAULT_BODY_TYPE.to_string()),
        transmission: Transmission::Automatic,
        seats: 5,
        doors: 4,
        fuel_type: FuelType::Petrol,
        mileage: DEFAULT_MILEAGE,
        price: DEFAULT_PRICE,
        status: CarStatus::Available,
        image_url: None,
        description: non_blank(model.cyrillic_name.as_deref()),
        vin: non_blank(model.id.as_deref()),
        color: None,
        engine_volume: Some(DEFAULT_ENGINE_VOLUME),
        engine_power: Some(DEFAULT_ENGINE_POWER),
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// Read, convert and insert in one transaction. Returns the inserted count.
pub fn import_file(path: &Path, store: &dyn ICatalogStore) -> Result<usize, ImportError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ImportError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let brands = parse_catalog(&raw)?;
    let cars = to_new_cars(&brands);
    if cars.is_empty() {
        warn!(path = %path.display(), "catalog file contains no models");
        return Ok(0);
    }
    let inserted = store.insert_cars(&cars)?;
    info!(path = %path.display(), brands = brands.len(), inserted, "catalog imported");
    Ok(inserted)
}
