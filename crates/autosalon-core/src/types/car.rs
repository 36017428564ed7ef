//! The catalog record and its enumerated attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A catalog car. Serialized with the stored column names, which is the wire
/// shape the front-end reads (`type`, `fuel_type`, `image_url`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub body_type: String,
    pub transmission: Transmission,
    pub seats: i32,
    pub doors: i32,
    pub fuel_type: FuelType,
    pub mileage: i64,
    pub price: f64,
    pub status: CarStatus,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub engine_volume: Option<f64>,
    pub engine_power: Option<i32>,
}

/// A car about to be inserted by catalog ingestion. The store assigns `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCar {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub body_type: String,
    pub transmission: Transmission,
    pub seats: i32,
    pub doors: i32,
    pub fuel_type: FuelType,
    pub mileage: i64,
    pub price: f64,
    pub status: CarStatus,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub engine_volume: Option<f64>,
    pub engine_power: Option<i32>,
}

impl NewCar {
    pub fn into_car(self, id: i64) -> Car {
        Car {
            id,
            make: self.make,
            model: self.model,
            year: self.year,
            body_type: self.body_type,
            transmission: self.transmission,
            seats: self.seats,
            doors: self.doors,
            fuel_type: self.fuel_type,
            mileage: self.mileage,
            price: self.price,
            status: self.status,
            image_url: self.image_url,
            description: self.description,
            vin: self.vin,
            color: self.color,
            engine_volume: self.engine_volume,
            engine_power: self.engine_power,
        }
    }
}

/// Returned when a stored or supplied string is not a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal, { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(ParseEnumError { kind: $kind, value: other.to_string() }),
                }
            }
        }
    };
}

string_enum!(
    /// Gearbox kind.
    Transmission, "transmission", {
        Manual => "manual",
        Automatic => "automatic",
    }
);

string_enum!(
    FuelType, "fuel type", {
        Petrol => "petrol",
        Diesel => "diesel",
        Hybrid => "hybrid",
        Electric => "electric",
    }
);

string_enum!(
    /// Availability lifecycle. Moves forward only:
    /// `available -> reserved` on order placement, `-> sold` on fulfilment.
    CarStatus, "car status", {
        Available => "available",
        Reserved => "reserved",
        Sold => "sold",
    }
);
