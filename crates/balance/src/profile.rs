//! Named loading profiles and the normalization applied when reading stored ones.
//!
//! Stored records are untrusted: they may come from an older schema that kept a
//! single `frontSeats` weight, may omit stations, or may hold junk values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::station::{Station, StationWeights, sanitize_weight};

/// Field name of the combined front-seat weight used by the first profile schema.
const LEGACY_FRONT_SEATS: &str = "frontSeats";

/// A saved loading configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Profile {
    pub name: String,
    pub weights: StationWeights,
}

impl Profile {
    pub fn new(name: impl Into<String>, weights: StationWeights) -> Self {
        Self {
            name: name.into(),
            weights,
        }
    }

    /// Build a profile from any stored record, current or legacy.
    pub fn from_stored(record: &Value) -> Self {
        let name = record
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let weights = record
            .get("weights")
            .map(StationWeights::from_stored)
            .unwrap_or_default();
        Self { name, weights }
    }
}

impl From<Value> for Profile {
    fn from(value: Value) -> Self {
        Profile::from_stored(&value)
    }
}

impl StationWeights {
    /// Normalize a stored weights record.
    ///
    /// Missing, non-numeric, negative, or non-finite station values become zero.
    /// A non-zero legacy `frontSeats` value is moved to the pilot station and the
    /// co-pilot station is cleared, whatever the record says for either.
    pub fn from_stored(record: &Value) -> Self {
        let Some(fields) = record.as_object() else {
            log::warn!("stored weights are not an object; using an empty load");
            return StationWeights::default();
        };

        let mut weights = StationWeights::default();
        for station in Station::ALL {
            weights.set(station, read_weight(fields, station.id()));
        }

        let legacy_front = fields
            .get(LEGACY_FRONT_SEATS)
            .and_then(Value::as_f64)
            .filter(|front| *front != 0.0);
        if let Some(front) = legacy_front {
            log::info!("migrating legacy {LEGACY_FRONT_SEATS}={front} to the pilot station");
            weights.pilot = sanitize_weight(front);
            weights.co_pilot = 0.0;
        }

        weights
    }
}

fn read_weight(fields: &Map<String, Value>, key: &str) -> f64 {
    match fields.get(key) {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(n)) => n.as_f64().map(sanitize_weight).unwrap_or(0.0),
        Some(other) => {
            log::warn!("discarding non-numeric `{key}` value {other}");
            0.0
        }
    }
}
