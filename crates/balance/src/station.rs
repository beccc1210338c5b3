//! Loading stations and the per-station weight record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Fixed loading stations of the airframe, in calculation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Station {
    Pilot,
    CoPilot,
    RearSeats,
    Fuel,
    BaggageA,
    BaggageB,
    BaggageC,
}

impl Station {
    pub const COUNT: usize = 7;

    pub const ALL: [Station; Station::COUNT] = [
        Station::Pilot,
        Station::CoPilot,
        Station::RearSeats,
        Station::Fuel,
        Station::BaggageA,
        Station::BaggageB,
        Station::BaggageC,
    ];

    /// Stable camelCase identifier used in catalogs and stored profiles.
    pub fn id(self) -> &'static str {
        match self {
            Station::Pilot => "pilot",
            Station::CoPilot => "coPilot",
            Station::RearSeats => "rearSeats",
            Station::Fuel => "fuel",
            Station::BaggageA => "baggageA",
            Station::BaggageB => "baggageB",
            Station::BaggageC => "baggageC",
        }
    }

    /// Position in [`Station::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_baggage(self) -> bool {
        matches!(
            self,
            Station::BaggageA | Station::BaggageB | Station::BaggageC
        )
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Station {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Station::ALL
            .into_iter()
            .find(|station| station.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown station `{s}`"))
    }
}

/// Weight loaded at each station, in pounds.
///
/// Every station is always present; absent data is zero. No upper bound is
/// enforced here, limit violations are reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StationWeights {
    pub pilot: f64,
    pub co_pilot: f64,
    pub rear_seats: f64,
    pub fuel: f64,
    pub baggage_a: f64,
    pub baggage_b: f64,
    pub baggage_c: f64,
}

impl StationWeights {
    pub fn get(&self, station: Station) -> f64 {
        match station {
            Station::Pilot => self.pilot,
            Station::CoPilot => self.co_pilot,
            Station::RearSeats => self.rear_seats,
            Station::Fuel => self.fuel,
            Station::BaggageA => self.baggage_a,
            Station::BaggageB => self.baggage_b,
            Station::BaggageC => self.baggage_c,
        }
    }

    pub fn set(&mut self, station: Station, weight_lb: f64) {
        let slot = match station {
            Station::Pilot => &mut self.pilot,
            Station::CoPilot => &mut self.co_pilot,
            Station::RearSeats => &mut self.rear_seats,
            Station::Fuel => &mut self.fuel,
            Station::BaggageA => &mut self.baggage_a,
            Station::BaggageB => &mut self.baggage_b,
            Station::BaggageC => &mut self.baggage_c,
        };
        *slot = weight_lb;
    }

    /// Builder-style [`StationWeights::set`].
    pub fn with(mut self, station: Station, weight_lb: f64) -> Self {
        self.set(station, weight_lb);
        self
    }

    /// `(station, weight)` pairs in calculation order.
    pub fn iter(&self) -> impl Iterator<Item = (Station, f64)> + '_ {
        Station::ALL.into_iter().map(|station| (station, self.get(station)))
    }

    pub fn baggage_total(&self) -> f64 {
        self.baggage_a + self.baggage_b + self.baggage_c
    }

    /// Sum of all station weights (the useful load).
    pub fn payload_total(&self) -> f64 {
        self.pilot + self.co_pilot + self.rear_seats + self.fuel + self.baggage_total()
    }

    /// Copy with negative or non-finite entries clamped to zero.
    pub fn sanitized(&self) -> Self {
        let mut clean = *self;
        for station in Station::ALL {
            clean.set(station, sanitize_weight(self.get(station)));
        }
        clean
    }
}

/// Clamp a single weight to a usable engine input.
pub fn sanitize_weight(weight_lb: f64) -> f64 {
    if weight_lb.is_finite() && weight_lb > 0.0 {
        weight_lb
    } else {
        0.0
    }
}
