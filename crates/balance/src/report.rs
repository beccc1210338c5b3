//! Weight & balance report: totals, landing and zero-fuel states, and verdicts.

use serde::Serialize;
use skylane_core::units::gal_to_lb;

use crate::airframe::Airframe;
use crate::station::{Station, StationWeights};

/// Moments in pound-inches, one per station plus the empty airframe.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMoments {
    pub empty: f64,
    pub pilot: f64,
    pub co_pilot: f64,
    pub rear_seats: f64,
    pub fuel: f64,
    pub baggage_a: f64,
    pub baggage_b: f64,
    pub baggage_c: f64,
    pub total: f64,
}

impl StationMoments {
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
}

/// Complete loading picture for one set of inputs. Weights in pounds, CGs in
/// inches aft of datum.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightAndBalanceReport {
    pub total_weight: f64,
    pub total_moment: f64,
    pub total_cg: f64,
    pub fuel_burn_weight: f64,
    pub landing_weight: f64,
    pub landing_cg: f64,
    pub zero_fuel_weight: f64,
    pub zero_fuel_cg: f64,
    pub total_baggage_weight: f64,
    pub moments: StationMoments,
    pub weights: StationWeights,
    /// Takeoff (weight, CG) inside the certified envelope.
    pub is_within_limits: bool,
    pub is_landing_weight_ok: bool,
    /// Aggregate and per-compartment baggage within limits.
    pub is_baggage_ok: bool,
    pub over_limit_stations: Vec<Station>,
}

impl WeightAndBalanceReport {
    pub fn is_total_weight_ok(&self, airframe: &Airframe) -> bool {
        self.total_weight <= airframe.max_weight_lb
    }

    /// Everything the pilot has to act on, in one flag.
    pub fn is_safe(&self) -> bool {
        self.is_within_limits
            && self.is_landing_weight_ok
            && self.is_baggage_ok
            && self.over_limit_stations.is_empty()
    }
}

/// Compute the report with the planned fuel burn given in US gallons.
pub fn compute_report(
    airframe: &Airframe,
    weights: &StationWeights,
    planned_fuel_burn_gal: f64,
) -> WeightAndBalanceReport {
    compute_report_lb(airframe, weights, gal_to_lb(planned_fuel_burn_gal))
}

/// Compute the report with the planned fuel burn already in pounds.
///
/// Inputs are not validated; clamp them with [`StationWeights::sanitized`] first.
/// Every CG falls back to a fixed value rather than dividing by a non-positive weight.
pub fn compute_report_lb(
    airframe: &Airframe,
    weights: &StationWeights,
    fuel_burn_lb: f64,
) -> WeightAndBalanceReport {
    let moment = |station: Station| weights.get(station) * airframe.arm(station);
    let mut moments = StationMoments {
        empty: airframe.empty_moment_lb_in,
        pilot: moment(Station::Pilot),
        co_pilot: moment(Station::CoPilot),
        rear_seats: moment(Station::RearSeats),
        fuel: moment(Station::Fuel),
        baggage_a: moment(Station::BaggageA),
        baggage_b: moment(Station::BaggageB),
        baggage_c: moment(Station::BaggageC),
        total: 0.0,
    };
    // same summation order on every call keeps reports bit-identical
    let total_moment = moments.empty
        + moments.pilot
        + moments.co_pilot
        + moments.rear_seats
        + moments.fuel
        + moments.baggage_a
        + moments.baggage_b
        + moments.baggage_c;
    moments.total = total_moment;

    let total_baggage_weight = weights.baggage_total();
    let total_weight = airframe.empty_weight_lb + weights.payload_total();
    let total_cg = cg_or(total_moment, total_weight, airframe.empty_cg());

    let fuel_burn_moment = fuel_burn_lb * airframe.arm(Station::Fuel);
    let landing_weight = total_weight - fuel_burn_lb;
    let landing_cg = cg_or(total_moment - fuel_burn_moment, landing_weight, 0.0);

    let zero_fuel_weight = total_weight - weights.fuel;
    let zero_fuel_cg = cg_or(total_moment - moments.fuel, zero_fuel_weight, 0.0);

    let over_limit_stations = over_limit_stations(airframe, weights);
    let is_baggage_ok = total_baggage_weight <= airframe.total_baggage_max_lb
        && !over_limit_stations.iter().any(|s| s.is_baggage());

    WeightAndBalanceReport {
        total_weight,
        total_moment,
        total_cg,
        fuel_burn_weight: fuel_burn_lb,
        landing_weight,
        landing_cg,
        zero_fuel_weight,
        zero_fuel_cg,
        total_baggage_weight,
        moments,
        weights: *weights,
        is_within_limits: airframe.envelope().contains(total_weight, total_cg),
        is_landing_weight_ok: landing_weight <= airframe.max_landing_weight_lb,
        is_baggage_ok,
        over_limit_stations,
    }
}

fn cg_or(moment: f64, weight: f64, fallback: f64) -> f64 {
    if weight > 0.0 {
        let cg = moment / weight;
        if cg.is_finite() {
            return cg;
        }
    }
    fallback
}

/// Stations loaded beyond their own structural limit. Fuel counts against tank capacity.
fn over_limit_stations(airframe: &Airframe, weights: &StationWeights) -> Vec<Station> {
    airframe
        .stations()
        .iter()
        .filter(|spec| {
            let limit = match spec.station {
                Station::Fuel => Some(airframe.fuel_capacity_lb()),
                _ => spec.max_weight_lb,
            };
            limit.is_some_and(|max| weights.get(spec.station) > max)
        })
        .map(|spec| spec.station)
        .collect()
}
