//! Static airframe reference data: weights, arms, and certified limits.

use serde::Serialize;
use thiserror::Error;

use crate::envelope::Envelope;
use crate::station::Station;

/// One loading station with its moment arm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSpec {
    pub station: Station,
    pub label: String,
    /// Inches aft of the datum.
    pub arm_in: f64,
    /// Structural limit for the station, where the POH publishes one.
    pub max_weight_lb: Option<f64>,
}

impl StationSpec {
    pub fn new(station: Station, label: impl Into<String>, arm_in: f64) -> Self {
        Self {
            station,
            label: label.into(),
            arm_in,
            max_weight_lb: None,
        }
    }

    pub fn with_max(mut self, max_weight_lb: f64) -> Self {
        self.max_weight_lb = Some(max_weight_lb);
        self
    }
}

/// A breakpoint of the forward CG limit curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LimitPoint {
    pub weight_lb: f64,
    pub limit_in: f64,
}

/// Forward CG limit as a function of weight.
///
/// Constant up to the first breakpoint, linear between neighbouring breakpoints,
/// constant past the last one. Breakpoint weights are strictly ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForwardLimitTable {
    points: Vec<LimitPoint>,
}

impl ForwardLimitTable {
    pub fn new(points: Vec<LimitPoint>) -> Result<Self, AirframeError> {
        if points.is_empty() {
            return Err(AirframeError::EmptyForwardLimits);
        }
        if points
            .iter()
            .any(|p| !p.weight_lb.is_finite() || !p.limit_in.is_finite())
        {
            return Err(AirframeError::NonFinite("forward limit breakpoint"));
        }
        if points.windows(2).any(|w| w[1].weight_lb <= w[0].weight_lb) {
            return Err(AirframeError::UnorderedForwardLimits);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[LimitPoint] {
        &self.points
    }

    /// Forward limit at `weight_lb`.
    ///
    /// A weight sitting exactly on a breakpoint returns that breakpoint's limit
    /// verbatim, so corners of the envelope never pick up interpolation error.
    pub fn limit_at(&self, weight_lb: f64) -> f64 {
        let first = self.points[0];
        if weight_lb <= first.weight_lb {
            return first.limit_in;
        }
        for pair in self.points.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if weight_lb == hi.weight_lb {
                return hi.limit_in;
            }
            if weight_lb < hi.weight_lb {
                let fraction = (weight_lb - lo.weight_lb) / (hi.weight_lb - lo.weight_lb);
                return lo.limit_in + fraction * (hi.limit_in - lo.limit_in);
            }
        }
        self.points[self.points.len() - 1].limit_in
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AirframeError {
    #[error("{0} must be a finite number")]
    NonFinite(&'static str),
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("maximum weight {max_lb} lb is below empty weight {empty_lb} lb")]
    MaxBelowEmpty { empty_lb: f64, max_lb: f64 },
    #[error("maximum landing weight {landing_lb} lb exceeds maximum weight {max_lb} lb")]
    LandingAboveMax { landing_lb: f64, max_lb: f64 },
    #[error("forward CG limit table is empty")]
    EmptyForwardLimits,
    #[error("forward CG limit breakpoints must have strictly ascending weights")]
    UnorderedForwardLimits,
    #[error("last forward CG limit breakpoint is at {last_lb} lb, not at maximum weight {max_lb} lb")]
    ForwardLimitsNotAtMaxWeight { last_lb: f64, max_lb: f64 },
    #[error("station `{0}` is not defined")]
    MissingStation(Station),
    #[error("station `{0}` is defined more than once")]
    DuplicateStation(Station),
    #[error("unknown station identifier `{0}`")]
    UnknownStation(String),
}

/// Immutable description of one airframe.
///
/// Stations are stored in [`Station::ALL`] order; [`Airframe::new`] enforces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airframe {
    pub name: String,
    pub empty_weight_lb: f64,
    pub empty_moment_lb_in: f64,
    pub max_weight_lb: f64,
    pub max_landing_weight_lb: f64,
    pub fuel_capacity_gal: f64,
    pub total_baggage_max_lb: f64,
    pub aft_limit_in: f64,
    pub forward_limits: ForwardLimitTable,
    stations: Vec<StationSpec>,
}

/// Scalar limits of an airframe, grouped to keep [`Airframe::new`] readable.
#[derive(Debug, Clone, Copy)]
pub struct AirframeLimits {
    pub empty_weight_lb: f64,
    pub empty_moment_lb_in: f64,
    pub max_weight_lb: f64,
    pub max_landing_weight_lb: f64,
    pub fuel_capacity_gal: f64,
    pub total_baggage_max_lb: f64,
    pub aft_limit_in: f64,
}

impl Airframe {
    /// Assemble and validate an airframe. Stations may be given in any order.
    pub fn new(
        name: impl Into<String>,
        limits: AirframeLimits,
        forward_limits: ForwardLimitTable,
        stations: Vec<StationSpec>,
    ) -> Result<Self, AirframeError> {
        let scalars = [
            ("empty weight", limits.empty_weight_lb),
            ("empty moment", limits.empty_moment_lb_in),
            ("maximum weight", limits.max_weight_lb),
            ("maximum landing weight", limits.max_landing_weight_lb),
            ("fuel capacity", limits.fuel_capacity_gal),
            ("total baggage limit", limits.total_baggage_max_lb),
            ("aft CG limit", limits.aft_limit_in),
        ];
        for (what, value) in scalars {
            if !value.is_finite() {
                return Err(AirframeError::NonFinite(what));
            }
        }
        if limits.empty_weight_lb <= 0.0 {
            return Err(AirframeError::NotPositive("empty weight"));
        }
        if limits.max_weight_lb < limits.empty_weight_lb {
            return Err(AirframeError::MaxBelowEmpty {
                empty_lb: limits.empty_weight_lb,
                max_lb: limits.max_weight_lb,
            });
        }
        if limits.max_landing_weight_lb > limits.max_weight_lb {
            return Err(AirframeError::LandingAboveMax {
                landing_lb: limits.max_landing_weight_lb,
                max_lb: limits.max_weight_lb,
            });
        }

        let last_lb = forward_limits.points()[forward_limits.points().len() - 1].weight_lb;
        if last_lb != limits.max_weight_lb {
            return Err(AirframeError::ForwardLimitsNotAtMaxWeight {
                last_lb,
                max_lb: limits.max_weight_lb,
            });
        }

        let mut ordered: Vec<Option<StationSpec>> = vec![None; Station::COUNT];
        for spec in stations {
            if !spec.arm_in.is_finite() {
                return Err(AirframeError::NonFinite("station arm"));
            }
            let slot = &mut ordered[spec.station.index()];
            if slot.is_some() {
                return Err(AirframeError::DuplicateStation(spec.station));
            }
            *slot = Some(spec);
        }
        let stations = ordered
            .into_iter()
            .zip(Station::ALL)
            .map(|(spec, station)| spec.ok_or(AirframeError::MissingStation(station)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.into(),
            empty_weight_lb: limits.empty_weight_lb,
            empty_moment_lb_in: limits.empty_moment_lb_in,
            max_weight_lb: limits.max_weight_lb,
            max_landing_weight_lb: limits.max_landing_weight_lb,
            fuel_capacity_gal: limits.fuel_capacity_gal,
            total_baggage_max_lb: limits.total_baggage_max_lb,
            aft_limit_in: limits.aft_limit_in,
            forward_limits,
            stations,
        })
    }

    /// Cessna 182T Skylane, standard empty weight from the weighing report.
    pub fn c182t() -> Self {
        let forward_limits = ForwardLimitTable {
            points: vec![
                LimitPoint {
                    weight_lb: 2300.0,
                    limit_in: 35.0,
                },
                LimitPoint {
                    weight_lb: 3100.0,
                    limit_in: 40.5,
                },
            ],
        };
        Self {
            name: "C182T".to_string(),
            empty_weight_lb: 1970.0,
            empty_moment_lb_in: 75_220.0,
            max_weight_lb: 3100.0,
            max_landing_weight_lb: 2950.0,
            fuel_capacity_gal: 87.0,
            total_baggage_max_lb: 200.0,
            aft_limit_in: 47.0,
            forward_limits,
            stations: vec![
                StationSpec::new(Station::Pilot, "Pilot", 41.0),
                StationSpec::new(Station::CoPilot, "Co-Pilot", 41.0),
                StationSpec::new(Station::RearSeats, "Rear Passengers", 74.0),
                StationSpec::new(Station::Fuel, "Fuel", 48.0),
                StationSpec::new(Station::BaggageA, "Baggage A", 97.0).with_max(120.0),
                StationSpec::new(Station::BaggageB, "Baggage B", 115.0).with_max(80.0),
                StationSpec::new(Station::BaggageC, "Baggage C", 135.0).with_max(80.0),
            ],
        }
    }

    pub fn station(&self, station: Station) -> &StationSpec {
        &self.stations[station.index()]
    }

    pub fn stations(&self) -> &[StationSpec] {
        &self.stations
    }

    pub fn arm(&self, station: Station) -> f64 {
        self.station(station).arm_in
    }

    /// Empty-weight CG in inches aft of datum.
    pub fn empty_cg(&self) -> f64 {
        self.empty_moment_lb_in / self.empty_weight_lb
    }

    /// Weight of a full fuel load, in pounds.
    pub fn fuel_capacity_lb(&self) -> f64 {
        skylane_core::units::gal_to_lb(self.fuel_capacity_gal)
    }

    pub fn envelope(&self) -> Envelope<'_> {
        Envelope::new(
            self.empty_weight_lb,
            self.max_weight_lb,
            self.aft_limit_in,
            &self.forward_limits,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> AirframeLimits {
        let c = Airframe::c182t();
        AirframeLimits {
            empty_weight_lb: c.empty_weight_lb,
            empty_moment_lb_in: c.empty_moment_lb_in,
            max_weight_lb: c.max_weight_lb,
            max_landing_weight_lb: c.max_landing_weight_lb,
            fuel_capacity_gal: c.fuel_capacity_gal,
            total_baggage_max_lb: c.total_baggage_max_lb,
            aft_limit_in: c.aft_limit_in,
        }
    }

    #[test]
    fn builtin_airframe_passes_its_own_validation() {
        let builtin = Airframe::c182t();
        let rebuilt = Airframe::new(
            builtin.name.clone(),
            limits(),
            ForwardLimitTable::new(builtin.forward_limits.points().to_vec()).expect("table"),
            builtin.stations().iter().rev().cloned().collect(),
        )
        .expect("valid airframe");
        assert_eq!(rebuilt, builtin);
    }

    #[test]
    fn empty_cg_is_moment_over_weight() {
        let c = Airframe::c182t();
        assert!((c.empty_cg() - 75_220.0 / 1970.0).abs() < 1e-12);
        assert!((c.empty_cg() - 38.18).abs() < 0.01);
        assert_eq!(c.fuel_capacity_lb(), 522.0);
    }

    #[test]
    fn missing_and_duplicate_stations_are_rejected() {
        let table = Airframe::c182t().forward_limits;
        let mut stations = Airframe::c182t().stations().to_vec();
        stations.pop();
        assert_eq!(
            Airframe::new("x", limits(), table.clone(), stations.clone()).unwrap_err(),
            AirframeError::MissingStation(Station::BaggageC)
        );
        stations.push(StationSpec::new(Station::Pilot, "Pilot again", 40.0));
        assert_eq!(
            Airframe::new("x", limits(), table, stations).unwrap_err(),
            AirframeError::DuplicateStation(Station::Pilot)
        );
    }

    #[test]
    fn inconsistent_limits_are_rejected() {
        let table = Airframe::c182t().forward_limits;
        let stations = Airframe::c182t().stations().to_vec();
        let mut bad = limits();
        bad.max_weight_lb = 1500.0;
        assert!(matches!(
            Airframe::new("x", bad, table.clone(), stations.clone()),
            Err(AirframeError::MaxBelowEmpty { .. })
        ));
        let mut bad = limits();
        bad.max_landing_weight_lb = 3200.0;
        assert!(matches!(
            Airframe::new("x", bad, table.clone(), stations.clone()),
            Err(AirframeError::LandingAboveMax { .. })
        ));
        let mut bad = limits();
        bad.aft_limit_in = f64::NAN;
        assert_eq!(
            Airframe::new("x", bad, table, stations).unwrap_err(),
            AirframeError::NonFinite("aft CG limit")
        );
    }

    #[test]
    fn forward_table_must_end_at_maximum_weight() {
        let stations = Airframe::c182t().stations().to_vec();
        let p = |weight_lb, limit_in| LimitPoint {
            weight_lb,
            limit_in,
        };
        let past_max =
            ForwardLimitTable::new(vec![p(2300.0, 35.0), p(3900.0, 40.5)]).expect("table");
        assert_eq!(
            Airframe::new("x", limits(), past_max, stations.clone()).unwrap_err(),
            AirframeError::ForwardLimitsNotAtMaxWeight {
                last_lb: 3900.0,
                max_lb: 3100.0,
            }
        );
        let short_of_max =
            ForwardLimitTable::new(vec![p(2300.0, 35.0), p(3000.0, 40.5)]).expect("table");
        assert!(matches!(
            Airframe::new("x", limits(), short_of_max, stations),
            Err(AirframeError::ForwardLimitsNotAtMaxWeight { .. })
        ));
    }

    #[test]
    fn forward_table_requires_ascending_breakpoints() {
        let p = |weight_lb, limit_in| LimitPoint {
            weight_lb,
            limit_in,
        };
        assert_eq!(
            ForwardLimitTable::new(vec![]).unwrap_err(),
            AirframeError::EmptyForwardLimits
        );
        assert_eq!(
            ForwardLimitTable::new(vec![p(2300.0, 35.0), p(2300.0, 36.0)]).unwrap_err(),
            AirframeError::UnorderedForwardLimits
        );
    }

    #[test]
    fn forward_limit_is_piecewise_linear() {
        let table = Airframe::c182t().forward_limits;
        assert_eq!(table.limit_at(1970.0), 35.0);
        assert_eq!(table.limit_at(2300.0), 35.0);
        assert_eq!(table.limit_at(3100.0), 40.5);
        assert!((table.limit_at(2700.0) - 37.75).abs() < 1e-12);
        assert_eq!(table.limit_at(3500.0), 40.5);
    }

    #[test]
    fn forward_limit_generalizes_to_more_breakpoints() {
        let p = |weight_lb, limit_in| LimitPoint {
            weight_lb,
            limit_in,
        };
        let table =
            ForwardLimitTable::new(vec![p(1000.0, 30.0), p(2000.0, 32.0), p(3000.0, 38.0)])
                .expect("table");
        assert_eq!(table.limit_at(2000.0), 32.0);
        assert!((table.limit_at(1500.0) - 31.0).abs() < 1e-12);
        assert!((table.limit_at(2500.0) - 35.0).abs() < 1e-12);
    }
}
