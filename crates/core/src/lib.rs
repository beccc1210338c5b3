//! Core units, constants, and shared primitives for the Skylane workspace.
//!
//! Every calculation in the workspace runs in pounds, inches, and pound-inches.
//! Kilograms and gallons only exist at the edges, where a pilot types or reads them.

/// Conversion constants.
pub mod constants {
    /// Pounds per kilogram.
    pub const KG_TO_LB: f64 = 2.20462;
    /// Pounds per US gallon of avgas (100LL, standard planning figure).
    pub const GAL_TO_LB: f64 = 6.0;
}

/// Unit conversion helpers.
///
/// The plain conversions never round. The `display_*` and `user_*` helpers round to a
/// whole unit and are meant for presentation or data entry only.
pub mod units {
    use std::fmt;
    use std::str::FromStr;

    use serde::{Deserialize, Serialize};

    use super::constants::{GAL_TO_LB, KG_TO_LB};

    /// Mass unit a pilot enters weights in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum MassUnit {
        #[default]
        #[serde(alias = "lb")]
        Pounds,
        #[serde(alias = "kg")]
        Kilograms,
    }

    impl MassUnit {
        /// Short label used next to values.
        pub fn label(self) -> &'static str {
            match self {
                MassUnit::Pounds => "lb",
                MassUnit::Kilograms => "kg",
            }
        }
    }

    impl fmt::Display for MassUnit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.label())
        }
    }

    impl FromStr for MassUnit {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.trim().to_ascii_lowercase().as_str() {
                "lb" | "lbs" | "pounds" => Ok(MassUnit::Pounds),
                "kg" | "kgs" | "kilograms" => Ok(MassUnit::Kilograms),
                other => Err(format!("unknown mass unit `{other}`")),
            }
        }
    }

    /// Convert kilograms to pounds.
    #[inline]
    pub fn kg_to_lb(v: f64) -> f64 {
        v * KG_TO_LB
    }

    /// Convert pounds to kilograms.
    #[inline]
    pub fn lb_to_kg(v: f64) -> f64 {
        v / KG_TO_LB
    }

    /// Convert US gallons of fuel to pounds.
    #[inline]
    pub fn gal_to_lb(v: f64) -> f64 {
        v * GAL_TO_LB
    }

    /// Convert pounds of fuel to US gallons.
    #[inline]
    pub fn lb_to_gal(v: f64) -> f64 {
        v / GAL_TO_LB
    }

    /// Round half toward positive infinity, the way cockpit displays have always
    /// rounded these values (`2.5 -> 3`, `-2.5 -> -2`).
    #[inline]
    pub fn round_half_up(v: f64) -> f64 {
        let r = v.floor();
        if v - r >= 0.5 {
            r + 1.0
        } else {
            r
        }
    }

    /// Whole-unit rendering of a pound value in the requested unit.
    pub fn display_mass(lb: f64, unit: MassUnit) -> f64 {
        match unit {
            MassUnit::Pounds => round_half_up(lb),
            MassUnit::Kilograms => round_half_up(lb_to_kg(lb)),
        }
    }

    /// Whole-gallon rendering of a fuel load given in pounds.
    pub fn display_fuel_gal(lb: f64) -> f64 {
        round_half_up(lb_to_gal(lb))
    }

    /// Normalize a pilot-entered weight to whole pounds.
    ///
    /// The entry is truncated to a whole number in its own unit first, then
    /// kilograms are converted and rounded. Negative and non-finite input
    /// collapses to zero so the result can be fed straight into the engine.
    pub fn user_weight_to_lb(value: f64, unit: MassUnit) -> f64 {
        let whole = whole_entry(value);
        match unit {
            MassUnit::Pounds => whole,
            MassUnit::Kilograms => round_half_up(kg_to_lb(whole)),
        }
    }

    /// Normalize a pilot-entered fuel quantity to whole pounds; the gallon
    /// figure is truncated like any other entry.
    pub fn user_fuel_gal_to_lb(gallons: f64) -> f64 {
        round_half_up(gal_to_lb(whole_entry(gallons)))
    }

    fn whole_entry(value: f64) -> f64 {
        if !value.is_finite() || value <= 0.0 {
            return 0.0;
        }
        value.trunc()
    }
}
