//! Flight category classification from raw METAR/TAF text.
//!
//! The classifier looks at two things only: the first visibility group and the
//! lowest broken or overcast layer. Its matching rules are kept identical to the
//! category badge pilots already know from the web dashboard, including which
//! group counts as "the first visibility group".

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const METERS_PER_STATUTE_MILE: f64 = 1609.34;

/// Reported as visibility for `9999` (10 km or more).
const TEN_KM_OR_MORE_SM: f64 = 7.0;
const CAVOK_VISIBILITY_SM: f64 = 10.0;

/// Placeholders upstream fetchers store instead of a report.
const UNAVAILABLE_MARKERS: [&str; 2] = ["N/A", "Error loading data."];

// Statute-mile group (`1/2SM`, `1 1/2SM`, bare `SM`) or a four-digit metre group.
// The metre alternative must not be followed by another digit; the regex crate has
// no lookahead so `first_visibility_group` enforces that.
static VISIBILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"P?(?:[0-9]+\s)?(?:[0-9]/[0-9])?SM|[0-9]{4}").expect("visibility pattern")
});

static CEILING_LAYER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(BKN|OVC)([0-9]{3})").expect("cloud layer pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FlightCategory {
    Vfr,
    Mvfr,
    Ifr,
    Lifr,
}

impl FlightCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            FlightCategory::Vfr => "VFR",
            FlightCategory::Mvfr => "MVFR",
            FlightCategory::Ifr => "IFR",
            FlightCategory::Lifr => "LIFR",
        }
    }
}

impl fmt::Display for FlightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "VFR" => Ok(FlightCategory::Vfr),
            "MVFR" => Ok(FlightCategory::Mvfr),
            "IFR" => Ok(FlightCategory::Ifr),
            "LIFR" => Ok(FlightCategory::Lifr),
            other => Err(format!("unknown flight category `{other}`")),
        }
    }
}

/// What the classifier extracted from a report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Observation {
    /// `None` when no usable visibility group was found.
    pub visibility_sm: Option<f64>,
    /// Lowest BKN/OVC base; `None` means no ceiling.
    pub ceiling_ft: Option<f64>,
}

impl Observation {
    /// Category from the more restrictive of visibility and ceiling.
    pub fn category(&self) -> FlightCategory {
        let vis_below = |limit: f64| self.visibility_sm.is_some_and(|v| v < limit);
        let ceiling_below = |limit: f64| self.ceiling_ft.is_some_and(|c| c < limit);

        if vis_below(1.0) || ceiling_below(500.0) {
            FlightCategory::Lifr
        } else if vis_below(3.0) || ceiling_below(1000.0) {
            FlightCategory::Ifr
        } else if self.visibility_sm.is_some_and(|v| v <= 5.0)
            || self.ceiling_ft.is_some_and(|c| c <= 3000.0)
        {
            FlightCategory::Mvfr
        } else {
            FlightCategory::Vfr
        }
    }
}

/// Classify a raw report. `None` means the category is unknown, never "VFR".
pub fn classify(report: &str) -> Option<FlightCategory> {
    observe(report).map(|obs| obs.category())
}

/// Extract visibility and ceiling, or `None` for an empty or placeholder report.
pub fn observe(report: &str) -> Option<Observation> {
    if report.is_empty() || UNAVAILABLE_MARKERS.contains(&report) {
        return None;
    }

    let visibility_sm = if report.contains("CAVOK") {
        Some(CAVOK_VISIBILITY_SM)
    } else {
        first_visibility_group(report)
            .map(parse_visibility)
            .filter(|v| v.is_finite())
    };

    let ceiling_ft = CEILING_LAYER
        .captures_iter(report)
        .filter_map(|caps| caps[2].parse::<u32>().ok())
        .map(|hundreds| f64::from(hundreds) * 100.0)
        .reduce(f64::min);

    Some(Observation {
        visibility_sm,
        ceiling_ft,
    })
}

fn first_visibility_group(report: &str) -> Option<&str> {
    let mut start = 0;
    while let Some(m) = VISIBILITY.find_at(report, start) {
        let group = m.as_str();
        let digit_follows = report[m.end()..].starts_with(|c: char| c.is_ascii_digit());
        if group.ends_with("SM") || !digit_follows {
            return Some(group);
        }
        // metre alternative ran into a longer digit run; retry one character later
        start = m.start() + 1;
    }
    None
}

/// Statute miles for a matched group. NaN or infinity means unusable.
fn parse_visibility(group: &str) -> f64 {
    let Some(stripped) = group.strip_suffix("SM") else {
        return if group == "9999" {
            TEN_KM_OR_MORE_SM
        } else {
            number(group) / METERS_PER_STATUTE_MILE
        };
    };

    let vis = stripped.trim();
    if let Some(plus) = vis.strip_prefix('P') {
        leading_float(plus)
    } else if let Some((whole, fraction)) = vis.split_once(' ') {
        number(whole) + ratio(fraction)
    } else if vis.contains('/') {
        ratio(vis)
    } else {
        leading_float(vis)
    }
}

fn ratio(fraction: &str) -> f64 {
    let mut parts = fraction.split('/');
    let num = parts.next().map(number).unwrap_or(f64::NAN);
    let den = parts.next().map(number).unwrap_or(f64::NAN);
    num / den
}

/// Whole-string numeric conversion: blank is zero, anything non-numeric is NaN.
fn number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse().unwrap_or(f64::NAN)
}

/// Longest leading decimal number, NaN when there is none.
fn leading_float(s: &str) -> f64 {
    let s = s.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_placeholder_reports_are_unknown() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("N/A"), None);
        assert_eq!(classify("Error loading data."), None);
    }

    #[test]
    fn low_visibility_and_ceiling_is_lifr() {
        let metar = "KXXX 011200Z 00000KT 1/2SM FG BKN003 12/12 A2992";
        assert_eq!(classify(metar), Some(FlightCategory::Lifr));
    }

    #[test]
    fn ten_km_visibility_without_ceiling_is_vfr() {
        let obs = observe("EGLL 9999 FEW040 SCT250").expect("observation");
        assert_eq!(obs.visibility_sm, Some(7.0));
        assert_eq!(obs.ceiling_ft, None);
        assert_eq!(obs.category(), FlightCategory::Vfr);
    }

    #[test]
    fn cavok_means_ten_miles_and_no_ceiling() {
        let obs = observe("LSZH CAVOK").expect("observation");
        assert_eq!(obs.visibility_sm, Some(10.0));
        assert_eq!(obs.category(), FlightCategory::Vfr);
    }

    #[test]
    fn whole_and_fractional_miles() {
        let obs = observe("K 1 1/2SM BKN020").expect("observation");
        assert_eq!(obs.visibility_sm, Some(1.5));
        assert_eq!(obs.category(), FlightCategory::Ifr);
        assert_eq!(classify("K 3/4SM"), Some(FlightCategory::Lifr));
    }

    #[test]
    fn metre_groups_convert_to_statute_miles() {
        let obs = observe("X 3000 BKN050").expect("observation");
        let vis = obs.visibility_sm.expect("visibility");
        assert!((vis - 3000.0 / 1609.34).abs() < 1e-12);
        assert_eq!(obs.category(), FlightCategory::Ifr);
        // 8000 m is just under five miles
        assert_eq!(classify("X 8000 SCT040"), Some(FlightCategory::Mvfr));
    }

    #[test]
    fn four_digit_group_must_not_continue_into_more_digits() {
        assert_eq!(first_visibility_group("X 12345 BKN100"), Some("2345"));
        assert_eq!(first_visibility_group("X 123456"), Some("3456"));
        assert_eq!(first_visibility_group("X 123"), None);
    }

    #[test]
    fn lowest_broken_or_overcast_layer_is_the_ceiling() {
        let obs = observe("X 9999 FEW005 BKN040 OVC012").expect("observation");
        assert_eq!(obs.ceiling_ft, Some(1200.0));
        assert_eq!(obs.category(), FlightCategory::Mvfr);
    }

    #[test]
    fn boundaries_follow_category_table() {
        let at = |vis: Option<f64>, ceiling: Option<f64>| {
            Observation {
                visibility_sm: vis,
                ceiling_ft: ceiling,
            }
            .category()
        };
        assert_eq!(at(Some(1.0), None), FlightCategory::Ifr);
        assert_eq!(at(None, Some(500.0)), FlightCategory::Ifr);
        assert_eq!(at(Some(3.0), None), FlightCategory::Mvfr);
        assert_eq!(at(None, Some(1000.0)), FlightCategory::Mvfr);
        assert_eq!(at(Some(5.0), None), FlightCategory::Mvfr);
        assert_eq!(at(Some(5.01), Some(3100.0)), FlightCategory::Vfr);
        assert_eq!(at(None, Some(3000.0)), FlightCategory::Mvfr);
        assert_eq!(at(None, None), FlightCategory::Vfr);
    }

    #[test]
    fn unparseable_mile_group_leaves_visibility_unknown() {
        // `SM` with nothing usable in front of it matches as an empty group
        let obs = observe("10SM SKC").expect("observation");
        assert_eq!(obs.visibility_sm, None);
        assert_eq!(obs.category(), FlightCategory::Vfr);
    }

    #[test]
    fn category_names_round_trip() {
        for cat in [
            FlightCategory::Vfr,
            FlightCategory::Mvfr,
            FlightCategory::Ifr,
            FlightCategory::Lifr,
        ] {
            assert_eq!(cat.to_string().parse::<FlightCategory>(), Ok(cat));
        }
    }

    #[test]
    fn leading_float_stops_at_first_non_numeric() {
        assert_eq!(leading_float("1/2"), 1.0);
        assert_eq!(leading_float("2.5x"), 2.5);
        assert!(leading_float("").is_nan());
    }
}
