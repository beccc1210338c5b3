//! Turning airframe catalog entries into validated [`Airframe`] models.

use skylane_balance::{
    Airframe, AirframeError, AirframeLimits, ForwardLimitTable, LimitPoint, StationSpec,
};
use skylane_config::AirframeConfig;
use thiserror::Error;

/// Errors surfaced when selecting or converting airframes.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("airframe '{0}' not found in catalog")]
    NotFound(String),
    #[error("airframe catalog is empty")]
    EmptyCatalog,
    #[error("airframe '{name}' is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: AirframeError,
    },
}

/// Convert an `AirframeConfig` into the runtime model, validating it on the way.
pub fn from_config(config: &AirframeConfig) -> Result<Airframe, CatalogError> {
    build(config).map_err(|source| CatalogError::Invalid {
        name: config.name.clone(),
        source,
    })
}

fn build(config: &AirframeConfig) -> Result<Airframe, AirframeError> {
    let forward_limits = ForwardLimitTable::new(
        config
            .forward_limits
            .iter()
            .map(|p| LimitPoint {
                weight_lb: p.weight_lb,
                limit_in: p.limit_in,
            })
            .collect(),
    )?;

    let stations = config
        .stations
        .iter()
        .map(|s| {
            let station = s
                .id
                .parse()
                .map_err(|_| AirframeError::UnknownStation(s.id.clone()))?;
            let spec = StationSpec::new(station, s.label.clone(), s.arm_in);
            Ok(match s.max_weight_lb {
                Some(max) => spec.with_max(max),
                None => spec,
            })
        })
        .collect::<Result<Vec<_>, AirframeError>>()?;

    let limits = AirframeLimits {
        empty_weight_lb: config.empty_weight_lb,
        empty_moment_lb_in: config.empty_moment_lb_in,
        max_weight_lb: config.max_weight_lb,
        max_landing_weight_lb: config.max_landing_weight_lb,
        fuel_capacity_gal: config.fuel_capacity_gal,
        total_baggage_max_lb: config.total_baggage_max_lb,
        aft_limit_in: config.aft_limit_in,
    };

    Airframe::new(config.name.clone(), limits, forward_limits, stations)
}

/// Select an airframe from the catalog by optional name, defaulting to the first entry.
pub fn select(configs: &[AirframeConfig], requested: Option<&str>) -> Result<Airframe, CatalogError> {
    let Some(first) = configs.first() else {
        return Err(CatalogError::EmptyCatalog);
    };

    let chosen = if let Some(name) = requested {
        let upper = name.to_uppercase();
        configs
            .iter()
            .find(|cfg| cfg.name.to_uppercase() == upper)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))?
    } else {
        first
    };

    log::debug!("using airframe {}", chosen.name);
    from_config(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use skylane_config::parse_airframe_toml;

    const C182T_TOML: &str = include_str!("../configs/airframes/c182t.toml");

    #[test]
    fn shipped_catalog_matches_builtin_model() {
        let cfg = parse_airframe_toml(C182T_TOML).expect("catalog parses");
        let airframe = from_config(&cfg).expect("catalog is valid");
        assert_eq!(airframe, Airframe::c182t());
    }

    #[test]
    fn unknown_station_id_is_reported() {
        let mut cfg = parse_airframe_toml(C182T_TOML).expect("catalog parses");
        cfg.stations[0].id = "frontSeats".to_string();
        match from_config(&cfg) {
            Err(CatalogError::Invalid { source, .. }) => {
                assert_eq!(source, AirframeError::UnknownStation("frontSeats".into()))
            }
            other => panic!("expected invalid airframe, got {other:?}"),
        }
    }

    #[test]
    fn selection_is_case_insensitive_and_defaults_to_first() {
        let cfg = parse_airframe_toml(C182T_TOML).expect("catalog parses");
        let catalog = vec![cfg];
        assert_eq!(select(&catalog, Some("c182t")).expect("by name").name, "C182T");
        assert_eq!(select(&catalog, None).expect("default").name, "C182T");
        assert!(matches!(
            select(&catalog, Some("PA28")),
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(select(&[], None), Err(CatalogError::EmptyCatalog)));
    }
}
