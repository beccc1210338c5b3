//! Configuration models and loaders for Skylane catalogs.
//!
//! Catalogs are plain records; turning them into validated runtime models is the
//! job of the crates that own those models.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Airframe definition parsed from an airframe catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct AirframeConfig {
    pub name: String,
    pub empty_weight_lb: f64,
    pub empty_moment_lb_in: f64,
    pub max_weight_lb: f64,
    pub max_landing_weight_lb: f64,
    pub fuel_capacity_gal: f64,
    pub total_baggage_max_lb: f64,
    pub aft_limit_in: f64,
    pub forward_limits: Vec<ForwardLimitConfig>,
    pub stations: Vec<StationConfig>,
}

/// One breakpoint of the weight-dependent forward CG limit.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ForwardLimitConfig {
    pub weight_lb: f64,
    pub limit_in: f64,
}

/// Loading station entry. `id` uses the camelCase station identifiers
/// (`pilot`, `coPilot`, `rearSeats`, `fuel`, `baggageA`, `baggageB`, `baggageC`).
#[derive(Debug, Deserialize, Clone)]
pub struct StationConfig {
    pub id: String,
    pub label: String,
    pub arm_in: f64,
    #[serde(default)]
    pub max_weight_lb: Option<f64>,
}

/// Checklist definition parsed from a checklist catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct ChecklistConfig {
    pub id: String,
    pub title: String,
    pub sections: Vec<ChecklistSectionConfig>,
    #[serde(default)]
    pub source_notes: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChecklistSectionConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub notes: Vec<String>,
    pub items: Vec<ChecklistItemConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChecklistItemConfig {
    pub id: String,
    pub label: String,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load airframe definitions from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_airframes<P: AsRef<Path>>(path: P) -> Result<Vec<AirframeConfig>, ConfigError> {
    let airframes: Vec<AirframeConfig> = load_records(path.as_ref())?;
    log::debug!(
        "loaded {} airframe(s) from {}",
        airframes.len(),
        path.as_ref().display()
    );
    Ok(airframes)
}

/// Load checklist definitions from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_checklists<P: AsRef<Path>>(path: P) -> Result<Vec<ChecklistConfig>, ConfigError> {
    let checklists: Vec<ChecklistConfig> = load_records(path.as_ref())?;
    log::debug!(
        "loaded {} checklist(s) from {}",
        checklists.len(),
        path.as_ref().display()
    );
    Ok(checklists)
}

/// Parse a YAML checklist catalog held in memory.
pub fn parse_checklists_yaml(contents: &str) -> Result<Vec<ChecklistConfig>, ConfigError> {
    Ok(serde_yaml::from_str(contents)?)
}

/// Parse a single TOML airframe record held in memory.
pub fn parse_airframe_toml(contents: &str) -> Result<AirframeConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
