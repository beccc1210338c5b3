//! Pilot-facing aids for the Cessna 182T: weight & balance, flight category,
//! and preflight checklist tracking.
//!
//! The heavy lifting lives in the member crates; this façade re-exports them and
//! wires configuration catalogs and saved profiles into the engine types.

pub mod airframe;
pub mod profiles;

pub use skylane_balance as balance;
pub use skylane_checklist as checklist;
pub use skylane_config as config;
pub use skylane_core as core;
pub use skylane_export as export;
pub use skylane_weather as weather;

pub use skylane_balance::{
    Airframe, Profile, Station, StationWeights, WeightAndBalanceReport, compute_report,
};
pub use skylane_weather::{FlightCategory, classify};

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
