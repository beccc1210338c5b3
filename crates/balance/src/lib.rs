//! Weight & balance computation for a single-engine airframe.
//!
//! The crate is leaf-first: [`airframe`] holds immutable reference data,
//! [`envelope`] classifies a (weight, CG) point against it, and [`report`]
//! derives the full loading picture from station weights.

pub mod airframe;
pub mod envelope;
pub mod profile;
pub mod report;
pub mod station;

pub use airframe::{
    Airframe, AirframeError, AirframeLimits, ForwardLimitTable, LimitPoint, StationSpec,
};
pub use envelope::Envelope;
pub use profile::Profile;
pub use report::{StationMoments, WeightAndBalanceReport, compute_report, compute_report_lb};
pub use station::{Station, StationWeights, sanitize_weight};
