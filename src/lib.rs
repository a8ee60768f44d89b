//! Single-interval kinematics and fuel calculator.
//!
//! The calculator crates stay pure; this facade sequences the velocity, distance,
//! and fuel updates for one interval and re-exports the supporting crates so a
//! front-end only needs a single dependency.

pub mod interval;

pub use interval::{IntervalError, IntervalInputs, IntervalReport, run_interval};
pub use kinematics_config as config;
pub use kinematics_core as quantities;
pub use kinematics_export as export;
pub use kinematics_update as update;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
