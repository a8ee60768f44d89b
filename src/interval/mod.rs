//! Interval orchestrator that sequences the velocity, distance, and fuel updates.

use kinematics_config::ScenarioConfig;
use kinematics_update::{self as update, DistanceModel, KinematicsError};
use serde::Serialize;
use tracing::{debug, warn};

/// Inputs for one interval; identical to a loaded scenario.
pub type IntervalInputs = ScenarioConfig;

/// Updated values after one interval.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntervalReport {
    pub velocity_kmh: f64,
    pub distance_km: f64,
    pub remaining_fuel_kg: f64,
    pub distance_model: DistanceModel,
    /// Burn time left at the post-interval fuel mass; `None` when nothing burns.
    pub burn_time_remaining_s: Option<f64>,
}

/// Top-level interval error, tagged with the update that failed.
#[derive(Debug, thiserror::Error)]
pub enum IntervalError {
    #[error("velocity update failed: {0}")]
    Velocity(#[source] KinematicsError),
    #[error("distance update failed: {0}")]
    Distance(#[source] KinematicsError),
    #[error("fuel update failed: {0}")]
    Fuel(#[source] KinematicsError),
}

impl IntervalError {
    /// The underlying calculator error.
    pub fn kinematics(&self) -> &KinematicsError {
        match self {
            IntervalError::Velocity(err) | IntervalError::Distance(err) | IntervalError::Fuel(err) => {
                err
            }
        }
    }

    /// True when the interval failed because the burn outlasted the fuel.
    pub fn is_fuel_depletion(&self) -> bool {
        matches!(self.kinematics(), KinematicsError::FuelDepletion { .. })
    }
}

/// Run velocity, distance, and fuel updates for one interval.
///
/// The distance update uses the pre-interval velocity under [`DistanceModel::Linear`].
/// The first failing update aborts the run; no partial report is returned.
pub fn run_interval(inputs: &IntervalInputs) -> Result<IntervalReport, IntervalError> {
    let velocity_kmh = update::update_velocity(
        inputs.velocity_kmh,
        inputs.acceleration_m_s2,
        inputs.duration_s,
    )
    .map_err(IntervalError::Velocity)?;
    debug!(
        from_kmh = inputs.velocity_kmh,
        to_kmh = velocity_kmh,
        "velocity updated"
    );

    let distance_km = inputs
        .distance_model
        .advance(
            inputs.initial_distance_km,
            inputs.velocity_kmh,
            inputs.acceleration_m_s2,
            inputs.duration_s,
        )
        .map_err(IntervalError::Distance)?;
    debug!(
        model = ?inputs.distance_model,
        from_km = inputs.initial_distance_km,
        to_km = distance_km,
        "distance updated"
    );

    let remaining_fuel_kg = match update::update_fuel(
        inputs.remaining_fuel_kg,
        inputs.burn_rate_kg_s,
        inputs.duration_s,
    ) {
        Ok(fuel) => fuel,
        Err(err) => {
            if let KinematicsError::FuelDepletion {
                required_kg,
                available_kg,
            } = &err
            {
                warn!(required_kg, available_kg, "burn outlasts remaining fuel");
            }
            return Err(IntervalError::Fuel(err));
        }
    };
    debug!(
        from_kg = inputs.remaining_fuel_kg,
        to_kg = remaining_fuel_kg,
        "fuel updated"
    );

    let burn_time_remaining_s = update::time_to_depletion(remaining_fuel_kg, inputs.burn_rate_kg_s)
        .map_err(IntervalError::Fuel)?;

    Ok(IntervalReport {
        velocity_kmh,
        distance_km,
        remaining_fuel_kg,
        distance_model: inputs.distance_model,
        burn_time_remaining_s,
    })
}
