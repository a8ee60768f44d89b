//! Unit-safe single-interval updates for velocity, distance, and fuel mass.
//!
//! Every operation is a pure function of its arguments. Values are plain `f64`; the
//! unit of each quantity is carried by the parameter name (`_kmh`, `_m_s2`, `_s`,
//! `_km`, `_kg`, `_kg_s`).

use kinematics_core::time::seconds_to_hours;
use kinematics_core::units::{km_to_m, kmh_to_ms, m_to_km, ms_to_kmh};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures raised by the interval updates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// An input is non-finite, or a non-negative quantity is negative.
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// The requested burn consumes more fuel than remains.
    #[error(
        "fuel depleted: burn requires {required_kg:.3} kg but only {available_kg:.3} kg remain"
    )]
    FuelDepletion { required_kg: f64, available_kg: f64 },
}

/// Distance integration model for an interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceModel {
    /// Hold the pre-update velocity for the whole interval (`d = d0 + v t`).
    #[default]
    Linear,
    /// Integrate under constant acceleration (`d = d0 + v t + a t^2 / 2`).
    ConstantAcceleration,
}

impl DistanceModel {
    /// Advance a distance with this model. `Linear` ignores the acceleration.
    pub fn advance(
        self,
        initial_distance_km: f64,
        velocity_kmh: f64,
        acceleration_m_s2: f64,
        duration_s: f64,
    ) -> Result<f64, KinematicsError> {
        match self {
            DistanceModel::Linear => update_distance(initial_distance_km, velocity_kmh, duration_s),
            DistanceModel::ConstantAcceleration => update_distance_kinematic(
                initial_distance_km,
                velocity_kmh,
                acceleration_m_s2,
                duration_s,
            ),
        }
    }
}

/// Apply a constant acceleration to a km/h velocity over `duration_s` seconds.
///
/// The velocity is converted to m/s, integrated (`v + a t`) and converted back. The
/// result may be negative when a deceleration carries the body past zero.
pub fn update_velocity(
    velocity_kmh: f64,
    acceleration_m_s2: f64,
    duration_s: f64,
) -> Result<f64, KinematicsError> {
    finite("velocity_kmh", velocity_kmh)?;
    finite("acceleration_m_s2", acceleration_m_s2)?;
    non_negative("duration_s", duration_s)?;

    let velocity_m_s = kmh_to_ms(velocity_kmh) + acceleration_m_s2 * duration_s;
    finite_result("velocity_kmh", ms_to_kmh(velocity_m_s))
}

/// Advance a distance assuming `velocity_kmh` holds for the whole interval.
///
/// This is the linear model: acceleration during the interval is not accounted for.
/// Use [`update_distance_kinematic`] when the constant-acceleration integral is wanted.
pub fn update_distance(
    initial_distance_km: f64,
    velocity_kmh: f64,
    duration_s: f64,
) -> Result<f64, KinematicsError> {
    non_negative("initial_distance_km", initial_distance_km)?;
    finite("velocity_kmh", velocity_kmh)?;
    non_negative("duration_s", duration_s)?;

    distance_result(initial_distance_km + velocity_kmh * seconds_to_hours(duration_s))
}

/// Advance a distance under constant acceleration: `d0 + v0 t + a t^2 / 2`.
pub fn update_distance_kinematic(
    initial_distance_km: f64,
    velocity_kmh: f64,
    acceleration_m_s2: f64,
    duration_s: f64,
) -> Result<f64, KinematicsError> {
    non_negative("initial_distance_km", initial_distance_km)?;
    finite("velocity_kmh", velocity_kmh)?;
    finite("acceleration_m_s2", acceleration_m_s2)?;
    non_negative("duration_s", duration_s)?;

    let t = duration_s;
    let travelled_m = kmh_to_ms(velocity_kmh) * t + 0.5 * acceleration_m_s2 * t * t;
    distance_result(m_to_km(km_to_m(initial_distance_km) + travelled_m))
}

/// Deplete `remaining_fuel_kg` at `burn_rate_kg_s` for `duration_s` seconds.
///
/// Never returns a negative mass: a burn that outlasts the tank fails with
/// [`KinematicsError::FuelDepletion`]. Burning exactly to empty yields `0.0`.
pub fn update_fuel(
    remaining_fuel_kg: f64,
    burn_rate_kg_s: f64,
    duration_s: f64,
) -> Result<f64, KinematicsError> {
    non_negative("remaining_fuel_kg", remaining_fuel_kg)?;
    non_negative("burn_rate_kg_s", burn_rate_kg_s)?;
    non_negative("duration_s", duration_s)?;

    let burned_kg = finite_result("burned_kg", burn_rate_kg_s * duration_s)?;
    if burned_kg > remaining_fuel_kg {
        return Err(KinematicsError::FuelDepletion {
            required_kg: burned_kg,
            available_kg: remaining_fuel_kg,
        });
    }
    Ok(remaining_fuel_kg - burned_kg)
}

/// Seconds of burn available before the tank empties, or `None` when nothing burns.
pub fn time_to_depletion(
    remaining_fuel_kg: f64,
    burn_rate_kg_s: f64,
) -> Result<Option<f64>, KinematicsError> {
    non_negative("remaining_fuel_kg", remaining_fuel_kg)?;
    non_negative("burn_rate_kg_s", burn_rate_kg_s)?;

    if burn_rate_kg_s == 0.0 {
        return Ok(None);
    }
    let burn_time_s = finite_result("burn_time_s", remaining_fuel_kg / burn_rate_kg_s)?;
    Ok(Some(burn_time_s))
}

fn finite(name: &'static str, value: f64) -> Result<f64, KinematicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinematicsError::InvalidArgument {
            name,
            value,
            reason: "must be a finite number",
        })
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<f64, KinematicsError> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(KinematicsError::InvalidArgument {
            name,
            value,
            reason: "must not be negative",
        });
    }
    Ok(value)
}

fn finite_result(name: &'static str, value: f64) -> Result<f64, KinematicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinematicsError::InvalidArgument {
            name,
            value,
            reason: "update overflows the f64 range",
        })
    }
}

fn distance_result(distance_km: f64) -> Result<f64, KinematicsError> {
    finite_result("distance_km", distance_km)?;
    if distance_km < 0.0 {
        return Err(KinematicsError::InvalidArgument {
            name: "distance_km",
            value: distance_km,
            reason: "velocity would carry the distance below zero",
        });
    }
    Ok(distance_km)
}
