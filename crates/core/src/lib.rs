//! Core units, constants, and conversion helpers for the Kinematics Calculator workspace.

/// Fixed conversion constants. Quantities are SI unless the name says otherwise.
pub mod constants {
    /// Metres per kilometre.
    pub const M_PER_KM: f64 = 1_000.0;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    /// Multiply a km/h speed by this to obtain m/s.
    pub const KMH_TO_MS: f64 = M_PER_KM / SECONDS_PER_HOUR;
    /// Multiply a m/s speed by this to obtain km/h.
    pub const MS_TO_KMH: f64 = SECONDS_PER_HOUR / M_PER_KM;
}

/// Unit conversion helpers. Every pair uses the same constants in both directions.
pub mod units {
    use super::constants::{KMH_TO_MS, M_PER_KM, MS_TO_KMH};

    /// Convert kilometres per hour to metres per second.
    #[inline]
    pub fn kmh_to_ms(v: f64) -> f64 {
        v * KMH_TO_MS
    }

    /// Convert metres per second to kilometres per hour.
    #[inline]
    pub fn ms_to_kmh(v: f64) -> f64 {
        v * MS_TO_KMH
    }

    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * M_PER_KM
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / M_PER_KM
    }
}

/// Time helpers.
pub mod time {
    use super::constants::SECONDS_PER_HOUR;

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / SECONDS_PER_HOUR
    }

    /// Convert hours to seconds.
    #[inline]
    pub fn hours_to_seconds(hours: f64) -> f64 {
        hours * SECONDS_PER_HOUR
    }
}
