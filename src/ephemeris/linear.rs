//! Deterministic provider: each body moves at a constant daily rate.
//!
//! Used for tests, benches and offline checks where a real ephemeris is
//! unavailable. Earth and the South Node default to the opposition of the Sun
//! and North Node when they are not configured explicitly.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use super::{CalculationMode, Ephemeris};
use crate::quantizer::normalize_degrees;
use crate::types::Planet;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Errors from [`LinearEphemeris`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LinearEphemerisError {
    /// The body has no configured motion and cannot be derived.
    #[error("No motion configured for {0}")]
    UnknownBody(Planet),
}

/// Longitude at the epoch plus a constant rate.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Motion {
    base: f64,
    rate: f64,
}

/// Constant-rate ephemeris anchored at an epoch.
#[derive(Debug, Clone)]
pub struct LinearEphemeris {
    epoch: DateTime<Utc>,
    bodies: BTreeMap<Planet, Motion>,
    ayanamsa: f64,
}

impl LinearEphemeris {
    /// Empty ephemeris anchored at `epoch`.
    pub fn new(epoch: DateTime<Utc>) -> Self {
        Self {
            epoch,
            bodies: BTreeMap::new(),
            ayanamsa: 0.0,
        }
    }

    /// Place `planet` at `base` degrees at the epoch, moving `rate` degrees per day.
    pub fn with_body(mut self, planet: Planet, base: f64, rate: f64) -> Self {
        self.bodies.insert(planet, Motion { base, rate });
        self
    }

    /// Place `planet` at a fixed longitude.
    pub fn with_fixed(self, planet: Planet, longitude: f64) -> Self {
        self.with_body(planet, longitude, 0.0)
    }

    /// Offset subtracted in [`CalculationMode::Sidereal`].
    pub fn with_ayanamsa(mut self, degrees: f64) -> Self {
        self.ayanamsa = degrees;
        self
    }

    /// The anchor instant.
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    fn tropical(&self, planet: Planet, days: f64) -> Result<f64, LinearEphemerisError> {
        if let Some(m) = self.bodies.get(&planet) {
            return Ok(m.base + m.rate * days);
        }
        match planet {
            Planet::Earth => Ok(self.tropical(Planet::Sun, days)? + 180.0),
            Planet::SouthNode => Ok(self.tropical(Planet::NorthNode, days)? + 180.0),
            other => Err(LinearEphemerisError::UnknownBody(other)),
        }
    }
}

impl Ephemeris for LinearEphemeris {
    type Error = LinearEphemerisError;

    fn longitude(
        &self,
        planet: Planet,
        instant: DateTime<Utc>,
        mode: CalculationMode,
    ) -> Result<f64, Self::Error> {
        let days = (instant - self.epoch).num_milliseconds() as f64 / MILLIS_PER_DAY;
        let tropical = self.tropical(planet, days)?;
        let longitude = match mode {
            CalculationMode::Tropical => tropical,
            CalculationMode::Sidereal => tropical - self.ayanamsa,
        };
        Ok(normalize_degrees(longitude))
    }
}
