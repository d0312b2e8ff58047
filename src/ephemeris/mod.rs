//! The ephemeris seam.
//!
//! Longitude computation is external to this crate. Anything that can answer
//! "where is this body at this instant" implements [`Ephemeris`]; the chart
//! code only ever calls through the trait.

pub mod cached;
pub mod linear;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::types::Planet;

pub use cached::{CacheConfig, CacheStats, CachedEphemeris};
pub use linear::{LinearEphemeris, LinearEphemerisError};

/// Zodiac used by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CalculationMode {
    /// Longitudes measured from the vernal equinox.
    #[default]
    Tropical,
    /// Longitudes corrected for precession.
    Sidereal,
}

/// Source of geocentric ecliptic longitudes.
///
/// Implementations may be non-reentrant; wrap them in [`CachedEphemeris`]
/// to share one provider across threads.
pub trait Ephemeris {
    /// Provider failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Longitude of `planet` at `instant`, in degrees. Any finite value is
    /// accepted; callers normalize.
    fn longitude(
        &self,
        planet: Planet,
        instant: DateTime<Utc>,
        mode: CalculationMode,
    ) -> Result<f64, Self::Error>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    type Error = E::Error;

    fn longitude(
        &self,
        planet: Planet,
        instant: DateTime<Utc>,
        mode: CalculationMode,
    ) -> Result<f64, Self::Error> {
        (**self).longitude(planet, instant, mode)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Arc<E> {
    type Error = E::Error;

    fn longitude(
        &self,
        planet: Planet,
        instant: DateTime<Utc>,
        mode: CalculationMode,
    ) -> Result<f64, Self::Error> {
        (**self).longitude(planet, instant, mode)
    }
}
