//! Assembled charts.
//!
//! Every chart computes all derived fields at construction and is immutable
//! afterwards, so charts are `Send + Sync` and can be shared freely.
//!
//! ```text
//! Activations ─┬─> Definition (gates → channels → components → type/strategy)
//!              ├─> ActivationBreakdown (which side activates what)
//!              └─> Fixations (per planet)
//! ```

pub mod definition;
pub mod personal;
pub mod composite;
pub mod transit;

use chrono::{DateTime, FixedOffset, Utc};

use crate::classify::ClassificationError;
use crate::solver::SolverError;
use crate::types::Planet;

pub use composite::{CompositeChart, PartyFixations};
pub use definition::Definition;
pub use personal::{ChartSignature, PersonalChart};
pub use transit::TransitChart;

/// Errors from chart assembly.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// An instant carried a non-zero UTC offset.
    #[error("Instant is not UTC: {0}")]
    NonUtcInstant(String),

    /// An instant could not be parsed at all.
    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    /// A range whose start is not strictly before its end.
    #[error("Invalid range: {start} is not before {end}")]
    InvalidRange {
        /// Range start.
        start: DateTime<Utc>,
        /// Range end.
        end: DateTime<Utc>,
    },

    /// The ephemeris provider failed. The provider's error is kept as the source.
    #[error("Ephemeris error: {0}")]
    Ephemeris(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The design instant could not be located.
    #[error("Design date search failed: {0}")]
    DesignDate(#[from] SolverError),

    /// Classification hit a value outside its tables.
    #[error("Classification failed: {0}")]
    Classification(#[from] ClassificationError),

    /// A chart needs an activation that its input set lacks.
    #[error("Missing {planet} activation in the {set} set")]
    MissingActivation {
        /// Which activation set.
        set: &'static str,
        /// Which body.
        planet: Planet,
    },
}

impl ChartError {
    /// Wrap an ephemeris provider error.
    pub fn from_ephemeris<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Ephemeris(Box::new(err))
    }
}

/// Parse an RFC 3339 instant, accepting only a zero UTC offset.
pub fn parse_utc_instant(s: &str) -> Result<DateTime<Utc>, ChartError> {
    let parsed = DateTime::parse_from_rfc3339(s.trim())
        .map_err(|e| ChartError::InvalidInstant(format!("{s}: {e}")))?;
    require_utc(parsed)
}

/// Convert a fixed-offset instant, rejecting any non-zero offset.
pub fn require_utc(instant: DateTime<FixedOffset>) -> Result<DateTime<Utc>, ChartError> {
    if instant.offset().local_minus_utc() != 0 {
        return Err(ChartError::NonUtcInstant(instant.to_rfc3339()));
    }
    Ok(instant.with_timezone(&Utc))
}
