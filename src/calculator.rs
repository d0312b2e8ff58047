//! Chart calculation against an ephemeris.
//!
//! ## Design instant
//!
//! The design instant is when the Sun stood [`DESIGN_ARC`] degrees behind its
//! birth longitude. It is found as a root of
//!
//! ```text
//! f(days) = wrap180(sun(birth - days) - (sun(birth) - 88))
//! ```
//!
//! over day offsets before birth:
//!
//! 1. Try the configured window (70-110 days by default)
//! 2. If its ends do not bracket a root, scan it day by day
//! 3. If still nothing, grow it one day per side up to the expansion limit
//! 4. Refine with Brent's method

use chrono::{DateTime, Duration, Utc};

use crate::chart::{ChartError, CompositeChart, PersonalChart, TransitChart};
use crate::config::ChartConfig;
use crate::ephemeris::Ephemeris;
use crate::fixation::FixationTable;
use crate::guess::{self, RangeGuess};
use crate::quantizer::{activation_of, normalize_degrees};
use crate::solver::{brent, SolverError};
use crate::types::{Activations, Planet};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Solar arc between the design instant and birth, in degrees.
///
/// Fixed: the profile table only holds the Sun line pairs this arc produces.
pub const DESIGN_ARC: f64 = 88.0;

/// Builds charts from an ephemeris and a configuration.
///
/// # Example
///
/// ```rust,ignore
/// let calc = ChartCalculator::new(CachedEphemeris::new(provider));
/// let chart = calc.personal(parse_utc_instant("1988-09-04T01:15:00Z")?)?;
/// println!("{} {}", chart.definition().chart_type(), chart.profile());
/// ```
#[derive(Debug, Clone)]
pub struct ChartCalculator<E> {
    ephemeris: E,
    config: ChartConfig,
    table: FixationTable,
}

/// Signed difference folded into `(-180, 180]`.
fn wrap180(degrees: f64) -> f64 {
    let wrapped = normalize_degrees(degrees);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Whether two objective values straddle a root rather than the ±180° seam.
fn brackets(a: f64, b: f64) -> bool {
    (a == 0.0 || b == 0.0 || a.signum() != b.signum()) && (a - b).abs() < 180.0
}

fn days_before(instant: DateTime<Utc>, days: f64) -> DateTime<Utc> {
    instant - Duration::milliseconds((days * MILLIS_PER_DAY).round() as i64)
}

impl<E: Ephemeris> ChartCalculator<E> {
    /// Calculator with the default configuration.
    pub fn new(ephemeris: E) -> Self {
        Self::with_config(ephemeris, ChartConfig::default())
    }

    /// Calculator with a custom configuration.
    pub fn with_config(ephemeris: E, config: ChartConfig) -> Self {
        Self {
            ephemeris,
            config,
            table: FixationTable::standard(),
        }
    }

    /// Use a different fixing table.
    pub fn with_fixation_table(mut self, table: FixationTable) -> Self {
        self.table = table;
        self
    }

    /// The configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The ephemeris.
    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// The fixing table.
    pub fn fixation_table(&self) -> &FixationTable {
        &self.table
    }

    fn longitude(&self, planet: Planet, instant: DateTime<Utc>) -> Result<f64, ChartError> {
        self.ephemeris
            .longitude(planet, instant, self.config.calculation_mode)
            .map_err(ChartError::from_ephemeris)
    }

    /// Activations of every tracked body at `instant`.
    pub fn activations_at(&self, instant: DateTime<Utc>) -> Result<Activations, ChartError> {
        Planet::ALL
            .iter()
            .map(|&planet| Ok((planet, activation_of(self.longitude(planet, instant)?))))
            .collect()
    }

    /// The design instant for a birth.
    pub fn design_instant(&self, birth: DateTime<Utc>) -> Result<DateTime<Utc>, ChartError> {
        let target = normalize_degrees(self.longitude(Planet::Sun, birth)? - DESIGN_ARC);
        let mut objective = |days: f64| -> Result<f64, ChartError> {
            Ok(wrap180(self.longitude(Planet::Sun, days_before(birth, days))? - target))
        };

        let (lower, upper) = self.bracket(&mut objective)?;
        let days = brent(&mut objective, lower, upper, self.config.root_options())?;
        let design = days_before(birth, days);

        tracing::debug!(%birth, %design, days, "design instant resolved");
        Ok(design)
    }

    fn bracket<F>(&self, f: &mut F) -> Result<(f64, f64), ChartError>
    where
        F: FnMut(f64) -> Result<f64, ChartError>,
    {
        let (near, far) = self.config.design_window_days;
        let f_near = f(near)?;
        let f_far = f(far)?;
        if brackets(f_near, f_far) {
            return Ok((near, far));
        }

        tracing::warn!(near, far, "design window ends do not bracket a root; scanning");
        let mut x = near;
        let mut fx = f_near;
        while x < far {
            let next = (x + 1.0).min(far);
            let f_next = f(next)?;
            if brackets(fx, f_next) {
                return Ok((x, next));
            }
            x = next;
            fx = f_next;
        }

        tracing::warn!(
            near,
            far,
            max_days = self.config.max_bracket_expansion_days,
            "expanding design window"
        );
        let (mut lower, mut f_lower) = (near, f_near);
        let (mut upper, mut f_upper) = (far, f_far);
        for _ in 0..self.config.max_bracket_expansion_days {
            if lower - 1.0 > 0.0 {
                let candidate = lower - 1.0;
                let f_candidate = f(candidate)?;
                if brackets(f_candidate, f_lower) {
                    return Ok((candidate, lower));
                }
                lower = candidate;
                f_lower = f_candidate;
            }

            let candidate = upper + 1.0;
            let f_candidate = f(candidate)?;
            if brackets(f_upper, f_candidate) {
                return Ok((upper, candidate));
            }
            upper = candidate;
            f_upper = f_candidate;
        }

        Err(SolverError::NoSignChange { lower, upper }.into())
    }

    /// Personal chart for a birth instant.
    pub fn personal(&self, birth: DateTime<Utc>) -> Result<PersonalChart, ChartError> {
        let design_instant = self.design_instant(birth)?;
        let personality = self.activations_at(birth)?;
        let design = self.activations_at(design_instant)?;
        PersonalChart::new(birth, design_instant, personality, design, &self.table)
    }

    /// Composite of two births.
    pub fn composite(
        &self,
        first: DateTime<Utc>,
        second: DateTime<Utc>,
    ) -> Result<CompositeChart, ChartError> {
        let first = self.personal(first)?;
        let second = self.personal(second)?;
        CompositeChart::new(&first, &second, &self.table)
    }

    /// Composite of two existing charts.
    pub fn composite_of(
        &self,
        first: &PersonalChart,
        second: &PersonalChart,
    ) -> Result<CompositeChart, ChartError> {
        CompositeChart::new(first, second, &self.table)
    }

    /// Transit of a birth at a later instant.
    pub fn transit(
        &self,
        birth: DateTime<Utc>,
        at: DateTime<Utc>,
    ) -> Result<TransitChart, ChartError> {
        let person = self.personal(birth)?;
        self.transit_of(&person, at)
    }

    /// Transit of an existing chart.
    pub fn transit_of(
        &self,
        person: &PersonalChart,
        at: DateTime<Utc>,
    ) -> Result<TransitChart, ChartError> {
        let transit = self.activations_at(at)?;
        TransitChart::new(person, at, transit, &self.table)
    }

    /// Distinct coarse charts over `[start, end]` with their probabilities.
    pub fn guess(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<RangeGuess>, ChartError> {
        guess::guess(self, start, end)
    }
}
