//! Chart calculation parameters.
//!
//! ## Float Normalization for Deterministic Hashing
//!
//! Floats are quantized to integers (×1e6, rounded) before hashing so the
//! `params_hash` of a configuration does not depend on float formatting.

use serde::{Deserialize, Serialize};

use crate::canonical::{canonical_hash_hex, quantize_f64};
use crate::ephemeris::CalculationMode;
use crate::solver::RootOptions;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parameters shared by every chart a [`crate::ChartCalculator`] builds.
///
/// ## Parameters
///
/// - `calculation_mode`: zodiac requested from the ephemeris
/// - `design_window_days`: initial search window before birth, in days
/// - `max_bracket_expansion_days`: how far the window may grow when it holds no root
/// - `root_tolerance_seconds` / `root_max_iterations`: root finder convergence
/// - `guess_resolution_minutes` / `guess_max_depth`: bisection granularity for range guesses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Zodiac requested from the ephemeris.
    pub calculation_mode: CalculationMode,
    /// `(nearest, farthest)` days before birth searched for the design instant.
    pub design_window_days: (f64, f64),
    /// Maximum days the window may grow on each side.
    pub max_bracket_expansion_days: u32,
    /// Root tolerance, in seconds.
    pub root_tolerance_seconds: f64,
    /// Root finder iteration budget.
    pub root_max_iterations: u32,
    /// Range guesses stop subdividing below this interval length.
    pub guess_resolution_minutes: f64,
    /// Hard cap on range guess depth.
    pub guess_max_depth: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            calculation_mode: CalculationMode::Tropical,
            design_window_days: (70.0, 110.0),
            max_bracket_expansion_days: 30,
            root_tolerance_seconds: 0.01,
            root_max_iterations: 100,
            guess_resolution_minutes: 10.0,
            guess_max_depth: 16,
        }
    }
}

#[derive(Serialize)]
struct QuantizedChartConfig {
    calculation_mode: CalculationMode,
    design_window_days: (i64, i64),
    max_bracket_expansion_days: u32,
    root_tolerance_seconds: i64,
    root_max_iterations: u32,
    guess_resolution_minutes: i64,
    guess_max_depth: u32,
}

impl ChartConfig {
    /// Use the given zodiac.
    pub fn with_calculation_mode(mut self, mode: CalculationMode) -> Self {
        self.calculation_mode = mode;
        self
    }

    /// Search a different window before birth. Bounds are reordered if reversed.
    pub fn with_design_window(mut self, nearest_days: f64, farthest_days: f64) -> Self {
        self.design_window_days = if nearest_days <= farthest_days {
            (nearest_days, farthest_days)
        } else {
            (farthest_days, nearest_days)
        };
        self
    }

    /// Limit bracket expansion.
    pub fn with_max_bracket_expansion(mut self, days: u32) -> Self {
        self.max_bracket_expansion_days = days;
        self
    }

    /// Root finder tolerance and budget.
    pub fn with_root_options(mut self, tolerance_seconds: f64, max_iterations: u32) -> Self {
        self.root_tolerance_seconds = tolerance_seconds.abs();
        self.root_max_iterations = max_iterations;
        self
    }

    /// Range guess granularity.
    pub fn with_guess_resolution(mut self, minutes: f64, max_depth: u32) -> Self {
        self.guess_resolution_minutes = minutes.max(f64::MIN_POSITIVE);
        self.guess_max_depth = max_depth;
        self
    }

    /// Options handed to the root finder, which works in days.
    pub fn root_options(&self) -> RootOptions {
        RootOptions {
            tolerance: self.root_tolerance_seconds / SECONDS_PER_DAY,
            max_iterations: self.root_max_iterations,
        }
    }

    /// Deterministic hash of every parameter.
    pub fn params_hash(&self) -> String {
        canonical_hash_hex(&self.to_quantized())
    }

    fn to_quantized(&self) -> QuantizedChartConfig {
        QuantizedChartConfig {
            calculation_mode: self.calculation_mode,
            design_window_days: (
                quantize_f64(self.design_window_days.0),
                quantize_f64(self.design_window_days.1),
            ),
            max_bracket_expansion_days: self.max_bracket_expansion_days,
            root_tolerance_seconds: quantize_f64(self.root_tolerance_seconds),
            root_max_iterations: self.root_max_iterations,
            guess_resolution_minutes: quantize_f64(self.guess_resolution_minutes),
            guess_max_depth: self.guess_max_depth,
        }
    }
}
