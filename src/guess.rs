//! Probabilistic charts for an uncertain birth time.
//!
//! The range is bisected until both ends of an interval yield the same
//! coarse chart (see [`PersonalChart::signature`]) or the depth limit is hit.
//! Each such leaf credits its left chart with `2^-depth` of the mass; leaves
//! with equal signatures are then merged in first-seen (chronological) order.
//!
//! This is adaptive sampling, not integration: an interval whose ends agree
//! is assumed constant inside.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::calculator::ChartCalculator;
use crate::chart::{ChartError, ChartSignature, PersonalChart};
use crate::ephemeris::Ephemeris;

/// One possible chart and its share of the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeGuess {
    /// Earliest chart seen with this signature.
    pub chart: PersonalChart,
    /// Fraction of the range (0..=1).
    pub probability: f64,
}

/// An interval still to be examined. Charts are indices into the sample list.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    left: usize,
    right: usize,
    depth: u32,
}

/// `floor(log2(minutes / resolution)) + 1`, clamped to `[0, cap]`.
pub fn max_depth(range_minutes: f64, resolution_minutes: f64, cap: u32) -> u32 {
    let ratio = range_minutes / resolution_minutes;
    if !ratio.is_finite() || ratio <= 0.0 {
        return 0;
    }
    let depth = ratio.log2().floor() + 1.0;
    depth.clamp(0.0, cap as f64) as u32
}

/// Distinct coarse charts over `[start, end]` with their probabilities.
pub fn guess<E: Ephemeris>(
    calc: &ChartCalculator<E>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<RangeGuess>, ChartError> {
    if start >= end {
        return Err(ChartError::InvalidRange { start, end });
    }

    let config = calc.config();
    let minutes = (end - start).num_milliseconds() as f64 / 60_000.0;
    let depth_limit = max_depth(minutes, config.guess_resolution_minutes, config.guess_max_depth);

    let mut samples: Vec<(PersonalChart, ChartSignature)> = Vec::new();
    let left = sample(calc, &mut samples, start)?;
    let right = sample(calc, &mut samples, end)?;
    let mut worklist = vec![Span {
        start,
        end,
        left,
        right,
        depth: 0,
    }];
    let mut leaves: Vec<(usize, u32)> = Vec::new();

    // Popping from the back and pushing the right half first keeps leaves chronological.
    while let Some(span) = worklist.pop() {
        if span.depth >= depth_limit || same_signature(&samples, span.left, span.right) {
            leaves.push((span.left, span.depth));
            continue;
        }

        let mid = span.start + (span.end - span.start) / 2;
        let middle = sample(calc, &mut samples, mid)?;
        worklist.push(Span {
            start: mid,
            end: span.end,
            left: middle,
            right: span.right,
            depth: span.depth + 1,
        });
        worklist.push(Span {
            start: span.start,
            end: mid,
            left: span.left,
            right: middle,
            depth: span.depth + 1,
        });
    }

    let mut positions: BTreeMap<&ChartSignature, usize> = BTreeMap::new();
    let mut results: Vec<RangeGuess> = Vec::new();
    for &(index, depth) in &leaves {
        let (chart, signature) = &samples[index];
        let weight = 0.5f64.powi(depth as i32);
        match positions.get(signature) {
            Some(&position) => results[position].probability += weight,
            None => {
                positions.insert(signature, results.len());
                results.push(RangeGuess {
                    chart: chart.clone(),
                    probability: weight,
                });
            }
        }
    }

    tracing::debug!(
        %start,
        %end,
        depth_limit,
        samples = samples.len(),
        leaves = leaves.len(),
        outcomes = results.len(),
        "range guess complete"
    );
    Ok(results)
}

/// Compute the chart at `instant` and return its sample index.
fn sample<E: Ephemeris>(
    calc: &ChartCalculator<E>,
    samples: &mut Vec<(PersonalChart, ChartSignature)>,
    instant: DateTime<Utc>,
) -> Result<usize, ChartError> {
    let chart = calc.personal(instant)?;
    let signature = chart.signature();
    samples.push((chart, signature));
    Ok(samples.len() - 1)
}

fn same_signature(samples: &[(PersonalChart, ChartSignature)], a: usize, b: usize) -> bool {
    a == b || samples[a].1 == samples[b].1
}
