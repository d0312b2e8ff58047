//! Longitude quantization.
//!
//! Converts an ecliptic longitude into `(gate, line, color, tone, base)`.
//!
//! ## Layout
//!
//! ```text
//! longitude - 3.875°  →  [0, 360)
//!   64 gates  × 5.625°
//!    6 lines  × 0.9375°
//!    6 colors × 0.15625°
//!    6 tones  × 0.026041..°
//!    5 bases  × 0.005208..°
//! ```
//!
//! Every level floors the remainder within its parent sector. Gate, line and
//! color widths are exact binary fractions, so gate and line boundaries are
//! reproduced exactly.

use crate::tables;
use crate::types::Activation;

/// Longitude at which the first wheel sector (gate 17) opens.
pub const WHEEL_OFFSET: f64 = 3.875;
/// Width of a gate sector: 360 / 64.
pub const GATE_WIDTH: f64 = 5.625;
/// Width of a line.
pub const LINE_WIDTH: f64 = GATE_WIDTH / 6.0;
/// Width of a color.
pub const COLOR_WIDTH: f64 = LINE_WIDTH / 6.0;
/// Width of a tone.
pub const TONE_WIDTH: f64 = COLOR_WIDTH / 6.0;
/// Width of a base.
pub const BASE_WIDTH: f64 = TONE_WIDTH / 5.0;

/// Normalize any longitude into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid of a tiny negative value rounds up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Split `value` into `(index, remainder)` over sectors of `width`, clamping
/// the index to `max_index`.
fn subdivide(value: f64, width: f64, max_index: u8) -> (u8, f64) {
    let raw = (value / width).floor();
    let index = if raw <= 0.0 {
        0
    } else if raw >= max_index as f64 {
        max_index
    } else {
        raw as u8
    };
    let remainder = (value - index as f64 * width).max(0.0);
    (index, remainder)
}

/// Quantize an ecliptic longitude (degrees, any range) into an activation.
pub fn activation_of(longitude: f64) -> Activation {
    let shifted = normalize_degrees(longitude - WHEEL_OFFSET);

    let (gate_index, rest) = subdivide(shifted, GATE_WIDTH, 63);
    let (line, rest) = subdivide(rest, LINE_WIDTH, 5);
    let (color, rest) = subdivide(rest, COLOR_WIDTH, 5);
    let (tone, rest) = subdivide(rest, TONE_WIDTH, 5);
    let (base, _) = subdivide(rest, BASE_WIDTH, 4);

    Activation {
        gate: tables::gate_at_wheel_index(gate_index as usize),
        line: line + 1,
        color: color + 1,
        tone: tone + 1,
        base: base + 1,
        longitude,
    }
}

/// Longitude at which a gate's given line opens.
pub fn line_start_longitude(gate: crate::types::Gate, line: u8) -> f64 {
    let line = line.clamp(1, 6);
    normalize_degrees(
        WHEEL_OFFSET + gate.wheel_index() as f64 * GATE_WIDTH + (line - 1) as f64 * LINE_WIDTH,
    )
}
