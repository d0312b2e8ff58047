//! Gate identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::center::Center;
use super::channel::Channel;
use crate::tables;

/// Error raised for gate numbers outside 1..=64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid gate number: {0} (expected 1..=64)")]
pub struct GateError(pub u8);

/// One of the 64 gates of the body graph.
///
/// Ordered by gate number, not by position on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Gate(u8);

impl Gate {
    /// Create a gate, validating the number.
    pub fn new(number: u8) -> Result<Self, GateError> {
        if (1..=64).contains(&number) {
            Ok(Self(number))
        } else {
            Err(GateError(number))
        }
    }

    /// Unchecked constructor for the static tables.
    pub(crate) const fn of(number: u8) -> Self {
        Self(number)
    }

    /// The gate number (1..=64).
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index for dense per-gate arrays.
    pub(crate) const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All 64 gates in numeric order.
    pub fn all() -> impl Iterator<Item = Gate> {
        (1..=64).map(Gate)
    }

    /// The center this gate belongs to.
    pub fn center(self) -> Center {
        tables::center_of(self)
    }

    /// Gates across every channel this gate participates in.
    pub fn harmonics(self) -> &'static [Gate] {
        tables::harmonics_of(self)
    }

    /// Channels this gate participates in.
    pub fn channels(self) -> impl Iterator<Item = Channel> {
        tables::CHANNELS
            .iter()
            .copied()
            .filter(move |c| c.contains(self))
    }

    /// Position of the gate on the wheel (0 = first sector after the offset).
    pub fn wheel_index(self) -> usize {
        tables::wheel_index_of(self)
    }
}

impl TryFrom<u8> for Gate {
    type Error = GateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Gate> for u8 {
    fn from(gate: Gate) -> Self {
        gate.0
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
