//! Activations: a quantized planetary position.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::gate::Gate;
use super::planet::Planet;

/// The quantized position of one body at one moment.
///
/// Produced by [`crate::quantizer::activation_of`]; never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Activation {
    /// Gate (1..=64).
    pub gate: Gate,
    /// Line (1..=6).
    pub line: u8,
    /// Color (1..=6).
    pub color: u8,
    /// Tone (1..=6).
    pub tone: u8,
    /// Base (1..=5).
    pub base: u8,
    /// Source ecliptic longitude in degrees, as supplied.
    pub longitude: f64,
}

impl Activation {
    /// The `(gate, line, color, tone, base)` coordinates, without the longitude.
    pub fn coordinates(&self) -> (Gate, u8, u8, u8, u8) {
        (self.gate, self.line, self.color, self.tone, self.base)
    }
}

/// One activation set: the activation of each tracked body at one moment.
pub type Activations = BTreeMap<Planet, Activation>;

/// Gates touched by any activation in the given sets.
pub fn gates_of<'a, I>(sets: I) -> BTreeSet<Gate>
where
    I: IntoIterator<Item = &'a Activations>,
{
    sets.into_iter()
        .flat_map(|set| set.values().map(|a| a.gate))
        .collect()
}
