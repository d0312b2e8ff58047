//! Variables: the four arrows read off the Sun and North Node activations.

use serde::{Deserialize, Serialize};

use crate::types::Activation;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Tones 1-3.
    Left,
    /// Tones 4-6.
    Right,
}

impl Orientation {
    /// Orientation for a tone (1..=6).
    pub fn from_tone(tone: u8) -> Self {
        if tone <= 3 {
            Self::Left
        } else {
            Self::Right
        }
    }
}

/// One arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    /// Left for tones 1-3, Right for 4-6.
    pub orientation: Orientation,
    /// Color (1..=6).
    pub color: u8,
    /// Tone (1..=6).
    pub tone: u8,
    /// Base (1..=5).
    pub base: u8,
}

impl From<&Activation> for Variable {
    fn from(a: &Activation) -> Self {
        Self {
            orientation: Orientation::from_tone(a.tone),
            color: a.color,
            tone: a.tone,
            base: a.base,
        }
    }
}

/// The four variables of a personal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variables {
    /// Design Sun (top left).
    pub determination: Variable,
    /// Design North Node (bottom left).
    pub environment: Variable,
    /// Personality Sun (top right).
    pub motivation: Variable,
    /// Personality North Node (bottom right).
    pub perspective: Variable,
}

impl Variables {
    /// Read the variables off the four activations.
    pub fn new(
        personality_sun: &Activation,
        design_sun: &Activation,
        personality_node: &Activation,
        design_node: &Activation,
    ) -> Self {
        Self {
            determination: design_sun.into(),
            environment: design_node.into(),
            motivation: personality_sun.into(),
            perspective: personality_node.into(),
        }
    }
}
