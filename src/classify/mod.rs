//! Chart classification.
//!
//! Everything here is a pure function of the connected components or of a
//! handful of activations; no ephemeris access.

pub mod profile;
pub mod variables;
pub mod breakdown;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::graph::ConnectedComponents;
use crate::types::Center;

pub use profile::{Angle, IncarnationCross, Profile};
pub use variables::{Orientation, Variable, Variables};
pub use breakdown::{ActivationBreakdown, ActivationKind, ChannelDominance};

/// Internal-consistency errors: values that correct upstream data never produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassificationError {
    /// More components than the split table covers.
    #[error("Invalid split count: {0} (expected 0..=4)")]
    InvalidSplitCount(u8),
    /// A Sun line pair that is not one of the 12 profiles.
    #[error("Invalid profile line pair: {conscious}/{unconscious}")]
    InvalidProfile {
        /// Personality Sun line.
        conscious: u8,
        /// Design Sun line.
        unconscious: u8,
    },
}

/// Energy type of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartType {
    /// Sacral defined, throat not motored.
    Generator,
    /// Sacral defined, throat connected to the Sacral or another motor.
    ManifestingGenerator,
    /// Sacral undefined, throat not connected to a motor.
    Projector,
    /// Sacral undefined, throat connected to Heart, Solar Plexus or Root.
    Manifestor,
    /// No center defined.
    Reflector,
}

impl ChartType {
    /// Classify from the center components.
    pub fn classify(cc: &ConnectedComponents) -> Self {
        if cc.splits() == 0 {
            return Self::Reflector;
        }

        // An undefined Sacral is never connected, so it only counts when defined.
        let throat_motored = Center::ALL
            .into_iter()
            .any(|m| m.is_motor() && cc.connected(Center::Throat, m));

        match (cc.is_defined(Center::Sacral), throat_motored) {
            (false, true) => Self::Manifestor,
            (false, false) => Self::Projector,
            (true, true) => Self::ManifestingGenerator,
            (true, false) => Self::Generator,
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generator => write!(f, "generator"),
            Self::ManifestingGenerator => write!(f, "manifesting_generator"),
            Self::Projector => write!(f, "projector"),
            Self::Manifestor => write!(f, "manifestor"),
            Self::Reflector => write!(f, "reflector"),
        }
    }
}

/// Inner authority used for decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Solar plexus defined.
    Emotional,
    /// Sacral defined, solar plexus undefined.
    Sacral,
    /// Spleen is the highest defined authority.
    Spleen,
    /// Heart defined and connected to the throat.
    Heart,
    /// G center defined, or Heart defined without a throat connection.
    SelfProjected,
    /// Nothing above defined.
    OuterAuthority,
}

impl Strategy {
    /// Classify from the center components.
    pub fn classify(cc: &ConnectedComponents) -> Self {
        if cc.is_defined(Center::SolarPlexus) {
            Self::Emotional
        } else if cc.is_defined(Center::Sacral) {
            Self::Sacral
        } else if cc.is_defined(Center::Spleen) {
            Self::Spleen
        } else if cc.is_defined(Center::Heart) {
            if cc.connected(Center::Heart, Center::Throat) {
                Self::Heart
            } else {
                Self::SelfProjected
            }
        } else if cc.is_defined(Center::G) {
            Self::SelfProjected
        } else {
            Self::OuterAuthority
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emotional => write!(f, "emotional"),
            Self::Sacral => write!(f, "sacral"),
            Self::Spleen => write!(f, "spleen"),
            Self::Heart => write!(f, "heart"),
            Self::SelfProjected => write!(f, "self_projected"),
            Self::OuterAuthority => write!(f, "outer_authority"),
        }
    }
}

/// Label for the number of components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitDefinition {
    /// No definition (0 components).
    NoDefinition,
    /// One component.
    Single,
    /// Two components.
    Split,
    /// Three components.
    TripleSplit,
    /// Four components.
    QuadrupleSplit,
}

impl SplitDefinition {
    /// Map a component count to its label.
    pub fn from_splits(splits: u8) -> Result<Self, ClassificationError> {
        match splits {
            0 => Ok(Self::NoDefinition),
            1 => Ok(Self::Single),
            2 => Ok(Self::Split),
            3 => Ok(Self::TripleSplit),
            4 => Ok(Self::QuadrupleSplit),
            n => {
                tracing::error!(splits = n, "component count outside the split table");
                Err(ClassificationError::InvalidSplitCount(n))
            }
        }
    }

    /// Component count for this label.
    pub fn splits(self) -> u8 {
        match self {
            Self::NoDefinition => 0,
            Self::Single => 1,
            Self::Split => 2,
            Self::TripleSplit => 3,
            Self::QuadrupleSplit => 4,
        }
    }
}
