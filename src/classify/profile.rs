//! Profiles and incarnation crosses.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ClassificationError;
use crate::tables;
use crate::types::Gate;

/// Geometry of the incarnation cross implied by a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Angle {
    /// Profiles 1/3 through 4/6.
    Right,
    /// Profile 4/1.
    Juxtaposition,
    /// Profiles 5/1 through 6/3.
    Left,
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Right => write!(f, "right_angle"),
            Self::Juxtaposition => write!(f, "juxtaposition"),
            Self::Left => write!(f, "left_angle"),
        }
    }
}

/// One of the 12 valid `(personality Sun line, design Sun line)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profile {
    /// 1/3
    P13,
    /// 1/4
    P14,
    /// 2/4
    P24,
    /// 2/5
    P25,
    /// 3/5
    P35,
    /// 3/6
    P36,
    /// 4/6
    P46,
    /// 4/1
    P41,
    /// 5/1
    P51,
    /// 5/2
    P52,
    /// 6/2
    P62,
    /// 6/3
    P63,
}

impl Profile {
    /// All profiles in canonical order.
    pub const ALL: [Profile; 12] = [
        Profile::P13,
        Profile::P14,
        Profile::P24,
        Profile::P25,
        Profile::P35,
        Profile::P36,
        Profile::P46,
        Profile::P41,
        Profile::P51,
        Profile::P52,
        Profile::P62,
        Profile::P63,
    ];

    /// Resolve a line pair. Only 12 of the 36 pairs are profiles.
    pub fn from_lines(conscious: u8, unconscious: u8) -> Result<Self, ClassificationError> {
        Self::ALL
            .into_iter()
            .find(|p| p.lines() == (conscious, unconscious))
            .ok_or(ClassificationError::InvalidProfile {
                conscious,
                unconscious,
            })
    }

    /// `(conscious, unconscious)` lines.
    pub fn lines(self) -> (u8, u8) {
        match self {
            Self::P13 => (1, 3),
            Self::P14 => (1, 4),
            Self::P24 => (2, 4),
            Self::P25 => (2, 5),
            Self::P35 => (3, 5),
            Self::P36 => (3, 6),
            Self::P46 => (4, 6),
            Self::P41 => (4, 1),
            Self::P51 => (5, 1),
            Self::P52 => (5, 2),
            Self::P62 => (6, 2),
            Self::P63 => (6, 3),
        }
    }

    /// Cross angle implied by the profile.
    pub fn angle(self) -> Angle {
        match self {
            Self::P13 | Self::P14 | Self::P24 | Self::P25 | Self::P35 | Self::P36 | Self::P46 => {
                Angle::Right
            }
            Self::P41 => Angle::Juxtaposition,
            Self::P51 | Self::P52 | Self::P62 | Self::P63 => Angle::Left,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (c, u) = self.lines();
        write!(f, "{c}/{u}")
    }
}

/// The incarnation cross: the four Sun/Earth gates plus the profile angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IncarnationCross {
    /// Angle implied by the profile.
    pub angle: Angle,
    /// Personality Sun gate.
    pub personality_sun: Gate,
    /// Personality Earth gate.
    pub personality_earth: Gate,
    /// Design Sun gate.
    pub design_sun: Gate,
    /// Design Earth gate.
    pub design_earth: Gate,
}

impl IncarnationCross {
    /// Name of the cross (without the angle prefix).
    pub fn name(&self) -> &'static str {
        tables::cross_name(self.angle, self.personality_sun)
    }
}

impl fmt::Display for IncarnationCross {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} ({}/{} | {}/{})",
            self.angle,
            self.name(),
            self.personality_sun,
            self.personality_earth,
            self.design_sun,
            self.design_earth
        )
    }
}
