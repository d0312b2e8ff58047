//! The nine centers of the body graph.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::channel::Channel;
use super::gate::Gate;
use crate::tables;

/// One of the nine centers.
///
/// A center is *defined* when it is an endpoint of at least one active channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Center {
    /// Head (pressure).
    Head,
    /// Ajna (awareness).
    Ajna,
    /// Throat (manifestation).
    Throat,
    /// G / Self (identity).
    G,
    /// Heart / Ego (motor).
    Heart,
    /// Spleen (awareness).
    Spleen,
    /// Solar plexus / Emotions (motor, awareness).
    SolarPlexus,
    /// Sacral (motor).
    Sacral,
    /// Root (motor, pressure).
    Root,
}

impl Center {
    /// All centers in canonical order.
    pub const ALL: [Center; 9] = [
        Center::Head,
        Center::Ajna,
        Center::Throat,
        Center::G,
        Center::Heart,
        Center::Spleen,
        Center::SolarPlexus,
        Center::Sacral,
        Center::Root,
    ];

    /// Whether this center is a motor (Heart, Solar Plexus, Sacral, Root).
    pub fn is_motor(self) -> bool {
        matches!(self, Self::Heart | Self::SolarPlexus | Self::Sacral | Self::Root)
    }

    /// Gates belonging to this center, in numeric order.
    pub fn gates(self) -> &'static [Gate] {
        tables::gates_of(self)
    }

    /// Channels with this center as an endpoint, in table order.
    pub fn channels(self) -> &'static [Channel] {
        tables::channels_of(self)
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Head => "head",
            Self::Ajna => "ajna",
            Self::Throat => "throat",
            Self::G => "g",
            Self::Heart => "heart",
            Self::Spleen => "spleen",
            Self::SolarPlexus => "solar_plexus",
            Self::Sacral => "sacral",
            Self::Root => "root",
        };
        f.write_str(name)
    }
}
