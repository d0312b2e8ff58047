//! Tracked bodies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the 13 bodies tracked by a body graph.
///
/// Declaration order is the canonical chart order and drives every
/// `BTreeMap<Planet, _>` iteration in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Planet {
    /// The Sun.
    Sun,
    /// The Earth (opposite the Sun).
    Earth,
    /// Lunar north node.
    NorthNode,
    /// Lunar south node (opposite the north node).
    SouthNode,
    /// The Moon.
    Moon,
    /// Mercury.
    Mercury,
    /// Venus.
    Venus,
    /// Mars.
    Mars,
    /// Jupiter.
    Jupiter,
    /// Saturn.
    Saturn,
    /// Uranus.
    Uranus,
    /// Neptune.
    Neptune,
    /// Pluto.
    Pluto,
}

impl Planet {
    /// All tracked bodies in canonical order.
    pub const ALL: [Planet; 13] = [
        Planet::Sun,
        Planet::Earth,
        Planet::NorthNode,
        Planet::SouthNode,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
        Planet::Pluto,
    ];

    /// Bit used for this body in a [`PlanetMask`].
    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Parse a body from its lowercase name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sun" => Some(Self::Sun),
            "earth" => Some(Self::Earth),
            "north_node" | "northnode" => Some(Self::NorthNode),
            "south_node" | "southnode" => Some(Self::SouthNode),
            "moon" => Some(Self::Moon),
            "mercury" => Some(Self::Mercury),
            "venus" => Some(Self::Venus),
            "mars" => Some(Self::Mars),
            "jupiter" => Some(Self::Jupiter),
            "saturn" => Some(Self::Saturn),
            "uranus" => Some(Self::Uranus),
            "neptune" => Some(Self::Neptune),
            "pluto" => Some(Self::Pluto),
            _ => None,
        }
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sun => "sun",
            Self::Earth => "earth",
            Self::NorthNode => "north_node",
            Self::SouthNode => "south_node",
            Self::Moon => "moon",
            Self::Mercury => "mercury",
            Self::Venus => "venus",
            Self::Mars => "mars",
            Self::Jupiter => "jupiter",
            Self::Saturn => "saturn",
            Self::Uranus => "uranus",
            Self::Neptune => "neptune",
            Self::Pluto => "pluto",
        };
        f.write_str(name)
    }
}

/// Compact set of planets, one bit per [`Planet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlanetMask(u16);

impl PlanetMask {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Build a mask from raw bits (see [`Planet::bit`]).
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Whether the planet is a member.
    pub const fn contains(self, planet: Planet) -> bool {
        self.0 & planet.bit() != 0
    }

    /// Whether the set is empty.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate members in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Planet> {
        Planet::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}
