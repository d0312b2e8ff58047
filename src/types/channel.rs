//! Channels: fixed gate pairs bridging two centers.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

use super::center::Center;
use super::gate::Gate;
use crate::tables;

/// One of the 36 channels.
///
/// Always stored with the lower gate number first, so ordering and equality
/// are independent of the order the gates were given in. Serializes as the
/// string `"<low>-<high>"` so it can be used as a JSON map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel {
    low: Gate,
    high: Gate,
}

impl Channel {
    /// Table constructor; gates must already be ordered.
    pub(crate) const fn pair(low: u8, high: u8) -> Self {
        Self {
            low: Gate::of(low),
            high: Gate::of(high),
        }
    }

    /// Look up the channel joining two gates, in either order.
    pub fn between(a: Gate, b: Gate) -> Option<Self> {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        tables::CHANNELS
            .iter()
            .copied()
            .find(|c| c.low == low && c.high == high)
    }

    /// All 36 channels in table order.
    pub fn all() -> &'static [Channel] {
        &tables::CHANNELS
    }

    /// Both gates, lower number first.
    pub fn gates(self) -> (Gate, Gate) {
        (self.low, self.high)
    }

    /// Whether the gate is one of this channel's endpoints.
    pub fn contains(self, gate: Gate) -> bool {
        self.low == gate || self.high == gate
    }

    /// The two centers bridged, in gate order.
    pub fn centers(self) -> (Center, Center) {
        (self.low.center(), self.high.center())
    }

    /// Whether both gates are present in the set.
    pub fn is_active_in(self, gates: &BTreeSet<Gate>) -> bool {
        gates.contains(&self.low) && gates.contains(&self.high)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Channel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let (a, b) = raw
            .split_once('-')
            .ok_or_else(|| de::Error::custom(format!("malformed channel: {raw}")))?;
        let parse = |s: &str| -> Result<Gate, D::Error> {
            let n: u8 = s.trim().parse().map_err(de::Error::custom)?;
            Gate::new(n).map_err(de::Error::custom)
        };
        let (a, b) = (parse(a)?, parse(b)?);
        Channel::between(a, b).ok_or_else(|| de::Error::custom(format!("no channel joins {a} and {b}")))
    }
}

/// Every channel whose two gates are both in `gates`.
pub fn active_channels(gates: &BTreeSet<Gate>) -> BTreeSet<Channel> {
    tables::CHANNELS
        .iter()
        .copied()
        .filter(|c| c.is_active_in(gates))
        .collect()
}
