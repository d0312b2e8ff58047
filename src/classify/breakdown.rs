//! Which side of a two-set comparison activates each gate, channel and center.
//!
//! "First" and "second" are the personality/design sets of a personal chart,
//! or the two parties of a composite/transit comparison.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Center, Channel, Gate};

/// Which side activates an element.
///
/// Doubles as the `{0, 1, 2, 3}` gate state of the dominance rules:
/// absent, first only, second only, both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivationKind {
    /// Not activated.
    None,
    /// Activated by the first side only.
    First,
    /// Activated by the second side only.
    Second,
    /// Activated by both sides, or by different sides on different gates.
    Mixed,
}

impl ActivationKind {
    /// Kind of a gate given its presence on each side.
    pub fn of(in_first: bool, in_second: bool) -> Self {
        match (in_first, in_second) {
            (false, false) => Self::None,
            (true, false) => Self::First,
            (false, true) => Self::Second,
            (true, true) => Self::Mixed,
        }
    }

    /// Lift two gate kinds to their channel's kind.
    ///
    /// `None` dominates; then any `Mixed` or disagreement yields `Mixed`.
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::None, _) | (_, Self::None) => Self::None,
            (a, b) if a == b => a,
            _ => Self::Mixed,
        }
    }

    /// Fold channel kinds into a center kind, ignoring inactive channels.
    fn accumulate(self, channel: Self) -> Self {
        match (self, channel) {
            (acc, Self::None) => acc,
            (Self::None, k) => k,
            (a, b) if a == b => a,
            _ => Self::Mixed,
        }
    }
}

/// Relationship between two parties over one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelDominance {
    /// At least one gate is held by neither party.
    None,
    /// The first party holds both gates alone.
    FirstDominating,
    /// The second party holds both gates alone.
    SecondDominating,
    /// Both parties hold both gates.
    Companion,
    /// Both hold one gate; only the first holds the other.
    CompromiseFirstDominating,
    /// Both hold one gate; only the second holds the other.
    CompromiseSecondDominating,
    /// Each party holds a different gate.
    Magnetic,
}

impl ChannelDominance {
    /// Classify from the two gate states.
    pub fn classify(a: ActivationKind, b: ActivationKind) -> Self {
        use ActivationKind as K;
        match (a, b) {
            (K::None, _) | (_, K::None) => Self::None,
            (K::First, K::First) => Self::FirstDominating,
            (K::Second, K::Second) => Self::SecondDominating,
            (K::Mixed, K::Mixed) => Self::Companion,
            (K::Mixed, K::First) | (K::First, K::Mixed) => Self::CompromiseFirstDominating,
            (K::Mixed, K::Second) | (K::Second, K::Mixed) => Self::CompromiseSecondDominating,
            (K::First, K::Second) | (K::Second, K::First) => Self::Magnetic,
        }
    }
}

/// Gate, channel and center kinds for a two-set comparison.
///
/// Every gate, channel and center appears, with `ActivationKind::None` for
/// inactive ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationBreakdown {
    gates: BTreeMap<Gate, ActivationKind>,
    channels: BTreeMap<Channel, ActivationKind>,
    centers: BTreeMap<Center, ActivationKind>,
}

impl ActivationBreakdown {
    /// Build from the gates touched by each side.
    pub fn new(first: &BTreeSet<Gate>, second: &BTreeSet<Gate>) -> Self {
        let gates: BTreeMap<Gate, ActivationKind> = Gate::all()
            .map(|g| (g, ActivationKind::of(first.contains(&g), second.contains(&g))))
            .collect();

        let channels: BTreeMap<Channel, ActivationKind> = Channel::all()
            .iter()
            .map(|&c| {
                let (a, b) = c.gates();
                (c, gates[&a].combine(gates[&b]))
            })
            .collect();

        let centers = Center::ALL
            .iter()
            .map(|&center| {
                let kind = center
                    .channels()
                    .iter()
                    .fold(ActivationKind::None, |acc, c| acc.accumulate(channels[c]));
                (center, kind)
            })
            .collect();

        Self {
            gates,
            channels,
            centers,
        }
    }

    /// Kind of every gate.
    pub fn gates(&self) -> &BTreeMap<Gate, ActivationKind> {
        &self.gates
    }

    /// Kind of every channel.
    pub fn channels(&self) -> &BTreeMap<Channel, ActivationKind> {
        &self.channels
    }

    /// Kind of every center.
    pub fn centers(&self) -> &BTreeMap<Center, ActivationKind> {
        &self.centers
    }

    /// Kind of one gate.
    pub fn gate(&self, gate: Gate) -> ActivationKind {
        self.gates[&gate]
    }

    /// Kind of one channel.
    pub fn channel(&self, channel: Channel) -> ActivationKind {
        self.channels[&channel]
    }

    /// Kind of one center.
    pub fn center(&self, center: Center) -> ActivationKind {
        self.centers[&center]
    }

    /// Dominance of every channel, read from the gate kinds.
    pub fn channel_dominance(&self) -> BTreeMap<Channel, ChannelDominance> {
        self.channels
            .keys()
            .map(|&c| {
                let (a, b) = c.gates();
                (c, ChannelDominance::classify(self.gates[&a], self.gates[&b]))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ActivationKind as K;

    fn g(n: u8) -> Gate {
        Gate::new(n).unwrap()
    }

    fn ch(a: u8, b: u8) -> Channel {
        Channel::between(g(a), g(b)).unwrap()
    }

    fn set(gates: &[u8]) -> BTreeSet<Gate> {
        gates.iter().map(|&n| g(n)).collect()
    }

    #[test]
    fn test_channel_lifting_rule() {
        assert_eq!(K::None.combine(K::Mixed), K::None);
        assert_eq!(K::First.combine(K::None), K::None);
        assert_eq!(K::First.combine(K::First), K::First);
        assert_eq!(K::Second.combine(K::Second), K::Second);
        assert_eq!(K::First.combine(K::Second), K::Mixed);
        assert_eq!(K::First.combine(K::Mixed), K::Mixed);
        assert_eq!(K::Mixed.combine(K::Mixed), K::Mixed);
    }

    #[test]
    fn test_dominance_table() {
        use ChannelDominance as D;
        assert_eq!(D::classify(K::None, K::Mixed), D::None);
        assert_eq!(D::classify(K::First, K::First), D::FirstDominating);
        assert_eq!(D::classify(K::Second, K::Second), D::SecondDominating);
        assert_eq!(D::classify(K::Mixed, K::Mixed), D::Companion);
        assert_eq!(D::classify(K::Mixed, K::First), D::CompromiseFirstDominating);
        assert_eq!(D::classify(K::Second, K::Mixed), D::CompromiseSecondDominating);
        assert_eq!(D::classify(K::First, K::Second), D::Magnetic);
        assert_eq!(D::classify(K::Second, K::First), D::Magnetic);
    }

    #[test]
    fn test_breakdown_covers_everything() {
        let b = ActivationBreakdown::new(&set(&[20]), &set(&[34]));
        assert_eq!(b.gates().len(), 64);
        assert_eq!(b.channels().len(), 36);
        assert_eq!(b.centers().len(), 9);
        assert_eq!(b.gate(g(1)), K::None);
        assert_eq!(b.gate(g(20)), K::First);
        assert_eq!(b.gate(g(34)), K::Second);
        assert_eq!(b.channel(ch(20, 34)), K::Mixed);
        assert_eq!(b.channel(ch(10, 20)), K::None);
    }

    #[test]
    fn test_center_reduction() {
        // First: 20-34 fully. Second: 4-63 fully and 18 alongside first's 58.
        let first = set(&[20, 34, 58]);
        let second = set(&[4, 63, 18]);
        let b = ActivationBreakdown::new(&first, &second);

        assert_eq!(b.center(Center::Throat), K::First);
        assert_eq!(b.center(Center::Sacral), K::First);
        assert_eq!(b.center(Center::Head), K::Second);
        assert_eq!(b.center(Center::Ajna), K::Second);
        assert_eq!(b.center(Center::Spleen), K::Mixed);
        assert_eq!(b.center(Center::Root), K::Mixed);
        assert_eq!(b.center(Center::G), K::None);
    }

    #[test]
    fn test_center_mixes_disagreeing_channels() {
        // Throat defined by first via 20-34 and by second via 12-22.
        let b = ActivationBreakdown::new(&set(&[20, 34]), &set(&[12, 22]));
        assert_eq!(b.center(Center::Throat), K::Mixed);
        assert_eq!(b.center(Center::Sacral), K::First);
        assert_eq!(b.center(Center::SolarPlexus), K::Second);
    }

    #[test]
    fn test_breakdown_dominance() {
        let b = ActivationBreakdown::new(&set(&[20, 34, 6, 59, 41]), &set(&[59, 30]));
        let d = b.channel_dominance();
        assert_eq!(d[&ch(20, 34)], ChannelDominance::FirstDominating);
        assert_eq!(d[&ch(6, 59)], ChannelDominance::CompromiseFirstDominating);
        assert_eq!(d[&ch(30, 41)], ChannelDominance::Magnetic);
        assert_eq!(d[&ch(1, 8)], ChannelDominance::None);
    }
}
