//! Center connectivity.
//!
//! Builds an undirected multigraph over the nine centers with one edge per
//! active channel and labels its connected components.
//!
//! ## Determinism
//!
//! - Vertices are visited in [`Center::ALL`] order
//! - Neighbors are stored in `BTreeMap`/`BTreeSet`
//! - Component ids start at 1 and follow discovery order
//!
//! Callers should still compare components by membership rather than by id.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Center, Channel};

/// Connected components of the center graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectedComponents {
    /// Component id of every defined center. Undefined centers are absent.
    components: BTreeMap<Center, u8>,
    /// Number of components (0 when no center is defined).
    splits: u8,
}

impl ConnectedComponents {
    /// Component id of a center, or `None` if it is undefined.
    pub fn component_of(&self, center: Center) -> Option<u8> {
        self.components.get(&center).copied()
    }

    /// Whether the center is defined.
    pub fn is_defined(&self, center: Center) -> bool {
        self.components.contains_key(&center)
    }

    /// Whether both centers are defined and share a component.
    pub fn connected(&self, a: Center, b: Center) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Number of components.
    pub fn splits(&self) -> u8 {
        self.splits
    }

    /// The raw center → component id map.
    pub fn as_map(&self) -> &BTreeMap<Center, u8> {
        &self.components
    }

    /// Centers grouped by component, ordered by component id.
    pub fn groups(&self) -> Vec<BTreeSet<Center>> {
        let mut groups = vec![BTreeSet::new(); self.splits as usize];
        for (&center, &id) in &self.components {
            groups[(id - 1) as usize].insert(center);
        }
        groups
    }

    /// Defined centers in canonical order.
    pub fn defined_centers(&self) -> impl Iterator<Item = Center> + '_ {
        self.components.keys().copied()
    }

    /// Undefined centers in canonical order.
    pub fn undefined_centers(&self) -> impl Iterator<Item = Center> + '_ {
        Center::ALL.into_iter().filter(|c| !self.is_defined(*c))
    }
}

/// Label the connected components induced by a set of active channels.
pub fn connected_components<'a, I>(channels: I) -> ConnectedComponents
where
    I: IntoIterator<Item = &'a Channel>,
{
    let mut adjacency: BTreeMap<Center, BTreeSet<Center>> = BTreeMap::new();
    for channel in channels {
        let (a, b) = channel.centers();
        adjacency.entry(a).or_default().insert(b);
        adjacency.entry(b).or_default().insert(a);
    }

    let mut components: BTreeMap<Center, u8> = BTreeMap::new();
    let mut next_id: u8 = 0;

    for start in Center::ALL {
        if !adjacency.contains_key(&start) || components.contains_key(&start) {
            continue;
        }
        next_id += 1;

        let mut stack = vec![start];
        components.insert(start, next_id);
        while let Some(center) = stack.pop() {
            for &neighbor in &adjacency[&center] {
                if !components.contains_key(&neighbor) {
                    components.insert(neighbor, next_id);
                    stack.push(neighbor);
                }
            }
        }
    }

    ConnectedComponents {
        components,
        splits: next_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gate;

    fn ch(a: u8, b: u8) -> Channel {
        Channel::between(Gate::new(a).unwrap(), Gate::new(b).unwrap()).unwrap()
    }

    #[test]
    fn test_no_channels_is_open() {
        let cc = connected_components(&[] as &[Channel]);
        assert_eq!(cc.splits(), 0);
        assert!(cc.as_map().is_empty());
        assert_eq!(cc.undefined_centers().count(), 9);
        assert!(cc.groups().is_empty());
    }

    #[test]
    fn test_single_channel_is_one_component() {
        let cc = connected_components(&[ch(20, 34)]);
        assert_eq!(cc.splits(), 1);
        assert!(cc.connected(Center::Throat, Center::Sacral));
        assert_eq!(cc.component_of(Center::Throat), cc.component_of(Center::Sacral));
        assert!(!cc.is_defined(Center::G));
    }

    #[test]
    fn test_disjoint_channels_split() {
        let cc = connected_components(&[ch(20, 34), ch(4, 63)]);
        assert_eq!(cc.splits(), 2);
        assert!(!cc.connected(Center::Throat, Center::Ajna));
        let groups = cc.groups();
        assert!(groups.contains(&[Center::Throat, Center::Sacral].into_iter().collect()));
        assert!(groups.contains(&[Center::Head, Center::Ajna].into_iter().collect()));
    }

    #[test]
    fn test_bridge_merges_components() {
        // 20-34 and 4-63 are disjoint until 11-56 joins Ajna to Throat.
        let cc = connected_components(&[ch(20, 34), ch(4, 63), ch(11, 56)]);
        assert_eq!(cc.splits(), 1);
        assert_eq!(cc.defined_centers().count(), 4);
    }

    #[test]
    fn test_parallel_channels_do_not_add_components() {
        let cc = connected_components(&[ch(10, 20), ch(7, 31), ch(1, 8), ch(13, 33)]);
        assert_eq!(cc.splits(), 1);
        assert_eq!(cc.groups()[0], [Center::G, Center::Throat].into_iter().collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_quadruple_split() {
        let cc = connected_components(&[ch(4, 63), ch(20, 34), ch(19, 49), ch(25, 51)]);
        assert_eq!(cc.splits(), 4);
    }

    #[test]
    fn test_order_independent_membership() {
        let forward = connected_components(&[ch(20, 34), ch(4, 63), ch(18, 58)]);
        let backward = connected_components(&[ch(18, 58), ch(4, 63), ch(20, 34)]);
        assert_eq!(forward.splits(), backward.splits());
        let mut a = forward.groups();
        let mut b = backward.groups();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
