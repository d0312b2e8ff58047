//! What a union of activation sets defines: gates, channels, components and
//! the classification read off them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::classify::{ChartType, ClassificationError, SplitDefinition, Strategy};
use crate::graph::{connected_components, ConnectedComponents};
use crate::types::{active_channels, gates_of, Activations, Center, Channel, Gate};

/// Definition of one or more activation sets taken together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    active_gates: BTreeSet<Gate>,
    active_channels: BTreeSet<Channel>,
    components: ConnectedComponents,
    split_definition: SplitDefinition,
    chart_type: ChartType,
    strategy: Strategy,
}

impl Definition {
    /// Derive the definition of the union of `sets`.
    pub fn from_sets<'a, I>(sets: I) -> Result<Self, ClassificationError>
    where
        I: IntoIterator<Item = &'a Activations>,
    {
        let active_gates = gates_of(sets);
        let active_channels = active_channels(&active_gates);
        let components = connected_components(&active_channels);
        let split_definition = SplitDefinition::from_splits(components.splits())?;

        Ok(Self {
            chart_type: ChartType::classify(&components),
            strategy: Strategy::classify(&components),
            active_gates,
            active_channels,
            components,
            split_definition,
        })
    }

    /// Gates touched by any set.
    pub fn active_gates(&self) -> &BTreeSet<Gate> {
        &self.active_gates
    }

    /// Channels with both gates active.
    pub fn active_channels(&self) -> &BTreeSet<Channel> {
        &self.active_channels
    }

    /// Connected components of the center graph.
    pub fn components(&self) -> &ConnectedComponents {
        &self.components
    }

    /// Number of components.
    pub fn splits(&self) -> u8 {
        self.components.splits()
    }

    /// Split label.
    pub fn split_definition(&self) -> SplitDefinition {
        self.split_definition
    }

    /// Energy type.
    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    /// Inner authority.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether `center` is defined.
    pub fn is_defined(&self, center: Center) -> bool {
        self.components.is_defined(center)
    }

    /// Defined centers in canonical order.
    pub fn defined_centers(&self) -> Vec<Center> {
        self.components.defined_centers().collect()
    }

    /// Undefined centers in canonical order.
    pub fn undefined_centers(&self) -> Vec<Center> {
        self.components.undefined_centers().collect()
    }
}
