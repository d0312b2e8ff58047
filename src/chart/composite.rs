//! Composite of two personal charts.
//!
//! The first chart's gates (personality and design together) are the
//! "first" side of the breakdown, the second chart's gates the "second".
//! Each planet's fixing state treats its own chart's other set as a
//! companion and both of the partner's sets as comparators.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ChartError, Definition, PersonalChart};
use crate::classify::{ActivationBreakdown, ChannelDominance};
use crate::fixation::{fixations_for, FixationTable, Fixations};
use crate::types::{gates_of, Channel};

/// Fixing states of one party in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartyFixations {
    /// Personality planets.
    pub personality: Fixations,
    /// Design planets.
    pub design: Fixations,
}

impl PartyFixations {
    fn compared_with(chart: &PersonalChart, partner: &PersonalChart, table: &FixationTable) -> Self {
        let comparators = [partner.personality(), partner.design()];
        Self {
            personality: fixations_for(table, chart.personality(), &[chart.design()], &comparators),
            design: fixations_for(table, chart.design(), &[chart.personality()], &comparators),
        }
    }
}

/// Composite chart. Owns copies of both inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeChart {
    first: PersonalChart,
    second: PersonalChart,
    definition: Definition,
    breakdown: ActivationBreakdown,
    dominance: BTreeMap<Channel, ChannelDominance>,
    first_fixations: PartyFixations,
    second_fixations: PartyFixations,
}

impl CompositeChart {
    /// Combine two charts.
    pub fn new(
        first: &PersonalChart,
        second: &PersonalChart,
        table: &FixationTable,
    ) -> Result<Self, ChartError> {
        let definition = Definition::from_sets([
            first.personality(),
            first.design(),
            second.personality(),
            second.design(),
        ])?;
        let breakdown = ActivationBreakdown::new(
            &gates_of([first.personality(), first.design()]),
            &gates_of([second.personality(), second.design()]),
        );
        let dominance = breakdown
            .channel_dominance()
            .into_iter()
            .filter(|(_, d)| *d != ChannelDominance::None)
            .collect();

        tracing::debug!(
            first = %first.birth(),
            second = %second.birth(),
            channels = definition.active_channels().len(),
            "composite chart assembled"
        );

        Ok(Self {
            first_fixations: PartyFixations::compared_with(first, second, table),
            second_fixations: PartyFixations::compared_with(second, first, table),
            first: first.clone(),
            second: second.clone(),
            definition,
            breakdown,
            dominance,
        })
    }

    /// First input chart.
    pub fn first(&self) -> &PersonalChart {
        &self.first
    }

    /// Second input chart.
    pub fn second(&self) -> &PersonalChart {
        &self.second
    }

    /// Definition of all four sets together.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// First versus second activation kinds.
    pub fn breakdown(&self) -> &ActivationBreakdown {
        &self.breakdown
    }

    /// Dominance of every active channel.
    pub fn channel_dominance(&self) -> &BTreeMap<Channel, ChannelDominance> {
        &self.dominance
    }

    /// Dominance of one channel (`None` when inactive).
    pub fn dominance(&self, channel: Channel) -> ChannelDominance {
        self.dominance
            .get(&channel)
            .copied()
            .unwrap_or(ChannelDominance::None)
    }

    /// Fixing states of the first chart's planets.
    pub fn first_fixations(&self) -> &PartyFixations {
        &self.first_fixations
    }

    /// Fixing states of the second chart's planets.
    pub fn second_fixations(&self) -> &PartyFixations {
        &self.second_fixations
    }
}
