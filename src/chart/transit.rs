//! A personal chart overlaid with the sky at a later instant.
//!
//! The person's gates are the "first" side, the transit gates the "second".
//! Person planets see the transit set as comparator; transit planets see
//! both of the person's sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::composite::PartyFixations;
use super::{ChartError, Definition, PersonalChart};
use crate::classify::{ActivationBreakdown, ChannelDominance};
use crate::fixation::{fixations_for, FixationTable, Fixations};
use crate::types::{gates_of, Activations, Channel};

/// Transit chart. Owns a copy of the person's chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitChart {
    person: PersonalChart,
    instant: DateTime<Utc>,
    transit: Activations,
    definition: Definition,
    breakdown: ActivationBreakdown,
    dominance: BTreeMap<Channel, ChannelDominance>,
    person_fixations: PartyFixations,
    transit_fixations: Fixations,
}

impl TransitChart {
    /// Overlay `transit` (activations at `instant`) on `person`.
    pub fn new(
        person: &PersonalChart,
        instant: DateTime<Utc>,
        transit: Activations,
        table: &FixationTable,
    ) -> Result<Self, ChartError> {
        let definition = Definition::from_sets([person.personality(), person.design(), &transit])?;
        let breakdown = ActivationBreakdown::new(
            &gates_of([person.personality(), person.design()]),
            &gates_of([&transit]),
        );
        let dominance = breakdown
            .channel_dominance()
            .into_iter()
            .filter(|(_, d)| *d != ChannelDominance::None)
            .collect();

        let person_fixations = PartyFixations {
            personality: fixations_for(table, person.personality(), &[person.design()], &[&transit]),
            design: fixations_for(table, person.design(), &[person.personality()], &[&transit]),
        };
        let transit_fixations =
            fixations_for(table, &transit, &[], &[person.personality(), person.design()]);

        tracing::debug!(
            birth = %person.birth(),
            %instant,
            channels = definition.active_channels().len(),
            "transit chart assembled"
        );

        Ok(Self {
            person: person.clone(),
            instant,
            transit,
            definition,
            breakdown,
            dominance,
            person_fixations,
            transit_fixations,
        })
    }

    /// The person's chart.
    pub fn person(&self) -> &PersonalChart {
        &self.person
    }

    /// Transit instant.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Activations at the transit instant.
    pub fn transit(&self) -> &Activations {
        &self.transit
    }

    /// Definition of the person's sets plus the transit set.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Person versus transit activation kinds.
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

    /// Fixing states of the person's planets.
    pub fn person_fixations(&self) -> &PartyFixations {
        &self.person_fixations
    }

    /// Fixing states of the transit planets.
    pub fn transit_fixations(&self) -> &Fixations {
        &self.transit_fixations
    }
}
