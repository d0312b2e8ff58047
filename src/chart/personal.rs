//! A single person's chart: personality (birth) and design activations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{ChartError, Definition};
use crate::canonical::canonical_hash_hex;
use crate::classify::{ActivationBreakdown, IncarnationCross, Profile, Variables};
use crate::fixation::{fixations_for, FixationTable, Fixations};
use crate::types::{gates_of, Activation, Activations, Gate, Planet};
use crate::BODYGRAPH_SCHEMA_VERSION;

/// Coarse identity of a chart: the gate of every body in both sets plus
/// both Sun lines. Charts with equal signatures differ only below the gate
/// level (except for the Sun line).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChartSignature {
    /// Gate per body at birth.
    pub personality: BTreeMap<Planet, Gate>,
    /// Gate per body at the design instant.
    pub design: BTreeMap<Planet, Gate>,
    /// Personality Sun line.
    pub personality_sun_line: u8,
    /// Design Sun line.
    pub design_sun_line: u8,
}

/// A personal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalChart {
    birth: DateTime<Utc>,
    design_instant: DateTime<Utc>,
    personality: Activations,
    design: Activations,
    definition: Definition,
    breakdown: ActivationBreakdown,
    profile: Profile,
    incarnation_cross: IncarnationCross,
    variables: Variables,
    personality_fixations: Fixations,
    design_fixations: Fixations,
}

pub(crate) fn require(
    set: &Activations,
    name: &'static str,
    planet: Planet,
) -> Result<Activation, ChartError> {
    set.get(&planet)
        .copied()
        .ok_or(ChartError::MissingActivation { set: name, planet })
}

impl PersonalChart {
    /// Assemble a chart from both activation sets.
    ///
    /// Both sets need at least the Sun, Earth and North Node.
    pub fn new(
        birth: DateTime<Utc>,
        design_instant: DateTime<Utc>,
        personality: Activations,
        design: Activations,
        table: &FixationTable,
    ) -> Result<Self, ChartError> {
        let p_sun = require(&personality, "personality", Planet::Sun)?;
        let p_earth = require(&personality, "personality", Planet::Earth)?;
        let p_node = require(&personality, "personality", Planet::NorthNode)?;
        let d_sun = require(&design, "design", Planet::Sun)?;
        let d_earth = require(&design, "design", Planet::Earth)?;
        let d_node = require(&design, "design", Planet::NorthNode)?;

        let definition = Definition::from_sets([&personality, &design])?;
        let breakdown = ActivationBreakdown::new(&gates_of([&personality]), &gates_of([&design]));

        let profile = Profile::from_lines(p_sun.line, d_sun.line)?;
        let incarnation_cross = IncarnationCross {
            angle: profile.angle(),
            personality_sun: p_sun.gate,
            personality_earth: p_earth.gate,
            design_sun: d_sun.gate,
            design_earth: d_earth.gate,
        };
        let variables = Variables::new(&p_sun, &d_sun, &p_node, &d_node);

        let personality_fixations = fixations_for(table, &personality, &[], &[&design]);
        let design_fixations = fixations_for(table, &design, &[], &[&personality]);

        tracing::debug!(
            %birth,
            chart_type = %definition.chart_type(),
            profile = %profile,
            splits = definition.splits(),
            "personal chart assembled"
        );

        Ok(Self {
            birth,
            design_instant,
            personality,
            design,
            definition,
            breakdown,
            profile,
            incarnation_cross,
            variables,
            personality_fixations,
            design_fixations,
        })
    }

    /// Birth instant.
    pub fn birth(&self) -> DateTime<Utc> {
        self.birth
    }

    /// Design instant.
    pub fn design_instant(&self) -> DateTime<Utc> {
        self.design_instant
    }

    /// Activations at birth.
    pub fn personality(&self) -> &Activations {
        &self.personality
    }

    /// Activations at the design instant.
    pub fn design(&self) -> &Activations {
        &self.design
    }

    /// Gates, channels, components, type and strategy.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Personality (first) versus design (second) activation kinds.
    pub fn breakdown(&self) -> &ActivationBreakdown {
        &self.breakdown
    }

    /// Sun line pair.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Incarnation cross.
    pub fn incarnation_cross(&self) -> IncarnationCross {
        self.incarnation_cross
    }

    /// Variables.
    pub fn variables(&self) -> Variables {
        self.variables
    }

    /// Fixing states of the personality planets (design as comparator).
    pub fn personality_fixations(&self) -> &Fixations {
        &self.personality_fixations
    }

    /// Fixing states of the design planets (personality as comparator).
    pub fn design_fixations(&self) -> &Fixations {
        &self.design_fixations
    }

    /// Coarse signature used to merge range guesses.
    pub fn signature(&self) -> ChartSignature {
        let gates = |set: &Activations| -> BTreeMap<Planet, Gate> {
            set.iter().map(|(&p, a)| (p, a.gate)).collect()
        };
        ChartSignature {
            personality: gates(&self.personality),
            design: gates(&self.design),
            personality_sun_line: self.personality.get(&Planet::Sun).map_or(0, |a| a.line),
            design_sun_line: self.design.get(&Planet::Sun).map_or(0, |a| a.line),
        }
    }

    /// Hash of the schema version and every activation's `(gate, line, color,
    /// tone, base)` in both sets.
    ///
    /// Instants and raw longitudes are excluded: two charts with the same
    /// quantized activations share a fingerprint.
    pub fn fingerprint(&self) -> String {
        type Coordinates = BTreeMap<Planet, (Gate, u8, u8, u8, u8)>;
        let coords = |set: &Activations| -> Coordinates {
            set.iter().map(|(&p, a)| (p, a.coordinates())).collect()
        };
        canonical_hash_hex(&(
            BODYGRAPH_SCHEMA_VERSION,
            coords(&self.personality),
            coords(&self.design),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Angle, ChartType};
    use crate::quantizer::activation_of;
    use chrono::TimeZone;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1988, 9, 4, 1, 15, 0).unwrap()
    }

    /// Sun in 34.1, Earth in 20.1, nodes in 41.5 / 31.5 (design Sun in 59.3).
    fn sets(design_sun: f64) -> (Activations, Activations) {
        let personality: Activations = [
            (Planet::Sun, activation_of(240.635)),
            (Planet::Earth, activation_of(60.635)),
            (Planet::NorthNode, activation_of(306.26)),
        ]
        .into_iter()
        .collect();
        let design: Activations = [
            (Planet::Sun, activation_of(design_sun)),
            (Planet::Earth, activation_of(design_sun + 180.0)),
            (Planet::NorthNode, activation_of(306.26)),
        ]
        .into_iter()
        .collect();
        (personality, design)
    }

    #[test]
    fn test_minimal_chart() {
        let (p, d) = sets(152.635);
        let chart = PersonalChart::new(instant(), instant(), p, d, &FixationTable::standard()).unwrap();

        assert_eq!(chart.profile(), Profile::P13);
        assert_eq!(chart.incarnation_cross().angle, Angle::Right);
        assert_eq!(chart.incarnation_cross().name(), "Sleeping Phoenix");
        assert_eq!(chart.definition().chart_type(), ChartType::ManifestingGenerator);
        assert_eq!(chart.personality_fixations().len(), 3);
        assert_eq!(chart.design_fixations().len(), 3);
    }

    #[test]
    fn test_missing_activation() {
        let (mut p, d) = sets(152.635);
        p.remove(&Planet::NorthNode);
        let err = PersonalChart::new(instant(), instant(), p, d, &FixationTable::standard()).unwrap_err();
        assert!(matches!(
            err,
            ChartError::MissingActivation { set: "personality", planet: Planet::NorthNode }
        ));
    }

    #[test]
    fn test_signature_ignores_sub_gate_detail() {
        let table = FixationTable::standard();
        let (p1, d1) = sets(152.635);
        let (p2, d2) = sets(152.735);
        let a = PersonalChart::new(instant(), instant(), p1, d1, &table).unwrap();
        let b = PersonalChart::new(instant(), instant(), p2, d2, &table).unwrap();

        assert_eq!(a.signature(), b.signature());
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_signature_tracks_sun_line() {
        let table = FixationTable::standard();
        let (p1, d1) = sets(152.635);
        // One line further into gate 59.
        let (p2, d2) = sets(153.6);
        let a = PersonalChart::new(instant(), instant(), p1, d1, &table).unwrap();
        let b = PersonalChart::new(instant(), instant(), p2, d2, &table).unwrap();

        assert_eq!(b.profile(), Profile::P14);
        assert_ne!(a.signature(), b.signature());
    }
}
