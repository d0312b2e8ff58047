//! Fixing states: exaltation and detriment of a planet in its line.
//!
//! A planet's own table entry is combined with the entries of every planet
//! sitting on one of its harmonic gates. Occupants from the planet's own
//! chart (its set and companion sets) and from comparator sets are scanned
//! separately so callers can tell whether a comparison changed the result.
//!
//! Flags only accumulate: once set, nothing in this module clears them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{BitOr, BitOrAssign};

use crate::tables::{LineFixing, LINE_FIXING};
use crate::types::{Activation, Activations, Gate, Planet};

/// Exaltation/detriment flags. `JUXTAPOSED` is both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixingState(u8);

impl FixingState {
    /// Neither flag.
    pub const NONE: Self = Self(0);
    /// Exalted.
    pub const EXALTED: Self = Self(1);
    /// In detriment.
    pub const DETRIMENT: Self = Self(2);
    /// Exalted and in detriment.
    pub const JUXTAPOSED: Self = Self(3);

    /// Raw flag bits (0..=3).
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Union of both flag sets.
    pub const fn merge(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether every flag of `other` is set here.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set.
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Flags of `self` that `base` lacks.
    const fn without(self, base: Self) -> Self {
        Self(self.0 & !base.0)
    }
}

impl BitOr for FixingState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.merge(rhs)
    }
}

impl BitOrAssign for FixingState {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.merge(rhs);
    }
}

impl std::fmt::Display for FixingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "none"),
            1 => write!(f, "exalted"),
            2 => write!(f, "detriment"),
            _ => write!(f, "juxtaposed"),
        }
    }
}

/// Fixing state of one planet, plus whether comparator sets contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlanetaryFixation {
    /// Merged flags.
    pub state: FixingState,
    /// True when comparator occupants added a flag the planet's own chart did not.
    pub changed_by_comparator: bool,
}

/// Per-planet fixing states of one activation set.
pub type Fixations = BTreeMap<Planet, PlanetaryFixation>;

/// Line-level exaltation/detriment table.
#[derive(Debug, Clone, Copy)]
pub struct FixationTable {
    rows: &'static [[LineFixing; 6]; 64],
}

impl FixationTable {
    /// Wrap a table indexed by `gate - 1`, then `line - 1`.
    pub const fn new(rows: &'static [[LineFixing; 6]; 64]) -> Self {
        Self { rows }
    }

    /// The standard table.
    pub const fn standard() -> Self {
        Self::new(&LINE_FIXING)
    }

    /// Flags `planet` receives from the entry for `(gate, line)`.
    pub fn lookup(&self, planet: Planet, gate: Gate, line: u8) -> FixingState {
        let line_index = (line.clamp(1, 6) - 1) as usize;
        let entry = self.rows[(gate.number() - 1) as usize][line_index];

        let mut state = FixingState::NONE;
        if entry.exalted.contains(planet) {
            state |= FixingState::EXALTED;
        }
        if entry.detriment.contains(planet) {
            state |= FixingState::DETRIMENT;
        }
        state
    }

    /// Flags contributed to `subject` by occupants of its harmonic gates.
    fn harmonic_contributions<'a, I>(&self, subject: &Activation, occupants: I) -> FixingState
    where
        I: IntoIterator<Item = (Planet, &'a Activation)>,
    {
        let harmonics = subject.gate.harmonics();
        occupants
            .into_iter()
            .filter(|(_, a)| harmonics.contains(&a.gate))
            .fold(FixingState::NONE, |acc, (p, _)| {
                acc | self.lookup(p, subject.gate, subject.line)
            })
    }
}

impl Default for FixationTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Fixing state of `planet` in `subject`.
///
/// - `companions`: other sets of the same chart (e.g. design for a personality planet)
/// - `comparators`: sets of another chart or a transit
///
/// Every occupant of a harmonic gate contributes except the planet itself in
/// its own set. Returns `None` when the planet has no activation in `subject`.
pub fn fixation_of(
    table: &FixationTable,
    planet: Planet,
    subject: &Activations,
    companions: &[&Activations],
    comparators: &[&Activations],
) -> Option<PlanetaryFixation> {
    let activation = subject.get(&planet)?;

    let own_occupants = subject
        .iter()
        .filter(|(p, _)| **p != planet)
        .chain(companions.iter().flat_map(|set| set.iter()))
        .map(|(&p, a)| (p, a));
    let own = table.lookup(planet, activation.gate, activation.line)
        | table.harmonic_contributions(activation, own_occupants);

    let comparator_occupants = comparators
        .iter()
        .flat_map(|set| set.iter())
        .map(|(&p, a)| (p, a));
    let compared = table.harmonic_contributions(activation, comparator_occupants);

    Some(PlanetaryFixation {
        state: own | compared,
        changed_by_comparator: !compared.without(own).is_none(),
    })
}

/// Fixing states of every planet in `subject`.
pub fn fixations_for(
    table: &FixationTable,
    subject: &Activations,
    companions: &[&Activations],
    comparators: &[&Activations],
) -> Fixations {
    subject
        .keys()
        .filter_map(|&planet| {
            fixation_of(table, planet, subject, companions, comparators).map(|f| (planet, f))
        })
        .collect()
}
