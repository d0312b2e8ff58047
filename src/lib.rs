//! # bodygraph-kernel
//!
//! Deterministic body graph derivation from planetary longitudes.
//!
//! The kernel answers one question:
//!
//! > Given where the bodies stood at birth and at the design instant, which
//! > gates, channels and centers are defined, and how is the chart classified?
//!
//! ## Core Contract
//!
//! 1. Quantize each longitude into an activation (gate, line, color, tone, base)
//! 2. Derive active gates, active channels and the connected components of the centers
//! 3. Classify: type, strategy, profile, split definition, incarnation cross, variables
//! 4. Compare charts (composite, transit) and estimate charts for uncertain birth times
//!
//! ## Architecture
//!
//! ```text
//! Ephemeris → longitude → activation_of → Activations ─┬─> Definition (graph + classify)
//!                                                      ├─> ActivationBreakdown
//!                                                      └─> Fixations
//! ```
//!
//! Longitudes come from an external [`Ephemeris`]; this crate never computes
//! planetary positions itself.
//!
//! ## Determinism Guarantees
//!
//! - Same longitudes → identical charts and fingerprints
//! - Every map is a `BTreeMap`/`BTreeSet` keyed in canonical order
//! - Static tables are immutable and shared process-wide

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod tables;
pub mod quantizer;
pub mod fixation;
pub mod graph;
pub mod classify;
pub mod chart;
pub mod ephemeris;
pub mod solver;
pub mod config;
pub mod calculator;
pub mod guess;
pub mod canonical;

// Re-exports
pub use types::{
    active_channels, gates_of, Activation, Activations, Center, Channel, Gate, GateError, Planet,
    PlanetMask,
};
pub use quantizer::activation_of;
pub use fixation::{
    fixation_of, fixations_for, FixationTable, Fixations, FixingState, PlanetaryFixation,
};
pub use graph::{connected_components, ConnectedComponents};
pub use classify::{
    ActivationBreakdown, ActivationKind, Angle, ChannelDominance, ChartType, ClassificationError,
    IncarnationCross, Orientation, Profile, SplitDefinition, Strategy, Variable, Variables,
};
pub use chart::{
    parse_utc_instant, require_utc, ChartError, ChartSignature, CompositeChart, Definition,
    PartyFixations, PersonalChart, TransitChart,
};
pub use ephemeris::{
    CacheConfig, CacheStats, CachedEphemeris, CalculationMode, Ephemeris, LinearEphemeris,
    LinearEphemerisError,
};
pub use solver::{RootOptions, SolverError};
pub use config::ChartConfig;
pub use calculator::{ChartCalculator, DESIGN_ARC};
pub use guess::RangeGuess;
pub use canonical::{canonical_hash, canonical_hash_hex, to_canonical_bytes};

/// Schema version of every serialized chart type.
/// Increment on breaking changes to any serialized type.
pub const BODYGRAPH_SCHEMA_VERSION: &str = "1.0.0";
