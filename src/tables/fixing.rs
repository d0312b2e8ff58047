//! Line exaltation and detriment planets.
//!
//! One row per gate (gate 1 first), one entry per line. Each entry lists the
//! planets exalted in the line and the planets in detriment there. The nodes
//! carry no entries.

use crate::types::{Planet, PlanetMask};

/// Exalted and detriment planets of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineFixing {
    /// Planets exalted in the line.
    pub exalted: PlanetMask,
    /// Planets in detriment in the line.
    pub detriment: PlanetMask,
}

const SU: u16 = Planet::Sun.bit();
const EA: u16 = Planet::Earth.bit();
const MO: u16 = Planet::Moon.bit();
const ME: u16 = Planet::Mercury.bit();
const VE: u16 = Planet::Venus.bit();
const MA: u16 = Planet::Mars.bit();
const JU: u16 = Planet::Jupiter.bit();
const SA: u16 = Planet::Saturn.bit();
const UR: u16 = Planet::Uranus.bit();
const NE: u16 = Planet::Neptune.bit();
const PL: u16 = Planet::Pluto.bit();

const fn fx(exalted: u16, detriment: u16) -> LineFixing {
    LineFixing {
        exalted: PlanetMask::from_bits(exalted),
        detriment: PlanetMask::from_bits(detriment),
    }
}

/// Rows indexed by `gate - 1`, columns by `line - 1`.
pub const LINE_FIXING: [[LineFixing; 6]; 64] = [
    /* 1 */ [fx(MO, UR), fx(VE, MA), fx(MA, EA), fx(EA, JU), fx(MA, EA), fx(EA, PL)],
    /* 2 */ [fx(VE, MA), fx(SA, MA), fx(JU, MA), fx(ME, MO), fx(UR, PL), fx(VE, MA)],
    /* 3 */ [fx(EA, MA), fx(MA, MO), fx(SU, PL), fx(MO, MA), fx(MA, PL), fx(PL, MO)],
    /* 4 */ [fx(SU, EA), fx(MO, MA), fx(VE, EA), fx(VE, JU), fx(PL, JU), fx(SA, MO)],
    /* 5 */ [fx(MO, PL), fx(MA, SU), fx(MA, MO), fx(MO, UR), fx(SU, EA), fx(VE, MO)],
    /* 6 */ [fx(PL, MO), fx(VE, MA), fx(PL, MA), fx(ME, MO), fx(SU, PL), fx(MO, VE)],
    /* 7 */ [fx(VE, MO), fx(VE, MA), fx(MO, SU), fx(VE, SA), fx(MA, VE), fx(UR, VE)],
    /* 8 */ [fx(NE, MA), fx(SU, EA), fx(MO, SA), fx(VE, JU), fx(JU, MA), fx(SA, MO)],
    /* 9 */ [fx(SU, MO), fx(SU, MO), fx(PL, MA), fx(SA, MO), fx(MO, MA), fx(SA, VE)],
    /* 10 */ [fx(SU, MO), fx(SU, MO), fx(EA, MA), fx(UR, ME), fx(ME, MO), fx(MO, MA)],
    /* 11 */ [fx(MO, MA), fx(MO, MA), fx(VE, MA), fx(VE, MO), fx(MO, SU), fx(VE, SU)],
    /* 12 */ [fx(VE, MO), fx(SA, MA), fx(VE, MA), fx(MO, PL), fx(SU, PL), fx(MO, VE)],
    /* 13 */ [fx(VE, MO), fx(SA, MA), fx(PL, MO), fx(MO, SU), fx(PL, MA), fx(ME, MA)],
    /* 14 */ [fx(VE, PL), fx(MA, JU), fx(JU, MO), fx(JU, MA), fx(MA, MO), fx(MA, VE)],
    /* 15 */ [fx(VE, MA), fx(NE, MA), fx(UR, MO), fx(SA, MA), fx(NE, SA), fx(MO, EA)],
    /* 16 */ [fx(VE, MO), fx(NE, MA), fx(MO, MA), fx(VE, UR), fx(MA, SA), fx(MO, SU)],
    /* 17 */ [fx(SU, EA), fx(MO, MA), fx(MA, MO), fx(SU, MA), fx(SU, VE), fx(VE, MA)],
    /* 18 */ [fx(VE, MO), fx(SA, MA), fx(NE, MA), fx(JU, VE), fx(UR, MA), fx(MO, PL)],
    /* 19 */ [fx(MO, MA), fx(VE, MA), fx(VE, MA), fx(PL, MA), fx(SU, MA), fx(MO, PL)],
    /* 20 */ [fx(VE, MA), fx(VE, MA), fx(SU, MO), fx(SA, MO), fx(NE, MA), fx(PL, SA)],
    /* 21 */ [fx(MO, SU), fx(SA, MA), fx(MA, VE), fx(VE, JU), fx(MA, VE), fx(SU, MO)],
    /* 22 */ [fx(MA, SU), fx(JU, MA), fx(MO, SA), fx(NE, PL), fx(ME, MA), fx(SA, MA)],
    /* 23 */ [fx(MO, MA), fx(VE, MA), fx(MO, MA), fx(SU, MA), fx(ME, MO), fx(VE, MA)],
    /* 24 */ [fx(VE, MO), fx(MO, MA), fx(JU, MA), fx(MO, PL), fx(SU, SA), fx(MO, PL)],
    /* 25 */ [fx(VE, MA), fx(VE, MA), fx(MA, MO), fx(VE, JU), fx(SU, MA), fx(MA, JU)],
    /* 26 */ [fx(SU, MO), fx(SA, MA), fx(SU, MA), fx(PL, MA), fx(MA, SU), fx(VE, MO)],
    /* 27 */ [fx(SU, PL), fx(SA, MA), fx(PL, MA), fx(MO, MA), fx(SA, MO), fx(SA, MO)],
    /* 28 */ [fx(NE, MA), fx(SA, MA), fx(MA, MO), fx(VE, MA), fx(MA, MO), fx(VE, MA)],
    /* 29 */ [fx(MA, SU), fx(VE, MA), fx(JU, MA), fx(MO, MA), fx(SU, MA), fx(MA, SU)],
    /* 30 */ [fx(SU, MO), fx(VE, MA), fx(MA, MO), fx(PL, MA), fx(MA, SU), fx(SU, PL)],
    /* 31 */ [fx(MO, MA), fx(VE, MA), fx(SU, MA), fx(MO, MA), fx(SU, VE), fx(VE, MA)],
    /* 32 */ [fx(SA, MO), fx(SA, MO), fx(SA, PL), fx(SU, PL), fx(SU, MA), fx(MO, VE)],
    /* 33 */ [fx(SU, MO), fx(SA, MO), fx(MA, SU), fx(SA, MA), fx(SU, MO), fx(MA, MO)],
    /* 34 */ [fx(MA, JU), fx(MA, JU), fx(MA, MO), fx(JU, PL), fx(JU, MA), fx(SU, MO)],
    /* 35 */ [fx(VE, MA), fx(VE, MA), fx(JU, MA), fx(JU, MA), fx(VE, MA), fx(VE, SA)],
    /* 36 */ [fx(MA, EA), fx(VE, SA), fx(MA, PL), fx(VE, MO), fx(JU, VE), fx(SA, MO)],
    /* 37 */ [fx(MA, VE), fx(VE, MA), fx(SU, MA), fx(MO, PL), fx(VE, SA), fx(MO, MA)],
    /* 38 */ [fx(NE, MA), fx(MA, MO), fx(PL, MO), fx(MA, VE), fx(SA, MA), fx(MO, MA)],
    /* 39 */ [fx(MA, MO), fx(SA, MA), fx(MO, VE), fx(SU, MO), fx(MA, SA), fx(SU, MO)],
    /* 40 */ [fx(MA, VE), fx(MA, MO), fx(MA, MO), fx(VE, JU), fx(SA, MO), fx(PL, MA)],
    /* 41 */ [fx(VE, MO), fx(VE, PL), fx(JU, MA), fx(MO, SU), fx(MO, MA), fx(SU, MO)],
    /* 42 */ [fx(SU, MA), fx(MA, MO), fx(SU, MA), fx(MA, MO), fx(SU, MA), fx(SU, MO)],
    /* 43 */ [fx(SU, MO), fx(PL, MO), fx(MA, MO), fx(MA, MO), fx(JU, MO), fx(MA, MO)],
    /* 44 */ [fx(MO, MA), fx(VE, SU), fx(MA, SU), fx(SU, MO), fx(NE, MA), fx(MO, SU)],
    /* 45 */ [fx(JU, MA), fx(MO, MA), fx(MO, MA), fx(SU, MO), fx(SU, MO), fx(MO, PL)],
    /* 46 */ [fx(ME, MO), fx(SU, MA), fx(MO, VE), fx(SA, MA), fx(MO, SU), fx(PL, MO)],
    /* 47 */ [fx(SU, MA), fx(MO, SU), fx(MA, MO), fx(MO, MA), fx(SU, MO), fx(MO, SA)],
    /* 48 */ [fx(SU, MA), fx(PL, MA), fx(MO, SU), fx(SA, MA), fx(SU, MO), fx(MO, MA)],
    /* 49 */ [fx(SU, MO), fx(MO, MA), fx(JU, PL), fx(SU, MO), fx(MA, SU), fx(MO, SU)],
    /* 50 */ [fx(SU, MA), fx(VE, MO), fx(MA, PL), fx(SA, MA), fx(MO, MA), fx(MO, SU)],
    /* 51 */ [fx(SU, MO), fx(SU, MO), fx(SA, MA), fx(SU, MO), fx(SU, MO), fx(MO, MA)],
    /* 52 */ [fx(MA, JU), fx(SU, MO), fx(MA, MO), fx(SU, MO), fx(JU, MA), fx(MO, MA)],
    /* 53 */ [fx(SU, MO), fx(MO, MA), fx(SU, MA), fx(SU, MO), fx(MO, SU), fx(MA, MO)],
    /* 54 */ [fx(VE, SU), fx(MO, MA), fx(SU, MO), fx(PL, MO), fx(MA, SU), fx(MO, MA)],
    /* 55 */ [fx(MO, SU), fx(SA, MA), fx(MA, PL), fx(SU, MA), fx(MO, SU), fx(SA, MO)],
    /* 56 */ [fx(MO, MA), fx(VE, MA), fx(SU, MO), fx(MO, SU), fx(MO, MA), fx(SU, MA)],
    /* 57 */ [fx(VE, MO), fx(VE, MA), fx(VE, MO), fx(MO, SU), fx(VE, MA), fx(VE, MO)],
    /* 58 */ [fx(VE, MA), fx(VE, MA), fx(MA, MO), fx(SU, MO), fx(SU, MA), fx(MO, MA)],
    /* 59 */ [fx(SU, MO), fx(MO, MA), fx(MA, SU), fx(SU, MO), fx(SU, MO), fx(MA, MO)],
    /* 60 */ [fx(PL, MO), fx(VE, MA), fx(MO, SU), fx(MA, MO), fx(MO, MA), fx(SA, MO)],
    /* 61 */ [fx(SA, MO), fx(VE, MA), fx(MO, SU), fx(SA, MA), fx(SU, MO), fx(SA, MA)],
    /* 62 */ [fx(MO, MA), fx(VE, MA), fx(SA, MA), fx(SU, MO), fx(SU, MO), fx(SA, MA)],
    /* 63 */ [fx(SU, MO), fx(SA, MA), fx(MO, SU), fx(MO, MA), fx(SU, MA), fx(SU, MO)],
    /* 64 */ [fx(MO, MA), fx(VE, MA), fx(MA, MO), fx(SU, MO), fx(SU, MA), fx(VE, MO)],
];
