//! Gate membership of each center.

use crate::types::Center;

/// Gate numbers owned by each center.
pub const CENTER_GATES: [(Center, &[u8]); 9] = [
    (Center::Head, &[61, 63, 64]),
    (Center::Ajna, &[4, 11, 17, 24, 43, 47]),
    (Center::Throat, &[8, 12, 16, 20, 23, 31, 33, 35, 45, 56, 62]),
    (Center::G, &[1, 2, 7, 10, 13, 15, 25, 46]),
    (Center::Heart, &[21, 26, 40, 51]),
    (Center::Spleen, &[18, 28, 32, 44, 48, 50, 57]),
    (Center::SolarPlexus, &[6, 22, 30, 36, 37, 49, 55]),
    (Center::Sacral, &[3, 5, 9, 14, 27, 29, 34, 42, 59]),
    (Center::Root, &[19, 38, 39, 41, 52, 53, 54, 58, 60]),
];
