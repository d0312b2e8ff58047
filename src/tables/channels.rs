//! The 36 channels.

use crate::types::Channel;

/// Every channel, lower gate first, sorted by lower gate.
pub const CHANNELS: [Channel; 36] = [
    Channel::pair(1, 8),
    Channel::pair(2, 14),
    Channel::pair(3, 60),
    Channel::pair(4, 63),
    Channel::pair(5, 15),
    Channel::pair(6, 59),
    Channel::pair(7, 31),
    Channel::pair(9, 52),
    Channel::pair(10, 20),
    Channel::pair(10, 34),
    Channel::pair(10, 57),
    Channel::pair(11, 56),
    Channel::pair(12, 22),
    Channel::pair(13, 33),
    Channel::pair(16, 48),
    Channel::pair(17, 62),
    Channel::pair(18, 58),
    Channel::pair(19, 49),
    Channel::pair(20, 34),
    Channel::pair(20, 57),
    Channel::pair(21, 45),
    Channel::pair(23, 43),
    Channel::pair(24, 61),
    Channel::pair(25, 51),
    Channel::pair(26, 44),
    Channel::pair(27, 50),
    Channel::pair(28, 38),
    Channel::pair(29, 46),
    Channel::pair(30, 41),
    Channel::pair(32, 54),
    Channel::pair(34, 57),
    Channel::pair(35, 36),
    Channel::pair(37, 40),
    Channel::pair(39, 55),
    Channel::pair(42, 53),
    Channel::pair(47, 64),
];
