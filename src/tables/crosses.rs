//! Incarnation cross names.

/// Right angle crosses: each name covers the four personality Sun gates of its quarter set.
pub const RIGHT_ANGLE: [(&str, [u8; 4]); 16] = [
    ("Sphinx", [1, 2, 7, 13]),
    ("Vessel of Love", [10, 15, 25, 46]),
    ("Four Ways", [19, 24, 33, 44]),
    ("Eden", [6, 11, 12, 36]),
    ("Service", [17, 18, 52, 58]),
    ("Consciousness", [5, 35, 63, 64]),
    ("Contagion", [8, 14, 29, 30]),
    ("Explanation", [4, 23, 43, 49]),
    ("Laws", [3, 50, 56, 60]),
    ("Maya", [32, 42, 61, 62]),
    ("Penetration", [51, 53, 54, 57]),
    ("Planning", [9, 16, 37, 40]),
    ("Sleeping Phoenix", [20, 34, 55, 59]),
    ("Tension", [21, 38, 39, 48]),
    ("Unexpected", [27, 28, 31, 41]),
    ("Rulership", [22, 26, 45, 47]),
];

/// Left angle crosses: each name covers a personality Sun gate and its opposite.
pub const LEFT_ANGLE: [(&str, [u8; 2]); 32] = [
    ("Alignment", [27, 28]),
    ("Alpha", [31, 41]),
    ("Clarion", [51, 57]),
    ("Confrontation", [26, 45]),
    ("Cycles", [53, 54]),
    ("Dedication", [23, 43]),
    ("Defiance", [1, 2]),
    ("Demands", [52, 58]),
    ("Distraction", [56, 60]),
    ("Dominion", [63, 64]),
    ("Duality", [20, 34]),
    ("Education", [11, 12]),
    ("Endeavor", [21, 48]),
    ("Healing", [25, 46]),
    ("Identification", [9, 16]),
    ("Incarnation", [24, 44]),
    ("Individualism", [38, 39]),
    ("Industry", [29, 30]),
    ("Informing", [22, 47]),
    ("Limitation", [32, 42]),
    ("Masks", [7, 13]),
    ("Migration", [37, 40]),
    ("Obscuration", [61, 62]),
    ("the Plane", [6, 36]),
    ("Prevention", [10, 15]),
    ("Refinement", [19, 33]),
    ("Revolution", [4, 49]),
    ("Separation", [5, 35]),
    ("Spirit", [55, 59]),
    ("Uncertainty", [8, 14]),
    ("Upheaval", [17, 18]),
    ("Wishes", [3, 50]),
];

/// Juxtaposition crosses, indexed by `personality Sun gate - 1`.
pub const JUXTAPOSITION: [&str; 64] = [
    "Self-Expression", "the Driver", "Mutation", "Formulization",
    "Habits", "Conflict", "Interaction", "Contribution",
    "Focus", "Behavior", "Ideas", "Articulation",
    "Listening", "Empowering", "Extremes", "Experimentation",
    "Opinions", "Correction", "Need", "the Now",
    "Control", "Grace", "Assimilation", "Rationalization",
    "Innocence", "the Trickster", "Caring", "Risks",
    "Commitment", "Fates", "Influence", "Conservation",
    "Retreat", "Power", "Experience", "Crisis",
    "Bargains", "Opposition", "Provocation", "Denial",
    "Fantasy", "Completion", "Insight", "Alertness",
    "Possession", "Serendipity", "Oppression", "Depth",
    "Principles", "Values", "Shock", "Stillness",
    "Beginnings", "Ambition", "Moods", "Stimulation",
    "Intuition", "Vitality", "Strategy", "Limitation",
    "Thinking", "Detail", "Doubts", "Confusion",
];
