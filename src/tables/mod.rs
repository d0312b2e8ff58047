//! Static symbol tables.
//!
//! The raw tables are plain `const` data. Derived indices (gate → center,
//! gate → harmonics, center → channels, gate → wheel position) are built once
//! on first use and shared process-wide as immutable state.

pub mod wheel;
pub mod centers;
pub mod channels;
pub mod fixing;
pub mod crosses;

use once_cell::sync::Lazy;

use crate::classify::Angle;
use crate::types::{Center, Channel, Gate};

pub use channels::CHANNELS;
pub use fixing::{LineFixing, LINE_FIXING};
pub use wheel::GATE_WHEEL;

struct GateIndex {
    center: [Center; 64],
    wheel_index: [usize; 64],
    harmonics: Vec<Vec<Gate>>,
    center_gates: Vec<Vec<Gate>>,
    center_channels: Vec<Vec<Channel>>,
}

static INDEX: Lazy<GateIndex> = Lazy::new(|| {
    let mut center = [Center::Head; 64];
    let mut center_gates = vec![Vec::new(); Center::ALL.len()];
    for (owner, gates) in centers::CENTER_GATES {
        for &n in gates {
            let gate = Gate::of(n);
            center[gate.index()] = owner;
            center_gates[owner as usize].push(gate);
        }
    }

    let mut wheel_index = [0usize; 64];
    for (position, &n) in GATE_WHEEL.iter().enumerate() {
        wheel_index[Gate::of(n).index()] = position;
    }

    let mut harmonics = vec![Vec::new(); 64];
    for channel in CHANNELS {
        let (a, b) = channel.gates();
        harmonics[a.index()].push(b);
        harmonics[b.index()].push(a);
    }

    let center_channels = Center::ALL
        .iter()
        .map(|&c| {
            CHANNELS
                .iter()
                .copied()
                .filter(|ch| {
                    let (a, b) = ch.gates();
                    center[a.index()] == c || center[b.index()] == c
                })
                .collect()
        })
        .collect();

    GateIndex {
        center,
        wheel_index,
        harmonics,
        center_gates,
        center_channels,
    }
});

/// Center owning the gate.
pub fn center_of(gate: Gate) -> Center {
    INDEX.center[gate.index()]
}

/// Gates sharing a channel with the gate.
pub fn harmonics_of(gate: Gate) -> &'static [Gate] {
    &INDEX.harmonics[gate.index()]
}

/// Position of the gate on the wheel.
pub fn wheel_index_of(gate: Gate) -> usize {
    INDEX.wheel_index[gate.index()]
}

/// Gate at a wheel position (taken modulo 64).
pub fn gate_at_wheel_index(position: usize) -> Gate {
    Gate::of(GATE_WHEEL[position % 64])
}

/// Gates owned by the center, in numeric order.
pub fn gates_of(center: Center) -> &'static [Gate] {
    &INDEX.center_gates[center as usize]
}

/// Channels touching the center.
pub fn channels_of(center: Center) -> &'static [Channel] {
    &INDEX.center_channels[center as usize]
}

/// Name of the incarnation cross for a personality Sun gate and angle.
pub fn cross_name(angle: Angle, personality_sun: Gate) -> &'static str {
    let n = personality_sun.number();
    match angle {
        Angle::Right => RIGHT_NAME[personality_sun.index()],
        Angle::Left => LEFT_NAME[personality_sun.index()],
        Angle::Juxtaposition => crosses::JUXTAPOSITION[(n - 1) as usize],
    }
}

static RIGHT_NAME: Lazy<[&'static str; 64]> = Lazy::new(|| {
    let mut names = [""; 64];
    for (name, gates) in crosses::RIGHT_ANGLE {
        for n in gates {
            names[(n - 1) as usize] = name;
        }
    }
    names
});

static LEFT_NAME: Lazy<[&'static str; 64]> = Lazy::new(|| {
    let mut names = [""; 64];
    for (name, gates) in crosses::LEFT_ANGLE {
        for n in gates {
            names[(n - 1) as usize] = name;
        }
    }
    names
});
