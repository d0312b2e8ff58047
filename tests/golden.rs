//! Golden tests for the body graph kernel.
//!
//! Each scenario runs a full calculation against a linear ephemeris with
//! known longitudes and pins the resulting chart.

use bodygraph_kernel::{
    parse_utc_instant, ActivationKind, Angle, Center, Channel, ChannelDominance, ChartCalculator,
    ChartError, ChartType, Ephemeris, CalculationMode, FixingState, Gate, LinearEphemeris,
    LinearEphemerisError, Orientation, PersonalChart, Planet, Profile, SplitDefinition, Strategy,
};
use chrono::{DateTime, Duration, Utc};

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("bodygraph_kernel=debug")
        .try_init();
}

fn instant(s: &str) -> DateTime<Utc> {
    parse_utc_instant(s).unwrap()
}

fn gate(n: u8) -> Gate {
    Gate::new(n).unwrap()
}

fn channel(a: u8, b: u8) -> Channel {
    Channel::between(gate(a), gate(b)).unwrap()
}

/// Sun moves one degree per day; every other body stands still.
fn sky(epoch: &str, sun: f64, others: [(Planet, f64); 10]) -> LinearEphemeris {
    others.into_iter().fold(
        LinearEphemeris::new(instant(epoch)).with_body(Planet::Sun, sun, 1.0),
        |eph, (planet, lon)| eph.with_fixed(planet, lon),
    )
}

const BIRTH_A: &str = "1988-09-04T01:15:00Z";
const BIRTH_B: &str = "1995-06-15T08:30:00Z";
const TRANSIT: &str = "2024-01-01T00:00:00Z";

/// Routes each instant to the sky of the scenario it belongs to.
struct ScenarioSky {
    a: LinearEphemeris,
    b: LinearEphemeris,
    transit: LinearEphemeris,
}

impl ScenarioSky {
    fn new() -> Self {
        Self {
            a: sky(
                BIRTH_A,
                240.635,
                [
                    (Planet::Moon, 174.0725),
                    (Planet::NorthNode, 306.26),
                    (Planet::Mercury, 191.885),
                    (Planet::Venus, 106.5725),
                    (Planet::Mars, 142.1975),
                    (Planet::Jupiter, 343.76),
                    (Planet::Saturn, 43.76),
                    (Planet::Uranus, 82.1975),
                    (Planet::Neptune, 314.6975),
                    (Planet::Pluto, 215.3225),
                ],
            ),
            b: sky(
                BIRTH_B,
                187.1975,
                [
                    (Planet::Moon, 325.01),
                    (Planet::NorthNode, 224.6975),
                    (Planet::Mercury, 151.5725),
                    (Planet::Venus, 40.01),
                    (Planet::Mars, 139.385),
                    (Planet::Jupiter, 346.5725),
                    (Planet::Saturn, 168.4475),
                    (Planet::Uranus, 265.9475),
                    (Planet::Neptune, 221.885),
                    (Planet::Pluto, 206.885),
                ],
            ),
            transit: sky(
                TRANSIT,
                270.635,
                [
                    (Planet::Moon, 100.01),
                    (Planet::NorthNode, 319.385),
                    (Planet::Mercury, 84.0725),
                    (Planet::Venus, 358.76),
                    (Planet::Mars, 257.51),
                    (Planet::Jupiter, 32.51),
                    (Planet::Saturn, 353.135),
                    (Planet::Uranus, 296.885),
                    (Planet::Neptune, 291.26),
                    (Planet::Pluto, 308.135),
                ],
            ),
        }
    }
}

impl Ephemeris for ScenarioSky {
    type Error = LinearEphemerisError;

    fn longitude(
        &self,
        planet: Planet,
        at: DateTime<Utc>,
        mode: CalculationMode,
    ) -> Result<f64, Self::Error> {
        let eph = if at < instant("1992-01-01T00:00:00Z") {
            &self.a
        } else if at < instant("2010-01-01T00:00:00Z") {
            &self.b
        } else {
            &self.transit
        };
        eph.longitude(planet, at, mode)
    }
}

fn calculator() -> ChartCalculator<ScenarioSky> {
    init_tracing();
    ChartCalculator::new(ScenarioSky::new())
}

fn gate_line(chart: &PersonalChart, design: bool, planet: Planet) -> (u8, u8) {
    let set = if design { chart.design() } else { chart.personality() };
    let a = &set[&planet];
    (a.gate.number(), a.line)
}

fn channels(list: &[(u8, u8)]) -> Vec<Channel> {
    list.iter().map(|&(a, b)| channel(a, b)).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenario 1: single chart
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn golden_single_chart_activations() {
    let chart = calculator().personal(instant(BIRTH_A)).unwrap();

    let expected = [
        (Planet::Sun, (34, 1)),
        (Planet::Earth, (20, 1)),
        (Planet::NorthNode, (41, 5)),
        (Planet::SouthNode, (31, 5)),
        (Planet::Moon, (6, 2)),
        (Planet::Mercury, (48, 3)),
        (Planet::Venus, (53, 2)),
        (Planet::Mars, (4, 4)),
        (Planet::Jupiter, (63, 3)),
        (Planet::Saturn, (2, 1)),
        (Planet::Uranus, (45, 6)),
        (Planet::Neptune, (13, 2)),
        (Planet::Pluto, (28, 4)),
    ];
    for (planet, coords) in expected {
        assert_eq!(gate_line(&chart, false, planet), coords, "personality {planet:?}");
    }

    assert_eq!(gate_line(&chart, true, Planet::Sun), (59, 3));
    assert_eq!(gate_line(&chart, true, Planet::Earth), (55, 3));
    // Static bodies keep their personality gates in the design set.
    assert_eq!(gate_line(&chart, true, Planet::Moon), (6, 2));

    let days = (chart.birth() - chart.design_instant()).num_milliseconds() as f64 / 86_400_000.0;
    assert!((days - 88.0).abs() < 1e-6, "design offset {days}");
}

#[test]
fn golden_single_chart_classification() {
    let chart = calculator().personal(instant(BIRTH_A)).unwrap();
    let definition = chart.definition();

    assert_eq!(
        definition.active_channels().iter().copied().collect::<Vec<_>>(),
        channels(&[(4, 63), (6, 59), (20, 34)])
    );
    assert_eq!(definition.splits(), 2);
    assert_eq!(definition.split_definition(), SplitDefinition::Split);
    assert_eq!(definition.chart_type(), ChartType::ManifestingGenerator);
    assert_eq!(definition.strategy(), Strategy::Emotional);
    assert_eq!(
        definition.defined_centers(),
        vec![Center::Head, Center::Ajna, Center::Throat, Center::SolarPlexus, Center::Sacral]
    );
    assert_eq!(chart.profile(), Profile::P13);
    assert_eq!(chart.profile().to_string(), "1/3");

    let cross = chart.incarnation_cross();
    assert_eq!(cross.angle, Angle::Right);
    assert_eq!(
        (cross.personality_sun, cross.personality_earth, cross.design_sun, cross.design_earth),
        (gate(34), gate(20), gate(59), gate(55))
    );
    assert_eq!(cross.name(), "Sleeping Phoenix");
}

#[test]
fn golden_single_chart_variables() {
    let variables = calculator().personal(instant(BIRTH_A)).unwrap().variables();

    let read = |v: bodygraph_kernel::Variable| (v.orientation, v.color, v.tone, v.base);
    assert_eq!(read(variables.motivation), (Orientation::Left, 4, 2, 3));
    assert_eq!(read(variables.perspective), (Orientation::Left, 4, 2, 3));
    assert_eq!(read(variables.determination), (Orientation::Left, 5, 1, 2));
    assert_eq!(read(variables.environment), (Orientation::Left, 4, 2, 3));
}

#[test]
fn golden_single_chart_breakdown() {
    let chart = calculator().personal(instant(BIRTH_A)).unwrap();
    let breakdown = chart.breakdown();

    assert_eq!(breakdown.channel(channel(4, 63)), ActivationKind::Mixed);
    assert_eq!(breakdown.channel(channel(6, 59)), ActivationKind::Mixed);
    assert_eq!(breakdown.channel(channel(20, 34)), ActivationKind::First);
    assert_eq!(breakdown.channel(channel(1, 8)), ActivationKind::None);

    let dominance = breakdown.channel_dominance();
    assert_eq!(dominance[&channel(4, 63)], ChannelDominance::Companion);
    assert_eq!(dominance[&channel(6, 59)], ChannelDominance::CompromiseSecondDominating);
    assert_eq!(dominance[&channel(20, 34)], ChannelDominance::FirstDominating);

    for center in [Center::Head, Center::Ajna, Center::SolarPlexus, Center::Sacral] {
        assert_eq!(breakdown.center(center), ActivationKind::Mixed, "{center:?}");
    }
    assert_eq!(breakdown.center(Center::Throat), ActivationKind::First);
    for center in [Center::G, Center::Heart, Center::Spleen, Center::Root] {
        assert_eq!(breakdown.center(center), ActivationKind::None, "{center:?}");
    }
}

#[test]
fn golden_single_chart_fixations() {
    let chart = calculator().personal(instant(BIRTH_A)).unwrap();

    let personality = chart.personality_fixations();
    assert_eq!(personality[&Planet::Mars].state, FixingState::DETRIMENT);
    assert!(!personality[&Planet::Mars].changed_by_comparator);
    assert!(personality[&Planet::Sun].state.is_none());

    let design = chart.design_fixations();
    assert_eq!(design[&Planet::Sun].state, FixingState::DETRIMENT);
    assert_eq!(design[&Planet::Mars].state, FixingState::DETRIMENT);
    assert!(design[&Planet::Moon].state.is_none());
}

#[test]
fn golden_design_sun_fixes_personality_mercury() {
    // Personality Mercury at 48.3 is in detriment by the Sun, and only the
    // design Sun sits in the harmonic gate 16.
    let chart = calculator()
        .personal(instant(BIRTH_A) + Duration::days(275))
        .unwrap();
    assert_eq!(gate_line(&chart, false, Planet::Mercury), (48, 3));
    assert_eq!(gate_line(&chart, false, Planet::Sun), (59, 6));
    assert_eq!(gate_line(&chart, true, Planet::Sun), (16, 3));

    let personality = chart.personality_fixations();
    assert_eq!(personality[&Planet::Mercury].state, FixingState::DETRIMENT);
    assert!(personality[&Planet::Mercury].changed_by_comparator);
    assert!(!personality[&Planet::Sun].changed_by_comparator);

    // The design Sun is part of the design set itself.
    let design = chart.design_fixations();
    assert_eq!(design[&Planet::Mercury].state, FixingState::DETRIMENT);
    assert!(!design[&Planet::Mercury].changed_by_comparator);
}

#[test]
fn golden_fingerprint_is_stable() {
    let calc = calculator();
    let first = calc.personal(instant(BIRTH_A)).unwrap();
    let second = calc.personal(instant(BIRTH_A)).unwrap();
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert_eq!(first.fingerprint().len(), 16);

    let other = calc.personal(instant(BIRTH_B)).unwrap();
    assert_ne!(first.fingerprint(), other.fingerprint());
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenario 2: composite
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn golden_second_chart() {
    let chart = calculator().personal(instant(BIRTH_B)).unwrap();

    assert_eq!(gate_line(&chart, false, Planet::Sun), (18, 4));
    assert_eq!(gate_line(&chart, false, Planet::NorthNode), (1, 2));
    assert_eq!(gate_line(&chart, true, Planet::Sun), (52, 6));
    assert_eq!(gate_line(&chart, true, Planet::Earth), (58, 6));

    let definition = chart.definition();
    assert_eq!(
        definition.active_channels().iter().copied().collect::<Vec<_>>(),
        channels(&[(4, 63), (18, 58)])
    );
    assert_eq!(definition.chart_type(), ChartType::Projector);
    assert_eq!(definition.strategy(), Strategy::Spleen);
    assert_eq!(chart.profile(), Profile::P46);
    assert_eq!(chart.incarnation_cross().angle, Angle::Right);
    assert_eq!(chart.incarnation_cross().name(), "Service");
}

#[test]
fn golden_composite() {
    let composite = calculator()
        .composite(instant(BIRTH_A), instant(BIRTH_B))
        .unwrap();
    let definition = composite.definition();

    assert_eq!(
        definition.active_channels().iter().copied().collect::<Vec<_>>(),
        channels(&[(4, 63), (6, 59), (18, 58), (20, 34), (30, 41)])
    );
    assert_eq!(definition.splits(), 2);
    assert_eq!(definition.chart_type(), ChartType::ManifestingGenerator);
    assert_eq!(definition.strategy(), Strategy::Emotional);

    let expected = [
        ((4, 63), ChannelDominance::Companion),
        ((6, 59), ChannelDominance::CompromiseFirstDominating),
        ((18, 58), ChannelDominance::SecondDominating),
        ((20, 34), ChannelDominance::FirstDominating),
        ((30, 41), ChannelDominance::Magnetic),
    ];
    assert_eq!(composite.channel_dominance().len(), expected.len());
    for ((a, b), dominance) in expected {
        assert_eq!(composite.dominance(channel(a, b)), dominance, "{a}-{b}");
    }
    assert_eq!(composite.dominance(channel(1, 8)), ChannelDominance::None);

    let breakdown = composite.breakdown();
    assert_eq!(breakdown.channel(channel(18, 58)), ActivationKind::Second);
    assert_eq!(breakdown.channel(channel(20, 34)), ActivationKind::First);
    assert_eq!(breakdown.channel(channel(30, 41)), ActivationKind::Mixed);
    assert_eq!(breakdown.center(Center::Spleen), ActivationKind::Second);
    assert_eq!(breakdown.center(Center::Throat), ActivationKind::First);
    assert_eq!(breakdown.center(Center::Root), ActivationKind::Mixed);
    assert_eq!(breakdown.center(Center::G), ActivationKind::None);
}

#[test]
fn golden_composite_fixations() {
    let composite = calculator()
        .composite(instant(BIRTH_A), instant(BIRTH_B))
        .unwrap();

    // Gate 41 is completed by the partner's gate 30.
    let first = composite.first_fixations();
    let node = first.personality[&Planet::NorthNode];
    assert_eq!(node.state, FixingState::EXALTED);
    assert!(node.changed_by_comparator);
    assert!(first.design[&Planet::NorthNode].changed_by_comparator);
    assert!(!first.personality[&Planet::Mars].changed_by_comparator);

    let second = composite.second_fixations();
    assert_eq!(second.personality[&Planet::Mercury].state, FixingState::EXALTED);
    assert!(second.personality[&Planet::Mercury].changed_by_comparator);
    assert_eq!(second.personality[&Planet::Moon].state, FixingState::DETRIMENT);
    assert!(!second.personality[&Planet::Neptune].changed_by_comparator);
}

// ─────────────────────────────────────────────────────────────────────────────
// Scenario 3: transit
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn golden_transit() {
    let transit = calculator()
        .transit(instant(BIRTH_A), instant(TRANSIT))
        .unwrap();

    let gates: Vec<(Planet, u8)> = transit
        .transit()
        .iter()
        .map(|(&p, a)| (p, a.gate.number()))
        .collect();
    assert_eq!(
        gates,
        vec![
            (Planet::Sun, 10),
            (Planet::Earth, 15),
            (Planet::NorthNode, 49),
            (Planet::SouthNode, 4),
            (Planet::Moon, 39),
            (Planet::Mercury, 12),
            (Planet::Venus, 25),
            (Planet::Mars, 26),
            (Planet::Jupiter, 27),
            (Planet::Saturn, 36),
            (Planet::Uranus, 60),
            (Planet::Neptune, 61),
            (Planet::Pluto, 19),
        ]
    );

    let expected = [
        ((4, 63), ChannelDominance::CompromiseFirstDominating),
        ((6, 59), ChannelDominance::FirstDominating),
        ((10, 20), ChannelDominance::Magnetic),
        ((10, 34), ChannelDominance::Magnetic),
        ((19, 49), ChannelDominance::SecondDominating),
        ((20, 34), ChannelDominance::FirstDominating),
        ((39, 55), ChannelDominance::Magnetic),
    ];
    assert_eq!(
        transit.definition().active_channels().len(),
        expected.len()
    );
    for ((a, b), dominance) in expected {
        assert_eq!(transit.dominance(channel(a, b)), dominance, "{a}-{b}");
    }
    assert_eq!(transit.definition().chart_type(), ChartType::ManifestingGenerator);
    assert_eq!(transit.definition().strategy(), Strategy::Emotional);

    let breakdown = transit.breakdown();
    for center in [Center::Head, Center::Ajna, Center::Throat, Center::G, Center::Root] {
        assert_eq!(breakdown.center(center), ActivationKind::Mixed, "{center:?}");
    }
    assert_eq!(breakdown.center(Center::Heart), ActivationKind::None);
    assert_eq!(breakdown.center(Center::Spleen), ActivationKind::None);
}

#[test]
fn golden_transit_fixations() {
    let transit = calculator()
        .transit(instant(BIRTH_A), instant(TRANSIT))
        .unwrap();

    let sky = transit.transit_fixations();
    assert_eq!(sky[&Planet::Sun].state, FixingState::EXALTED);
    assert!(sky[&Planet::Sun].changed_by_comparator);
    assert_eq!(sky[&Planet::Venus].state, FixingState::EXALTED);
    assert!(!sky[&Planet::Venus].changed_by_comparator);

    let person = transit.person_fixations();
    assert_eq!(person.personality[&Planet::Mars].state, FixingState::DETRIMENT);
    assert!(person.personality[&Planet::Sun].state.is_none());
}

// ─────────────────────────────────────────────────────────────────────────────
// Range guess
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn golden_guess_over_twelve_hours() {
    let start = instant(BIRTH_A);
    let guesses = calculator().guess(start, start + Duration::hours(12)).unwrap();

    let total: f64 = guesses.iter().map(|g| g.probability).sum();
    assert!((total - 1.0).abs() < 1e-9, "total {total}");

    let share = |profile: Profile| -> f64 {
        guesses
            .iter()
            .filter(|g| g.chart.profile() == profile)
            .map(|g| g.probability)
            .sum()
    };
    // Depth limit 7: every leaf weighs a multiple of 1/128.
    assert!((share(Profile::P13) - 78.0 / 128.0).abs() < 1e-9, "1/3 {}", share(Profile::P13));
    assert!((share(Profile::P14) - 32.0 / 128.0).abs() < 1e-9, "1/4 {}", share(Profile::P14));
    assert!((share(Profile::P24) - 18.0 / 128.0).abs() < 1e-9, "2/4 {}", share(Profile::P24));

    // First seen is the chart at the start of the range.
    assert_eq!(guesses[0].chart.birth(), start);
    assert_eq!(guesses[0].chart.profile(), Profile::P13);
}

#[test]
fn golden_guess_static_sky_is_certain() {
    init_tracing();
    let start = instant(BIRTH_A);
    let eph = LinearEphemeris::new(start)
        .with_fixed(Planet::Sun, 240.635)
        .with_fixed(Planet::Moon, 174.0725)
        .with_fixed(Planet::NorthNode, 306.26)
        .with_fixed(Planet::Mercury, 191.885)
        .with_fixed(Planet::Venus, 106.5725)
        .with_fixed(Planet::Mars, 142.1975)
        .with_fixed(Planet::Jupiter, 343.76)
        .with_fixed(Planet::Saturn, 43.76)
        .with_fixed(Planet::Uranus, 82.1975)
        .with_fixed(Planet::Neptune, 314.6975)
        .with_fixed(Planet::Pluto, 215.3225);

    // A motionless Sun never lags by the design arc.
    let calc = ChartCalculator::new(eph);
    let err = calc.guess(start, start + Duration::hours(12)).unwrap_err();
    assert!(matches!(err, ChartError::DesignDate(_)));
}

#[test]
fn golden_guess_short_range_is_certain() {
    let start = instant(BIRTH_A);
    let guesses = calculator().guess(start, start + Duration::minutes(5)).unwrap();
    assert_eq!(guesses.len(), 1);
    assert_eq!(guesses[0].probability, 1.0);
}

#[test]
fn golden_guess_rejects_empty_range() {
    let start = instant(BIRTH_A);
    let err = calculator().guess(start, start).unwrap_err();
    assert!(matches!(err, ChartError::InvalidRange { .. }));
}
