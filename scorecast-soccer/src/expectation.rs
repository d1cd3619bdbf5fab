//! Expected goals (λ) per side from team strengths and the travel distance between venues.

use crate::config::PredictionConfig;
use crate::domain::{Fixture, Side, TeamStrengths, TravelDistance};

/// Ceiling on the raw strength product, applied before any adjustment. Guards against malformed
/// strength ratings independently of the configured floor and cap.
pub const MAX_BASE_EXPECTATION: f64 = 10.0;

/// The scoring rate of each side in a fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct Expectations {
    pub home: f64,
    pub away: f64,
}
impl Expectations {
    pub fn derive(fixture: &Fixture, config: &PredictionConfig) -> Self {
        let travel_distance = fixture.context.travel_distance;
        Self {
            home: expected_goals(&fixture.home, &fixture.away, travel_distance, Side::Home, config),
            away: expected_goals(&fixture.away, &fixture.home, travel_distance, Side::Away, config),
        }
    }

    pub fn get(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

/// Expected goals for the `attacking` team playing on `side` against `defending`. Never fails;
/// out-of-range inputs are clamped. Should the floor exceed the cap, the cap prevails.
pub fn expected_goals(
    attacking: &TeamStrengths,
    defending: &TeamStrengths,
    travel_distance: TravelDistance,
    side: Side,
    config: &PredictionConfig,
) -> f64 {
    let base = base_expectation(attacking, defending, side);
    let adjusted = adjust_for_travel(base, travel_distance, side, config);
    adjusted.max(config.min_goals_floor).min(config.max_goals_cap)
}

/// The attacking side's attack rating multiplied by the defending side's complementary defence
/// rating, clamped to `[0, MAX_BASE_EXPECTATION]`.
pub fn base_expectation(attacking: &TeamStrengths, defending: &TeamStrengths, side: Side) -> f64 {
    let product = attacking.attack(side) * defending.defence(side.opposite());
    if product.is_nan() {
        0.0
    } else {
        product.clamp(0.0, MAX_BASE_EXPECTATION)
    }
}

/// Applies the derby boost (both sides) and the travel penalty (away side only) to `base`. The
/// result is not clamped to the configured floor and cap.
pub fn adjust_for_travel(
    base: f64,
    travel_distance: TravelDistance,
    side: Side,
    config: &PredictionConfig,
) -> f64 {
    let Some(distance) = travel_distance.known() else {
        return base;
    };

    let mut adjusted = base;
    if distance < config.derby.threshold {
        adjusted *= config.derby.multiplier;
    }
    if side == Side::Away {
        adjusted *= travel_penalty(distance, config);
    }
    adjusted
}

/// The penalty of the longest travel band that `distance` reaches, or 1 if it reaches none.
pub fn travel_penalty(distance: u32, config: &PredictionConfig) -> f64 {
    config
        .travel
        .descending()
        .into_iter()
        .find(|band| distance >= band.threshold)
        .map(|band| band.penalty)
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DerbyBoost, TravelBand, TravelBands};
    use crate::domain::MatchContext;
    use assert_float_eq::*;
    use strum::IntoEnumIterator;

    fn strengths(attack: f64, defence: f64) -> TeamStrengths {
        TeamStrengths {
            home_attack: attack,
            away_attack: attack,
            home_defence: defence,
            away_defence: defence,
        }
    }

    fn create_test_config() -> PredictionConfig {
        PredictionConfig {
            derby: DerbyBoost {
                threshold: 10,
                multiplier: 1.06,
            },
            travel: TravelBands {
                short: TravelBand {
                    threshold: 50,
                    penalty: 0.97,
                },
                medium: TravelBand {
                    threshold: 100,
                    penalty: 0.94,
                },
                long: TravelBand {
                    threshold: 200,
                    penalty: 0.91,
                },
                very_long: TravelBand {
                    threshold: 300,
                    penalty: 0.88,
                },
            },
            min_goals_floor: 0.1,
            max_goals_cap: 6.0,
            ..PredictionConfig::default()
        }
    }

    #[test]
    fn base_uses_complementary_defence() {
        let home = TeamStrengths {
            home_attack: 1.5,
            away_attack: 1.1,
            home_defence: 0.8,
            away_defence: 1.3,
        };
        let away = TeamStrengths {
            home_attack: 1.4,
            away_attack: 1.2,
            home_defence: 0.9,
            away_defence: 1.0,
        };
        // home attack at home × visitor's away defence
        assert_float_relative_eq!(1.5, base_expectation(&home, &away, Side::Home), 1e-12);
        // away attack on the road × host's home defence
        assert_float_relative_eq!(0.96, base_expectation(&away, &home, Side::Away), 1e-12);
    }

    #[test]
    fn base_is_clamped() {
        assert_eq!(10.0, base_expectation(&strengths(5.0, 5.0), &strengths(5.0, 5.0), Side::Home));
        assert_eq!(0.0, base_expectation(&strengths(-1.0, 1.0), &strengths(1.0, 1.0), Side::Home));
        assert_eq!(0.0, base_expectation(&strengths(f64::NAN, 1.0), &strengths(1.0, 1.0), Side::Away));
        assert_eq!(
            10.0,
            base_expectation(&strengths(f64::INFINITY, 1.0), &strengths(1.0, 1.0), Side::Away)
        );
    }

    #[test]
    fn unknown_distance_returns_clamped_base() {
        let config = create_test_config();
        let (home, away) = (strengths(1.5, 1.0), strengths(1.2, 1.0));
        for side in Side::iter() {
            let (attacking, defending) = match side {
                Side::Home => (&home, &away),
                Side::Away => (&away, &home),
            };
            let base = base_expectation(attacking, defending, side);
            assert_eq!(base, adjust_for_travel(base, TravelDistance::Unknown, side, &config));
            assert_eq!(
                base,
                expected_goals(attacking, defending, TravelDistance::Unknown, side, &config)
            );
            assert_eq!(
                base,
                expected_goals(attacking, defending, TravelDistance::from(0), side, &config)
            );
        }
    }

    #[test]
    fn derby_boost() {
        let config = create_test_config();
        let adjusted = adjust_for_travel(1.5, TravelDistance::Known(5), Side::Home, &config);
        assert_float_relative_eq!(1.59, adjusted, 1e-12);
    }

    #[test]
    fn derby_boost_applies_to_both_sides() {
        let config = create_test_config();
        let fixture = Fixture {
            name: None,
            home: strengths(1.5, 1.0),
            away: strengths(1.2, 1.0),
            context: MatchContext {
                travel_distance: TravelDistance::Known(5),
            },
        };
        let expectations = Expectations::derive(&fixture, &config);
        assert_float_relative_eq!(1.5 * 1.06, expectations.home, 1e-12);
        assert_float_relative_eq!(1.2 * 1.06, expectations.away, 1e-12);
        assert_float_relative_eq!(
            expectations.home / 1.5,
            expectations.away / 1.2,
            1e-12
        );
    }

    #[test]
    fn very_long_travel_penalises_away_only() {
        let config = create_test_config();
        let distance = TravelDistance::Known(350);
        assert_float_relative_eq!(
            1.056,
            adjust_for_travel(1.2, distance, Side::Away, &config),
            1e-12
        );
        assert_eq!(1.2, adjust_for_travel(1.2, distance, Side::Home, &config));

        let fixture = Fixture {
            name: None,
            home: strengths(1.5, 1.0),
            away: strengths(1.2, 1.0),
            context: MatchContext {
                travel_distance: distance,
            },
        };
        let expectations = Expectations::derive(&fixture, &config);
        assert_eq!(1.5, expectations.get(Side::Home));
        assert_float_relative_eq!(1.056, expectations.get(Side::Away), 1e-12);
    }

    #[test]
    fn travel_penalty_bands() {
        let config = create_test_config();
        assert_eq!(1.0, travel_penalty(10, &config));
        assert_eq!(1.0, travel_penalty(49, &config));
        assert_eq!(0.97, travel_penalty(50, &config));
        assert_eq!(0.97, travel_penalty(99, &config));
        assert_eq!(0.94, travel_penalty(100, &config));
        assert_eq!(0.91, travel_penalty(200, &config));
        assert_eq!(0.91, travel_penalty(299, &config));
        assert_eq!(0.88, travel_penalty(300, &config));
        assert_eq!(0.88, travel_penalty(u32::MAX, &config));
    }

    #[test]
    fn derby_and_travel_combine() {
        let mut config = create_test_config();
        config.derby.threshold = 60;
        // 55 is both a derby and a short trip
        let adjusted = adjust_for_travel(1.0, TravelDistance::Known(55), Side::Away, &config);
        assert_float_relative_eq!(1.06 * 0.97, adjusted, 1e-12);
        let adjusted = adjust_for_travel(1.0, TravelDistance::Known(55), Side::Home, &config);
        assert_float_relative_eq!(1.06, adjusted, 1e-12);
    }

    #[test]
    fn adjusted_result_is_clamped() {
        let config = create_test_config();
        let (strong, weak) = (strengths(3.0, 3.0), strengths(0.01, 0.01));
        let distance = TravelDistance::Known(5);
        assert_eq!(6.0, expected_goals(&strong, &strong, distance, Side::Home, &config));
        assert_eq!(0.1, expected_goals(&weak, &weak, distance, Side::Away, &config));
    }

    #[test]
    fn inverted_or_nan_bounds_do_not_panic() {
        let (home, away) = (strengths(1.5, 1.0), strengths(1.2, 1.0));
        let config = PredictionConfig {
            min_goals_floor: 3.0,
            max_goals_cap: 2.0,
            ..create_test_config()
        };
        assert_eq!(2.0, expected_goals(&home, &away, TravelDistance::Unknown, Side::Home, &config));

        let config = PredictionConfig {
            min_goals_floor: f64::NAN,
            max_goals_cap: f64::NAN,
            ..create_test_config()
        };
        assert_eq!(1.5, expected_goals(&home, &away, TravelDistance::Unknown, Side::Home, &config));
    }
}
