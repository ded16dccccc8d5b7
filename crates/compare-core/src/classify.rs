//! Locale-free metric classification
//!
//! Every threshold lives here, once. Renderers only ever see the resulting
//! category, so the English and Chinese commentary cannot disagree about which
//! bucket a pair falls into.

use crate::metrics::Side;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A ratio strictly above this marks A as dominant
pub const DOMINANCE_RATIO: f64 = 1.5;

/// Values at or below this count as "none" for presence metrics
pub const PRESENCE_THRESHOLD: f64 = 0.0;

/// Relative gap strictly above this is called out as significant
pub const SIGNIFICANT_RELATIVE_GAP: f64 = 0.5;

/// Lower ratio bound, the reciprocal of [`DOMINANCE_RATIO`]
///
/// `a / b` below this bound means B is dominant. [`classify_ratio`] tests the
/// equivalent `b / a > DOMINANCE_RATIO`.
pub fn lower_dominance_bound() -> f64 {
    1.0 / DOMINANCE_RATIO
}

/// Bucket for ratio-based metrics (market cap, beta)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioCategory {
    ADominant,
    BDominant,
    Comparable,
    /// A zero, negative or non-finite value makes the ratio meaningless
    Indeterminate,
}

impl RatioCategory {
    pub const ALL: [RatioCategory; 4] = [
        RatioCategory::ADominant,
        RatioCategory::BDominant,
        RatioCategory::Comparable,
        RatioCategory::Indeterminate,
    ];

    pub fn key(self) -> &'static str {
        match self {
            RatioCategory::ADominant => "a_dominant",
            RatioCategory::BDominant => "b_dominant",
            RatioCategory::Comparable => "comparable",
            RatioCategory::Indeterminate => "indeterminate",
        }
    }

    /// Category of the same pair with A and B exchanged
    pub fn mirrored(self) -> Self {
        match self {
            RatioCategory::ADominant => RatioCategory::BDominant,
            RatioCategory::BDominant => RatioCategory::ADominant,
            other => other,
        }
    }
}

/// Classify `value_a / value_b`
///
/// Both values must be finite and strictly positive; anything else is
/// [`RatioCategory::Indeterminate`] and no division takes place.
pub fn classify_ratio(value_a: f64, value_b: f64) -> RatioCategory {
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(value_a) || !usable(value_b) {
        debug!(value_a, value_b, "ratio classification indeterminate");
        return RatioCategory::Indeterminate;
    }

    // Mirrored quotient: classify_ratio(b, a) == classify_ratio(a, b).mirrored()
    let ratio = value_a / value_b;
    let category = if ratio > DOMINANCE_RATIO {
        RatioCategory::ADominant
    } else if value_b / value_a > DOMINANCE_RATIO {
        RatioCategory::BDominant
    } else {
        RatioCategory::Comparable
    };

    debug!(ratio, ?category, "ratio classified");
    category
}

/// Whether a single value counts as present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Presence {
    Has,
    Absent,
}

impl Presence {
    pub fn of(value: f64) -> Self {
        if value > PRESENCE_THRESHOLD {
            Presence::Has
        } else {
            Presence::Absent
        }
    }

    pub fn of_flag(flag: bool) -> Self {
        if flag { Presence::Has } else { Presence::Absent }
    }
}

/// Bucket for presence-based metrics (dividend yield, ADR status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenceCategory {
    NeitherHas,
    OnlyAHas,
    OnlyBHas,
    BothHave,
}

impl PresenceCategory {
    pub const ALL: [PresenceCategory; 4] = [
        PresenceCategory::NeitherHas,
        PresenceCategory::OnlyAHas,
        PresenceCategory::OnlyBHas,
        PresenceCategory::BothHave,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PresenceCategory::NeitherHas => "neither_has",
            PresenceCategory::OnlyAHas => "only_a_has",
            PresenceCategory::OnlyBHas => "only_b_has",
            PresenceCategory::BothHave => "both_have",
        }
    }

    pub fn combine(a: Presence, b: Presence) -> Self {
        match (a, b) {
            (Presence::Absent, Presence::Absent) => PresenceCategory::NeitherHas,
            (Presence::Has, Presence::Absent) => PresenceCategory::OnlyAHas,
            (Presence::Absent, Presence::Has) => PresenceCategory::OnlyBHas,
            (Presence::Has, Presence::Has) => PresenceCategory::BothHave,
        }
    }
}

/// Classify two numeric values by presence (`> 0` means present)
pub fn classify_presence(value_a: f64, value_b: f64) -> PresenceCategory {
    PresenceCategory::combine(Presence::of(value_a), Presence::of(value_b))
}

/// Classify two boolean flags by presence
pub fn classify_flags(flag_a: bool, flag_b: bool) -> PresenceCategory {
    PresenceCategory::combine(Presence::of_flag(flag_a), Presence::of_flag(flag_b))
}

/// Secondary bucket inside [`PresenceCategory::BothHave`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapCategory {
    /// The named side is far above the other
    Significant { higher: Side },
    Similar,
}

impl GapCategory {
    pub fn key(self) -> &'static str {
        match self {
            GapCategory::Significant { .. } => "gap_significant",
            GapCategory::Similar => "gap_similar",
        }
    }
}

/// `(max - min) / min`
///
/// Only meaningful when both values are positive, which
/// [`PresenceCategory::BothHave`] guarantees.
pub fn relative_gap(value_a: f64, value_b: f64) -> f64 {
    let higher = value_a.max(value_b);
    let lower = value_a.min(value_b);
    (higher - lower) / lower
}

/// Classify the gap between two positive values
pub fn classify_gap(value_a: f64, value_b: f64) -> GapCategory {
    debug_assert!(
        value_a > PRESENCE_THRESHOLD && value_b > PRESENCE_THRESHOLD,
        "gap classification requires both values present"
    );

    let gap = relative_gap(value_a, value_b);
    if gap > SIGNIFICANT_RELATIVE_GAP {
        let higher = if value_a > value_b { Side::A } else { Side::B };
        GapCategory::Significant { higher }
    } else {
        GapCategory::Similar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_buckets() {
        assert_eq!(classify_ratio(3.0e9, 1.0e9), RatioCategory::ADominant);
        assert_eq!(classify_ratio(1.0e9, 3.0e9), RatioCategory::BDominant);
        assert_eq!(classify_ratio(1.0, 1.0), RatioCategory::Comparable);
        assert_eq!(classify_ratio(1.2, 1.0), RatioCategory::Comparable);
    }

    #[test]
    fn test_ratio_boundaries_are_strict() {
        // ratio == 1.5
        assert_eq!(classify_ratio(3.0, 2.0), RatioCategory::Comparable);
        assert_eq!(classify_ratio(1.5, 1.0), RatioCategory::Comparable);
        // ratio == 1 / 1.5
        assert_eq!(classify_ratio(2.0, 3.0), RatioCategory::Comparable);
        assert_eq!(classify_ratio(1.0, 1.5), RatioCategory::Comparable);
        // just past either bound
        assert_eq!(classify_ratio(1.51, 1.0), RatioCategory::ADominant);
        assert_eq!(classify_ratio(1.0, 1.51), RatioCategory::BDominant);
    }

    #[test]
    fn test_lower_bound_is_reciprocal() {
        assert!((lower_dominance_bound() * DOMINANCE_RATIO - 1.0).abs() < f64::EPSILON);
        assert!((lower_dominance_bound() - 0.6667).abs() < 1e-3);
    }

    #[test]
    fn test_ratio_antisymmetric_under_swap() {
        let values: Vec<f64> = (1..=40)
            .map(f64::from)
            .chain([0.25, 0.5, 0.75, 1.25, 1.75, 1e9, 2.5e12])
            .collect();

        for &a in &values {
            for &b in &values {
                let forward = classify_ratio(a, b);
                let backward = classify_ratio(b, a);
                assert_eq!(forward.mirrored(), backward, "a={a}, b={b}");
            }
        }
    }

    /// `value` moved by `steps` representable doubles (positive values only)
    fn nudge(value: f64, steps: i64) -> f64 {
        f64::from_bits(value.to_bits().wrapping_add_signed(steps))
    }

    #[test]
    fn test_ratio_antisymmetric_at_boundary() {
        assert_eq!(
            classify_ratio(1319.750250752257, 879.8335005015045).mirrored(),
            classify_ratio(879.8335005015045, 1319.750250752257)
        );

        for i in 0..5_000_u32 {
            let b = 0.01 + f64::from(i) * 0.7331;
            let edge = DOMINANCE_RATIO * b;
            for steps in -3..=3 {
                let a = nudge(edge, steps);
                let forward = classify_ratio(a, b);
                let backward = classify_ratio(b, a);
                assert_eq!(forward.mirrored(), backward, "a={a}, b={b}");
            }
        }
    }

    #[test]
    fn test_ratio_degenerate_inputs() {
        assert_eq!(classify_ratio(1.0, 0.0), RatioCategory::Indeterminate);
        assert_eq!(classify_ratio(0.0, 1.0), RatioCategory::Indeterminate);
        assert_eq!(classify_ratio(0.0, 0.0), RatioCategory::Indeterminate);
        assert_eq!(classify_ratio(-0.5, 1.2), RatioCategory::Indeterminate);
        assert_eq!(classify_ratio(1.0, f64::NAN), RatioCategory::Indeterminate);
        assert_eq!(
            classify_ratio(f64::INFINITY, 1.0),
            RatioCategory::Indeterminate
        );
    }

    #[test]
    fn test_presence_of_value() {
        assert_eq!(Presence::of(0.0), Presence::Absent);
        assert_eq!(Presence::of(-0.0), Presence::Absent);
        assert_eq!(Presence::of(-1.2), Presence::Absent);
        assert_eq!(Presence::of(0.0001), Presence::Has);
        assert_eq!(Presence::of(3.0), Presence::Has);
    }

    #[test]
    fn test_presence_all_four_combinations() {
        assert_eq!(classify_presence(0.0, 0.0), PresenceCategory::NeitherHas);
        assert_eq!(classify_presence(1.0, 0.0), PresenceCategory::OnlyAHas);
        assert_eq!(classify_presence(0.0, 1.0), PresenceCategory::OnlyBHas);
        assert_eq!(classify_presence(1.0, 2.0), PresenceCategory::BothHave);

        assert_eq!(classify_flags(false, false), PresenceCategory::NeitherHas);
        assert_eq!(classify_flags(true, false), PresenceCategory::OnlyAHas);
        assert_eq!(classify_flags(false, true), PresenceCategory::OnlyBHas);
        assert_eq!(classify_flags(true, true), PresenceCategory::BothHave);
    }

    #[test]
    fn test_gap_threshold_is_strict() {
        assert_eq!(relative_gap(1.5, 1.0), 0.5);
        assert_eq!(classify_gap(1.5, 1.0), GapCategory::Similar);
        assert_eq!(
            classify_gap(1.51, 1.0),
            GapCategory::Significant { higher: Side::A }
        );
        assert_eq!(
            classify_gap(1.0, 1.51),
            GapCategory::Significant { higher: Side::B }
        );
    }

    #[test]
    fn test_gap_scenario() {
        assert_eq!(relative_gap(3.0, 1.0), 2.0);
        assert_eq!(
            classify_gap(3.0, 1.0),
            GapCategory::Significant { higher: Side::A }
        );
        assert_eq!(classify_gap(2.0, 2.0), GapCategory::Similar);
    }

    #[test]
    fn test_keys() {
        assert_eq!(RatioCategory::ADominant.key(), "a_dominant");
        assert_eq!(PresenceCategory::BothHave.key(), "both_have");
        assert_eq!(GapCategory::Similar.key(), "gap_similar");
    }
}
