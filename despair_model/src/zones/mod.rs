//! Zone classification of despair vectors.
//!
//! Each axis has two "extreme" zones, tested with strict inequalities against
//! [`EXTREME_LOW`] and [`EXTREME_HIGH`], and a balanced band that includes both
//! thresholds. The two predicates are deliberately different at 0.4 and 0.6.

use serde::{Deserialize, Serialize};

use crate::entities::DespairVector;

/// Values strictly below this are in the low extreme zone.
pub const EXTREME_LOW: f32 = 0.4;

/// Values strictly above this are in the high extreme zone.
pub const EXTREME_HIGH: f32 = 0.6;

/// The three axes of despair space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Axis {
    /// 0 = finite (losing oneself in the world), 1 = infinite (losing the world in oneself).
    FiniteInfinite,
    /// 0 = necessity (determinism), 1 = possibility (paralysis of choice).
    NecessityPossibility,
    /// 0 = unawareness, 1 = full awareness.
    Consciousness,
}

impl Axis {
    pub const ALL: [Axis; 3] = [
        Axis::FiniteInfinite,
        Axis::NecessityPossibility,
        Axis::Consciousness,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Axis::FiniteInfinite => "finiteInfinite",
            Axis::NecessityPossibility => "necessityPossibility",
            Axis::Consciousness => "consciousness",
        }
    }

    /// Read this axis' coordinate from a vector.
    pub fn value(&self, vector: &DespairVector) -> f32 {
        match self {
            Axis::FiniteInfinite => vector.finite_infinite,
            Axis::NecessityPossibility => vector.necessity_possibility,
            Axis::Consciousness => vector.consciousness,
        }
    }
}

/// Position of one coordinate relative to the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisZone {
    /// Strictly below 0.4.
    Low,
    /// Between 0.4 and 0.6 inclusive.
    Balanced,
    /// Strictly above 0.6.
    High,
}

impl AxisZone {
    /// Classify a single coordinate. NaN is treated as balanced.
    pub fn of(value: f32) -> Self {
        if value < EXTREME_LOW {
            AxisZone::Low
        } else if value > EXTREME_HIGH {
            AxisZone::High
        } else {
            AxisZone::Balanced
        }
    }

    pub fn is_extreme(&self) -> bool {
        !matches!(self, AxisZone::Balanced)
    }
}

/// Discrete zone flags derived from a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneFlags {
    pub is_infinite: bool,
    pub is_finite: bool,
    pub is_possibility: bool,
    pub is_necessity: bool,
    pub is_conscious: bool,
    pub is_unconscious: bool,
    pub is_semiconscious: bool,
}

/// Compute the zone flags of a vector.
pub fn classify(vector: &DespairVector) -> ZoneFlags {
    let fi = vector.finite_infinite;
    let np = vector.necessity_possibility;
    let c = vector.consciousness;

    ZoneFlags {
        is_infinite: fi > EXTREME_HIGH,
        is_finite: fi < EXTREME_LOW,
        is_possibility: np > EXTREME_HIGH,
        is_necessity: np < EXTREME_LOW,
        is_conscious: c > EXTREME_HIGH,
        is_unconscious: c < EXTREME_LOW,
        is_semiconscious: (EXTREME_LOW..=EXTREME_HIGH).contains(&c),
    }
}

/// Which axis-subtype editors apply to a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisSuggestions {
    pub show_infinity: bool,
    pub show_finitude: bool,
    pub show_possibility: bool,
    pub show_necessity: bool,
    pub show_unawareness: bool,
    pub show_awareness: bool,
}

impl AxisSuggestions {
    /// Whether any axis subtype applies at all.
    pub fn any(&self) -> bool {
        self.show_infinity
            || self.show_finitude
            || self.show_possibility
            || self.show_necessity
            || self.show_unawareness
            || self.show_awareness
    }
}

/// Mirror the six extremity flags of a vector.
pub fn suggested_axis_subtypes(vector: &DespairVector) -> AxisSuggestions {
    let flags = classify(vector);
    AxisSuggestions {
        show_infinity: flags.is_infinite,
        show_finitude: flags.is_finite,
        show_possibility: flags.is_possibility,
        show_necessity: flags.is_necessity,
        show_unawareness: flags.is_unconscious,
        show_awareness: flags.is_conscious,
    }
}
