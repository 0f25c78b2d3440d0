//! The taxonomy of despair: stages of existence, their subtypes, the axis
//! subtypes that refine an extreme coordinate, and transition types.
//!
//! Every key is a closed enum. Unknown or retired keys are only tolerated at
//! the deserialization boundary (see [`migration`]).

pub mod migration;

use serde::{Deserialize, Serialize};

/// Stages of existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Aesthetic,
    Ethical,
    Religious,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Aesthetic, Stage::Ethical, Stage::Religious];

    /// The persisted key of this stage.
    pub fn key(&self) -> &'static str {
        match self {
            Stage::Aesthetic => "aesthetic",
            Stage::Ethical => "ethical",
            Stage::Religious => "religious",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Stage::ALL.into_iter().find(|stage| stage.key() == key)
    }

    /// Subtypes valid for this stage, in display order.
    pub fn subtypes(&self) -> &'static [StageSubtype] {
        match self {
            Stage::Aesthetic => &[
                StageSubtype::Sensual,
                StageSubtype::Romantic,
                StageSubtype::Intellectual,
            ],
            Stage::Ethical => &[StageSubtype::Civic, StageSubtype::Heroic],
            Stage::Religious => &[StageSubtype::Immanent, StageSubtype::Paradoxical],
        }
    }

    /// Default display color for points of this stage.
    pub fn color(&self) -> &'static str {
        match self {
            Stage::Aesthetic => "#a78bfa",
            Stage::Ethical => "#60a5fa",
            Stage::Religious => "#fbbf24",
        }
    }
}

/// Sub-classification of a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageSubtype {
    // Aesthetic
    Sensual,
    Romantic,
    Intellectual,

    // Ethical
    Civic,
    Heroic,

    // Religious
    Immanent,
    Paradoxical,
}

impl StageSubtype {
    pub const ALL: [StageSubtype; 7] = [
        StageSubtype::Sensual,
        StageSubtype::Romantic,
        StageSubtype::Intellectual,
        StageSubtype::Civic,
        StageSubtype::Heroic,
        StageSubtype::Immanent,
        StageSubtype::Paradoxical,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StageSubtype::Sensual => "sensual",
            StageSubtype::Romantic => "romantic",
            StageSubtype::Intellectual => "intellectual",
            StageSubtype::Civic => "civic",
            StageSubtype::Heroic => "heroic",
            StageSubtype::Immanent => "immanent",
            StageSubtype::Paradoxical => "paradoxical",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        StageSubtype::ALL.into_iter().find(|subtype| subtype.key() == key)
    }

    /// The stage this subtype belongs to.
    pub fn stage(&self) -> Stage {
        match self {
            StageSubtype::Sensual | StageSubtype::Romantic | StageSubtype::Intellectual => {
                Stage::Aesthetic
            }
            StageSubtype::Civic | StageSubtype::Heroic => Stage::Ethical,
            StageSubtype::Immanent | StageSubtype::Paradoxical => Stage::Religious,
        }
    }

    pub fn belongs_to(&self, stage: Stage) -> bool {
        self.stage() == stage
    }
}

/// Despair of infinity (finite/infinite coordinate above 0.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfinitySubtype {
    /// Lost in fantasies.
    Imagination,
    /// Knows everything except self.
    Cognition,
    /// Abstract feelings.
    Feeling,
    /// Grand plans without action.
    Will,
}

/// Despair of finitude (finite/infinite coordinate below 0.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinitudeSubtype {
    Conformist,
    Prudent,
}

/// Despair of possibility (necessity/possibility coordinate above 0.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PossibilitySubtype {
    Combinatorial,
    Paralyzed,
}

/// Despair of necessity (necessity/possibility coordinate below 0.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NecessitySubtype {
    Fatalist,
    Determinist,
}

/// Forms of unawareness (consciousness below 0.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnawarenessSubtype {
    Naive,
    Busy,
    Denial,
}

/// Forms of awareness (consciousness above 0.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwarenessSubtype {
    Suffering,
    Defiant,
}

/// Any axis subtype, tagged with the zone it refines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisSubtype {
    Infinity(InfinitySubtype),
    Finitude(FinitudeSubtype),
    Possibility(PossibilitySubtype),
    Necessity(NecessitySubtype),
    Unawareness(UnawarenessSubtype),
    Awareness(AwarenessSubtype),
}

impl AxisSubtype {
    /// Every axis subtype, grouped by zone.
    pub const ALL: [AxisSubtype; 15] = [
        AxisSubtype::Infinity(InfinitySubtype::Imagination),
        AxisSubtype::Infinity(InfinitySubtype::Cognition),
        AxisSubtype::Infinity(InfinitySubtype::Feeling),
        AxisSubtype::Infinity(InfinitySubtype::Will),
        AxisSubtype::Finitude(FinitudeSubtype::Conformist),
        AxisSubtype::Finitude(FinitudeSubtype::Prudent),
        AxisSubtype::Possibility(PossibilitySubtype::Combinatorial),
        AxisSubtype::Possibility(PossibilitySubtype::Paralyzed),
        AxisSubtype::Necessity(NecessitySubtype::Fatalist),
        AxisSubtype::Necessity(NecessitySubtype::Determinist),
        AxisSubtype::Unawareness(UnawarenessSubtype::Naive),
        AxisSubtype::Unawareness(UnawarenessSubtype::Busy),
        AxisSubtype::Unawareness(UnawarenessSubtype::Denial),
        AxisSubtype::Awareness(AwarenessSubtype::Suffering),
        AxisSubtype::Awareness(AwarenessSubtype::Defiant),
    ];

    /// The persisted key of the subtype itself (e.g. `"cognition"`).
    pub fn key(&self) -> &'static str {
        match self {
            AxisSubtype::Infinity(s) => match s {
                InfinitySubtype::Imagination => "imagination",
                InfinitySubtype::Cognition => "cognition",
                InfinitySubtype::Feeling => "feeling",
                InfinitySubtype::Will => "will",
            },
            AxisSubtype::Finitude(s) => match s {
                FinitudeSubtype::Conformist => "conformist",
                FinitudeSubtype::Prudent => "prudent",
            },
            AxisSubtype::Possibility(s) => match s {
                PossibilitySubtype::Combinatorial => "combinatorial",
                PossibilitySubtype::Paralyzed => "paralyzed",
            },
            AxisSubtype::Necessity(s) => match s {
                NecessitySubtype::Fatalist => "fatalist",
                NecessitySubtype::Determinist => "determinist",
            },
            AxisSubtype::Unawareness(s) => match s {
                UnawarenessSubtype::Naive => "naive",
                UnawarenessSubtype::Busy => "busy",
                UnawarenessSubtype::Denial => "denial",
            },
            AxisSubtype::Awareness(s) => match s {
                AwarenessSubtype::Suffering => "suffering",
                AwarenessSubtype::Defiant => "defiant",
            },
        }
    }

    /// The zone family key (e.g. `"infinity"`), as used in exported breakdowns.
    pub fn family(&self) -> &'static str {
        match self {
            AxisSubtype::Infinity(_) => "infinity",
            AxisSubtype::Finitude(_) => "finitude",
            AxisSubtype::Possibility(_) => "possibility",
            AxisSubtype::Necessity(_) => "necessity",
            AxisSubtype::Unawareness(_) => "unawareness",
            AxisSubtype::Awareness(_) => "awareness",
        }
    }

    /// Parse a subtype key within a zone family.
    pub fn from_family_key(family: &str, key: &str) -> Option<Self> {
        AxisSubtype::ALL
            .into_iter()
            .find(|subtype| subtype.family() == family && subtype.key() == key)
    }

    /// All subtype keys of one zone family, in display order.
    pub fn keys_of_family(family: &str) -> Vec<&'static str> {
        AxisSubtype::ALL
            .into_iter()
            .filter(|subtype| subtype.family() == family)
            .map(|subtype| subtype.key())
            .collect()
    }
}

/// Kinds of transition between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransitionType {
    /// Gradual, smooth development of state.
    #[default]
    Evolution,
    /// Sharp turning point caused by a specific event.
    Crisis,
    /// Alternative path of development.
    Branch,
}

impl TransitionType {
    pub fn key(&self) -> &'static str {
        match self {
            TransitionType::Evolution => "evolution",
            TransitionType::Crisis => "crisis",
            TransitionType::Branch => "branch",
        }
    }

    /// Display color for connections of this type.
    pub fn color(&self) -> &'static str {
        match self {
            TransitionType::Evolution => "#6b7280",
            TransitionType::Crisis => "#ef4444",
            TransitionType::Branch => "#f97316",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtypes_belong_to_their_stage() {
        for stage in Stage::ALL {
            for subtype in stage.subtypes() {
                assert_eq!(subtype.stage(), stage);
                assert!(subtype.belongs_to(stage));
            }
        }
        assert!(!StageSubtype::Civic.belongs_to(Stage::Religious));
    }

    #[test]
    fn test_stage_keys_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_key(stage.key()), Some(stage));
        }
        for subtype in StageSubtype::ALL {
            assert_eq!(StageSubtype::from_key(subtype.key()), Some(subtype));
        }
        assert_eq!(StageSubtype::from_key("bourgeois"), None);
    }

    #[test]
    fn test_axis_subtype_families() {
        assert_eq!(
            AxisSubtype::keys_of_family("infinity"),
            vec!["imagination", "cognition", "feeling", "will"]
        );
        assert_eq!(AxisSubtype::keys_of_family("awareness"), vec!["suffering", "defiant"]);
        assert_eq!(
            AxisSubtype::from_family_key("necessity", "fatalist"),
            Some(AxisSubtype::Necessity(NecessitySubtype::Fatalist))
        );
        assert_eq!(AxisSubtype::from_family_key("possibility", "fatalist"), None);
    }

    #[test]
    fn test_serde_keys() {
        let json = serde_json::to_string(&StageSubtype::Paradoxical).unwrap();
        assert_eq!(json, "\"paradoxical\"");
        let stage: Stage = serde_json::from_str("\"religious\"").unwrap();
        assert_eq!(stage, Stage::Religious);
        let transition: TransitionType = serde_json::from_str("\"crisis\"").unwrap();
        assert_eq!(transition, TransitionType::Crisis);
    }
}
