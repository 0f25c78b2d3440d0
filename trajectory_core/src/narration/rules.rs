//! Label rules: an ordered table of zone conditions, first match wins.

use despair_model::{classify, Point, ZoneFlags};
use serde::{Deserialize, Serialize};

use super::Lexicon;

/// Generated label keys, one per rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelKey {
    DreamerUnknowing,
    ReflectionDevours,
    GrandPlansInFog,
    PolishedPebble,
    KnowsCageAccepted,
    VaguelyFeelsWalls,
    FatalistGrandIdeas,
    KnowsUselessness,
    ConformistPlaying,
    SeesExitsFears,
    LostInAbstractions,
    AwareOfDetachment,
    DissolvedInWorld,
    KnowsLimitations,
    FloatsInPossibilities,
    AwareOfChoiceParalysis,
    AcceptedFateUnthinking,
    ConsciousDeterminist,
    AwareOfOwnDespair,
    UnawareOfIllness,
    VagueAnxiety,
}

impl LabelKey {
    pub const ALL: [LabelKey; 21] = [
        LabelKey::DreamerUnknowing,
        LabelKey::ReflectionDevours,
        LabelKey::GrandPlansInFog,
        LabelKey::PolishedPebble,
        LabelKey::KnowsCageAccepted,
        LabelKey::VaguelyFeelsWalls,
        LabelKey::FatalistGrandIdeas,
        LabelKey::KnowsUselessness,
        LabelKey::ConformistPlaying,
        LabelKey::SeesExitsFears,
        LabelKey::LostInAbstractions,
        LabelKey::AwareOfDetachment,
        LabelKey::DissolvedInWorld,
        LabelKey::KnowsLimitations,
        LabelKey::FloatsInPossibilities,
        LabelKey::AwareOfChoiceParalysis,
        LabelKey::AcceptedFateUnthinking,
        LabelKey::ConsciousDeterminist,
        LabelKey::AwareOfOwnDespair,
        LabelKey::UnawareOfIllness,
        LabelKey::VagueAnxiety,
    ];
}

/// A partial set of zone flags. `None` matches anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabelCondition {
    pub is_infinite: Option<bool>,
    pub is_finite: Option<bool>,
    pub is_possibility: Option<bool>,
    pub is_necessity: Option<bool>,
    pub is_conscious: Option<bool>,
    pub is_unconscious: Option<bool>,
    pub is_semiconscious: Option<bool>,
}

impl LabelCondition {
    pub fn matches(&self, flags: &ZoneFlags) -> bool {
        let check = |wanted: Option<bool>, actual: bool| wanted.map_or(true, |w| w == actual);

        check(self.is_infinite, flags.is_infinite)
            && check(self.is_finite, flags.is_finite)
            && check(self.is_possibility, flags.is_possibility)
            && check(self.is_necessity, flags.is_necessity)
            && check(self.is_conscious, flags.is_conscious)
            && check(self.is_unconscious, flags.is_unconscious)
            && check(self.is_semiconscious, flags.is_semiconscious)
    }
}

/// One row of the label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelRule {
    pub condition: LabelCondition,
    pub key: LabelKey,
}

const fn rule(condition: LabelCondition, key: LabelKey) -> LabelRule {
    LabelRule { condition, key }
}

const fn infinite(c: LabelCondition) -> LabelCondition {
    LabelCondition { is_infinite: Some(true), ..c }
}

const fn finite(c: LabelCondition) -> LabelCondition {
    LabelCondition { is_finite: Some(true), ..c }
}

const fn possibility(c: LabelCondition) -> LabelCondition {
    LabelCondition { is_possibility: Some(true), ..c }
}

const fn necessity(c: LabelCondition) -> LabelCondition {
    LabelCondition { is_necessity: Some(true), ..c }
}

const fn conscious(c: LabelCondition) -> LabelCondition {
    LabelCondition { is_conscious: Some(true), ..c }
}

const fn unconscious(c: LabelCondition) -> LabelCondition {
    LabelCondition { is_unconscious: Some(true), ..c }
}

const fn semiconscious(c: LabelCondition) -> LabelCondition {
    LabelCondition { is_semiconscious: Some(true), ..c }
}

const ANY: LabelCondition = LabelCondition {
    is_infinite: None,
    is_finite: None,
    is_possibility: None,
    is_necessity: None,
    is_conscious: None,
    is_unconscious: None,
    is_semiconscious: None,
};

/// The label table, in priority order. More specific rules come first.
pub const LABEL_RULES: [LabelRule; 21] = [
    // Infinity + possibility
    rule(infinite(possibility(unconscious(ANY))), LabelKey::DreamerUnknowing),
    rule(infinite(possibility(conscious(ANY))), LabelKey::ReflectionDevours),
    rule(infinite(possibility(semiconscious(ANY))), LabelKey::GrandPlansInFog),
    // Finitude + necessity
    rule(finite(necessity(unconscious(ANY))), LabelKey::PolishedPebble),
    rule(finite(necessity(conscious(ANY))), LabelKey::KnowsCageAccepted),
    rule(finite(necessity(semiconscious(ANY))), LabelKey::VaguelyFeelsWalls),
    // Infinity + necessity
    rule(infinite(necessity(unconscious(ANY))), LabelKey::FatalistGrandIdeas),
    rule(infinite(necessity(conscious(ANY))), LabelKey::KnowsUselessness),
    // Finitude + possibility
    rule(finite(possibility(unconscious(ANY))), LabelKey::ConformistPlaying),
    rule(finite(possibility(conscious(ANY))), LabelKey::SeesExitsFears),
    // One extreme axis
    rule(infinite(unconscious(ANY)), LabelKey::LostInAbstractions),
    rule(infinite(conscious(ANY)), LabelKey::AwareOfDetachment),
    rule(finite(unconscious(ANY)), LabelKey::DissolvedInWorld),
    rule(finite(conscious(ANY)), LabelKey::KnowsLimitations),
    rule(possibility(unconscious(ANY)), LabelKey::FloatsInPossibilities),
    rule(possibility(conscious(ANY)), LabelKey::AwareOfChoiceParalysis),
    rule(necessity(unconscious(ANY)), LabelKey::AcceptedFateUnthinking),
    rule(necessity(conscious(ANY)), LabelKey::ConsciousDeterminist),
    // Consciousness only
    rule(conscious(ANY), LabelKey::AwareOfOwnDespair),
    rule(unconscious(ANY), LabelKey::UnawareOfIllness),
    rule(semiconscious(ANY), LabelKey::VagueAnxiety),
];

/// The key of the first rule matching the flags.
pub fn match_label(flags: &ZoneFlags) -> Option<LabelKey> {
    LABEL_RULES
        .iter()
        .find(|rule| rule.condition.matches(flags))
        .map(|rule| rule.key)
}

/// Generate a short label for a point.
///
/// Falls back to the stage (and subtype) name when no rule matches, which for
/// in-range vectors only happens with a NaN consciousness coordinate.
pub fn generate_label(point: &Point, lexicon: &dyn Lexicon) -> String {
    if let Some(text) = match_label(&classify(&point.vector)).and_then(|key| lexicon.label(key)) {
        return text.to_string();
    }

    let stage = lexicon
        .stage_name(point.stage)
        .unwrap_or_else(|| point.stage.key());

    match point
        .stage_subtype
        .and_then(|subtype| lexicon.stage_subtype_name(subtype))
    {
        Some(subtype) => format!("{stage}: {subtype}"),
        None => match lexicon.stage_word() {
            Some(word) => format!("{stage} {word}"),
            None => stage.to_string(),
        },
    }
}
