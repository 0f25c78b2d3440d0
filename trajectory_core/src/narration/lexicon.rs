//! Display text for taxonomy keys.

use despair_model::{
    AwarenessSubtype, Axis, AxisSubtype, AxisZone, FinitudeSubtype, InfinitySubtype,
    NecessitySubtype, PossibilitySubtype, Stage, StageSubtype, TransitionType, UnawarenessSubtype,
};

use super::LabelKey;

/// A description entry: a one-line summary and the full paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Description<'a> {
    pub short: &'a str,
    pub full: &'a str,
}

const fn entry(short: &'static str, full: &'static str) -> Option<Description<'static>> {
    Some(Description { short, full })
}

/// Source of every human-readable string the generators emit.
///
/// Any lookup may come back empty; generators omit what a lexicon lacks.
pub trait Lexicon {
    fn stage_name(&self, stage: Stage) -> Option<&str>;
    fn stage_subtype_name(&self, subtype: StageSubtype) -> Option<&str>;
    fn axis_subtype_name(&self, subtype: AxisSubtype) -> Option<&str>;
    fn transition_name(&self, transition: TransitionType) -> Option<&str>;

    /// Name of a zone of one axis (e.g. "Infinite", "Semi-conscious").
    fn zone_name(&self, axis: Axis, zone: AxisZone) -> Option<&str>;

    fn label(&self, key: LabelKey) -> Option<&str>;

    /// The word appended to a stage name in fallback labels ("stage").
    fn stage_word(&self) -> Option<&str>;

    fn stage_description(&self, stage: Stage) -> Option<Description<'_>>;
    fn stage_subtype_description(&self, subtype: StageSubtype) -> Option<Description<'_>>;
    fn axis_subtype_description(&self, subtype: AxisSubtype) -> Option<Description<'_>>;

    /// Generic text for a consciousness zone, used when no subtype is chosen.
    fn consciousness_description(&self, zone: AxisZone) -> Option<Description<'_>>;

    fn salvation_title(&self) -> Option<&str>;
    fn salvation_description(&self) -> Option<&str>;
}

/// The built-in English lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct English;

impl Lexicon for English {
    fn stage_name(&self, stage: Stage) -> Option<&str> {
        Some(match stage {
            Stage::Aesthetic => "Aesthetic",
            Stage::Ethical => "Ethical",
            Stage::Religious => "Religious",
        })
    }

    fn stage_subtype_name(&self, subtype: StageSubtype) -> Option<&str> {
        Some(match subtype {
            StageSubtype::Sensual => "Sensual",
            StageSubtype::Romantic => "Romantic",
            StageSubtype::Intellectual => "Intellectual",
            StageSubtype::Civic => "Civic",
            StageSubtype::Heroic => "Tragic Hero",
            StageSubtype::Immanent => "Immanent",
            StageSubtype::Paradoxical => "Paradoxical",
        })
    }

    fn axis_subtype_name(&self, subtype: AxisSubtype) -> Option<&str> {
        Some(match subtype {
            AxisSubtype::Infinity(s) => match s {
                InfinitySubtype::Imagination => "Fantasy",
                InfinitySubtype::Cognition => "Cognition",
                InfinitySubtype::Feeling => "Abstract Feelings",
                InfinitySubtype::Will => "Grand Plans",
            },
            AxisSubtype::Finitude(s) => match s {
                FinitudeSubtype::Conformist => "Conformist",
                FinitudeSubtype::Prudent => "Prudence",
            },
            AxisSubtype::Possibility(s) => match s {
                PossibilitySubtype::Combinatorial => "Combinatorial",
                PossibilitySubtype::Paralyzed => "Paralyzed",
            },
            AxisSubtype::Necessity(s) => match s {
                NecessitySubtype::Fatalist => "Fatalist",
                NecessitySubtype::Determinist => "Determinist",
            },
            AxisSubtype::Unawareness(s) => match s {
                UnawarenessSubtype::Naive => "Naive",
                UnawarenessSubtype::Busy => "Busy",
                UnawarenessSubtype::Denial => "Denial",
            },
            AxisSubtype::Awareness(s) => match s {
                AwarenessSubtype::Suffering => "Suffering",
                AwarenessSubtype::Defiant => "Defiant",
            },
        })
    }

    fn transition_name(&self, transition: TransitionType) -> Option<&str> {
        Some(match transition {
            TransitionType::Evolution => "Evolution",
            TransitionType::Crisis => "Crisis",
            TransitionType::Branch => "Branch",
        })
    }

    fn zone_name(&self, axis: Axis, zone: AxisZone) -> Option<&str> {
        Some(match (axis, zone) {
            (Axis::FiniteInfinite, AxisZone::Low) => "Finite",
            (Axis::FiniteInfinite, AxisZone::High) => "Infinite",
            (Axis::NecessityPossibility, AxisZone::Low) => "Necessity",
            (Axis::NecessityPossibility, AxisZone::High) => "Possibility",
            (Axis::Consciousness, AxisZone::Low) => "Unawareness",
            (Axis::Consciousness, AxisZone::Balanced) => "Semi-conscious",
            (Axis::Consciousness, AxisZone::High) => "Awareness",
            (_, AxisZone::Balanced) => "Balance",
        })
    }

    fn label(&self, key: LabelKey) -> Option<&str> {
        Some(match key {
            LabelKey::DreamerUnknowing => "Dreamer unaware of self",
            LabelKey::ReflectionDevours => "Reflection devours action",
            LabelKey::GrandPlansInFog => "Grand plans in the fog",
            LabelKey::PolishedPebble => "Polished pebble of the crowd",
            LabelKey::KnowsCageAccepted => "Knows the cage, accepted it",
            LabelKey::VaguelyFeelsWalls => "Vaguely feels the walls",
            LabelKey::FatalistGrandIdeas => "Fatalist with grand ideas",
            LabelKey::KnowsUselessness => "Knows the futility of dreams",
            LabelKey::ConformistPlaying => "Conformist playing with options",
            LabelKey::SeesExitsFears => "Sees exits, fears to leave",
            LabelKey::LostInAbstractions => "Lost in abstractions",
            LabelKey::AwareOfDetachment => "Aware of detachment",
            LabelKey::DissolvedInWorld => "Dissolved in the world",
            LabelKey::KnowsLimitations => "Knows own limitations",
            LabelKey::FloatsInPossibilities => "Floats in possibilities",
            LabelKey::AwareOfChoiceParalysis => "Aware of choice paralysis",
            LabelKey::AcceptedFateUnthinking => "Accepted fate unthinkingly",
            LabelKey::ConsciousDeterminist => "Conscious determinist",
            LabelKey::AwareOfOwnDespair => "Aware of own despair",
            LabelKey::UnawareOfIllness => "Unaware of the illness",
            LabelKey::VagueAnxiety => "Vague anxiety",
        })
    }

    fn stage_word(&self) -> Option<&str> {
        Some("stage")
    }

    fn stage_description(&self, stage: Stage) -> Option<Description<'_>> {
        match stage {
            Stage::Aesthetic => entry(
                "Lives for the moment",
                "The highest value is the interesting, pleasant, new. The aesthete avoids choice because choice closes possibilities. They glide on the surface of life, collecting impressions. Boredom is their main enemy.",
            ),
            Stage::Ethical => entry(
                "Lives by duty",
                "The highest value is constancy, commitment, choice. The ethical person chooses themselves, accepts responsibility, builds life on a foundation of decisions. But the ethical is not yet the religious. One can be respectable and be in despair.",
            ),
            Stage::Religious => entry(
                "Lives before God",
                "The highest value is the relationship with the Absolute. The religious person understands that ethics is insufficient, that one cannot save oneself by one's own strength. They stand before God, one on one, without intermediaries.",
            ),
        }
    }

    fn stage_subtype_description(&self, subtype: StageSubtype) -> Option<Description<'_>> {
        match subtype {
            StageSubtype::Sensual => entry(
                "Sensual aesthete",
                "Don Juan: the pursuit of pleasure. Each new pleasure must be stronger than the last. But the law of diminishing returns is relentless, and emptiness awaits at the end.",
            ),
            StageSubtype::Romantic => entry(
                "Romantic dreamer",
                "Lives in a world of imagination. Reality is too crude for their refined soul. They're in love with the idea of love, enchanted by the idea of adventure, but concrete love and concrete adventure disappoint them.",
            ),
            StageSubtype::Intellectual => entry(
                "Intellectual aesthete",
                "Delights in ideas, theories, systems. Life is a spectacle they observe from an ironic distance. They're too clever to believe in anything, too insightful to do anything.",
            ),
            StageSubtype::Civic => entry(
                "Civic duty",
                "Honest, reliable, fulfills obligations to society. The world considers them a model citizen. But they don't ask about God; ethics has replaced religion for them. They think they'll save themselves by their own strength. This is despair.",
            ),
            StageSubtype::Heroic => entry(
                "Tragic hero",
                "Sacrifices themselves for the higher: the people, an idea, duty. Agamemnon sacrifices Iphigenia. The hero is understandable, their motives transparent. But they remain within the universal. They are not Abraham.",
            ),
            StageSubtype::Immanent => entry(
                "Immanent religiosity",
                "God is known through deepening into oneself. Suffering is the path to God. A person dies to the world, renounces the finite. This is not yet Christianity; this could be Socrates.",
            ),
            StageSubtype::Paradoxical => entry(
                "Paradoxical faith",
                "The leap of faith through the absurd. Abraham believes he will get Isaac back, against all logic. The eternal entered time, God became human: a scandal for reason. Faith is not knowledge but a risky \"yes.\"",
            ),
        }
    }

    fn axis_subtype_description(&self, subtype: AxisSubtype) -> Option<Description<'_>> {
        match subtype {
            AxisSubtype::Infinity(s) => match s {
                InfinitySubtype::Imagination => entry(
                    "Lost in fantasies",
                    "The real self has disappeared, replaced by a phantom. A person may imagine themselves as a great artist, savior of the world, tragic hero, but in reality does nothing. Fantasy becomes a refuge from the concreteness of existence. The brighter the inner world, the paler the real life.",
                ),
                InfinitySubtype::Cognition => entry(
                    "Knows everything except self",
                    "Accumulation of knowledge without application to one's own life. Can explain the structure of the universe but doesn't know how to live. Knowledge becomes a way to avoid the existential question. \"The more one knows, the less one knows oneself\": knowledge of the world replaces self-knowledge.",
                ),
                InfinitySubtype::Feeling => entry(
                    "Loves humanity, can't stand people",
                    "Feelings become abstract. A person may weep over the fate of distant nations but be irritated by a specific neighbor. Love for \"humanity\" is a way to avoid loving one's neighbor. Emotions are directed at ideas, not real people.",
                ),
                InfinitySubtype::Will => entry(
                    "Grand plans, zero action",
                    "The will is directed toward infinite projects that will never be realized. Each plan is grander than the last, and each remains in the head. Concrete action seems too small for such grand designs.",
                ),
            },
            AxisSubtype::Finitude(s) => match s {
                FinitudeSubtype::Conformist => entry(
                    "Does what everyone does",
                    "Complete adaptation to the environment. A person doesn't risk being themselves; it is too dangerous to stand out. They copy neighbors, follow fashion, repeat common opinions. The world calls this \"health\" and \"socialization.\" But they have lost themselves.",
                ),
                FinitudeSubtype::Prudent => entry(
                    "Narrow prudence",
                    "Life reduced to calculating benefit and avoiding risk. No impulses, no leaps. \"Prudence\" becomes a prison where every step is weighed and safe, and where there's no room for anything authentic.",
                ),
            },
            AxisSubtype::Possibility(s) => match s {
                PossibilitySubtype::Combinatorial => entry(
                    "Combinatorial fantasies",
                    "Possibilities multiply infinitely. Each choice opens ten new options. A person never chooses anything definitively, for choice closes other doors. They shuffle combinations instead of living.",
                ),
                PossibilitySubtype::Paralyzed => entry(
                    "Paralysis from excess options",
                    "Abundance of possibilities engulfs. The more options, the harder to choose. Eventually the person can't make even the simplest choice; each seems either insufficient or too risky.",
                ),
            },
            AxisSubtype::Necessity(s) => match s {
                NecessitySubtype::Fatalist => entry(
                    "Everything is predetermined",
                    "\"What's the use of trying, everything is already decided.\" A person surrenders to fate, destiny, circumstances. They don't see that with God everything is possible. Necessity has become absolute and choked all hope.",
                ),
                NecessitySubtype::Determinist => entry(
                    "Scientific inevitability",
                    "\"We are products of genes and environment.\" A person explains everything by cause-and-effect chains and leaves no room for freedom. They may be intellectually sophisticated but existentially dead. Everything is explained, therefore nothing can be changed.",
                ),
            },
            AxisSubtype::Unawareness(s) => match s {
                UnawarenessSubtype::Naive => entry(
                    "Naive unawareness",
                    "Blissful ignorance. A person simply doesn't suspect the existence of the problem. Lives as they breathe, without asking questions about meaning. This is not a choice; it's the absence of choice. Perhaps the most comfortable and most dangerous position.",
                ),
                UnawarenessSubtype::Busy => entry(
                    "Busyness as escape",
                    "Tasks, projects, duties fill every minute. No time to think, must act. But behind this bustle hides the fear of stopping and looking the void in the eye. Busyness is anesthesia from existential pain.",
                ),
                UnawarenessSubtype::Denial => entry(
                    "Active denial",
                    "Knows but refuses to see. When truth knocks on the door, locks it from inside. This is not innocent ignorance but a choice not to know. The person feels the abyss nearby and turns away, pretending it doesn't exist.",
                ),
            },
            AxisSubtype::Awareness(s) => match s {
                AwarenessSubtype::Suffering => entry(
                    "Suffering awareness",
                    "Sees the truth, and it causes pain. Despair has become explicit, can no longer be hidden. The person suffers, but in this suffering there is honesty. Suffering can become a door to transformation, or a prison without exit.",
                ),
                AwarenessSubtype::Defiant => entry(
                    "Defiant awareness",
                    "Knows the truth and challenges it. Stubbornly holds onto their despair as the last possession. \"I will suffer in my own way!\" Pride doesn't allow accepting help, even if it exists. Demonic self-assertion in negation.",
                ),
            },
        }
    }

    fn consciousness_description(&self, zone: AxisZone) -> Option<Description<'_>> {
        match zone {
            AxisZone::Low => entry(
                "Doesn't know they're sick",
                "The most dangerous form of despair, because it's invisible. A person may be quite satisfied with life. They don't ask \"who am I?\" and therefore can't get an answer. Their despair is deeper than that of one who suffers.",
            ),
            AxisZone::Balanced => entry(
                "Vague anxiety",
                "Something is wrong, but unclear what. Periodically melancholy and meaninglessness wash over. The person drowns this in work, entertainment, relationships, but the anxiety returns. They're on the threshold of awareness and afraid to cross.",
            ),
            AxisZone::High => entry(
                "Knows their despair",
                "Sees the illness but doesn't know the cure. Or knows it but doesn't want to take it. This can be agonizing honesty, or demonic stubbornness. Awareness without faith is hell on earth.",
            ),
        }
    }

    fn salvation_title(&self) -> Option<&str> {
        Some("Point of Salvation")
    }

    fn salvation_description(&self) -> Option<&str> {
        Some("Religious stage with high awareness is not despair but its overcoming. Here a person stands before God in full transparency, without illusions or self-deception.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_covers_every_key() {
        let english = English;
        for stage in Stage::ALL {
            assert!(english.stage_name(stage).is_some());
            assert!(english.stage_description(stage).is_some());
        }
        for subtype in StageSubtype::ALL {
            assert!(english.stage_subtype_name(subtype).is_some());
            assert!(english.stage_subtype_description(subtype).is_some());
        }
        for subtype in AxisSubtype::ALL {
            assert!(english.axis_subtype_name(subtype).is_some());
            assert!(english.axis_subtype_description(subtype).is_some());
        }
        for key in LabelKey::ALL {
            assert!(english.label(key).is_some());
        }
    }

    #[test]
    fn test_zone_names() {
        let english = English;
        assert_eq!(english.zone_name(Axis::FiniteInfinite, AxisZone::Balanced), Some("Balance"));
        assert_eq!(
            english.zone_name(Axis::Consciousness, AxisZone::Balanced),
            Some("Semi-conscious")
        );
    }
}
