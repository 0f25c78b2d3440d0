//! Built-in example characters.

use crate::entities::{
    AxisSubtypes, Character, CharacterCore, CharacterId, Connection, ConnectionId, CrisisInfo,
    DespairVector, Point, PointId,
};
use crate::taxonomy::{InfinitySubtype, PossibilitySubtype, Stage, StageSubtype, TransitionType};

/// IDs of the built-in presets.
pub const PRESET_IDS: [&str; 1] = ["raskolnikov"];

/// Look up a preset by ID.
pub fn preset(id: &str) -> Option<Character> {
    match id {
        "raskolnikov" => Some(raskolnikov()),
        _ => None,
    }
}

struct PresetPoint {
    id: &'static str,
    moment: &'static str,
    label: &'static str,
    vector: (f32, f32, f32),
    subtype: StageSubtype,
    description: &'static str,
}

impl PresetPoint {
    fn build(self) -> Point {
        let (finite_infinite, necessity_possibility, consciousness) = self.vector;
        Point {
            id: PointId::from(self.id),
            vector: DespairVector::new(finite_infinite, necessity_possibility, consciousness),
            stage: self.subtype.stage(),
            stage_subtype: Some(self.subtype),
            axis_subtypes: None,
            label: self.label.to_string(),
            description: Some(self.description.to_string()),
            moment_name: Some(self.moment.to_string()),
            color: None,
        }
    }
}

fn edge(id: &str, from: &str, to: &str, crisis: Option<CrisisInfo>) -> Connection {
    Connection {
        id: ConnectionId::from(id),
        from_point_id: PointId::from(from),
        to_point_id: PointId::from(to),
        transition_type: if crisis.is_some() {
            TransitionType::Crisis
        } else {
            TransitionType::Evolution
        },
        crisis,
    }
}

/// Rodion Raskolnikov from "Crime and Punishment": six points from the idea
/// of the extraordinary man to the leap of faith in prison.
pub fn raskolnikov() -> Character {
    let mut points: Vec<Point> = [
        PresetPoint {
            id: "r1",
            moment: "Before the murder",
            label: "Lives in an idea, blind to himself",
            vector: (0.9, 0.8, 0.4),
            subtype: StageSubtype::Intellectual,
            description: "The theory of the \"extraordinary man\" has replaced reality. The old woman is not a person but a symbol, a \"louse.\" He is not a murderer; he is an experimenter. The idea has so consumed him that the concrete (blood, axe, face) seems irrelevant. He doesn't know he is already in despair.\n\n\
Accumulation of knowledge without application to one's own life. Can explain the structure of the universe but doesn't know how to live. Cognition becomes a way to avoid the existential question.\n\n\
The most dangerous form of despair, because it is invisible. A person may be quite satisfied with life. They don't ask \"who am I?\" and therefore cannot get an answer.",
        },
        PresetPoint {
            id: "r2",
            moment: "After the murder",
            label: "Reality breaks in",
            vector: (0.5, 0.3, 0.7),
            subtype: StageSubtype::Intellectual,
            description: "The idea collided with blood and cracked. Lizaveta was not in the plan. The old woman turned out to be not a \"louse\" but a person with a face. He is frantic, feverish. Something is wrong, but he doesn't yet understand what. He begins to realize he is sick, but makes the wrong diagnosis.\n\n\
Sees the void and finds a perverse pleasure in it. \"I am a sick man, I am an evil man.\" Aware of his despair but clings to it as the last thing he has.\n\n\
Sees the illness but doesn't know the cure. Or knows it but doesn't want to take it.",
        },
        PresetPoint {
            id: "r3",
            moment: "Meeting Sonya",
            label: "Sees another person for the first time",
            vector: (0.4, 0.5, 0.8),
            subtype: StageSubtype::Heroic,
            description: "Sonya is a mirror. In her presence the theory crumbles. She too has \"transgressed\", but for others. He begins to distinguish: killing an idea is one thing, killing a person is another. For the first time he asks not \"do I have the right?\" but \"who am I?\"\n\n\
Sacrifices himself for the higher: the people, an idea, duty. But he remains within the universal; he has not yet made the leap of faith.\n\n\
Aware of his despair in its fullness. This is agonizing honesty.",
        },
        PresetPoint {
            id: "r4",
            moment: "Confession",
            label: "Accepts guilt",
            vector: (0.3, 0.4, 0.9),
            subtype: StageSubtype::Immanent,
            description: "Goes to the police. Not because he fears punishment, but because he can no longer bear the burden. Confession is the first act of authentic choice. He chooses not the idea but himself. Chooses to be guilty, and thus to be human.\n\n\
God is known through deepening into oneself. Suffering is the path to God. A person dies to the world, renounces the finite.\n\n\
Full awareness of one's condition and choice.",
        },
        PresetPoint {
            id: "r5",
            moment: "Prison (beginning)",
            label: "Accepted punishment but not repentant",
            vector: (0.2, 0.3, 0.6),
            subtype: StageSubtype::Civic,
            description: "In prison he is still proud. Admits guilt legally but not existentially. \"The only thing he admitted as his crime was simply that he had not borne it and had made a confession.\" He has not yet repented, only surrendered.\n\n\
Fulfills obligations, bears punishment. But inwardly still resists.\n\n\
Awareness drops: he walls himself off from full understanding.",
        },
        PresetPoint {
            id: "r6",
            moment: "Prison (transfiguration)",
            label: "Leap of faith",
            vector: (0.5, 0.5, 0.95),
            subtype: StageSubtype::Paradoxical,
            description: "Illness, dream of the plague, awakening. Sees Sonya and something breaks. \"Instead of dialectics, life had come.\" He doesn't understand with his mind; he simply falls at her feet. This is not logic, it is a leap. The Gospel under his pillow. Seven years, like seven days.\n\n\
Leap of faith through the absurd. The eternal entered time. Faith is not knowledge but a risky \"yes.\"\n\n\
Full awareness with full acceptance of the paradox of faith.",
        },
    ]
    .into_iter()
    .map(PresetPoint::build)
    .collect();

    points[0].axis_subtypes = Some(AxisSubtypes {
        infinity_type: Some(InfinitySubtype::Cognition),
        possibility_type: Some(PossibilitySubtype::Paralyzed),
        ..AxisSubtypes::default()
    });

    let connections = vec![
        edge(
            "c1",
            "r1",
            "r2",
            Some(CrisisInfo::new("The murder").with_alternatives(["Become Napoleon", "Break down"])),
        ),
        edge("c2", "r2", "r3", None),
        edge(
            "c3",
            "r3",
            "r4",
            Some(CrisisInfo::new("Sonya's love").with_alternatives(["Suicide", "Flight"])),
        ),
        edge("c4", "r4", "r5", None),
        edge(
            "c5",
            "r5",
            "r6",
            Some(CrisisInfo::new("Illness and dream").with_alternative("Harden in pride")),
        ),
    ];

    Character {
        id: CharacterId::from("raskolnikov"),
        name: "Raskolnikov".to_string(),
        color: "#ef4444".to_string(),
        core: CharacterCore {
            history: [
                "Impoverished noble family",
                "Loving mother who sacrifices herself",
                "Sister Dunya, beautiful and proud",
                "Was a brilliant student",
                "Dropped out of university due to poverty",
                "Months in a coffin-like garret",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            body: Some("Handsome, tall, dark eyes. Emaciated, sickly.".to_string()),
            gift: Some("Intellect, capacity for theory, pride".to_string()),
        },
        points,
        connections,
        root_point_id: Some(PointId::from("r1")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raskolnikov_shape() {
        let character = raskolnikov();
        assert_eq!(character.points.len(), 6);
        assert_eq!(character.connections.len(), 5);
        assert_eq!(character.root().map(|p| p.id.as_str()), Some("r1"));

        let crises = character
            .connections
            .iter()
            .filter_map(|c| c.crisis_trigger())
            .collect::<Vec<_>>();
        assert_eq!(crises, ["The murder", "Sonya's love", "Illness and dream"]);
    }

    #[test]
    fn test_preset_points_are_consistent() {
        let character = raskolnikov();
        for point in &character.points {
            assert!(point.vector.is_in_range());
            assert_eq!(point.consistent_subtype(), point.stage_subtype);
        }
        assert_eq!(character.points[3].stage, Stage::Religious);
        assert_eq!(character.points[0].axis_subtypes().chosen().len(), 2);
    }

    #[test]
    fn test_preset_lookup() {
        assert!(PRESET_IDS.iter().all(|id| preset(id).is_some()));
        assert!(preset("myshkin").is_none());
    }
}
