//! The LLM prompt document.

use despair_model::{Axis, AxisSubtype, AxisZone, Character, PointId, Stage};

use super::path_steps;
use crate::narration::{generate_description, Lexicon};

const TASK_HEADER: &str = "# Task: Beat sheet synopsis + Phenomenology from the character's perspective";

const TASK_SUMMARY: &str = "Generate a beat sheet synopsis of the character's trajectory and one extended first-person experience of the central event (\"Phenomenology from the character's perspective\").";

const AXES_PRIMER: [&str; 3] = [
    "- **finiteInfinite:** 0 = Finite (losing oneself in the world), 1 = Infinite (losing the world in oneself)",
    "- **necessityPossibility:** 0 = Necessity (determinism), 1 = Possibility (paralysis of choice)",
    "- **consciousness:** 0 = Unawareness, 1 = Full awareness",
];

const INSTRUCTIONS: [&str; 3] = [
    "## What to generate:",
    "1. **Beat sheet synopsis**: a structured account of the key beats of the trajectory",
    "2. **Phenomenology from the character's perspective**: one extended first-person experience of the central event (inner monologue, sensations, perception)",
];

/// Axis-subtype families with the zone they refine, in primer order.
const SUBTYPE_FAMILIES: [(&str, Axis, AxisZone, &str); 6] = [
    ("infinity", Axis::FiniteInfinite, AxisZone::High, ">0.6"),
    ("finitude", Axis::FiniteInfinite, AxisZone::Low, "<0.4"),
    ("possibility", Axis::NecessityPossibility, AxisZone::High, ">0.6"),
    ("necessity", Axis::NecessityPossibility, AxisZone::Low, "<0.4"),
    ("awareness", Axis::Consciousness, AxisZone::High, ">0.6"),
    ("unawareness", Axis::Consciousness, AxisZone::Low, "<0.4"),
];

/// Render a prompt asking a language model to write up the path to `target`.
///
/// Taxonomy values are given by key so that they line up with the primers.
/// Returns an empty string if the point is not on a path from the root.
pub fn trajectory_prompt(character: &Character, target: &PointId, lexicon: &dyn Lexicon) -> String {
    let steps = path_steps(character, target);
    if steps.is_empty() {
        return String::new();
    }

    let mut lines: Vec<String> = vec![
        TASK_HEADER.to_string(),
        String::new(),
        TASK_SUMMARY.to_string(),
        String::new(),
        format!("## Character: {}", character.name),
        String::new(),
    ];

    let core = &character.core;
    if !core.is_empty() {
        lines.push("### Character core".to_string());
        if !core.history.is_empty() {
            lines.push(format!("- **History:** {}", core.history.join("; ")));
        }
        if let Some(body) = &core.body {
            lines.push(format!("- **Body:** {}", body));
        }
        if let Some(gift) = &core.gift {
            lines.push(format!("- **Gift:** {}", gift));
        }
        lines.push(String::new());
    }

    lines.push("### Axes of despair space (values 0.0-1.0)".to_string());
    lines.extend(AXES_PRIMER.iter().map(|line| line.to_string()));
    lines.push(String::new());

    lines.push("### Axis subtypes".to_string());
    for (family, axis, zone, threshold) in SUBTYPE_FAMILIES {
        let zone_name = lexicon.zone_name(axis, zone).unwrap_or(family);
        lines.push(format!(
            "**{} ({}):** {}",
            zone_name,
            threshold,
            AxisSubtype::keys_of_family(family).join(", ")
        ));
    }
    lines.push(String::new());

    lines.push("### Stages of existence".to_string());
    for stage in Stage::ALL {
        let subtypes: Vec<&str> = stage.subtypes().iter().map(|s| s.key()).collect();
        lines.push(format!(
            "- **{}:** {} ({})",
            stage.key(),
            lexicon.stage_name(stage).unwrap_or(stage.key()),
            subtypes.join(", ")
        ));
    }
    lines.push(String::new());

    lines.push(format!("## Trajectory ({} points)", steps.len()));
    lines.push(String::new());

    for (i, step) in steps.iter().enumerate() {
        let point = step.point;
        let v = &point.vector;
        let [fi, np, c] = v.percentages();

        lines.push(format!("### {}. {}", i + 1, point.label));
        if let Some(moment) = &point.moment_name {
            lines.push(format!("**Moment:** {}", moment));
        }
        lines.push(format!(
            "**Vector:** [{:.2}, {:.2}, {:.2}] ({}% / {}% / {}%)",
            v.finite_infinite, v.necessity_possibility, v.consciousness, fi, np, c
        ));
        lines.push(match point.stage_subtype {
            Some(subtype) => format!("**Stage:** {} ({})", point.stage.key(), subtype.key()),
            None => format!("**Stage:** {}", point.stage.key()),
        });

        let breakdown: Vec<String> = point
            .axis_subtypes()
            .chosen()
            .iter()
            .map(|subtype| format!("{}:{}", subtype.family(), subtype.key()))
            .collect();
        if !breakdown.is_empty() {
            lines.push(format!("**Axis subtypes:** {}", breakdown.join(", ")));
        }

        if let Some(description) = point.author_description() {
            lines.push(format!("**Description:** {}", description));
        }
        lines.push(format!("**Analysis:** {}", generate_description(point, lexicon)));

        if let Some(connection) = step.next {
            let mut transition = format!("→ **Transition:** {}", connection.transition_type.key());
            if let Some(trigger) = connection.crisis_trigger() {
                transition.push_str(&format!(" - trigger: \"{}\"", trigger));
            }
            let alternatives = connection.crisis_alternatives();
            if !alternatives.is_empty() {
                transition.push_str(&format!(" (alternatives: {})", alternatives.join(", ")));
            }
            lines.push(transition);
        }

        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.extend(INSTRUCTIONS.iter().map(|line| line.to_string()));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::English;
    use despair_model::{DespairVector, NewPoint};

    #[test]
    fn test_empty_without_path() {
        let mut character = Character::new("Lost");
        let id = character.add_point(NewPoint::new(DespairVector::balanced(), Stage::Ethical, "x"));
        character.root_point_id = None;
        assert_eq!(trajectory_prompt(&character, &id, &English), "");
    }

    #[test]
    fn test_core_section_only_with_data() {
        let mut character = Character::new("Plain");
        let id = character.add_point(NewPoint::new(DespairVector::balanced(), Stage::Ethical, "x"));

        let prompt = trajectory_prompt(&character, &id, &English);
        assert!(!prompt.contains("### Character core"));
        assert!(prompt.contains("## Trajectory (1 points)"));
        assert!(prompt.contains("**Vector:** [0.50, 0.50, 0.50] (50% / 50% / 50%)"));
        assert!(prompt.contains("**Stage:** ethical\n"));
        assert!(!prompt.contains("→ **Transition:**"));
    }

    #[test]
    fn test_primers() {
        let mut character = Character::new("Primer");
        let id = character.add_point(NewPoint::new(DespairVector::balanced(), Stage::Ethical, "x"));

        let prompt = trajectory_prompt(&character, &id, &English);
        assert!(prompt.contains("**Infinite (>0.6):** imagination, cognition, feeling, will"));
        assert!(prompt.contains("**Unawareness (<0.4):** naive, busy, denial"));
        assert!(prompt.contains("- **ethical:** Ethical (civic, heroic)"));
        assert!(prompt.ends_with("(inner monologue, sensations, perception)"));
    }
}
