//! The history document: a readable account of the path to a point.

use despair_model::{Character, PointId};

use super::{path_steps, stage_line};
use crate::narration::{effective_description, Lexicon};

/// Render the history of `character` up to `target` as Markdown.
///
/// Returns an empty string if the point is not on a path from the root.
pub fn history_document(character: &Character, target: &PointId, lexicon: &dyn Lexicon) -> String {
    let steps = path_steps(character, target);
    if steps.is_empty() {
        return String::new();
    }

    let mut text = format!("# {}\n\n", character.name);

    text.push_str("## Core\n");
    for event in &character.core.history {
        text.push_str(&format!("- {}\n", event));
    }
    if let Some(body) = &character.core.body {
        text.push_str(&format!("- **Body:** {}\n", body));
    }
    if let Some(gift) = &character.core.gift {
        text.push_str(&format!("- **Gift:** {}\n", gift));
    }
    text.push('\n');

    text.push_str("## Trajectory\n\n");
    for (i, step) in steps.iter().enumerate() {
        let point = step.point;
        let heading = point
            .moment_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Moment {}", i + 1));

        text.push_str(&format!("### {}\n", heading));
        text.push_str(&format!("**Stage:** {}\n", stage_line(point, lexicon)));
        text.push_str(&format!("**State:** {}\n\n", point.label));
        text.push_str(&effective_description(point, lexicon));
        text.push_str("\n\n");

        if let Some(trigger) = step.next.and_then(|c| c.crisis_trigger()) {
            text.push_str(&format!("> **Crisis:** {}\n\n", trigger));
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::English;
    use despair_model::{CharacterCore, DespairVector, NewPoint, Stage, TransitionType};

    #[test]
    fn test_empty_without_path() {
        let character = Character::new("Nobody");
        assert_eq!(history_document(&character, &PointId::from("x"), &English), "");
    }

    #[test]
    fn test_moment_fallback_and_crisis_marker() {
        let mut character = Character::new("Anna").with_core(CharacterCore {
            history: vec!["Married young".to_string()],
            body: None,
            gift: Some("Grace".to_string()),
        });
        let first = character.add_point(
            NewPoint::new(DespairVector::new(0.5, 0.5, 0.5), Stage::Aesthetic, "Content")
                .with_description("Society life."),
        );
        let second = character.add_point(
            NewPoint::new(DespairVector::new(0.5, 0.5, 0.5), Stage::Ethical, "Torn")
                .with_moment("The ball")
                .with_description("Meets Vronsky."),
        );
        character.connect_points(
            &first,
            &second,
            TransitionType::Crisis,
            Some(despair_model::CrisisInfo::new("A glance")),
        );

        let text = history_document(&character, &second, &English);
        assert!(text.starts_with("# Anna\n\n## Core\n- Married young\n- **Gift:** Grace\n\n"));
        assert!(text.contains("### Moment 1\n**Stage:** Aesthetic\n**State:** Content\n\nSociety life.\n\n"));
        assert!(text.contains("> **Crisis:** A glance\n\n### The ball\n"));
        assert!(!text.contains("**Body:**"));
    }

    #[test]
    fn test_non_crisis_edges_have_no_marker() {
        let mut character = Character::new("Calm");
        let a = character.add_point(NewPoint::new(DespairVector::balanced(), Stage::Ethical, "a"));
        let b = character.add_point(NewPoint::new(DespairVector::balanced(), Stage::Ethical, "b"));
        character.connect_points(
            &a,
            &b,
            TransitionType::Evolution,
            Some(despair_model::CrisisInfo::new("ignored")),
        );

        let text = history_document(&character, &b, &English);
        assert!(!text.contains("Crisis"));
    }
}
