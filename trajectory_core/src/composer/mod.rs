//! Composer - turns a character's path to a point into text documents and a
//! structured view.
//!
//! All builders are pure: they read a character and return strings or
//! values, and an empty path yields an empty document.

mod history;
mod prompt;

pub use history::*;
pub use prompt::*;

use despair_model::{Character, Connection, Point, PointId};
use serde::{Deserialize, Serialize};

use crate::narration::{generate_description, zone_summary, Lexicon};
use crate::trajectory::TrajectoryExt;

/// A step of a path together with the connection leading to the next step.
#[derive(Debug, Clone, Copy)]
pub struct PathStep<'a> {
    pub point: &'a Point,
    pub next: Option<&'a Connection>,
}

/// The path from the root to `target`, each point paired with its outgoing
/// connection along the path.
pub fn path_steps<'a>(character: &'a Character, target: &PointId) -> Vec<PathStep<'a>> {
    let path = character.path_to(target);
    path.iter()
        .enumerate()
        .map(|(i, &point)| PathStep {
            point,
            next: character.connection_between(&point.id, path.get(i + 1).map(|p| &p.id)),
        })
        .collect()
}

/// A transition to the next step, resolved to display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionDetail {
    pub transition_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
}

/// One step of a [`PathDetail`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDetail {
    pub point_id: PointId,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moment_name: Option<String>,
    pub stage: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_subtype: Option<String>,
    /// Coordinates as rounded percentages.
    pub percentages: [u32; 3],
    pub zones: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_description: Option<String>,
    /// Generated analysis of the state.
    pub analysis: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<TransitionDetail>,
}

/// Structured view of the path to a point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDetail {
    pub character_name: String,
    pub steps: Vec<StepDetail>,
}

impl PathDetail {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Build the structured path view, or `None` if the point is not on a path
/// from the root.
pub fn path_detail(character: &Character, target: &PointId, lexicon: &dyn Lexicon) -> Option<PathDetail> {
    let steps = path_steps(character, target);
    if steps.is_empty() {
        return None;
    }

    let steps = steps
        .into_iter()
        .map(|step| {
            let point = step.point;
            StepDetail {
                point_id: point.id.clone(),
                label: point.label.clone(),
                moment_name: point.moment_name.clone(),
                stage: stage_name(point, lexicon),
                stage_subtype: point
                    .stage_subtype
                    .map(|s| lexicon.stage_subtype_name(s).unwrap_or(s.key()).to_string()),
                percentages: point.vector.percentages(),
                zones: zone_summary(&point.vector, lexicon),
                author_description: point.author_description().map(str::to_string),
                analysis: generate_description(point, lexicon),
                transition: step.next.map(|connection| TransitionDetail {
                    transition_type: lexicon
                        .transition_name(connection.transition_type)
                        .unwrap_or(connection.transition_type.key())
                        .to_string(),
                    trigger: connection.crisis_trigger().map(str::to_string),
                    alternatives: connection.crisis_alternatives().to_vec(),
                }),
            }
        })
        .collect();

    Some(PathDetail {
        character_name: character.name.clone(),
        steps,
    })
}

fn stage_name(point: &Point, lexicon: &dyn Lexicon) -> String {
    lexicon
        .stage_name(point.stage)
        .unwrap_or(point.stage.key())
        .to_string()
}

/// "Stage (Subtype)" in display names.
fn stage_line(point: &Point, lexicon: &dyn Lexicon) -> String {
    let stage = stage_name(point, lexicon);
    match point.stage_subtype {
        Some(subtype) => format!(
            "{} ({})",
            stage,
            lexicon.stage_subtype_name(subtype).unwrap_or(subtype.key())
        ),
        None => stage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::English;
    use despair_model::presets::raskolnikov;

    #[test]
    fn test_path_steps_pair_connections() {
        let character = raskolnikov();
        let steps = path_steps(&character, &PointId::from("r3"));

        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].next.map(|c| c.id.as_str()), Some("c1"));
        assert_eq!(steps[1].next.map(|c| c.id.as_str()), Some("c2"));
        assert!(steps[2].next.is_none());
    }

    #[test]
    fn test_path_detail() {
        let character = raskolnikov();
        let detail = path_detail(&character, &PointId::from("r2"), &English).unwrap();

        assert_eq!(detail.character_name, "Raskolnikov");
        assert_eq!(detail.len(), 2);

        let first = &detail.steps[0];
        assert_eq!(first.stage, "Aesthetic");
        assert_eq!(first.stage_subtype.as_deref(), Some("Intellectual"));
        assert_eq!(first.percentages, [90, 80, 40]);
        assert_eq!(first.zones, "Infinite / Possibility / Semi-conscious");

        let transition = first.transition.as_ref().unwrap();
        assert_eq!(transition.transition_type, "Crisis");
        assert_eq!(transition.trigger.as_deref(), Some("The murder"));
        assert_eq!(transition.alternatives, ["Become Napoleon", "Break down"]);

        assert!(detail.steps[1].transition.is_none());
    }

    #[test]
    fn test_path_detail_serializes_camel_case() {
        let character = raskolnikov();
        let detail = path_detail(&character, &PointId::from("r1"), &English).unwrap();
        let value = serde_json::to_value(&detail).unwrap();

        assert_eq!(value["characterName"], "Raskolnikov");
        assert_eq!(value["steps"][0]["pointId"], "r1");
        assert!(value["steps"][0].get("transition").is_none());
    }

    #[test]
    fn test_no_detail_off_path() {
        let mut character = raskolnikov();
        character.root_point_id = None;
        assert!(path_detail(&character, &PointId::from("r1"), &English).is_none());
    }
}
