//! Procedural descriptions of points.

use despair_model::{AxisSubtype, AxisZone, Point, Stage, EXTREME_HIGH};

use super::Lexicon;

/// Whether a point is a "point of salvation": religious with high awareness.
pub fn is_salvation(point: &Point) -> bool {
    point.stage == Stage::Religious && point.vector.consciousness > EXTREME_HIGH
}

/// Full text of the point's stage: its subtype's entry when the subtype
/// belongs to the stage and is described, otherwise the stage's own entry.
fn stage_block<'l>(point: &Point, lexicon: &'l dyn Lexicon) -> Option<&'l str> {
    point
        .consistent_subtype()
        .and_then(|subtype| lexicon.stage_subtype_description(subtype))
        .or_else(|| lexicon.stage_description(point.stage))
        .map(|description| description.full)
}

fn axis_block<'l>(subtype: Option<AxisSubtype>, lexicon: &'l dyn Lexicon) -> Option<&'l str> {
    subtype
        .and_then(|subtype| lexicon.axis_subtype_description(subtype))
        .map(|description| description.full)
}

/// Generate a multi-paragraph description from a point's coordinates and
/// taxonomy. Paragraphs are separated by a blank line.
///
/// Axis paragraphs appear only when the coordinate is in an extreme zone and
/// a matching axis subtype is chosen. Salvation points get a fixed heading
/// and their stage paragraph instead.
pub fn generate_description(point: &Point, lexicon: &dyn Lexicon) -> String {
    let mut parts: Vec<String> = Vec::new();

    if is_salvation(point) {
        if let Some(title) = lexicon.salvation_title() {
            parts.push(format!("🕊️ {}", title.to_uppercase()));
        }
        parts.extend(lexicon.salvation_description().map(str::to_string));
        parts.extend(stage_block(point, lexicon).map(str::to_string));
        return parts.join("\n\n");
    }

    let axes = point.axis_subtypes();
    let vector = &point.vector;

    let finitude = match AxisZone::of(vector.finite_infinite) {
        AxisZone::High => axes.infinity_type.map(AxisSubtype::Infinity),
        AxisZone::Low => axes.finitude_type.map(AxisSubtype::Finitude),
        AxisZone::Balanced => None,
    };
    let possibility = match AxisZone::of(vector.necessity_possibility) {
        AxisZone::High => axes.possibility_type.map(AxisSubtype::Possibility),
        AxisZone::Low => axes.necessity_type.map(AxisSubtype::Necessity),
        AxisZone::Balanced => None,
    };

    let consciousness_zone = AxisZone::of(vector.consciousness);
    let awareness = match consciousness_zone {
        AxisZone::High => axes.awareness_type.map(AxisSubtype::Awareness),
        AxisZone::Low => axes.unawareness_type.map(AxisSubtype::Unawareness),
        AxisZone::Balanced => None,
    };
    let consciousness = match awareness {
        Some(subtype) => axis_block(Some(subtype), lexicon),
        None => lexicon
            .consciousness_description(consciousness_zone)
            .map(|description| description.full),
    };

    parts.extend(
        [
            stage_block(point, lexicon),
            axis_block(finitude, lexicon),
            axis_block(possibility, lexicon),
            consciousness,
        ]
        .into_iter()
        .flatten()
        .map(str::to_string),
    );

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::English;
    use despair_model::{
        AwarenessSubtype, AxisSubtypes, DespairVector, InfinitySubtype, NecessitySubtype,
        PointId, StageSubtype, UnawarenessSubtype,
    };

    fn point(fi: f32, np: f32, c: f32, stage: Stage) -> Point {
        Point {
            id: PointId::from("p"),
            vector: DespairVector::new(fi, np, c),
            stage,
            stage_subtype: None,
            axis_subtypes: None,
            label: String::new(),
            description: None,
            moment_name: None,
            color: None,
        }
    }

    fn full(description: Option<crate::narration::Description<'_>>) -> String {
        description.map(|d| d.full.to_string()).unwrap_or_default()
    }

    #[test]
    fn test_balanced_point() {
        let english = English;
        let text = generate_description(&point(0.5, 0.5, 0.5, Stage::Ethical), &english);
        let expected = format!(
            "{}\n\n{}",
            full(english.stage_description(Stage::Ethical)),
            full(english.consciousness_description(AxisZone::Balanced))
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_axis_blocks_need_extreme_zone_and_subtype() {
        let english = English;
        let mut p = point(0.9, 0.5, 0.2, Stage::Aesthetic);
        p.stage_subtype = Some(StageSubtype::Romantic);
        p.axis_subtypes = Some(AxisSubtypes {
            infinity_type: Some(InfinitySubtype::Will),
            necessity_type: Some(NecessitySubtype::Fatalist),
            unawareness_type: Some(UnawarenessSubtype::Denial),
            ..AxisSubtypes::default()
        });

        let text = generate_description(&p, &english);
        let paragraphs: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(
            paragraphs[0],
            full(english.stage_subtype_description(StageSubtype::Romantic))
        );
        assert_eq!(
            paragraphs[1],
            full(english.axis_subtype_description(AxisSubtype::Infinity(InfinitySubtype::Will)))
        );
        // Necessity is balanced at 0.5, so the fatalist subtype is ignored.
        assert_eq!(
            paragraphs[2],
            full(english.axis_subtype_description(AxisSubtype::Unawareness(
                UnawarenessSubtype::Denial
            )))
        );
    }

    #[test]
    fn test_extreme_zone_without_subtype_adds_nothing() {
        let english = English;
        let text = generate_description(&point(0.1, 0.9, 0.9, Stage::Aesthetic), &english);
        assert_eq!(text.split("\n\n").count(), 2);
        assert!(text.ends_with(&full(english.consciousness_description(AxisZone::High))));
    }

    #[test]
    fn test_inconsistent_subtype_uses_stage_text() {
        let english = English;
        let mut p = point(0.5, 0.5, 0.5, Stage::Ethical);
        p.stage_subtype = Some(StageSubtype::Paradoxical);
        let text = generate_description(&p, &english);
        assert!(text.starts_with(&full(english.stage_description(Stage::Ethical))));
    }

    #[test]
    fn test_salvation_override() {
        let english = English;
        let mut p = point(0.9, 0.1, 0.95, Stage::Religious);
        p.stage_subtype = Some(StageSubtype::Paradoxical);
        p.axis_subtypes = Some(AxisSubtypes {
            infinity_type: Some(InfinitySubtype::Cognition),
            necessity_type: Some(NecessitySubtype::Determinist),
            awareness_type: Some(AwarenessSubtype::Defiant),
            ..AxisSubtypes::default()
        });

        assert!(is_salvation(&p));
        let text = generate_description(&p, &english);
        let paragraphs: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(paragraphs.len(), 3);
        assert_eq!(paragraphs[0], "🕊️ POINT OF SALVATION");
        assert_eq!(
            paragraphs[2],
            full(english.stage_subtype_description(StageSubtype::Paradoxical))
        );
        assert!(!text.contains(&full(
            english.axis_subtype_description(AxisSubtype::Awareness(AwarenessSubtype::Defiant))
        )));
    }

    #[test]
    fn test_salvation_needs_strictly_high_awareness() {
        assert!(!is_salvation(&point(0.5, 0.5, 0.6, Stage::Religious)));
        assert!(!is_salvation(&point(0.5, 0.5, 0.9, Stage::Ethical)));
    }
}
