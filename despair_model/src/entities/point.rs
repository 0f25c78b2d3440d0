//! Points: states of a character placed in despair space.

use serde::{Deserialize, Serialize};

use super::PointId;
use crate::taxonomy::migration;
use crate::taxonomy::{
    AwarenessSubtype, AxisSubtype, FinitudeSubtype, InfinitySubtype, NecessitySubtype,
    PossibilitySubtype, Stage, StageSubtype, UnawarenessSubtype,
};

/// Coordinates in despair space, each nominally in `0.0..=1.0`.
///
/// Input controls keep values in range; records from elsewhere may not, so
/// consumers must tolerate out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DespairVector {
    /// 0 = finite, 1 = infinite.
    pub finite_infinite: f32,
    /// 0 = necessity, 1 = possibility.
    pub necessity_possibility: f32,
    /// 0 = unawareness, 1 = full awareness.
    pub consciousness: f32,
}

impl DespairVector {
    /// Create a vector, clamping each component into range.
    pub fn new(finite_infinite: f32, necessity_possibility: f32, consciousness: f32) -> Self {
        Self {
            finite_infinite,
            necessity_possibility,
            consciousness,
        }
        .clamped()
    }

    /// The center of the space.
    pub fn balanced() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }

    /// Whether every component is a number in `0.0..=1.0`.
    pub fn is_in_range(&self) -> bool {
        [
            self.finite_infinite,
            self.necessity_possibility,
            self.consciousness,
        ]
        .iter()
        .all(|v| (0.0..=1.0).contains(v))
    }

    /// Clamp every component into `0.0..=1.0`. NaN becomes the midpoint.
    pub fn clamped(self) -> Self {
        fn clamp(value: f32) -> f32 {
            if value.is_nan() {
                0.5
            } else {
                value.clamp(0.0, 1.0)
            }
        }

        Self {
            finite_infinite: clamp(self.finite_infinite),
            necessity_possibility: clamp(self.necessity_possibility),
            consciousness: clamp(self.consciousness),
        }
    }

    /// Components as rounded percentages.
    pub fn percentages(&self) -> [u32; 3] {
        let pct = |v: f32| (v.clamp(0.0, 1.0) * 100.0).round() as u32;
        [
            pct(self.finite_infinite),
            pct(self.necessity_possibility),
            pct(self.consciousness),
        ]
    }
}

impl Default for DespairVector {
    fn default() -> Self {
        Self::balanced()
    }
}

/// Axis subtypes chosen for a point. Each is meaningful only while the
/// corresponding coordinate is in its extreme zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSubtypes {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "migration::infinity_subtype"
    )]
    pub infinity_type: Option<InfinitySubtype>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "migration::finitude_subtype"
    )]
    pub finitude_type: Option<FinitudeSubtype>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "migration::possibility_subtype"
    )]
    pub possibility_type: Option<PossibilitySubtype>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "migration::necessity_subtype"
    )]
    pub necessity_type: Option<NecessitySubtype>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "migration::awareness_subtype"
    )]
    pub awareness_type: Option<AwarenessSubtype>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "migration::unawareness_subtype"
    )]
    pub unawareness_type: Option<UnawarenessSubtype>,
}

impl AxisSubtypes {
    pub fn is_empty(&self) -> bool {
        self.chosen().is_empty()
    }

    /// All chosen subtypes, in breakdown order
    /// (infinity, finitude, possibility, necessity, awareness, unawareness).
    pub fn chosen(&self) -> Vec<AxisSubtype> {
        [
            self.infinity_type.map(AxisSubtype::Infinity),
            self.finitude_type.map(AxisSubtype::Finitude),
            self.possibility_type.map(AxisSubtype::Possibility),
            self.necessity_type.map(AxisSubtype::Necessity),
            self.awareness_type.map(AxisSubtype::Awareness),
            self.unawareness_type.map(AxisSubtype::Unawareness),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// A state of a character in despair space (a node of the trajectory graph).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub id: PointId,

    pub vector: DespairVector,

    pub stage: Stage,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "migration::stage_subtype"
    )]
    pub stage_subtype: Option<StageSubtype>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_subtypes: Option<AxisSubtypes>,

    /// Short label shown under the point.
    #[serde(default)]
    pub label: String,

    /// Author's description. When absent, a procedural one is generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Narrative moment, e.g. "Before the murder".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moment_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Point {
    /// The author's description, if one was written.
    pub fn author_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// The stage subtype, only if it belongs to the point's stage.
    pub fn consistent_subtype(&self) -> Option<StageSubtype> {
        self.stage_subtype
            .filter(|subtype| subtype.belongs_to(self.stage))
    }

    /// Display color: the point's own, else its stage color.
    pub fn display_color(&self) -> &str {
        self.color.as_deref().unwrap_or_else(|| self.stage.color())
    }

    pub fn axis_subtypes(&self) -> AxisSubtypes {
        self.axis_subtypes.unwrap_or_default()
    }
}

/// Payload for creating a point; the ID is assigned on insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoint {
    pub vector: DespairVector,
    pub stage: Stage,
    pub stage_subtype: Option<StageSubtype>,
    pub axis_subtypes: Option<AxisSubtypes>,
    pub label: String,
    pub description: Option<String>,
    pub moment_name: Option<String>,
    pub color: Option<String>,
}

impl NewPoint {
    /// Create a point payload with the required fields.
    pub fn new(vector: DespairVector, stage: Stage, label: impl Into<String>) -> Self {
        Self {
            vector,
            stage,
            stage_subtype: None,
            axis_subtypes: None,
            label: label.into(),
            description: None,
            moment_name: None,
            color: None,
        }
    }

    pub fn with_subtype(mut self, subtype: StageSubtype) -> Self {
        self.stage_subtype = Some(subtype);
        self
    }

    pub fn with_axis_subtypes(mut self, axis_subtypes: AxisSubtypes) -> Self {
        self.axis_subtypes = Some(axis_subtypes);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_moment(mut self, moment_name: impl Into<String>) -> Self {
        self.moment_name = Some(moment_name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub(crate) fn into_point(self, id: PointId) -> Point {
        Point {
            id,
            vector: self.vector,
            stage: self.stage,
            stage_subtype: self.stage_subtype,
            axis_subtypes: self.axis_subtypes,
            label: self.label,
            description: self.description,
            moment_name: self.moment_name,
            color: self.color,
        }
    }
}

/// A partial update of a point. `None` leaves a field unchanged; for optional
/// fields, `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointUpdate {
    pub vector: Option<DespairVector>,
    pub stage: Option<Stage>,
    pub stage_subtype: Option<Option<StageSubtype>>,
    pub axis_subtypes: Option<Option<AxisSubtypes>>,
    pub label: Option<String>,
    pub description: Option<Option<String>>,
    pub moment_name: Option<Option<String>>,
    pub color: Option<Option<String>>,
}

impl PointUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vector(mut self, vector: DespairVector) -> Self {
        self.vector = Some(vector);
        self
    }

    pub fn with_stage(mut self, stage: Stage, subtype: Option<StageSubtype>) -> Self {
        self.stage = Some(stage);
        self.stage_subtype = Some(subtype);
        self
    }

    pub fn with_axis_subtypes(mut self, axis_subtypes: Option<AxisSubtypes>) -> Self {
        self.axis_subtypes = Some(axis_subtypes);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_moment(mut self, moment_name: Option<String>) -> Self {
        self.moment_name = Some(moment_name);
        self
    }

    pub fn with_color(mut self, color: Option<String>) -> Self {
        self.color = Some(color);
        self
    }

    /// Apply the update to a point.
    pub fn apply(self, point: &mut Point) {
        if let Some(vector) = self.vector {
            point.vector = vector;
        }
        if let Some(stage) = self.stage {
            point.stage = stage;
        }
        if let Some(stage_subtype) = self.stage_subtype {
            point.stage_subtype = stage_subtype;
        }
        if let Some(axis_subtypes) = self.axis_subtypes {
            point.axis_subtypes = axis_subtypes;
        }
        if let Some(label) = self.label {
            point.label = label;
        }
        if let Some(description) = self.description {
            point.description = description;
        }
        if let Some(moment_name) = self.moment_name {
            point.moment_name = moment_name;
        }
        if let Some(color) = self.color {
            point.color = color;
        }
    }
}
