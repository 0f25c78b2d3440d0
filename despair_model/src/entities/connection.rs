//! Connections: directed transitions between two points.

use serde::{Deserialize, Serialize};

use super::{ConnectionId, PointId};
use crate::taxonomy::TransitionType;

/// What set off a crisis transition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CrisisInfo {
    pub trigger: String,
    /// Paths the character could have taken instead.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<String>,
}

impl CrisisInfo {
    pub fn new(trigger: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            alternatives: Vec::new(),
        }
    }

    pub fn with_alternative(mut self, alternative: impl Into<String>) -> Self {
        self.alternatives.push(alternative.into());
        self
    }

    pub fn with_alternatives(mut self, alternatives: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.alternatives.extend(alternatives.into_iter().map(Into::into));
        self
    }
}

/// A directed edge of the trajectory graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: ConnectionId,
    pub from_point_id: PointId,
    pub to_point_id: PointId,

    #[serde(default)]
    pub transition_type: TransitionType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crisis: Option<CrisisInfo>,
}

impl Connection {
    /// Whether this edge links `from` to `to` in that direction.
    pub fn links(&self, from: &PointId, to: &PointId) -> bool {
        self.from_point_id == *from && self.to_point_id == *to
    }

    /// Whether either endpoint is the given point.
    pub fn touches(&self, point: &PointId) -> bool {
        self.from_point_id == *point || self.to_point_id == *point
    }

    /// The crisis trigger, if this is a crisis transition with a non-empty trigger.
    pub fn crisis_trigger(&self) -> Option<&str> {
        if self.transition_type != TransitionType::Crisis {
            return None;
        }
        self.crisis
            .as_ref()
            .map(|crisis| crisis.trigger.trim())
            .filter(|trigger| !trigger.is_empty())
    }

    /// Crisis alternatives, empty for non-crisis transitions.
    pub fn crisis_alternatives(&self) -> &[String] {
        match (&self.transition_type, &self.crisis) {
            (TransitionType::Crisis, Some(crisis)) => &crisis.alternatives,
            _ => &[],
        }
    }
}

/// A partial update of a connection. Endpoints are fixed once created.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionUpdate {
    pub transition_type: Option<TransitionType>,
    /// `Some(None)` removes the crisis payload.
    pub crisis: Option<Option<CrisisInfo>>,
}

impl ConnectionUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transition(mut self, transition_type: TransitionType) -> Self {
        self.transition_type = Some(transition_type);
        self
    }

    pub fn with_crisis(mut self, crisis: Option<CrisisInfo>) -> Self {
        self.crisis = Some(crisis);
        self
    }

    pub fn apply(self, connection: &mut Connection) {
        if let Some(transition_type) = self.transition_type {
            connection.transition_type = transition_type;
        }
        if let Some(crisis) = self.crisis {
            connection.crisis = crisis;
        }
    }
}
