//! Character definitions and the editing operations on their trajectory graph.

use serde::{Deserialize, Serialize};

use super::{
    CharacterId, Connection, ConnectionId, ConnectionUpdate, CrisisInfo, NewPoint, Point, PointId,
    PointUpdate,
};
use crate::error::{ModelError, ModelResult};
use crate::taxonomy::TransitionType;

/// Default trajectory color for characters created without one.
pub const DEFAULT_CHARACTER_COLOR: &str = "#8b5cf6";

fn default_color() -> String {
    DEFAULT_CHARACTER_COLOR.to_string()
}

/// The unchanging core of a character. Purely descriptive.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterCore {
    /// Key events of the past.
    #[serde(default)]
    pub history: Vec<String>,
    /// Physical description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Talent or ability.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gift: Option<String>,
}

impl CharacterCore {
    /// Whether the core carries any data at all.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty() && self.body.is_none() && self.gift.is_none()
    }
}

/// A character and its trajectory graph.
///
/// The character exclusively owns its points and connections. `root_point_id`,
/// when set, designates the origin of every path query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub core: CharacterCore,

    pub points: Vec<Point>,

    #[serde(default)]
    pub connections: Vec<Connection>,

    #[serde(default)]
    pub root_point_id: Option<PointId>,
}

impl Character {
    /// Create a new character with the given name and no trajectory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            color: default_color(),
            core: CharacterCore::default(),
            points: Vec::new(),
            connections: Vec::new(),
            root_point_id: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_core(mut self, core: CharacterCore) -> Self {
        self.core = core;
        self
    }

    /// Get a point by ID.
    pub fn point(&self, id: &PointId) -> Option<&Point> {
        self.points.iter().find(|p| p.id == *id)
    }

    /// Get a connection by ID.
    pub fn connection(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == *id)
    }

    /// The root point, if one is designated and still exists.
    pub fn root(&self) -> Option<&Point> {
        self.root_point_id.as_ref().and_then(|id| self.point(id))
    }

    /// Outgoing connections of a point, in insertion order.
    pub fn outgoing(&self, id: &PointId) -> impl Iterator<Item = &Connection> + '_ {
        let id = id.clone();
        self.connections
            .iter()
            .filter(move |c| c.from_point_id == id)
    }

    /// Add a point and return its ID.
    ///
    /// The first point added to a character becomes its root.
    pub fn add_point(&mut self, point: NewPoint) -> PointId {
        let id = PointId::new();
        let is_first_point = self.points.is_empty();
        self.points.push(point.into_point(id.clone()));

        if is_first_point {
            self.root_point_id = Some(id.clone());
        }

        tracing::debug!(character = %self.id, point = %id, root = is_first_point, "added point");
        id
    }

    /// Apply a partial update to a point. Returns false if it does not exist.
    pub fn update_point(&mut self, id: &PointId, update: PointUpdate) -> bool {
        match self.points.iter_mut().find(|p| p.id == *id) {
            Some(point) => {
                update.apply(point);
                true
            }
            None => false,
        }
    }

    /// Remove a point together with every connection touching it.
    ///
    /// If the point was the root, the root is cleared and NOT reassigned: the
    /// remaining graph has no origin until [`Character::set_root`] is called.
    pub fn delete_point(&mut self, id: &PointId) -> Option<Point> {
        let index = self.points.iter().position(|p| p.id == *id)?;
        let point = self.points.remove(index);

        let before = self.connections.len();
        self.connections.retain(|c| !c.touches(id));

        if self.root_point_id.as_ref() == Some(id) {
            self.root_point_id = None;
        }

        tracing::debug!(
            character = %self.id,
            point = %id,
            removed_connections = before - self.connections.len(),
            "deleted point"
        );
        Some(point)
    }

    /// Connect two points.
    ///
    /// Returns `None` and leaves the graph untouched if a connection with the
    /// same `(from, to)` pair already exists. Endpoints are not validated.
    pub fn connect_points(
        &mut self,
        from: &PointId,
        to: &PointId,
        transition_type: TransitionType,
        crisis: Option<CrisisInfo>,
    ) -> Option<ConnectionId> {
        if self.connections.iter().any(|c| c.links(from, to)) {
            tracing::debug!(character = %self.id, %from, %to, "connection already exists");
            return None;
        }

        if self.point(from).is_none() || self.point(to).is_none() {
            tracing::debug!(character = %self.id, %from, %to, "connecting unknown point");
        }

        let id = ConnectionId::new();
        self.connections.push(Connection {
            id: id.clone(),
            from_point_id: from.clone(),
            to_point_id: to.clone(),
            transition_type,
            crisis,
        });
        Some(id)
    }

    /// Apply a partial update to a connection. Returns false if it does not exist.
    pub fn update_connection(&mut self, id: &ConnectionId, update: ConnectionUpdate) -> bool {
        match self.connections.iter_mut().find(|c| c.id == *id) {
            Some(connection) => {
                update.apply(connection);
                true
            }
            None => false,
        }
    }

    /// Remove a connection.
    pub fn delete_connection(&mut self, id: &ConnectionId) -> Option<Connection> {
        let index = self.connections.iter().position(|c| c.id == *id)?;
        Some(self.connections.remove(index))
    }

    /// Designate an existing point as the root.
    pub fn set_root(&mut self, id: &PointId) -> ModelResult<()> {
        if self.point(id).is_none() {
            return Err(ModelError::PointNotFound {
                character: self.id.clone(),
                point: id.clone(),
            });
        }
        self.root_point_id = Some(id.clone());
        Ok(())
    }

    /// Find a point by ID, label or moment name (case-insensitive).
    pub fn find_point(&self, query: &str) -> Option<&Point> {
        let query = query.trim();
        self.points
            .iter()
            .find(|p| p.id.as_str() == query)
            .or_else(|| {
                self.points.iter().find(|p| {
                    p.label.eq_ignore_ascii_case(query)
                        || p.moment_name
                            .as_deref()
                            .is_some_and(|m| m.eq_ignore_ascii_case(query))
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::DespairVector;
    use crate::taxonomy::Stage;

    fn point(label: &str) -> NewPoint {
        NewPoint::new(DespairVector::balanced(), Stage::Aesthetic, label)
    }

    #[test]
    fn test_new_character() {
        let character = Character::new("Test Hero");
        assert_eq!(character.name, "Test Hero");
        assert!(character.points.is_empty());
        assert!(character.root_point_id.is_none());
        assert!(character.core.is_empty());
    }

    #[test]
    fn test_first_point_becomes_root() {
        let mut character = Character::new("Hero");
        let first = character.add_point(point("first"));
        let second = character.add_point(point("second"));

        assert_eq!(character.root_point_id, Some(first.clone()));
        assert_ne!(first, second);
        assert_eq!(character.root().map(|p| p.label.as_str()), Some("first"));
    }

    #[test]
    fn test_update_point() {
        let mut character = Character::new("Hero");
        let id = character.add_point(point("before"));

        assert!(character.update_point(&id, PointUpdate::new().with_label("after")));
        assert_eq!(character.point(&id).unwrap().label, "after");
        assert!(!character.update_point(&PointId::from("missing"), PointUpdate::new()));
    }

    #[test]
    fn test_delete_point_cascades_connections() {
        let mut character = Character::new("Hero");
        let a = character.add_point(point("a"));
        let b = character.add_point(point("b"));
        let c = character.add_point(point("c"));
        character.connect_points(&a, &b, TransitionType::Evolution, None);
        character.connect_points(&b, &c, TransitionType::Evolution, None);
        character.connect_points(&a, &c, TransitionType::Branch, None);

        let removed = character.delete_point(&b);
        assert_eq!(removed.map(|p| p.label), Some("b".to_string()));
        assert_eq!(character.points.len(), 2);
        assert_eq!(character.connections.len(), 1);
        assert!(character.connections[0].links(&a, &c));
        assert_eq!(character.root_point_id, Some(a));
    }

    #[test]
    fn test_deleting_root_does_not_promote() {
        let mut character = Character::new("Hero");
        let root = character.add_point(point("root"));
        let other = character.add_point(point("other"));
        character.connect_points(&root, &other, TransitionType::Evolution, None);

        character.delete_point(&root);
        assert!(character.root_point_id.is_none());
        assert!(character.root().is_none());

        character.set_root(&other).unwrap();
        assert_eq!(character.root_point_id, Some(other));
    }

    #[test]
    fn test_set_root_rejects_unknown_point() {
        let mut character = Character::new("Hero");
        let result = character.set_root(&PointId::from("ghost"));
        assert!(matches!(result, Err(ModelError::PointNotFound { .. })));
    }

    #[test]
    fn test_duplicate_connection_is_dropped() {
        let mut character = Character::new("Hero");
        let a = character.add_point(point("a"));
        let b = character.add_point(point("b"));

        let first = character.connect_points(&a, &b, TransitionType::Evolution, None);
        let second =
            character.connect_points(&a, &b, TransitionType::Crisis, Some(CrisisInfo::new("x")));

        assert!(first.is_some());
        assert!(second.is_none());
        assert_eq!(character.connections.len(), 1);
        assert_eq!(character.connections[0].transition_type, TransitionType::Evolution);

        // The reverse direction is a different pair.
        assert!(character
            .connect_points(&b, &a, TransitionType::Branch, None)
            .is_some());
        assert_eq!(character.connections.len(), 2);
    }

    #[test]
    fn test_connection_endpoints_are_not_validated() {
        let mut character = Character::new("Hero");
        let a = character.add_point(point("a"));
        let ghost = PointId::from("elsewhere");

        assert!(character
            .connect_points(&a, &ghost, TransitionType::Evolution, None)
            .is_some());
        assert_eq!(character.outgoing(&a).count(), 1);
    }

    #[test]
    fn test_update_and_delete_connection() {
        let mut character = Character::new("Hero");
        let a = character.add_point(point("a"));
        let b = character.add_point(point("b"));
        let id = character
            .connect_points(&a, &b, TransitionType::Evolution, None)
            .unwrap();

        let update = ConnectionUpdate::new()
            .with_transition(TransitionType::Crisis)
            .with_crisis(Some(CrisisInfo::new("Sonya's love")));
        assert!(character.update_connection(&id, update));
        assert_eq!(
            character.connection(&id).and_then(|c| c.crisis_trigger()),
            Some("Sonya's love")
        );

        assert!(character.delete_connection(&id).is_some());
        assert!(character.delete_connection(&id).is_none());
        assert!(!character.update_connection(&id, ConnectionUpdate::new()));
    }

    #[test]
    fn test_find_point() {
        let mut character = Character::new("Hero");
        let id = character.add_point(point("Reality breaks in").with_moment("After the murder"));

        assert_eq!(character.find_point(id.as_str()).map(|p| &p.id), Some(&id));
        assert_eq!(character.find_point("after the MURDER").map(|p| &p.id), Some(&id));
        assert_eq!(character.find_point("reality breaks in").map(|p| &p.id), Some(&id));
        assert!(character.find_point("nowhere").is_none());
    }
}
