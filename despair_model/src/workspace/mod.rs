//! Workspace management - the collection of characters being edited, and the
//! import/export boundary for character records.

mod store;

pub use store::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::entities::{Character, CharacterCore, CharacterId, ConnectionId, PointId};
use crate::error::{ModelError, ModelResult};

/// Preset trajectory colors, assigned to new characters in turn.
pub const CHARACTER_COLORS: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#14b8a6", "#3b82f6", "#8b5cf6", "#ec4899",
];

/// A partial update of a character's own fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
    pub core: Option<CharacterCore>,
}

impl CharacterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_core(mut self, core: CharacterCore) -> Self {
        self.core = Some(core);
        self
    }
}

/// All characters of one editing session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    characters: Vec<Character>,

    #[serde(skip, default = "default_palette")]
    palette: Vec<String>,
}

fn default_palette() -> Vec<String> {
    CHARACTER_COLORS.iter().map(|c| c.to_string()).collect()
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
            palette: default_palette(),
        }
    }
}

impl Workspace {
    /// Create a new empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a workspace holding existing characters, as loaded from storage.
    pub fn from_characters(characters: Vec<Character>) -> Self {
        Self {
            characters,
            ..Self::default()
        }
    }

    /// Use a custom color palette for new characters. An empty palette is ignored.
    pub fn with_palette(mut self, palette: Vec<String>) -> Self {
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn into_characters(self) -> Vec<Character> {
        self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Get character by ID.
    pub fn get_character(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == *id)
    }

    /// Get mutable character by ID.
    pub fn get_character_mut(&mut self, id: &CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == *id)
    }

    /// Get a character by ID, or fail.
    pub fn require_character(&self, id: &CharacterId) -> ModelResult<&Character> {
        self.get_character(id)
            .ok_or_else(|| ModelError::CharacterNotFound(id.clone()))
    }

    /// Find a character by ID or case-insensitive name.
    pub fn find_character(&self, query: &str) -> Option<&Character> {
        let query = query.trim();
        self.characters
            .iter()
            .find(|c| c.id.as_str() == query)
            .or_else(|| {
                self.characters
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(query))
            })
    }

    /// Create a new empty character and return its ID.
    ///
    /// Without an explicit color, the next palette color is used.
    pub fn add_character(&mut self, name: impl Into<String>, color: Option<String>) -> CharacterId {
        let color = color.unwrap_or_else(|| self.next_color());
        let character = Character::new(name).with_color(color);
        let id = character.id.clone();
        self.characters.push(character);
        id
    }

    /// Apply a partial update to a character. Returns false if it does not exist.
    pub fn update_character(&mut self, id: &CharacterId, update: CharacterUpdate) -> bool {
        let Some(character) = self.get_character_mut(id) else {
            return false;
        };
        if let Some(name) = update.name {
            character.name = name;
        }
        if let Some(color) = update.color {
            character.color = color;
        }
        if let Some(core) = update.core {
            character.core = core;
        }
        true
    }

    /// Remove a character. Characters share nothing, so nothing else changes.
    pub fn delete_character(&mut self, id: &CharacterId) -> Option<Character> {
        let index = self.characters.iter().position(|c| c.id == *id)?;
        Some(self.characters.remove(index))
    }

    /// Add a character record from outside the workspace.
    ///
    /// Every ID is reissued so that the copy never collides with characters
    /// already present, including earlier imports of the same record.
    pub fn import_character(&mut self, record: Character) -> CharacterId {
        let character = reissue_ids(record);
        let id = character.id.clone();
        tracing::info!(
            character = %id,
            name = %character.name,
            points = character.points.len(),
            connections = character.connections.len(),
            "imported character"
        );
        self.characters.push(character);
        id
    }

    /// Parse a JSON character record and import it.
    pub fn import_json(&mut self, json: &str) -> ModelResult<CharacterId> {
        let record: Character = serde_json::from_str(json)?;
        Ok(self.import_character(record))
    }

    /// A copy of a character record, as persisted.
    pub fn export_character(&self, id: &CharacterId) -> Option<Character> {
        self.get_character(id).cloned()
    }

    /// A character record as pretty-printed JSON.
    pub fn export_json(&self, id: &CharacterId) -> ModelResult<String> {
        let character = self.require_character(id)?;
        Ok(serde_json::to_string_pretty(character)?)
    }

    /// Every character as one pretty-printed JSON array.
    pub fn export_all_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string_pretty(&self.characters)?)
    }

    fn next_color(&self) -> String {
        self.palette
            .get(self.characters.len() % self.palette.len().max(1))
            .cloned()
            .unwrap_or_else(|| CHARACTER_COLORS[0].to_string())
    }
}

/// Copy a character record under fresh IDs.
///
/// Point IDs are translated through a table built during the copy and applied
/// to connection endpoints and the root. Endpoints that reference no point in
/// the record keep their original ID; a dangling root is cleared. Vectors are
/// clamped into range.
pub fn reissue_ids(record: Character) -> Character {
    let mut point_ids: HashMap<PointId, PointId> = HashMap::new();

    let points = record
        .points
        .into_iter()
        .map(|mut point| {
            let new_id = PointId::new();
            point_ids.insert(point.id.clone(), new_id.clone());
            point.id = new_id;
            if !point.vector.is_in_range() {
                tracing::warn!(point = %point.id, "clamped out-of-range vector");
                point.vector = point.vector.clamped();
            }
            point
        })
        .collect::<Vec<_>>();

    let translate = |id: PointId| -> PointId {
        match point_ids.get(&id) {
            Some(new_id) => new_id.clone(),
            None => {
                tracing::warn!(point = %id, "connection references unknown point");
                id
            }
        }
    };

    let connections = record
        .connections
        .into_iter()
        .map(|mut connection| {
            connection.id = ConnectionId::new();
            connection.from_point_id = translate(connection.from_point_id);
            connection.to_point_id = translate(connection.to_point_id);
            connection
        })
        .collect();

    let root_point_id = record
        .root_point_id
        .and_then(|root| point_ids.get(&root).cloned());

    Character {
        id: CharacterId::new(),
        name: record.name,
        color: record.color,
        core: record.core,
        points,
        connections,
        root_point_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{DespairVector, NewPoint};
    use crate::taxonomy::{Stage, TransitionType};
    use std::collections::HashSet;

    fn chain() -> Character {
        let mut character = Character::new("Chain");
        let a = character.add_point(NewPoint::new(DespairVector::balanced(), Stage::Aesthetic, "a"));
        let b = character.add_point(NewPoint::new(DespairVector::balanced(), Stage::Ethical, "b"));
        let c = character.add_point(NewPoint::new(DespairVector::balanced(), Stage::Religious, "c"));
        character.connect_points(&a, &b, TransitionType::Evolution, None);
        character.connect_points(&b, &c, TransitionType::Crisis, None);
        character
    }

    fn labels_of_edges(character: &Character) -> Vec<(String, String)> {
        character
            .connections
            .iter()
            .map(|c| {
                let from = character.point(&c.from_point_id).unwrap().label.clone();
                let to = character.point(&c.to_point_id).unwrap().label.clone();
                (from, to)
            })
            .collect()
    }

    #[test]
    fn test_add_character_cycles_palette() {
        let mut workspace = Workspace::new();
        let first = workspace.add_character("One", None);
        let second = workspace.add_character("Two", Some("#000000".to_string()));
        let third = workspace.add_character("Three", None);

        assert_eq!(workspace.get_character(&first).unwrap().color, CHARACTER_COLORS[0]);
        assert_eq!(workspace.get_character(&second).unwrap().color, "#000000");
        assert_eq!(workspace.get_character(&third).unwrap().color, CHARACTER_COLORS[2]);
    }

    #[test]
    fn test_update_and_delete_character() {
        let mut workspace = Workspace::new();
        let id = workspace.add_character("Draft", None);

        assert!(workspace.update_character(&id, CharacterUpdate::new().with_name("Final")));
        assert_eq!(workspace.find_character("final").map(|c| &c.id), Some(&id));

        assert!(workspace.delete_character(&id).is_some());
        assert!(workspace.is_empty());
        assert!(!workspace.update_character(&id, CharacterUpdate::new()));
        assert!(matches!(
            workspace.require_character(&id),
            Err(ModelError::CharacterNotFound(_))
        ));
    }

    #[test]
    fn test_round_trip_reissues_every_id() {
        let original = chain();
        let mut workspace = Workspace::from_characters(vec![original.clone()]);

        let json = workspace.export_json(&original.id).unwrap();
        let imported_id = workspace.import_json(&json).unwrap();
        let imported = workspace.get_character(&imported_id).unwrap();

        assert_ne!(imported.id, original.id);
        assert_eq!(imported.points.len(), original.points.len());
        assert_eq!(imported.connections.len(), original.connections.len());
        assert_eq!(labels_of_edges(imported), labels_of_edges(&original));
        assert_eq!(imported.root().map(|p| p.label.as_str()), Some("a"));

        let old_ids: HashSet<&str> = original.points.iter().map(|p| p.id.as_str()).collect();
        assert!(imported.points.iter().all(|p| !old_ids.contains(p.id.as_str())));
        assert!(imported
            .connections
            .iter()
            .all(|c| original.connection(&c.id).is_none()));
    }

    #[test]
    fn test_importing_twice_does_not_collide() {
        let record = chain();
        let mut workspace = Workspace::new();
        let first = workspace.import_character(record.clone());
        let second = workspace.import_character(record);

        assert_ne!(first, second);
        let ids_of = |id: &CharacterId| -> HashSet<String> {
            let character = workspace.get_character(id).unwrap();
            character
                .points
                .iter()
                .map(|p| p.id.0.clone())
                .chain(character.connections.iter().map(|c| c.id.0.clone()))
                .collect()
        };
        assert!(ids_of(&first).is_disjoint(&ids_of(&second)));
    }

    #[test]
    fn test_reissue_handles_dangling_references() {
        let mut record = chain();
        let a = record.points[0].id.clone();
        record.connect_points(&a, &PointId::from("ghost"), TransitionType::Branch, None);
        record.root_point_id = Some(PointId::from("ghost-root"));
        record.points[1].vector = DespairVector {
            finite_infinite: 1.7,
            necessity_possibility: 0.5,
            consciousness: -1.0,
        };

        let copy = reissue_ids(record);
        assert!(copy.root_point_id.is_none());
        assert_eq!(copy.connections[2].to_point_id, PointId::from("ghost"));
        assert_eq!(copy.points[1].vector.finite_infinite, 1.0);
        assert_eq!(copy.points[1].vector.consciousness, 0.0);
    }

    #[test]
    fn test_import_rejects_malformed_record() {
        let mut workspace = Workspace::new();
        let result = workspace.import_json(r#"{"name": "No id or points"}"#);
        assert!(matches!(result, Err(ModelError::Json(_))));
        assert!(workspace.is_empty());
    }
}
