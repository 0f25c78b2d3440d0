//! Trajectory traversal - the rooted tree derived from a character's graph,
//! root-to-point paths, and flattened views of both.
//!
//! Nothing here is cached: every view is recomputed from the points and
//! connections it is given, and only borrows them.

mod path;
mod tree;

pub use path::*;
pub use tree::*;

use despair_model::{Character, Connection, Point, PointId};
use serde::Serialize;
use std::collections::HashMap;

/// A node of the history tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode<'a> {
    pub point: &'a Point,

    /// The connection this node was reached through (`None` for the root).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<&'a Connection>,

    pub children: Vec<TreeNode<'a>>,
}

impl<'a> TreeNode<'a> {
    fn leaf(point: &'a Point, connection: Option<&'a Connection>) -> Self {
        Self {
            point,
            connection,
            children: Vec::new(),
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

/// A tree node annotated for indented list display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatNode<'a> {
    pub point: &'a Point,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<&'a Connection>,
    pub has_children: bool,
    pub is_last_child: bool,
}

/// Lookup tables shared by the traversals.
struct GraphIndex<'a> {
    points: HashMap<&'a PointId, &'a Point>,
    /// Outgoing connections per point, in connection list order.
    outgoing: HashMap<&'a PointId, Vec<&'a Connection>>,
}

impl<'a> GraphIndex<'a> {
    fn new(points: &'a [Point], connections: &'a [Connection]) -> Self {
        let points = points.iter().map(|p| (&p.id, p)).collect();

        let mut outgoing: HashMap<&PointId, Vec<&Connection>> = HashMap::new();
        for connection in connections {
            outgoing
                .entry(&connection.from_point_id)
                .or_default()
                .push(connection);
        }

        Self { points, outgoing }
    }

    fn point(&self, id: &PointId) -> Option<&'a Point> {
        self.points.get(id).copied()
    }

    fn outgoing(&self, id: &PointId) -> &[&'a Connection] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Trajectory queries directly on a [`Character`].
pub trait TrajectoryExt {
    /// The history tree from the root, if there is one.
    fn history_tree(&self) -> Option<TreeNode<'_>>;

    /// The path from the root to `target` (empty if there is none).
    fn path_to(&self, target: &PointId) -> Vec<&Point>;

    /// Every root-to-leaf branch.
    fn branches(&self) -> Vec<Vec<&Point>>;

    /// The connection leading from `from` to `to`, if any.
    fn connection_between(&self, from: &PointId, to: Option<&PointId>) -> Option<&Connection>;
}

impl TrajectoryExt for Character {
    fn history_tree(&self) -> Option<TreeNode<'_>> {
        build_tree(&self.points, &self.connections, self.root_point_id.as_ref())
    }

    fn path_to(&self, target: &PointId) -> Vec<&Point> {
        find_path_from_root(
            &self.points,
            &self.connections,
            self.root_point_id.as_ref(),
            target,
        )
    }

    fn branches(&self) -> Vec<Vec<&Point>> {
        self.history_tree()
            .map(|tree| tree_to_paths(&tree))
            .unwrap_or_default()
    }

    fn connection_between(&self, from: &PointId, to: Option<&PointId>) -> Option<&Connection> {
        find_connection(&self.connections, from, to)
    }
}
