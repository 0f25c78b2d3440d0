//! Root-to-point path reconstruction.

use despair_model::{Connection, Point, PointId};
use std::collections::HashSet;

use super::GraphIndex;

/// Find the path from the root to `target_id`, both inclusive.
///
/// The search is depth-first in connection list order with a visited set, so
/// when several routes exist the first one discovered wins. Returns an empty
/// path if there is no root, the target does not exist, or it is unreachable.
pub fn find_path_from_root<'a>(
    points: &'a [Point],
    connections: &'a [Connection],
    root_id: Option<&PointId>,
    target_id: &PointId,
) -> Vec<&'a Point> {
    let index = GraphIndex::new(points, connections);
    let (Some(root), Some(_)) = (root_id.and_then(|id| index.point(id)), index.point(target_id))
    else {
        return Vec::new();
    };

    if root.id == *target_id {
        return vec![root];
    }

    // The frames on the stack are exactly the current path.
    let mut visited: HashSet<&PointId> = HashSet::from([&root.id]);
    let mut stack = vec![(root, index.outgoing(&root.id).iter())];

    while let Some((_, edges)) = stack.last_mut() {
        let Some(connection) = edges.next().copied() else {
            stack.pop();
            continue;
        };

        if !visited.insert(&connection.to_point_id) {
            continue;
        }
        let Some(point) = index.point(&connection.to_point_id) else {
            continue;
        };

        stack.push((point, index.outgoing(&point.id).iter()));
        if point.id == *target_id {
            return stack.into_iter().map(|(point, _)| point).collect();
        }
    }

    tracing::debug!(target_point = %target_id, "point is not reachable from the root");
    Vec::new()
}

/// The connection from `from` to `to`, if `to` is given and such an edge exists.
pub fn find_connection<'a>(
    connections: &'a [Connection],
    from: &PointId,
    to: Option<&PointId>,
) -> Option<&'a Connection> {
    let to = to?;
    connections.iter().find(|c| c.links(from, to))
}
