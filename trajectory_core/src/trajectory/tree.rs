//! History tree construction and the views derived from it.

use despair_model::{Connection, Point, PointId};
use std::collections::HashSet;

use super::{FlatNode, GraphIndex, TreeNode};

/// Build the history tree rooted at `root_id`.
///
/// Children follow outgoing connections in connection list order. Traversal
/// is depth-first and every point is placed at most once, at the position
/// where it is first reached, so cycles terminate and shared descendants
/// appear only under their first parent. Connections to missing points are
/// skipped. Returns `None` if there is no root or it does not exist.
pub fn build_tree<'a>(
    points: &'a [Point],
    connections: &'a [Connection],
    root_id: Option<&PointId>,
) -> Option<TreeNode<'a>> {
    let index = GraphIndex::new(points, connections);
    let root = index.point(root_id?)?;

    // Nodes are allocated in pre-order, so a child always has a higher slot
    // index than its parent.
    let mut slots: Vec<(TreeNode<'a>, Option<usize>)> = vec![(TreeNode::leaf(root, None), None)];
    let mut visited: HashSet<&PointId> = HashSet::from([&root.id]);
    let mut stack = vec![(0usize, index.outgoing(&root.id).iter())];

    while let Some((slot, edges)) = stack.last_mut() {
        let parent = *slot;
        let Some(connection) = edges.next().copied() else {
            stack.pop();
            continue;
        };

        if !visited.insert(&connection.to_point_id) {
            continue;
        }
        let Some(point) = index.point(&connection.to_point_id) else {
            tracing::debug!(target_point = %connection.to_point_id, "skipping dangling connection");
            continue;
        };

        slots.push((TreeNode::leaf(point, Some(connection)), Some(parent)));
        stack.push((slots.len() - 1, index.outgoing(&point.id).iter()));
    }

    // Attach children bottom-up. Siblings arrive in reverse, so each node
    // restores the order of its children once all of them are attached.
    let mut nodes: Vec<Option<TreeNode<'a>>> = Vec::with_capacity(slots.len());
    let mut parents = Vec::with_capacity(slots.len());
    for (node, parent) in slots {
        nodes.push(Some(node));
        parents.push(parent);
    }

    for slot in (1..nodes.len()).rev() {
        let Some(mut node) = nodes[slot].take() else {
            continue;
        };
        node.children.reverse();
        if let Some(parent) = parents[slot].and_then(|p| nodes[p].as_mut()) {
            parent.children.push(node);
        }
    }

    let mut tree = nodes.into_iter().next().flatten()?;
    tree.children.reverse();

    tracing::debug!(root = %root.id, nodes = tree.size(), "built history tree");
    Some(tree)
}

/// Flatten a tree in pre-order, with depth and sibling position.
///
/// The root has depth 0 and counts as a last child.
pub fn flatten_tree_with_depth<'a>(tree: &TreeNode<'a>) -> Vec<FlatNode<'a>> {
    let mut result = Vec::new();
    let mut stack = vec![(tree, 0usize, true)];

    while let Some((node, depth, is_last_child)) = stack.pop() {
        result.push(FlatNode {
            point: node.point,
            depth,
            connection: node.connection,
            has_children: !node.children.is_empty(),
            is_last_child,
        });

        let last = node.children.len().saturating_sub(1);
        for (i, child) in node.children.iter().enumerate().rev() {
            stack.push((child, depth + 1, i == last));
        }
    }

    result
}

/// Every root-to-leaf branch of a tree, in pre-order of the leaves.
pub fn tree_to_paths<'a>(tree: &TreeNode<'a>) -> Vec<Vec<&'a Point>> {
    let mut paths = Vec::new();
    let mut current: Vec<&'a Point> = Vec::new();
    let mut stack = vec![(tree, 0usize)];

    while let Some((node, depth)) = stack.pop() {
        current.truncate(depth);
        current.push(node.point);

        if node.children.is_empty() {
            paths.push(current.clone());
        } else {
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use despair_model::{Character, DespairVector, NewPoint, Stage, TransitionType};

    fn character_with(labels: &[&str]) -> (Character, Vec<PointId>) {
        let mut character = Character::new("Tree");
        let ids = labels
            .iter()
            .map(|label| {
                character.add_point(NewPoint::new(DespairVector::balanced(), Stage::Aesthetic, *label))
            })
            .collect();
        (character, ids)
    }

    fn labels(points: &[&Point]) -> Vec<String> {
        points.iter().map(|p| p.label.clone()).collect()
    }

    #[test]
    fn test_no_root_no_tree() {
        let (character, _) = character_with(&["a"]);
        assert!(build_tree(&character.points, &character.connections, None).is_none());
        assert!(build_tree(
            &character.points,
            &character.connections,
            Some(&PointId::from("missing"))
        )
        .is_none());
    }

    #[test]
    fn test_children_follow_connection_order() {
        let (mut character, ids) = character_with(&["root", "b", "c", "d"]);
        character.connect_points(&ids[0], &ids[2], TransitionType::Branch, None);
        character.connect_points(&ids[0], &ids[1], TransitionType::Evolution, None);
        character.connect_points(&ids[1], &ids[3], TransitionType::Evolution, None);

        let tree = build_tree(&character.points, &character.connections, Some(&ids[0])).unwrap();
        assert!(tree.connection.is_none());
        let children: Vec<&str> = tree.children.iter().map(|c| c.point.label.as_str()).collect();
        assert_eq!(children, ["c", "b"]);
        assert_eq!(tree.children[1].children[0].point.label, "d");
        assert_eq!(
            tree.children[0].connection.map(|c| c.transition_type),
            Some(TransitionType::Branch)
        );
    }

    #[test]
    fn test_shared_descendant_placed_once() {
        // root -> a -> shared, root -> b -> shared
        let (mut character, ids) = character_with(&["root", "a", "b", "shared"]);
        character.connect_points(&ids[0], &ids[1], TransitionType::Evolution, None);
        character.connect_points(&ids[0], &ids[2], TransitionType::Evolution, None);
        character.connect_points(&ids[1], &ids[3], TransitionType::Evolution, None);
        character.connect_points(&ids[2], &ids[3], TransitionType::Evolution, None);

        let tree = build_tree(&character.points, &character.connections, Some(&ids[0])).unwrap();
        assert_eq!(tree.size(), 4);
        assert_eq!(tree.children[0].children.len(), 1);
        assert!(tree.children[1].children.is_empty());
    }

    #[test]
    fn test_dangling_and_unreachable_points() {
        let (mut character, ids) = character_with(&["root", "island"]);
        character.connect_points(&ids[0], &PointId::from("ghost"), TransitionType::Evolution, None);

        let tree = build_tree(&character.points, &character.connections, Some(&ids[0])).unwrap();
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn test_flatten_is_preorder() {
        // root -> a -> a1, root -> b
        let (mut character, ids) = character_with(&["root", "a", "b", "a1"]);
        character.connect_points(&ids[0], &ids[1], TransitionType::Evolution, None);
        character.connect_points(&ids[0], &ids[2], TransitionType::Branch, None);
        character.connect_points(&ids[1], &ids[3], TransitionType::Evolution, None);

        let tree = build_tree(&character.points, &character.connections, Some(&ids[0])).unwrap();
        let flat = flatten_tree_with_depth(&tree);

        let shape: Vec<(&str, usize, bool, bool)> = flat
            .iter()
            .map(|n| (n.point.label.as_str(), n.depth, n.has_children, n.is_last_child))
            .collect();
        assert_eq!(
            shape,
            [
                ("root", 0, true, true),
                ("a", 1, true, false),
                ("a1", 2, false, true),
                ("b", 1, false, true),
            ]
        );
    }

    #[test]
    fn test_tree_to_paths() {
        let (mut character, ids) = character_with(&["root", "a", "b", "a1", "a2"]);
        character.connect_points(&ids[0], &ids[1], TransitionType::Evolution, None);
        character.connect_points(&ids[0], &ids[2], TransitionType::Branch, None);
        character.connect_points(&ids[1], &ids[3], TransitionType::Evolution, None);
        character.connect_points(&ids[1], &ids[4], TransitionType::Evolution, None);

        let tree = build_tree(&character.points, &character.connections, Some(&ids[0])).unwrap();
        let paths = tree_to_paths(&tree);

        assert_eq!(paths.len(), 3);
        assert_eq!(labels(&paths[0]), ["root", "a", "a1"]);
        assert_eq!(labels(&paths[1]), ["root", "a", "a2"]);
        assert_eq!(labels(&paths[2]), ["root", "b"]);
    }

    #[test]
    fn test_single_point_tree() {
        let (character, ids) = character_with(&["alone"]);
        let tree = build_tree(&character.points, &character.connections, Some(&ids[0])).unwrap();

        assert_eq!(tree_to_paths(&tree).len(), 1);
        let flat = flatten_tree_with_depth(&tree);
        assert_eq!(flat.len(), 1);
        assert!(flat[0].is_last_child);
        assert!(!flat[0].has_children);
    }
}
