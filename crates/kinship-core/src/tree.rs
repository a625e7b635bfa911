//! # Mini Tree Builder
//!
//! Depth-bounded nested family trees around a focus person.
//!
//! The builder walks ancestors and descendants recursively with a shared
//! visited set, so inconsistent snapshot data degrades to a truncated tree
//! rather than a hang. Ancestor nodes never expand downward and descendant
//! nodes never expand upward; the tree stays a tree even when the
//! underlying graph braids through intermarriage.

use crate::primitives::MAX_TREE_LEVELS;
use crate::snapshot::GraphSnapshot;
use crate::types::{PersonId, TreeNode};
use std::collections::BTreeSet;

/// Build a mini family tree centered on `focus`.
///
/// Returns `None` when `focus` is not in the snapshot. The root sits at
/// generation 0; ancestors nest through `parents` at negative generations,
/// descendants through `children` at positive ones, and every node carries
/// its spouses at the same generation. `up_levels` and `down_levels` are
/// clamped to `MAX_TREE_LEVELS` each.
#[must_use]
pub fn build_mini_tree(
    snapshot: &GraphSnapshot,
    focus: PersonId,
    up_levels: usize,
    down_levels: usize,
) -> Option<TreeNode> {
    if !snapshot.contains_person(focus) {
        return None;
    }

    let up = up_levels.min(MAX_TREE_LEVELS);
    let down = down_levels.min(MAX_TREE_LEVELS);

    let mut visited = BTreeSet::new();
    visited.insert(focus);

    let mut root = node_with_spouses(snapshot, focus, 0);
    root.parents = expand_up(snapshot, focus, 0, up, &mut visited);
    root.children = expand_down(snapshot, focus, 0, down, &mut visited);

    Some(root)
}

/// A leaf node for `person` with its spouses attached.
fn node_with_spouses(snapshot: &GraphSnapshot, person: PersonId, generation: i32) -> TreeNode {
    let mut node = TreeNode::new(person, generation);
    node.spouses = snapshot.partners_of(person).collect();
    node
}

/// Recursively expand the ancestor side of the tree.
fn expand_up(
    snapshot: &GraphSnapshot,
    person: PersonId,
    generation: i32,
    remaining: usize,
    visited: &mut BTreeSet<PersonId>,
) -> Vec<TreeNode> {
    if remaining == 0 {
        return Vec::new();
    }

    let next_generation = generation.saturating_sub(1);
    let mut nodes = Vec::new();

    for parent in snapshot.parents_of(person).collect::<Vec<_>>() {
        if !visited.insert(parent) {
            continue;
        }

        let mut node = node_with_spouses(snapshot, parent, next_generation);
        node.parents = expand_up(
            snapshot,
            parent,
            next_generation,
            remaining.saturating_sub(1),
            visited,
        );
        nodes.push(node);
    }

    nodes
}

/// Recursively expand the descendant side of the tree.
fn expand_down(
    snapshot: &GraphSnapshot,
    person: PersonId,
    generation: i32,
    remaining: usize,
    visited: &mut BTreeSet<PersonId>,
) -> Vec<TreeNode> {
    if remaining == 0 {
        return Vec::new();
    }

    let next_generation = generation.saturating_add(1);
    let mut nodes = Vec::new();

    for child in snapshot.children_of(person).collect::<Vec<_>>() {
        if !visited.insert(child) {
            continue;
        }

        let mut node = node_with_spouses(snapshot, child, next_generation);
        node.children = expand_down(
            snapshot,
            child,
            next_generation,
            remaining.saturating_sub(1),
            visited,
        );
        nodes.push(node);
    }

    nodes
}

// =============================================================================
// TESTS
// =============================================================================
