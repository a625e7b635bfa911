//! # Relationship Path Finder
//!
//! Shortest labeled paths between two persons in a [`GraphSnapshot`].
//!
//! The search walks the undirected union of parent-child edges (labeled
//! `Parent` or `Child` by traversal direction) and partnership edges
//! (labeled `Spouse`). BTreeMap adjacency plus a FIFO frontier make the
//! result fully deterministic; ties resolve toward the lowest adjacent
//! person id.

use crate::primitives::MAX_PATH_DEGREE;
use crate::snapshot::GraphSnapshot;
use crate::types::{PathStep, PersonId, RelationLabel, RelationPath};
use std::collections::{BTreeMap, BTreeSet, VecDeque};

/// Find a minimum-degree relationship path from `a` to `b`.
///
/// Returns `None` when either endpoint is unknown or the pair is
/// disconnected. `a == b` yields a degree-0 path. The search is bounded by
/// `MAX_PATH_DEGREE` steps.
///
/// The search always runs with the endpoints in canonical (lowest id
/// first) orientation and reorients the result, so `find_path(a, b)` and
/// `find_path(b, a)` report equal degree and exactly mirrored steps.
#[must_use]
pub fn find_path(snapshot: &GraphSnapshot, a: PersonId, b: PersonId) -> Option<RelationPath> {
    if !snapshot.contains_person(a) || !snapshot.contains_person(b) {
        return None;
    }

    if a == b {
        return Some(RelationPath::default());
    }

    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    let forward = bfs_path(snapshot, start, end)?;

    if a <= b {
        Some(forward)
    } else {
        Some(forward.reversed())
    }
}

/// Breadth-first search with predecessor reconstruction.
fn bfs_path(snapshot: &GraphSnapshot, start: PersonId, end: PersonId) -> Option<RelationPath> {
    let mut visited = BTreeSet::new();
    let mut prev: BTreeMap<PersonId, (PersonId, RelationLabel)> = BTreeMap::new();
    let mut queue = VecDeque::new();

    queue.push_back((start, 0usize));
    visited.insert(start);

    'search: while let Some((current, degree)) = queue.pop_front() {
        if degree >= MAX_PATH_DEGREE {
            continue;
        }

        for (neighbor, label) in labeled_neighbors(snapshot, current) {
            if visited.insert(neighbor) {
                prev.insert(neighbor, (current, label));
                if neighbor == end {
                    break 'search;
                }
                queue.push_back((neighbor, degree.saturating_add(1)));
            }
        }
    }

    // Reconstruct end -> start, then reverse into step order
    let mut steps = Vec::new();
    let mut current = end;
    while current != start {
        let &(from, label) = prev.get(&current)?;
        steps.push(PathStep::new(from, current, label));
        current = from;
    }
    steps.reverse();

    Some(RelationPath::new(steps))
}

/// Neighbors of `person` across all edge kinds, in id order.
///
/// When malformed data reaches the same neighbor through several edge
/// kinds, the label preference is Parent, then Child, then Spouse.
fn labeled_neighbors(
    snapshot: &GraphSnapshot,
    person: PersonId,
) -> BTreeMap<PersonId, RelationLabel> {
    let mut neighbors = BTreeMap::new();

    for parent in snapshot.parents_of(person) {
        neighbors.entry(parent).or_insert(RelationLabel::Parent);
    }
    for child in snapshot.children_of(person) {
        neighbors.entry(child).or_insert(RelationLabel::Child);
    }
    for partner in snapshot.partners_of(person) {
        neighbors.entry(partner).or_insert(RelationLabel::Spouse);
    }

    neighbors
}

// =============================================================================
// TESTS
// =============================================================================
