//! # Ancestry Queries
//!
//! Set-valued relationship queries over a [`GraphSnapshot`].
//!
//! All queries return `BTreeSet<PersonId>` in deterministic id order.
//! Unknown ids and persons without edges yield empty sets, never errors.
//! Every traversal carries a visited set and a generation cap, so malformed
//! snapshot data degrades to a truncated result rather than a hang.

use crate::primitives::MAX_TRAVERSAL_DEPTH;
use crate::snapshot::GraphSnapshot;
use crate::types::PersonId;
use std::collections::{BTreeSet, VecDeque};

/// The direction a generational BFS walks the parent-child edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
}

/// All ancestors of `person`, up to `max_depth` generations
/// (default and cap: `MAX_TRAVERSAL_DEPTH`).
///
/// `person` itself is never included.
#[must_use]
pub fn ancestors(
    snapshot: &GraphSnapshot,
    person: PersonId,
    max_depth: Option<usize>,
) -> BTreeSet<PersonId> {
    generational_bfs(snapshot, person, max_depth, Direction::Up)
}

/// All descendants of `person`, up to `max_depth` generations
/// (default and cap: `MAX_TRAVERSAL_DEPTH`).
///
/// `person` itself is never included.
#[must_use]
pub fn descendants(
    snapshot: &GraphSnapshot,
    person: PersonId,
    max_depth: Option<usize>,
) -> BTreeSet<PersonId> {
    generational_bfs(snapshot, person, max_depth, Direction::Down)
}

/// All grandparents of `person`: the union of the parents of each parent.
#[must_use]
pub fn grandparents(snapshot: &GraphSnapshot, person: PersonId) -> BTreeSet<PersonId> {
    snapshot
        .parents_of(person)
        .flat_map(|parent| snapshot.parents_of(parent))
        .filter(|&g| g != person)
        .collect()
}

/// All siblings of `person`: every other child of each of their parents.
///
/// Half-siblings appear once; `person` is excluded.
#[must_use]
pub fn siblings(snapshot: &GraphSnapshot, person: PersonId) -> BTreeSet<PersonId> {
    snapshot
        .parents_of(person)
        .flat_map(|parent| snapshot.children_of(parent))
        .filter(|&child| child != person)
        .collect()
}

/// Depth-bounded BFS along one generational direction.
fn generational_bfs(
    snapshot: &GraphSnapshot,
    start: PersonId,
    max_depth: Option<usize>,
    direction: Direction,
) -> BTreeSet<PersonId> {
    let depth_limit = max_depth
        .unwrap_or(MAX_TRAVERSAL_DEPTH)
        .min(MAX_TRAVERSAL_DEPTH);

    let mut result = BTreeSet::new();
    let mut visited = BTreeSet::new();
    let mut queue = VecDeque::new();

    queue.push_back((start, 0usize));
    visited.insert(start);

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= depth_limit {
            continue;
        }

        let next: Vec<PersonId> = match direction {
            Direction::Up => snapshot.parents_of(current).collect(),
            Direction::Down => snapshot.children_of(current).collect(),
        };

        for neighbor in next {
            if visited.insert(neighbor) {
                result.insert(neighbor);
                queue.push_back((neighbor, depth.saturating_add(1)));
            }
        }
    }

    // A cycle in malformed input could route back to the start
    result.remove(&start);
    result
}

// =============================================================================
// TESTS
// =============================================================================
