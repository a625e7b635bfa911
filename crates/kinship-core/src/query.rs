//! # Query Module
//!
//! Structured query types for Core interaction.
//!
//! - Map caller questions onto structured graph operations
//! - Deterministic dispatch (no semantic guessing)
//! - One entry point for every read the engine supports

use crate::age::{compute_age, Clock};
use crate::ancestry::{ancestors, descendants, grandparents, siblings};
use crate::path::find_path;
use crate::snapshot::GraphSnapshot;
use crate::tree::build_mini_tree;
use crate::types::{PersonId, RelationPath, TreeNode};
use std::collections::BTreeSet;

/// Query operation types supported by the CORE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    /// All ancestors of a person, optionally depth-limited.
    Ancestors {
        person: PersonId,
        max_depth: Option<usize>,
    },

    /// All descendants of a person, optionally depth-limited.
    Descendants {
        person: PersonId,
        max_depth: Option<usize>,
    },

    /// All siblings of a person (shared parent, self excluded).
    Siblings(PersonId),

    /// All grandparents of a person.
    Grandparents(PersonId),

    /// Shortest labeled relationship path between two persons.
    Path { from: PersonId, to: PersonId },

    /// Mini family tree around a focus person.
    Tree {
        focus: PersonId,
        up_levels: usize,
        down_levels: usize,
    },

    /// Completed years of age for a person.
    Age(PersonId),
}

impl QueryType {
    /// Ancestors helper.
    #[must_use]
    pub const fn ancestors(person: PersonId, max_depth: Option<usize>) -> Self {
        Self::Ancestors { person, max_depth }
    }

    /// Descendants helper.
    #[must_use]
    pub const fn descendants(person: PersonId, max_depth: Option<usize>) -> Self {
        Self::Descendants { person, max_depth }
    }

    /// Path helper.
    #[must_use]
    pub const fn path(from: PersonId, to: PersonId) -> Self {
        Self::Path { from, to }
    }

    /// Tree helper.
    #[must_use]
    pub const fn tree(focus: PersonId, up_levels: usize, down_levels: usize) -> Self {
        Self::Tree {
            focus,
            up_levels,
            down_levels,
        }
    }
}

/// The result of running a query against a snapshot.
///
/// Absence (no path, unknown focus, no birth date) is carried inside the
/// variant, never as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// A set of person ids, in deterministic order.
    Persons(BTreeSet<PersonId>),
    /// A relationship path, or `None` when disconnected or unknown.
    Path(Option<RelationPath>),
    /// A mini family tree, or `None` when the focus is unknown.
    Tree(Option<TreeNode>),
    /// Completed years of age, or `None` when not computable.
    Age(Option<i32>),
}

/// Run a structured query against a snapshot.
///
/// Total: every query on a built snapshot produces an outcome. The clock
/// only matters for [`QueryType::Age`].
#[must_use]
pub fn run(snapshot: &GraphSnapshot, clock: &dyn Clock, query: QueryType) -> QueryOutcome {
    match query {
        QueryType::Ancestors { person, max_depth } => {
            QueryOutcome::Persons(ancestors(snapshot, person, max_depth))
        }
        QueryType::Descendants { person, max_depth } => {
            QueryOutcome::Persons(descendants(snapshot, person, max_depth))
        }
        QueryType::Siblings(person) => QueryOutcome::Persons(siblings(snapshot, person)),
        QueryType::Grandparents(person) => QueryOutcome::Persons(grandparents(snapshot, person)),
        QueryType::Path { from, to } => QueryOutcome::Path(find_path(snapshot, from, to)),
        QueryType::Tree {
            focus,
            up_levels,
            down_levels,
        } => QueryOutcome::Tree(build_mini_tree(snapshot, focus, up_levels, down_levels)),
        QueryType::Age(person) => QueryOutcome::Age(
            snapshot
                .person(person)
                .and_then(|p| compute_age(p, clock)),
        ),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::FixedClock;
    use crate::types::{ParentChildEdge, Person, RelationshipType};
    use chrono::NaiveDate;

    fn fixture() -> GraphSnapshot {
        let birth = NaiveDate::from_ymd_opt(1970, 1, 1);
        let persons = vec![
            Person::with_dates(PersonId(1), birth, None, false),
            Person::new(PersonId(2)),
            Person::new(PersonId(3)),
        ];
        let edges = vec![
            ParentChildEdge::new(PersonId(1), PersonId(2), RelationshipType::new("Biological")),
            ParentChildEdge::new(PersonId(1), PersonId(3), RelationshipType::new("Biological")),
        ];
        GraphSnapshot::build(persons, edges, vec![]).expect("valid snapshot")
    }

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"))
    }

    #[test]
    fn dispatch_covers_set_queries() {
        let snapshot = fixture();
        let outcome = run(&snapshot, &clock(), QueryType::Siblings(PersonId(2)));
        assert_eq!(
            outcome,
            QueryOutcome::Persons([PersonId(3)].into_iter().collect())
        );

        let outcome = run(
            &snapshot,
            &clock(),
            QueryType::descendants(PersonId(1), None),
        );
        assert_eq!(
            outcome,
            QueryOutcome::Persons([PersonId(2), PersonId(3)].into_iter().collect())
        );
    }

    #[test]
    fn dispatch_covers_path_and_tree() {
        let snapshot = fixture();

        let QueryOutcome::Path(Some(path)) =
            run(&snapshot, &clock(), QueryType::path(PersonId(2), PersonId(3)))
        else {
            unreachable!("siblings are connected");
        };
        assert_eq!(path.degree(), 2);

        let QueryOutcome::Tree(Some(tree)) =
            run(&snapshot, &clock(), QueryType::tree(PersonId(1), 1, 1))
        else {
            unreachable!("focus exists");
        };
        assert_eq!(tree.children.len(), 2);
    }

    #[test]
    fn age_query_uses_the_injected_clock() {
        let snapshot = fixture();
        assert_eq!(
            run(&snapshot, &clock(), QueryType::Age(PersonId(1))),
            QueryOutcome::Age(Some(50))
        );
        // No birth date recorded
        assert_eq!(
            run(&snapshot, &clock(), QueryType::Age(PersonId(2))),
            QueryOutcome::Age(None)
        );
        // Unknown person
        assert_eq!(
            run(&snapshot, &clock(), QueryType::Age(PersonId(9))),
            QueryOutcome::Age(None)
        );
    }
}
