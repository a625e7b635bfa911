//! # Property-Based Tests
//!
//! Verification tests using proptest.
//!
//! These tests ensure determinism and correctness invariants over randomly
//! generated family forests. Generated parent-child edges always point from
//! a lower id to a higher id, which keeps the input acyclic the same way
//! the validator keeps committed data acyclic.

use kinship_core::{
    GraphSnapshot, ParentChildEdge, PartnershipEdge, PartnershipType, Person, PersonId,
    RelationshipType, age_between, ancestors, check_new_parent_child, descendants, find_path,
    siblings,
};
use proptest::collection::vec;
use proptest::prelude::*;

const POPULATION: u64 = 40;

fn persons() -> Vec<Person> {
    (0..POPULATION).map(|id| Person::new(PersonId(id))).collect()
}

fn forest(raw_edges: &[(u64, u64)], raw_partnerships: &[(u64, u64)]) -> GraphSnapshot {
    let edges = raw_edges
        .iter()
        .filter(|(p, c)| p != c)
        .map(|&(p, c)| {
            let (p, c) = if p < c { (p, c) } else { (c, p) };
            ParentChildEdge::new(PersonId(p), PersonId(c), RelationshipType::new("Biological"))
        })
        .collect();
    let partnerships = raw_partnerships
        .iter()
        .filter(|(a, b)| a != b)
        .map(|&(a, b)| PartnershipEdge::new(PersonId(a), PersonId(b), PartnershipType::new("Married")))
        .collect();

    GraphSnapshot::build(persons(), edges, partnerships).expect("acyclic forest builds")
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Same input produces an identical snapshot and identical query results.
    #[test]
    fn determinism_identical_input_produces_identical_output(
        edges in vec((0..POPULATION, 0..POPULATION), 0..80),
        probe in 0..POPULATION
    ) {
        let snapshot1 = forest(&edges, &[]);
        let snapshot2 = forest(&edges, &[]);

        prop_assert_eq!(snapshot1.person_count(), snapshot2.person_count());
        prop_assert_eq!(
            snapshot1.parent_child_edge_count(),
            snapshot2.parent_child_edge_count()
        );

        let person = PersonId(probe);
        prop_assert_eq!(
            ancestors(&snapshot1, person, None),
            ancestors(&snapshot2, person, None)
        );
        prop_assert_eq!(
            descendants(&snapshot1, person, None),
            descendants(&snapshot2, person, None)
        );
    }

    /// Nobody is their own ancestor or descendant.
    #[test]
    fn person_excluded_from_own_ancestry(
        edges in vec((0..POPULATION, 0..POPULATION), 0..80),
        probe in 0..POPULATION
    ) {
        let snapshot = forest(&edges, &[]);
        let person = PersonId(probe);

        prop_assert!(!ancestors(&snapshot, person, None).contains(&person));
        prop_assert!(!descendants(&snapshot, person, None).contains(&person));
    }

    /// Nobody is their own sibling.
    #[test]
    fn person_excluded_from_own_siblings(
        edges in vec((0..POPULATION, 0..POPULATION), 0..80),
        probe in 0..POPULATION
    ) {
        let snapshot = forest(&edges, &[]);
        let person = PersonId(probe);

        prop_assert!(!siblings(&snapshot, person).contains(&person));
    }

    /// Ancestor and descendant views agree with each other.
    #[test]
    fn ancestry_duality(
        edges in vec((0..POPULATION, 0..POPULATION), 0..80),
        probe in 0..POPULATION
    ) {
        let snapshot = forest(&edges, &[]);
        let person = PersonId(probe);

        for ancestor in ancestors(&snapshot, person, None) {
            prop_assert!(descendants(&snapshot, ancestor, None).contains(&person));
        }
    }

    /// A self-parent proposal is always rejected, whatever the graph looks like.
    #[test]
    fn self_reference_always_rejected(
        edges in vec((0..POPULATION, 0..POPULATION), 0..80),
        probe in 0..POPULATION
    ) {
        let snapshot = forest(&edges, &[]);
        let person = PersonId(probe);

        prop_assert!(check_new_parent_child(&snapshot, person, person).is_err());
    }

    /// An accepted edge proposal never closes a cycle.
    #[test]
    fn accepted_edges_preserve_acyclicity(
        edges in vec((0..POPULATION, 0..POPULATION), 0..80),
        parent in 0..POPULATION,
        child in 0..POPULATION
    ) {
        let snapshot = forest(&edges, &[]);
        let parent = PersonId(parent);
        let child = PersonId(child);

        if check_new_parent_child(&snapshot, parent, child).is_ok() {
            // The proposed child must not already sit above the parent
            prop_assert!(!ancestors(&snapshot, parent, None).contains(&child));
            prop_assert_ne!(parent, child);
        }
    }

    /// Paths are exactly symmetric: equal degree, mirrored steps.
    #[test]
    fn path_symmetry(
        edges in vec((0..POPULATION, 0..POPULATION), 0..80),
        partnerships in vec((0..POPULATION, 0..POPULATION), 0..20),
        a in 0..POPULATION,
        b in 0..POPULATION
    ) {
        let snapshot = forest(&edges, &partnerships);
        let a = PersonId(a);
        let b = PersonId(b);

        let forward = find_path(&snapshot, a, b);
        let backward = find_path(&snapshot, b, a);

        match (forward, backward) {
            (Some(forward), Some(backward)) => {
                prop_assert_eq!(forward.degree(), backward.degree());
                prop_assert_eq!(forward.reversed(), backward);
            }
            (None, None) => {}
            _ => prop_assert!(false, "one direction found a path, the other did not"),
        }
    }

    /// A found path is walkable: consecutive steps chain, endpoints match.
    #[test]
    fn path_steps_chain_between_endpoints(
        edges in vec((0..POPULATION, 0..POPULATION), 0..80),
        partnerships in vec((0..POPULATION, 0..POPULATION), 0..20),
        a in 0..POPULATION,
        b in 0..POPULATION
    ) {
        let snapshot = forest(&edges, &partnerships);
        let a = PersonId(a);
        let b = PersonId(b);

        if let Some(path) = find_path(&snapshot, a, b) {
            if path.degree() == 0 {
                prop_assert_eq!(a, b);
            } else {
                prop_assert_eq!(path.steps[0].from, a);
                prop_assert_eq!(path.steps[path.degree() - 1].to, b);
                for pair in path.steps.windows(2) {
                    prop_assert_eq!(pair[0].to, pair[1].from);
                }
            }
        }
    }

    /// Ages are never negative and at most the raw year difference.
    #[test]
    fn age_bounds(
        birth_year in 1800i32..2100,
        birth_day in 0u32..365,
        cmp_year in 1800i32..2100,
        cmp_day in 0u32..365
    ) {
        let birth = chrono::NaiveDate::from_yo_opt(birth_year, birth_day + 1).expect("valid day");
        let comparison = chrono::NaiveDate::from_yo_opt(cmp_year, cmp_day + 1).expect("valid day");

        match age_between(birth, comparison) {
            Some(age) => {
                prop_assert!(age >= 0);
                prop_assert!(age <= cmp_year - birth_year);
                prop_assert!(comparison >= birth);
            }
            None => prop_assert!(comparison < birth),
        }
    }
}
