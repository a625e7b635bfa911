//! # Graph Snapshot
//!
//! The immutable relationship graph for the Kinship CORE.
//!
//! A [`GraphSnapshot`] is built once from flat person and edge records and
//! never mutated in place. All indices use `BTreeMap`/`BTreeSet` for
//! deterministic ordering. No `HashMap` allowed.

use crate::types::{
    KinshipError, ParentChildEdge, PartnershipEdge, PartnershipType, Person, PersonId,
    RelationshipType,
};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// SNAPSHOT
// =============================================================================

/// An immutable, indexed view of the relationship graph.
///
/// Construction is the only fallible operation; every query on a built
/// snapshot is total. Lookups of unknown persons yield empty results, not
/// errors, so read paths never have to branch on existence.
#[derive(Debug, Clone, Default)]
pub struct GraphSnapshot {
    /// Person arena: PersonId -> Person
    persons: BTreeMap<PersonId, Person>,

    /// Upward adjacency: child -> set of parents
    parents_of: BTreeMap<PersonId, BTreeSet<PersonId>>,

    /// Downward adjacency: parent -> set of children
    children_of: BTreeMap<PersonId, BTreeSet<PersonId>>,

    /// Partnership adjacency: person -> set of partners (symmetric)
    partners_of: BTreeMap<PersonId, BTreeSet<PersonId>>,

    /// Edge labels: (parent, child) -> relationship label
    relationships: BTreeMap<(PersonId, PersonId), RelationshipType>,

    /// Partnership labels: normalized (a, b) with a <= b -> partnership label
    partnerships: BTreeMap<(PersonId, PersonId), PartnershipType>,
}

impl GraphSnapshot {
    /// Build a snapshot from flat record-store rows.
    ///
    /// Fails with [`KinshipError::DanglingReference`] if any edge endpoint
    /// is absent from `persons`. A duplicate `(parent, child)` row collapses
    /// onto the first occurrence; its label is kept, later labels are
    /// ignored. Partnership rows are normalized to unordered pairs before
    /// the same collapse.
    pub fn build(
        persons: Vec<Person>,
        parent_child_edges: Vec<ParentChildEdge>,
        partnership_edges: Vec<PartnershipEdge>,
    ) -> Result<Self, KinshipError> {
        let mut snapshot = Self::default();

        for person in persons {
            snapshot.persons.insert(person.id, person);
        }

        for edge in parent_child_edges {
            snapshot.check_endpoints(edge.parent, edge.child)?;

            snapshot
                .parents_of
                .entry(edge.child)
                .or_default()
                .insert(edge.parent);
            snapshot
                .children_of
                .entry(edge.parent)
                .or_default()
                .insert(edge.child);
            snapshot
                .relationships
                .entry((edge.parent, edge.child))
                .or_insert(edge.relationship);
        }

        for edge in partnership_edges {
            // PartnershipEdge::new already normalized a <= b
            snapshot.check_endpoints(edge.a, edge.b)?;

            snapshot
                .partners_of
                .entry(edge.a)
                .or_default()
                .insert(edge.b);
            snapshot
                .partners_of
                .entry(edge.b)
                .or_default()
                .insert(edge.a);
            snapshot
                .partnerships
                .entry((edge.a, edge.b))
                .or_insert(edge.partnership);
        }

        Ok(snapshot)
    }

    /// Reject an edge whose endpoints are not both in the person arena.
    fn check_endpoints(&self, from: PersonId, to: PersonId) -> Result<(), KinshipError> {
        for endpoint in [from, to] {
            if !self.persons.contains_key(&endpoint) {
                return Err(KinshipError::DanglingReference {
                    from,
                    to,
                    missing: endpoint,
                });
            }
        }
        Ok(())
    }

    // =========================================================================
    // READ-ONLY ACCESSORS
    // =========================================================================

    /// Lookup a person record by id.
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(&id)
    }

    /// Check if the snapshot contains a person.
    #[must_use]
    pub fn contains_person(&self, id: PersonId) -> bool {
        self.persons.contains_key(&id)
    }

    /// Parents of a person, in id order. Empty for unknown persons.
    pub fn parents_of(&self, id: PersonId) -> impl Iterator<Item = PersonId> + '_ {
        self.parents_of.get(&id).into_iter().flatten().copied()
    }

    /// Children of a person, in id order. Empty for unknown persons.
    pub fn children_of(&self, id: PersonId) -> impl Iterator<Item = PersonId> + '_ {
        self.children_of.get(&id).into_iter().flatten().copied()
    }

    /// Partners of a person, in id order. Empty for unknown persons.
    pub fn partners_of(&self, id: PersonId) -> impl Iterator<Item = PersonId> + '_ {
        self.partners_of.get(&id).into_iter().flatten().copied()
    }

    /// Check if the exact directed `(parent, child)` edge exists.
    #[must_use]
    pub fn has_parent_child_edge(&self, parent: PersonId, child: PersonId) -> bool {
        self.relationships.contains_key(&(parent, child))
    }

    /// Label of the `(parent, child)` edge, if the edge exists.
    #[must_use]
    pub fn relationship_between(
        &self,
        parent: PersonId,
        child: PersonId,
    ) -> Option<&RelationshipType> {
        self.relationships.get(&(parent, child))
    }

    /// Label of the partnership between two persons, if one exists.
    /// Order-insensitive.
    #[must_use]
    pub fn partnership_between(&self, a: PersonId, b: PersonId) -> Option<&PartnershipType> {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.partnerships.get(&key)
    }

    /// Total number of persons.
    #[must_use]
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Total number of distinct parent-child edges.
    #[must_use]
    pub fn parent_child_edge_count(&self) -> usize {
        self.relationships.len()
    }

    /// Total number of distinct partnerships (unordered pairs).
    #[must_use]
    pub fn partnership_count(&self) -> usize {
        self.partnerships.len()
    }

    /// All persons in deterministic id order.
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.values()
    }

    /// All person ids in deterministic order.
    pub fn person_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        self.persons.keys().copied()
    }

    /// All parent-child edges in deterministic `(parent, child)` order.
    pub fn parent_child_edges(
        &self,
    ) -> impl Iterator<Item = (PersonId, PersonId, &RelationshipType)> {
        self.relationships
            .iter()
            .map(|(&(parent, child), label)| (parent, child, label))
    }

    /// All partnerships in deterministic normalized-pair order.
    pub fn partnerships(&self) -> impl Iterator<Item = (PersonId, PersonId, &PartnershipType)> {
        self.partnerships
            .iter()
            .map(|(&(a, b), label)| (a, b, label))
    }
}

// =============================================================================
// TESTS
// =============================================================================
