//! # Core Type Definitions
//!
//! This module contains all core types for the Kinship deterministic graph
//! engine:
//! - Person identity and record (`PersonId`, `Person`)
//! - Edge records (`ParentChildEdge`, `PartnershipEdge`) and their free-form
//!   labels (`RelationshipType`, `PartnershipType`)
//! - Relationship path output (`RelationLabel`, `PathStep`, `RelationPath`)
//! - Mini family tree output (`TreeNode`)
//! - Error types (`KinshipError`, `EdgeRejection`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point)
//! - Implement `Ord` where they key `BTreeMap`/`BTreeSet` collections
//! - Represent absent data as `Option`/empty collections, never as sentinel
//!   strings

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// PERSON IDENTITY & RECORD
// =============================================================================

/// Unique identifier for a person in the external record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PersonId(pub u64);

/// A person record as supplied by the external record store.
///
/// The engine treats this as read-only input. Display attributes (names,
/// photos, households) belong to the store and its presentation layers;
/// the engine only carries the fields its own queries consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// The person's identity in the record store.
    pub id: PersonId,
    /// Date of birth, if recorded.
    pub date_of_birth: Option<NaiveDate>,
    /// Date of death, if recorded.
    pub date_of_death: Option<NaiveDate>,
    /// Whether the record store marks this person as deceased.
    pub is_deceased: bool,
}

impl Person {
    /// Create a person record with no recorded dates.
    #[must_use]
    pub const fn new(id: PersonId) -> Self {
        Self {
            id,
            date_of_birth: None,
            date_of_death: None,
            is_deceased: false,
        }
    }

    /// Create a person record with explicit dates.
    #[must_use]
    pub const fn with_dates(
        id: PersonId,
        date_of_birth: Option<NaiveDate>,
        date_of_death: Option<NaiveDate>,
        is_deceased: bool,
    ) -> Self {
        Self {
            id,
            date_of_birth,
            date_of_death,
            is_deceased,
        }
    }
}

// =============================================================================
// EDGE LABELS
// =============================================================================

/// Free-form label on a parent-child edge ("Biological", "Adopted", ...).
///
/// Never semantically interpreted by the graph algorithms; carried through
/// for the record store and its callers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RelationshipType(pub String);

impl RelationshipType {
    /// Create a new relationship label from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Free-form label on a partnership edge ("Married", "Partner", ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PartnershipType(pub String);

impl PartnershipType {
    /// Create a new partnership label from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// EDGE RECORDS
// =============================================================================

/// A directed parent → child edge as supplied by the record store.
///
/// Invariants (enforced by [`crate::validate`] before insert, and defended
/// against in every traversal): `parent != child`, at most one edge per
/// `(parent, child)` pair, and the full edge set is acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentChildEdge {
    /// The parent endpoint.
    pub parent: PersonId,
    /// The child endpoint.
    pub child: PersonId,
    /// Free-form relationship label.
    pub relationship: RelationshipType,
}

impl ParentChildEdge {
    /// Create a new parent-child edge.
    #[must_use]
    pub fn new(parent: PersonId, child: PersonId, relationship: RelationshipType) -> Self {
        Self {
            parent,
            child,
            relationship,
        }
    }
}

/// An undirected partnership edge between two persons.
///
/// Stored in normalized order (`a <= b`), so `{B, A}` and `{A, B}` denote
/// the same partnership. Does not participate in the acyclic invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnershipEdge {
    /// The lower-id endpoint.
    pub a: PersonId,
    /// The higher-id endpoint.
    pub b: PersonId,
    /// Free-form partnership label.
    pub partnership: PartnershipType,
}

impl PartnershipEdge {
    /// Create a new partnership edge, normalizing the endpoint order.
    #[must_use]
    pub fn new(a: PersonId, b: PersonId, partnership: PartnershipType) -> Self {
        if a <= b {
            Self { a, b, partnership }
        } else {
            Self {
                a: b,
                b: a,
                partnership,
            }
        }
    }
}

// =============================================================================
// RELATIONSHIP PATH OUTPUT
// =============================================================================

/// The label of one step in a relationship path.
///
/// A step `(from, to, Parent)` reads "`to` is a parent of `from`";
/// `Child` is the downward mirror; `Spouse` crosses a partnership edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationLabel {
    /// The step leads from a child up to a parent.
    Parent,
    /// The step leads from a parent down to a child.
    Child,
    /// The step crosses a partnership edge.
    Spouse,
}

impl RelationLabel {
    /// The label of the same edge traversed in the opposite direction.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Parent => Self::Child,
            Self::Child => Self::Parent,
            Self::Spouse => Self::Spouse,
        }
    }

    /// Lowercase display form ("parent", "child", "spouse").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Spouse => "spouse",
        }
    }
}

impl std::fmt::Display for RelationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of a relationship path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStep {
    /// The person the step leaves.
    pub from: PersonId,
    /// The person the step reaches.
    pub to: PersonId,
    /// How `to` relates to `from`.
    pub relation: RelationLabel,
}

impl PathStep {
    /// Create a new path step.
    #[must_use]
    pub const fn new(from: PersonId, to: PersonId, relation: RelationLabel) -> Self {
        Self { from, to, relation }
    }

    /// The same step walked in the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            relation: self.relation.flip(),
        }
    }
}

/// A shortest labeled path between two persons.
///
/// The degree (number of steps) is minimal over the undirected union of
/// parent-child and partnership edges. A degree-0 path connects a person
/// to themself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RelationPath {
    /// The steps from the query's first person to its second.
    pub steps: Vec<PathStep>,
}

impl RelationPath {
    /// Create a path from its steps.
    #[must_use]
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// Number of edges in the path.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.steps.len()
    }

    /// The same path walked end to start, with every label flipped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            steps: self.steps.iter().rev().map(|s| s.flipped()).collect(),
        }
    }
}

// =============================================================================
// MINI TREE OUTPUT
// =============================================================================

/// One node of a depth-bounded mini family tree.
///
/// `generation` is the signed offset from the focus person (0 = focus,
/// negative = ancestors, positive = descendants). Ancestors are nested
/// through `parents`, descendants through `children`; spouses sit at the
/// same generation as their node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// The person at this node.
    pub person: PersonId,
    /// Signed generation offset from the focus person.
    pub generation: i32,
    /// Partners of this person, at the same generation.
    pub spouses: Vec<PersonId>,
    /// Parent subtrees (generation - 1), empty below the focus.
    pub parents: Vec<TreeNode>,
    /// Child subtrees (generation + 1), empty above the focus.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node with no spouses or subtrees.
    #[must_use]
    pub const fn new(person: PersonId, generation: i32) -> Self {
        Self {
            person,
            generation,
            spouses: Vec::new(),
            parents: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, the node itself included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .parents
            .iter()
            .chain(self.children.iter())
            .map(TreeNode::node_count)
            .sum::<usize>()
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Kinship system.
///
/// - No silent failures
/// - Use `Result<T, KinshipError>` for fallible operations
/// - The engine never panics; all errors are recoverable
#[derive(Debug, Error)]
pub enum KinshipError {
    /// An edge references a person id absent from the supplied person set.
    /// Fatal to snapshot construction; silently dropping the edge would
    /// corrupt every derived result without signal.
    #[error("edge {from:?} -> {to:?} references unknown person {missing:?}")]
    DanglingReference {
        /// First endpoint of the offending edge (parent, or partner `a`).
        from: PersonId,
        /// Second endpoint of the offending edge (child, or partner `b`).
        to: PersonId,
        /// The endpoint that is missing from the person set.
        missing: PersonId,
    },

    /// A serialization or deserialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Why a proposed parent-child edge was rejected.
///
/// Returned (never panicked) from [`crate::validate::check_new_parent_child`]
/// so callers can branch on the reason for user-facing messages. Checked in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeRejection {
    /// The proposed edge would make a person their own parent.
    #[error("a person cannot be their own parent")]
    SelfReference,

    /// The exact `(parent, child)` edge already exists.
    #[error("this parent-child edge already exists")]
    DuplicateEdge,

    /// The proposed child is already an ancestor of the proposed parent;
    /// inserting the edge would create a cycle.
    #[error("edge would make a person their own ancestor")]
    CycleDetected,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partnership_edge_normalizes_order() {
        let e = PartnershipEdge::new(PersonId(9), PersonId(2), PartnershipType::new("Married"));
        assert_eq!(e.a, PersonId(2));
        assert_eq!(e.b, PersonId(9));

        let same = PartnershipEdge::new(PersonId(2), PersonId(9), PartnershipType::new("Married"));
        assert_eq!(e, same);
    }

    #[test]
    fn relation_label_flip_is_involutive() {
        for label in [
            RelationLabel::Parent,
            RelationLabel::Child,
            RelationLabel::Spouse,
        ] {
            assert_eq!(label.flip().flip(), label);
        }
        assert_eq!(RelationLabel::Parent.flip(), RelationLabel::Child);
        assert_eq!(RelationLabel::Spouse.flip(), RelationLabel::Spouse);
    }

    #[test]
    fn path_reversed_flips_steps() {
        let path = RelationPath::new(vec![
            PathStep::new(PersonId(1), PersonId(2), RelationLabel::Parent),
            PathStep::new(PersonId(2), PersonId(3), RelationLabel::Spouse),
        ]);

        let back = path.reversed();
        assert_eq!(back.degree(), 2);
        assert_eq!(
            back.steps[0],
            PathStep::new(PersonId(3), PersonId(2), RelationLabel::Spouse)
        );
        assert_eq!(
            back.steps[1],
            PathStep::new(PersonId(2), PersonId(1), RelationLabel::Child)
        );
    }

    #[test]
    fn tree_node_count_includes_both_directions() {
        let mut root = TreeNode::new(PersonId(1), 0);
        root.parents.push(TreeNode::new(PersonId(2), -1));
        root.children.push(TreeNode::new(PersonId(3), 1));
        root.children.push(TreeNode::new(PersonId(4), 1));

        assert_eq!(root.node_count(), 4);
    }

    #[test]
    fn person_defaults_to_no_dates() {
        let p = Person::new(PersonId(7));
        assert!(p.date_of_birth.is_none());
        assert!(p.date_of_death.is_none());
        assert!(!p.is_deceased);
    }

    #[test]
    fn edge_rejection_messages_are_user_facing() {
        assert_eq!(
            EdgeRejection::SelfReference.to_string(),
            "a person cannot be their own parent"
        );
        assert_eq!(
            EdgeRejection::CycleDetected.to_string(),
            "edge would make a person their own ancestor"
        );
    }
}
