//! # kinship-core
//!
//! The deterministic relationship graph engine for Kinship - THE ENGINE.
//!
//! This crate computes derived genealogical facts over an immutable
//! snapshot of person and edge records: ancestors, descendants, siblings,
//! grandparents, shortest labeled relationship paths, mini family trees,
//! and calendar-exact ages.
//!
//! ## Architectural Constraints
//!
//! The ENGINE:
//! - Owns no data: the record store lives outside this crate and hands in
//!   flat person and edge lists
//! - Is immutable: a [`GraphSnapshot`] is built once and never mutated
//! - Is deterministic: `BTreeMap`/`BTreeSet` only, integer arithmetic only,
//!   no randomness, and wall-clock time enters only through the [`Clock`]
//!   seam
//! - Has NO async, NO network, NO file I/O (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod age;
pub mod ancestry;
pub mod metrics;
pub mod path;
pub mod primitives;
pub mod query;
pub mod snapshot;
pub mod tree;
pub mod types;
pub mod validate;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    EdgeRejection, KinshipError, ParentChildEdge, PartnershipEdge, PartnershipType, PathStep,
    Person, PersonId, RelationLabel, RelationPath, RelationshipType, TreeNode,
};

// =============================================================================
// RE-EXPORTS: Graph Engine
// =============================================================================

pub use age::{Clock, FixedClock, SystemClock, age_between, compute_age};
pub use ancestry::{ancestors, descendants, grandparents, siblings};
pub use metrics::SnapshotMetrics;
pub use path::find_path;
pub use query::{QueryOutcome, QueryType, run};
pub use snapshot::GraphSnapshot;
pub use tree::build_mini_tree;
pub use validate::check_new_parent_child;
