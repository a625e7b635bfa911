//! # Innate Primitives
//!
//! Hardcoded runtime constants for the Kinship CORE.
//!
//! Kinship starts with zero data but fixed logic.
//! These bounds are compiled into the binary and are immutable at runtime.
//! Every traversal in the engine is clamped by one of them, so no query can
//! run unbounded regardless of the shape of the input graph.

/// Maximum traversal depth for ancestry and descendant queries.
///
/// - All queries must be computationally bounded.
/// - This prevents runaway traversals in large graphs.
pub const MAX_TRAVERSAL_DEPTH: usize = 100;

/// Maximum number of generations a mini tree may span in either direction.
///
/// Requests for more levels are clamped, not rejected. Twelve generations
/// upward already exceeds any documented genealogical record chain.
pub const MAX_TREE_LEVELS: usize = 12;

/// Maximum degree (step count) for relationship pathfinding.
///
/// Limits the number of steps in a single path to prevent
/// unbounded computation in find_path and similar queries.
pub const MAX_PATH_DEGREE: usize = 1000;
