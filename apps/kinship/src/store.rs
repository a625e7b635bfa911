//! # Record Store
//!
//! Flat JSON family record files, the external collaborator that owns all
//! person and edge data. The engine never touches files; this module loads
//! record rows, validates paths and sizes, and converts them into the flat
//! lists [`GraphSnapshot::build`] consumes.
//!
//! Display names stay on this side of the boundary. The engine works on
//! [`PersonId`]s only, and the CLI decides how to render unnamed persons.

use chrono::NaiveDate;
use kinship_core::{
    GraphSnapshot, KinshipError, ParentChildEdge, PartnershipEdge, PartnershipType, Person,
    PersonId, RelationshipType,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// =============================================================================
// FILE LIMITS
// =============================================================================

/// Maximum record file size (64 MB).
///
/// This prevents memory exhaustion from malicious or accidental large files.
const MAX_RECORD_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Relationship label for parent-child rows that carry none.
const DEFAULT_RELATIONSHIP: &str = "Biological";

/// Partnership label for partnership rows that carry none.
const DEFAULT_PARTNERSHIP: &str = "Married";

// =============================================================================
// RECORD ROWS
// =============================================================================

/// One person row.
///
/// `name` is presentation-only and never reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Stable person identifier.
    pub id: u64,
    /// Display name, absent for unnamed persons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Date of birth (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub born: Option<NaiveDate>,
    /// Date of death (YYYY-MM-DD).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub died: Option<NaiveDate>,
    /// Deceased flag; a death date alone does not imply it.
    #[serde(default)]
    pub deceased: bool,
}

/// One parent-child row, directed parent to child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentChildRecord {
    /// Parent person id.
    pub parent: u64,
    /// Child person id.
    pub child: u64,
    /// Free-form relationship label ("Biological", "Adopted", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<String>,
}

/// One partnership row, unordered pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnershipRecord {
    /// First person id.
    pub a: u64,
    /// Second person id.
    pub b: u64,
    /// Free-form partnership label ("Married", "Civil Union", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// A complete family record file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyFile {
    /// All person rows.
    #[serde(default)]
    pub persons: Vec<PersonRecord>,
    /// All parent-child rows.
    #[serde(default)]
    pub parent_child: Vec<ParentChildRecord>,
    /// All partnership rows.
    #[serde(default)]
    pub partnerships: Vec<PartnershipRecord>,
}

impl FamilyFile {
    /// Build an engine snapshot from the record rows.
    ///
    /// Rows referencing unknown persons surface as
    /// [`KinshipError::DanglingReference`] from the snapshot build.
    pub fn build_snapshot(&self) -> Result<GraphSnapshot, KinshipError> {
        let persons = self
            .persons
            .iter()
            .map(|row| Person::with_dates(PersonId(row.id), row.born, row.died, row.deceased))
            .collect();

        let parent_child = self
            .parent_child
            .iter()
            .map(|row| {
                ParentChildEdge::new(
                    PersonId(row.parent),
                    PersonId(row.child),
                    RelationshipType::new(
                        row.relationship.as_deref().unwrap_or(DEFAULT_RELATIONSHIP),
                    ),
                )
            })
            .collect();

        let partnerships = self
            .partnerships
            .iter()
            .map(|row| {
                PartnershipEdge::new(
                    PersonId(row.a),
                    PersonId(row.b),
                    PartnershipType::new(row.kind.as_deref().unwrap_or(DEFAULT_PARTNERSHIP)),
                )
            })
            .collect();

        GraphSnapshot::build(persons, parent_child, partnerships)
    }

    /// Display names keyed by person id. Unnamed persons are absent.
    #[must_use]
    pub fn display_names(&self) -> BTreeMap<PersonId, String> {
        self.persons
            .iter()
            .filter_map(|row| row.name.clone().map(|name| (PersonId(row.id), name)))
            .collect()
    }
}

// =============================================================================
// LOADING
// =============================================================================

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), KinshipError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| KinshipError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(KinshipError::SerializationError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Validate a record file path.
///
/// Canonicalizes the path to resolve symlinks and "..", ensures it exists,
/// and ensures it is a regular file rather than a directory.
fn validate_file_path(path: &Path) -> Result<PathBuf, KinshipError> {
    let canonical = path.canonicalize().map_err(|e| {
        KinshipError::IoError(format!("Invalid record file '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(KinshipError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Load a family record file from disk.
pub fn load(path: &Path) -> Result<FamilyFile, KinshipError> {
    let canonical = validate_file_path(path)?;
    validate_file_size(&canonical, MAX_RECORD_FILE_SIZE)?;

    let content = std::fs::read_to_string(&canonical)
        .map_err(|e| KinshipError::IoError(format!("Cannot read '{}': {}", path.display(), e)))?;

    let family: FamilyFile = serde_json::from_str(&content).map_err(|e| {
        KinshipError::SerializationError(format!(
            "Invalid record file '{}': {}",
            path.display(),
            e
        ))
    })?;

    tracing::info!(
        "Loaded {} persons, {} parent-child rows, {} partnerships from {:?}",
        family.persons.len(),
        family.parent_child.len(),
        family.partnerships.len(),
        path
    );

    Ok(family)
}

// =============================================================================
// TESTS
// =============================================================================
