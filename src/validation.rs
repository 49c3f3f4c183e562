//! Snapshot integrity checks.
//!
//! Checks structural integrity of a loaded snapshot before planning.
//! Detects:
//! - Duplicate IDs across each collection
//! - Characters with no linked actor
//! - Characters whose linked actor doesn't exist
//! - Scenes referencing unknown characters
//! - Availabilities referencing unknown sessions
//!
//! Findings are diagnostics, not failures: the engine fails closed on
//! referential gaps (the affected scene is simply never rehearsable), so
//! callers log findings and proceed.

use std::collections::HashSet;

use crate::models::{Actor, Character, Scene, Session};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities in one collection share the same ID.
    DuplicateId,
    /// A character has no linked actor.
    UnassignedCharacter,
    /// A character links an actor that doesn't exist.
    UnknownActorReference,
    /// A scene lists a character that doesn't exist.
    UnknownCharacterReference,
    /// An actor's availability names a session that doesn't exist.
    UnknownSessionReference,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a loaded snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected finding.
pub fn validate_snapshot(
    sessions: &[Session],
    scenes: &[Scene],
    characters: &[Character],
    actors: &[Actor],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut actor_ids = HashSet::new();
    for a in actors {
        if !actor_ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate actor ID: {}", a.id),
            ));
        }
    }

    let mut character_ids = HashSet::new();
    for c in characters {
        if !character_ids.insert(c.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate character ID: {}", c.id),
            ));
        }
    }

    let mut scene_ids = HashSet::new();
    for s in scenes {
        if !scene_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate scene ID: {}", s.id),
            ));
        }
    }

    let mut session_ids = HashSet::new();
    for s in sessions {
        if !session_ids.insert(s.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate session ID: {}", s.id),
            ));
        }
    }

    // Character → actor links
    for c in characters {
        match c.actor_id.as_deref() {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::UnassignedCharacter,
                format!("Character '{}' has no linked actor", c.id),
            )),
            Some(actor_id) if !actor_ids.contains(actor_id) => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownActorReference,
                    format!("Character '{}' references unknown actor '{}'", c.id, actor_id),
                ));
            }
            Some(_) => {}
        }
    }

    // Scene → character links
    for s in scenes {
        for character_id in &s.characters {
            if !character_ids.contains(character_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownCharacterReference,
                    format!(
                        "Scene '{}' references unknown character '{}'",
                        s.id, character_id
                    ),
                ));
            }
        }
    }

    // Actor availability → session links
    for a in actors {
        for session_id in &a.availabilities {
            if !session_ids.contains(session_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownSessionReference,
                    format!(
                        "Actor '{}' is available for unknown session '{}'",
                        a.id, session_id
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
