//! In-memory check registry with a fixed registration order.

use crate::checks;
use crate::error::{ClassifyError, Result};
use numscope_core::CheckId;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Signature shared by every check predicate.
///
/// Predicates are pure functions of the input value; they hold no state
/// and perform no I/O.
pub type CheckFn = fn(i64) -> Result<bool>;

/// A single registered check: its id, display label, and predicate.
///
/// Definitions are independent of one another; adding a new one never
/// requires modifying an existing check.
#[derive(Debug, Clone)]
pub struct CheckDefinition {
    id: CheckId,
    label: String,
    predicate: CheckFn,
}

impl CheckDefinition {
    /// Create a new check definition.
    #[must_use]
    pub fn new(id: CheckId, label: impl Into<String>, predicate: CheckFn) -> Self {
        Self {
            id,
            label: label.into(),
            predicate,
        }
    }

    /// The check's identifier.
    #[must_use]
    pub fn id(&self) -> &CheckId {
        &self.id
    }

    /// The label reported when the check matches.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Evaluate the predicate against a value.
    pub fn evaluate(&self, value: i64) -> Result<bool> {
        (self.predicate)(value)
    }
}

/// Ordered, in-memory registry of check definitions.
///
/// Definitions are kept in registration order because that order is the
/// output-order contract of classification: matched labels are always
/// reported in the order their checks were registered, never in an order
/// derived from the input or from caller configuration.
#[derive(Clone)]
pub struct CheckRegistry {
    /// Registered definitions, in registration order
    definitions: Arc<RwLock<Vec<CheckDefinition>>>,
}

impl CheckRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            definitions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a registry populated with the builtin checks in their fixed
    /// order: armstrong, happy, palindrome, perfect, prime.
    #[must_use]
    pub fn builtin() -> Self {
        let registry = Self::new();

        {
            let mut cache = registry
                .definitions
                .write()
                .expect("acquire write lock on definitions");
            cache.extend(checks::builtin_definitions());
            info!(count = cache.len(), "registered builtin checks");
        }

        registry
    }

    /// Add or update a check definition.
    ///
    /// A definition with a new id is appended, becoming the last check in
    /// evaluation order. Re-registering an existing id replaces the old
    /// definition in place, preserving its position.
    pub fn insert(&self, definition: CheckDefinition) {
        let mut cache = self
            .definitions
            .write()
            .expect("acquire write lock on definitions");

        let check_id = definition.id().clone();
        match cache.iter_mut().find(|def| def.id() == &check_id) {
            Some(existing) => *existing = definition,
            None => cache.push(definition),
        }

        debug!(check_id = %check_id, "inserted check definition");
    }

    /// Remove a check definition from the registry.
    ///
    /// Returns `true` if the check was present, `false` otherwise.
    pub fn remove(&self, check_id: &CheckId) -> bool {
        let mut cache = self
            .definitions
            .write()
            .expect("acquire write lock on definitions");

        let before = cache.len();
        cache.retain(|def| def.id() != check_id);
        let removed = cache.len() < before;

        if removed {
            debug!(check_id = %check_id, "removed check definition");
        }

        removed
    }

    /// Get a check definition by ID.
    ///
    /// # Errors
    /// Returns error if the check is not registered.
    pub fn get(&self, check_id: &CheckId) -> Result<CheckDefinition> {
        let cache = self
            .definitions
            .read()
            .expect("acquire read lock on definitions");

        cache
            .iter()
            .find(|def| def.id() == check_id)
            .cloned()
            .ok_or_else(|| ClassifyError::UnknownCheck {
                check_id: check_id.to_string(),
            })
    }

    /// Get all check definitions, in registration order.
    #[must_use]
    pub fn get_all(&self) -> Vec<CheckDefinition> {
        let cache = self
            .definitions
            .read()
            .expect("acquire read lock on definitions");

        cache.clone()
    }

    /// Get all check IDs, in registration order.
    #[must_use]
    pub fn ids(&self) -> Vec<CheckId> {
        let cache = self
            .definitions
            .read()
            .expect("acquire read lock on definitions");

        cache.iter().map(|def| def.id().clone()).collect()
    }

    /// Check if a check is registered.
    #[must_use]
    pub fn contains(&self, check_id: &CheckId) -> bool {
        let cache = self
            .definitions
            .read()
            .expect("acquire read lock on definitions");

        cache.iter().any(|def| def.id() == check_id)
    }

    /// Get the total number of registered checks.
    #[must_use]
    pub fn count(&self) -> usize {
        let cache = self
            .definitions
            .read()
            .expect("acquire read lock on definitions");

        cache.len()
    }
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self::new()
    }
}
