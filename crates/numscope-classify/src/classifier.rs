//! Classification facade over the check registry.

use crate::error::{ClassifyError, Result};
use crate::registry::CheckRegistry;
use numscope_core::CheckId;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The outcome of one check against one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Id of the evaluated check
    pub id: CheckId,
    /// Display label of the evaluated check
    pub label: String,
    /// Whether the check matched
    pub matched: bool,
}

/// The result of classifying a single value.
///
/// Outcomes are ordered by check registration order, so repeated calls
/// with identical arguments produce identical, identically-ordered
/// results. Everything here is value-typed and transient; nothing refers
/// back into the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    value: i64,
    outcomes: Vec<CheckOutcome>,
}

impl Classification {
    /// The classified value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.value
    }

    /// All evaluated outcomes, in registration order.
    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Labels of the matched checks, in registration order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.matched)
            .map(|outcome| outcome.label.as_str())
            .collect()
    }

    /// Ids of the matched checks, in registration order.
    #[must_use]
    pub fn matched_ids(&self) -> Vec<CheckId> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.matched)
            .map(|outcome| outcome.id.clone())
            .collect()
    }

    /// Whether no check matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.iter().all(|outcome| !outcome.matched)
    }
}

/// Runs registered checks against input values.
///
/// The facade is the single composition point of the classifier: it owns
/// no check logic itself and simply evaluates registry definitions in
/// registration order.
#[derive(Clone)]
pub struct Classifier {
    registry: CheckRegistry,
}

impl Classifier {
    /// Create a classifier over an existing registry.
    #[must_use]
    pub fn new(registry: CheckRegistry) -> Self {
        Self { registry }
    }

    /// Create a classifier with the builtin checks registered.
    #[must_use]
    pub fn with_builtin_checks() -> Self {
        Self::new(CheckRegistry::builtin())
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &CheckRegistry {
        &self.registry
    }

    /// Run every registered check against `value`.
    ///
    /// # Errors
    /// Propagates the first predicate error encountered.
    pub fn classify(&self, value: i64) -> Result<Classification> {
        self.run(value, None)
    }

    /// Run only the named checks against `value`.
    ///
    /// Checks still evaluate in registration order, never in the order of
    /// `enabled`; checks not named are never evaluated.
    ///
    /// # Errors
    /// Returns [`ClassifyError::UnknownCheck`] if any name in `enabled`
    /// has no registered definition, or the first predicate error
    /// encountered.
    pub fn classify_with(&self, value: i64, enabled: &[CheckId]) -> Result<Classification> {
        for check_id in enabled {
            if !self.registry.contains(check_id) {
                return Err(ClassifyError::UnknownCheck {
                    check_id: check_id.to_string(),
                });
            }
        }

        self.run(value, Some(enabled))
    }

    fn run(&self, value: i64, enabled: Option<&[CheckId]>) -> Result<Classification> {
        let mut outcomes = Vec::new();

        for definition in self.registry.get_all() {
            if let Some(enabled) = enabled {
                if !enabled.contains(definition.id()) {
                    continue;
                }
            }

            let matched = definition.evaluate(value)?;
            outcomes.push(CheckOutcome {
                id: definition.id().clone(),
                label: definition.label().to_string(),
                matched,
            });
        }

        let classification = Classification { value, outcomes };
        debug!(
            value,
            matches = classification.labels().len(),
            "classified value"
        );

        Ok(classification)
    }
}
