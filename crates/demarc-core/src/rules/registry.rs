//! Registry of boundary checkers.

use std::sync::Arc;

use super::client_access::ClientAccessChecker;
use super::cross_reference::CrossReferenceChecker;
use super::sql_tables::SqlTableChecker;
use super::Checker;

/// Registry of checkers.
///
/// Automatically registers all built-in checkers on creation.
pub struct CheckerRegistry {
    checkers: Vec<Arc<dyn Checker>>,
}

impl CheckerRegistry {
    /// Create a new registry with all built-in checkers.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(Arc::new(ClientAccessChecker::new()));
        registry.register(Arc::new(SqlTableChecker::new()));
        registry.register(Arc::new(CrossReferenceChecker::new()));

        registry
    }

    /// Create a registry with no checkers.
    pub fn empty() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    /// Register a checker. A checker with the same name is replaced.
    pub fn register(&mut self, checker: Arc<dyn Checker>) {
        self.checkers.retain(|c| c.name() != checker.name());
        self.checkers.push(checker);
    }

    /// Checkers that apply to the given path, in registration order.
    pub fn checkers_for(&self, path: &str) -> Vec<Arc<dyn Checker>> {
        self.checkers
            .iter()
            .filter(|c| c.can_check(path))
            .cloned()
            .collect()
    }

    /// Names of all registered checkers.
    pub fn names(&self) -> Vec<&'static str> {
        self.checkers.iter().map(|c| c.name()).collect()
    }
}

impl Default for CheckerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
