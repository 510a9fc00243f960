//! Frontend Models
//!
//! The todo record and its identifier.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque todo identifier, generated once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Fresh random identifier (UUID v4)
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Todo data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub checked: bool,
}

impl Todo {
    /// Create a new unchecked todo with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TodoId::new(),
            name: name.into(),
            checked: false,
        }
    }
}

/// Todos shown on first load
pub const SEED_TODOS: &[&str] = &["Visit the mall 🛍", "Go water plant ☘️"];
