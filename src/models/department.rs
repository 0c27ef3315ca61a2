//! Department model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a department employees belong to.
///
/// Department names are unique across the system, and a department is
/// immutable once created (no update or delete operation exists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: Uuid,
    /// The department's unique display name.
    pub name: String,
}
