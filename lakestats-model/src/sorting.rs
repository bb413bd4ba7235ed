//! The sort-key write contract between the reorder logic and the store.

use serde::{Deserialize, Serialize};

/// One explicit sort-key write for the persistence layer.
///
/// Reorder operations emit a batch of these; the store must apply a batch
/// atomically (all-or-nothing). A partial application could leave
/// duplicate keys whose display order then rests entirely on the name
/// tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortAssignment {
    pub id: String,
    pub sort_order: i64,
}
