//! # Persistence Gateway
//!
//! Contract with the storage collaborator that keeps blueprints across
//! sessions: load the active layout, save named drafts, publish, and read
//! the server-side audit trail.
//!
//! The audit trail is a log of save/publish actions. It is a different
//! thing from the editor's in-memory undo stacks, and the two never feed
//! each other.

mod memory;

pub use memory::MemoryGateway;

use async_trait::async_trait;
use broadsheet_model::Layout;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A layout as the storage side knows it: a name and the block sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLayout {
    pub name: String,
    pub structure: Layout,
}

/// What was done to a stored layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Save,
    Publish,
}

/// One entry in a layout's server-side audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub action: AuditAction,
    pub timestamp: DateTime<Utc>,
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("no stored layout with id {0}")]
    NotFound(String),
}

/// Storage collaborator consumed by the editor session.
///
/// Implementations carry their own connection and auth context; nothing
/// here is ambient or global.
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// The most recently activated layout, or `None` when the storage side
    /// has nothing yet.
    async fn load_active(&self) -> Result<Option<SavedLayout>, GatewayError>;

    /// Persist the layout under `name` and return the stored layout's id.
    /// Appends a `save` record to that layout's audit trail.
    async fn save_draft(&self, name: &str, layout: &Layout) -> Result<String, GatewayError>;

    /// Promote a previously saved layout to active. Appends a `publish`
    /// record to its audit trail.
    async fn publish(&self, layout_id: &str) -> Result<(), GatewayError>;

    /// The audit trail for one layout, oldest first. Display order is the
    /// caller's concern.
    async fn fetch_audit_history(&self, layout_id: &str)
        -> Result<Vec<AuditRecord>, GatewayError>;
}
