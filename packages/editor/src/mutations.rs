//! # Blueprint Mutations
//!
//! The operation vocabulary the UI layer speaks to the engine.
//!
//! ## Mutation semantics
//!
//! ### Structural (recorded in history)
//! - `AddBlock` appends a freshly minted block and selects it
//! - `RemoveBlock` / `DuplicateBlock` target a block by id; stale ids no-op
//! - `Reorder` is a single-element move, not a swap
//!
//! ### Non-structural
//! - `UpdateStyles` / `UpdateKind` merge into the target block without a
//!   history entry under the default policy
//! - `Select` is a cursor write and is never recorded

use broadsheet_model::{BlockKind, StylePatch};
use serde::{Deserialize, Serialize};

/// One editing operation against the current layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Append a new block with the default title and style record
    AddBlock,

    /// Remove a block by id
    RemoveBlock { id: String },

    /// Insert a copy immediately after the source block
    DuplicateBlock { id: String },

    /// Move the block at `from_index` to `to_index`. Both are positions in
    /// the current layout; the move removes first, then inserts.
    Reorder { from_index: usize, to_index: usize },

    /// Shallow-merge style values into a block
    UpdateStyles { id: String, styles: StylePatch },

    /// Change a block's semantic kind
    UpdateKind { id: String, kind: BlockKind },

    /// Move the selection cursor (`None` clears it)
    Select { id: Option<String> },
}

impl Mutation {
    /// Whether this operation takes an undo snapshot before applying.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Mutation::AddBlock
                | Mutation::RemoveBlock { .. }
                | Mutation::DuplicateBlock { .. }
                | Mutation::Reorder { .. }
        )
    }

    /// Stable label for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddBlock => "add_block",
            Mutation::RemoveBlock { .. } => "remove_block",
            Mutation::DuplicateBlock { .. } => "duplicate_block",
            Mutation::Reorder { .. } => "reorder",
            Mutation::UpdateStyles { .. } => "update_styles",
            Mutation::UpdateKind { .. } => "update_kind",
            Mutation::Select { .. } => "select",
        }
    }
}
