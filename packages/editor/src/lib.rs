//! # Broadsheet Editor
//!
//! Headless editing engine for page blueprints.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ canvas / drag-drop UI (external)            │
//! └─────────────────────────────────────────────┘
//!                     ↓ mutations
//! ┌─────────────────────────────────────────────┐
//! │ editor: BlueprintEditor                     │
//! │  - Block lifecycle (add/remove/duplicate)   │
//! │  - Order-preserving reorder                 │
//! │  - Style and kind updates                   │
//! │  - Snapshot undo/redo (HistoryStack)        │
//! │  - Selection cursor                         │
//! └─────────────────────────────────────────────┘
//!                     ↓ ordered blocks
//! ┌─────────────────────────────────────────────┐
//! │ renderer / persistence gateway (external)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **The layout is the document**: undo snapshots are full copies of the
//!    block sequence, not diffs
//! 2. **Silent tolerance**: stale ids and indices arriving from the UI are
//!    no-ops, never errors
//! 3. **Structural mutations record history**; style and kind edits do not
//!    under the default [`HistoryPolicy`]
//! 4. **No I/O**: saving and publishing are the session layer's concern
//!
//! ## Usage
//!
//! ```rust,ignore
//! use broadsheet_editor::BlueprintEditor;
//!
//! let mut editor = BlueprintEditor::new();
//! editor.load_or_default(None);
//!
//! let id = editor.add_block();
//! editor.reorder(2, 0);
//! editor.undo();
//! ```

mod engine;
mod history;
mod id;
mod mutations;

pub use engine::BlueprintEditor;
pub use history::{HistoryPolicy, HistoryStack};
pub use id::BlockIdGenerator;
pub use mutations::Mutation;

// Re-export the data model for convenience
pub use broadsheet_model::{Block, BlockKind, Layout, StylePatch, StyleSet};
