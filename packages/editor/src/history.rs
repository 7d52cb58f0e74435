//! # Undo/Redo Stacks
//!
//! Linear history over full layout snapshots.
//!
//! ## Design
//!
//! - Every structural mutation pushes the pre-mutation layout onto `past`
//!   and clears `future` entirely: a new edit discards the redo branch
//! - Undo pops `past` and parks the current layout on `future`
//! - Redo is symmetric
//! - Snapshots are full copies of the block sequence, not diffs
//! - Depth is capped (default 100 levels, 0 = unbounded); once the cap is
//!   hit the oldest snapshot is dropped, which shrinks how far back undo
//!   can reach
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = HistoryStack::new();
//!
//! history.record(&layout);        // before a structural mutation
//! // ... mutate layout ...
//!
//! if let Some(previous) = history.undo(&layout) {
//!     layout = previous;
//! }
//! ```

use broadsheet_model::Layout;

/// Which mutations push an undo snapshot.
///
/// `StructuralOnly` keeps continuous style edits (a dragged color picker)
/// from flooding the stack, at the cost of style edits not being undoable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryPolicy {
    #[default]
    StructuralOnly,
    All,
}

/// Past/future snapshot stacks for one editor.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    /// Older snapshots, oldest first
    past: Vec<Layout>,

    /// Redo candidates, most recently undone last
    future: Vec<Layout>,

    /// Maximum number of undo levels (0 = unlimited)
    max_depth: usize,
}

impl HistoryStack {
    /// A stack with the default depth cap (100 levels).
    pub fn new() -> Self {
        Self::with_max_depth(100)
    }

    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            past: Vec::new(),
            future: Vec::new(),
            max_depth,
        }
    }

    /// Snapshot `current` before a structural mutation. Clears the redo
    /// branch; drops the oldest snapshot once the depth cap is exceeded.
    pub fn record(&mut self, current: &Layout) {
        self.past.push(current.clone());

        if self.max_depth > 0 && self.past.len() > self.max_depth {
            self.past.remove(0);
        }

        self.future.clear();
    }

    /// Step back: returns the most recent snapshot as the new current
    /// layout, parking `current` for redo. `None` when there is nothing to
    /// undo.
    pub fn undo(&mut self, current: &Layout) -> Option<Layout> {
        let previous = self.past.pop()?;
        self.future.push(current.clone());
        Some(previous)
    }

    /// Step forward again. `None` when there is nothing to redo.
    pub fn redo(&mut self, current: &Layout) -> Option<Layout> {
        let next = self.future.pop()?;
        self.past.push(current.clone());
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.past.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.future.len()
    }

    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for HistoryStack {
    fn default() -> Self {
        Self::new()
    }
}
