//! # Blueprint Editor Engine
//!
//! Owns the layout being edited, the selection cursor, and the undo/redo
//! stacks, and exposes every operation the canvas can issue.
//!
//! All operations are synchronous and atomic, and none of them touch the
//! persistence layer. Stale ids and indices arriving from the UI are
//! tolerated as no-ops rather than raised as errors; the return value only
//! says whether the layout changed.

use broadsheet_model::{Block, BlockKind, Layout, StylePatch};

use crate::history::{HistoryPolicy, HistoryStack};
use crate::id::BlockIdGenerator;
use crate::mutations::Mutation;

/// The in-memory editing state for one blueprint.
#[derive(Debug, Clone)]
pub struct BlueprintEditor {
    layout: Layout,
    selected: Option<String>,
    history: HistoryStack,
    policy: HistoryPolicy,
    ids: BlockIdGenerator,
}

impl BlueprintEditor {
    /// An editor on an empty canvas, recording structural mutations only.
    pub fn new() -> Self {
        Self::with_policy(HistoryPolicy::default())
    }

    pub fn with_policy(policy: HistoryPolicy) -> Self {
        Self {
            layout: Layout::new(),
            selected: None,
            history: HistoryStack::new(),
            policy,
            ids: BlockIdGenerator::new(),
        }
    }

    /// The two-block canvas used when the persistence collaborator has no
    /// active layout to hand back.
    pub fn default_layout() -> Layout {
        Layout::from_blocks(vec![
            Block::new("block-1", "Top Story Placeholder"),
            Block::new("block-2", "Breaking News Placeholder"),
        ])
    }

    /// Replace the whole document. This is initialization, not an edit:
    /// both stacks and the selection are cleared and no snapshot is taken.
    pub fn load(&mut self, layout: Layout) {
        self.ids.seed_above(&layout);
        self.layout = layout;
        self.selected = None;
        self.history.clear();
    }

    /// Initialize from the persistence collaborator's answer: the stored
    /// layout if one exists, the placeholder canvas otherwise.
    pub fn load_or_default(&mut self, stored: Option<Layout>) {
        self.load(stored.unwrap_or_else(Self::default_layout));
    }

    /// Append a new block and select it. Returns the new block's id.
    pub fn add_block(&mut self) -> String {
        let id = self.fresh_id();
        let title = format!("New Article Box {}", self.layout.len() + 1);

        self.history.record(&self.layout);
        self.layout.push(Block::new(id.clone(), title));
        self.selected = Some(id.clone());
        id
    }

    /// Remove a block. Unknown ids no-op; removing the selected block
    /// clears the selection.
    pub fn remove_block(&mut self, id: &str) -> bool {
        if !self.layout.contains_id(id) {
            return false;
        }

        self.history.record(&self.layout);
        self.layout.remove_by_id(id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        true
    }

    /// Insert a copy immediately after the source block: fresh id, verbatim
    /// title and kind, deep-copied styles. Returns the copy's id, or `None`
    /// for an unknown source.
    pub fn duplicate_block(&mut self, id: &str) -> Option<String> {
        let index = self.layout.position_of(id)?;
        let new_id = self.fresh_id();
        let copy = self.layout.blocks()[index].copy_with_id(new_id.clone());

        self.history.record(&self.layout);
        self.layout.insert(index + 1, copy);
        Some(new_id)
    }

    /// Move the block at `from_index` to `to_index`. Both indices are
    /// validated against the current length before anything is removed;
    /// out-of-range indices no-op. The move removes first, then inserts at
    /// the literal `to_index` in the shortened sequence.
    pub fn reorder(&mut self, from_index: usize, to_index: usize) -> bool {
        let len = self.layout.len();
        if from_index >= len || to_index >= len {
            return false;
        }

        self.history.record(&self.layout);
        self.layout.move_block(from_index, to_index)
    }

    /// Shallow-merge style values into a block. Unknown ids no-op. Records
    /// a snapshot only under [`HistoryPolicy::All`].
    pub fn update_styles(&mut self, id: &str, patch: StylePatch) -> bool {
        if !self.layout.contains_id(id) {
            return false;
        }

        self.record_non_structural();
        if let Some(block) = self.layout.get_mut(id) {
            block.styles.merge(patch);
        }
        true
    }

    /// Change a block's semantic kind. Same history policy as style edits.
    pub fn update_kind(&mut self, id: &str, kind: BlockKind) -> bool {
        if !self.layout.contains_id(id) {
            return false;
        }

        self.record_non_structural();
        if let Some(block) = self.layout.get_mut(id) {
            block.kind = kind;
        }
        true
    }

    /// Move the selection cursor. Pure cursor write: not validated, never
    /// recorded in history.
    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    /// Step back one structural edit. The selection is left where it was;
    /// a cursor dangling into a restored layout reads as no selection
    /// through [`BlueprintEditor::selected_block`].
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&self.layout) {
            Some(previous) => {
                self.layout = previous;
                true
            }
            None => false,
        }
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(&self.layout) {
            Some(next) => {
                self.layout = next;
                true
            }
            None => false,
        }
    }

    /// Apply one serialized UI mutation. Returns whether editor state
    /// changed.
    pub fn apply(&mut self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::AddBlock => {
                self.add_block();
                true
            }
            Mutation::RemoveBlock { id } => self.remove_block(&id),
            Mutation::DuplicateBlock { id } => self.duplicate_block(&id).is_some(),
            Mutation::Reorder {
                from_index,
                to_index,
            } => self.reorder(from_index, to_index),
            Mutation::UpdateStyles { id, styles } => self.update_styles(&id, styles),
            Mutation::UpdateKind { id, kind } => self.update_kind(&id, kind),
            Mutation::Select { id } => {
                self.select(id.as_deref());
                true
            }
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected block, if the cursor points at a block that still
    /// exists. After undo/redo the cursor can dangle; that reads as no
    /// selection here.
    pub fn selected_block(&self) -> Option<&Block> {
        self.layout.get(self.selected.as_deref()?)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn policy(&self) -> HistoryPolicy {
        self.policy
    }

    /// An id no block in the current layout carries. The generator is
    /// monotonic, and any candidate already present (loaded layouts can
    /// contain arbitrary ids) is skipped.
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id();
            if !self.layout.contains_id(&id) {
                return id;
            }
        }
    }

    fn record_non_structural(&mut self) {
        if self.policy == HistoryPolicy::All {
            self.history.record(&self.layout);
        }
    }
}

impl Default for BlueprintEditor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> BlueprintEditor {
        let mut editor = BlueprintEditor::new();
        editor.load_or_default(None);
        editor
    }

    #[test]
    fn test_default_canvas_blocks() {
        let editor = seeded();
        let titles: Vec<&str> = editor.layout().iter().map(|b| b.title.as_str()).collect();

        assert_eq!(
            titles,
            ["Top Story Placeholder", "Breaking News Placeholder"]
        );
        assert!(!editor.can_undo());
        assert!(!editor.can_redo());
        assert!(editor.selected_id().is_none());
    }

    #[test]
    fn test_add_block_titles_count_upward() {
        let mut editor = seeded();

        editor.add_block();
        editor.add_block();

        let titles: Vec<&str> = editor.layout().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles[2], "New Article Box 3");
        assert_eq!(titles[3], "New Article Box 4");
    }

    #[test]
    fn test_add_block_selects_the_new_block() {
        let mut editor = seeded();
        let id = editor.add_block();

        assert_eq!(editor.selected_id(), Some(id.as_str()));
        assert_eq!(editor.selected_block().unwrap().id, id);
    }

    #[test]
    fn test_fresh_ids_never_collide_with_loaded_layout() {
        let mut editor = BlueprintEditor::new();
        editor.load(Layout::from_blocks(vec![
            Block::new("block-1", "A"),
            Block::new("block-2", "B"),
        ]));

        let id = editor.add_block();
        assert_eq!(id, "block-3");
        assert_eq!(editor.layout().ids().filter(|i| *i == "block-3").count(), 1);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let mut editor = seeded();
        let before = editor.layout().clone();

        assert!(!editor.remove_block("block-404"));
        assert_eq!(editor.layout(), &before);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_remove_clears_selection_only_for_the_removed_block() {
        let mut editor = seeded();
        editor.select(Some("block-1"));

        assert!(editor.remove_block("block-2"));
        assert_eq!(editor.selected_id(), Some("block-1"));

        assert!(editor.remove_block("block-1"));
        assert!(editor.selected_id().is_none());
    }

    #[test]
    fn test_duplicate_inserts_after_source() {
        let mut editor = seeded();
        editor.update_kind("block-1", BlockKind::TopStories);

        let copy_id = editor.duplicate_block("block-1").unwrap();

        let ids: Vec<&str> = editor.layout().ids().collect();
        assert_eq!(ids, ["block-1", copy_id.as_str(), "block-2"]);

        let copy = editor.layout().get(&copy_id).unwrap();
        let source = editor.layout().get("block-1").unwrap();
        assert_eq!(copy.title, source.title);
        assert_eq!(copy.kind, source.kind);
        assert_eq!(copy.styles, source.styles);
        assert_ne!(copy.id, source.id);
    }

    #[test]
    fn test_duplicate_unknown_id_is_a_noop() {
        let mut editor = seeded();
        assert!(editor.duplicate_block("block-404").is_none());
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_reorder_out_of_bounds_is_a_noop() {
        let mut editor = seeded();
        let before = editor.layout().clone();

        assert!(!editor.reorder(0, 2));
        assert!(!editor.reorder(2, 0));
        assert_eq!(editor.layout(), &before);
        assert!(!editor.can_undo());
    }

    #[test]
    fn test_style_update_does_not_touch_history() {
        let mut editor = seeded();

        assert!(editor.update_styles("block-1", StylePatch::background_color("#fff")));
        assert!(editor.update_kind("block-1", BlockKind::World));

        assert_eq!(editor.history().undo_levels(), 0);
        assert_eq!(
            editor.layout().get("block-1").unwrap().styles.background_color,
            "#fff"
        );
    }

    #[test]
    fn test_all_policy_records_style_edits() {
        let mut editor = BlueprintEditor::with_policy(HistoryPolicy::All);
        editor.load_or_default(None);

        editor.update_styles("block-1", StylePatch::background_color("#fff"));
        assert_eq!(editor.history().undo_levels(), 1);

        assert!(editor.undo());
        assert_eq!(
            editor.layout().get("block-1").unwrap().styles.background_color,
            "#1e293b"
        );
    }

    #[test]
    fn test_selection_survives_undo_but_dangles_safely() {
        let mut editor = seeded();
        let id = editor.add_block();

        assert_eq!(editor.selected_id(), Some(id.as_str()));
        assert!(editor.undo());

        // The cursor still holds the removed block's id...
        assert_eq!(editor.selected_id(), Some(id.as_str()));
        // ...but reads as no selection
        assert!(editor.selected_block().is_none());
    }

    #[test]
    fn test_load_clears_history_and_selection() {
        let mut editor = seeded();
        editor.add_block();
        editor.select(Some("block-1"));

        editor.load(Layout::new());

        assert!(editor.layout().is_empty());
        assert!(!editor.can_undo());
        assert!(!editor.can_redo());
        assert!(editor.selected_id().is_none());
    }

    #[test]
    fn test_apply_dispatches_and_reports_noops() {
        let mut editor = seeded();

        assert!(editor.apply(Mutation::AddBlock));
        assert!(!editor.apply(Mutation::RemoveBlock {
            id: "block-404".to_string()
        }));
        assert!(!editor.apply(Mutation::Reorder {
            from_index: 9,
            to_index: 0
        }));
        assert!(editor.apply(Mutation::Select { id: None }));
        assert!(editor.selected_id().is_none());
    }
}
