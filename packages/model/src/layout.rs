//! # Layout
//!
//! The ordered block sequence forming one page blueprint.
//!
//! Order is rendering order. Block ids are unique within a layout; the
//! editing engine maintains that invariant, this type only assumes it for
//! id-based lookups. A layout with zero blocks is a valid empty canvas.

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// Ordered sequence of blocks. Serializes as a bare array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    blocks: Vec<Block>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|b| b.id.as_str())
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.blocks.iter().any(|b| b.id == id)
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Insert at `index`, clamped to the end of the sequence.
    pub fn insert(&mut self, index: usize, block: Block) {
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<Block> {
        let index = self.position_of(id)?;
        Some(self.blocks.remove(index))
    }

    /// Single-element move: the block at `from` is removed first, then
    /// reinserted at the literal `to` against the shortened sequence.
    /// Both indices are checked against the pre-removal length; anything
    /// out of range leaves the layout untouched.
    pub fn move_block(&mut self, from: usize, to: usize) -> bool {
        if from >= self.blocks.len() || to >= self.blocks.len() {
            return false;
        }
        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_abc() -> Layout {
        Layout::from_blocks(vec![
            Block::new("a", "A"),
            Block::new("b", "B"),
            Block::new("c", "C"),
        ])
    }

    fn order(layout: &Layout) -> Vec<&str> {
        layout.ids().collect()
    }

    #[test]
    fn test_empty_layout_is_valid() {
        let layout = Layout::new();
        assert!(layout.is_empty());
        assert_eq!(layout.len(), 0);
        assert!(!layout.contains_id("a"));
    }

    #[test]
    fn test_move_forward_lands_past_the_gap() {
        // Remove-then-insert: moving "a" to index 2 puts it at the end
        let mut layout = layout_abc();
        assert!(layout.move_block(0, 2));
        assert_eq!(order(&layout), ["b", "c", "a"]);
    }

    #[test]
    fn test_move_backward() {
        let mut layout = layout_abc();
        assert!(layout.move_block(2, 0));
        assert_eq!(order(&layout), ["c", "a", "b"]);
    }

    #[test]
    fn test_move_out_of_bounds_is_a_noop() {
        let mut layout = layout_abc();
        assert!(!layout.move_block(0, 3));
        assert!(!layout.move_block(3, 0));
        assert_eq!(order(&layout), ["a", "b", "c"]);
    }

    #[test]
    fn test_remove_by_id_returns_the_block() {
        let mut layout = layout_abc();
        let removed = layout.remove_by_id("b").unwrap();
        assert_eq!(removed.title, "B");
        assert_eq!(order(&layout), ["a", "c"]);
        assert!(layout.remove_by_id("b").is_none());
    }

    #[test]
    fn test_insert_clamps_to_end() {
        let mut layout = layout_abc();
        layout.insert(99, Block::new("d", "D"));
        assert_eq!(order(&layout), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let json = serde_json::to_string(&layout_abc()).unwrap();
        assert!(json.starts_with('['));

        let back: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layout_abc());
    }
}
