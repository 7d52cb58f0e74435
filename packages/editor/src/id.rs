//! Block id generation.
//!
//! Ids are `block-N` with a monotonic counter. Deriving ids from wall-clock
//! time collides under rapid automated mutation, so the counter is the only
//! source; loading a layout reseeds it past every `block-N` id already
//! present.

use broadsheet_model::Layout;

#[derive(Debug, Clone)]
pub struct BlockIdGenerator {
    next: u64,
}

impl BlockIdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Mint the next id.
    pub fn next_id(&mut self) -> String {
        let id = format!("block-{}", self.next);
        self.next += 1;
        id
    }

    /// Raise the counter past every `block-N` id in `layout`. Ids minted by
    /// other systems (server object ids, imported layouts) are ignored.
    pub fn seed_above(&mut self, layout: &Layout) {
        for id in layout.ids() {
            if let Some(n) = id
                .strip_prefix("block-")
                .and_then(|s| s.parse::<u64>().ok())
            {
                if n >= self.next {
                    self.next = n + 1;
                }
            }
        }
    }
}

impl Default for BlockIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use broadsheet_model::Block;

    #[test]
    fn test_ids_are_monotonic_and_distinct() {
        let mut ids = BlockIdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();

        assert_eq!(a, "block-1");
        assert_eq!(b, "block-2");
        assert_ne!(b, c);
    }

    #[test]
    fn test_seed_above_skips_loaded_ids() {
        let layout = Layout::from_blocks(vec![
            Block::new("block-4", "A"),
            Block::new("block-9", "B"),
        ]);

        let mut ids = BlockIdGenerator::new();
        ids.seed_above(&layout);

        assert_eq!(ids.next_id(), "block-10");
    }

    #[test]
    fn test_seed_above_ignores_foreign_ids() {
        let layout = Layout::from_blocks(vec![
            Block::new("65f1c0ffee", "A"),
            Block::new("block-extra", "B"),
        ]);

        let mut ids = BlockIdGenerator::new();
        ids.seed_above(&layout);

        assert_eq!(ids.next_id(), "block-1");
    }
}
