//! Data model for page blueprints: blocks, their style records, and the
//! ordered block sequence that forms one layout.

pub mod block;
pub mod layout;
pub mod style;

pub use block::{Block, BlockKind};
pub use layout::Layout;
pub use style::{StylePatch, StyleSet};
