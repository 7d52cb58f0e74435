//! Block identity and semantic kind.

use serde::{Deserialize, Serialize};

use crate::style::StyleSet;

/// Semantic kind of a block, driving which content preview the canvas
/// renders for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    #[default]
    Generic,
    TopStories,
    BreakingNews,
    World,
    Business,
    Technology,
    Sports,
    Entertainment,
    Politics,
    Health,
    Science,
}

impl BlockKind {
    /// Wire name, as the canvas and tool panel see it.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Generic => "generic",
            BlockKind::TopStories => "top-stories",
            BlockKind::BreakingNews => "breaking-news",
            BlockKind::World => "world",
            BlockKind::Business => "business",
            BlockKind::Technology => "technology",
            BlockKind::Sports => "sports",
            BlockKind::Entertainment => "entertainment",
            BlockKind::Politics => "politics",
            BlockKind::Health => "health",
            BlockKind::Science => "science",
        }
    }
}

/// A single configurable layout unit.
///
/// `id` is unique within a layout and never changes after creation. A block
/// belongs to exactly one layout; copying it always mints a new id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub title: String,

    /// Absent on blocks that were never assigned a kind; reads as generic.
    #[serde(rename = "type", default)]
    pub kind: BlockKind,

    pub styles: StyleSet,
}

impl Block {
    /// A fresh block with the default kind and style record.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind: BlockKind::default(),
            styles: StyleSet::default(),
        }
    }

    /// Copy for duplication: fresh id, deep-copied styles, everything else
    /// verbatim.
    pub fn copy_with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }
}
