//! # Style Records
//!
//! Fixed-shape visual properties attached to every block.
//!
//! ## Design
//!
//! - The set of style keys is closed: the struct is the schema, so no key
//!   can be added or removed at runtime
//! - Values are opaque CSS-like strings; nothing here validates them
//! - Partial updates arrive as a [`StylePatch`] and merge shallowly

use serde::{Deserialize, Serialize};

/// Visual properties of a block. One value per key, always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSet {
    pub padding: String,
    pub margin: String,
    pub background_color: String,
    pub color: String,
    pub border_radius: String,
    pub border: String,
    pub width: String,
    pub height: String,
    pub font_size: String,
    pub text_align: String,
}

impl Default for StyleSet {
    /// The placeholder style block new and seeded blocks start with.
    fn default() -> Self {
        Self {
            padding: "1.5rem".to_string(),
            margin: "1rem".to_string(),
            background_color: "#1e293b".to_string(),
            color: "#f1f5f9".to_string(),
            border_radius: "12px".to_string(),
            border: "1px solid #334155".to_string(),
            width: "100%".to_string(),
            height: "auto".to_string(),
            font_size: "1rem".to_string(),
            text_align: "left".to_string(),
        }
    }
}

impl StyleSet {
    /// Shallow-merge a patch: set fields overwrite, unset fields keep their
    /// current value.
    pub fn merge(&mut self, patch: StylePatch) {
        if let Some(v) = patch.padding {
            self.padding = v;
        }
        if let Some(v) = patch.margin {
            self.margin = v;
        }
        if let Some(v) = patch.background_color {
            self.background_color = v;
        }
        if let Some(v) = patch.color {
            self.color = v;
        }
        if let Some(v) = patch.border_radius {
            self.border_radius = v;
        }
        if let Some(v) = patch.border {
            self.border = v;
        }
        if let Some(v) = patch.width {
            self.width = v;
        }
        if let Some(v) = patch.height {
            self.height = v;
        }
        if let Some(v) = patch.font_size {
            self.font_size = v;
        }
        if let Some(v) = patch.text_align {
            self.text_align = v;
        }
    }
}

/// Partial style update. Every field is optional; the tool panel typically
/// sends one key at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
}

impl StylePatch {
    /// A patch setting only the background color.
    pub fn background_color(value: impl Into<String>) -> Self {
        Self {
            background_color: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.padding.is_none()
            && self.margin.is_none()
            && self.background_color.is_none()
            && self.color.is_none()
            && self.border_radius.is_none()
            && self.border.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.font_size.is_none()
            && self.text_align.is_none()
    }
}
