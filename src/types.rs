//! Type definitions shared by the parser, the transform pipeline and the CLI

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Theme token that means "leave this color alone" when mapping colors.
pub const KEEP_ORIGINAL: &str = "none";

// ============================================================================
// Settings
// ============================================================================

/// Flags gating the optional steps of the transform pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformSettings {
    /// Strip every `id="..."` attribute
    pub remove_ids: bool,
    /// Emit a React function component instead of raw SVG
    pub react: bool,
    /// Strip every `class="..."` / `className="..."` attribute
    pub remove_classes: bool,
    /// Strip the first `width="..."` and the first `height="..."`
    pub remove_sizing: bool,
    /// Pretty-print the result
    pub format: bool,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            remove_ids: false,
            react: true,
            remove_classes: false,
            remove_sizing: false,
            format: true,
        }
    }
}

impl TransformSettings {
    /// Settings with every step disabled.
    pub fn none() -> Self {
        Self {
            remove_ids: false,
            react: false,
            remove_classes: false,
            remove_sizing: false,
            format: false,
        }
    }
}

// ============================================================================
// Ordered color tables
// ============================================================================
//
// Substitutions driven by these tables run in insertion order, which matters
// when one color is a substring of another (`#fff` vs `#ffffff`). Removal
// must use `shift_remove` to keep that order.

/// Original color → replacement color, used for live preview.
pub type ColorMap = IndexMap<String, String>;

/// Original color → theme token name, drives theme substitution.
pub type ThemeMapping = IndexMap<String, String>;

/// Theme token name → resolved `#rrggbb` color.
pub type ThemeColors = IndexMap<String, String>;

// ============================================================================
// Output artifacts
// ============================================================================

/// Kind of text artifact handed to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// React component produced by the pipeline
    Component,
    /// Plain SVG produced by the pipeline
    Svg,
    /// Recolored source markup, untouched by the pipeline
    Original,
}

impl OutputKind {
    pub fn for_settings(settings: &TransformSettings) -> Self {
        if settings.react {
            OutputKind::Component
        } else {
            OutputKind::Svg
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            OutputKind::Component => "Component.jsx",
            OutputKind::Svg => "output.svg",
            OutputKind::Original => "original.svg",
        }
    }
}
