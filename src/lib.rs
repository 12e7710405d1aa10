//! shadecn - Remap SVG colors onto a shadcn theme and emit clean SVG or React components
//!
//! This library detects the colors used by an SVG, resolves the colors of a
//! shadcn theme definition, and runs the SVG through a fixed transform
//! pipeline (theme substitution, id/class/sizing stripping, React wrapping,
//! formatting).
//!
//! # Example
//!
//! ```rust
//! use shadecn::{extract_colors, extract_theme_colors, transform, ThemeMapping, TransformSettings};
//!
//! let svg = r##"<svg class="icon"><path fill="#ff0000" d="M0 0h24v24H0z"/></svg>"##;
//! assert_eq!(extract_colors(svg), vec!["#ff0000"]);
//!
//! let theme = extract_theme_colors(":root { --primary: oklch(0.637 0.237 25.331); }").unwrap();
//! assert!(theme.contains_key("primary"));
//!
//! let mut mapping = ThemeMapping::new();
//! mapping.insert("#ff0000".to_string(), "primary".to_string());
//!
//! let component = transform(&TransformSettings::default(), svg, &mapping).unwrap();
//! assert!(component.contains(r#"fill="hsl(var(--primary))""#));
//! assert!(component.starts_with("const svg = () => {"));
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod import;
pub mod parser;
pub mod recolor;
pub mod session;
pub mod transform;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, FormatError, ImportError, ThemeError, TransformError};
pub use format::{Formatter, JsxFormatter};
pub use parser::{extract_colors, extract_theme_colors, validate_markup};
pub use session::Session;
pub use transform::{transform, transform_with};
pub use types::*;
