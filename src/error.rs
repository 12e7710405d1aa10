//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the transform pipeline.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Invalid SVG content: {0}")]
    InvalidSvg(String),

    #[error("Formatting failed")]
    Format(#[from] FormatError),
}

/// Failure reported by a [`crate::format::Formatter`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("syntax error at byte {position}: {message}")]
    Syntax { position: u64, message: String },

    #[error("{0} is not supported in JSX")]
    Unsupported(&'static str),

    #[error("adjacent elements must be wrapped in an enclosing element")]
    MultipleRoots,

    #[error("no element to format")]
    NoRoot,

    #[error("output is not valid JSX: {0}")]
    Jsx(String),
}

/// Failure to resolve any color from a theme definition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThemeError {
    #[error("No valid colors found in theme config")]
    NoColors,
}

/// Rejected SVG input.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Please select an SVG file: `{0}`")]
    NotSvgFile(PathBuf),

    #[error("Please paste SVG content first")]
    Empty,

    #[error("Invalid SVG content: no <svg> element")]
    MissingSvgTag,

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),
}

/// Failure to load a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),
}
