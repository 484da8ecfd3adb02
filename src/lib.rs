//! Line-oriented diffing
//!
//! Two interchangeable engines (Myers and LCS) compute edit scripts between
//! line sequences, a merger fuses edited lines into replacements, and the
//! renderers print the result side by side or unified.
//!
//! ```
//! use linediff::artifacts::diff::algorithm::{Algorithm, DiffAlgorithm};
//! use linediff::artifacts::diff::edit::apply_edits;
//! use linediff::artifacts::diff::replace::merge_replacements;
//! use linediff::artifacts::render::{Formatter, Layout, RenderConfig};
//!
//! let a = ["fmt", "github.com/foo/bar v1.0.0"];
//! let b = ["fmt", "github.com/foo/bar v2.0.0"];
//!
//! let edits = Algorithm::Myers.engine().compute(&a, &b).unwrap();
//! assert_eq!(apply_edits(&edits), b);
//!
//! let merged = merge_replacements(&edits);
//! let output = Layout::Unified.formatter(RenderConfig::default()).format(&merged);
//! assert!(output.contains("+github.com/foo/bar v2.0.0"));
//! ```

pub mod artifacts;
pub mod commands;
