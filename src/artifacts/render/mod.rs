//! Edit script rendering
//!
//! This module turns edit scripts into display strings:
//!
//! - `compress`: Collapsing of long unchanged runs into a single marker
//! - `side_by_side`: Old and new text in two fixed-width panes
//! - `unified`: A single stream of `-`, `+` and context lines
//!
//! Both layouts share [`RenderConfig`] and the cell helpers below. Rendering
//! never fails: widths that are too small are clamped to a usable minimum.

pub mod compress;
pub mod side_by_side;
pub mod unified;

use crate::artifacts::diff::edit::{Edit, EditKind};
use crate::artifacts::render::compress::{DEFAULT_COMPRESSION_THRESHOLD, Segment};
use crate::artifacts::render::side_by_side::SideBySide;
use crate::artifacts::render::unified::Unified;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Printed instead of an empty edit script.
pub const NO_CHANGES_MESSAGE: &str = "No changes.";

pub const DEFAULT_WIDTH: usize = 120;

const ELLIPSIS: char = '…';
const TAB: &str = "    ";

pub trait Formatter {
    fn format(&self, edits: &[Edit]) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Layout {
    #[default]
    Unified,
    SideBySide,
}

impl Layout {
    pub fn formatter(self, config: RenderConfig) -> Box<dyn Formatter> {
        match self {
            Layout::Unified => Box::new(Unified::new(config)),
            Layout::SideBySide => Box::new(SideBySide::new(config)),
        }
    }
}

/// Options shared by every layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Total width of a rendered row, in terminal columns.
    pub width: usize,
    pub line_numbers: bool,
    /// Render every unchanged line instead of collapsing long runs.
    pub expanded: bool,
    /// Break long lines over several rows instead of truncating them.
    pub wrap: bool,
    /// Unchanged runs longer than this collapse into one marker.
    pub threshold: usize,
    /// Unchanged lines kept visible at each edge of a collapsed run.
    pub context: usize,
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            line_numbers: false,
            expanded: false,
            wrap: false,
            threshold: DEFAULT_COMPRESSION_THRESHOLD,
            context: 0,
            color: false,
        }
    }
}

impl RenderConfig {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = line_numbers;
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_context(mut self, context: usize) -> Self {
        self.context = context;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn segments<'e>(&self, edits: &'e [Edit]) -> Vec<Segment<'e>> {
        if self.expanded {
            edits.iter().map(Segment::Edit).collect()
        } else {
            compress::compress_unchanged(edits, self.threshold, self.context)
        }
    }

    /// Splits `text` into the cells that fill one column of `width`.
    pub(crate) fn cells(&self, text: &str, width: usize) -> Vec<String> {
        if self.wrap {
            wrap(text, width)
        } else {
            vec![truncate(text, width)]
        }
    }

    pub(crate) fn paint(&self, text: &str, kind: EditKind) -> String {
        if !self.color || text.is_empty() {
            return text.to_string();
        }

        match kind {
            EditKind::Equal => text.normal().to_string(),
            EditKind::Delete => text.red().to_string(),
            EditKind::Insert => text.green().to_string(),
            EditKind::Replace => text.yellow().to_string(),
        }
    }

    pub(crate) fn paint_marker(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

fn normalize(text: &str) -> String {
    text.trim_end().replace('\t', TAB)
}

/// Trims trailing whitespace and cuts `text` to `width` columns, ending in
/// an ellipsis when anything was dropped.
pub(crate) fn truncate(text: &str, width: usize) -> String {
    let text = normalize(text);
    if text.width() <= width {
        return text;
    }

    let mut used = 0;
    let mut truncated = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        used += w;
        truncated.push(c);
    }
    truncated.push(ELLIPSIS);
    truncated
}

/// Breaks `text` into chunks of at most `width` columns. Always yields at
/// least one chunk.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let text = normalize(text);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            used = 0;
        }
        used += w;
        current.push(c);
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Right-pads `text` with spaces up to `width` columns.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let missing = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(missing))
}

pub(crate) fn line_number(index: Option<usize>, width: usize) -> String {
    match index {
        Some(index) => format!("{:>width$} ", index + 1, width = width - 1),
        None => " ".repeat(width),
    }
}
