use std::collections::HashMap;
use std::fmt::Display;

/// The kind of an [`Edit`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EditKind {
    Equal,
    Insert,
    Delete,
    Replace,
}

impl EditKind {
    pub const ALL: [EditKind; 4] = [
        EditKind::Equal,
        EditKind::Insert,
        EditKind::Delete,
        EditKind::Replace,
    ];
}

impl From<&EditKind> for &str {
    fn from(kind: &EditKind) -> Self {
        match kind {
            EditKind::Equal => "equal",
            EditKind::Insert => "insert",
            EditKind::Delete => "delete",
            EditKind::Replace => "replace",
        }
    }
}

impl Display for EditKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", <&str>::from(self))
    }
}

/// One operation of an edit script turning sequence A into sequence B.
///
/// Each variant only carries the positions it actually has: an insertion has
/// no A-side line and a deletion has no B-side line. `Replace` is never
/// produced by a diff algorithm, only by
/// [`merge_replacements`](super::replace::merge_replacements).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Equal {
        a_index: usize,
        b_index: usize,
        line: String,
    },
    Insert {
        b_index: usize,
        line: String,
    },
    Delete {
        a_index: usize,
        line: String,
    },
    Replace {
        a_index: usize,
        b_index: usize,
        old_line: String,
        new_line: String,
    },
}

impl Edit {
    pub fn kind(&self) -> EditKind {
        match self {
            Edit::Equal { .. } => EditKind::Equal,
            Edit::Insert { .. } => EditKind::Insert,
            Edit::Delete { .. } => EditKind::Delete,
            Edit::Replace { .. } => EditKind::Replace,
        }
    }

    pub fn a_index(&self) -> Option<usize> {
        match self {
            Edit::Equal { a_index, .. }
            | Edit::Delete { a_index, .. }
            | Edit::Replace { a_index, .. } => Some(*a_index),
            Edit::Insert { .. } => None,
        }
    }

    pub fn b_index(&self) -> Option<usize> {
        match self {
            Edit::Equal { b_index, .. }
            | Edit::Insert { b_index, .. }
            | Edit::Replace { b_index, .. } => Some(*b_index),
            Edit::Delete { .. } => None,
        }
    }

    /// The line text; the old text for a `Replace`.
    pub fn content(&self) -> &str {
        match self {
            Edit::Equal { line, .. } | Edit::Insert { line, .. } | Edit::Delete { line, .. } => {
                line
            }
            Edit::Replace { old_line, .. } => old_line,
        }
    }

    /// The new text of a `Replace`, `None` for every other kind.
    pub fn new_content(&self) -> Option<&str> {
        match self {
            Edit::Replace { new_line, .. } => Some(new_line),
            _ => None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal { .. })
    }

    pub fn as_string(&self) -> String {
        match self {
            Edit::Delete { line, .. } => format!("-{line}"),
            Edit::Insert { line, .. } => format!("+{line}"),
            Edit::Equal { line, .. } => format!(" {line}"),
            Edit::Replace {
                old_line, new_line, ..
            } => format!("-{old_line}\n+{new_line}"),
        }
    }
}

impl Display for Edit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

/// Rebuilds sequence B from a script.
///
/// Deletions are skipped and a `Replace` contributes its new line, so the
/// result is the same whether or not the script went through the merger.
pub fn apply_edits(edits: &[Edit]) -> Vec<String> {
    edits
        .iter()
        .filter_map(|edit| match edit {
            Edit::Equal { line, .. } | Edit::Insert { line, .. } => Some(line.clone()),
            Edit::Replace { new_line, .. } => Some(new_line.clone()),
            Edit::Delete { .. } => None,
        })
        .collect()
}

/// Rebuilds sequence A from a script, the mirror of [`apply_edits`]. Holds for
/// engine output; merging may reorder deletions.
pub fn revert_edits(edits: &[Edit]) -> Vec<String> {
    edits
        .iter()
        .filter_map(|edit| match edit {
            Edit::Equal { line, .. } | Edit::Delete { line, .. } => Some(line.clone()),
            Edit::Replace { old_line, .. } => Some(old_line.clone()),
            Edit::Insert { .. } => None,
        })
        .collect()
}

/// Splits every `Replace` back into the `Delete` and `Insert` it was made of.
pub fn expand_replacements(edits: &[Edit]) -> Vec<Edit> {
    let mut expanded = Vec::with_capacity(edits.len());

    for edit in edits {
        match edit {
            Edit::Replace {
                a_index,
                b_index,
                old_line,
                new_line,
            } => {
                expanded.push(Edit::Delete {
                    a_index: *a_index,
                    line: old_line.clone(),
                });
                expanded.push(Edit::Insert {
                    b_index: *b_index,
                    line: new_line.clone(),
                });
            }
            other => expanded.push(other.clone()),
        }
    }

    expanded
}

pub fn count_edit_kinds(edits: &[Edit]) -> HashMap<EditKind, usize> {
    edits.iter().fold(HashMap::new(), |mut counts, edit| {
        *counts.entry(edit.kind()).or_insert(0) += 1;
        counts
    })
}
