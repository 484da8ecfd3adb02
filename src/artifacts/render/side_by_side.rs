use crate::artifacts::diff::edit::{Edit, EditKind};
use crate::artifacts::render::compress::Segment;
use crate::artifacts::render::{Formatter, NO_CHANGES_MESSAGE, RenderConfig, line_number, pad};
use derive_new::new;

const GUTTER_WIDTH: usize = 3;
const LINE_NUMBER_WIDTH: usize = 5;
const MIN_PANE_WIDTH: usize = 10;

/// Old text on the left, new text on the right, and a gutter marking what
/// happened to the line: `<` removed, `>` added, `|` replaced.
#[derive(Debug, Clone, new)]
pub struct SideBySide {
    config: RenderConfig,
}

/// One pane of one edit: the line number and text to show, if any.
struct Pane<'e> {
    index: Option<usize>,
    text: Option<&'e str>,
    kind: EditKind,
}

impl SideBySide {
    pub fn pane_width(&self) -> usize {
        let numbers = if self.config.line_numbers {
            2 * LINE_NUMBER_WIDTH
        } else {
            0
        };

        (self.config.width.saturating_sub(GUTTER_WIDTH + numbers) / 2).max(MIN_PANE_WIDTH)
    }

    fn row_width(&self) -> usize {
        let numbers = if self.config.line_numbers {
            2 * LINE_NUMBER_WIDTH
        } else {
            0
        };

        2 * self.pane_width() + GUTTER_WIDTH + numbers
    }

    fn gutter(kind: EditKind) -> char {
        match kind {
            EditKind::Equal => ' ',
            EditKind::Delete => '<',
            EditKind::Insert => '>',
            EditKind::Replace => '|',
        }
    }

    fn panes(edit: &Edit) -> (Pane<'_>, Pane<'_>) {
        let blank = |kind| Pane {
            index: None,
            text: None,
            kind,
        };

        match edit {
            Edit::Equal {
                a_index,
                b_index,
                line,
            } => (
                Pane {
                    index: Some(*a_index),
                    text: Some(line),
                    kind: EditKind::Equal,
                },
                Pane {
                    index: Some(*b_index),
                    text: Some(line),
                    kind: EditKind::Equal,
                },
            ),
            Edit::Delete { a_index, line } => (
                Pane {
                    index: Some(*a_index),
                    text: Some(line),
                    kind: EditKind::Delete,
                },
                blank(EditKind::Delete),
            ),
            Edit::Insert { b_index, line } => (
                blank(EditKind::Insert),
                Pane {
                    index: Some(*b_index),
                    text: Some(line),
                    kind: EditKind::Insert,
                },
            ),
            Edit::Replace {
                a_index,
                b_index,
                old_line,
                new_line,
            } => (
                Pane {
                    index: Some(*a_index),
                    text: Some(old_line),
                    kind: EditKind::Delete,
                },
                Pane {
                    index: Some(*b_index),
                    text: Some(new_line),
                    kind: EditKind::Insert,
                },
            ),
        }
    }

    fn render_edit(&self, edit: &Edit, rows: &mut Vec<String>) {
        let width = self.pane_width();
        let (old, new) = Self::panes(edit);
        let old_cells = old
            .text
            .map(|text| self.config.cells(text, width))
            .unwrap_or_default();
        let new_cells = new
            .text
            .map(|text| self.config.cells(text, width))
            .unwrap_or_default();
        let gutter = format!(" {} ", Self::gutter(edit.kind()));

        for i in 0..old_cells.len().max(new_cells.len()) {
            let mut row = String::new();

            if self.config.line_numbers {
                row.push_str(&line_number(old.index.filter(|_| i == 0), LINE_NUMBER_WIDTH));
            }
            let old_cell = old_cells.get(i).map(String::as_str).unwrap_or_default();
            row.push_str(&self.config.paint(&pad(old_cell, width), old.kind));
            row.push_str(&gutter);

            if self.config.line_numbers {
                row.push_str(&line_number(new.index.filter(|_| i == 0), LINE_NUMBER_WIDTH));
            }
            let new_cell = new_cells.get(i).map(String::as_str).unwrap_or_default();
            row.push_str(&self.config.paint(new_cell, new.kind));

            rows.push(row.trim_end().to_string());
        }
    }

    fn render_marker(&self, segment: &Segment<'_>, rows: &mut Vec<String>) {
        let marker = format!("{:^width$}", segment.to_string(), width = self.row_width());
        rows.push(self.config.paint_marker(marker.trim_end()));
    }
}

impl Formatter for SideBySide {
    fn format(&self, edits: &[Edit]) -> String {
        if edits.is_empty() {
            return NO_CHANGES_MESSAGE.to_string();
        }

        let mut rows = Vec::new();
        for segment in self.config.segments(edits) {
            match segment {
                Segment::Edit(edit) => self.render_edit(edit, &mut rows),
                Segment::Collapsed { .. } => self.render_marker(&segment, &mut rows),
            }
        }

        rows.join("\n")
    }
}
