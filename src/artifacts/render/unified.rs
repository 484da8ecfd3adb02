use crate::artifacts::diff::edit::{Edit, EditKind};
use crate::artifacts::render::compress::Segment;
use crate::artifacts::render::{Formatter, NO_CHANGES_MESSAGE, RenderConfig, line_number};
use derive_new::new;

const LINE_NUMBER_WIDTH: usize = 5;
const SIGN_WIDTH: usize = 1;
const MIN_CONTENT_WIDTH: usize = 10;

/// A single stream of lines prefixed with `-` (removed), `+` (added) or a
/// space (unchanged). A replacement shows as its removal then its addition.
#[derive(Debug, Clone, new)]
pub struct Unified {
    config: RenderConfig,
}

impl Unified {
    pub fn content_width(&self) -> usize {
        let numbers = if self.config.line_numbers {
            2 * LINE_NUMBER_WIDTH
        } else {
            0
        };

        self.config
            .width
            .saturating_sub(numbers + SIGN_WIDTH)
            .max(MIN_CONTENT_WIDTH)
    }

    fn sign(kind: EditKind) -> char {
        match kind {
            EditKind::Delete => '-',
            EditKind::Insert => '+',
            EditKind::Equal | EditKind::Replace => ' ',
        }
    }

    fn push_line(
        &self,
        kind: EditKind,
        (a_index, b_index): (Option<usize>, Option<usize>),
        text: &str,
        rows: &mut Vec<String>,
    ) {
        for (i, cell) in self
            .config
            .cells(text, self.content_width())
            .into_iter()
            .enumerate()
        {
            let mut row = String::new();

            if self.config.line_numbers {
                row.push_str(&line_number(a_index.filter(|_| i == 0), LINE_NUMBER_WIDTH));
                row.push_str(&line_number(b_index.filter(|_| i == 0), LINE_NUMBER_WIDTH));
            }

            let line = format!("{}{cell}", Self::sign(kind));
            row.push_str(&self.config.paint(line.trim_end(), kind));

            rows.push(row.trim_end().to_string());
        }
    }

    fn render_edit(&self, edit: &Edit, rows: &mut Vec<String>) {
        match edit {
            Edit::Replace {
                a_index,
                b_index,
                old_line,
                new_line,
            } => {
                self.push_line(EditKind::Delete, (Some(*a_index), None), old_line, rows);
                self.push_line(EditKind::Insert, (None, Some(*b_index)), new_line, rows);
            }
            other => self.push_line(
                other.kind(),
                (other.a_index(), other.b_index()),
                other.content(),
                rows,
            ),
        }
    }
}

impl Formatter for Unified {
    fn format(&self, edits: &[Edit]) -> String {
        if edits.is_empty() {
            return NO_CHANGES_MESSAGE.to_string();
        }

        let mut rows = Vec::new();
        for segment in self.config.segments(edits) {
            match segment {
                Segment::Edit(edit) => self.render_edit(edit, &mut rows),
                Segment::Collapsed { .. } => {
                    rows.push(self.config.paint_marker(&segment.to_string()));
                }
            }
        }

        rows.join("\n")
    }
}
