use crate::artifacts::diff::algorithm::Algorithm;
use crate::artifacts::diff::diff_target::DiffTarget;
use crate::artifacts::diff::edit::{Edit, EditKind, count_edit_kinds};
use crate::artifacts::diff::replace::merge_replacements;
use crate::artifacts::render::{Layout, NO_CHANGES_MESSAGE, RenderConfig};
use colored::Colorize;
use derive_new::new;
use std::cell::{RefCell, RefMut};
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct DiffOptions {
    pub algorithm: Algorithm,
    pub layout: Layout,
    /// Fuse similar deleted/inserted lines into replacements.
    pub merge: bool,
    /// Print a tally of edit kinds after the diff.
    pub stat: bool,
    pub render: RenderConfig,
}

pub struct DiffCommand {
    writer: RefCell<Box<dyn Write>>,
    options: DiffOptions,
}

impl DiffCommand {
    pub fn new(writer: Box<dyn Write>, options: DiffOptions) -> Self {
        Self {
            writer: RefCell::new(writer),
            options,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn run(&self, old: &Path, new: &Path) -> anyhow::Result<()> {
        let a = DiffTarget::from_path(old)?;
        let b = DiffTarget::from_path(new)?;

        if !a.exists() && !b.exists() {
            anyhow::bail!(
                "neither {} nor {} exists",
                old.display(),
                new.display()
            );
        }

        self.print_diff(&a, &b)
    }

    pub fn print_diff(&self, a: &DiffTarget, b: &DiffTarget) -> anyhow::Result<()> {
        let engine = self.options.algorithm.engine();
        let edits = engine.compute_lines(a.lines(), b.lines())?;

        if !edits.iter().any(Edit::is_change) {
            writeln!(self.writer(), "{NO_CHANGES_MESSAGE}")?;
            return Ok(());
        }

        let edits = if self.options.merge {
            merge_replacements(&edits)
        } else {
            edits
        };

        self.print_header(a, b)?;

        let formatter = self.options.layout.formatter(self.options.render.clone());
        writeln!(self.writer(), "{}", formatter.format(&edits))?;

        if self.options.stat {
            self.print_stat(&edits)?;
        }

        Ok(())
    }

    fn print_header(&self, a: &DiffTarget, b: &DiffTarget) -> anyhow::Result<()> {
        let old = format!("--- {}", a.diff_path("a").display());
        let new = format!("+++ {}", b.diff_path("b").display());

        if self.options.render.color {
            writeln!(self.writer(), "{}", old.bold())?;
            writeln!(self.writer(), "{}", new.bold())?;
        } else {
            writeln!(self.writer(), "{old}")?;
            writeln!(self.writer(), "{new}")?;
        }

        Ok(())
    }

    fn print_stat(&self, edits: &[Edit]) -> anyhow::Result<()> {
        let counts = count_edit_kinds(edits);
        let stat = EditKind::ALL
            .iter()
            .map(|kind| format!("{kind}: {}", counts.get(kind).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(self.writer(), "{stat}")?;
        Ok(())
    }
}
