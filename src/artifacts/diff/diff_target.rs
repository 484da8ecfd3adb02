use anyhow::Context;
use std::path::{Path, PathBuf};

const NULL_PATH: &str = "/dev/null";

pub type LineSet = Vec<String>;

/// One side of a comparison: the lines to diff and the path they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTarget {
    pub(crate) file: PathBuf,
    pub(crate) exists: bool,
    pub(crate) data: LineSet,
}

impl DiffTarget {
    /// Loads `file`, or an empty side if there is no such file.
    pub fn from_path(file: &Path) -> anyhow::Result<Self> {
        if file.exists() {
            Self::from_file(file)
        } else {
            tracing::info!(file = %file.display(), "file not found, diffing against nothing");
            Ok(Self::from_nothing(file))
        }
    }

    pub fn from_file(file: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        Ok(Self::from_content(file, &content))
    }

    pub fn from_content(file: &Path, content: &str) -> Self {
        Self {
            file: file.to_path_buf(),
            exists: true,
            data: content.lines().map(|s| s.to_string()).collect(),
        }
    }

    pub fn from_nothing(file: &Path) -> Self {
        Self {
            file: file.to_path_buf(),
            exists: false,
            data: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.data
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Path shown in the diff header, prefixed with `side` (`a` or `b`).
    pub fn diff_path(&self, side: &str) -> PathBuf {
        if self.exists {
            Path::new(side).join(&self.file)
        } else {
            Path::new(NULL_PATH).to_path_buf()
        }
    }
}
