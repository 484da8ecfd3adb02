use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits. The diff
/// command can then write to it exactly as it writes to stdout.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Where rendered output goes.
pub enum Output {
    Stdout,
    Pager(Pager),
}

impl Output {
    /// Pages only when asked to and stdout is an interactive terminal.
    pub fn select(paging: bool) -> Self {
        if paging && io::stdout().is_terminal() {
            Output::Pager(Pager::new())
        } else {
            Output::Stdout
        }
    }

    pub fn writer(&self) -> Box<dyn Write> {
        match self {
            Output::Stdout => Box::new(io::stdout()),
            Output::Pager(pager) => Box::new(PagerWriter::new(pager.clone())),
        }
    }

    /// Hands everything written so far to the pager, if there is one.
    pub fn finish(self) -> anyhow::Result<()> {
        if let Output::Pager(pager) = self {
            minus::page_all(pager)?;
        }

        Ok(())
    }
}
