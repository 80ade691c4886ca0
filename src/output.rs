use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

use crate::clipboard::ClipboardSink;

/// Where the assembled text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Clipboard,
    Stdout,
    File(PathBuf),
}

impl Destination {
    pub fn from_flags(to_stdout: bool, out_file: Option<PathBuf>) -> Self {
        if to_stdout {
            Destination::Stdout
        } else if let Some(path) = out_file {
            Destination::File(path)
        } else {
            Destination::Clipboard
        }
    }
}

pub fn handle_output(
    text: &str,
    file_count: usize,
    destination: &Destination,
    sink: &mut dyn ClipboardSink,
) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
        Destination::File(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write to file: {}", path.display()))?;
            eprintln!("Output written to {}.", path.display());
        }
        Destination::Clipboard => {
            sink.set_clipboard(text).context("Failed to copy to clipboard")?;
            info!(bytes = text.len(), files = file_count, "clipboard updated");
            eprintln!("Copied {file_count} file(s) to clipboard.");
        }
    }
    Ok(())
}
