pub mod clipboard;
pub mod output;

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Delimiter line placed above and below each file's contents.
pub const FENCE: &str = "```";

#[derive(Debug)]
pub struct FileAccessError {
    path: PathBuf,
    source: io::Error,
}

impl FileAccessError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> io::ErrorKind {
        self.source.kind()
    }
}

impl fmt::Display for FileAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to read {}", self.path.display())
    }
}

impl Error for FileAccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

pub type Result<T> = std::result::Result<T, FileAccessError>;

/// Render one file as a labeled fenced block.
///
/// Contents are inserted verbatim. A fence marker inside `contents` is not
/// escaped, so such a block will not round-trip as a single fenced block.
pub fn render_block(path: &str, contents: &str) -> String {
    format!("{path}\n{FENCE}\n{contents}\n{FENCE}\n\n")
}

/// Read `path` as UTF-8 text and render it. Non-UTF-8 input is an error.
pub fn read_block(path: &str) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|err| FileAccessError::new(path, err))?;
    debug!(path, bytes = contents.len(), "read file");
    Ok(render_block(path, &contents))
}

/// Concatenate the rendered blocks of `paths` in the order given.
///
/// Stops at the first file that cannot be read; later paths are never opened.
pub fn concat_files<I, S>(paths: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::new();
    for path in paths {
        output.push_str(&read_block(path.as_ref())?);
    }
    Ok(output)
}
