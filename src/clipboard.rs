use std::env;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use clap::ValueEnum;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum ClipboardError {
    Spawn { program: String, source: io::Error },
    Write { program: String, source: io::Error },
    Status { program: String, status: ExitStatus },
    Backend(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Spawn { program, .. } => {
                write!(f, "could not run clipboard command `{program}`")
            }
            ClipboardError::Write { program, .. } => {
                write!(f, "could not write to clipboard command `{program}`")
            }
            ClipboardError::Status { program, status } => {
                write!(f, "clipboard command `{program}` exited with {status}")
            }
            ClipboardError::Backend(message) => write!(f, "clipboard unavailable: {message}"),
        }
    }
}

impl Error for ClipboardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ClipboardError::Spawn { source, .. } | ClipboardError::Write { source, .. } => {
                Some(source)
            }
            ClipboardError::Status { .. } | ClipboardError::Backend(_) => None,
        }
    }
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        ClipboardError::Backend(err.to_string())
    }
}

/// Something that can replace the system clipboard contents.
pub trait ClipboardSink {
    fn set_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Pipes text into an external clipboard utility's standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The clipboard utility conventionally present on the host platform.
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", Vec::new())
        } else if cfg!(windows) {
            Self::new("clip", Vec::new())
        } else if env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", Vec::new())
        } else {
            Self::new("xclip", vec!["-selection".into(), "clipboard".into()])
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ClipboardSink for CommandClipboard {
    fn set_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        debug!(program = %self.program, args = ?self.args, "spawning clipboard command");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Dropping stdin closes the pipe so the command sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin not captured")),
        };
        let status = child.wait().map_err(|source| ClipboardError::Write {
            program: self.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(ClipboardError::Status {
                program: self.program.clone(),
                status,
            });
        }
        written.map_err(|source| ClipboardError::Write {
            program: self.program.clone(),
            source,
        })
    }
}

/// Native clipboard access through `arboard`.
#[derive(Debug, Default)]
pub struct ArboardClipboard;

impl ClipboardSink for ArboardClipboard {
    fn set_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Pipe the text into an external clipboard command.
    Command,
    /// Use the native clipboard library.
    Arboard,
}

/// The clipboard backend chosen for one run.
#[derive(Debug)]
pub enum SelectedClipboard {
    Command(CommandClipboard),
    Arboard(ArboardClipboard),
}

impl SelectedClipboard {
    /// Pick a backend. `program` and `args` override the platform command and
    /// only apply to [`Backend::Command`].
    pub fn select(backend: Backend, program: Option<&str>, args: Vec<String>) -> Self {
        match backend {
            Backend::Arboard => {
                if program.is_some() || !args.is_empty() {
                    warn!("clipboard command override ignored by the arboard backend");
                }
                SelectedClipboard::Arboard(ArboardClipboard)
            }
            Backend::Command => match program {
                Some(program) => SelectedClipboard::Command(CommandClipboard::new(program, args)),
                None => {
                    if !args.is_empty() {
                        warn!("clipboard arguments ignored without a clipboard command");
                    }
                    SelectedClipboard::Command(CommandClipboard::platform_default())
                }
            },
        }
    }
}

impl ClipboardSink for SelectedClipboard {
    fn set_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self {
            SelectedClipboard::Command(sink) => sink.set_clipboard(text),
            SelectedClipboard::Arboard(sink) => sink.set_clipboard(text),
        }
    }
}
