use clap::Parser;
use ezg::clipboard::Backend;
use std::path::PathBuf;

/// Copy the contents of several files to the clipboard as fenced code blocks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Files to copy, in the order they should appear.
    pub paths: Vec<String>,

    /// Clipboard backend.
    #[arg(long, value_enum, env = "EZG_BACKEND", default_value_t = Backend::Command)]
    pub backend: Backend,

    /// Clipboard command to pipe the text into (default depends on the platform).
    #[arg(long, value_name = "PROGRAM", env = "EZG_CLIPBOARD_CMD")]
    pub clipboard_cmd: Option<String>,

    /// Argument passed to the clipboard command; may be repeated.
    #[arg(
        long,
        value_name = "ARG",
        requires = "clipboard_cmd",
        allow_hyphen_values = true
    )]
    pub clipboard_arg: Vec<String>,

    /// Whitespace-separated arguments for the clipboard command.
    #[arg(
        long,
        value_name = "ARGS",
        env = "EZG_CLIPBOARD_ARGS",
        requires = "clipboard_cmd",
        allow_hyphen_values = true
    )]
    pub clipboard_args: Option<String>,

    /// Print to standard output instead of the clipboard.
    #[arg(long)]
    pub stdout: bool,

    /// Output to a file instead of the clipboard.
    #[arg(long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Log each step to standard error.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Arguments for the clipboard command. Repeated `--clipboard-arg` flags
    /// take precedence over `--clipboard-args`.
    pub fn clipboard_command_args(&self) -> Vec<String> {
        if !self.clipboard_arg.is_empty() {
            return self.clipboard_arg.clone();
        }
        self.clipboard_args
            .as_deref()
            .map(|joined| joined.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
