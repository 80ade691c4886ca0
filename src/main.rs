mod args;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::process;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use args::Args;
use ezg::clipboard::SelectedClipboard;
use ezg::output::{self, Destination};

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Usage errors exit before `.env` is read.
    if matches!(Args::try_parse(), Ok(args) if args.paths.is_empty()) {
        eprintln!("{}", Args::command().render_usage());
        eprintln!("Give at least one file to copy.");
        process::exit(1);
    }
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_logging(args.verbose);

    let text = ezg::concat_files(&args.paths).inspect_err(|err| warn!(%err, "aborting"))?;

    let destination = Destination::from_flags(args.stdout, args.out.clone());
    let mut sink = SelectedClipboard::select(
        args.backend,
        args.clipboard_cmd.as_deref(),
        args.clipboard_command_args(),
    );
    output::handle_output(&text, args.paths.len(), &destination, &mut sink)?;
    Ok(())
}
