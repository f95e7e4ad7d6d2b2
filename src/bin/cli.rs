//! `archive` launcher CLI
//!
//! Deprecated entry point kept for old scripts. Checks that the ArchiveBox
//! runtime is installed and hands every argument over to it.

use std::env;
use std::ffi::OsString;
use std::io;
use std::iter;
use std::process;

use archive_shim::{config, dispatch::Dispatcher, runtime::ProcessRuntime};
use clap::Parser;

/// Forwards all arguments to `python3 -m archivebox`
#[derive(Parser, Debug)]
#[command(
    name = "archive",
    about = "Deprecated ArchiveBox launcher",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Arguments passed through to ArchiveBox untouched
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        num_args = 0..,
        value_parser = clap::value_parser!(OsString)
    )]
    args: Vec<OsString>,
}

/// Put `--` in front of the user's arguments so clap claims none of them,
/// not even a leading `--`.
fn passthrough(argv: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut argv = argv.into_iter();
    let program = argv.next().unwrap_or_else(|| OsString::from("archive"));
    iter::once(program)
        .chain(iter::once(OsString::from("--")))
        .chain(argv)
        .collect()
}

/// Initialize logging. Quiet unless `RUST_LOG` asks for more.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the launcher.
fn main() {
    let cli = Cli::parse_from(passthrough(env::args_os()));
    init_logging();

    // Only visible with RUST_LOG=info; a default run prints nothing extra.
    log::info!("'archive' is deprecated, call 'archivebox' directly instead");

    let config = config::load_from_env();
    let dispatcher = Dispatcher::new(&config, ProcessRuntime::new());

    let code = match dispatcher.run(&cli.args, &mut io::stdout().lock()) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            log::error!("{}", e);
            e.exit_code()
        }
    };

    process::exit(code);
}
