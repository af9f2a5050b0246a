//! Chatline CLI entry point.

use chatline_foundation::Error;
use chatline_runtime::{ConsoleConfig, OutputFormat, Repl};
use std::env;
use std::process::ExitCode;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Largest accepted `--timeout`, one day.
const MAX_TIMEOUT_SECS: u64 = 24 * 60 * 60;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    console: ConsoleConfig,
    show_help: bool,
    show_version: bool,
    log_filter: Option<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Error> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--debug" => config.console.debug = true,
            "--no-banner" => config.console.show_banner = false,
            "--json" => config.console.format = OutputFormat::Json,
            "-u" | "--username" => {
                let name = args
                    .next()
                    .ok_or_else(|| Error::config(format!("{arg} requires a value")))?;
                if name.is_empty() || name.contains(char::is_whitespace) {
                    return Err(Error::config(format!("invalid username: {name:?}")));
                }
                config.console.username = name;
            }
            "--timeout" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::config("--timeout requires a value"))?;
                let secs: u64 = value
                    .parse()
                    .ok()
                    .filter(|secs| *secs <= MAX_TIMEOUT_SECS)
                    .ok_or_else(|| {
                        Error::config(format!(
                            "invalid --timeout value: {value} (expected 0..={MAX_TIMEOUT_SECS})"
                        ))
                    })?;
                let timeout = Duration::from_secs(secs);
                config.console.connect_timeout = timeout;
                config.console.read_timeout = timeout;
            }
            "--log" => {
                let filter = args
                    .next()
                    .ok_or_else(|| Error::config("--log requires a value"))?;
                config.log_filter = Some(filter);
            }
            other => {
                return Err(Error::config(format!("unknown option: {other}")));
            }
        }
    }

    Ok(config)
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Error> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("chatline {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(config.log_filter.as_deref());
    info!(
        username = %config.console.username,
        connect_timeout = ?config.console.connect_timeout,
        read_timeout = ?config.console.read_timeout,
        "starting console"
    );

    let mut repl = Repl::new(&config.console)?;
    repl.run()
}

fn print_help() {
    println!(
        "\x1b[1mChatline\x1b[0m - Extract mentions, emoticons, and links from chat messages

\x1b[1mUSAGE:\x1b[0m
    chatline [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -u, --username NAME    Initial prompt username (default: username)
    --timeout SECS         Link connect and read timeout, at most 86400 (default: 10)
    --debug                Report discarded tokens on stderr
    --no-banner            Skip the welcome banner
    --json                 Print reports as strict JSON
    --log FILTER           Log filter, e.g. debug or chatline_parser=trace

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    /help                  Show usage
    /setUsername NAME      Change the prompt username
    /debug                 Toggle discarded-token diagnostics
    /quit                  Exit (Ctrl+D also exits)"
    );
}
