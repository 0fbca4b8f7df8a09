use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::warn;

use errcode::input;
use errcode::report::{ansi::AnsiRenderer, json};
use errcode::settings::{ColorChoice, LastInputStore, OutputFormat, Settings};
use errcode::{Namespace, Resolver, table};

/// Exit code for input the tool cannot interpret.
const USAGE_ERROR: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "errcode", version)]
#[command(about = "Translate numeric error codes into their symbolic names and messages")]
struct Cli {
    /// Code to translate: decimal (`3221225786`, `-1073741510`) or hex (`0xC000013A`, `-0x1`).
    /// Repeats the last lookup when omitted.
    #[arg(allow_hyphen_values = true)]
    code: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Colour text output
    #[arg(long, value_enum, value_name = "WHEN")]
    color: Option<ColorChoice>,

    /// Do not remember this input for the next run
    #[arg(long)]
    no_save: bool,

    /// List every entry of a built-in namespace (update-subsystem, directory-protocol, kernel-panic)
    #[arg(long, value_name = "NAMESPACE", conflicts_with = "code")]
    list: Option<Namespace>,

    /// Settings file to use instead of the per-user one
    #[arg(long, value_name = "PATH", env = "ERRCODE_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    if let Some(namespace) = cli.list {
        list_namespace(namespace);
        return;
    }

    let config_path = match cli.config.clone() {
        Some(path) => Some(path),
        None => Settings::default_path()
            .map_err(|e| warn!(error = %e, "settings disabled"))
            .ok(),
    };
    let settings = match &config_path {
        Some(path) => match Settings::load_from(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Settings::default(),
    };

    let (raw, from_cache) = match cli.code.as_deref() {
        Some(code) => (code.to_string(), false),
        None => match config_path.as_deref().and_then(|path| LastInputStore::new(path).load()) {
            Some(cached) => (cached, true),
            None => {
                eprintln!("Usage: errcode <CODE>   (decimal like 3221225786 or hex like 0xC000013A)");
                std::process::exit(USAGE_ERROR);
            }
        },
    };

    let parsed = match input::parse_code(&raw) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Invalid code: {}", e);
            std::process::exit(USAGE_ERROR);
        }
    };

    if !from_cache && !cli.no_save && settings.remember {
        if let Some(path) = &config_path {
            if let Err(e) = LastInputStore::new(path).store(parsed.raw()) {
                warn!(error = %e, "could not remember input");
            }
        }
    }

    let report = Resolver::host().resolve(parsed.value());

    let format = if cli.json { OutputFormat::Json } else { settings.format };
    match format {
        OutputFormat::Json => println!("{}", json::render(&report)),
        OutputFormat::Text => {
            let use_color = cli.color.unwrap_or(settings.color).enabled(std::io::stdout().is_terminal());
            print!("{}", AnsiRenderer { use_color }.render(&report));
        }
    }
}

fn list_namespace(namespace: Namespace) {
    let Some(table) = table::for_namespace(namespace) else {
        eprintln!("{namespace} is resolved by the host and has no built-in table");
        std::process::exit(USAGE_ERROR);
    };
    for entry in table.sorted() {
        println!("0x{:08X}  {}", entry.code, entry.name);
    }
}

fn setup_tracing(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
