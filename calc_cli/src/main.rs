//! # Multicalc CLI Application
//!
//! Terminal front end for the Multicalc calculators.
//!
//! ```text
//! calc_cli [--json] [--config PATH] [COMMAND [key=value ...]]
//! ```
//!
//! Without a command an interactive menu opens. Logs go to stderr so
//! stdout stays clean for `--json` output.

mod interactive;
mod params;
mod prompt;
mod report;

use std::env;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};

use calc_core::formulas::ALL_FORMULAS;
use calc_core::{CalcError, CalculationOutcome, CalculationRequest, Settings};

use crate::params::{Params, COMMAND_USAGE};

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    json: bool,
    config: Option<PathBuf>,
    help: bool,
    command: Option<String>,
    args: Vec<String>,
}

/// Parse flags up to the command word; everything after it belongs to the command.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options> {
    let mut options = Options::default();
    let mut args_iter = args.into_iter();

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "-c" | "--config" => match args_iter.next() {
                Some(path) => options.config = Some(PathBuf::from(path)),
                None => bail!("--config requires a PATH argument"),
            },
            "-h" | "--help" => options.help = true,
            flag if flag.starts_with('-') => bail!("Unknown argument '{}'", flag),
            _ => {
                options.command = Some(arg);
                options.args = args_iter.collect();
                break;
            }
        }
    }
    Ok(options)
}

fn print_usage() {
    println!("calc_cli - Multicalc terminal calculator");
    println!();
    println!("Usage: calc_cli [OPTIONS] [COMMAND [key=value ...]]");
    println!();
    println!("Options:");
    println!("  --json              Print results as JSON");
    println!("  -c, --config PATH   Read settings from PATH");
    println!("  -h, --help          Show this help message");
    println!();
    println!("Commands:");
    println!("  (none)              Interactive menu");
    println!("  basic               Line keypad with history");
    for (command, usage) in COMMAND_USAGE {
        println!("  {:<19} {}", command, usage);
    }
    println!("  dishes              Reference dish catalogue");
    println!("  formulas            Formula index");
    println!("  eval JSON           Evaluate a JSON calculation request");
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
}

fn load_settings(options: &Options) -> Result<Settings> {
    if let Some(path) = &options.config {
        return Settings::load(path).with_context(|| format!("loading settings from {}", path.display()));
    }
    match Settings::discover() {
        Ok(settings) => Ok(settings),
        Err(e) => {
            tracing::warn!(error = %e, "settings rejected, using defaults");
            Ok(Settings::default())
        }
    }
}

fn print_outcome(outcome: &CalculationOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        print!("{}", report::outcome(outcome));
    }
    Ok(())
}

fn run(options: Options) -> Result<()> {
    if options.help {
        print_usage();
        return Ok(());
    }

    let settings = load_settings(&options)?;

    let Some(command) = options.command.as_deref() else {
        return interactive::run_menu(&settings);
    };

    match command {
        "basic" => {
            let stdin = io::stdin();
            interactive::run_keypad(&settings, stdin.lock(), io::stdout())
        }
        "dishes" if options.json => {
            println!("{}", serde_json::to_string_pretty(&calc_core::tables::DISHES)?);
            Ok(())
        }
        "dishes" => {
            print!("{}", report::dishes());
            Ok(())
        }
        "formulas" if options.json => {
            let all: Vec<_> = ALL_FORMULAS
                .iter()
                .map(|f| {
                    let meta = f.metadata();
                    serde_json::json!({
                        "formula": f,
                        "name": meta.name,
                        "category": meta.category,
                        "expression": meta.formula_plain,
                        "reference": meta.reference.short_form(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&all)?);
            Ok(())
        }
        "formulas" => {
            print!("{}", report::formula_index());
            Ok(())
        }
        "eval" => {
            let document = options.args.join(" ");
            if document.trim().is_empty() {
                bail!(CalcError::missing_field("request"));
            }
            let request: CalculationRequest = serde_json::from_str(&document).map_err(CalcError::from)?;
            let outcome = request.evaluate_with(&settings)?;
            // eval always answers in JSON
            print_outcome(&outcome, true)
        }
        other => {
            if !COMMAND_USAGE.iter().any(|(command, _)| *command == other) {
                bail!("Unknown command '{}'. Use --help for usage information", other);
            }
            let params = Params::parse(&options.args)?;
            let Some(request) = params::request_for(other, &params, &settings)? else {
                bail!("Unknown command '{}'. Use --help for usage information", other);
            };
            tracing::debug!(calc_type = request.calc_type(), "one-shot command");
            print_outcome(&request.evaluate_with(&settings)?, options.json)
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    let result = parse_args(env::args().skip(1)).and_then(run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc) = e.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
