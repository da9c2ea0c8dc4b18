//! Gauge CLI
//!
//! Usage:
//! - gauge <value> <symbol> [--kind <kind>] [--to <symbol>] [--mix <a:b:..>] [--json]
//! - gauge units [<kind>]
//!
//! Environment:
//! - RUST_LOG: tracing filter directives (default info), logs go to stderr
//! - GAUGE_CONFIG: path to a JSON `UnitsConfig`
//! - GAUGE_LOOKUP: strict | fallback
//! - GAUGE_PRECISION: decimal places for printed values

use std::env;
use std::fs;
use std::process::ExitCode;
use std::str::FromStr;
use clap::{Args, Parser, Subcommand};
use gauge_core::{Kind, LookupPolicy, UnitError, UnitsConfig};
use gauge_units::{AnyQuantity, AnyUnit, MixedUnit, Quantity, QuantityFormat, Unit};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "gauge", version)]
#[command(about = "Convert quantities between units", long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
enum Commands {
    /// List known units, optionally for one kind
    Units {
        #[arg(value_parser = parse_kind)]
        kind: Option<Kind>,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Default)]
struct ConvertArgs {
    /// Value and unit symbol, e.g. `30 m` or `-40 °F`
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    quantity: Vec<String>,

    /// Kind used to resolve the symbol
    #[arg(long, value_parser = parse_kind)]
    kind: Option<Kind>,

    /// Target unit symbol
    #[arg(long, value_name = "SYMBOL")]
    to: Option<String>,

    /// Split the result across units, largest first
    #[arg(long, value_name = "A:B:..")]
    mix: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_kind(name: &str) -> Result<Kind, String> {
    Kind::from_name(name).ok_or_else(|| format!("unknown kind '{}'", name))
}

/// Log filter from `RUST_LOG`-style directives, `info` when absent or invalid
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG))
}

/// Build the configuration: JSON file first, then environment overrides
fn load_config() -> Result<UnitsConfig, UnitError> {
    let mut config = match env::var("GAUGE_CONFIG") {
        Ok(path) => {
            let json = fs::read_to_string(&path)
                .map_err(|e| UnitError::Config(format!("cannot read {}: {}", path, e)))?;
            UnitsConfig::from_json(&json)?
        }
        Err(_) => UnitsConfig::default(),
    };
    if let Ok(lookup) = env::var("GAUGE_LOOKUP") {
        config = config.with_lookup(LookupPolicy::from_name(&lookup)?);
    }
    if let Ok(precision) = env::var("GAUGE_PRECISION") {
        let precision = precision
            .trim()
            .parse()
            .map_err(|_| UnitError::Config(format!("GAUGE_PRECISION must be a whole number, got '{}'", precision)))?;
        config = config.with_precision(precision);
    }
    Ok(config)
}

fn run(cli: &Cli, format: &QuantityFormat) -> Result<String, UnitError> {
    match &cli.command {
        Some(Commands::Units { kind }) => Ok(list_units(*kind)),
        None => convert(&cli.convert, format),
    }
}

fn list_units(kind: Option<Kind>) -> String {
    let kinds: Vec<Kind> = match kind {
        Some(kind) => vec![kind],
        None => Kind::ALL.to_vec(),
    };
    let mut lines = Vec::new();
    for kind in kinds {
        lines.push(format!("{}:", kind));
        for unit in AnyUnit::units_of(kind) {
            let marker = if unit.is_system_unit() { " (reference)" } else { "" };
            lines.push(format!(
                "  {:<8} {:<12} {}{}",
                unit.symbol(),
                unit.name(),
                unit.description(),
                marker
            ));
        }
    }
    lines.join("\n")
}

fn parse_input(args: &ConvertArgs, format: &QuantityFormat) -> Result<AnyQuantity, UnitError> {
    let text = args.quantity.join(" ");
    match args.kind {
        None => format.parse_quantity(&text),
        Some(kind) => {
            let (number, symbol) = text.trim().split_once(char::is_whitespace).ok_or_else(|| {
                UnitError::parse_error(format!("expected '<value> <symbol>', got '{}'", text))
            })?;
            let value = f64::from_str(number)
                .map_err(|_| UnitError::parse_error(format!("invalid number '{}'", number)))?;
            let unit = AnyUnit::by_symbol_in(kind, symbol, format.config().lookup)?;
            Ok(Quantity::new(value, unit))
        }
    }
}

fn convert(args: &ConvertArgs, format: &QuantityFormat) -> Result<String, UnitError> {
    let lookup = format.config().lookup;
    let mut quantity = parse_input(args, format)?;
    tracing::debug!(input = %quantity, scale = %quantity.scale(), "parsed quantity");

    if let Some(symbol) = &args.to {
        let target = AnyUnit::by_symbol_in(quantity.kind(), symbol, lookup)?;
        quantity = quantity.to(target)?;
    }

    if let Some(layout) = &args.mix {
        let mut symbols = layout.split(':');
        let upper = next_unit(&mut symbols, quantity.kind(), lookup)?;
        let lower = next_unit(&mut symbols, quantity.kind(), lookup)?;
        let mut mixed = MixedUnit::new(upper, lower)?;
        for symbol in symbols {
            mixed = mixed.mix(AnyUnit::by_symbol_in(quantity.kind(), symbol, lookup)?)?;
        }
        let parts = mixed.decompose(&quantity)?;
        if args.json {
            return Ok(serde_json::to_string(&parts)?);
        }
        let rendered: Vec<String> = parts.iter().map(|q| format.format(q)).collect();
        return Ok(rendered.join(" "));
    }

    if args.json {
        return Ok(serde_json::to_string(&quantity)?);
    }
    Ok(format.format(&quantity))
}

fn next_unit<'a>(symbols: &mut impl Iterator<Item = &'a str>, kind: Kind, lookup: LookupPolicy) -> Result<AnyUnit, UnitError> {
    let symbol = symbols
        .next()
        .ok_or_else(|| UnitError::InvalidMixedUnit("a mixed unit needs at least two units".to_string()))?;
    AnyUnit::by_symbol_in(kind, symbol, lookup)
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = load_config().and_then(|config| {
        tracing::debug!(?config, "loaded configuration");
        let format = QuantityFormat::new(config);
        run(&cli, &format)
    });

    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = e.code(), "{}", e);
            eprintln!("error [{}]: {}", e.code(), e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse_line(line: &str) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("gauge").chain(line.split(' ')))
    }

    fn run_line(line: &str) -> Result<String, UnitError> {
        let cli = parse_line(line).map_err(|e| UnitError::parse_error(e.to_string()))?;
        run(&cli, &QuantityFormat::default())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_command() {
        let cli = parse_line("30 m --kind time --to s").unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(
            cli.convert,
            ConvertArgs {
                quantity: vec!["30".to_string(), "m".to_string()],
                kind: Some(Kind::Time),
                to: Some("s".to_string()),
                mix: None,
                json: false,
            }
        );
        let cli = parse_line("units length").unwrap();
        assert_eq!(cli.command, Some(Commands::Units { kind: Some(Kind::Length) }));
        assert_eq!(parse_line("units").unwrap().command, Some(Commands::Units { kind: None }));
    }

    #[test]
    fn test_parse_command_errors() {
        assert!(parse_line("1 s --bogus").is_err());
        assert!(parse_line("1 s --to").is_err());
        assert!(parse_line("1 s --kind mass").is_err());
        assert!(parse_line("units mass").is_err());
        assert!(Cli::try_parse_from(["gauge"]).is_err());
    }

    #[test]
    fn test_negative_value() {
        let cli = parse_line("-40 °C --to °F").unwrap();
        assert_eq!(cli.convert.quantity, vec!["-40".to_string(), "°C".to_string()]);
        assert_eq!(run_line("-2 h --to m").unwrap(), "-120.0 m");
    }

    #[test]
    fn test_convert() {
        assert_eq!(run_line("30 m --kind time --to s").unwrap(), "1800.0 s");
        assert_eq!(run_line("0 °C --to K").unwrap(), "273.15 K");
        assert_eq!(run_line("2 h").unwrap(), "2.0 h");
    }

    #[test]
    fn test_ambiguous_symbol_needs_kind() {
        let err = run_line("30 m --to s").unwrap_err();
        assert_eq!(err.code(), gauge_core::codes::AMBIGUOUS_SYMBOL);
    }

    #[test]
    fn test_mix() {
        assert_eq!(run_line("3725 s --mix h:m:s").unwrap(), "1.0 h 2.0 m 5.0 s");
        let err = run_line("3725 s --mix h").unwrap_err();
        assert_eq!(err.code(), gauge_core::codes::INVALID_MIXED_UNIT);
    }

    #[test]
    fn test_json_output() {
        let json = run_line("5 km --json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["value"], 5.0);
        assert_eq!(value["scale"], "absolute");
    }

    #[test]
    fn test_cross_kind_conversion_fails() {
        let err = run_line("1 h --to K").unwrap_err();
        assert_eq!(err.code(), gauge_core::codes::UNKNOWN_SYMBOL);
    }

    #[test]
    fn test_list_units() {
        let listing = list_units(Some(Kind::Temperature));
        assert!(listing.starts_with("temperature:"));
        assert!(listing.contains("°F"));
        assert!(listing.contains("(reference)"));
    }

    #[test]
    fn test_log_filter() {
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("gauge_units=debug")).to_string(), "gauge_units=debug");
        assert_eq!(log_filter(Some("gauge_units=loud")).to_string(), "info");
    }
}
