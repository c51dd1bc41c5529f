//! footprint CLI: estimate a monthly carbon footprint from the command line.

mod input_file;
mod render;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use footprint_core::category::ScalarCategory;
use footprint_core::config::{EstimatorConfig, NonFinitePolicy};
use footprint_core::factors::EmissionFactorTable;
use footprint_core::input::FootprintInput;
use footprint_core::report::Report;
use footprint_core::Estimator;

#[derive(Parser)]
#[command(name = "footprint")]
#[command(about = "Carbon footprint estimator: monthly emissions by category", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate emissions from flags and/or an input file
    Calc {
        /// YAML or JSON input document (flags override its values)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Electricity use, kWh per month
        #[arg(long, allow_hyphen_values = true)]
        electricity: Option<String>,

        /// Natural gas use, therms per month
        #[arg(long, allow_hyphen_values = true)]
        gas: Option<String>,

        /// Vehicle mileage, miles per month
        #[arg(long, allow_hyphen_values = true)]
        vehicle: Option<String>,

        /// Flight hours per month
        #[arg(long, allow_hyphen_values = true)]
        flights: Option<String>,

        /// Waste, kg per month
        #[arg(long, allow_hyphen_values = true)]
        waste: Option<String>,

        /// Diet: meat, mixed, vegetarian, or vegan
        #[arg(long)]
        diet: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Non-finite handling: reject or clamp (overrides config)
        #[arg(long, value_name = "POLICY")]
        non_finite: Option<NonFinitePolicy>,

        /// Tips shown per category (overrides config)
        #[arg(long)]
        tips: Option<usize>,
    },

    /// List the emission factor table
    Factors,

    /// Validate an input document (decoding and diet check)
    Validate {
        /// YAML or JSON input document
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

struct CalcArgs {
    input: Option<PathBuf>,
    fields: [(ScalarCategory, Option<String>); 5],
    diet: Option<String>,
    format: Format,
    non_finite: Option<NonFinitePolicy>,
    tips: Option<usize>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Calc {
            input,
            electricity,
            gas,
            vehicle,
            flights,
            waste,
            diet,
            format,
            non_finite,
            tips,
        } => calc(CalcArgs {
            input,
            fields: [
                (ScalarCategory::Electricity, electricity),
                (ScalarCategory::Gas, gas),
                (ScalarCategory::Vehicle, vehicle),
                (ScalarCategory::Flights, flights),
                (ScalarCategory::Waste, waste),
            ],
            diet,
            format,
            non_finite,
            tips,
        }),
        Commands::Factors => {
            print!("{}", render::factors(EmissionFactorTable::builtin()));
            Ok(())
        }
        Commands::Validate { input } => validate(&input).map(|_| println!("✓ Input is valid")),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        for s in e.suggestions() {
            eprintln!("  hint: {}", s);
        }
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn calc(args: CalcArgs) -> footprint_core::Result<()> {
    let cfg = EstimatorConfig::try_from_env()?;
    print!("{}", run_calc(args, cfg)?);
    Ok(())
}

/// Estimate and render, with `env_cfg` as the base configuration.
fn run_calc(args: CalcArgs, env_cfg: EstimatorConfig) -> footprint_core::Result<String> {
    let input = build_input(args.input.as_deref(), args.fields, args.diet.as_deref())?;
    let cfg = apply_overrides(env_cfg, args.non_finite, args.tips)?;

    let estimator = Estimator::new(EmissionFactorTable::builtin(), cfg);
    let result = estimator.estimate(&input)?;
    let table = estimator.table();
    let report = Report::build(&result, table, estimator.config().tip_count);

    Ok(match args.format {
        Format::Text => render::text(&report),
        Format::Json => format!("{}\n", render::json(&input, &result, &report, table)?),
    })
}

/// File values first, then any flags given on the command line.
fn build_input(
    path: Option<&Path>,
    fields: [(ScalarCategory, Option<String>); 5],
    diet: Option<&str>,
) -> footprint_core::Result<FootprintInput> {
    let mut input = match path {
        Some(path) => input_file::load_input(path)?,
        None => FootprintInput::default(),
    };
    for (category, value) in fields {
        if let Some(raw) = value {
            input = input.with(category, raw);
        }
    }
    if let Some(d) = diet {
        input = input.with_diet(d.parse()?);
    }
    Ok(input)
}

fn apply_overrides(
    mut cfg: EstimatorConfig,
    non_finite: Option<NonFinitePolicy>,
    tips: Option<usize>,
) -> footprint_core::Result<EstimatorConfig> {
    if let Some(p) = non_finite {
        cfg.non_finite = p;
    }
    if let Some(n) = tips {
        cfg.tip_count = n;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn validate(path: &Path) -> footprint_core::Result<FootprintInput> {
    let input = input_file::load_input(path)?;
    tracing::debug!(fingerprint = %input.fingerprint().short(), "input decoded");
    Ok(input)
}
