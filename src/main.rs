use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::{debug, info};

use rectangles::batch::BatchEvaluator;
use rectangles::cli::{BatchArgs, CliArgs, Command, EvalArgs, ReportFormat};
use rectangles::config::LoadedConfig;
use rectangles::input::{Coordinates, load_coordinates};
use rectangles::output::{
    batch_to_json, error_to_json, relationship_to_json, relationship_to_text, write_report,
};
use rectangles::relation::evaluate;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    match cli.command {
        Command::Eval(args) => run_eval(&args),
        Command::Batch(args) => run_batch(&args),
    }
}

fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_eval(args: &EvalArgs) -> Result<()> {
    init_logging(args.common.verbose);

    let (first, second) = args
        .corners()
        .ok_or_else(|| anyhow!("each rectangle needs exactly four coordinates"))?;
    let coordinates = Coordinates::from_corners(first, second);
    let output = args.common.output.as_deref();

    let (a, b) = match coordinates.rectangles() {
        Ok(pair) => pair,
        Err(err) => {
            if args.format == ReportFormat::Json {
                write_report(&error_to_json(&err, args.common.pretty)?, output)?;
            }
            let category = err.category();
            return Err(err).context(category);
        }
    };

    let relationship = evaluate(a, b);

    let report = match args.format {
        ReportFormat::Json => relationship_to_json(&relationship, args.common.pretty)?,
        ReportFormat::Text => relationship_to_text(&relationship),
    };
    write_report(&report, output)?;

    if let Some(path) = output {
        info!("Saved {}", path.display());
    }

    Ok(())
}

fn run_batch(args: &BatchArgs) -> Result<()> {
    let merged = merge_config_with_args(args)?;

    init_logging(args.common.verbose);

    info!("Rectangles v{}", env!("CARGO_PKG_VERSION"));
    debug!("Reading {} input paths", merged.input.len());

    let sets = load_coordinates(&merged.input, merged.base_dir.as_deref())?;
    info!("Loaded {} rectangle pairs", sets.len());

    let entries = BatchEvaluator::new()
        .fail_fast(merged.fail_fast)
        .run(&sets)?;

    let report = batch_to_json(&entries, merged.pretty)?;
    write_report(&report, merged.output.as_deref())?;

    if let Some(path) = &merged.output {
        info!("Saved {}", path.display());
    }

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
struct MergedConfig {
    input: Vec<PathBuf>,
    /// Config directory, used to name entries read through the config
    base_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
    fail_fast: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &BatchArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    // Determine inputs: CLI args override config
    let (input, base_dir) = if !args.input.is_empty() {
        (args.input.clone(), None)
    } else if let Some(ref lc) = loaded_config {
        let inputs = lc
            .resolve_inputs()
            .context("failed to resolve input files from config")?;
        (inputs, Some(lc.config_dir.clone()))
    } else {
        // This shouldn't happen due to clap's required_unless_present
        (Vec::new(), None)
    };

    // Output: CLI > config > stdout
    let output = args
        .common
        .output
        .clone()
        .or_else(|| loaded_config.as_ref().and_then(LoadedConfig::resolve_output));

    // Boolean flags: CLI presence sets them to true, otherwise use config
    let pretty = args.common.pretty
        || loaded_config
            .as_ref()
            .map(|lc| lc.config.pretty)
            .unwrap_or(false);

    let fail_fast = args.fail_fast
        || loaded_config
            .as_ref()
            .map(|lc| lc.config.fail_fast)
            .unwrap_or(false);

    Ok(MergedConfig {
        input,
        base_dir,
        output,
        pretty,
        fail_fast,
    })
}
