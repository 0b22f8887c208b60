mod cli;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, GenerateArgs, OutputFormat};
use log::info;
use staffgen::config::StaffgenConfig;
use staffgen::ui::{Report, to_json};
use staffgen::{
    EmployeeRecord, GenerationRequest, Pipeline, RecordGenerator, StatisticsEngine, SystemClock,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => StaffgenConfig::load_from(path)?,
        None => StaffgenConfig::load()?,
    };

    match cli.command {
        Command::Run(args) => {
            let generator = build_generator(&args, &config)?;
            let request = resolve_request(&args, &config)?;
            let result =
                Pipeline::new(generator, StatisticsEngine::new(SystemClock)).run(&request)?;
            match cli.format {
                OutputFormat::Text => print!("{}", Report::default().statistics(&result)),
                OutputFormat::Json => println!("{}", to_json(&result)?),
            }
        }
        Command::Generate(args) => {
            let mut generator = build_generator(&args, &config)?;
            let request = resolve_request(&args, &config)?;
            let records = generator.generate(&request)?;
            match cli.format {
                OutputFormat::Text => print!("{}", Report::default().records(&records)),
                OutputFormat::Json => println!("{}", to_json(&records)?),
            }
        }
        Command::Summarize { input } => {
            let records = read_records(&input)?;
            let result = StatisticsEngine::new(SystemClock).summarize(&records);
            match cli.format {
                OutputFormat::Text => print!("{}", Report::default().statistics(&result)),
                OutputFormat::Json => println!("{}", to_json(&result)?),
            }
        }
    }

    Ok(())
}

/// Generator seeded from the flag, then the configuration, then OS entropy.
fn build_generator(args: &GenerateArgs, config: &StaffgenConfig) -> Result<RecordGenerator> {
    let generator = match args.seed.or(config.seed) {
        Some(seed) => {
            info!("using seed {seed}");
            RecordGenerator::seeded(seed)
        }
        None => RecordGenerator::from_entropy(),
    };
    Ok(generator.with_tables(config.name_tables()?))
}

/// Request from `--request`, or from flags layered over the configuration.
fn resolve_request(args: &GenerateArgs, config: &StaffgenConfig) -> Result<GenerationRequest> {
    if let Some(path) = &args.request {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
        return Ok(GenerationRequest::try_from(&value)?);
    }

    let base = config.request();
    Ok(GenerationRequest::new(
        args.count.unwrap_or(base.count),
        args.min_age.unwrap_or(base.age_range.min_age),
        args.max_age.unwrap_or(base.age_range.max_age),
    ))
}

fn read_records(path: &Path) -> Result<Vec<EmployeeRecord>> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing records in {}", path.display()))
}
