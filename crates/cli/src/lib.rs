use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use framedoc_classifier::{Generator, GeneratorConfig, RunReport, MANUAL_RULES};
use serde::Serialize;
use std::path::PathBuf;

mod output;

#[derive(Parser)]
#[command(name = "framedoc")]
#[command(about = "Sort UI frame dumps into documented YAML categories", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// TOML file with generator settings (flags win over file values)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify the dump and write one YAML file per category
    Generate(RunArgs),

    /// Show the files a run would write, without writing anything
    Plan(RunArgs),

    /// List the manual category rules in priority order
    Rules(RulesArgs),
}

#[derive(Args, Clone, Default)]
struct RunArgs {
    /// Frame dump to read
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory receiving the YAML files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Minimum size of an automatic prefix group
    #[arg(long)]
    min_group_size: Option<usize>,

    /// Maximum entries per YAML file
    #[arg(long)]
    max_entries: Option<usize>,

    /// Print the report as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RulesArgs {
    /// Print the rule table as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RuleView<'a> {
    priority: usize,
    name: &'a str,
    description: &'a str,
    patterns: &'a [&'a str],
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON consumers
    let json_output = match &cli.command {
        Commands::Generate(args) | Commands::Plan(args) => args.json,
        Commands::Rules(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match &cli.command {
        Commands::Generate(args) => {
            let generator = build_generator(cli.config.as_ref(), args)?;
            let report = generator.run().with_context(|| {
                format!(
                    "Failed to generate frame docs from {}",
                    generator.config().input.display()
                )
            })?;
            emit_report(&report, args.json)
        }
        Commands::Plan(args) => {
            let generator = build_generator(cli.config.as_ref(), args)?;
            let plan = generator.plan().with_context(|| {
                format!("Failed to plan frame docs from {}", generator.config().input.display())
            })?;
            let report = generator.report(&plan, false);
            emit_report(&report, args.json)
        }
        Commands::Rules(args) => {
            let rules: Vec<RuleView<'_>> = MANUAL_RULES
                .iter()
                .enumerate()
                .map(|(idx, rule)| RuleView {
                    priority: idx + 1,
                    name: rule.name,
                    description: rule.description,
                    patterns: rule.patterns,
                })
                .collect();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&rules)?);
            } else {
                print!("{}", output::render_rules(MANUAL_RULES));
            }
            Ok(())
        }
    }
}

/// Defaults, then the config file, then explicit flags
fn resolve_config(config_path: Option<&PathBuf>, args: &RunArgs) -> Result<GeneratorConfig> {
    let mut config = match config_path {
        Some(path) => GeneratorConfig::from_toml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GeneratorConfig::default(),
    };

    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(min) = args.min_group_size {
        config.min_group_size = min;
    }
    if let Some(max) = args.max_entries {
        config.max_entries_per_file = max;
    }

    log::debug!(
        "config: input={} output_dir={} min_group_size={} max_entries_per_file={}",
        config.input.display(),
        config.output_dir.display(),
        config.min_group_size,
        config.max_entries_per_file
    );
    Ok(config)
}

fn build_generator(config_path: Option<&PathBuf>, args: &RunArgs) -> Result<Generator> {
    let config = resolve_config(config_path, args)?;
    Generator::new(config).context("Invalid generator configuration")
}

fn emit_report(report: &RunReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", output::render_report(report));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn flags_override_config_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("framedoc.toml");
        fs::write(&path, "min_group_size = 4\nmax_entries_per_file = 50\n").unwrap();

        let args = RunArgs {
            max_entries: Some(20),
            ..RunArgs::default()
        };
        let config = resolve_config(Some(&path), &args).unwrap();
        assert_eq!(config.min_group_size, 4);
        assert_eq!(config.max_entries_per_file, 20);
        assert_eq!(config.output_dir, PathBuf::from(framedoc_classifier::DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("absent.toml");
        assert!(resolve_config(Some(&path), &RunArgs::default()).is_err());
    }

    #[test]
    fn zero_cap_is_rejected() {
        let args = RunArgs {
            max_entries: Some(0),
            ..RunArgs::default()
        };
        assert!(build_generator(None, &args).is_err());
    }
}
