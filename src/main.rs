use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use tracing::{Level, debug};

use text_compare::compare::{Algorithm, Comparison};
use text_compare::config::Config;
use text_compare::export::{export_report, write_stats};
use text_compare::render::{RenderStyle, render};
use text_compare::saver::save_report;

#[derive(Parser)]
#[command(name = "text-compare")]
#[command(about = "Compare two texts word by word", long_about = None)]
struct Cli {
    /// Original text file ("-" for stdin)
    original: String,

    /// Modified text file ("-" for stdin)
    modified: String,

    /// Treat both arguments as literal text instead of paths
    #[arg(long)]
    text: bool,

    /// Tokens to scan ahead at a mismatch
    #[arg(short = 'w', long)]
    lookahead: Option<usize>,

    /// Use a minimal Myers diff instead of the greedy pass
    #[arg(long)]
    myers: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Render)]
    format: OutputFormat,

    /// Never use colors
    #[arg(long)]
    no_color: bool,

    /// Leave the source texts out of reports
    #[arg(long)]
    no_sources: bool,

    /// Leave statistics out of reports
    #[arg(long)]
    no_stats: bool,

    /// Also write the report to a timestamped file
    #[arg(long)]
    save: bool,

    /// Directory for saved reports
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Settings file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Inline highlighted diff and a summary line
    Render,
    /// Counts and similarity only
    Stats,
    /// Plain-text report
    Export,
    /// Segments and statistics as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("load settings from {}", path.display()))?,
        None => Config::load_or_default(),
    };
    apply_overrides(&mut config, &cli);

    let (original, modified) = read_inputs(&cli)?;
    if original.is_empty() && modified.is_empty() {
        anyhow::bail!("nothing to compare: both texts are empty");
    }

    let options = config.compare_options();
    let comparison = Comparison::new(original, modified, &options);
    debug!(stats = ?comparison.stats, "comparison done");

    let export_options = config.settings.export;
    // One report (and one timestamp) for both stdout and --save
    let report = (cli.format == OutputFormat::Export || cli.save)
        .then(|| export_report(&comparison, &export_options, &Local::now()));
    let use_color = config.settings.color && std::io::stdout().is_terminal();

    match cli.format {
        OutputFormat::Render => {
            let style = if use_color {
                RenderStyle::Color
            } else {
                RenderStyle::Plain
            };
            println!("{}", render(&comparison.segments, style));
            let stats = &comparison.stats;
            println!(
                "+{} -{} ~{} {}% similar",
                stats.additions,
                stats.deletions,
                stats.changes,
                stats.similarity()
            );
        }
        OutputFormat::Stats => {
            let mut out = String::new();
            write_stats(&mut out, &comparison.stats);
            print!("{}", out);
        }
        OutputFormat::Export => {
            if let Some(report) = &report {
                print!("{}", report);
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&comparison).context("serialize comparison json")?
            );
        }
    }

    if let Some(report) = report.as_deref().filter(|_| cli.save) {
        let dir = config.data_dir();
        let path = save_report(&dir, report)
            .with_context(|| format!("save report into {}", dir.display()))?;
        eprintln!("Saved report to {}", path.display());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    let settings = &mut config.settings;
    if let Some(lookahead) = cli.lookahead {
        settings.lookahead = lookahead;
    }
    if cli.myers {
        settings.algorithm = Algorithm::Myers;
    }
    if cli.no_color {
        settings.color = false;
    }
    if cli.no_sources {
        settings.export.include_sources = false;
    }
    if cli.no_stats {
        settings.export.include_stats = false;
    }
    if let Some(dir) = &cli.out_dir {
        settings.output_dir = Some(dir.clone());
    }
}

fn read_inputs(cli: &Cli) -> Result<(String, String)> {
    if cli.text {
        return Ok((cli.original.clone(), cli.modified.clone()));
    }
    if cli.original == "-" && cli.modified == "-" {
        anyhow::bail!("only one of the two inputs can be read from stdin");
    }
    Ok((read_input(&cli.original)?, read_input(&cli.modified)?))
}

fn read_input(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        return Ok(buf);
    }
    let path = Path::new(arg);
    std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
