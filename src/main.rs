use anyhow::{Result, Context};
use clap::Parser;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::info;

mod config;
mod generator;
mod output;
mod patterns;
mod stats;

use crate::config::Config;
use crate::generator::{GenerationResult, Generator};

/// Wordlist generator for authorized password-policy auditing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path (defaults apply when the file is absent)
    #[arg(short, long, default_value = "dictforge.toml")]
    config: String,

    /// Comma-separated seed words (overrides config)
    #[arg(short, long, value_delimiter = ',')]
    words: Option<Vec<String>>,

    /// File with one username per line to derive extra seed terms from
    #[arg(short, long)]
    usernames: Option<String>,

    /// Output file path (overrides config)
    #[arg(short, long)]
    output: Option<String>,

    /// Max candidates to emit (overrides config)
    #[arg(short, long)]
    max_words: Option<usize>,

    /// Print the first N generated candidates
    #[arg(long)]
    sample: Option<usize>,

    /// Write the statistics record as JSON to this path
    #[arg(long)]
    report: Option<String>,

    /// Write a default config to the --config path and exit
    #[arg(long)]
    init_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose)?;

    display_banner();

    if args.init_config {
        Config::save_default(&args.config)?;
        info!("Wrote default configuration to {}", args.config);
        return Ok(());
    }

    // Load configuration
    let mut config = if Path::new(&args.config).exists() {
        let config = Config::load(&args.config)?;
        info!("Configuration loaded from: {}", args.config);
        config
    } else {
        info!("No config file at {}, using defaults", args.config);
        Config::default()
    };

    // Apply CLI overrides
    if let Some(words) = args.words {
        config.generation.base_words = words;
    }
    if let Some(path) = &args.usernames {
        config.generation.usernames = read_usernames(path)?;
        info!("Loaded {} usernames from {}", config.generation.usernames.len(), path);
    }
    if let Some(output) = args.output {
        config.output.file = output;
    }
    if let Some(max_words) = args.max_words {
        config.generation.max_words = max_words;
    }
    if args.report.is_some() {
        config.output.report = args.report.clone();
    }

    // Generate
    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    spinner.set_message("Generating candidates...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = Generator::generate(&config)?;

    spinner.finish_with_message(format!("Generated {} candidates", result.stats.total));

    // Final statistics
    info!("═══════════════════════════════════════════════");
    info!("WORDLIST STATISTICS:");
    info!("Total candidates: {}", result.stats.total);
    info!("Unique candidates: {}", result.stats.unique);
    info!("Min length: {}", result.stats.min_length);
    info!("Max length: {}", result.stats.max_length);
    info!("Average length: {:.2}", result.stats.average_length);
    info!("═══════════════════════════════════════════════");

    if let Some(count) = args.sample {
        print_sample(&result, count);
    }

    // The CLI owns directory creation; the core only writes the stream.
    if let Some(parent) = Path::new(&config.output.file).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create output directory for {}", config.output.file))?;
        }
    }

    let size = output::save_to_file(&result, &config.output.file)?;
    info!("Wordlist saved to {} ({} bytes)", config.output.file, size);

    if let Some(report_path) = &config.output.report {
        write_report(&result, report_path)?;
    }

    Ok(())
}

fn display_banner() {
    println!("
╔═══════════════════════════════════════════════════════════╗
║                                                           ║
║   DICTFORGE - Wordlist Generator                          ║
║   Candidate passwords for password-policy auditing        ║
║                                                           ║
║   ⚠️  AUTHORIZED TESTING ONLY                             ║
║   Only audit systems you own or have permission to test   ║
║                                                           ║
╚═══════════════════════════════════════════════════════════╝
    ");
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .init();

    Ok(())
}

/// Read seed usernames, one per line, blank lines skipped.
fn read_usernames(path: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read username file: {}", path))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn print_sample(result: &GenerationResult, count: usize) {
    let shown = count.min(result.words.len());
    println!("\nSample candidates ({} of {}):", shown, result.stats.total);
    for (i, word) in result.words.iter().take(count).enumerate() {
        println!("  {:4}. {}", i + 1, word);
    }
    if result.words.len() > count {
        println!("  ... and {} more", result.words.len() - count);
    }
}

fn write_report(result: &GenerationResult, path: &str) -> Result<()> {
    let report = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "statistics": result.stats,
    });

    fs::write(path, serde_json::to_string_pretty(&report)?)
        .context(format!("Failed to write statistics report: {}", path))?;

    info!("Statistics report written to {}", path);
    Ok(())
}
