use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use phobetron::calendar::{FeastCalendar, FIRST_YEAR, LAST_YEAR};
use phobetron::correlation::{
    correlate_events, correlation_stats, group_by_feast, most_significant,
};
use phobetron::fetch::{gather_events, GatherOptions};

const EXIT_SUCCESS: i32 = 0;
const EXIT_NETWORK: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Correlate events against the feast calendar (default if no subcommand)
    Correlate {
        /// Print each correlation with its full reasoning
        #[arg(long)]
        detail: bool,

        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// List feast occurrences from the reference calendar
    Feasts {
        /// Single year to list
        #[arg(long)]
        year: Option<i32>,

        /// First year of a range (defaults to the table start)
        #[arg(long)]
        from: Option<i32>,

        /// Last year of a range (defaults to the table end)
        #[arg(long)]
        to: Option<i32>,
    },
    /// Print summary statistics over the correlations
    Stats,
    /// Write a default config file
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "phobetron")]
#[command(about = "Correlates celestial and terrestrial events against Hebrew feast days", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/phobetron/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Tolerance window in days (overrides config)
    #[arg(long, global = true)]
    tolerance: Option<i64>,

    /// Minimum correlation score to keep (overrides config)
    #[arg(long, global = true)]
    min_score: Option<u8>,

    /// Path to a JSON event list (overrides config)
    #[arg(long, global = true)]
    events: Option<String>,

    /// Use the built-in deterministic event set, no network
    #[arg(long, global = true)]
    mock: bool,

    /// Bypass the feed cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// Delete the feed cache before running
    #[arg(long, global = true)]
    clear_cache: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Correlate {
        detail: false,
        tsv: false,
    });
    let start_time = Instant::now();

    // Init writes the config and exits before anything loads it
    if let Commands::Init = command {
        let path = cli.config.map(PathBuf::from);
        match phobetron::config::write_default_config(path) {
            Ok(written) => {
                println!("Wrote default config to {}", written.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Init error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match phobetron::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = phobetron::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // CLI overrides go through the same range checks as the config
    let tolerance = cli.tolerance.unwrap_or_else(|| config.tolerance_days());
    if !(0..=30).contains(&tolerance) {
        eprintln!("Invalid --tolerance {}: must be between 0 and 30", tolerance);
        std::process::exit(EXIT_CONFIG);
    }
    let min_score = cli.min_score.unwrap_or_else(|| config.min_score());
    if min_score > 100 {
        eprintln!("Invalid --min-score {}: must be between 0 and 100", min_score);
        std::process::exit(EXIT_CONFIG);
    }

    if cli.clear_cache {
        let cache_path = phobetron::sources::cache::get_cache_path();
        if let Err(e) = phobetron::sources::cache::clear_cache(&cache_path) {
            eprintln!("Cache error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        if cli.verbose {
            eprintln!("Cleared feed cache at {}", cache_path.display());
        }
    }

    let calendar = FeastCalendar::all();
    let use_colors = phobetron::output::should_use_colors();

    match command {
        Commands::Feasts { year, from, to } => {
            let (start, end) = match year {
                Some(y) => (y, y),
                None => (from.unwrap_or(FIRST_YEAR), to.unwrap_or(LAST_YEAR)),
            };
            if start > end {
                eprintln!("Invalid year range: {} > {}", start, end);
                std::process::exit(EXIT_CONFIG);
            }
            let range_calendar = FeastCalendar::for_years(start, end);
            println!(
                "{}",
                phobetron::output::format_feast_list(range_calendar.occurrences(), use_colors)
            );
            std::process::exit(EXIT_SUCCESS);
        }
        command => {
            let opts = GatherOptions {
                use_mock: cli.mock,
                events_file: cli.events.map(PathBuf::from),
                no_cache: cli.no_cache,
                verbose: cli.verbose,
            };

            let events = match gather_events(&config, &opts).await {
                Ok(events) => events,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_NETWORK);
                }
            };

            if cli.verbose {
                eprintln!(
                    "Correlating {} events (tolerance {}d, min score {})",
                    events.len(),
                    tolerance,
                    min_score
                );
            }

            let correlations = correlate_events(&events, &calendar, tolerance, min_score);

            match command {
                Commands::Correlate { detail, tsv } => {
                    if tsv {
                        let output = phobetron::output::format_tsv(&correlations);
                        if !output.is_empty() {
                            println!("{}", output);
                        }
                    } else if detail {
                        for correlation in &correlations {
                            println!(
                                "{}",
                                phobetron::output::format_correlation_detail(
                                    correlation,
                                    use_colors
                                )
                            );
                            println!();
                        }
                        if correlations.is_empty() {
                            println!("No correlations found.");
                        }
                    } else {
                        println!(
                            "{}",
                            phobetron::output::format_correlation_table(&correlations, use_colors)
                        );
                    }
                }
                Commands::Stats => {
                    let stats = correlation_stats(&correlations);
                    println!("{}", phobetron::output::format_stats(&stats, use_colors));

                    if let Some(best) = most_significant(&correlations) {
                        println!();
                        println!("Most significant:");
                        println!(
                            "{}",
                            phobetron::output::format_correlation_detail(best, use_colors)
                        );
                    }

                    let groups = group_by_feast(&correlations);
                    if cli.verbose && !groups.is_empty() {
                        eprintln!();
                        for (feast, group) in &groups {
                            let top = group.iter().map(|c| c.score).max().unwrap_or(0);
                            eprintln!("  {}: {} correlations, top score {}", feast, group.len(), top);
                        }
                    }
                }
                Commands::Feasts { .. } | Commands::Init => unreachable!(),
            }

            if cli.verbose {
                eprintln!();
                eprintln!(
                    "Total: {} correlations in {:?}",
                    correlations.len(),
                    start_time.elapsed()
                );
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
