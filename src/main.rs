//! Jotto Solver - CLI
//!
//! Interactive assistant and auto-solver for the letter-matching game Jotto.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jotto_solver::{
    commands::{
        SolveConfig, analyze_word, run_benchmark, run_play, solve::DEFAULT_MAX_TURNS, solve_word,
    },
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{GuessAdvisor, Scenario, SolverConfig},
    wordlists::{Dictionary, loader},
};
use log::{debug, info};
use std::io;

#[derive(Parser)]
#[command(
    name = "jotto_solver",
    about = "Jotto solver using letter-set deduction and minimax probe selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length; play mode asks when omitted, benchmark defaults to 5
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Dictionary file, one word per line (default: embedded list)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Scoring scenario: worst (default) or average
    #[arg(short, long, global = true, default_value = "worst")]
    scenario: String,

    /// Maximum probes simulated per suggestion
    #[arg(long, global = true, default_value = "100")]
    samples: usize,

    /// Seed for reproducible sampling
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console mode (default)
    Play,

    /// Auto-play against a known secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts and scores for each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show how a probe splits the candidate set
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Load the dictionary from `--dictionary`, or the embedded list
fn load_dictionary(path: Option<&str>) -> Result<Dictionary> {
    let dictionary = match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to read dictionary '{path}'"))?,
        None => loader::embedded(),
    };
    info!("Dictionary loaded: {} words", dictionary.len());
    debug!("Words per length: {:?}", dictionary.length_histogram());
    Ok(dictionary)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    let advisor = GuessAdvisor::new(SolverConfig {
        scenario: Scenario::from_name(&cli.scenario),
        sample_size: cli.samples,
        seed: cli.seed,
    });

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, &advisor, cli.length),
        Commands::Solve { word, verbose } => {
            run_solve_command(&word, verbose, &dictionary, &advisor)
        }
        Commands::Analyze { word } => run_analyze_command(&word, &dictionary, &advisor),
        Commands::Benchmark { count } => {
            run_benchmark_command(count, cli.length.unwrap_or(5), &dictionary, &advisor)
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    advisor: &GuessAdvisor,
    length: Option<usize>,
) -> Result<()> {
    let stdin = io::stdin();
    let end = run_play(dictionary, advisor, length, stdin.lock(), io::stdout())?;
    info!("Game finished: {end:?}");
    Ok(())
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    dictionary: &Dictionary,
    advisor: &GuessAdvisor,
) -> Result<()> {
    let config = SolveConfig::new(word.to_string());
    let result = solve_word(config, dictionary, advisor)
        .with_context(|| format!("Cannot solve '{word}'"))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(word: &str, dictionary: &Dictionary, advisor: &GuessAdvisor) -> Result<()> {
    let result = analyze_word(word, dictionary, advisor)
        .with_context(|| format!("Cannot analyze '{word}'"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    length: usize,
    dictionary: &Dictionary,
    advisor: &GuessAdvisor,
) -> Result<()> {
    println!("Running benchmark on {count} random {length}-letter words...");

    let result = run_benchmark(dictionary, advisor, length, count, DEFAULT_MAX_TURNS)
        .context("Benchmark failed")?;
    print_benchmark_result(&result);
    Ok(())
}
