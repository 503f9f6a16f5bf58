//! Wordle assistive solver - CLI
//!
//! Drives the library's `SolverCore` session façade: solve a target word,
//! analyze a guess's entropy, benchmark/test-all over the answer list, or run
//! a line-based interactive mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_core_solver::{
    commands::{
        analyze_word, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
        solve_word, SolveConfig,
    },
    core::WordSet,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::SolverCore,
    wordlists::loader::{load_wordset_from_file, wordset_from_slice},
    wordlists::{ALLOWED, ANSWERS},
};

#[derive(Parser)]
#[command(
    name = "wordle_core_solver",
    about = "Wordle assistive solver using information-theoretic guess selection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guess-list source: 'all' (default), 'answers' (answers-only, demonstrates
    /// the exploration paradox), or a path to a custom word-list file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Reject observed guesses that are not in the configured guess list
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based interactive solver
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Analyze the entropy of a specific guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark solver performance over a sample of the answer list
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test the solver against every word in the answer list
    TestAll {
        /// Limit the number of words tested
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the (guess list, answer list) pair for the configured `-w` mode.
///
/// - "all": the full embedded guess list for guessing, embedded answers as candidates.
/// - "answers": the answer list used for both roles (demonstrates the exploration paradox).
/// - any other value: a custom file, loaded and validated per the external word-list format.
fn load_wordlists(wordlist_mode: &str) -> Result<(WordSet, WordSet)> {
    match wordlist_mode {
        "all" => Ok((wordset_from_slice(ALLOWED), wordset_from_slice(ANSWERS))),
        "answers" => Ok((wordset_from_slice(ANSWERS), wordset_from_slice(ANSWERS))),
        path => {
            let guess_list =
                load_wordset_from_file(path).with_context(|| format!("loading {path}"))?;
            Ok((guess_list, wordset_from_slice(ANSWERS)))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (guess_list, answer_list) = load_wordlists(&cli.wordlist)?;
    log::info!(
        "loaded {} guesses, {} answers (strict={})",
        guess_list.len(),
        answer_list.len(),
        cli.strict
    );
    let solver = SolverCore::new(guess_list, answer_list, cli.strict)
        .map_err(|e| anyhow::anyhow!(e))?;

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => run_simple(&solver).map_err(|e| anyhow::anyhow!(e)),
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, &solver),
        Commands::Analyze { word } => run_analyze_command(&word, &solver),
        Commands::Benchmark { count } => {
            run_benchmark_command(count, &solver);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(limit, &solver);
            Ok(())
        }
    }
}

fn run_solve_command(word: &str, verbose: bool, solver: &SolverCore) -> Result<()> {
    let config = SolveConfig::new(word.to_string());
    let result = solve_word(config, solver).map_err(|e| anyhow::anyhow!(e))?;
    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(word: &str, solver: &SolverCore) -> Result<()> {
    let answers: Vec<_> = solver.answer_list().iter().cloned().collect();
    let result =
        analyze_word(word, solver.guess_list(), &answers).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(count: usize, solver: &SolverCore) {
    println!("Running benchmark on {count} words...");
    let targets: Vec<String> = solver
        .answer_list()
        .iter()
        .take(count)
        .map(|w| w.text().to_string())
        .collect();
    let result = run_benchmark(solver, &targets);
    print_benchmark_result(&result);
}

fn run_test_all_command(limit: Option<usize>, solver: &SolverCore) {
    println!("\n{}", "=".repeat(70));
    println!(" Comprehensive Wordle Solver Test ");
    println!("{}", "=".repeat(70));
    println!("\nTesting against {} possible answers", solver.answer_count());
    println!();

    let targets: Vec<String> = solver
        .answer_list()
        .iter()
        .map(|w| w.text().to_string())
        .collect();
    let stats = run_test_all(solver, &targets, limit);
    print_test_all_statistics(&stats);
}
