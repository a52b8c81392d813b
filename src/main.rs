//! Auto Wordle Solver - CLI
//!
//! Enter guesses annotated with their feedback and get the words that still fit.

use anyhow::{Context, Result};
use auto_wordle::{
    commands::{combinations_for_rows, run_interactive, solve_rows},
    config::{DEFAULT_WORD_LEN, DEFAULT_WORKERS, SolverConfig},
    output::{print_combinations_result, print_solve_result},
    solver::Solver,
    wordlists::{Dictionary, loader},
};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "auto_wordle",
    about = "Narrow Wordle answers from annotated guesses (uppercase = correct, x? = misplaced, lowercase = absent)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters in the answer (5-10)
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_WORD_LEN)]
    length: usize,

    /// Number of filter workers spawned per search
    #[arg(short = 'j', long, global = true, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Dictionary file, one word per line (default: output_words.txt next to the binary, else built-in)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Print the dictionary words consistent with the given rows
    Solve {
        /// Annotated rows, e.g. cRAn?e
        #[arg(required = true)]
        rows: Vec<String>,

        /// Also show the admissible letters per position
        #[arg(short, long)]
        verbose: bool,
    },

    /// Count the raw letter combinations allowed by the given rows
    Combos {
        /// Annotated rows, e.g. cRAn?e
        #[arg(required = true)]
        rows: Vec<String>,

        /// List every combination, not just the count
        #[arg(short, long)]
        list: bool,
    },
}

fn load_dictionary(path: Option<&Path>, word_len: usize) -> Result<Dictionary> {
    let dictionary = loader::resolve(path).with_context(|| match path {
        Some(p) => format!("failed to read dictionary {}", p.display()),
        None => format!("failed to read {}", loader::DEFAULT_FILE_NAME),
    })?;

    if dictionary.count_of_len(word_len) == 0 {
        eprintln!(
            "{}",
            format!("Warning: the dictionary has no {word_len}-letter words, searches will find nothing.")
                .yellow()
        );
    }

    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = SolverConfig::new(cli.length, cli.workers)?;
    let dictionary = load_dictionary(cli.wordlist.as_deref(), config.word_len())?;
    let solver = Solver::new(&dictionary, config);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&solver),
        Commands::Solve { rows, verbose } => {
            let result = solve_rows(&solver, &rows)?;
            print_solve_result(&mut io::stdout().lock(), &result, verbose)?;
            Ok(())
        }
        Commands::Combos { rows, list } => {
            let result = combinations_for_rows(&solver, &rows, list)?;
            print_combinations_result(&mut io::stdout().lock(), &result)?;
            Ok(())
        }
    }
}

fn run_play_command(solver: &Solver) -> Result<()> {
    let show_progress = io::stderr().is_terminal();
    run_interactive(solver, io::stdin().lock(), io::stdout().lock(), show_progress)?;
    Ok(())
}
