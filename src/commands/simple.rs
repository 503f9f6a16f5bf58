//! Line-based interactive CLI mode, driving the session façade directly.

use crate::core::Pattern;
use crate::solver::{SolverCore, SuggestOutcome};
use std::io::{self, Write};

/// Run the interactive line-based solver loop.
///
/// # Errors
/// Returns an error if there's an I/O error reading user input, or if the
/// solver reports an error other than a recoverable empty-candidate state.
#[allow(clippy::too_many_lines)]
pub fn run_simple(solver: &SolverCore) -> Result<(), String> {
    println!("\nWordle Solver - Interactive Mode\n");
    println!("I'll suggest guesses using information-theoretic scoring.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use -/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game\n");

    let mut session = solver.new_session();
    let mut turn = 1;

    loop {
        let info = solver
            .candidates(session, 10)
            .map_err(|e| e.to_string())?;

        if info.remaining == 0 {
            println!("\nNo candidates remain! Your feedback may be incorrect.");
            println!("Type 'new' to start over.\n");
            match get_user_input("Command")?.as_str() {
                "new" => {
                    solver.reset(session).map_err(|e| e.to_string())?;
                    turn = 1;
                    println!("\nNew game started!\n");
                    continue;
                }
                "quit" | "q" | "exit" => return Ok(()),
                _ => continue,
            }
        }

        let guess_text = match solver.suggest(session).map_err(|e| e.to_string())? {
            SuggestOutcome::Solved => unreachable!("solved session is reset before reaching suggest"),
            SuggestOutcome::Guess(word) => word,
        };

        println!("----------------------------------------------------------------");
        println!("Turn {turn}: {} candidates remaining", info.remaining);
        println!("----------------------------------------------------------------");
        println!("\nSuggested guess: {}", guess_text.to_uppercase());

        if info.remaining <= 10 {
            println!("\nRemaining candidates:");
            for candidate in &info.sample {
                println!("  - {}", candidate.to_uppercase());
            }
            println!();
        }

        let feedback = loop {
            let input = get_user_input("Enter feedback (G/Y/-, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    solver.reset(session).map_err(|e| e.to_string())?;
                    turn = 0;
                    println!("\nNew game started!\n");
                    break None;
                }
                "win" | "correct" | "yes" | "solved" => break Some("GGGGG".to_string()),
                _ => {
                    if let Some(wire) = to_wire(&input) {
                        break Some(wire);
                    }
                    println!("Invalid pattern! Use G/Y/-, 'win', or the emoji form\n");
                }
            }
        };

        let Some(wire) = feedback else {
            continue;
        };

        solver
            .observe(session, &guess_text, &wire)
            .map_err(|e| e.to_string())?;

        if wire == "GGGGG" {
            println!("\n{}", "=".repeat(70));
            println!("    WORDLE SOLVED!    ");
            println!("{}", "=".repeat(70));
            println!(
                "\n  Solution found in {turn} {}",
                if turn == 1 { "guess" } else { "guesses" }
            );

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    session = solver.new_session();
                    turn = 0;
                    println!("\nNew game started!\n");
                }
                _ => {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
        }

        turn += 1;
    }
}

/// Convert interactive shorthand (G/Y/-, emoji) into the canonical `GYX` wire format.
fn to_wire(input: &str) -> Option<String> {
    let pattern = Pattern::from_str(input)?;
    Some(
        pattern
            .to_trits()
            .iter()
            .map(|&t| match t {
                2 => 'G',
                1 => 'Y',
                _ => 'X',
            })
            .collect(),
    )
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
