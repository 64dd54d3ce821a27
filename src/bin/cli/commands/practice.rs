use std::io::{self, BufRead, Write};

use anyhow::Result;

use atlas_lib::catalog::Direction;
use atlas_lib::quiz::{QuizSession, SessionView};
use rand::rngs::StdRng;

use crate::app::App;

enum Action {
    Answer(String),
    Advance,
    Nothing,
}

pub fn run(app: App) -> Result<()> {
    let mut session: QuizSession<StdRng> = app.session()?;

    loop {
        let action = match session.view() {
            SessionView::Completed => {
                println!("\nCongratulations! You have mastered all countries and capitals.");
                println!("Run `atlas-cli reset` to start over.");
                return Ok(());
            }
            SessionView::Presenting { question, remaining } => {
                let ask = match question.direction {
                    Direction::Capital => "Select the correct capital for",
                    Direction::Country => "Select the correct country for",
                };
                println!("\n{}: {}", ask, question.prompt());
                for (i, option) in question.options.iter().enumerate() {
                    println!("  {}. {}", i + 1, option);
                }
                println!("({} remaining)", remaining);

                let Some(input) = prompt_line("> ")? else {
                    return Ok(());
                };
                if input == "q" {
                    return Ok(());
                }
                match input.parse::<usize>() {
                    Ok(n) if (1..=question.options.len()).contains(&n) => {
                        Action::Answer(question.options[n - 1].clone())
                    }
                    _ => {
                        println!("Enter a number from 1 to {}, or q to quit.", question.options.len());
                        Action::Nothing
                    }
                }
            }
            SessionView::Answered { question, feedback, remaining } => {
                if feedback.is_correct {
                    println!("Correct!");
                } else {
                    println!("Incorrect, the answer is {}.", question.correct_answer());
                }
                println!("Questions remaining: {}", remaining);

                let Some(input) = prompt_line("Press Enter for the next question (q to quit) ")?
                else {
                    return Ok(());
                };
                if input == "q" {
                    return Ok(());
                }
                Action::Advance
            }
        };

        match action {
            Action::Answer(option) => session.answer(&option)?,
            Action::Advance => session.advance()?,
            Action::Nothing => {}
        }
    }
}

/// Read one trimmed line from stdin; `None` on EOF
fn prompt_line(prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
