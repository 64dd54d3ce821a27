use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::app::App;

/// The engine never prompts; confirming the reset is this command's job.
pub fn run(app: &App, yes: bool) -> Result<()> {
    if !yes {
        print!("Reset all mastery data? This cannot be undone. [y/N] ");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let answer = line.trim().to_lowercase();
        if answer != "y" && answer != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    app.storage().reset().context("Failed to reset progress")?;
    println!("Progress cleared.");
    Ok(())
}
