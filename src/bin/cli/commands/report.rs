use std::fs;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::app::App;

pub fn run(app: &App, output: Option<&str>) -> Result<()> {
    let summary = app.summary();
    let markdown = summary.render_markdown(Utc::now());

    match output {
        Some(path) => {
            fs::write(path, markdown)
                .with_context(|| format!("Failed to write report to {}", path))?;
            println!("Wrote {}", path);
        }
        None => print!("{}", markdown),
    }

    Ok(())
}
