use anyhow::Result;

use atlas_lib::report::summary::MasteryLevel;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let summary = app.summary();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            let max_country_len = summary
                .items
                .iter()
                .map(|row| row.country.len())
                .max()
                .unwrap_or(7)
                .max(7);

            println!(
                "{:<width$} Attempts Correct Accuracy Status",
                "Country",
                width = max_country_len + 1
            );
            println!(
                "{} {}",
                "\u{2500}".repeat(max_country_len + 1),
                "\u{2500}".repeat(32)
            );

            for row in &summary.items {
                let status = match row.level {
                    MasteryLevel::Mastered => "mastered",
                    MasteryLevel::Learning => "learning",
                    MasteryLevel::NotStarted => "not started",
                };
                println!(
                    "{:<width$} {:>8} {:>7} {:>7}% {}",
                    row.country,
                    row.attempts,
                    row.correct,
                    row.accuracy.round(),
                    status,
                    width = max_country_len + 1
                );
            }

            println!(
                "\n{} answered, {} correct ({}% accuracy)",
                summary.total_attempts,
                summary.total_correct,
                summary.overall_accuracy.round()
            );
            println!(
                "{} mastered, {} learning, {} not started",
                summary.mastered, summary.learning, summary.not_started
            );
        }
    }

    Ok(())
}
