//! Progress summary statistics

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::quiz::mastery::{stats_for, MasteryMap};

/// Bucket an item falls into for the mastery-level breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MasteryLevel {
    /// Attempted with accuracy at or above the threshold
    Mastered,
    /// Attempted but still below the threshold
    Learning,
    /// Never attempted
    NotStarted,
}

/// Per-item row of the progress view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemProgress {
    pub country: String,
    pub capital: String,
    pub attempts: u32,
    pub correct: u32,
    /// Accuracy as a percentage in `[0, 100]`
    pub accuracy: f64,
    /// Wrong answers recorded for this item
    pub missed: u32,
    pub level: MasteryLevel,
}

/// Snapshot of overall learning progress
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub total_attempts: u32,
    pub total_correct: u32,
    /// Overall accuracy percentage; 0 when nothing was answered yet
    pub overall_accuracy: f64,
    pub mastered: usize,
    pub learning: usize,
    pub not_started: usize,
    pub items: Vec<ItemProgress>,
}

/// Compute the summary for a catalog + mastery map snapshot. Items
/// without stats get the implicit zero entry.
pub fn summarize(catalog: &Catalog, map: &MasteryMap) -> ProgressSummary {
    let items: Vec<ItemProgress> = catalog
        .items()
        .iter()
        .map(|item| {
            let stats = stats_for(map, &item.country);
            let level = if stats.is_mastered() {
                MasteryLevel::Mastered
            } else if stats.attempts > 0 {
                MasteryLevel::Learning
            } else {
                MasteryLevel::NotStarted
            };
            ItemProgress {
                country: item.country.clone(),
                capital: item.capital.clone(),
                attempts: stats.attempts,
                correct: stats.correct,
                accuracy: stats.ratio() * 100.0,
                missed: stats.attempts - stats.correct,
                level,
            }
        })
        .collect();

    let total_attempts: u32 = items.iter().map(|i| i.attempts).sum();
    let total_correct: u32 = items.iter().map(|i| i.correct).sum();
    let overall_accuracy = if total_attempts > 0 {
        f64::from(total_correct) / f64::from(total_attempts) * 100.0
    } else {
        0.0
    };

    ProgressSummary {
        total_attempts,
        total_correct,
        overall_accuracy,
        mastered: items.iter().filter(|i| i.level == MasteryLevel::Mastered).count(),
        learning: items.iter().filter(|i| i.level == MasteryLevel::Learning).count(),
        not_started: items.iter().filter(|i| i.level == MasteryLevel::NotStarted).count(),
        items,
    }
}

impl ProgressSummary {
    /// Attempted items ranked by missed count, worst first
    pub fn most_challenging(&self, limit: usize) -> Vec<&ItemProgress> {
        let mut rows: Vec<&ItemProgress> =
            self.items.iter().filter(|i| i.attempts > 0).collect();
        rows.sort_by(|a, b| b.missed.cmp(&a.missed));
        rows.truncate(limit);
        rows
    }

    /// Render the statistics report as Markdown
    pub fn render_markdown(&self, generated_at: DateTime<Utc>) -> String {
        let mut output = String::new();

        output.push_str("# Learning Statistics Report\n\n");
        output.push_str(&format!(
            "Generated: {}\n\n",
            generated_at.format("%Y-%m-%d")
        ));

        output.push_str("## Overall Performance\n\n");
        output.push_str(&format!(
            "- Total questions answered: {}\n",
            self.total_attempts
        ));
        output.push_str(&format!("- Total correct: {}\n", self.total_correct));
        output.push_str(&format!(
            "- Overall accuracy: {}%\n\n",
            self.overall_accuracy.round()
        ));

        output.push_str("## Most Challenging Countries\n\n");
        let challenging = self.most_challenging(10);
        if challenging.is_empty() {
            output.push_str("No questions answered yet.\n\n");
        } else {
            for (rank, row) in challenging.iter().enumerate() {
                output.push_str(&format!(
                    "{}. {} - {}: missed {} times, accuracy {}%\n",
                    rank + 1,
                    row.country,
                    row.capital,
                    row.missed,
                    row.accuracy.round()
                ));
            }
            output.push('\n');
        }

        output.push_str("## Mastery Levels\n\n");
        output.push_str(&format!("- Mastered (70%+): {} countries\n", self.mastered));
        output.push_str(&format!("- Learning (below 70%): {} countries\n", self.learning));
        output.push_str(&format!("- Not started: {} countries\n", self.not_started));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;
    use crate::quiz::mastery::ItemStats;
    use chrono::TimeZone;

    fn catalog() -> Catalog {
        Catalog::new(
            [
                ("France", "Paris"),
                ("Japan", "Tokyo"),
                ("Peru", "Lima"),
                ("Kenya", "Nairobi"),
                ("Norway", "Oslo"),
            ]
            .iter()
            .map(|(country, capital)| Item {
                country: country.to_string(),
                capital: capital.to_string(),
            })
            .collect(),
        )
        .unwrap()
    }

    fn sample_map() -> MasteryMap {
        let mut map = MasteryMap::new();
        map.insert("France".to_string(), ItemStats { attempts: 10, correct: 8 });
        map.insert("Japan".to_string(), ItemStats { attempts: 4, correct: 1 });
        map.insert("Peru".to_string(), ItemStats { attempts: 2, correct: 0 });
        map
    }

    #[test]
    fn test_levels_partition_the_catalog() {
        let summary = summarize(&catalog(), &sample_map());

        assert_eq!(summary.mastered, 1);
        assert_eq!(summary.learning, 2);
        assert_eq!(summary.not_started, 2);
        assert_eq!(
            summary.mastered + summary.learning + summary.not_started,
            catalog().len()
        );
    }

    #[test]
    fn test_totals_and_accuracy() {
        let summary = summarize(&catalog(), &sample_map());

        assert_eq!(summary.total_attempts, 16);
        assert_eq!(summary.total_correct, 9);
        assert!((summary.overall_accuracy - 56.25).abs() < 1e-9);
    }

    #[test]
    fn test_empty_map_yields_zeroed_summary() {
        let summary = summarize(&catalog(), &MasteryMap::new());

        assert_eq!(summary.total_attempts, 0);
        assert_eq!(summary.overall_accuracy, 0.0);
        assert_eq!(summary.not_started, 5);
        assert!(summary.items.iter().all(|i| i.level == MasteryLevel::NotStarted));
    }

    #[test]
    fn test_most_challenging_ranks_by_missed() {
        let summary = summarize(&catalog(), &sample_map());
        let worst = summary.most_challenging(10);

        // Japan missed 3, France and Peru missed 2 each; unattempted
        // items never appear
        assert_eq!(worst.len(), 3);
        assert_eq!(worst[0].country, "Japan");
        assert!(worst.iter().all(|row| row.attempts > 0));

        let top1 = summary.most_challenging(1);
        assert_eq!(top1.len(), 1);
    }

    #[test]
    fn test_markdown_report_contains_sections() {
        let summary = summarize(&catalog(), &sample_map());
        let date = Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap();
        let report = summary.render_markdown(date);

        assert!(report.contains("# Learning Statistics Report"));
        assert!(report.contains("Generated: 2026-08-07"));
        assert!(report.contains("Total questions answered: 16"));
        assert!(report.contains("Mastered (70%+): 1 countries"));
        assert!(report.contains("Japan - Tokyo: missed 3 times"));
    }
}
