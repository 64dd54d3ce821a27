//! Printable matching worksheet
//!
//! Countries are numbered in one shuffled order, capitals lettered in an
//! independently shuffled order; the answer key maps numbers to letters.
//! Rendered as Markdown so it can be printed or converted downstream.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, Item};

/// A generated worksheet: two shuffled columns plus the key
pub struct Worksheet {
    /// Pairs in country-column order
    pairs: Vec<Item>,
    /// Capital column, shuffled independently of the country column
    capitals: Vec<String>,
    /// For the i-th country, index of its capital in `capitals`
    key: Vec<usize>,
}

impl Worksheet {
    pub fn build(catalog: &Catalog, rng: &mut impl Rng) -> Self {
        let mut pairs = catalog.items().to_vec();
        pairs.shuffle(rng);

        let mut capitals: Vec<String> =
            pairs.iter().map(|item| item.capital.clone()).collect();
        capitals.shuffle(rng);

        let key = pairs
            .iter()
            .map(|item| {
                capitals
                    .iter()
                    .position(|capital| *capital == item.capital)
                    .unwrap_or(0)
            })
            .collect();

        Self { pairs, capitals, key }
    }

    pub fn countries(&self) -> Vec<&str> {
        self.pairs.iter().map(|item| item.country.as_str()).collect()
    }

    pub fn capitals(&self) -> &[String] {
        &self.capitals
    }

    /// Number → letter solutions, in country-column order
    pub fn answer_key(&self) -> Vec<(usize, String)> {
        self.key
            .iter()
            .enumerate()
            .map(|(row, capital_index)| (row + 1, letter_label(*capital_index)))
            .collect()
    }

    /// Render the worksheet, optionally with the answer key appended
    pub fn render_markdown(&self, include_key: bool) -> String {
        let mut output = String::new();

        output.push_str("# Worksheet: Countries and Capitals\n\n");
        output.push_str("Match each country with its corresponding capital.\n\n");

        output.push_str("| Countries | Capitals |\n");
        output.push_str("| --- | --- |\n");
        for (row, item) in self.pairs.iter().enumerate() {
            output.push_str(&format!(
                "| {}. {} | {}. {} |\n",
                row + 1,
                item.country,
                letter_label(row),
                self.capitals[row]
            ));
        }

        if include_key {
            output.push_str("\n## Answer Key\n\n");
            for (number, letter) in self.answer_key() {
                output.push_str(&format!("{}. {}\n", number, letter));
            }
        }

        output
    }
}

/// Spreadsheet-style labels: A..Z, AA, AB, ...
fn letter_label(mut index: usize) -> String {
    let mut label = String::new();
    loop {
        label.insert(0, (b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

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

    #[test]
    fn test_both_columns_are_permutations() {
        let catalog = catalog();
        let sheet = Worksheet::build(&catalog, &mut StdRng::seed_from_u64(11));

        let mut countries: Vec<String> =
            sheet.countries().iter().map(|c| c.to_string()).collect();
        countries.sort();
        let mut expected: Vec<String> =
            catalog.items().iter().map(|i| i.country.clone()).collect();
        expected.sort();
        assert_eq!(countries, expected);

        let mut capitals = sheet.capitals().to_vec();
        capitals.sort();
        let mut expected: Vec<String> =
            catalog.items().iter().map(|i| i.capital.clone()).collect();
        expected.sort();
        assert_eq!(capitals, expected);
    }

    #[test]
    fn test_answer_key_matches_pairs() {
        let catalog = catalog();
        let sheet = Worksheet::build(&catalog, &mut StdRng::seed_from_u64(12));

        for (row, capital_index) in sheet.key.iter().enumerate() {
            let country = &sheet.pairs[row].country;
            let expected_capital = catalog
                .items()
                .iter()
                .find(|item| item.country == *country)
                .map(|item| item.capital.clone())
                .unwrap();
            assert_eq!(sheet.capitals[*capital_index], expected_capital);
        }
    }

    #[test]
    fn test_rendered_worksheet_lists_everything_once() {
        let catalog = catalog();
        let sheet = Worksheet::build(&catalog, &mut StdRng::seed_from_u64(13));
        let markdown = sheet.render_markdown(true);

        for item in catalog.items() {
            assert_eq!(markdown.matches(item.country.as_str()).count(), 1);
        }
        assert!(markdown.contains("## Answer Key"));

        let without_key = sheet.render_markdown(false);
        assert!(!without_key.contains("## Answer Key"));
    }

    #[test]
    fn test_same_seed_same_worksheet() {
        let catalog = catalog();
        let a = Worksheet::build(&catalog, &mut StdRng::seed_from_u64(14));
        let b = Worksheet::build(&catalog, &mut StdRng::seed_from_u64(14));
        assert_eq!(a.render_markdown(true), b.render_markdown(true));
    }

    #[test]
    fn test_letter_labels_extend_past_z() {
        assert_eq!(letter_label(0), "A");
        assert_eq!(letter_label(25), "Z");
        assert_eq!(letter_label(26), "AA");
        assert_eq!(letter_label(27), "AB");
        assert_eq!(letter_label(51), "AZ");
        assert_eq!(letter_label(52), "BA");
    }
}
