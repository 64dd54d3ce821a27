//! Distractor generation
//!
//! Builds the four-option answer set for a question: the correct answer
//! plus three values sampled uniformly, without replacement, from the
//! catalog's *distinct* values in the question's direction. Exclusion is
//! by value, not by item, so a capital shared by several catalog entries
//! can never collide with the correct answer or appear twice.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::{Catalog, Direction, Item};

use super::models::{Question, DISTRACTOR_COUNT, OPTION_COUNT};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestionError {
    #[error("Catalog too small: {found} items (need at least 4)")]
    CatalogTooSmall { found: usize },

    #[error("Not enough distinct {direction} values for distractors: {found} (need at least 4)")]
    InsufficientPool { direction: Direction, found: usize },
}

pub type Result<T> = std::result::Result<T, QuestionError>;

/// Verify the catalog can produce four distinct options in both
/// directions. Called once at session start; a failure is fatal.
pub fn ensure_answer_pool(catalog: &Catalog) -> Result<()> {
    if catalog.len() < OPTION_COUNT {
        return Err(QuestionError::CatalogTooSmall { found: catalog.len() });
    }

    for direction in [Direction::Capital, Direction::Country] {
        let found = catalog.distinct_values(direction).len();
        if found < OPTION_COUNT {
            return Err(QuestionError::InsufficientPool { direction, found });
        }
    }

    Ok(())
}

/// Build a question for an item: sample three distractors and shuffle
/// them together with the correct answer.
pub fn build_question(
    catalog: &Catalog,
    item: &Item,
    direction: Direction,
    rng: &mut impl Rng,
) -> Result<Question> {
    let correct = item.answer(direction);

    let pool: Vec<&str> = catalog
        .distinct_values(direction)
        .into_iter()
        .filter(|value| *value != correct)
        .collect();

    if pool.len() < DISTRACTOR_COUNT {
        return Err(QuestionError::InsufficientPool {
            direction,
            // +1 for the correct value itself
            found: pool.len() + 1,
        });
    }

    let mut options: Vec<String> = pool
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|value| value.to_string())
        .collect();
    options.push(correct.to_string());
    options.shuffle(rng);

    let correct_index = options
        .iter()
        .position(|option| option == correct)
        .unwrap_or(0);

    Ok(Question {
        item: item.clone(),
        direction,
        options,
        correct_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog(pairs: &[(&str, &str)]) -> Catalog {
        Catalog::new(
            pairs
                .iter()
                .map(|(country, capital)| Item {
                    country: country.to_string(),
                    capital: capital.to_string(),
                })
                .collect(),
        )
        .unwrap()
    }

    fn world() -> Catalog {
        catalog(&[
            ("France", "Paris"),
            ("Japan", "Tokyo"),
            ("Peru", "Lima"),
            ("Kenya", "Nairobi"),
            ("Norway", "Oslo"),
        ])
    }

    #[test]
    fn test_question_has_four_distinct_options_with_correct_once() {
        let catalog = world();
        let mut rng = StdRng::seed_from_u64(1);
        let item = &catalog.items()[0];

        let question = build_question(&catalog, item, Direction::Capital, &mut rng).unwrap();

        assert_eq!(question.options.len(), 4);
        let occurrences = question
            .options
            .iter()
            .filter(|option| *option == "Paris")
            .count();
        assert_eq!(occurrences, 1);
        assert_eq!(question.correct_answer(), "Paris");
        assert_eq!(question.options[question.correct_index], "Paris");

        let mut unique = question.options.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 4);
    }

    #[test]
    fn test_three_item_catalog_is_fatal() {
        let catalog = catalog(&[
            ("France", "Paris"),
            ("Japan", "Tokyo"),
            ("Peru", "Lima"),
        ]);
        let result = ensure_answer_pool(&catalog);
        assert!(matches!(result, Err(QuestionError::CatalogTooSmall { found: 3 })));
    }

    #[test]
    fn test_shared_capitals_shrink_the_pool() {
        // Four items but only three distinct capitals
        let catalog = catalog(&[
            ("South Africa", "Pretoria"),
            ("Gauteng", "Pretoria"),
            ("France", "Paris"),
            ("Japan", "Tokyo"),
        ]);
        let result = ensure_answer_pool(&catalog);
        assert!(matches!(
            result,
            Err(QuestionError::InsufficientPool { direction: Direction::Capital, found: 3 })
        ));
    }

    #[test]
    fn test_distractors_exclude_value_collisions() {
        // "Lima" appears under two countries; asking for Peru's capital
        // must not offer Lima as a distractor
        let catalog = catalog(&[
            ("Peru", "Lima"),
            ("Lima Region", "Lima"),
            ("France", "Paris"),
            ("Japan", "Tokyo"),
            ("Kenya", "Nairobi"),
            ("Norway", "Oslo"),
        ]);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..50 {
            let question =
                build_question(&catalog, &catalog.items()[0], Direction::Capital, &mut rng)
                    .unwrap();
            let limas = question
                .options
                .iter()
                .filter(|option| *option == "Lima")
                .count();
            assert_eq!(limas, 1);
        }
    }

    #[test]
    fn test_both_directions_produce_valid_questions() {
        let catalog = world();
        let mut rng = StdRng::seed_from_u64(9);
        let item = &catalog.items()[2];

        let question = build_question(&catalog, item, Direction::Country, &mut rng).unwrap();
        assert_eq!(question.prompt(), "Lima");
        assert_eq!(question.correct_answer(), "Peru");
    }
}
