//! Flashcard browse mode
//!
//! A shuffled pass over the whole catalog with no mastery interaction:
//! flip a card to reveal the answer, move forward or back with
//! wrap-around. Each card picks its ask direction at random when shown.

use rand::Rng;

use crate::catalog::{Catalog, Direction, Item};
use crate::quiz::selection;

/// One shuffled run through the catalog
pub struct FlashcardRun<R: Rng> {
    order: Vec<Item>,
    index: usize,
    direction: Direction,
    revealed: bool,
    rng: R,
}

impl<R: Rng> FlashcardRun<R> {
    pub fn new(catalog: &Catalog, mut rng: R) -> Self {
        let order = selection::build_working_set(catalog.items().to_vec(), &mut rng);
        let direction = random_direction(&mut rng);
        Self {
            order,
            index: 0,
            direction,
            revealed: false,
            rng,
        }
    }

    pub fn card(&self) -> &Item {
        &self.order[self.index]
    }

    pub fn prompt(&self) -> &str {
        self.card().prompt(self.direction)
    }

    pub fn answer(&self) -> &str {
        self.card().answer(self.direction)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Toggle whether the answer side is visible
    pub fn flip(&mut self) {
        self.revealed = !self.revealed;
    }

    /// 1-based position and total count, for a `3 / 40` style indicator
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.order.len())
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.order.len();
        self.turn_over();
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.order.len() - 1) % self.order.len();
        self.turn_over();
    }

    /// Hide the answer and re-randomize the direction for the new card
    fn turn_over(&mut self) {
        self.revealed = false;
        self.direction = random_direction(&mut self.rng);
    }
}

fn random_direction(rng: &mut impl Rng) -> Direction {
    if rng.gen_bool(0.5) {
        Direction::Capital
    } else {
        Direction::Country
    }
}
