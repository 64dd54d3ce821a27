//! Per-item mastery statistics
//!
//! An item counts as mastered once it has been attempted at least once
//! and its accuracy is at or above [`MASTERY_THRESHOLD`]. Items never
//! attempted have an implicit `{attempts: 0, correct: 0}` entry and a
//! ratio of 0.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Accuracy at or above this ratio takes an item out of rotation
pub const MASTERY_THRESHOLD: f64 = 0.70;

/// Attempt/correct counters for a single item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStats {
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub correct: u32,
}

impl ItemStats {
    /// Accuracy in `[0, 1]`; 0 when the item was never attempted
    pub fn ratio(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.attempts)
        }
    }

    pub fn is_mastered(&self) -> bool {
        self.attempts > 0 && self.ratio() >= MASTERY_THRESHOLD
    }

    /// Restore the `correct <= attempts` invariant on data read from disk
    pub fn clamped(self) -> Self {
        Self {
            attempts: self.attempts,
            correct: self.correct.min(self.attempts),
        }
    }
}

/// Mapping from country name to its stats. Keys exist only for items
/// attempted at least once.
pub type MasteryMap = BTreeMap<String, ItemStats>;

/// Stats for an item, falling back to the implicit zero entry
pub fn stats_for(map: &MasteryMap, country: &str) -> ItemStats {
    map.get(country).copied().unwrap_or_default()
}

/// Record one answered question. Returns a new map; the input is not
/// mutated (the caller decides when to persist).
pub fn record(map: &MasteryMap, country: &str, is_correct: bool) -> MasteryMap {
    let mut next = map.clone();
    let entry = next.entry(country.to_string()).or_default();
    entry.attempts += 1;
    if is_correct {
        entry.correct += 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_zero_when_unattempted() {
        let stats = ItemStats::default();
        assert_eq!(stats.ratio(), 0.0);
        assert!(!stats.is_mastered());
    }

    #[test]
    fn test_mastered_at_threshold() {
        // 7/10 is exactly the threshold
        let stats = ItemStats { attempts: 10, correct: 7 };
        assert!(stats.is_mastered());

        let below = ItemStats { attempts: 10, correct: 6 };
        assert!(!below.is_mastered());
    }

    #[test]
    fn test_record_does_not_mutate_input() {
        let map = MasteryMap::new();
        let next = record(&map, "France", true);

        assert!(map.is_empty());
        assert_eq!(next["France"], ItemStats { attempts: 1, correct: 1 });
    }

    #[test]
    fn test_record_increments_existing_entry() {
        let mut map = MasteryMap::new();
        map.insert("Japan".to_string(), ItemStats { attempts: 3, correct: 1 });

        let next = record(&map, "Japan", false);
        assert_eq!(next["Japan"], ItemStats { attempts: 4, correct: 1 });

        let next = record(&next, "Japan", true);
        assert_eq!(next["Japan"], ItemStats { attempts: 5, correct: 2 });
    }

    #[test]
    fn test_correct_never_exceeds_attempts_after_record() {
        let mut map = MasteryMap::new();
        for _ in 0..50 {
            map = record(&map, "Kenya", true);
            let stats = stats_for(&map, "Kenya");
            assert!(stats.correct <= stats.attempts);
        }
    }

    #[test]
    fn test_clamped_restores_invariant() {
        let bad = ItemStats { attempts: 2, correct: 9 };
        assert_eq!(bad.clamped(), ItemStats { attempts: 2, correct: 2 });

        let good = ItemStats { attempts: 9, correct: 2 };
        assert_eq!(good.clamped(), good);
    }
}
