use std::cmp::Reverse;

use tridict_types::{ChineseEntry, JapaneseEntry};

/// What the ranker needs to know about an entry
pub trait Rankable {
    fn is_common(&self) -> bool;

    /// Lower is more frequent, None when unranked
    fn frequency_rank(&self) -> Option<u32>;

    /// Form whose character length is scored
    fn ranked_headword(&self) -> &str;
}

impl Rankable for JapaneseEntry {
    fn is_common(&self) -> bool {
        self.is_common
    }

    fn frequency_rank(&self) -> Option<u32> {
        self.frequency_rank
    }

    fn ranked_headword(&self) -> &str {
        &self.headword
    }
}

impl Rankable for ChineseEntry {
    fn is_common(&self) -> bool {
        self.is_common
    }

    fn frequency_rank(&self) -> Option<u32> {
        self.frequency_rank
    }

    fn ranked_headword(&self) -> &str {
        &self.simplified
    }
}

/// Priority score, higher is better.
///
/// common flag +100, frequency rank +max(0, 1000 - rank), and
/// 100 / headword length in characters. An unranked entry gets nothing
/// for frequency.
pub fn score<T: Rankable + ?Sized>(entry: &T) -> u32 {
    let mut score = 0;

    if entry.is_common() {
        score += 100;
    }

    if let Some(rank) = entry.frequency_rank() {
        score += 1000u32.saturating_sub(rank);
    }

    let len = entry.ranked_headword().chars().count() as u32;
    if len > 0 {
        score += 100 / len;
    }

    score
}

/// Sort by descending score and keep the first `limit` entries (0 keeps all).
///
/// The sort is stable: entries with equal scores stay in store order.
pub fn rank<T: Rankable>(mut entries: Vec<T>, limit: usize) -> Vec<T> {
    entries.sort_by_key(|entry| Reverse(score(entry)));

    if limit > 0 {
        entries.truncate(limit);
    }

    entries
}
