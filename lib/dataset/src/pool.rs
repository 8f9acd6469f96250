use std::collections::HashMap;

use crate::record::{AnimeId, AnimeRecord};

/// Only records scoring strictly above this participate in recommendations.
/// Fixed policy bounding the pool to acclaimed titles, not a config knob.
pub const SCORE_FLOOR: f64 = 8.0;

/// The cleaned, score-filtered candidate set for one process lifetime.
///
/// Immutable after construction; servers share it behind an `Arc` and every
/// request derives its own vectors from it.
#[derive(Debug, Clone)]
pub struct Pool {
    records: Vec<AnimeRecord>,
    by_id: HashMap<AnimeId, usize>,
}

impl Pool {
    /// Keep records above [`SCORE_FLOOR`], first occurrence of an id winning.
    #[must_use]
    pub fn from_records(records: Vec<AnimeRecord>) -> Self {
        let mut kept = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());

        for record in records {
            if record.score <= SCORE_FLOOR {
                continue;
            }
            if by_id.contains_key(&record.id) {
                continue;
            }
            by_id.insert(record.id, kept.len());
            kept.push(record);
        }

        kept.shrink_to_fit();
        Self {
            records: kept,
            by_id,
        }
    }

    #[must_use]
    pub fn get(&self, id: AnimeId) -> Option<&AnimeRecord> {
        self.by_id.get(&id).map(|&pos| &self.records[pos])
    }

    #[must_use]
    pub fn contains(&self, id: AnimeId) -> bool {
        self.by_id.contains_key(&id)
    }

    #[must_use]
    pub fn records(&self) -> &[AnimeRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimeRecord> {
        self.records.iter()
    }
}
