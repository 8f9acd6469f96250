//! Per-pool dimension layout.
//!
//! The categorical vocabularies depend on what the pool actually contains,
//! so the layout is an explicit value fitted per snapshot and threaded
//! through encoding, weighting and querying. Vectors encoded against
//! different schemas are never comparable; whenever the pool changes the
//! schema is refitted and every vector rebuilt.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

use anirec_core::Vector;
use anirec_dataset::{AnimeRecord, Pool};

const STDDEV_EPSILON: f64 = 1e-10;

/// Categorical columns, in encoding order. Genres come first so the genre
/// indicator block sits at a fixed leading range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoricalColumn {
    Genres,
    MediaType,
    Producers,
    Licensors,
    Studios,
    Source,
}

impl CategoricalColumn {
    pub const ALL: [CategoricalColumn; 6] = [
        CategoricalColumn::Genres,
        CategoricalColumn::MediaType,
        CategoricalColumn::Producers,
        CategoricalColumn::Licensors,
        CategoricalColumn::Studios,
        CategoricalColumn::Source,
    ];

    fn values<'a>(&self, record: &'a AnimeRecord) -> &'a [String] {
        match self {
            CategoricalColumn::Genres => &record.genres,
            CategoricalColumn::MediaType => &record.media_type,
            CategoricalColumn::Producers => &record.producers,
            CategoricalColumn::Licensors => &record.licensors,
            CategoricalColumn::Studios => &record.studios,
            CategoricalColumn::Source => &record.source,
        }
    }
}

/// Numeric columns, in encoding order after the categorical blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericColumn {
    Score,
    Episodes,
    Rank,
    Popularity,
    Favorites,
    ScoredBy,
    Members,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 7] = [
        NumericColumn::Score,
        NumericColumn::Episodes,
        NumericColumn::Rank,
        NumericColumn::Popularity,
        NumericColumn::Favorites,
        NumericColumn::ScoredBy,
        NumericColumn::Members,
    ];

    fn value(&self, record: &AnimeRecord) -> f64 {
        match self {
            NumericColumn::Score => record.score,
            NumericColumn::Episodes => f64::from(record.episodes),
            NumericColumn::Rank => record.rank,
            NumericColumn::Popularity => record.popularity,
            NumericColumn::Favorites => record.favorites,
            NumericColumn::ScoredBy => record.scored_by,
            NumericColumn::Members => record.members,
        }
    }
}

/// Mean and population standard deviation of one numeric column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ColumnStats {
    pub mean: f64,
    pub stddev: f64,
}

impl ColumnStats {
    fn fit(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: 0.0,
                stddev: 0.0,
            };
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Self {
            mean,
            stddev: variance.sqrt(),
        }
    }

    /// Standardize one value. A constant column centers to zero instead of
    /// dividing by zero.
    fn transform(&self, value: f64) -> f32 {
        if self.stddev > STDDEV_EPSILON {
            ((value - self.mean) / self.stddev) as f32
        } else {
            (value - self.mean) as f32
        }
    }
}

/// Dimension layout fitted to one pool snapshot.
///
/// Layout order: one indicator block per categorical column (sorted labels),
/// then one standardized dimension per numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureSchema {
    vocabularies: Vec<(CategoricalColumn, Vec<String>)>,
    numeric: Vec<(NumericColumn, ColumnStats)>,
    dim: usize,
}

impl FeatureSchema {
    /// Collect sorted label vocabularies and numeric statistics over `pool`.
    #[must_use]
    pub fn fit(pool: &Pool) -> Self {
        let mut vocabularies = Vec::with_capacity(CategoricalColumn::ALL.len());
        for column in CategoricalColumn::ALL {
            let mut labels: BTreeSet<&str> = BTreeSet::new();
            for record in pool.iter() {
                for value in column.values(record) {
                    labels.insert(value.as_str());
                }
            }
            let labels: Vec<String> = labels.into_iter().map(str::to_string).collect();
            vocabularies.push((column, labels));
        }

        let mut numeric = Vec::with_capacity(NumericColumn::ALL.len());
        for column in NumericColumn::ALL {
            let values: Vec<f64> = pool.iter().map(|record| column.value(record)).collect();
            let stats = ColumnStats::fit(&values);
            if !pool.is_empty() && stats.stddev <= STDDEV_EPSILON {
                warn!(
                    "numeric column {:?} is constant over the pool; standardization degrades to centering",
                    column
                );
            }
            numeric.push((column, stats));
        }

        let dim = vocabularies
            .iter()
            .map(|(_, labels)| labels.len())
            .sum::<usize>()
            + numeric.len();

        Self {
            vocabularies,
            numeric,
            dim,
        }
    }

    /// Total vector dimension under this layout.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Encode one record into this layout.
    #[must_use]
    pub fn encode(&self, record: &AnimeRecord) -> Vector {
        let mut data = Vec::with_capacity(self.dim);

        for (column, labels) in &self.vocabularies {
            let present: HashSet<&str> = column
                .values(record)
                .iter()
                .map(String::as_str)
                .collect();
            for label in labels {
                data.push(if present.contains(label.as_str()) {
                    1.0
                } else {
                    0.0
                });
            }
        }

        for (column, stats) in &self.numeric {
            data.push(stats.transform(column.value(record)));
        }

        Vector::new(data)
    }

    /// Dimension index and label of every genre indicator.
    #[must_use]
    pub fn genre_dimensions(&self) -> Vec<(usize, &str)> {
        let mut offset = 0;
        for (column, labels) in &self.vocabularies {
            if *column == CategoricalColumn::Genres {
                return labels
                    .iter()
                    .enumerate()
                    .map(|(i, label)| (offset + i, label.as_str()))
                    .collect();
            }
            offset += labels.len();
        }
        Vec::new()
    }

    /// Statistics fitted for one numeric column.
    #[must_use]
    pub fn numeric_stats(&self, column: NumericColumn) -> Option<ColumnStats> {
        self.numeric
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, stats)| *stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{pool_of, record};

    #[test]
    fn test_vocabularies_are_sorted_and_deduplicated() {
        let pool = pool_of(vec![
            record(1, &["Drama", "Action"]),
            record(2, &["Comedy", "Action"]),
        ]);
        let schema = FeatureSchema::fit(&pool);

        let labels: Vec<&str> = schema
            .genre_dimensions()
            .into_iter()
            .map(|(_, label)| label)
            .collect();
        assert_eq!(labels, vec!["Action", "Comedy", "Drama"]);

        let dims: Vec<usize> = schema
            .genre_dimensions()
            .into_iter()
            .map(|(dim, _)| dim)
            .collect();
        assert_eq!(dims, vec![0, 1, 2]);
    }

    #[test]
    fn test_dimension_count() {
        let pool = pool_of(vec![
            record(1, &["Action", "Drama"]),
            record(2, &["Comedy"]),
        ]);
        let schema = FeatureSchema::fit(&pool);

        // 3 genres + TV + P + L + S + Manga + 7 numerics, shared defaults
        // collapse each remaining categorical column to one label
        assert_eq!(schema.dim(), 3 + 1 + 1 + 1 + 1 + 1 + 7);
    }

    #[test]
    fn test_multi_hot_indicators() {
        let pool = pool_of(vec![
            record(1, &["Action", "Drama"]),
            record(2, &["Comedy"]),
        ]);
        let schema = FeatureSchema::fit(&pool);

        let encoded = schema.encode(pool.get(1).unwrap());
        let data = encoded.as_slice();
        // Sorted genre block: Action, Comedy, Drama
        assert_eq!(&data[0..3], &[1.0, 0.0, 1.0]);

        let encoded = schema.encode(pool.get(2).unwrap());
        assert_eq!(&encoded.as_slice()[0..3], &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_standardized_column_has_zero_mean_unit_variance() {
        let mut records = vec![
            record(1, &["Action"]),
            record(2, &["Action"]),
            record(3, &["Action"]),
            record(4, &["Action"]),
        ];
        for (i, r) in records.iter_mut().enumerate() {
            r.score = 8.2 + 0.3 * i as f64;
        }
        let pool = pool_of(records);
        let schema = FeatureSchema::fit(&pool);

        let score_dim = schema.dim() - NumericColumn::ALL.len();
        let encoded: Vec<f32> = pool
            .iter()
            .map(|r| schema.encode(r).as_slice()[score_dim])
            .collect();

        let n = encoded.len() as f64;
        let mean: f64 = encoded.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
        let variance: f64 = encoded
            .iter()
            .map(|&v| (f64::from(v) - mean).powi(2))
            .sum::<f64>()
            / n;

        assert!(mean.abs() < 1e-6);
        assert!((variance.sqrt() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_constant_column_encodes_to_zeros() {
        // Every test record shares the same members count
        let pool = pool_of(vec![record(1, &["Action"]), record(2, &["Drama"])]);
        let schema = FeatureSchema::fit(&pool);

        let members_dim = schema.dim() - 1;
        for record in pool.iter() {
            assert_eq!(schema.encode(record).as_slice()[members_dim], 0.0);
        }

        let stats = schema.numeric_stats(NumericColumn::Members).unwrap();
        assert!(stats.stddev < 1e-9);
    }

    #[test]
    fn test_empty_categorical_column_sets_no_indicators() {
        let mut a = record(1, &["Action"]);
        a.producers = Vec::new();
        let mut b = record(2, &["Action"]);
        b.producers = Vec::new();

        let pool = pool_of(vec![a, b]);
        let schema = FeatureSchema::fit(&pool);

        // No producer labels anywhere in the pool: the block is empty and
        // encoding still works
        assert_eq!(schema.dim(), 1 + 1 + 0 + 1 + 1 + 1 + 7);
        assert_eq!(schema.encode(pool.get(1).unwrap()).dim(), schema.dim());
    }
}
