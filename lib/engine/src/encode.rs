//! Pool encoding.

use anirec_core::Vector;
use anirec_dataset::{AnimeId, Pool};

use crate::schema::FeatureSchema;

/// One encoded record, keyed by its anime id.
#[derive(Debug, Clone)]
pub struct FeatureVector {
    pub anime_id: AnimeId,
    pub vector: Vector,
}

/// Every pool record encoded under one freshly fitted schema.
///
/// Still unweighted. The only way forward is [`EncodedPool::into_weighted`],
/// which consumes the value, so a pool cannot be weighted twice and weighted
/// vectors cannot be mistaken for plain ones.
#[derive(Debug, Clone)]
pub struct EncodedPool {
    pub(crate) schema: FeatureSchema,
    pub(crate) vectors: Vec<FeatureVector>,
}

impl EncodedPool {
    /// Fit a schema to `pool` and encode every record under it.
    #[must_use]
    pub fn encode(pool: &Pool) -> Self {
        let schema = FeatureSchema::fit(pool);
        let vectors = pool
            .iter()
            .map(|record| FeatureVector {
                anime_id: record.id,
                vector: schema.encode(record),
            })
            .collect();
        Self { schema, vectors }
    }

    #[must_use]
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    #[must_use]
    pub fn vectors(&self) -> &[FeatureVector] {
        &self.vectors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{pool_of, record};

    #[test]
    fn test_encode_covers_every_record() {
        let pool = pool_of(vec![
            record(1, &["Action"]),
            record(2, &["Drama"]),
            record(3, &["Action", "Drama"]),
        ]);
        let encoded = EncodedPool::encode(&pool);

        assert_eq!(encoded.vectors().len(), 3);
        let dim = encoded.schema().dim();
        for fv in encoded.vectors() {
            assert_eq!(fv.vector.dim(), dim);
        }

        let ids: Vec<u64> = encoded.vectors().iter().map(|fv| fv.anime_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_pool_encodes_to_nothing() {
        let pool = pool_of(Vec::new());
        let encoded = EncodedPool::encode(&pool);
        assert!(encoded.vectors().is_empty());
    }
}
