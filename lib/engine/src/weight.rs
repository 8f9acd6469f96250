//! Query-genre emphasis.
//!
//! Dimensions matching the query's genres are scaled up in every vector of
//! the pool, the query's own vector included. Amplifying the query's own
//! genre dimensions changes its direction and therefore the ranking; this is
//! the intended behavior, not an oversight, and downstream results depend
//! on it.

use std::collections::HashSet;

use anirec_core::Vector;
use anirec_dataset::AnimeId;

use crate::encode::{EncodedPool, FeatureVector};
use crate::schema::FeatureSchema;

/// Scale applied to query-genre dimensions.
pub const DEFAULT_GENRE_WEIGHT: f32 = 7.0;

/// An encoded pool after genre weighting. Constructed only by
/// [`EncodedPool::into_weighted`], so the scaling has been applied exactly
/// once by the time a value of this type exists.
#[derive(Debug, Clone)]
pub struct WeightedPool {
    schema: FeatureSchema,
    vectors: Vec<FeatureVector>,
}

impl EncodedPool {
    /// Scale the dimensions of `query_genres` by `factor` in every vector,
    /// consuming the unweighted pool.
    ///
    /// Genres absent from the schema vocabulary have no dimension and are
    /// silently skipped.
    #[must_use]
    pub fn into_weighted(mut self, query_genres: &[String], factor: f32) -> WeightedPool {
        let wanted: HashSet<&str> = query_genres.iter().map(String::as_str).collect();
        let dims: Vec<usize> = self
            .schema
            .genre_dimensions()
            .into_iter()
            .filter(|(_, label)| wanted.contains(label))
            .map(|(dim, _)| dim)
            .collect();

        for fv in &mut self.vectors {
            let data = fv.vector.as_mut_slice();
            for &dim in &dims {
                data[dim] *= factor;
            }
        }

        WeightedPool {
            schema: self.schema,
            vectors: self.vectors,
        }
    }
}

impl WeightedPool {
    #[must_use]
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    #[must_use]
    pub fn vectors(&self) -> &[FeatureVector] {
        &self.vectors
    }

    /// Weighted vector of one record, if present.
    #[must_use]
    pub fn vector_for(&self, id: AnimeId) -> Option<&Vector> {
        self.vectors
            .iter()
            .find(|fv| fv.anime_id == id)
            .map(|fv| &fv.vector)
    }

    /// Hand the vectors over for index construction.
    #[must_use]
    pub fn into_entries(self) -> Vec<(u64, Vector)> {
        self.vectors
            .into_iter()
            .map(|fv| (fv.anime_id, fv.vector))
            .collect()
    }
}
