//! The recommendation pipeline.
//!
//! Per request: fit a schema to the pool snapshot, encode every record,
//! weight the query's genre dimensions, build a neighbor index over the
//! weighted vectors, query for one extra neighbor and drop the query itself
//! from the result. Nothing is cached between requests; the pool snapshot is
//! the only shared state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use anirec_core::{build_index, IndexStrategy, ProjectionConfig};
use anirec_dataset::{AnimeId, AnimeRecord, Pool};

use crate::encode::EncodedPool;
use crate::error::{Error, Result};
use crate::weight::DEFAULT_GENRE_WEIGHT;

/// Neighbors returned when the caller does not ask for a specific count.
pub const DEFAULT_TOP_K: usize = 3;

/// Tunables of one recommender instance.
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// Scale applied to query-genre dimensions in every vector.
    pub genre_weight: f32,
    /// How the per-request neighbor index is chosen.
    pub strategy: IndexStrategy,
    /// Parameters for the random projection index, when selected.
    pub projection: ProjectionConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            genre_weight: DEFAULT_GENRE_WEIGHT,
            strategy: IndexStrategy::Auto,
            projection: ProjectionConfig::default(),
        }
    }
}

/// One recommended title, carrying the original display values of the
/// record rather than anything derived from the encoded vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub anime_id: AnimeId,
    pub display_name: String,
    pub other_name: String,
    pub genres: Vec<String>,
    pub score: f64,
    pub episodes: u32,
    pub image_url: String,
    /// Cosine distance to the query in the weighted space.
    pub distance: f32,
}

impl Recommendation {
    fn from_record(record: &AnimeRecord, distance: f32) -> Self {
        Self {
            anime_id: record.id,
            display_name: record.english_name.clone(),
            other_name: record.other_name.clone(),
            genres: record.genres.clone(),
            score: record.score,
            episodes: record.episodes,
            image_url: record.image_url.clone(),
            distance,
        }
    }
}

/// Content-based recommender over a cleaned pool.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: RecommenderConfig,
}

impl Recommender {
    #[must_use]
    pub fn new(config: RecommenderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    /// Recommend up to `k` titles similar to `query_id`.
    ///
    /// Returns fewer than `k` when the pool holds fewer than `k` other
    /// records. The query itself never appears in the result. Ties in
    /// distance resolve by ascending anime id, so the output is a pure
    /// function of the pool snapshot and the arguments.
    pub fn recommend(
        &self,
        pool: &Pool,
        query_id: AnimeId,
        k: usize,
    ) -> Result<Vec<Recommendation>> {
        if pool.is_empty() {
            return Err(Error::EmptyPool);
        }
        let query = pool.get(query_id).ok_or(Error::AnimeNotFound(query_id))?;

        let weighted = EncodedPool::encode(pool)
            .into_weighted(&query.genres, self.config.genre_weight);
        let query_vector = weighted
            .vector_for(query_id)
            .cloned()
            .ok_or(Error::AnimeNotFound(query_id))?;

        let index = build_index(
            weighted.into_entries(),
            self.config.strategy,
            &self.config.projection,
        )?;

        // One extra neighbor because the query finds itself at distance zero.
        let neighbors = index.search(&query_vector, k.saturating_add(1))?;

        // Capacity from the hits, not from `k`: callers control `k` and may
        // pass something absurd through the request body.
        let mut results = Vec::with_capacity(k.min(neighbors.len()));
        for neighbor in neighbors {
            if neighbor.id == query_id {
                continue;
            }
            if results.len() == k {
                break;
            }
            if let Some(record) = pool.get(neighbor.id) {
                results.push(Recommendation::from_record(record, neighbor.distance));
            }
        }

        debug!(
            "Recommended {} of {} requested for anime {} over a pool of {}",
            results.len(),
            k,
            query_id,
            pool.len()
        );
        Ok(results)
    }
}
