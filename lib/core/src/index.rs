//! Nearest-neighbor retrieval over a fixed entry set.
//!
//! Two implementations of [`NeighborIndex`] share one contract: rank all
//! entries by cosine distance to the query and return the closest `k`, ties
//! broken by ascending entry id. [`BruteForceIndex`] is exact;
//! [`RandomProjectionIndex`] is a bucketed random-projection LSH that trades
//! recall for candidate-set pruning on large pools. Both are built wholesale
//! from a snapshot of entries; neither supports incremental updates.

use ahash::AHashMap;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::vector::Vector;

/// Entries at or below this size get exact ranking under `IndexStrategy::Auto`.
pub const BRUTE_FORCE_LIMIT: usize = 4096;

/// A single retrieval hit: entry id plus cosine distance to the query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: u64,
    pub distance: f32,
}

/// Which index implementation gets built for a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndexStrategy {
    /// Brute force up to [`BRUTE_FORCE_LIMIT`] entries, projection LSH beyond.
    Auto,
    BruteForce,
    Projection,
}

/// Top-K retrieval by cosine distance.
///
/// Stored entry vectors are L2-normalized at build time, so distance is
/// `1 - dot(normalized query, entry)`. Results come back sorted ascending by
/// distance, ties by ascending id.
pub trait NeighborIndex {
    /// The `k` entries nearest to `query`, fewer if the index holds fewer.
    fn search(&self, query: &Vector, k: usize) -> Result<Vec<Neighbor>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dimension the index was built with.
    fn dim(&self) -> usize;
}

/// Build the implementation selected by `strategy` over the given entries.
pub fn build_index(
    items: Vec<(u64, Vector)>,
    strategy: IndexStrategy,
    config: &ProjectionConfig,
) -> Result<Box<dyn NeighborIndex>> {
    let exact = match strategy {
        IndexStrategy::BruteForce => true,
        IndexStrategy::Projection => false,
        IndexStrategy::Auto => items.len() <= BRUTE_FORCE_LIMIT,
    };

    if exact {
        Ok(Box::new(BruteForceIndex::build(items)?))
    } else {
        Ok(Box::new(RandomProjectionIndex::build(items, config.clone())?))
    }
}

/// Exact scan over every entry. The simplest correct strategy, and the
/// reference ranking the projection index is measured against.
pub struct BruteForceIndex {
    entries: Vec<(u64, Vector)>,
    dim: usize,
}

impl BruteForceIndex {
    pub fn build(items: Vec<(u64, Vector)>) -> Result<Self> {
        let dim = check_dims(&items)?;
        Ok(Self {
            entries: normalize_entries(items),
            dim,
        })
    }
}

impl NeighborIndex for BruteForceIndex {
    fn search(&self, query: &Vector, k: usize) -> Result<Vec<Neighbor>> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }
        check_query(self.dim, query)?;

        let q = query.normalized();
        Ok(rank(self.entries.iter(), &q, k))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn dim(&self) -> usize {
        self.dim
    }
}

/// Configuration for [`RandomProjectionIndex`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Number of independent hash tables. More tables, better recall.
    pub num_tables: usize,
    /// Width of a projection bucket in input-vector units.
    pub bucket_length: f32,
    /// Seed for the projection directions; fixed so builds are reproducible.
    pub seed: u64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            num_tables: 3,
            bucket_length: 2.0,
            seed: 42,
        }
    }
}

/// Bucketed random-projection LSH.
///
/// Each table hashes an entry to `floor(dot(v, direction) / bucket_length)`.
/// Bucket keys are computed on the vectors as given (before normalization),
/// so bucket width stays meaningful for unnormalized feature magnitudes;
/// ranking then runs on normalized copies. A query probes its own bucket and
/// both adjacent buckets in every table and ranks the union exactly. When
/// probing collects fewer candidates than requested, the search degrades to a
/// full scan so small or skewed pools still return every available neighbor.
pub struct RandomProjectionIndex {
    config: ProjectionConfig,
    directions: Vec<Vector>,
    tables: Vec<AHashMap<i64, Vec<usize>>>,
    entries: Vec<(u64, Vector)>,
    dim: usize,
}

impl RandomProjectionIndex {
    pub fn build(items: Vec<(u64, Vector)>, config: ProjectionConfig) -> Result<Self> {
        if config.num_tables == 0 {
            return Err(Error::InvalidConfig(
                "projection index needs at least one hash table".to_string(),
            ));
        }
        if config.bucket_length <= 0.0 {
            return Err(Error::InvalidConfig(
                "projection bucket length must be positive".to_string(),
            ));
        }

        let dim = check_dims(&items)?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let directions: Vec<Vector> = (0..config.num_tables)
            .map(|_| random_direction(dim, &mut rng))
            .collect();

        let mut tables: Vec<AHashMap<i64, Vec<usize>>> =
            vec![AHashMap::new(); config.num_tables];
        for (pos, (_, vector)) in items.iter().enumerate() {
            for (table, direction) in tables.iter_mut().zip(&directions) {
                let key = bucket_key(vector, direction, config.bucket_length);
                table.entry(key).or_default().push(pos);
            }
        }

        Ok(Self {
            config,
            directions,
            tables,
            entries: normalize_entries(items),
            dim,
        })
    }

    fn gather_candidates(&self, query: &Vector) -> Vec<usize> {
        let mut seen = vec![false; self.entries.len()];
        let mut candidates = Vec::new();

        for (table, direction) in self.tables.iter().zip(&self.directions) {
            let key = bucket_key(query, direction, self.config.bucket_length);
            let probes: SmallVec<[i64; 3]> = SmallVec::from_slice(&[key - 1, key, key + 1]);
            for probe in probes {
                if let Some(bucket) = table.get(&probe) {
                    for &pos in bucket {
                        if !seen[pos] {
                            seen[pos] = true;
                            candidates.push(pos);
                        }
                    }
                }
            }
        }

        candidates
    }
}

impl NeighborIndex for RandomProjectionIndex {
    fn search(&self, query: &Vector, k: usize) -> Result<Vec<Neighbor>> {
        if self.entries.is_empty() {
            return Ok(Vec::new());
        }
        check_query(self.dim, query)?;

        // Keys come from the raw query, matching how entries were hashed.
        let candidates = self.gather_candidates(query);
        let q = query.normalized();

        if candidates.len() < k {
            return Ok(rank(self.entries.iter(), &q, k));
        }
        Ok(rank(candidates.iter().map(|&pos| &self.entries[pos]), &q, k))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn dim(&self) -> usize {
        self.dim
    }
}

fn check_dims(items: &[(u64, Vector)]) -> Result<usize> {
    let dim = match items.first() {
        Some((_, vector)) => vector.dim(),
        None => return Ok(0),
    };
    for (_, vector) in items {
        if vector.dim() != dim {
            return Err(Error::InvalidDimension {
                expected: dim,
                actual: vector.dim(),
            });
        }
    }
    Ok(dim)
}

fn check_query(dim: usize, query: &Vector) -> Result<()> {
    if query.dim() != dim {
        return Err(Error::InvalidDimension {
            expected: dim,
            actual: query.dim(),
        });
    }
    Ok(())
}

fn normalize_entries(items: Vec<(u64, Vector)>) -> Vec<(u64, Vector)> {
    items
        .into_iter()
        .map(|(id, mut vector)| {
            vector.normalize();
            (id, vector)
        })
        .collect()
}

fn rank<'a, I>(items: I, query: &Vector, k: usize) -> Vec<Neighbor>
where
    I: Iterator<Item = &'a (u64, Vector)>,
{
    let mut hits: Vec<Neighbor> = items
        .map(|(id, vector)| Neighbor {
            id: *id,
            distance: 1.0 - query.dot(vector),
        })
        .collect();
    hits.sort_by_key(|n| (OrderedFloat(n.distance), n.id));
    hits.truncate(k);
    hits
}

fn bucket_key(vector: &Vector, direction: &Vector, bucket_length: f32) -> i64 {
    (vector.dot(direction) / bucket_length).floor() as i64
}

// Box-Muller from a seeded generator; unit length so bucket widths are
// comparable across tables.
fn random_direction(dim: usize, rng: &mut StdRng) -> Vector {
    let data: Vec<f32> = (0..dim)
        .map(|_| {
            let u1: f32 = rng.random_range(f32::EPSILON..1.0);
            let u2: f32 = rng.random_range(0.0..1.0);
            (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos()
        })
        .collect();
    let mut v = Vector::new(data);
    v.normalize();
    v
}
