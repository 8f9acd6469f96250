//! Content-based anime recommendation engine.
//!
//! Takes a cleaned [`anirec_dataset::Pool`], encodes it into feature vectors
//! (multi-hot categorical blocks plus standardized numerics), amplifies the
//! query's genre dimensions, and ranks neighbors by cosine distance through
//! the index layer of `anirec-core`.
//!
//! ```no_run
//! use anirec_dataset::load_pool;
//! use anirec_engine::{Recommender, DEFAULT_TOP_K};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = load_pool("anime-dataset-2023.csv")?;
//! let recommender = Recommender::default();
//! for rec in recommender.recommend(&pool, 5114, DEFAULT_TOP_K)? {
//!     println!("{} ({:.3})", rec.display_name, rec.distance);
//! }
//! # Ok(())
//! # }
//! ```

pub mod encode;
pub mod error;
pub mod recommend;
pub mod schema;
pub mod weight;

#[cfg(test)]
pub(crate) mod testutil;

pub use encode::{EncodedPool, FeatureVector};
pub use error::{Error, Result};
pub use recommend::{Recommendation, Recommender, RecommenderConfig, DEFAULT_TOP_K};
pub use schema::{CategoricalColumn, ColumnStats, FeatureSchema, NumericColumn};
pub use weight::{WeightedPool, DEFAULT_GENRE_WEIGHT};
