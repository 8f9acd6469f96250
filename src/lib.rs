//! # AniRec
//!
//! Content-based anime recommendations over the MyAnimeList 2023 dataset.
//!
//! AniRec cleans the CSV export into a high-score candidate pool, encodes
//! every title into a feature vector (multi-hot categorical blocks plus
//! standardized numerics), amplifies the query's genre dimensions, and ranks
//! neighbors by cosine distance. Results are deterministic: the same pool
//! and query always produce the same ranking.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install anirec
//! anirec --dataset anime-dataset-2023.csv --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use anirec::prelude::*;
//!
//! // Load and clean the dataset into the candidate pool
//! let pool = load_pool("anime-dataset-2023.csv").unwrap();
//!
//! // Top 3 titles similar to Fullmetal Alchemist: Brotherhood
//! let recommender = Recommender::default();
//! let results = recommender.recommend(&pool, 5114, DEFAULT_TOP_K).unwrap();
//!
//! for rec in results {
//!     println!("{} ({:.3})", rec.display_name, rec.distance);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! AniRec is composed of several crates:
//!
//! - [`anirec-core`](https://docs.rs/anirec-core) - Vectors and neighbor indexes (brute force, random projection)
//! - [`anirec-dataset`](https://docs.rs/anirec-dataset) - CSV ingestion, cleaning, and the candidate pool
//! - [`anirec-engine`](https://docs.rs/anirec-engine) - Feature schema, encoding, genre weighting, and the recommender
//! - [`anirec-api`](https://docs.rs/anirec-api) - REST API
//!
//! ## Features
//!
//! - **Strict cleaning**: rows with any missing or sentinel field are dropped whole
//! - **Genre emphasis**: query-genre dimensions scaled in every vector
//! - **Two index backends**: exact brute force and seeded random projection, picked by pool size
//! - **REST API**: browse the pool and request recommendations over HTTP

// Re-export core types
pub use anirec_core::{
    build_index, BruteForceIndex, IndexStrategy, Neighbor, NeighborIndex, ProjectionConfig,
    RandomProjectionIndex, Vector, BRUTE_FORCE_LIMIT,
};

// Re-export the dataset layer
pub use anirec_dataset::{load_pool, AnimeId, AnimeRecord, Pool, SCORE_FLOOR};

// Re-export the engine
pub use anirec_engine::{
    EncodedPool, Error, FeatureSchema, Recommendation, Recommender, RecommenderConfig, Result,
    WeightedPool, DEFAULT_GENRE_WEIGHT, DEFAULT_TOP_K,
};

// Re-export API
pub use anirec_api::{AppState, RestApi};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        load_pool, AnimeId, AnimeRecord, AppState, IndexStrategy, Pool, Recommendation,
        Recommender, RecommenderConfig, RestApi, Vector, DEFAULT_GENRE_WEIGHT, DEFAULT_TOP_K,
        SCORE_FLOOR,
    };
}
