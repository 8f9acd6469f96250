//! # anirec Core
//!
//! Core library for the anirec recommendation engine.
//!
//! This crate provides the retrieval primitives the engine is built on:
//!
//! - [`Vector`] - Dense vector representation with scalar-optimized kernels
//! - [`NeighborIndex`] - Top-K cosine retrieval contract
//! - [`BruteForceIndex`] - Exact ranking over every entry
//! - [`RandomProjectionIndex`] - Bucketed random-projection LSH
//!
//! ## Example
//!
//! ```rust
//! use anirec_core::{BruteForceIndex, NeighborIndex, Vector};
//!
//! let index = BruteForceIndex::build(vec![
//!     (1, Vector::new(vec![1.0, 0.0])),
//!     (2, Vector::new(vec![0.0, 1.0])),
//! ])
//! .unwrap();
//!
//! let results = index.search(&Vector::new(vec![0.9, 0.1]), 1).unwrap();
//! assert_eq!(results[0].id, 1);
//! ```

pub mod error;
pub mod index;
pub mod vector;

pub use error::{Error, Result};
pub use index::{
    build_index, BruteForceIndex, IndexStrategy, Neighbor, NeighborIndex, ProjectionConfig,
    RandomProjectionIndex, BRUTE_FORCE_LIMIT,
};
pub use vector::Vector;
