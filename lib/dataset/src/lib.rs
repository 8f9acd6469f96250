//! # anirec Dataset
//!
//! Dataset layer for the anirec recommendation engine.
//!
//! The source of record is a CSV export of anime metadata. This crate reads
//! it, drops rows that carry the `UNKNOWN` sentinel or unparseable numerics
//! (whole rows, never imputed), applies the acclaimed-titles score floor and
//! hands back an immutable [`Pool`]:
//!
//! - [`AnimeRecord`] - one cleaned row, original display values intact
//! - [`Pool`] - the filtered candidate set with id lookup
//! - [`load_pool`] - CSV path in, pool out
//!
//! ## Example
//!
//! ```rust,no_run
//! let pool = anirec_dataset::load_pool("anime-dataset-2023.csv")?;
//! println!("{} acclaimed titles", pool.len());
//! # Ok::<(), anirec_dataset::Error>(())
//! ```

pub mod error;
pub mod loader;
pub mod pool;
pub mod record;

pub use error::{Error, Result};
pub use loader::load_pool;
pub use pool::{Pool, SCORE_FLOOR};
pub use record::{split_tags, AnimeId, AnimeRecord, RawAnimeRow, UNKNOWN_SENTINEL};
