use anirec_dataset::AnimeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Candidate pool is empty after cleaning and score filtering")]
    EmptyPool,

    #[error("Anime {0} not found in candidate pool")]
    AnimeNotFound(AnimeId),

    #[error(transparent)]
    Index(#[from] anirec_core::Error),
}
