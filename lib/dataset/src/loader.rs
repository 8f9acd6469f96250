use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::pool::{Pool, SCORE_FLOOR};
use crate::record::{AnimeRecord, RawAnimeRow};

const REQUIRED_COLUMNS: [&str; 19] = [
    "anime_id",
    "Name",
    "English name",
    "Other name",
    "Score",
    "Genres",
    "Synopsis",
    "Type",
    "Episodes",
    "Producers",
    "Licensors",
    "Studios",
    "Source",
    "Rank",
    "Popularity",
    "Favorites",
    "Scored By",
    "Members",
    "Image URL",
];

/// Read the CSV export at `path` into a cleaned, score-filtered [`Pool`].
///
/// Rows holding the missing-value sentinel or unparseable numerics are
/// dropped and counted; repeated ids keep their first surviving occurrence;
/// extra columns in the export are ignored. Structural CSV problems and
/// missing required columns abort the load.
pub fn load_pool<P: AsRef<Path>>(path: P) -> Result<Pool> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    {
        let headers = reader.headers()?;
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == required) {
                return Err(Error::MissingColumn(required.to_string()));
            }
        }
    }

    let mut parsed = 0usize;
    let mut incomplete = 0usize;
    let mut records: Vec<AnimeRecord> = Vec::new();

    for row in reader.deserialize::<RawAnimeRow>() {
        let row = row?;
        parsed += 1;
        match row.into_record() {
            Some(record) => records.push(record),
            None => incomplete += 1,
        }
    }

    let cleaned = records.len();
    // The pool drops both below-floor records and repeated ids; count the
    // floor side here so neither inflates the other in the accounting.
    let above_floor = records
        .iter()
        .filter(|record| record.score > SCORE_FLOOR)
        .count();
    let pool = Pool::from_records(records);
    info!(
        "Loaded {}: {} rows parsed, {} dropped incomplete, {} below score floor, {} duplicate ids, {} kept",
        path.display(),
        parsed,
        incomplete,
        cleaned - above_floor,
        above_floor - pool.len(),
        pool.len()
    );

    Ok(pool)
}
