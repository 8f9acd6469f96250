use serde::{Deserialize, Serialize};

/// Stable dataset identifier of an anime.
pub type AnimeId = u64;

/// Sentinel the source export uses for missing values. Matched
/// case-insensitively during cleaning.
pub const UNKNOWN_SENTINEL: &str = "UNKNOWN";

/// One cleaned row of the anime dataset.
///
/// Values of this type only exist via [`RawAnimeRow::into_record`], so a
/// record never contains the missing-value sentinel, an unparseable numeric,
/// or a non-finite numeric. Multi-valued columns are already split into
/// trimmed atoms.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnimeRecord {
    pub id: AnimeId,
    pub name: String,
    pub english_name: String,
    pub other_name: String,
    pub score: f64,
    pub episodes: u32,
    pub rank: f64,
    pub popularity: f64,
    pub favorites: f64,
    pub scored_by: f64,
    pub members: f64,
    /// Genre tags in source order. Display keeps this order; encoding treats
    /// the list as a set.
    pub genres: Vec<String>,
    pub media_type: Vec<String>,
    pub producers: Vec<String>,
    pub licensors: Vec<String>,
    pub studios: Vec<String>,
    pub source: Vec<String>,
    pub image_url: String,
    pub synopsis: String,
}

/// A row as it appears in the CSV export, before cleaning. Every cell comes
/// in as text because any of them may hold the sentinel.
#[derive(Debug, Deserialize)]
pub struct RawAnimeRow {
    #[serde(rename = "anime_id")]
    pub anime_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "English name")]
    pub english_name: String,
    #[serde(rename = "Other name")]
    pub other_name: String,
    #[serde(rename = "Score")]
    pub score: String,
    #[serde(rename = "Genres")]
    pub genres: String,
    #[serde(rename = "Synopsis")]
    pub synopsis: String,
    #[serde(rename = "Type")]
    pub media_type: String,
    #[serde(rename = "Episodes")]
    pub episodes: String,
    #[serde(rename = "Producers")]
    pub producers: String,
    #[serde(rename = "Licensors")]
    pub licensors: String,
    #[serde(rename = "Studios")]
    pub studios: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Popularity")]
    pub popularity: String,
    #[serde(rename = "Favorites")]
    pub favorites: String,
    #[serde(rename = "Scored By")]
    pub scored_by: String,
    #[serde(rename = "Members")]
    pub members: String,
    #[serde(rename = "Image URL")]
    pub image_url: String,
}

impl RawAnimeRow {
    /// Convert into a cleaned record.
    ///
    /// Returns `None` when any retained field is empty, holds the sentinel,
    /// or fails numeric parsing. Rows are dropped whole, never imputed.
    pub fn into_record(self) -> Option<AnimeRecord> {
        let id = clean(&self.anime_id)?.parse::<AnimeId>().ok()?;
        let name = clean(&self.name)?.to_string();
        let english_name = clean(&self.english_name)?.to_string();
        let other_name = clean(&self.other_name)?.to_string();

        let score = parse_numeric(&self.score)?;
        let episodes = parse_numeric(&self.episodes)? as u32;
        let rank = parse_numeric(&self.rank)?;
        let popularity = parse_numeric(&self.popularity)?;
        let favorites = parse_numeric(&self.favorites)?;
        let scored_by = parse_numeric(&self.scored_by)?;
        let members = parse_numeric(&self.members)?;

        let genres = split_tags(clean(&self.genres)?);
        let media_type = split_tags(clean(&self.media_type)?);
        let producers = split_tags(clean(&self.producers)?);
        let licensors = split_tags(clean(&self.licensors)?);
        let studios = split_tags(clean(&self.studios)?);
        let source = split_tags(clean(&self.source)?);

        let image_url = clean(&self.image_url)?.to_string();
        let synopsis = clean(&self.synopsis)?.to_string();

        Some(AnimeRecord {
            id,
            name,
            english_name,
            other_name,
            score,
            episodes,
            rank,
            popularity,
            favorites,
            scored_by,
            members,
            genres,
            media_type,
            producers,
            licensors,
            studios,
            source,
            image_url,
            synopsis,
        })
    }
}

fn clean(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNKNOWN_SENTINEL) {
        None
    } else {
        Some(trimmed)
    }
}

// The export may format counts as floats ("26.0"), so everything numeric
// goes through f64. Literal NaN/inf cells count as missing, same as the
// sentinel; letting one through would poison fitted column statistics.
fn parse_numeric(value: &str) -> Option<f64> {
    clean(value)?
        .parse::<f64>()
        .ok()
        .filter(|parsed| parsed.is_finite())
}

/// Split a multi-valued cell on commas, trimming each atom. An all-separator
/// cell yields an empty list, which downstream treats as "no indicators set".
pub fn split_tags(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|atom| !atom.is_empty())
        .map(str::to_string)
        .collect()
}
