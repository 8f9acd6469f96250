use anirec_dataset::{AnimeId, AnimeRecord, Pool};

pub(crate) fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Record with the given genres and identical everything else, so tests can
/// isolate one column by mutating only it. The default score passes the pool
/// floor.
pub(crate) fn record(id: AnimeId, genres: &[&str]) -> AnimeRecord {
    AnimeRecord {
        id,
        name: format!("Anime {id}"),
        english_name: format!("Anime {id} (EN)"),
        other_name: format!("Anime {id} (JP)"),
        score: 9.0,
        episodes: 12,
        rank: 100.0,
        popularity: 50.0,
        favorites: 1_000.0,
        scored_by: 20_000.0,
        members: 40_000.0,
        genres: tags(genres),
        media_type: tags(&["TV"]),
        producers: tags(&["P"]),
        licensors: tags(&["L"]),
        studios: tags(&["S"]),
        source: tags(&["Manga"]),
        image_url: format!("https://cdn.example/{id}.jpg"),
        synopsis: "A story.".to_string(),
    }
}

pub(crate) fn pool_of(records: Vec<AnimeRecord>) -> Pool {
    Pool::from_records(records)
}
