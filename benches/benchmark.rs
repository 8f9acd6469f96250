// Performance benchmarks for pool encoding, index search, and the full
// recommendation pipeline
use anirec::{
    AnimeRecord, BruteForceIndex, EncodedPool, IndexStrategy, NeighborIndex, Pool,
    ProjectionConfig, RandomProjectionIndex, Recommender, RecommenderConfig,
    DEFAULT_GENRE_WEIGHT,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

const GENRES: [&str; 10] = [
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Fantasy",
    "Horror",
    "Mystery",
    "Romance",
    "Sci-Fi",
    "Sports",
];
const MEDIA_TYPES: [&str; 3] = ["TV", "Movie", "OVA"];
const STUDIOS: [&str; 4] = ["Bones", "Madhouse", "Sunrise", "Kyoto Animation"];
const SOURCES: [&str; 4] = ["Manga", "Original", "Light Novel", "Game"];

fn synthetic_record(id: u64, rng: &mut StdRng) -> AnimeRecord {
    let genre_count = rng.random_range(1..=3);
    let genres: Vec<String> = GENRES
        .choose_multiple(rng, genre_count)
        .map(|g| (*g).to_string())
        .collect();

    AnimeRecord {
        id,
        name: format!("Anime {}", id),
        english_name: format!("Anime {} (EN)", id),
        other_name: format!("Anime {} (JP)", id),
        score: rng.random_range(8.01..9.9),
        episodes: rng.random_range(1..60),
        rank: rng.random_range(1.0..5000.0),
        popularity: rng.random_range(1.0..5000.0),
        favorites: rng.random_range(0.0..100_000.0),
        scored_by: rng.random_range(1_000.0..1_000_000.0),
        members: rng.random_range(1_000.0..2_000_000.0),
        genres,
        media_type: vec![MEDIA_TYPES.choose(rng).copied().unwrap_or("TV").to_string()],
        producers: vec![format!("Producer {}", rng.random_range(0..20))],
        licensors: vec![format!("Licensor {}", rng.random_range(0..10))],
        studios: vec![STUDIOS.choose(rng).copied().unwrap_or("Bones").to_string()],
        source: vec![SOURCES.choose(rng).copied().unwrap_or("Manga").to_string()],
        image_url: format!("https://cdn.example/{}.jpg", id),
        synopsis: format!("Synthetic synopsis {}", id),
    }
}

fn synthetic_pool(size: usize) -> Pool {
    let mut rng = StdRng::seed_from_u64(7);
    let records = (1..=size as u64)
        .map(|id| synthetic_record(id, &mut rng))
        .collect();
    Pool::from_records(records)
}

fn benchmark_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [100, 1000, 5000].iter() {
        let pool = synthetic_pool(*size);
        group.bench_with_input(BenchmarkId::new("fit_and_encode", size), &pool, |b, pool| {
            b.iter(|| {
                let encoded = EncodedPool::encode(black_box(pool));
                black_box(encoded);
            });
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");

    for size in [100, 1000, 5000].iter() {
        let pool = synthetic_pool(*size);

        let brute = Recommender::new(RecommenderConfig {
            strategy: IndexStrategy::BruteForce,
            ..RecommenderConfig::default()
        });
        group.bench_with_input(BenchmarkId::new("brute_force", size), &pool, |b, pool| {
            b.iter(|| {
                let results = brute.recommend(black_box(pool), 1, 3).unwrap();
                black_box(results);
            });
        });

        let projection = Recommender::new(RecommenderConfig {
            strategy: IndexStrategy::Projection,
            ..RecommenderConfig::default()
        });
        group.bench_with_input(BenchmarkId::new("projection", size), &pool, |b, pool| {
            b.iter(|| {
                let results = projection.recommend(black_box(pool), 1, 3).unwrap();
                black_box(results);
            });
        });
    }

    group.finish();
}

fn benchmark_index_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_search");

    // Setup: encode and weight a 5k pool once, then measure search alone
    let pool = synthetic_pool(5000);
    let query_genres = vec!["Action".to_string()];
    let entries = EncodedPool::encode(&pool)
        .into_weighted(&query_genres, DEFAULT_GENRE_WEIGHT)
        .into_entries();
    let query = entries[0].1.clone();

    let brute = BruteForceIndex::build(entries.clone()).unwrap();
    group.bench_function("brute_force", |b| {
        b.iter(|| {
            let results = brute.search(black_box(&query), 10).unwrap();
            black_box(results);
        });
    });

    let projection =
        RandomProjectionIndex::build(entries, ProjectionConfig::default()).unwrap();
    group.bench_function("projection", |b| {
        b.iter(|| {
            let results = projection.search(black_box(&query), 10).unwrap();
            black_box(results);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode,
    benchmark_recommend,
    benchmark_index_search
);
criterion_main!(benches);
