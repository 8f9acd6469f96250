use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use anirec_dataset::{AnimeId, AnimeRecord, Pool};
use anirec_engine::{Error as EngineError, Recommender, DEFAULT_TOP_K};

/// Immutable state shared by every worker: the pool snapshot loaded at
/// startup and the recommender configuration. Requests never mutate it.
pub struct AppState {
    pool: Pool,
    recommender: Recommender,
}

impl AppState {
    #[must_use]
    pub fn new(pool: Pool, recommender: Recommender) -> Self {
        Self { pool, recommender }
    }

    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }
}

#[derive(Serialize)]
struct AnimeSummary {
    anime_id: AnimeId,
    name: String,
    english_name: String,
    score: f64,
    genres: Vec<String>,
}

impl AnimeSummary {
    fn from_record(record: &AnimeRecord) -> Self {
        Self {
            anime_id: record.id,
            name: record.name.clone(),
            english_name: record.english_name.clone(),
            score: record.score,
            genres: record.genres.clone(),
        }
    }
}

#[derive(Deserialize)]
struct RecommendRequest {
    anime_id: AnimeId,
    k: Option<usize>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: Arc<AppState>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(state.clone()))
                .route("/anime", web::get().to(list_anime))
                .route("/anime/{id}", web::get().to(get_anime))
                .route("/recommendations", web::post().to(recommend))
                .route("/healthz", web::get().to(healthz))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn list_anime(state: web::Data<Arc<AppState>>) -> ActixResult<HttpResponse> {
    let summaries: Vec<AnimeSummary> = state
        .pool
        .iter()
        .map(AnimeSummary::from_record)
        .collect();
    Ok(HttpResponse::Ok().json(summaries))
}

async fn get_anime(
    state: web::Data<Arc<AppState>>,
    path: web::Path<AnimeId>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();

    match state.pool.get(id) {
        Some(record) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": record
        }))),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Anime {} not found", id)
        }))),
    }
}

async fn recommend(
    state: web::Data<Arc<AppState>>,
    req: web::Json<RecommendRequest>,
) -> ActixResult<HttpResponse> {
    let k = req.k.unwrap_or(DEFAULT_TOP_K);

    match state.recommender.recommend(&state.pool, req.anime_id, k) {
        Ok(results) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "result": results
        }))),
        Err(e @ EngineError::AnimeNotFound(_)) => {
            Ok(HttpResponse::NotFound().json(serde_json::json!({
                "error": e.to_string()
            })))
        }
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}

async fn healthz(state: web::Data<Arc<AppState>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "pool_size": state.pool.len()
    })))
}
