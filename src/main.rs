use anirec_api::{AppState, RestApi};
use anirec_dataset::load_pool;
use anirec_engine::{Recommender, RecommenderConfig, DEFAULT_GENRE_WEIGHT};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Content-based anime recommendation service
#[derive(Parser, Debug)]
#[command(name = "anirec")]
#[command(about = "Content-based anime recommendation service", long_about = None)]
struct Args {
    /// Path to the anime dataset CSV
    #[arg(short, long, default_value = "./anime-dataset-2023.csv")]
    dataset: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Scale applied to query-genre dimensions
    #[arg(long, default_value_t = DEFAULT_GENRE_WEIGHT)]
    genre_weight: f32,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting AniRec v{}", env!("CARGO_PKG_VERSION"));
    info!("Dataset: {:?}", args.dataset);
    info!("HTTP API port: {}", args.http_port);

    let pool = load_pool(&args.dataset)?;
    anyhow::ensure!(
        !pool.is_empty(),
        "no anime survived cleaning and the score floor; nothing to serve"
    );

    let recommender = Recommender::new(RecommenderConfig {
        genre_weight: args.genre_weight,
        ..RecommenderConfig::default()
    });
    let state = Arc::new(AppState::new(pool, recommender));
    info!("Pool ready: {} titles", state.pool().len());

    let state_http = state.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(state_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("AniRec started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
