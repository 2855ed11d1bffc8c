use clap::Parser;
use scoutx_api::RestApi;
use scoutx_core::SimilarityModel;
use scoutx_ingest::load_roster;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A player similarity engine with a REST query API
#[derive(Parser, Debug)]
#[command(name = "scoutx")]
#[command(about = "Premier League midfielder similarity finder", long_about = None)]
struct Args {
    /// Path to the FBref CSV export
    #[arg(short, long, default_value = "./data/premier_league_data_converted.csv")]
    data: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[actix_web::main]
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

    info!("Starting scoutx v{}", env!("CARGO_PKG_VERSION"));
    info!("Data file: {:?}", args.data);

    // Ingest and train before binding the listener: no query can ever see a
    // partially built matrix.
    let roster = load_roster(&args.data)?;

    let mut model = SimilarityModel::new();
    model.train(roster)?;
    let summary = model.info();
    info!(
        "Similarity matrix trained on {} players using {} features",
        summary.num_players, summary.num_features
    );

    let model = Arc::new(model);

    info!("scoutx started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    RestApi::start(model, args.http_port).await?;

    info!("Shutting down...");
    Ok(())
}
