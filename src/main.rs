use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use bookwise_api::RestApi;
use bookwise_store::Library;

/// A book recommender serving engine over precomputed artifacts
#[derive(Parser, Debug)]
#[command(name = "bookwise")]
#[command(about = "A book recommender serving engine", long_about = None)]
struct Args {
    /// Path to the artifacts directory
    #[arg(short, long, default_value = "./artifacts")]
    artifacts: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

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

    info!("Starting bookwise v{}", env!("CARGO_PKG_VERSION"));
    info!("Artifacts directory: {:?}", args.artifacts);
    info!("HTTP API port: {}", args.http_port);

    let library = Arc::new(Library::load(&args.artifacts)?);
    info!(
        "Library loaded: {} titles, {} popular books",
        library.titles().len(),
        library.popular().len()
    );

    let library_http = library.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(library_http, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("bookwise started successfully");
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
