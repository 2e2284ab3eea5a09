use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folder_browser::{AppState, Config, routes};

#[derive(Parser, Debug)]
#[command(name = "folder-browser")]
#[command(about = "Read-only HTTP browser for a local directory tree")]
#[command(version)]
struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5173")]
    port: u16,

    /// Address to bind to
    #[arg(short, long, env = "FOLDER_BROWSER_BIND", default_value = "0.0.0.0")]
    bind: String,

    /// Root directory to serve files from
    #[arg(short, long, env = "FOLDER_BROWSER_ROOT", default_value = ".")]
    root: PathBuf,

    /// Names to hide from the tree and refuse as a first path segment
    /// (replaces the configured list)
    #[arg(short, long, env = "FOLDER_BROWSER_EXCLUDE", value_delimiter = ',')]
    exclude: Option<Vec<String>>,

    /// Enable verbose logging
    #[arg(short, long, env = "FOLDER_BROWSER_VERBOSE")]
    verbose: bool,

    /// Config file path (optional)
    #[arg(short, long, env = "FOLDER_BROWSER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "folder_browser=debug,tower_http=debug"
    } else {
        "folder_browser=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from file if provided, otherwise use defaults
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        Config::default()
    };

    if let Some(exclude) = cli.exclude {
        config.excluded_names = exclude;
    }

    // Resolve root directory to absolute path
    let root_dir = cli.root.canonicalize().unwrap_or_else(|_| cli.root.clone());

    if !root_dir.exists() {
        return Err(format!("Root directory does not exist: {}", root_dir.display()).into());
    }

    if !root_dir.is_dir() {
        return Err(format!("Root path is not a directory: {}", root_dir.display()).into());
    }

    info!("Serving files from: {}", root_dir.display());
    info!("Excluded names: {}", config.excluded_names.join(", "));

    let state = AppState::with_config(root_dir, config);
    let app = routes::app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", cli.bind, cli.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Folder browser running at http://localhost:{}", cli.port);

    axum::serve(listener, app).await?;

    Ok(())
}
