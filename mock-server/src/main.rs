use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// In-memory customer API for local runs and tests.
#[derive(Parser)]
struct Args {
    #[arg(long, env = "PORT", default_value_t = 3333)]
    port: u16,

    /// Fallback filter when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let addr = format!("127.0.0.1:{}", args.port);
    let listener = TcpListener::bind(&addr).await?;
    mock_server::run(listener).await
}
