use thiserror::Error;

/// Startup and terminal failures. Customer API failures never surface here;
/// the store swallows and logs them.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
