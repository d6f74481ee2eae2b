use std::io::Write;

use clap::Parser;
use customer_cli::{render_page, run_session, Action, Args, CliError, ReqwestTransport};
use customer_core::{CustomerClient, CustomerStore};
use tokio::io::BufReader;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let args = Args::parse();

    // Logs go to stderr so they never interleave with the rendered page.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let transport = ReqwestTransport::new(args.timeout())?;
    let store = CustomerStore::new(CustomerClient::new(&args.base_url), transport);
    let mut stdout = std::io::stdout();

    let Some(action) = args.action else {
        debug!(base_url = %args.base_url, "starting interactive session");
        let stdin = BufReader::new(tokio::io::stdin());
        run_session(&store, stdin, &mut stdout).await?;
        return Ok(());
    };

    debug!(base_url = %args.base_url, ?action, "running one-shot action");
    store.mount().await;
    match action {
        Action::List => {}
        Action::Add { name, email } => {
            store.create(&name, &email).await;
        }
        Action::Delete { id } => store.remove(&id).await,
    }
    stdout.write_all(render_page(&store.form(), &store.customers()).as_bytes())?;
    store.unmount();
    Ok(())
}
