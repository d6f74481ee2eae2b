//! Command-line and environment configuration.

use std::time::Duration;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "customers", about = "Register, list and delete customers")]
pub struct Args {
    /// Base address of the customer API.
    #[arg(long, env = "CUSTOMER_API_URL", default_value = "http://localhost:3333")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// Fallback filter when `RUST_LOG` is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Run a single operation instead of the interactive page.
    #[command(subcommand)]
    pub action: Option<Action>,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// Print the current customer list.
    List,
    /// Register a customer.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Delete a customer by id.
    Delete {
        #[arg(long)]
        id: String,
    },
}
