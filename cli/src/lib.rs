//! Terminal front end for the customer registry.
//!
//! # Overview
//! Owns a `CustomerStore` backed by `ReqwestTransport` and drives it either
//! from an interactive line-based session or from one-shot subcommands. The
//! page is re-rendered from the store's snapshots after every command.

pub mod config;
pub mod error;
pub mod page;
pub mod transport;

pub use config::{Action, Args};
pub use error::CliError;
pub use page::{render_page, run_session, Command};
pub use transport::ReqwestTransport;
