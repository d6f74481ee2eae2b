//! API client core and page state for the customer registry.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). `CustomerStore` layers the
//! page's state on top: one customer list, one two-field form, and the three
//! operations that change them. The host supplies a `Transport` to execute
//! requests.
//!
//! # Design
//! - `CustomerClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::CustomerClient;
pub use error::{ApiError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport};
pub use store::{CustomerStore, LoadState, Operation, Snapshot, StoreFailure};
pub use types::{Customer, CustomerForm, NewCustomer};
