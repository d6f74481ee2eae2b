//! Domain DTOs for the customer API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! `id`, `status` and `created_at` are owned by the server; the client never
//! fills them in, it only carries what a response returned.

use serde::{Deserialize, Serialize};

/// A single registered customer as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub created_at: String,
}

impl Customer {
    /// Display label for the server-owned active flag.
    pub fn status_label(&self) -> &'static str {
        if self.status {
            "ACTIVE"
        } else {
            "INACTIVE"
        }
    }
}

/// Request payload for registering a new customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

impl NewCustomer {
    /// Build a payload only when both fields are present.
    pub fn from_fields(name: &str, email: &str) -> Option<Self> {
        if name.is_empty() || email.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

/// The two text inputs of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
}

impl CustomerForm {
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
    }
}
