//! Stateless HTTP request builder and response parser for the customer API.
//!
//! # Design
//! `CustomerClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip.

use serde::Deserialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Customer, NewCustomer};

/// Synchronous, stateless client for the customer API.
#[derive(Debug, Clone)]
pub struct CustomerClient {
    base_url: String,
}

/// Create responses wrap the record: `{"customer": {...}}`. Every field is
/// optional here so a record without an id is reported as such rather than
/// as a generic decode failure.
#[derive(Deserialize)]
struct CreateEnvelope {
    #[serde(default)]
    customer: Option<CreatedRecord>,
}

#[derive(Deserialize)]
struct CreatedRecord {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    status: bool,
    #[serde(default)]
    created_at: String,
}

impl CustomerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_customers(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/customers", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_customer(&self, input: &NewCustomer) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/customer", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn build_delete_customer(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/customer?id={}", self.base_url, urlencoding::encode(id)),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_customers(&self, response: HttpResponse) -> Result<Vec<Customer>, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(ApiError::Deserialization)
    }

    pub fn parse_create_customer(&self, response: HttpResponse) -> Result<Customer, ApiError> {
        check_status(&response)?;
        let envelope: CreateEnvelope =
            serde_json::from_str(&response.body).map_err(ApiError::Deserialization)?;
        let record = envelope.customer.ok_or(ApiError::MissingCustomerId)?;
        match record.id {
            Some(id) if !id.is_empty() => Ok(Customer {
                id,
                name: record.name,
                email: record.email,
                status: record.status,
                created_at: record.created_at,
            }),
            _ => Err(ApiError::MissingCustomerId),
        }
    }

    pub fn parse_delete_customer(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)?;
        Ok(())
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
