use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: bool,
    pub created_at: String,
}

#[derive(Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
}

/// Create responses wrap the new record under `customer`.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedCustomer {
    pub customer: Customer,
}

#[derive(Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

/// Customers in insertion order.
pub type Db = Arc<RwLock<Vec<Customer>>>;

pub fn app() -> Router {
    app_with(Vec::new())
}

/// Build the router over a pre-populated collection.
pub fn app_with(seed: Vec<Customer>) -> Router {
    let db: Db = Arc::new(RwLock::new(seed));
    Router::new()
        .route("/customers", get(list_customers))
        .route("/customer", post(create_customer).delete(delete_customer))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "customer API listening");
    }
    axum::serve(listener, app()).await
}

async fn list_customers(State(db): State<Db>) -> Json<Vec<Customer>> {
    let customers = db.read().await;
    Json(customers.clone())
}

async fn create_customer(
    State(db): State<Db>,
    Json(input): Json<CreateCustomer>,
) -> Result<Json<CreatedCustomer>, (StatusCode, Json<Value>)> {
    if input.name.trim().is_empty() || input.email.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "name and email are required" })),
        ));
    }
    let customer = Customer {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        email: input.email,
        status: true,
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    db.write().await.push(customer.clone());
    debug!(id = %customer.id, "customer created");
    Ok(Json(CreatedCustomer { customer }))
}

async fn delete_customer(
    State(db): State<Db>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, StatusCode> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or(StatusCode::BAD_REQUEST)?;
    let mut customers = db.write().await;
    let before = customers.len();
    customers.retain(|customer| customer.id != id);
    if customers.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    debug!(%id, "customer deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_serializes_to_json() {
        let customer = Customer {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            status: false,
            created_at: "t".to_string(),
        };
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "Ana");
        assert_eq!(json["email"], "ana@x.com");
        assert_eq!(json["status"], false);
        assert_eq!(json["created_at"], "t");
    }

    #[test]
    fn created_customer_wraps_record() {
        let created = CreatedCustomer {
            customer: Customer {
                id: "1".to_string(),
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                status: true,
                created_at: "t".to_string(),
            },
        };
        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json["customer"]["id"], "1");
    }

    #[test]
    fn create_customer_rejects_missing_email() {
        let result: Result<CreateCustomer, _> = serde_json::from_str(r#"{"name":"Ana"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn delete_params_id_is_optional() {
        let params: DeleteParams = serde_json::from_str(r#"{}"#).unwrap();
        assert!(params.id.is_none());
    }
}
