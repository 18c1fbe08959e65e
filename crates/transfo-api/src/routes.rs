//! Route handlers and the JSON envelope.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use transfo_query::{aggregate, unique_contract_ids, unique_customers};
use transfo_storage::RowSource;

/// Shared handler state: the row source behind every read.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn RowSource>,
}

impl AppState {
    /// Wrap a row source.
    pub fn new(store: Arc<dyn RowSource>) -> Self {
        Self { store }
    }
}

/// Build the API router. CORS is wide open, as the deployment serves the
/// browser client from a different origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/customers", get(get_customers))
        .route("/api/customers/unique", get(get_unique_customers))
        .route("/api/customers/contracts", get(get_all_contracts))
        .route("/api/customers/count", get(get_customer_count))
        .route("/api/customers/{name}/contracts", get(get_customer_contracts))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

type Reply = (StatusCode, Json<Value>);

/// Failure envelope. `collection` names the key the client iterates, so it
/// always sees an empty list rather than a missing field.
fn fail(collection: Option<&str>, error: &str) -> Reply {
    let mut body = json!({
        "success": false,
        "error": error,
    });
    if let Some(key) = collection {
        body[key] = json!([]);
    }
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
}

/// All customers, aggregated into the nested contract view.
async fn get_customers(State(state): State<AppState>) -> Reply {
    match state.store.fetch_rows().await {
        Ok(rows) => {
            let customers = aggregate(&rows);
            let count = customers.len();
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "customers": customers,
                    "count": count,
                })),
            )
        }
        Err(err) => {
            tracing::error!(%err, "failed to fetch customers");
            fail(Some("customers"), "Failed to fetch customers")
        }
    }
}

/// Distinct customer names, for the filter dropdown.
async fn get_unique_customers(State(state): State<AppState>) -> Reply {
    match state.store.fetch_rows().await {
        Ok(rows) => {
            let customers = unique_customers(&rows);
            let count = customers.len();
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "customers": customers,
                    "count": count,
                })),
            )
        }
        Err(err) => {
            tracing::error!(%err, "failed to fetch unique customers");
            fail(Some("customers"), "Failed to fetch unique customers")
        }
    }
}

/// Every stored row, flat, with the count of distinct contract ids.
async fn get_all_contracts(State(state): State<AppState>) -> Reply {
    match state.store.fetch_rows().await {
        Ok(rows) => {
            let count = unique_contract_ids(&rows).len();
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "contracts": rows,
                    "count": count,
                })),
            )
        }
        Err(err) => {
            tracing::error!(%err, "failed to fetch contracts");
            fail(Some("contracts"), "Failed to fetch contracts")
        }
    }
}

/// One customer's contracts, aggregated. Unknown customers get an empty
/// list, not an error.
async fn get_customer_contracts(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Reply {
    match state.store.fetch_rows_for_customer(&name).await {
        Ok(rows) => {
            let contracts = aggregate(&rows)
                .into_iter()
                .next()
                .map(|customer| customer.contracts)
                .unwrap_or_default();
            let count = contracts.len();
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "customer": name,
                    "contracts": contracts,
                    "count": count,
                })),
            )
        }
        Err(err) => {
            tracing::error!(%err, customer = %name, "failed to fetch customer contracts");
            fail(Some("contracts"), "Failed to fetch customer contracts")
        }
    }
}

/// Number of distinct customers.
async fn get_customer_count(State(state): State<AppState>) -> Reply {
    match state.store.fetch_rows().await {
        Ok(rows) => {
            let count = unique_customers(&rows).len();
            (
                StatusCode::OK,
                Json(json!({
                    "success": true,
                    "count": count,
                })),
            )
        }
        Err(err) => {
            tracing::error!(%err, "failed to count customers");
            fail(None, "Failed to get customer count")
        }
    }
}

/// Storage health probe.
async fn health(State(state): State<AppState>) -> Reply {
    if state.store.ping().await {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "status": "healthy",
                "database": "connected",
            })),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({
                "success": false,
                "status": "unhealthy",
                "database": "disconnected",
            })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::Request;
    use tower::ServiceExt;
    use transfo_core::Row;
    use transfo_storage::MemoryStore;

    fn app(store: MemoryStore) -> Router {
        router(AppState::new(Arc::new(store)))
    }

    fn seeded_app() -> Router {
        app(MemoryStore::new(vec![
            Row::new("S1", "C1", "Acme", "10"),
            Row::new("S2", "C1", "Acme", "5"),
            Row::new("S3", "C2", "Acme", "bad"),
            Row::new("S4", "C3", "Zenith", "7"),
        ]))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn customers_returns_aggregated_envelope() {
        let (status, body) = get_json(seeded_app(), "/api/customers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 2);

        let acme = &body["customers"][0];
        assert_eq!(acme["customer"], "Acme");
        assert_eq!(acme["unique_contracts"], 2);
        assert_eq!(acme["total_transformers"], 3);
        assert_eq!(acme["total_power"], 15.0);
    }

    #[tokio::test]
    async fn unique_customers_are_sorted_names() {
        let (status, body) = get_json(seeded_app(), "/api/customers/unique").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["customers"], json!(["Acme", "Zenith"]));
        assert_eq!(body["count"], 2);
    }

    #[tokio::test]
    async fn contracts_endpoint_counts_distinct_contract_ids() {
        let (status, body) = get_json(seeded_app(), "/api/customers/contracts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        // Four rows, three distinct contract ids.
        assert_eq!(body["contracts"].as_array().unwrap().len(), 4);
        assert_eq!(body["count"], 3);
    }

    #[tokio::test]
    async fn per_customer_contracts_are_scoped_and_counted() {
        let (status, body) = get_json(seeded_app(), "/api/customers/Acme/contracts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["customer"], "Acme");
        assert_eq!(body["count"], 2);
        assert_eq!(body["contracts"][0]["contract"], "C1");
        assert_eq!(body["contracts"][1]["contract"], "C2");
    }

    #[tokio::test]
    async fn unknown_customer_yields_empty_list_not_error() {
        let (status, body) = get_json(seeded_app(), "/api/customers/Nobody/contracts").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 0);
        assert_eq!(body["contracts"], json!([]));
    }

    #[tokio::test]
    async fn customer_count_counts_distinct_customers() {
        let (status, body) = get_json(seeded_app(), "/api/customers/count").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
    }

    #[tokio::test]
    async fn health_reports_connected_store() {
        let (status, body) = get_json(seeded_app(), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn unreachable_store_fails_health_and_data_endpoints() {
        let (status, body) = get_json(app(MemoryStore::unreachable()), "/api/health").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["database"], "disconnected");

        let (status, body) = get_json(app(MemoryStore::unreachable()), "/api/customers").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["customers"], json!([]));
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn empty_store_is_a_success_with_no_customers() {
        let (status, body) = get_json(app(MemoryStore::new(Vec::new())), "/api/customers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["customers"], json!([]));
        assert_eq!(body["count"], 0);
    }
}
