//! Minimal HTTP API accepting suppliers and salespeople
//!
//! ```bash
//! cargo run --example dto_api
//! curl -X POST localhost:3000/suppliers -H 'content-type: application/json' \
//!      -d '{"name":"Acme","taxId":"123"}'
//! ```
//!
//! Set `DTO_SETTINGS=path/to/settings.yaml` to choose the message locale.

use anyhow::Result;
use axum::{Json, Router, extract::FromRef, http::StatusCode, routing::post};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use trade_dtos::prelude::*;
use uuid::Uuid;

/// `Validated<T>` pulls the settings out of this state
#[derive(Clone, FromRef)]
struct AppState {
    settings: ValidationSettings,
}

async fn create_supplier(Validated(supplier): Validated<SupplierDto>) -> (StatusCode, Json<Value>) {
    let id = Uuid::new_v4();
    tracing::info!(%id, name = %supplier.name, "supplier accepted");
    (StatusCode::CREATED, Json(json!({ "id": id, "supplier": supplier })))
}

async fn create_salesperson(
    Validated(salesperson): Validated<SalespersonDto>,
) -> (StatusCode, Json<Value>) {
    let id = Uuid::new_v4();
    tracing::info!(%id, name = %salesperson.name, "salesperson accepted");
    (
        StatusCode::CREATED,
        Json(json!({ "id": id, "salesperson": salesperson })),
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,trade_dtos=debug")),
        )
        .init();

    let settings = match std::env::var("DTO_SETTINGS") {
        Ok(path) => ValidationSettings::from_yaml_file(&path)?,
        Err(_) => ValidationSettings::default(),
    };
    tracing::info!(locale = ?settings.locale, "validation settings loaded");

    let state = AppState { settings };

    let app = Router::new()
        .route("/suppliers", post(create_supplier))
        .route("/salespeople", post(create_salesperson))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
