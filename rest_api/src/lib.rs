// rest_api/src/lib.rs
use anyhow::{Context, Error as AnyhowError};
use axum::{
    http::{HeaderMap, HeaderName, Method},
    routing::get,
    Router,
};
use booking_engine::{create_storage, AppointmentStorage, BookingConfig, DoctorRegistry};
use models::{AppointmentId, Role};
use security::{AccessPolicy, HeaderRoleSource, Operation, RoleSource};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod errors;
pub mod handlers;
pub mod requests;

pub use errors::RestApiError;
use handlers::*;

// Shared state for the Axum application
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn AppointmentStorage>,
    pub registry: Arc<DoctorRegistry>,
    pub policy: Arc<AccessPolicy>,
    pub role_source: Arc<dyn RoleSource>,
}

impl AppState {
    pub fn from_config(config: &BookingConfig) -> Result<Self, AnyhowError> {
        let registry = Arc::new(DoctorRegistry::new(config.doctors.clone()));
        let header = HeaderName::from_bytes(config.role_header.as_bytes())
            .with_context(|| format!("Invalid role header name: {}", config.role_header))?;

        Ok(AppState {
            storage: create_storage(config, Arc::clone(&registry)),
            registry,
            policy: Arc::new(AccessPolicy::default()),
            role_source: Arc::new(HeaderRoleSource::new(header)),
        })
    }

    /// Swaps the mechanism that extracts the caller's role assertion.
    pub fn with_role_source(mut self, role_source: Arc<dyn RoleSource>) -> Self {
        self.role_source = role_source;
        self
    }

    /// Resolves the asserted role, then checks it against the policy.
    pub fn authorize(
        &self,
        headers: &HeaderMap,
        operation: Operation,
        resource: Option<AppointmentId>,
    ) -> Result<Role, RestApiError> {
        let role = self.role_source.resolve(headers)?;
        self.policy.authorize(role, operation, resource)?;
        Ok(role)
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route(
            "/appointments",
            get(list_appointments_handler).post(create_appointment_handler),
        )
        .route(
            "/appointments/:id",
            get(get_appointment_handler)
                .put(update_appointment_handler)
                .delete(delete_appointment_handler),
        )
        .route("/doctors", get(list_doctors_handler))
        .route("/health", get(health_check_handler))
        .route("/version", get(version_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

// Main function to start the REST API server
pub async fn start_server<F>(config: &BookingConfig, shutdown: F) -> Result<(), AnyhowError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.rest.host, config.rest.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.rest.host, config.rest.port))?;

    let listener = TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind to address: {}", addr))?;
    serve(listener, config, shutdown).await
}

/// Serves the API on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, config: &BookingConfig, shutdown: F) -> Result<(), AnyhowError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(AppState::from_config(config)?);
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!(%addr, doctors = config.doctors.len(), role_header = %config.role_header, "booking REST API listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .context("REST API server failed to start or run")?;

    info!("booking REST API stopped");
    Ok(())
}
