use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, post_service},
};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

use super::GradebookSchema;
use crate::error::Result;

pub const GRAPHQL_PATH: &str = "/graphql";

/// Create the router: `POST /graphql` executes documents, `GET /graphql`
/// serves GraphiQL when enabled, `GET /health` answers liveness checks.
/// Every request is wrapped in a `tower_http` trace span.
pub fn create_app(schema: GradebookSchema, graphiql: bool) -> Router {
    let endpoint = if graphiql {
        get(graphiql_page).post_service(GraphQL::new(schema))
    } else {
        post_service(GraphQL::new(schema))
    };

    Router::new()
        .route(GRAPHQL_PATH, endpoint)
        .route("/health", get(health_check))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

async fn graphiql_page() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn health_check() -> &'static str {
    "ok"
}

/// Serve `app` on an already bound listener until Ctrl-C.
pub async fn run_server(listener: TcpListener, app: Router) -> Result<()> {
    let addr = listener.local_addr()?;
    info!("Server listening on {}", addr);
    info!("- GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
