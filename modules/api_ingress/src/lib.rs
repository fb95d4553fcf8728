//! HTTP host: owns the listener, the shared middleware stack, health and
//! OpenAPI endpoints. Modules contribute their routes as a plain `Router`.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{middleware::from_fn, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    map_response_body::MapResponseBodyLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};
use utoipa::openapi::{InfoBuilder, OpenApi, OpenApiBuilder};

pub mod config;
pub mod request_id;
pub mod web;

pub use config::ApiIngressConfig;

/// Title of the merged OpenAPI document.
pub const API_TITLE: &str = "Users Registry API";

pub struct ApiIngress {
    config: ApiIngressConfig,
}

impl ApiIngress {
    pub fn new(config: ApiIngressConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiIngressConfig {
        &self.config
    }

    /// Address to listen on: `bind_addr` if configured, else `host:port`.
    pub fn bind_addr(&self, host: &str, port: u16) -> Result<SocketAddr> {
        let raw = self
            .config
            .bind_addr
            .clone()
            .unwrap_or_else(|| format!("{host}:{port}"));
        raw.parse()
            .with_context(|| format!("Invalid bind address '{raw}'"))
    }

    /// Merge every module document under one `info` block.
    pub fn merge_openapi(docs: impl IntoIterator<Item = OpenApi>) -> OpenApi {
        let mut merged = OpenApiBuilder::new()
            .info(
                InfoBuilder::new()
                    .title(API_TITLE)
                    .version(env!("CARGO_PKG_VERSION"))
                    .build(),
            )
            .build();
        for doc in docs {
            merged.merge(doc);
        }
        merged
    }

    /// Wrap module routes with health, docs and the shared middleware stack.
    pub fn build_router(&self, routes: Router, docs: Vec<OpenApi>) -> Result<Router> {
        tracing::debug!("Building HTTP router");
        let mut router = routes.route("/health", get(web::health_check));

        if self.config.enable_docs {
            let openapi = Self::merge_openapi(docs);
            let paths = openapi.paths.paths.len();
            let doc = Arc::new(
                serde_json::to_value(&openapi).context("Failed to render OpenAPI document")?,
            );
            router = router
                .merge(
                    Router::new()
                        .route("/openapi.json", get(web::openapi_json))
                        .with_state(doc),
                )
                .route("/docs", get(web::serve_docs));
            tracing::info!("Serving OpenAPI document with {} paths", paths);
        }

        let x_request_id = request_id::header();

        // Outermost first: the id exists before the trace span opens and is
        // copied to the response on the way out.
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                x_request_id.clone(),
                request_id::MakeReqId,
            ))
            .layer(PropagateRequestIdLayer::new(x_request_id))
            .layer(request_id::create_trace_layer())
            .layer(from_fn(request_id::push_req_id_to_extensions))
            .layer(TimeoutLayer::new(self.config.request_timeout))
            // Timeout needs a `Default` response body; the limit layer's isn't.
            .layer(MapResponseBodyLayer::new(axum::body::Body::new))
            .layer(RequestBodyLimitLayer::new(self.config.body_limit_bytes));

        router = router.layer(middleware);
        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }
        Ok(router)
    }

    /// Bind the listening socket.
    pub async fn bind(&self, addr: SocketAddr) -> Result<tokio::net::TcpListener> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        tracing::info!("HTTP server bound on {}", listener.local_addr()?);
        Ok(listener)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn serve<F>(
        &self,
        listener: tokio::net::TcpListener,
        router: Router,
        shutdown: F,
    ) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("HTTP server shutting down gracefully");
            })
            .await
            .context("HTTP server failed")
    }
}
