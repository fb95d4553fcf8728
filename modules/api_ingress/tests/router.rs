use std::time::Duration;

use axum::{
    body::Body,
    extract::Extension,
    http::{Request, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`
use utoipa::openapi::{
    path::{HttpMethod, OperationBuilder, PathItem},
    InfoBuilder, OpenApi, OpenApiBuilder, PathsBuilder,
};

use api_ingress::{request_id::XRequestId, ApiIngress, ApiIngressConfig, API_TITLE};

fn module_doc() -> OpenApi {
    OpenApiBuilder::new()
        .info(InfoBuilder::new().title("echo").version("0.1.0").build())
        .paths(
            PathsBuilder::new().path(
                "/echo",
                PathItem::new(
                    HttpMethod::Get,
                    OperationBuilder::new().operation_id(Some("echo")).build(),
                ),
            ),
        )
        .build()
}

fn module_routes() -> Router {
    Router::new()
        .route("/echo", get(echo_handler))
        .route("/slow", get(slow_handler))
        .route("/upload", post(upload_handler))
}

fn app_with(config: ApiIngressConfig) -> Router {
    ApiIngress::new(config)
        .build_router(module_routes(), vec![module_doc()])
        .unwrap()
}

fn app() -> Router {
    app_with(ApiIngressConfig::default())
}

async fn get_json(app: Router, uri: &str, request_id: Option<&str>) -> (StatusCode, Option<String>, Value) {
    let mut req = Request::builder().uri(uri);
    if let Some(id) = request_id {
        req = req.header("x-request-id", id);
    }
    let response = app.oneshot(req.body(Body::empty()).unwrap()).await.unwrap();

    let status = response.status();
    let rid = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, rid, json)
}

#[tokio::test]
async fn generates_request_id_when_missing() {
    let (status, rid, body) = get_json(app(), "/echo", None).await;

    assert_eq!(status, StatusCode::OK);
    let rid = rid.expect("x-request-id should be generated");
    assert!(!rid.is_empty());
    // the handler saw the same id through extensions
    assert_eq!(body["request_id"], rid);
}

#[tokio::test]
async fn preserves_incoming_request_id() {
    let (status, rid, body) = get_json(app(), "/echo", Some("abc-123")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rid.as_deref(), Some("abc-123"));
    assert_eq!(body["request_id"], "abc-123");
}

#[tokio::test]
async fn health_reports_healthy() {
    let (status, rid, body) = get_json(app(), "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(rid.is_some());
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn openapi_document_merges_module_paths() {
    let (status, _, body) = get_json(app(), "/openapi.json", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], API_TITLE);
    assert!(body["paths"]["/echo"]["get"].is_object());
}

#[tokio::test]
async fn docs_can_be_disabled() {
    let app = app_with(ApiIngressConfig {
        enable_docs: false,
        ..Default::default()
    });

    let (status, _, _) = get_json(app.clone(), "/openapi.json", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _, _) = get_json(app, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn slow_handlers_hit_the_request_timeout() {
    let app = app_with(ApiIngressConfig {
        request_timeout: Duration::from_millis(50),
        ..Default::default()
    });

    let (status, rid, _) = get_json(app, "/slow", Some("slow-1")).await;
    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(rid.as_deref(), Some("slow-1"));
}

#[tokio::test]
async fn oversized_bodies_are_rejected() {
    let app = app_with(ApiIngressConfig {
        body_limit_bytes: 16,
        ..Default::default()
    });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload")
                .header("content-length", "64")
                .body(Body::from(vec![b'x'; 64]))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn serves_over_tcp_until_shutdown() {
    let ingress = ApiIngress::new(ApiIngressConfig::default());
    let router = ingress
        .build_router(module_routes(), vec![module_doc()])
        .unwrap();
    let listener = ingress
        .bind(ingress.bind_addr("127.0.0.1", 0).unwrap())
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = tokio::spawn(async move {
        ingress
            .serve(listener, router, async move {
                let _ = stop_rx.await;
            })
            .await
    });

    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    assert!(resp.headers().contains_key("x-request-id"));

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}

async fn echo_handler(Extension(XRequestId(request_id)): Extension<XRequestId>) -> Json<Value> {
    Json(json!({ "request_id": request_id }))
}

async fn slow_handler() -> &'static str {
    tokio::time::sleep(Duration::from_secs(5)).await;
    "too late"
}

async fn upload_handler(body: axum::body::Bytes) -> String {
    body.len().to_string()
}
