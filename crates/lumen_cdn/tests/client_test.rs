//! CloudinaryClient against a local stand-in for the provider API.

use axum::{
    Json, Router,
    extract::{Multipart, Path},
    http::{HeaderMap, StatusCode, header},
    routing::{get, post},
};
use lumen_cdn::{
    CdnConfigBuilder, CdnErrorKind, CloudinaryClient, MediaProvider, PendingUpload, sign_params,
};
use serde_json::{Value, json};
use std::collections::BTreeMap;

const CLOUD: &str = "demo";
const KEY: &str = "key";
const SECRET: &str = "secret";
/// `base64("key:secret")`
const BASIC_AUTH: &str = "Basic a2V5OnNlY3JldA==";

async fn stub_upload(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    let mut params = BTreeMap::new();
    let mut file_bytes = None;
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            file_bytes = Some(field.bytes().await.unwrap().len());
        } else {
            params.insert(name, field.text().await.unwrap());
        }
    }

    let signature = params.get("signature").cloned().unwrap_or_default();
    let authorized = file_bytes.is_some()
        && params.get("api_key").map(String::as_str) == Some(KEY)
        && params.get("signature_algorithm").map(String::as_str) == Some("sha256")
        && sign_params(&params, SECRET) == signature;
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": {"message": "Invalid Signature"}})),
        );
    }

    let public_id = format!("{}/{}", params["folder"], params["public_id"]);
    (
        StatusCode::OK,
        Json(json!({
            "public_id": public_id,
            "secure_url": format!("https://res.cloudinary.com/{CLOUD}/image/upload/v1/{public_id}.webp"),
            "bytes": file_bytes,
            "transformation": params.get("transformation"),
        })),
    )
}

async fn stub_resource(
    headers: HeaderMap,
    Path((_cloud, public_id)): Path<(String, String)>,
) -> (StatusCode, String) {
    if headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) != Some(BASIC_AUTH) {
        return (
            StatusCode::UNAUTHORIZED,
            json!({"error": {"message": "Invalid credentials"}}).to_string(),
        );
    }
    match public_id.as_str() {
        "my-images/gone" => (
            StatusCode::NOT_FOUND,
            json!({"error": {"message": format!("Resource not found - {public_id}")}}).to_string(),
        ),
        "my-images/partial" => (
            StatusCode::OK,
            json!({"width": 10, "format": "png", "bytes": 99}).to_string(),
        ),
        "my-images/garbled" => (StatusCode::OK, "<html>not json</html>".to_string()),
        _ => (
            StatusCode::OK,
            json!({"public_id": public_id, "width": 640, "height": 480, "format": "webp", "bytes": 12345})
                .to_string(),
        ),
    }
}

/// Serve the stand-in API on an ephemeral port and return its base URL.
async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/v1_1/:cloud/image/upload", post(stub_upload))
        .route(
            "/v1_1/:cloud/resources/image/upload/*public_id",
            get(stub_resource),
        );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{}", addr)
}

fn client(api_base: &str, api_secret: &str) -> CloudinaryClient {
    let config = CdnConfigBuilder::default()
        .cloud_name(CLOUD)
        .api_key(KEY)
        .api_secret(api_secret)
        .api_base(api_base)
        .build()
        .unwrap();
    CloudinaryClient::new(config)
}

fn png(filename: &str, len: usize) -> PendingUpload {
    PendingUpload {
        data: vec![0x89; len],
        filename: Some(filename.to_string()),
        content_type: "image/png".to_string(),
    }
}

#[tokio::test]
async fn test_upload_sends_signed_form() {
    let base = spawn_stub().await;

    let file = client(&base, SECRET).upload(png("cat.png", 321)).await.unwrap();

    assert!(file.public_id().starts_with("my-images/"), "{}", file.public_id());
    assert!(
        file.url()
            .starts_with("https://res.cloudinary.com/demo/image/upload/v1/my-images/")
    );
    assert_eq!(*file.size(), 321);
    assert_eq!(file.original_name().as_deref(), Some("cat.png"));
}

#[tokio::test]
async fn test_upload_rejected_signature_maps_to_api_error() {
    let base = spawn_stub().await;

    let err = client(&base, "wrong-secret")
        .upload(png("cat.png", 10))
        .await
        .unwrap_err();

    assert_eq!(
        err.kind,
        CdnErrorKind::Api {
            status: 401,
            message: "Invalid Signature".to_string(),
        }
    );
}

#[tokio::test]
async fn test_resource_returns_metadata() {
    let base = spawn_stub().await;

    let metadata = client(&base, SECRET)
        .resource("my-images/1700000000000-42")
        .await
        .unwrap();

    assert_eq!(metadata.width, 640);
    assert_eq!(metadata.height, 480);
    assert_eq!(metadata.format, "webp");
    assert_eq!(metadata.bytes, 12345);
}

#[tokio::test]
async fn test_resource_not_found_carries_provider_message() {
    let base = spawn_stub().await;

    let err = client(&base, SECRET)
        .resource("my-images/gone")
        .await
        .unwrap_err();

    match err.kind {
        CdnErrorKind::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Resource not found - my-images/gone");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_resource_with_missing_fields_fails_closed() {
    let base = spawn_stub().await;

    let err = client(&base, SECRET)
        .resource("my-images/partial")
        .await
        .unwrap_err();

    assert_eq!(err.kind, CdnErrorKind::MissingField("height".to_string()));
}

#[tokio::test]
async fn test_resource_with_unparseable_body() {
    let base = spawn_stub().await;

    let err = client(&base, SECRET)
        .resource("my-images/garbled")
        .await
        .unwrap_err();

    assert!(matches!(err.kind, CdnErrorKind::Deserialization(_)));
}

#[tokio::test]
async fn test_unreachable_provider_is_http_error() {
    // Bind and drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{}", addr), SECRET)
        .resource("my-images/a")
        .await
        .unwrap_err();

    assert!(matches!(err.kind, CdnErrorKind::Http(_)));
}
