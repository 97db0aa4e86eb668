//! REST handlers and the routing table.

use axum::{
    body::Body,
    extract::{
        multipart::MultipartRejection, rejection::PathRejection, DefaultBodyLimit, Multipart,
        Path as AxumPath, Request, State,
    },
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use api_shared::{ErrorRes, HealthRes, HealthService, UploadReq, UploadRes};
use filedrop_core::{CoreError, UploadService, UploadedFile, UPLOAD_FIELD_NAME};

use crate::ApiError;

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    upload_service: UploadService,
    max_upload_bytes: usize,
}

impl AppState {
    pub fn new(upload_service: UploadService, max_upload_bytes: usize) -> Self {
        Self {
            upload_service,
            max_upload_bytes,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, upload_file, fetch_file),
    components(schemas(HealthRes, UploadReq, UploadRes, ErrorRes))
)]
pub struct ApiDoc;

/// Build the router for the REST API
///
/// | Method | Path | Handler |
/// |---|---|---|
/// | GET | `/health` | `health` |
/// | POST | `/upload` | `upload_file` |
/// | GET | `/files/*filename` | `fetch_file` |
/// | GET | `/api-docs/openapi.json` | `openapi_json` |
///
/// Cross-origin requests are allowed from any origin. The upload route carries its own body
/// limit taken from the state.
pub fn router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/health", get(health))
        .route("/upload", post(upload_file).layer(upload_limit))
        .route("/files/*filename", get(fetch_file))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks; does not touch storage.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/upload",
    request_body(content = UploadReq, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File stored", body = UploadRes),
        (status = 400, description = "No file provided or invalid filename", body = ErrorRes),
        (status = 413, description = "Upload exceeds the configured body limit"),
        (status = 500, description = "Internal server error")
    )
)]
/// Store an uploaded file
///
/// Reads the first multipart part named `file` and writes its bytes to the storage directory
/// under the part's filename, overwriting any existing file of that name. A request that is not
/// multipart, has no `file` part, or whose `file` part has no filename is answered with
/// `400 {"error": "No file provided"}`.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - no file part is present,
/// - the filename would escape the storage directory.
///
/// Returns `500 Internal Server Error` if:
/// - writing to the storage directory fails.
#[axum::debug_handler]
async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadRes>, ApiError> {
    let file = match multipart {
        Ok(mut multipart) => read_file_part(&mut multipart).await?,
        Err(rejection) => {
            tracing::debug!("Upload is not a multipart form: {}", rejection);
            None
        }
    };

    let upload_service = state.upload_service.clone();
    let metadata = tokio::task::spawn_blocking(move || upload_service.upload(file)).await??;
    Ok(Json(UploadRes::success(metadata.name.as_str())))
}

#[utoipa::path(
    get,
    path = "/files/{filename}",
    params(
        ("filename" = String, Path, description = "Stored filename; may contain `/`")
    ),
    responses(
        (status = 200, description = "Raw file bytes with a content type guessed from the extension"),
        (status = 404, description = "File not found")
    )
)]
/// Serve a previously uploaded file
///
/// The response carries the stored bytes with a content type guessed from the extension, plus
/// the `Last-Modified` and conditional-request handling of [`ServeFile`].
///
/// # Errors
/// Returns `404 Not Found` with the body `File not found` if nothing is stored under the name,
/// including names that do not percent-decode to UTF-8.
#[axum::debug_handler]
async fn fetch_file(
    State(state): State<AppState>,
    filename: Result<AxumPath<String>, PathRejection>,
    request: Request,
) -> Result<Response, ApiError> {
    let AxumPath(filename) = filename.map_err(|rejection| {
        tracing::debug!("Undecodable fetch path: {}", rejection);
        CoreError::NotFound(rejection.body_text())
    })?;
    let path = state.upload_service.locate(&filename)?;

    let response = match ServeFile::new(path).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    Ok(response.map(Body::new))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// First `file` part wins; other fields are skipped.
async fn read_file_part(multipart: &mut Multipart) -> Result<Option<UploadedFile>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        let filename = field.file_name().map(str::to_owned);
        let contents = field.bytes().await?;
        return Ok(Some(UploadedFile {
            filename,
            contents: contents.to_vec(),
        }));
    }

    Ok(None)
}
