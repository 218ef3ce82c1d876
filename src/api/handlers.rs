//! API request handlers

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use crate::core::{convert_bytes, ConversionOutput};
use crate::error::LocsheetError;
use crate::types::{ConversionMode, SheetSelector};

use super::server::AppState;

/// Envelope for the informational endpoints
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub request_id: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            request_id: Uuid::new_v4().to_string(),
            data,
        }
    }
}

/// Error body returned by `/api/convert`
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Message returned for every server-side failure. The cause is only logged.
pub const PROCESSING_FAILED: &str = "Failed to process file";

/// Conversion failure as an HTTP response: 400 for bad requests, 500 otherwise
#[derive(Debug)]
pub struct ApiError(pub LocsheetError);

impl From<LocsheetError> for ApiError {
    fn from(err: LocsheetError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if matches!(self.0, LocsheetError::FileTooLarge) {
            StatusCode::PAYLOAD_TOO_LARGE
        } else if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if self.0.is_client_error() {
            warn!(error = %self.0, "rejected conversion request");
            self.0.to_string()
        } else {
            error!(error = %self.0, "error processing file");
            PROCESSING_FAILED.to_string()
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

#[derive(Serialize)]
pub struct EndpointInfo {
    pub path: String,
    pub method: String,
    pub description: String,
}

/// Root endpoint response
#[derive(Serialize)]
pub struct RootResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub endpoints: Vec<EndpointInfo>,
}

fn endpoint(method: &str, path: &str, description: &str) -> EndpointInfo {
    EndpointInfo {
        path: path.to_string(),
        method: method.to_string(),
        description: description.to_string(),
    }
}

/// GET / - Root info
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(RootResponse {
        name: "locsheet".to_string(),
        version: state.version.clone(),
        description: "Spreadsheet to JSON localization converter".to_string(),
        endpoints: vec![
            endpoint("GET", "/health", "Health check endpoint"),
            endpoint("GET", "/version", "Get server version"),
            endpoint(
                "POST",
                "/api/convert",
                "Convert an uploaded spreadsheet (multipart: file, mode, sheet, sheet_index)",
            ),
        ],
    }))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// GET /health - Health check
pub async fn health() -> impl IntoResponse {
    Json(ApiResponse::ok(HealthResponse {
        status: "healthy".to_string(),
    }))
}

/// Version response
#[derive(Serialize)]
pub struct VersionResponse {
    pub version: String,
    pub modes: Vec<String>,
}

/// GET /version - Server version
pub async fn version(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(VersionResponse {
        version: state.version.clone(),
        modes: vec![
            ConversionMode::App.to_string(),
            ConversionMode::Backend.to_string(),
        ],
    }))
}

/// Fields of a conversion upload
#[derive(Debug, Default)]
pub struct ConvertRequest {
    pub file: Option<Vec<u8>>,
    pub mode: ConversionMode,
    pub sheet: SheetSelector,
}

impl ConvertRequest {
    /// Read the `file`, `mode`, `sheet` and `sheet_index` parts. Other parts are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, LocsheetError> {
        let mut request = ConvertRequest::default();
        let mut sheet_name = None;
        let mut sheet_index = None;

        while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "file" => {
                    let bytes = field.bytes().await.map_err(upload_error)?;
                    // Browsers send an empty part when no file was chosen
                    request.file = if bytes.is_empty() {
                        None
                    } else {
                        Some(bytes.to_vec())
                    };
                }
                "mode" => {
                    let text = field.text().await.map_err(upload_error)?;
                    if !text.trim().is_empty() {
                        request.mode = text.parse()?;
                    }
                }
                "sheet" => {
                    let text = field.text().await.map_err(upload_error)?;
                    if !text.trim().is_empty() {
                        sheet_name = Some(text);
                    }
                }
                "sheet_index" => {
                    let text = field.text().await.map_err(upload_error)?;
                    let text = text.trim();
                    if !text.is_empty() {
                        let index = text.parse().map_err(|_| {
                            LocsheetError::Upload(format!(
                                "sheet_index must be a sheet position, got '{}'",
                                text
                            ))
                        })?;
                        sheet_index = Some(index);
                    }
                }
                _ => {}
            }
        }

        request.sheet = SheetSelector::from_options(sheet_name, sheet_index);
        Ok(request)
    }
}

/// Keep the upload limit apart from other multipart failures
fn upload_error(err: MultipartError) -> LocsheetError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        LocsheetError::FileTooLarge
    } else {
        LocsheetError::Upload(err.body_text())
    }
}

/// POST /api/convert - Convert an uploaded spreadsheet
pub async fn convert(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ConversionOutput>, ApiError> {
    let multipart = multipart.map_err(|_| LocsheetError::InputMissing)?;
    let request = ConvertRequest::from_multipart(multipart).await?;

    let output = convert_bytes(request.file.as_deref(), &request.sheet, request.mode)?;
    Ok(Json(output))
}
