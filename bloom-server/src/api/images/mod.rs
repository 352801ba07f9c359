//! 图片访问路由
//!
//! GET /api/image/{filename} - 返回存储的灵感图片

use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/image/{filename}", get(serve_image))
}

async fn serve_image(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    let path = state
        .images
        .resolve(&filename)
        .ok_or_else(|| AppError::with_message(ErrorCode::NotFound, "Image not found"))?;

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::internal(format!("Failed to read image: {e}")))?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, mime.to_string())], bytes))
}
