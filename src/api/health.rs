use axum::{
    extract::State,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::AppState;
use super::error::{ApiError, ApiResult};

/// 健康检查端点
pub async fn health_check(
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    state.database.verify_integrity().await
        .map_err(|e| {
            tracing::error!("Health check failed: {}", e);
            ApiError::Internal("Database connection failed".to_string())
        })?;

    let stats = state.database.get_stats().await?;

    Ok(Json(json!({
        "status": true,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "database": "connected",
        "movie_count": stats.movie_count,
        "database_size_mb": stats.database_size_mb(),
        "pending_flash_messages": state.flash.size(),
    })))
}
