use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::error::ApiResult;
use super::response::{flash_redirect, ModeParams};
use super::session::Session;
use super::AppState;
use crate::presentation::MovieForm;

pub async fn home() -> &'static str {
    tracing::info!("Page accessed: Homepage");
    "Movie catalog homepage"
}

/// 前端首页，读取并清除本会话的提示消息
pub async fn index(State(state): State<AppState>, session: Session) -> ApiResult<Response> {
    tracing::info!("Page accessed: Frontend");

    let movies = state.catalog.all_movies().await?;
    let status = state.flash.take(&session.id);
    let page = state.renderer.render_index(&movies, status.as_deref())?;

    Ok(session.attach(Html(page).into_response()))
}

/// 编辑表单
pub async fn update_form(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ModeParams>,
) -> ApiResult<Response> {
    tracing::info!("Page accessed: Frontend update form");

    match state.catalog.movie_for_form(params.id.as_deref()).await? {
        Ok(document) => {
            let page = state.renderer.render_update_form(&MovieForm::from(document))?;
            Ok(session.attach(Html(page).into_response()))
        }
        Err(failure) => Ok(flash_redirect(&state.flash, &session, &failure.to_string())),
    }
}

pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404: Page not found")
}
