use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use super::error::ApiResult;
use super::extract::Submission;
use super::response::{dispatch, ModeParams, StatusBody};
use super::session::Session;
use super::AppState;
use crate::models::{Operation, Outcome};

fn respond(
    state: &AppState,
    session: &Session,
    params: &ModeParams,
    operation: Operation,
    outcome: Outcome,
) -> Response {
    dispatch(outcome, operation, params.mode(), &state.flash, session)
}

pub async fn add_movie(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ModeParams>,
    Submission(submission): Submission,
) -> ApiResult<Response> {
    tracing::info!("Page accessed: {}", Operation::Add);

    let outcome = state.catalog.add(submission).await?;
    Ok(respond(&state, &session, &params, Operation::Add, outcome))
}

pub async fn add_default_movie(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    tracing::info!("Page accessed: Add default");

    state.catalog.add_sample().await?;
    Ok(StatusBody::ok())
}

pub async fn update_movie(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ModeParams>,
    Submission(submission): Submission,
) -> ApiResult<Response> {
    tracing::info!("Page accessed: {}", Operation::Update);

    let outcome = state.catalog.update(submission).await?;
    Ok(respond(&state, &session, &params, Operation::Update, outcome))
}

pub async fn view_movie(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ModeParams>,
) -> ApiResult<Response> {
    tracing::info!("Page accessed: {}", Operation::View);

    let outcome = state.catalog.view(params.id.as_deref()).await?;
    Ok(respond(&state, &session, &params, Operation::View, outcome))
}

pub async fn view_all_movies(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ModeParams>,
) -> ApiResult<Response> {
    tracing::info!("Page accessed: {}", Operation::ViewAll);

    let outcome = state.catalog.view_all().await?;
    Ok(respond(&state, &session, &params, Operation::ViewAll, outcome))
}

pub async fn list_movies(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ModeParams>,
) -> ApiResult<Response> {
    tracing::info!("Page accessed: {}", Operation::List);

    let outcome = state.catalog.list().await?;
    Ok(respond(&state, &session, &params, Operation::List, outcome))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ModeParams>,
) -> ApiResult<Response> {
    tracing::info!("Page accessed: {}", Operation::Delete);

    let outcome = state.catalog.delete(params.id.as_deref()).await?;
    Ok(respond(&state, &session, &params, Operation::Delete, outcome))
}
