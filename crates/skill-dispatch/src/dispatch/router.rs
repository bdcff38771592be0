use std::sync::Arc;

use crate::error::AppError;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::Utc;

use super::service::DispatchService;
use super::solver::AssignmentSolver;

/// Router builder exposing the dispatch solve endpoints.
pub fn dispatch_router<S>(service: Arc<DispatchService<S>>) -> Router
where
    S: AssignmentSolver + 'static,
{
    Router::new()
        .route("/optimize", get(optimize_handler::<S>))
        .route("/api/v1/dispatch/plan", get(plan_handler::<S>))
        .with_state(service)
}

pub(crate) async fn optimize_handler<S>(
    State(service): State<Arc<DispatchService<S>>>,
) -> Result<Response, AppError>
where
    S: AssignmentSolver + 'static,
{
    let plan = service.optimize()?;
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.as_ref())],
        plan.to_string(),
    )
        .into_response())
}

pub(crate) async fn plan_handler<S>(
    State(service): State<Arc<DispatchService<S>>>,
) -> Result<Response, AppError>
where
    S: AssignmentSolver + 'static,
{
    let plan = service.optimize()?;
    Ok((StatusCode::OK, axum::Json(plan.view(Utc::now()))).into_response())
}
