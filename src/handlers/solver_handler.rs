use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{request::SolveRequest, response::SolveResponse},
};

/// Runs the whole batch inside the request and answers once it is done.
#[post("/")]
pub async fn solve(
    state: web::Data<AppState>,
    request: web::Json<SolveRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let request_id = get_request_id(&req).unwrap_or_else(|| "-".to_string());
    let (token, plan) = request.into_inner().into_plan()?;

    log::info!(
        "[{}] solving units {:?} (topic cap {:?})",
        request_id,
        plan.unit_ids,
        plan.cap
    );

    let summary = state
        .solver_service
        .solve(&token, &plan)
        .await
        .map_err(|e| {
            log::error!("[{}] run failed: {}", request_id, e);
            e
        })?;

    log::info!(
        "[{}] done: {} topics found, {} processed, {} already complete",
        request_id,
        summary.topics_count,
        summary.processed_topics,
        summary.skipped_topics
    );

    Ok(HttpResponse::Ok().json(SolveResponse::from(summary)))
}
