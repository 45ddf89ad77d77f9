//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented and logs include parameters and basic result info.

use std::sync::Arc;

use axum::{
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
  Json,
};
use tracing::{info, instrument};

use crate::domain::{Department, Difficulty, UserSubmission};
use crate::logic::{filter_cases, mentor_feedback};
use crate::protocol::*;
use crate::state::AppState;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse {
  Json(HealthOut { ok: true })
}

fn case_not_found(id: &str) -> axum::response::Response {
  (StatusCode::NOT_FOUND, Json(ErrorOut { message: format!("Unknown case id: {}", id) }))
    .into_response()
}

#[instrument(level = "info", skip(state, q))]
pub async fn http_list_cases(
  State(state): State<Arc<AppState>>,
  Query(q): Query<CaseListQuery>,
) -> impl IntoResponse {
  let search = q.search.unwrap_or_default();
  // "All" (the dashboard's sentinel) and unknown labels fall back to no filter.
  let difficulty = q.difficulty.as_deref().and_then(Difficulty::from_label);
  let department = q.department.as_deref().and_then(Department::from_label);

  let hits = filter_cases(&state.cases, &search, difficulty, department);

  let mut out = Vec::with_capacity(hits.len());
  for case in hits {
    let progress = state.store.get(&case.id).await.progress();
    out.push(to_summary(case, progress));
  }
  info!(target: "case", total = state.cases.len(), matched = out.len(), %search, "Dashboard listing served");
  Json(out)
}

#[instrument(level = "info", skip(state), fields(%id))]
pub async fn http_get_case(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
) -> impl IntoResponse {
  let Some(case) = state.find_case(&id) else {
    return case_not_found(&id);
  };
  let submission = state.store.get(&id).await;
  info!(target: "case", %id, "Case detail served");
  Json(to_detail(case, submission)).into_response()
}

#[instrument(level = "info", skip(state, body), fields(%id, progress = body.progress()))]
pub async fn http_put_submission(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<UserSubmission>,
) -> impl IntoResponse {
  if state.find_case(&id).is_none() {
    return case_not_found(&id);
  }
  let progress = body.progress();
  state.store.update(&id, body.clone()).await;
  info!(target: "case", %id, progress, "Submission updated");
  Json(SubmissionOut { submission: body, progress }).into_response()
}

#[instrument(level = "info", skip(state, body), fields(%id))]
pub async fn http_post_feedback(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  Json(body): Json<UserSubmission>,
) -> impl IntoResponse {
  let Some(case) = state.find_case(&id) else {
    return case_not_found(&id);
  };
  let (feedback, origin) = mentor_feedback(&state, case, &body).await;
  info!(target: "case", %id, %origin, feedback_len = feedback.len(), "Feedback served");
  Json(FeedbackOut { feedback, origin }).into_response()
}
