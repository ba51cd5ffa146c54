//! HTTP endpoint handlers. These are thin wrappers that forward to core logic.
//! Each handler is instrumented; game decisions are logged in `logic`.

use std::sync::Arc;
use axum::{extract::{rejection::JsonRejection, Path, State}, Json, response::IntoResponse};
use tracing::instrument;

use crate::error::GameError;
use crate::identity::ActingUser;
use crate::protocol::*;
use crate::state::AppState;
use crate::logic;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state, user), fields(user = %user.id))]
pub async fn http_list_cases(
  State(state): State<Arc<AppState>>,
  user: ActingUser,
) -> Json<Vec<CaseSummaryOut>> {
  Json(logic::list_cases(&state))
}

#[instrument(level = "info", skip(state, user), fields(%case_id, user = %user.id))]
pub async fn http_get_case(
  State(state): State<Arc<AppState>>,
  Path(case_id): Path<String>,
  user: ActingUser,
) -> Result<Json<PlayableCaseOut>, GameError> {
  Ok(Json(logic::get_case_for_play(&state, &case_id)?))
}

#[instrument(level = "info", skip(state, user, body), fields(%case_id, user = %user.id))]
pub async fn http_check_samples(
  State(state): State<Arc<AppState>>,
  Path(case_id): Path<String>,
  user: ActingUser,
  body: Result<Json<CheckSamplesIn>, JsonRejection>,
) -> Result<Json<CheckSamplesOut>, GameError> {
  let Json(body) = body?;
  Ok(Json(logic::check_samples(&state, &case_id, &body.samples)?))
}

#[instrument(level = "info", skip(state, user, body), fields(%case_id, user = %user.id))]
pub async fn http_check_tests(
  State(state): State<Arc<AppState>>,
  Path(case_id): Path<String>,
  user: ActingUser,
  body: Result<Json<CheckTestsIn>, JsonRejection>,
) -> Result<Json<CheckTestsOut>, GameError> {
  // A body that is not even JSON is as malformed as a missing `tests` list.
  let Json(body) = body.map_err(|_| GameError::malformed_tests())?;
  Ok(Json(logic::check_tests(&state, &case_id, body.tests)?))
}

#[instrument(level = "info", skip(state, user, body), fields(%case_id, user = %user.id))]
pub async fn http_check_bacterium(
  State(state): State<Arc<AppState>>,
  Path(case_id): Path<String>,
  user: ActingUser,
  body: Result<Json<CheckBacteriumIn>, JsonRejection>,
) -> Result<Json<CheckBacteriumOut>, GameError> {
  let Json(body) = body?;
  let out = logic::check_bacterium(&state, &case_id, body.bacterium_name.as_deref(), &user).await?;
  Ok(Json(out))
}

#[instrument(level = "info", skip(state, user), fields(user = %user.id))]
pub async fn http_list_credits(
  State(state): State<Arc<AppState>>,
  user: ActingUser,
) -> Json<Vec<CreditOut>> {
  Json(logic::list_credits(&state, &user).await)
}
