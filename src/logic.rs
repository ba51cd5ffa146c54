//! Core behaviors shared by both HTTP and WebSocket handlers.
//!
//! Each operation resolves the case snapshot first and fails fast on an
//! unknown id, so nothing is recorded for a request that cannot be served.

use serde_json::Value;
use tracing::{info, instrument};

use crate::engine;
use crate::identity::ActingUser;
use crate::protocol::{
  to_playable, CaseSummaryOut, CheckBacteriumOut, CheckSamplesOut, CheckTestsOut, CreditOut, PlayableCaseOut,
};
use crate::state::AppState;
use crate::util::{resolve_image_url, trunc_for_log};
use crate::error::GameError;

#[instrument(level = "info", skip(state))]
pub fn list_cases(state: &AppState) -> Vec<CaseSummaryOut> {
  state.playable_cases()
}

#[instrument(level = "info", skip(state), fields(%case_id))]
pub fn get_case_for_play(state: &AppState, case_id: &str) -> Result<PlayableCaseOut, GameError> {
  let snap = state.case(case_id)?;
  Ok(to_playable(&snap.case))
}

#[instrument(level = "info", skip(state, samples), fields(%case_id, submitted = samples.len()))]
pub fn check_samples(state: &AppState, case_id: &str, samples: &[String]) -> Result<CheckSamplesOut, GameError> {
  let snap = state.case(case_id)?;
  let correct = engine::check_samples(&snap.case, samples);
  info!(target: "game", case = %case_id, %correct, "Samples checked");
  Ok(CheckSamplesOut { correct })
}

#[instrument(level = "info", skip(state, tests), fields(%case_id))]
pub fn check_tests(state: &AppState, case_id: &str, tests: Option<Value>) -> Result<CheckTestsOut, GameError> {
  let snap = state.case(case_id)?;
  let performed = engine::parse_test_submission(tests)?;
  let v = engine::check_tests(&snap, &performed);
  info!(target: "game", case = %case_id, correct = v.correct, required_done = v.required_done, all_done = v.all_done, hinted = v.hint.is_some(), "Tests checked");
  Ok(CheckTestsOut {
    correct: v.correct,
    required_done: v.required_done,
    all_done: v.all_done,
    hint: v.hint,
  })
}

#[instrument(level = "info", skip(state, name, user), fields(%case_id, user = %user.id))]
pub async fn check_bacterium(
  state: &AppState,
  case_id: &str,
  name: Option<&str>,
  user: &ActingUser,
) -> Result<CheckBacteriumOut, GameError> {
  let snap = state.case(case_id)?;
  let case = &snap.case;
  let expected = case.bacterium.as_ref().map(|b| b.name.as_str());
  let correct = engine::bacterium_matches(expected, name);
  info!(target: "game", case = %case_id, user = %user.id, %correct, submitted = %trunc_for_log(name.unwrap_or(""), 64), "Bacterium checked");

  if !correct {
    return Ok(CheckBacteriumOut { correct, completion_image_url: None, completion_text: None });
  }

  state.credits.record(&user.id, &case.name).await;

  Ok(CheckBacteriumOut {
    correct,
    completion_image_url: case
      .completion_image
      .as_deref()
      .map(|img| resolve_image_url(&state.image_base_url, img)),
    completion_text: Some(case.completion_text.clone()).filter(|t| !t.is_empty()),
  })
}

/// Admins see every ledger entry; everyone else only their own.
#[instrument(level = "info", skip(state, user), fields(user = %user.id, admin = user.admin))]
pub async fn list_credits(state: &AppState, user: &ActingUser) -> Vec<CreditOut> {
  if user.admin {
    state.credits.all().await
  } else {
    state.credits.credits_for(&user.id).await.into_iter().collect()
  }
}
