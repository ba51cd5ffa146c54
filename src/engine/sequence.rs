//! `checkTests`: validates a full submitted test set against the ordered groups.
//!
//! Unlocking is computed once against the whole performed set; a test is legal
//! iff its owning group is unlocked. Completion flags are case-wide:
//! `required_done` needs every group satisfied, `all_done` needs every
//! referenced test performed.

use std::collections::HashSet;

use serde_json::Value;
use tracing::debug;

use crate::domain::CaseSnapshot;
use crate::engine::groups::{group_satisfied, unlocked_groups};
use crate::engine::hints::resolve_hint;
use crate::error::GameError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestsVerdict {
  pub correct: bool,
  pub required_done: bool,
  pub all_done: bool,
  pub hint: Option<String>,
}

/// Accepts only a JSON list of strings; anything else is a malformed submission.
pub fn parse_test_submission(tests: Option<Value>) -> Result<Vec<String>, GameError> {
  match tests {
    Some(Value::Array(items)) => items
      .into_iter()
      .map(|v| match v {
        Value::String(s) => Ok(s),
        _ => Err(GameError::malformed_tests()),
      })
      .collect(),
    _ => Err(GameError::malformed_tests()),
  }
}

pub fn check_tests(snapshot: &CaseSnapshot, performed_ids: &[String]) -> TestsVerdict {
  let groups = &snapshot.case.test_groups;
  let performed: HashSet<&str> = performed_ids.iter().map(String::as_str).collect();
  let unlocked = unlocked_groups(groups, &performed);

  // Submission order is kept so the hint policy is deterministic.
  let invalid: Vec<&str> = performed_ids
    .iter()
    .map(String::as_str)
    .filter(|id| match snapshot.owner_of(id) {
      Some(owner) => !unlocked[owner.group],
      None => true,
    })
    .collect();

  let correct = invalid.is_empty();
  let required_done = groups.iter().all(|g| group_satisfied(g, &performed));
  let all_done = snapshot.all_tests().iter().all(|t| performed.contains(t.as_str()));

  // First invalid id (in submission order) that carries a hint.
  let hint = invalid
    .iter()
    .find_map(|id| resolve_hint(snapshot.hints(), id))
    .map(str::to_string);

  debug!(target: "game", case = %snapshot.case.id, submitted = performed_ids.len(), invalid = invalid.len(), correct, required_done, all_done, "Test sequence evaluated");

  TestsVerdict { correct, required_done, all_done, hint }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Case;
  use crate::engine::fixtures::{group, scenario_case, slot};
  use serde_json::json;

  fn run(case: Case, ids: &[&str]) -> TestsVerdict {
    let snap = CaseSnapshot::new(case);
    let ids: Vec<String> = ids.iter().map(|s| s.to_string()).collect();
    check_tests(&snap, &ids)
  }

  #[test]
  fn test_first_required_test_is_correct() {
    let v = run(scenario_case(), &["test0"]);
    assert!(v.correct);
    assert!(!v.required_done);
    assert!(!v.all_done);
  }

  #[test]
  fn test_first_optional_test_is_correct() {
    assert!(run(scenario_case(), &["test2"]).correct);
  }

  #[test]
  fn test_required_test_too_early_has_no_hint() {
    let v = run(scenario_case(), &["test3"]);
    assert!(!v.correct);
    assert_eq!(v.hint, None);
  }

  #[test]
  fn test_optional_test_too_early_is_wrong() {
    assert!(!run(scenario_case(), &["test4"]).correct);
  }

  #[test]
  fn test_too_early_test_returns_its_hint() {
    let v = run(scenario_case(), &["test9"]);
    assert!(!v.correct);
    assert_eq!(v.hint.as_deref(), Some("test hint"));
  }

  #[test]
  fn test_unknown_test_is_wrong() {
    let v = run(scenario_case(), &["test11"]);
    assert!(!v.correct);
    assert_eq!(v.hint, None);
  }

  #[test]
  fn test_required_path_completes_required_only() {
    let v = run(scenario_case(), &["test0", "test3", "test5", "test7", "test9"]);
    assert_eq!(v, TestsVerdict { correct: true, required_done: true, all_done: false, hint: None });
  }

  #[test]
  fn test_every_test_completes_all() {
    let all: Vec<String> = (0..10).map(|i| format!("test{i}")).collect();
    let refs: Vec<&str> = all.iter().map(String::as_str).collect();
    let v = run(scenario_case(), &refs);
    assert_eq!(v, TestsVerdict { correct: true, required_done: true, all_done: true, hint: None });
  }

  #[test]
  fn test_missing_any_single_test_is_not_all_done() {
    for skip in 0..10 {
      let ids: Vec<String> = (0..10).filter(|i| *i != skip).map(|i| format!("test{i}")).collect();
      let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
      assert!(!run(scenario_case(), &refs).all_done, "all_done without test{skip}");
    }
  }

  #[test]
  fn test_submission_order_does_not_matter_for_unlocking() {
    let v = run(scenario_case(), &["test9", "test7", "test5", "test3", "test0"]);
    assert!(v.correct);
    assert!(v.required_done);
  }

  #[test]
  fn test_empty_submission_on_optional_case() {
    let case = Case {
      test_groups: vec![group(vec![slot(false, &[("test0", true)])]), group(vec![slot(false, &[("test1", true)])])],
      ..Default::default()
    };
    let v = run(case, &[]);
    assert!(v.correct);
    assert!(v.required_done);
    assert!(!v.all_done);
  }

  #[test]
  fn test_optional_only_first_group_does_not_gate() {
    let case = Case {
      test_groups: vec![
        group(vec![slot(false, &[("test0", true), ("test1", false)]), slot(false, &[("test2", true)])]),
        group(vec![slot(true, &[("test3", true)]), slot(false, &[("test4", false)])]),
      ],
      ..Default::default()
    };
    assert!(run(case, &["test3", "test4"]).correct);
  }

  #[test]
  fn test_optional_last_group_is_not_required() {
    let case = Case {
      test_groups: vec![group(vec![slot(true, &[("test0", true)])]), group(vec![slot(false, &[("test1", true)])])],
      ..Default::default()
    };
    let v = run(case, &["test0"]);
    assert_eq!(v, TestsVerdict { correct: true, required_done: true, all_done: false, hint: None });
  }

  #[test]
  fn test_hint_comes_from_first_hinted_invalid_id() {
    let mut case = scenario_case();
    case.hints.push(crate::domain::Hint { test_id: "test3".into(), text: "stain first".into() });
    assert_eq!(run(case.clone(), &["test9", "test3"]).hint.as_deref(), Some("test hint"));
    assert_eq!(run(case.clone(), &["test3", "test9"]).hint.as_deref(), Some("stain first"));
    assert_eq!(run(case, &["test11", "test4", "test9"]).hint.as_deref(), Some("test hint"));
  }

  #[test]
  fn test_same_input_same_verdict() {
    let snap = CaseSnapshot::new(scenario_case());
    let ids = vec!["test0".to_string(), "test5".to_string()];
    assert_eq!(check_tests(&snap, &ids), check_tests(&snap, &ids));
  }

  #[test]
  fn test_parse_accepts_string_lists() {
    assert_eq!(parse_test_submission(Some(json!([]))).unwrap(), Vec::<String>::new());
    assert_eq!(parse_test_submission(Some(json!(["a", "b"]))).unwrap(), vec!["a", "b"]);
  }

  #[test]
  fn test_parse_rejects_malformed() {
    let err = GameError::malformed_tests();
    assert_eq!(parse_test_submission(None), Err(err.clone()));
    assert_eq!(parse_test_submission(Some(json!("test0"))), Err(err.clone()));
    assert_eq!(parse_test_submission(Some(json!({ "test0": true }))), Err(err.clone()));
    assert_eq!(parse_test_submission(Some(json!([1, 2]))), Err(err));
  }
}
