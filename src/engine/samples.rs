//! Sample selection check: the submitted descriptions must be exactly the correct set.

use crate::domain::Case;

pub fn check_samples(case: &Case, submitted: &[String]) -> bool {
  let correct: Vec<&str> = case
    .samples
    .iter()
    .filter(|s| s.right_answer)
    .map(|s| s.description.as_str())
    .collect();

  submitted.len() == correct.len() && correct.iter().all(|c| submitted.iter().any(|s| s == c))
}
