//! Group satisfaction and the strict left-to-right unlock gate.

use std::collections::HashSet;

use crate::domain::TestGroup;

/// Every required slot has at least one of its alternatives in `performed`.
/// A group without required slots is satisfied.
pub fn group_satisfied(group: &TestGroup, performed: &HashSet<&str>) -> bool {
  group
    .slots
    .iter()
    .filter(|slot| slot.is_required)
    .all(|slot| slot.alternatives.iter().any(|alt| performed.contains(alt.test_id.as_str())))
}

/// `result[i]` is true iff every group before `i` is satisfied. Group 0 is always unlocked.
pub fn unlocked_groups(groups: &[TestGroup], performed: &HashSet<&str>) -> Vec<bool> {
  let mut unlocked = Vec::with_capacity(groups.len());
  let mut prefix_ok = true;
  for group in groups {
    unlocked.push(prefix_ok);
    prefix_ok = prefix_ok && group_satisfied(group, performed);
  }
  unlocked
}
