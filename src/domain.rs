//! Domain models used by the backend: catalog entities, cases, and the
//! per-case lookup indices the validation engine reads from.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Causative organism a case is built around.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bacterium {
  pub id: String,
  pub name: String,
}

/// Catalog test (culture, stain, biochemical test...). The engine only ever looks at `id`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Test {
  pub id: String,
  pub name: String,
  #[serde(default)] pub kind: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sample {
  pub description: String,
  #[serde(default)] pub right_answer: bool,
}

/// One concrete test that satisfies a slot. `positive` is display payload only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Alternative {
  pub test_id: String,
  #[serde(default)] pub positive: bool,
}

/// Required-or-optional unit of work; any one alternative satisfies it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestSlot {
  #[serde(default)] pub is_required: bool,
  pub alternatives: Vec<Alternative>,
}

/// Ordered stage of tests. Groups gate each other strictly in sequence.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TestGroup {
  pub slots: Vec<TestSlot>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hint {
  pub test_id: String,
  pub text: String,
}

/// A complete scenario as authored. Read-only once it enters the catalog.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Case {
  pub id: String,
  pub name: String,
  #[serde(default)] pub bacterium: Option<Bacterium>,
  #[serde(default)] pub anamnesis: String,
  #[serde(default)] pub completion_text: String,
  #[serde(default)] pub completion_image: Option<String>,
  #[serde(default)] pub samples: Vec<Sample>,
  #[serde(default)] pub test_groups: Vec<TestGroup>,
  #[serde(default)] pub hints: Vec<Hint>,
  #[serde(default)] pub complete: bool,
}

/// True once bacterium, narrative, completion content, samples and test groups are all present.
pub fn is_complete(case: &Case) -> bool {
  let has_completion = !case.completion_text.is_empty() || case.completion_image.is_some();
  case.bacterium.is_some()
    && !case.anamnesis.is_empty()
    && has_completion
    && !case.samples.is_empty()
    && !case.test_groups.is_empty()
}

/// Position of the slot that owns a test id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotOwner {
  pub group: usize,
  pub slot: usize,
}

/// Immutable case plus the identifier indices built once when the snapshot is created.
#[derive(Clone, Debug)]
pub struct CaseSnapshot {
  pub case: Case,
  owners: HashMap<String, SlotOwner>,
  all_tests: HashSet<String>,
  hints: HashMap<String, String>,
}

impl CaseSnapshot {
  pub fn new(case: Case) -> Self {
    let mut owners = HashMap::new();
    let mut all_tests = HashSet::new();
    for (gi, group) in case.test_groups.iter().enumerate() {
      for (si, slot) in group.slots.iter().enumerate() {
        for alt in &slot.alternatives {
          all_tests.insert(alt.test_id.clone());
          let owner = SlotOwner { group: gi, slot: si };
          // First owner in group/slot order wins.
          let first = *owners.entry(alt.test_id.clone()).or_insert(owner);
          if first != owner {
            warn!(target: "game", case = %case.name, test_id = %alt.test_id, "Test referenced by more than one slot; keeping first owner");
          }
        }
      }
    }

    let mut hints = HashMap::new();
    for h in &case.hints {
      hints.entry(h.test_id.clone()).or_insert_with(|| h.text.clone());
    }

    Self { case, owners, all_tests, hints }
  }

  pub fn owner_of(&self, test_id: &str) -> Option<SlotOwner> {
    self.owners.get(test_id).copied()
  }

  pub fn all_tests(&self) -> &HashSet<String> {
    &self.all_tests
  }

  pub fn hints(&self) -> &HashMap<String, String> {
    &self.hints
  }
}
