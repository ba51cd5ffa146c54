//! Shared case fixtures for engine and router tests.

use crate::domain::{Alternative, Bacterium, Case, Hint, Sample, TestGroup, TestSlot};

pub fn slot(is_required: bool, tests: &[(&str, bool)]) -> TestSlot {
  TestSlot {
    is_required,
    alternatives: tests
      .iter()
      .map(|(id, positive)| Alternative { test_id: id.to_string(), positive: *positive })
      .collect(),
  }
}

pub fn group(slots: Vec<TestSlot>) -> TestGroup {
  TestGroup { slots }
}

/// Four groups over test0..test9, with a hint on test9.
pub fn scenario_case() -> Case {
  Case {
    id: "case-1".into(),
    name: "Test case".into(),
    bacterium: Some(Bacterium { id: "bac-1".into(), name: "Streptococcus agalactiae".into() }),
    anamnesis: "Milk from the left hind quarter is slightly lumpy.".into(),
    completion_text: "Case solved.".into(),
    completion_image: Some("completion.png".into()),
    samples: vec![
      Sample { description: "A rightAnswer".into(), right_answer: true },
      Sample { description: "B wrongAnswer".into(), right_answer: false },
      Sample { description: "C wrongAnswer".into(), right_answer: false },
    ],
    test_groups: vec![
      group(vec![slot(true, &[("test0", true), ("test1", false)]), slot(false, &[("test2", true)])]),
      group(vec![slot(true, &[("test3", true)]), slot(false, &[("test4", false)])]),
      group(vec![
        slot(true, &[("test5", true), ("test6", true)]),
        slot(true, &[("test7", true), ("test8", false)]),
      ]),
      group(vec![slot(true, &[("test9", true)])]),
    ],
    hints: vec![Hint { test_id: "test9".into(), text: "test hint".into() }],
    complete: true,
  }
}
