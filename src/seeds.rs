//! Seed data: built-in cases that keep the game playable without a catalog file.

use crate::domain::{is_complete, Alternative, Bacterium, Case, Hint, Sample, TestGroup, TestSlot};

fn alt(test_id: &str, positive: bool) -> Alternative {
  Alternative { test_id: test_id.into(), positive }
}

fn milk_samples() -> Vec<Sample> {
  vec![
    Sample { description: "Maitonäyte Muurikin kaikista neljänneksistä".into(), right_answer: true },
    Sample { description: "Tankkimaitonäyte".into(), right_answer: false },
    Sample { description: "Ulostenäyte Muurikilta".into(), right_answer: false },
    Sample { description: "Virtsanäyte Muurikilta".into(), right_answer: false },
  ]
}

/// Minimal set of built-in cases. Test ids are stable slugs of the seed test catalog.
pub fn seed_cases() -> Vec<Case> {
  let strep = Bacterium { id: "streptococcus-agalactiae".into(), name: "Streptococcus agalactiae".into() };

  let mut cases = vec![
    Case {
      id: "maitotila-1".into(),
      name: "Maitotila 1".into(),
      bacterium: Some(strep.clone()),
      anamnesis: "Vasemman takaneljänneksen maito on hiukan kokkareista.".into(),
      completion_text: "You completed the initial case!".into(),
      completion_image: None,
      samples: milk_samples(),
      test_groups: vec![
        TestGroup {
          slots: vec![
            TestSlot { is_required: false, alternatives: vec![alt("veriagar-aerobinen", true)] },
            TestSlot { is_required: true, alternatives: vec![alt("gram-varjays", true), alt("hirs-sarja", true)] },
          ],
        },
        TestGroup {
          slots: vec![TestSlot { is_required: true, alternatives: vec![alt("katalaasitesti", false)] }],
        },
        TestGroup {
          slots: vec![
            TestSlot { is_required: false, alternatives: vec![alt("eskuliiniveriagar", true), alt("edwardsin-agar", true)] },
            TestSlot { is_required: true, alternatives: vec![alt("camp-testi", true)] },
          ],
        },
      ],
      hints: vec![Hint {
        test_id: "camp-testi".into(),
        text: "Selvitä ensin katalaasireaktio.".into(),
      }],
      complete: false,
    },
    Case {
      id: "maitotila-2".into(),
      name: "Maitotila 2".into(),
      bacterium: Some(strep),
      anamnesis: "Vasemman takaneljänneksen maito on hiukan kokkareista.".into(),
      completion_text: "You completed the initial case!".into(),
      completion_image: None,
      samples: milk_samples(),
      test_groups: vec![],
      hints: vec![],
      complete: false,
    },
  ];

  for c in &mut cases {
    c.complete = is_complete(c);
  }
  cases
}
