//! Service settings from the environment, and the case catalog from TOML.
//!
//! See `CatalogConfig` for the expected catalog schema.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::{is_complete, Alternative, Bacterium, Case, Hint, Sample, Test, TestGroup, TestSlot};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_IMAGE_BASE_URL: &str = "/images";

/// Process-level settings.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
  pub port: u16,
  pub catalog_path: Option<String>,
  pub image_base_url: String,
}

impl ServiceConfig {
  pub fn from_env() -> Self {
    let port = std::env::var("PORT")
      .ok()
      .and_then(|p| p.parse::<u16>().ok())
      .unwrap_or(DEFAULT_PORT);
    let catalog_path = std::env::var("CASE_CATALOG_PATH").ok().filter(|p| !p.is_empty());
    let image_base_url = std::env::var("IMAGE_BASE_URL")
      .ok()
      .filter(|u| !u.is_empty())
      .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.into());
    Self { port, catalog_path, image_base_url }
  }
}

#[derive(Clone, Debug, Deserialize, Default)]
pub struct CatalogConfig {
  #[serde(default)] pub bacteria: Vec<Bacterium>,
  #[serde(default)] pub tests: Vec<Test>,
  #[serde(default)] pub cases: Vec<CaseCfg>,
}

/// Case entry accepted in TOML. `bacterium` may name a bacterium by id or by name.
#[derive(Clone, Debug, Deserialize)]
pub struct CaseCfg {
  #[serde(default)] pub id: Option<String>,
  pub name: String,
  #[serde(default)] pub bacterium: Option<String>,
  #[serde(default)] pub anamnesis: String,
  #[serde(default)] pub completion_text: String,
  #[serde(default)] pub completion_image: Option<String>,
  #[serde(default)] pub samples: Vec<Sample>,
  #[serde(default)] pub test_groups: Vec<GroupCfg>,
  #[serde(default)] pub hints: Vec<HintCfg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GroupCfg {
  #[serde(default)] pub slots: Vec<SlotCfg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SlotCfg {
  #[serde(default)] pub required: bool,
  #[serde(default)] pub tests: Vec<AlternativeCfg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AlternativeCfg {
  pub test: String,
  #[serde(default)] pub positive: bool,
}

#[derive(Clone, Debug, Deserialize)]
pub struct HintCfg {
  pub test: String,
  pub text: String,
}

/// Attempt to load `CatalogConfig` from `path`. On any parsing/IO error, returns None.
pub fn load_catalog(path: &str) -> Option<CatalogConfig> {
  match std::fs::read_to_string(path) {
    Ok(s) => match toml::from_str::<CatalogConfig>(&s) {
      Ok(cfg) => {
        info!(target: "microbe_game", %path, cases = cfg.cases.len(), tests = cfg.tests.len(), "Loaded case catalog (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "microbe_game", %path, error = %e, "Failed to parse TOML catalog");
        None
      }
    },
    Err(e) => {
      error!(target: "microbe_game", %path, error = %e, "Failed to read TOML catalog file");
      None
    }
  }
}

impl CatalogConfig {
  /// Resolve references and produce cases ready for the catalog.
  ///
  /// With a non-empty `[[tests]]` table, alternatives naming unknown tests are
  /// dropped; slots and groups left empty by that are dropped too.
  pub fn into_cases(self) -> Vec<Case> {
    let known_tests: Option<HashMap<&str, &Test>> = if self.tests.is_empty() {
      None
    } else {
      Some(self.tests.iter().map(|t| (t.id.as_str(), t)).collect())
    };
    let test_known = |id: &str| known_tests.as_ref().map_or(true, |m| m.contains_key(id));

    let mut out = Vec::with_capacity(self.cases.len());
    for cc in &self.cases {
      let id = cc.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());

      let bacterium = match &cc.bacterium {
        Some(r) => {
          let found = self.bacteria.iter().find(|b| &b.id == r || &b.name == r).cloned();
          if found.is_none() {
            warn!(target: "microbe_game", case = %cc.name, bacterium = %r, "Unknown bacterium reference; case left without organism");
          }
          found
        }
        None => None,
      };

      let mut test_groups = Vec::new();
      for g in &cc.test_groups {
        let mut slots = Vec::new();
        for s in &g.slots {
          let alternatives: Vec<Alternative> = s
            .tests
            .iter()
            .filter(|a| {
              let ok = test_known(&a.test);
              if !ok {
                warn!(target: "microbe_game", case = %cc.name, test = %a.test, "Dropping alternative with unknown test");
              }
              ok
            })
            .map(|a| Alternative { test_id: a.test.clone(), positive: a.positive })
            .collect();
          if !alternatives.is_empty() {
            slots.push(TestSlot { is_required: s.required, alternatives });
          }
        }
        if !slots.is_empty() {
          test_groups.push(TestGroup { slots });
        }
      }

      let hints = cc
        .hints
        .iter()
        .map(|h| Hint { test_id: h.test.clone(), text: h.text.clone() })
        .collect();

      let mut case = Case {
        id,
        name: cc.name.clone(),
        bacterium,
        anamnesis: cc.anamnesis.clone(),
        completion_text: cc.completion_text.clone(),
        completion_image: cc.completion_image.clone(),
        samples: cc.samples.clone(),
        test_groups,
        hints,
        complete: false,
      };
      case.complete = is_complete(&case);
      out.push(case);
    }
    out
  }
}
