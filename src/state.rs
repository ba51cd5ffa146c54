//! Application state: the immutable case catalog and the credit ledger.
//!
//! This module owns:
//!   - case snapshots by id (built once at startup, never mutated)
//!   - the credit ledger (the only shared mutable store)
//!   - the base URL used to resolve completion images
//!
//! Catalog cases come first; built-in seeds only fill ids that are still free.

use std::{collections::HashMap, sync::Arc};
use tracing::{info, instrument};

use crate::config::{load_catalog, ServiceConfig};
use crate::credits::CreditLedger;
use crate::domain::{Case, CaseSnapshot};
use crate::error::GameError;
use crate::protocol::CaseSummaryOut;
use crate::seeds::seed_cases;

#[derive(Clone)]
pub struct AppState {
    pub cases: Arc<HashMap<String, Arc<CaseSnapshot>>>,
    pub credits: CreditLedger,
    pub image_base_url: String,
}

impl AppState {
    /// Build state from service config: load catalog, add seeds, build snapshots.
    #[instrument(level = "info", skip_all)]
    pub fn new(cfg: &ServiceConfig) -> Self {
        let mut cases = cfg
            .catalog_path
            .as_deref()
            .and_then(load_catalog)
            .map(|c| c.into_cases())
            .unwrap_or_default();
        cases.extend(seed_cases());
        Self::from_cases(cases, cfg.image_base_url.clone())
    }

    /// Build state from already-resolved cases. Earlier entries win on id clashes.
    pub fn from_cases(cases: Vec<Case>, image_base_url: String) -> Self {
        let mut by_id = HashMap::<String, Arc<CaseSnapshot>>::new();
        for c in cases {
            by_id
                .entry(c.id.clone())
                .or_insert_with(|| Arc::new(CaseSnapshot::new(c)));
        }

        let complete = by_id.values().filter(|s| s.case.complete).count();
        info!(target: "microbe_game", total = by_id.len(), complete, drafts = by_id.len() - complete, "Startup case inventory");

        Self {
            cases: Arc::new(by_id),
            credits: CreditLedger::new(),
            image_base_url,
        }
    }

    /// Resolve a case snapshot by id.
    #[instrument(level = "debug", skip(self), fields(%id))]
    pub fn case(&self, id: &str) -> Result<Arc<CaseSnapshot>, GameError> {
        self.cases.get(id).cloned().ok_or_else(GameError::unknown_case)
    }

    /// Complete cases a learner can pick, sorted by name.
    pub fn playable_cases(&self) -> Vec<CaseSummaryOut> {
        let mut out: Vec<CaseSummaryOut> = self
            .cases
            .values()
            .filter(|s| s.case.complete)
            .map(|s| CaseSummaryOut { id: s.case.id.clone(), name: s.case.name.clone() })
            .collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }
}
