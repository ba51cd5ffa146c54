//! Per-user ledger of completed case names.
//!
//! The only shared mutable resource in the service. `record` performs the
//! membership check and the insert inside one write-lock critical section, so
//! concurrent correct submissions for the same (user, case) land exactly once.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::protocol::CreditOut;

#[derive(Clone, Default)]
pub struct CreditLedger {
    by_user: Arc<RwLock<BTreeMap<String, BTreeSet<String>>>>,
}

impl CreditLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `case_name` to `user`'s credits if absent. Returns true when newly added.
    #[instrument(level = "debug", skip(self))]
    pub async fn record(&self, user: &str, case_name: &str) -> bool {
        let mut by_user = self.by_user.write().await;
        let added = by_user
            .entry(user.to_string())
            .or_default()
            .insert(case_name.to_string());
        if added {
            info!(target: "game", %user, case = %case_name, "Credit recorded");
        }
        added
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn credits_for(&self, user: &str) -> Option<CreditOut> {
        let by_user = self.by_user.read().await;
        by_user.get(user).map(|cases| CreditOut {
            user: user.to_string(),
            test_cases: cases.iter().cloned().collect(),
        })
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn all(&self) -> Vec<CreditOut> {
        let by_user = self.by_user.read().await;
        by_user
            .iter()
            .map(|(user, cases)| CreditOut {
                user: user.clone(),
                test_cases: cases.iter().cloned().collect(),
            })
            .collect()
    }
}
