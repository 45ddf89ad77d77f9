//! Application state: the case catalog, submission store, prompts, and the
//! optional OpenAI client.
//!
//! This module owns:
//!   - the assembled case catalog (built-ins + config-bank cases)
//!   - the submission store (file-backed)
//!   - the prompts struct (from TOML or defaults)
//!   - optional OpenAI client
//!
//! The catalog is assembled once here and never mutated afterwards.

use std::collections::HashMap;

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::catalog::{builtin_cases, find_case};
use crate::config::{load_clinic_config_from_env, Prompts};
use crate::domain::{Case, CaseSource};
use crate::openai::OpenAI;
use crate::store::{FileStorage, SubmissionStore};

pub struct AppState {
    pub cases: Vec<Case>,
    pub store: SubmissionStore,
    pub openai: Option<OpenAI>,
    pub prompts: Prompts,
}

impl AppState {
    /// Build state from env: load config, assemble the catalog, open the
    /// submission store, init OpenAI.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        // Load TOML config if provided (prompts + optional case bank).
        let cfg_opt = load_clinic_config_from_env();
        let prompts = cfg_opt
            .as_ref()
            .map(|c| c.prompts.clone())
            .unwrap_or_default();

        let mut cases = builtin_cases();

        // Append config-bank cases; ids colliding with built-ins are skipped.
        if let Some(cfg) = &cfg_opt {
            for cc in &cfg.cases {
                let id = cc.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
                if find_case(&cases, &id).is_some() {
                    warn!(target: "case", %id, "Skipping bank case: id collides with an existing case.");
                    continue;
                }
                cases.push(Case {
                    id,
                    title: cc.title.clone(),
                    difficulty: cc.difficulty,
                    department: cc.department,
                    source: CaseSource::ConfigBank,
                    description: cc.description.clone(),
                    symptoms: cc.symptoms.clone(),
                    artifacts: cc.artifacts.clone(),
                    solution: cc.solution.clone(),
                });
            }
        }

        // Inventory summary by difficulty/source.
        let mut count_by_diff: HashMap<&'static str, (usize, usize)> = HashMap::new();
        for c in &cases {
            let entry = count_by_diff.entry(c.difficulty.label()).or_insert((0, 0));
            match c.source {
                CaseSource::Builtin => entry.0 += 1,
                CaseSource::ConfigBank => entry.1 += 1,
            }
        }
        for (diff, (builtin, bank)) in count_by_diff {
            info!(target: "case", %diff, builtin, config_bank = bank, "Startup case inventory");
        }

        // Submission store: one JSON blob on disk, loaded once.
        let store = SubmissionStore::load(Box::new(FileStorage::from_env()));

        // Build optional OpenAI client (if API key present).
        let openai = OpenAI::from_env();
        if let Some(oa) = &openai {
            info!(target: "qa_clinic", base_url = %oa.base_url, model = %oa.model, "OpenAI enabled.");
        } else {
            info!(target: "qa_clinic", "OpenAI disabled (no OPENAI_API_KEY). Mentor feedback uses the local stub.");
        }

        Self { cases, store, openai, prompts }
    }

    /// Read-only catalog lookup by id.
    pub fn find_case(&self, id: &str) -> Option<&Case> {
        find_case(&self.cases, id)
    }
}
