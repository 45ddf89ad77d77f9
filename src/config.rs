//! Loading clinic configuration (mentor prompts + optional case bank) from TOML.
//!
//! See `ClinicConfig` and `Prompts` for expected schema.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{Artifact, Department, Difficulty, Solution};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct ClinicConfig {
  #[serde(default)]
  pub prompts: Prompts,
  #[serde(default)]
  pub cases: Vec<CaseCfg>,
}

/// Case entry accepted in TOML configuration. Ids are optional; a generated
/// one is assigned when absent. Bank cases never overwrite built-ins.
#[derive(Clone, Debug, Deserialize)]
pub struct CaseCfg {
  #[serde(default)]
  pub id: Option<String>,
  pub title: String,
  pub difficulty: Difficulty,
  pub department: Department,
  pub description: String,
  pub symptoms: String,
  #[serde(default)]
  pub artifacts: Vec<Artifact>,
  pub solution: Solution,
}

/// Prompts used for mentor feedback. Defaults reproduce the stock mentor
/// persona; override them in TOML if you need to tune tone/structure.
#[derive(Clone, Debug, Deserialize)]
pub struct Prompts {
  pub feedback_system: String,
  pub feedback_user_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      feedback_system: "You are a Senior QA Mentor reviewing a bug report and test plan from a junior tester. \
Your tone should be helpful, encouraging, and educational. Do not be harsh."
        .into(),
      feedback_user_template: r#"Here is the ideal analysis for the bug:
<IDEAL_ANALYSIS>
Root Cause: {ideal_root_cause}
Repro Steps: {ideal_repro_steps}
Expected vs Actual: {ideal_expected_vs_actual}
Severity: {ideal_severity}
Affected Components: {ideal_affected_components}
Test Cases:
{ideal_test_cases}
</IDEAL_ANALYSIS>

Here is the user's submission:
<USER_SUBMISSION>
Root Cause: {root_cause}
Repro Steps: {repro_steps}
Expected vs Actual: {expected_vs_actual}
Severity: {severity}
Affected Components: {affected_components}
Test Cases: {test_cases}
Regression Ideas: {regression_ideas}
</USER_SUBMISSION>

Please provide feedback on the user's submission by comparing it to the ideal analysis.
1. Start with overall positive reinforcement.
2. Go through each section (Root Cause, Repro Steps, etc.) and comment on what they did well and where they can improve.
3. For areas of improvement, gently guide them toward the ideal answer without giving it away directly. Ask leading questions.
4. If they missed something important (like identifying a key affected component), point it out as something to consider.
5. Conclude with an encouraging summary.
Format your response using Markdown for readability (headings, bold text, bullet points)."#
        .into(),
    }
  }
}

/// Attempt to load `ClinicConfig` from CLINIC_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_clinic_config_from_env() -> Option<ClinicConfig> {
  let path = std::env::var("CLINIC_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<ClinicConfig>(&s) {
      Ok(cfg) => {
        info!(target: "qa_clinic", %path, "Loaded clinic config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "qa_clinic", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "qa_clinic", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::ArtifactKind;

  #[test]
  fn default_prompts_carry_the_mentor_persona_and_placeholders() {
    let p = Prompts::default();
    assert!(p.feedback_system.contains("Senior QA Mentor"));
    for key in [
      "{ideal_root_cause}",
      "{ideal_test_cases}",
      "{root_cause}",
      "{regression_ideas}",
    ] {
      assert!(p.feedback_user_template.contains(key), "missing {key}");
    }
  }

  #[test]
  fn config_bank_case_parses_from_toml() {
    let toml_src = r#"
[[cases]]
title = "Bank: Export Button Missing"
difficulty = "Easy"
department = "UI Clinic"
description = "The export button vanished after the last deploy."
symptoms = "Users report the CSV export button is gone from the reports page."

[[cases.artifacts]]
type = "note"
title = "Release Note"
content = "Reports page was refactored in v2.3."

[cases.solution]
root_cause = "A feature flag defaulted to off in production."
repro_steps = "1. Open the reports page."
expected_vs_actual = "Expected: button visible. Actual: button absent."
severity = "Low"
affected_components = ["ReportsPage"]
test_cases = ["Verify export button renders with the flag on."]
"#;
    let cfg: ClinicConfig = toml::from_str(toml_src).unwrap();
    assert_eq!(cfg.cases.len(), 1);
    let c = &cfg.cases[0];
    assert_eq!(c.difficulty, Difficulty::Easy);
    assert_eq!(c.department, Department::Ui);
    assert_eq!(c.artifacts[0].kind, ArtifactKind::Note);
    assert!(c.id.is_none());
  }

  #[test]
  fn prompts_section_overrides_defaults() {
    let toml_src = r#"
[prompts]
feedback_system = "You are a blunt reviewer."
feedback_user_template = "Ideal: {ideal_root_cause} / Got: {root_cause}"
"#;
    let cfg: ClinicConfig = toml::from_str(toml_src).unwrap();
    assert_eq!(cfg.prompts.feedback_system, "You are a blunt reviewer.");
  }
}
