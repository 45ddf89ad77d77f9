//! Domain models used by the backend: cases, investigation artifacts, the
//! hidden reference solution, and the learner's submission.

use serde::{Deserialize, Serialize};

/// Difficulty rating shown on the dashboard card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

  pub fn label(self) -> &'static str {
    match self {
      Difficulty::Easy => "Easy",
      Difficulty::Medium => "Medium",
      Difficulty::Hard => "Hard",
    }
  }

  /// Parse a dashboard filter value. "All", empty, and unknown values map to None.
  pub fn from_label(s: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|d| d.label().eq_ignore_ascii_case(s))
  }
}

/// Clinic ("department") a case belongs to. Presentational category tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
  #[serde(rename = "UI Clinic")]
  Ui,
  #[serde(rename = "API Clinic")]
  Api,
  #[serde(rename = "SQL/Data Clinic")]
  Data,
  #[serde(rename = "Mobile Clinic")]
  Mobile,
  #[serde(rename = "Billing Clinic")]
  Billing,
  #[serde(rename = "Healthcare Clinic")]
  Healthcare,
  #[serde(rename = "Auth Clinic")]
  Auth,
  #[serde(rename = "Race Condition Clinic")]
  RaceCondition,
  #[serde(rename = "Performance Clinic")]
  Performance,
  #[serde(rename = "Security Clinic")]
  Security,
  #[serde(rename = "Test Data Clinic")]
  TestData,
  #[serde(rename = "Regression Clinic")]
  Regression,
}

impl Department {
  pub const ALL: [Department; 12] = [
    Department::Ui,
    Department::Api,
    Department::Data,
    Department::Mobile,
    Department::Billing,
    Department::Healthcare,
    Department::Auth,
    Department::RaceCondition,
    Department::Performance,
    Department::Security,
    Department::TestData,
    Department::Regression,
  ];

  pub fn label(self) -> &'static str {
    match self {
      Department::Ui => "UI Clinic",
      Department::Api => "API Clinic",
      Department::Data => "SQL/Data Clinic",
      Department::Mobile => "Mobile Clinic",
      Department::Billing => "Billing Clinic",
      Department::Healthcare => "Healthcare Clinic",
      Department::Auth => "Auth Clinic",
      Department::RaceCondition => "Race Condition Clinic",
      Department::Performance => "Performance Clinic",
      Department::Security => "Security Clinic",
      Department::TestData => "Test Data Clinic",
      Department::Regression => "Regression Clinic",
    }
  }

  /// Parse a dashboard filter value. "All", empty, and unknown values map to None.
  pub fn from_label(s: &str) -> Option<Self> {
    Self::ALL.iter().copied().find(|d| d.label().eq_ignore_ascii_case(s))
  }
}

/// Presentational hint for how an artifact should be rendered. Not load-bearing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
  Log,
  Api,
  Sql,
  Ui,
  Note,
  Network,
}

/// A piece of simulated investigative evidence shown to the learner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Artifact {
  #[serde(rename = "type")]
  pub kind: ArtifactKind,
  pub title: String,
  pub content: String,
}

/// Where a case came from. Built-ins are compiled in; bank cases arrive via TOML config.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseSource {
  Builtin,
  ConfigBank,
}

/// The hidden "answer key". Consumed only by the feedback prompt builder;
/// never serialized toward the client.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Solution {
  pub root_cause: String,
  pub repro_steps: String,
  pub expected_vs_actual: String,
  pub severity: String,
  pub affected_components: Vec<String>,
  pub test_cases: Vec<String>,
}

/// A static, pre-authored QA investigation scenario. Immutable after startup.
#[derive(Clone, Debug)]
pub struct Case {
  pub id: String,
  pub title: String,
  pub difficulty: Difficulty,
  pub department: Department,
  pub source: CaseSource,
  pub description: String,
  pub symptoms: String,
  pub artifacts: Vec<Artifact>,
  pub solution: Solution,
}

/// The learner's in-progress answer for one case. Every field is optional;
/// an absent field is equivalent to an empty one. Serialized in camelCase to
/// stay byte-compatible with the persisted blob of earlier releases.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSubmission {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub root_cause: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub repro_steps: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expected_vs_actual: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub severity: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub affected_components: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub test_cases: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub regression_ideas: Option<String>,
}

/// Number of answer fields counted toward dashboard completion.
pub const TRACKED_FIELD_COUNT: usize = 7;

impl UserSubmission {
  /// Tracked fields in dashboard-progress order, paired with the labels used
  /// in mentor prompts.
  pub fn labeled_fields(&self) -> [(&'static str, Option<&str>); TRACKED_FIELD_COUNT] {
    [
      ("Root Cause", self.root_cause.as_deref()),
      ("Repro Steps", self.repro_steps.as_deref()),
      ("Expected vs Actual", self.expected_vs_actual.as_deref()),
      ("Severity", self.severity.as_deref()),
      ("Affected Components", self.affected_components.as_deref()),
      ("Test Cases", self.test_cases.as_deref()),
      ("Regression Ideas", self.regression_ideas.as_deref()),
    ]
  }

  pub fn filled_field_count(&self) -> usize {
    self
      .labeled_fields()
      .iter()
      .filter(|(_, v)| matches!(v, Some(s) if !s.trim().is_empty()))
      .count()
  }

  /// Completion percentage: round(100 * non-blank tracked fields / total).
  pub fn progress(&self) -> u8 {
    ((self.filled_field_count() as f32 / TRACKED_FIELD_COUNT as f32) * 100.0).round() as u8
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn filled(n: usize) -> UserSubmission {
    let mut s = UserSubmission::default();
    let fields: [&mut Option<String>; TRACKED_FIELD_COUNT] = [
      &mut s.root_cause,
      &mut s.repro_steps,
      &mut s.expected_vs_actual,
      &mut s.severity,
      &mut s.affected_components,
      &mut s.test_cases,
      &mut s.regression_ideas,
    ];
    for f in fields.into_iter().take(n) {
      *f = Some("answer".into());
    }
    s
  }

  #[test]
  fn progress_of_empty_submission_is_zero() {
    assert_eq!(UserSubmission::default().progress(), 0);
  }

  #[test]
  fn progress_of_full_submission_is_hundred() {
    assert_eq!(filled(TRACKED_FIELD_COUNT).progress(), 100);
  }

  #[test]
  fn progress_rounds_to_nearest_percent() {
    // 1/7 = 14.28 -> 14, 2/7 = 28.57 -> 29, 3/7 = 42.86 -> 43
    assert_eq!(filled(1).progress(), 14);
    assert_eq!(filled(2).progress(), 29);
    assert_eq!(filled(3).progress(), 43);
  }

  #[test]
  fn whitespace_only_fields_do_not_count() {
    let s = UserSubmission { root_cause: Some("   \n".into()), ..Default::default() };
    assert_eq!(s.filled_field_count(), 0);
    assert_eq!(s.progress(), 0);
  }

  #[test]
  fn submission_round_trips_camel_case() {
    let s = UserSubmission { root_cause: Some("Safari canvas bug".into()), ..Default::default() };
    let json = serde_json::to_string(&s).unwrap();
    assert!(json.contains("rootCause"));
    let back: UserSubmission = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
  }

  #[test]
  fn department_filter_labels_round_trip() {
    for d in Department::ALL {
      assert_eq!(Department::from_label(d.label()), Some(d));
    }
    assert_eq!(Department::from_label("All"), None);
  }

  #[test]
  fn difficulty_filter_labels_round_trip() {
    for d in Difficulty::ALL {
      assert_eq!(Difficulty::from_label(d.label()), Some(d));
    }
    assert_eq!(Difficulty::from_label("All"), None);
  }
}
