//! Public DTOs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.
//!
//! The reference `Solution` never appears in any outbound shape: the answer
//! key is consumed server-side by the feedback prompt builder only.

use serde::{Deserialize, Serialize};

use crate::domain::{Artifact, Case, Department, Difficulty, UserSubmission};

/// Dashboard card: catalog fields plus the learner's completion percentage.
#[derive(Debug, Serialize)]
pub struct CaseSummaryOut {
  pub id: String,
  pub title: String,
  pub difficulty: Difficulty,
  pub department: Department,
  pub description: String,
  pub progress: u8,
}

/// Full case detail for the two-pane workspace. Includes the learner's
/// current submission so the view can hydrate in one request.
#[derive(Debug, Serialize)]
pub struct CaseDetailOut {
  pub id: String,
  pub title: String,
  pub difficulty: Difficulty,
  pub department: Department,
  pub description: String,
  pub symptoms: String,
  pub artifacts: Vec<Artifact>,
  pub submission: UserSubmission,
  pub progress: u8,
}

pub fn to_summary(c: &Case, progress: u8) -> CaseSummaryOut {
  CaseSummaryOut {
    id: c.id.clone(),
    title: c.title.clone(),
    difficulty: c.difficulty,
    department: c.department,
    description: c.description.clone(),
    progress,
  }
}

pub fn to_detail(c: &Case, submission: UserSubmission) -> CaseDetailOut {
  let progress = submission.progress();
  CaseDetailOut {
    id: c.id.clone(),
    title: c.title.clone(),
    difficulty: c.difficulty,
    department: c.department,
    description: c.description.clone(),
    symptoms: c.symptoms.clone(),
    artifacts: c.artifacts.clone(),
    submission,
    progress,
  }
}

//
// HTTP request/response DTOs
//

/// Dashboard filters. Values of "All" (any casing) behave like absent.
#[derive(Debug, Deserialize)]
pub struct CaseListQuery {
  #[serde(default)]
  pub search: Option<String>,
  #[serde(default)]
  pub difficulty: Option<String>,
  #[serde(default)]
  pub department: Option<String>,
}

#[derive(Serialize)]
pub struct SubmissionOut {
  pub submission: UserSubmission,
  pub progress: u8,
}

#[derive(Serialize)]
pub struct FeedbackOut {
  /// Markdown, rendered by the SPA.
  pub feedback: String,
  /// "openai", "local_stub", or "error".
  pub origin: &'static str,
}

#[derive(Serialize)]
pub struct ErrorOut {
  pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
  pub ok: bool,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::builtin_cases;

  #[test]
  fn detail_serialization_never_leaks_the_solution() {
    let cases = builtin_cases();
    let case = cases.iter().find(|c| c.id == "001").unwrap();
    let out = to_detail(case, UserSubmission::default());
    let json = serde_json::to_string(&out).unwrap();
    assert!(!json.contains("toBlob"), "reference solution leaked to the client");
    assert!(!json.contains("solution"));
    assert!(json.contains("symptoms"));
  }

  #[test]
  fn summary_serializes_department_label() {
    let cases = builtin_cases();
    let case = cases.iter().find(|c| c.id == "002").unwrap();
    let json = serde_json::to_string(&to_summary(case, 43)).unwrap();
    assert!(json.contains("\"API Clinic\""));
    assert!(json.contains("\"Hard\""));
    assert!(json.contains("\"progress\":43"));
  }

  #[test]
  fn artifact_kind_serializes_as_lowercase_type_tag() {
    let cases = builtin_cases();
    let case = cases.iter().find(|c| c.id == "001").unwrap();
    let json = serde_json::to_string(&case.artifacts[0]).unwrap();
    assert!(json.contains("\"type\":\"log\""));
  }
}
