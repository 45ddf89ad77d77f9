//! Core behaviors behind the HTTP handlers.
//!
//! This includes:
//!   - Dashboard filtering (search + difficulty + department, ANDed)
//!   - Assembling the mentor-feedback prompt from the reference solution and
//!     the learner's submission
//!   - The feedback flow: OpenAI when configured, a local mentor stub when
//!     not, and a fixed apology when the call fails

use tracing::{debug, error, instrument};

use crate::domain::{Case, Department, Difficulty, UserSubmission, TRACKED_FIELD_COUNT};
use crate::config::Prompts;
use crate::state::AppState;
use crate::util::{fill_template, trunc_for_log};

/// Shown in place of feedback when the model call fails. The learner can
/// simply press the button again.
pub const FEEDBACK_APOLOGY: &str =
  "Sorry, I encountered an error while generating feedback. Please try again.";

/// Dashboard filter: all three predicates must hold. Search matches
/// case-insensitively against title or description; None means "All".
pub fn filter_cases<'a>(
  cases: &'a [Case],
  search: &str,
  difficulty: Option<Difficulty>,
  department: Option<Department>,
) -> Vec<&'a Case> {
  let needle = search.to_lowercase();
  cases
    .iter()
    .filter(|c| difficulty.map_or(true, |d| c.difficulty == d))
    .filter(|c| department.map_or(true, |d| c.department == d))
    .filter(|c| {
      needle.is_empty()
        || c.title.to_lowercase().contains(&needle)
        || c.description.to_lowercase().contains(&needle)
    })
    .collect()
}

fn or_not_provided(v: Option<&str>) -> &str {
  match v {
    Some(s) if !s.is_empty() => s,
    // The explicit placeholder lets the model tell omission from a short answer.
    _ => "Not provided",
  }
}

/// Assemble the comparison prompt: the case's reference solution on one side,
/// the learner's fields on the other.
pub fn build_feedback_prompt(prompts: &Prompts, case: &Case, submission: &UserSubmission) -> String {
  let sol = &case.solution;
  let ideal_components = sol.affected_components.join(", ");
  let ideal_tests = sol
    .test_cases
    .iter()
    .map(|tc| format!("- {}", tc))
    .collect::<Vec<_>>()
    .join("\n");

  fill_template(
    &prompts.feedback_user_template,
    &[
      ("ideal_root_cause", sol.root_cause.as_str()),
      ("ideal_repro_steps", sol.repro_steps.as_str()),
      ("ideal_expected_vs_actual", sol.expected_vs_actual.as_str()),
      ("ideal_severity", sol.severity.as_str()),
      ("ideal_affected_components", ideal_components.as_str()),
      ("ideal_test_cases", ideal_tests.as_str()),
      ("root_cause", or_not_provided(submission.root_cause.as_deref())),
      ("repro_steps", or_not_provided(submission.repro_steps.as_deref())),
      ("expected_vs_actual", or_not_provided(submission.expected_vs_actual.as_deref())),
      ("severity", or_not_provided(submission.severity.as_deref())),
      ("affected_components", or_not_provided(submission.affected_components.as_deref())),
      ("test_cases", or_not_provided(submission.test_cases.as_deref())),
      ("regression_ideas", or_not_provided(submission.regression_ideas.as_deref())),
    ],
  )
}

/// Produce mentor feedback for a submission. Returns the markdown text and
/// its origin ("openai", "local_stub", or "error").
#[instrument(level = "info", skip(state, submission), fields(case_id = %case.id, progress = submission.progress()))]
pub async fn mentor_feedback(
  state: &AppState,
  case: &Case,
  submission: &UserSubmission,
) -> (String, &'static str) {
  let prompt = build_feedback_prompt(&state.prompts, case, submission);

  if let Some(oa) = &state.openai {
    match oa.mentor_feedback(&state.prompts, &prompt).await {
      Ok(text) => {
        debug!(target: "case", id = %case.id, preview = %trunc_for_log(&text, 120), "Mentor feedback via OpenAI.");
        (text, "openai")
      }
      Err(e) => {
        error!(target: "case", id = %case.id, error = %e, "OpenAI mentor_feedback failed; returning apology.");
        (FEEDBACK_APOLOGY.to_string(), "error")
      }
    }
  } else {
    debug!(target: "case", id = %case.id, "Mentor feedback via local stub.");
    (mentor_stub(submission), "local_stub")
  }
}

/// Deterministic offline feedback: points at still-blank sections.
fn mentor_stub(submission: &UserSubmission) -> String {
  let filled = submission.filled_field_count();
  let blank: Vec<&str> = submission
    .labeled_fields()
    .iter()
    .filter(|(_, v)| !matches!(v, Some(s) if !s.trim().is_empty()))
    .map(|(label, _)| *label)
    .collect();

  let mut out = format!(
    "### Mentor Feedback\n\nNice work so far — you have filled in {} of {} sections.\n",
    filled, TRACKED_FIELD_COUNT
  );
  if blank.is_empty() {
    out.push_str("\nEvery section has content. Read each one back and ask yourself: would another tester be able to reproduce and triage this bug from my words alone?\n");
  } else {
    out.push_str("\nThese sections still need attention:\n");
    for label in blank {
      out.push_str(&format!("- **{}**\n", label));
    }
  }
  out.push_str("\n_AI feedback is unavailable right now; set OPENAI_API_KEY for a full mentor review._");
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::builtin_cases;

  fn ids(cases: &[&Case]) -> Vec<String> {
    cases.iter().map(|c| c.id.clone()).collect()
  }

  #[test]
  fn no_filters_returns_every_case() {
    let cases = builtin_cases();
    assert_eq!(filter_cases(&cases, "", None, None).len(), cases.len());
  }

  #[test]
  fn search_checkout_matches_exactly_case_002() {
    let cases = builtin_cases();
    assert_eq!(ids(&filter_cases(&cases, "checkout", None, None)), vec!["002"]);
    // Case-insensitive.
    assert_eq!(ids(&filter_cases(&cases, "CHECKOUT", None, None)), vec!["002"]);
  }

  #[test]
  fn hard_and_api_clinic_returns_only_cases_matching_both() {
    let cases = builtin_cases();
    let hits = filter_cases(&cases, "", Some(Difficulty::Hard), Some(Department::Api));
    assert_eq!(ids(&hits), vec!["002"]);
  }

  #[test]
  fn predicates_commute() {
    let cases = builtin_cases();
    let combined = ids(&filter_cases(&cases, "user", Some(Difficulty::Medium), Some(Department::Ui)));

    // Apply the three predicates one at a time, in a different order.
    let by_dept: Vec<Case> =
      filter_cases(&cases, "", None, Some(Department::Ui)).into_iter().cloned().collect();
    let by_diff: Vec<Case> =
      filter_cases(&by_dept, "", Some(Difficulty::Medium), None).into_iter().cloned().collect();
    let staged = ids(&filter_cases(&by_diff, "user", None, None));

    assert_eq!(combined, staged);
    assert_eq!(combined, vec!["001"]);
  }

  #[test]
  fn prompt_embeds_reference_solution_and_learner_text() {
    let cases = builtin_cases();
    let case = cases.iter().find(|c| c.id == "001").unwrap();
    let submission =
      UserSubmission { root_cause: Some("Safari canvas bug".into()), ..Default::default() };

    let prompt = build_feedback_prompt(&Prompts::default(), case, &submission);

    assert!(prompt.contains("canvas method (`toBlob`)"), "reference root cause missing");
    assert!(prompt.contains("Root Cause: Safari canvas bug"), "learner text missing");
    // The six untouched learner fields render as the explicit placeholder.
    assert_eq!(prompt.matches("Not provided").count(), 6);
    // Ideal test cases are bulleted.
    assert!(prompt.contains("- Verify successful avatar upload on latest Chrome."));
  }

  #[test]
  fn prompt_treats_empty_string_like_omission() {
    let cases = builtin_cases();
    let case = cases.iter().find(|c| c.id == "001").unwrap();
    let submission = UserSubmission { root_cause: Some(String::new()), ..Default::default() };
    let prompt = build_feedback_prompt(&Prompts::default(), case, &submission);
    assert_eq!(prompt.matches("Not provided").count(), 7);
  }

  #[test]
  fn mentor_stub_lists_blank_sections() {
    let submission =
      UserSubmission { root_cause: Some("A z-index conflict".into()), ..Default::default() };
    let text = mentor_stub(&submission);
    assert!(text.contains("1 of 7"));
    assert!(!text.contains("- **Root Cause**"));
    assert!(text.contains("- **Repro Steps**"));
    assert!(text.contains("- **Regression Ideas**"));
  }

  #[test]
  fn mentor_stub_with_full_submission_has_no_missing_list() {
    let full = UserSubmission {
      root_cause: Some("a".into()),
      repro_steps: Some("b".into()),
      expected_vs_actual: Some("c".into()),
      severity: Some("d".into()),
      affected_components: Some("e".into()),
      test_cases: Some("f".into()),
      regression_ideas: Some("g".into()),
    };
    let text = mentor_stub(&full);
    assert!(text.contains("7 of 7"));
    assert!(!text.contains("still need attention"));
  }
}
