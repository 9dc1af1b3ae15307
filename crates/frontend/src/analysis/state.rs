//! Resume Analysis - submission state machine
//!
//! The form state lives here as plain data with pure transitions, so every
//! rule (eligibility, mutual exclusion of result and error, in-flight
//! bookkeeping) is testable without a browser.

use contracts::analysis::AnalysisReport;

/// Terminal outcome of the most recent exchange, if any.
#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    None,
    Report(AnalysisReport),
    Failed,
}

/// Derived phase of the form, in submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// File or description (or both) still missing
    Idle,
    /// Both inputs present, nothing in flight
    Ready,
    /// Request in flight
    Submitting,
    /// Last exchange produced a report
    Succeeded,
    /// Last exchange failed
    Failed,
}

/// The analysis form: inputs, in-flight flag and last outcome.
///
/// Only the filename is stored here; the `web_sys::File` handle stays in the
/// view model so this type has no browser dependency.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisForm {
    pub job_description: String,
    pub file_name: Option<String>,
    in_flight: bool,
    outcome: Outcome,
}

impl AnalysisForm {
    pub fn new() -> Self {
        Self {
            job_description: String::new(),
            file_name: None,
            in_flight: false,
            outcome: Outcome::None,
        }
    }

    /// Replace the description verbatim. No trimming, no validation.
    pub fn set_job_description(&mut self, text: String) {
        self.job_description = text;
    }

    /// Replace the selected file. The picker's accept filter is the only
    /// type check.
    pub fn set_file(&mut self, name: String) {
        self.file_name = Some(name);
    }

    /// Submission is allowed only with both inputs present and nothing in
    /// flight. Prior results or errors do not matter.
    pub fn can_submit(&self) -> bool {
        self.file_name.is_some() && !self.job_description.is_empty() && !self.in_flight
    }

    /// Start an exchange. Returns false (and changes nothing) when the
    /// preconditions do not hold; a blocked submit is a silent no-op.
    /// On success clears any previous outcome before the request goes out.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.outcome = Outcome::None;
        self.in_flight = true;
        true
    }

    /// Record the terminal outcome of the exchange. Clears the in-flight
    /// flag on both paths.
    pub fn settle(&mut self, result: Result<AnalysisReport, String>) {
        self.outcome = match result {
            Ok(report) => Outcome::Report(report),
            Err(_) => Outcome::Failed,
        };
        self.in_flight = false;
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match &self.outcome {
            Outcome::Report(report) => Some(report),
            _ => None,
        }
    }

    pub fn failed(&self) -> bool {
        self.outcome == Outcome::Failed
    }

    pub fn state(&self) -> FormState {
        if self.in_flight {
            return FormState::Submitting;
        }
        match &self.outcome {
            Outcome::Report(_) => FormState::Succeeded,
            Outcome::Failed => FormState::Failed,
            Outcome::None => {
                if self.can_submit() {
                    FormState::Ready
                } else {
                    FormState::Idle
                }
            }
        }
    }
}

impl Default for AnalysisForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            match_score: 82.0,
            strengths: vec!["Go experience".into()],
            missing_skills: vec!["Kubernetes".into()],
            suggestions: vec!["Add metrics experience".into()],
        }
    }

    fn ready_form() -> AnalysisForm {
        let mut form = AnalysisForm::new();
        form.set_file("resume.pdf".into());
        form.set_job_description("Senior backend engineer, Go, distributed systems".into());
        form
    }

    #[test]
    fn starts_idle_and_blocked() {
        let form = AnalysisForm::new();
        assert_eq!(form.state(), FormState::Idle);
        assert!(!form.can_submit());
        assert!(!form.in_flight());
    }

    #[test]
    fn description_alone_is_not_enough() {
        let mut form = AnalysisForm::new();
        form.set_job_description("Senior backend engineer".into());
        assert_eq!(form.state(), FormState::Idle);
        assert!(!form.begin_submit());
        assert!(!form.in_flight());
    }

    #[test]
    fn file_alone_is_not_enough() {
        let mut form = AnalysisForm::new();
        form.set_file("resume.pdf".into());
        assert_eq!(form.state(), FormState::Idle);
        assert!(!form.begin_submit());
        assert!(!form.in_flight());
    }

    #[test]
    fn both_inputs_make_the_form_ready() {
        let form = ready_form();
        assert_eq!(form.state(), FormState::Ready);
        assert!(form.can_submit());
    }

    #[test]
    fn successful_exchange_stores_the_report() {
        let mut form = ready_form();
        assert!(form.begin_submit());
        assert_eq!(form.state(), FormState::Submitting);
        assert!(form.in_flight());

        form.settle(Ok(sample_report()));
        assert_eq!(form.state(), FormState::Succeeded);
        assert!(!form.in_flight());
        assert_eq!(form.report().unwrap().match_score, 82.0);
        assert!(!form.failed());
    }

    #[test]
    fn failed_exchange_stores_only_the_error() {
        let mut form = ready_form();
        assert!(form.begin_submit());
        form.settle(Err("HTTP 500".into()));

        assert_eq!(form.state(), FormState::Failed);
        assert!(form.failed());
        assert!(form.report().is_none());
        assert!(!form.in_flight());
    }

    #[test]
    fn submit_clears_previous_outcome_first() {
        let mut form = ready_form();
        form.begin_submit();
        form.settle(Ok(sample_report()));
        assert!(form.report().is_some());

        assert!(form.begin_submit());
        assert!(form.report().is_none());
        assert!(!form.failed());
        assert_eq!(form.state(), FormState::Submitting);
    }

    #[test]
    fn resubmission_after_failure_is_allowed() {
        let mut form = ready_form();
        form.begin_submit();
        form.settle(Err("fetch failed".into()));
        assert!(form.can_submit());

        assert!(form.begin_submit());
        assert!(!form.failed());
        form.settle(Ok(sample_report()));
        assert_eq!(form.state(), FormState::Succeeded);
    }

    #[test]
    fn in_flight_blocks_resubmission() {
        let mut form = ready_form();
        assert!(form.begin_submit());
        assert!(!form.can_submit());
        assert!(!form.begin_submit());
        assert_eq!(form.state(), FormState::Submitting);
    }

    #[test]
    fn eligibility_ignores_prior_outcome() {
        let mut form = ready_form();
        form.begin_submit();
        form.settle(Ok(sample_report()));

        // emptying the description disables submit even though a result
        // is still on screen
        form.set_job_description(String::new());
        assert!(!form.can_submit());
        assert_eq!(form.state(), FormState::Succeeded);
        assert!(!form.begin_submit());
        assert!(form.report().is_some());
    }

    #[test]
    fn outcome_is_exactly_one_of_report_or_error() {
        let mut form = ready_form();
        form.begin_submit();
        form.settle(Ok(sample_report()));
        assert!(form.report().is_some() && !form.failed());

        form.begin_submit();
        form.settle(Err("bad body".into()));
        assert!(form.report().is_none() && form.failed());
    }

    #[test]
    fn description_is_stored_verbatim() {
        let mut form = AnalysisForm::new();
        form.set_job_description("  padded  \n".into());
        assert_eq!(form.job_description, "  padded  \n");
    }
}
