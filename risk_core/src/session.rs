//! # Session
//!
//! Owns the state of one calculator window: pedigree, selection surface,
//! both forms and the result panel. Front ends route every interaction
//! through it.
//!
//! ## Submitting
//!
//! A submission is split around the network call so the UI can stay
//! responsive while it is in flight:
//!
//! ```text
//! begin_submit(calc)  -> Submission { ticket, request }   busy label on
//! client.submit(&request).await                          (UI keeps running)
//! complete_submit(ticket, result) -> SubmitOutcome       busy label restored
//! ```
//!
//! Each `begin_submit` (and each tab switch) advances a generation counter.
//! A successful completion is applied only if its ticket still carries the
//! latest generation; older ones are dropped, so the panel always reflects
//! the most recently issued submission. Failures raise the notice either way.

use std::collections::HashMap;

use crate::client::CalculationClient;
use crate::errors::RiskResult;
use crate::pedigree::{HistoryCategory, ParentSide, PedigreeState};
use crate::render::ResultView;
use crate::request::{build_hemophilia, build_thalassemia, Calculator, CalculatorRequest, HemophiliaForm, ThalassemiaForm};
use crate::response::CalculatorResponse;
use crate::selection::{AncestorNode, SelectionSurface};

/// Label of an idle submit control
pub const SUBMIT_LABEL: &str = "Calculate Risk";

/// Identifies one in-flight submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub generation: u64,
    pub calculator: Calculator,
}

/// A submission ready to be sent
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: SubmissionTicket,
    pub request: CalculatorRequest,
}

/// What happened to a completed submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Result rendered into the panel
    Applied,
    /// A newer submission or tab switch superseded a successful result; nothing changed
    Stale,
    /// The call failed; `notice` is what to show the user
    Failed { notice: String },
}

/// One calculator window's state.
#[derive(Debug, Clone)]
pub struct Session {
    busy_label: String,
    pedigree: PedigreeState,
    selection: SelectionSurface,
    results: ResultView,
    pub thalassemia_form: ThalassemiaForm,
    pub hemophilia_form: HemophiliaForm,
    generation: u64,
    in_flight: HashMap<Calculator, usize>,
    notice: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Session::new("Calculating...")
    }
}

impl Session {
    pub fn new(busy_label: impl Into<String>) -> Self {
        Session {
            busy_label: busy_label.into(),
            pedigree: PedigreeState::new(),
            selection: SelectionSurface::new(),
            results: ResultView::new(),
            thalassemia_form: ThalassemiaForm::default(),
            hemophilia_form: HemophiliaForm::default(),
            generation: 0,
            in_flight: HashMap::new(),
            notice: None,
        }
    }

    pub fn pedigree(&self) -> &PedigreeState {
        &self.pedigree
    }

    pub fn selection(&self) -> &SelectionSurface {
        &self.selection
    }

    pub fn results(&self) -> &ResultView {
        &self.results
    }

    /// History category a thalassemia submission would carry right now
    pub fn current_history(&self) -> HistoryCategory {
        let mut pedigree = self.pedigree.clone();
        pedigree.derive_history(self.selection.selected_ancestor_count())
    }

    // ===== Selection =====

    /// Switch tabs: hides the result panel and drops any in-flight results
    pub fn switch_tab(&mut self, tab: Calculator) {
        self.selection.switch_tab(tab, &mut self.results);
        self.generation += 1;
    }

    pub fn toggle_disease(&mut self, side: ParentSide, affected: bool) {
        self.selection.toggle_disease(side, affected, &mut self.pedigree);
    }

    pub fn toggle_node(&mut self, side: ParentSide, node: AncestorNode) -> bool {
        let selected = self.selection.toggle_node(side, node);
        self.pedigree.derive_history(self.selection.selected_ancestor_count());
        selected
    }

    // ===== Submission =====

    /// Text for a calculator's submit control
    pub fn submit_label(&self, calculator: Calculator) -> &str {
        if self.is_busy(calculator) {
            self.busy_label.as_str()
        } else {
            SUBMIT_LABEL
        }
    }

    /// Whether a call for `calculator` is in flight
    pub fn is_busy(&self, calculator: Calculator) -> bool {
        self.in_flight.get(&calculator).copied().unwrap_or(0) > 0
    }

    /// Build the request, stamp it with a new generation and mark the control busy
    pub fn begin_submit(&mut self, calculator: Calculator) -> Submission {
        let request = match calculator {
            Calculator::Thalassemia => build_thalassemia(
                &self.thalassemia_form,
                &mut self.pedigree,
                self.selection.selected_ancestor_count(),
            ),
            Calculator::Hemophilia => build_hemophilia(&self.hemophilia_form),
        };
        self.generation += 1;
        *self.in_flight.entry(calculator).or_insert(0) += 1;

        tracing::debug!(%calculator, generation = self.generation, "submission started");
        Submission {
            ticket: SubmissionTicket {
                generation: self.generation,
                calculator,
            },
            request,
        }
    }

    /// Settle a submission. The busy label is restored whatever the outcome.
    pub fn complete_submit(&mut self, ticket: SubmissionTicket, result: RiskResult<CalculatorResponse>) -> SubmitOutcome {
        if let Some(count) = self.in_flight.get_mut(&ticket.calculator) {
            *count = count.saturating_sub(1);
        }

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                // Superseded or not, a failure raises the notice and leaves the panel alone.
                tracing::warn!(
                    calculator = %ticket.calculator,
                    generation = ticket.generation,
                    code = e.error_code(),
                    error = %e,
                    "calculation request failed"
                );
                let notice = e.user_notice();
                self.notice = Some(notice.clone());
                return SubmitOutcome::Failed { notice };
            }
        };

        if ticket.generation != self.generation {
            tracing::debug!(
                calculator = %ticket.calculator,
                generation = ticket.generation,
                latest = self.generation,
                "discarding superseded result"
            );
            return SubmitOutcome::Stale;
        }

        tracing::info!(calculator = %ticket.calculator, kind = response.kind(), "rendering result");
        self.results.render(ticket.calculator, response);
        SubmitOutcome::Applied
    }

    /// Run a whole submission against `client`
    pub async fn submit(&mut self, client: &CalculationClient, calculator: Calculator) -> SubmitOutcome {
        let submission = self.begin_submit(calculator);
        let result = client.submit(&submission.request).await;
        self.complete_submit(submission.ticket, result)
    }

    // ===== Notices =====

    /// Blocking notice waiting to be acknowledged
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{RiskError, CONNECTION_NOTICE};
    use crate::render::{PlotSize, Visualization};
    use crate::response::{LabeledPercentage, PlotImage};

    fn plot() -> CalculatorResponse {
        CalculatorResponse::PlotImage(PlotImage::from_bytes(vec![0x89, b'P', b'N', b'G']))
    }

    fn bars() -> CalculatorResponse {
        CalculatorResponse::percentages(vec![
            LabeledPercentage::new("Boy (Affected)", 25.0),
            LabeledPercentage::new("Girl (Carrier)", 75.0),
            LabeledPercentage::new("Girl (Affected)", 25.0),
        ])
    }

    #[test]
    fn test_thalassemia_submission_carries_history() {
        let mut session = Session::default();
        session.toggle_disease(ParentSide::Male, true);
        session.toggle_disease(ParentSide::Female, false);

        let submission = session.begin_submit(Calculator::Thalassemia);
        let body = serde_json::to_value(&submission.request).unwrap();
        assert_eq!(body["history"], "one_parent");
    }

    #[test]
    fn test_ancestor_nodes_feed_history() {
        let mut session = Session::default();
        session.toggle_node(ParentSide::Male, AncestorNode::Grandmother);
        session.toggle_node(ParentSide::Female, AncestorNode::Grandfather);
        assert_eq!(session.current_history(), HistoryCategory::BothParents);

        let submission = session.begin_submit(Calculator::Thalassemia);
        let body = serde_json::to_value(&submission.request).unwrap();
        assert_eq!(body["history"], "both_parents");
    }

    #[test]
    fn test_busy_label_restored_on_success_and_failure() {
        let mut session = Session::new("Calculating...");
        let submission = session.begin_submit(Calculator::Hemophilia);
        assert_eq!(session.submit_label(Calculator::Hemophilia), "Calculating...");
        assert_eq!(session.submit_label(Calculator::Thalassemia), SUBMIT_LABEL);

        session.complete_submit(submission.ticket, Ok(plot()));
        assert_eq!(session.submit_label(Calculator::Hemophilia), SUBMIT_LABEL);

        let submission = session.begin_submit(Calculator::Hemophilia);
        session.complete_submit(submission.ticket, Err(RiskError::connection_failure("refused")));
        assert_eq!(session.submit_label(Calculator::Hemophilia), SUBMIT_LABEL);
    }

    #[test]
    fn test_failure_leaves_panel_untouched() {
        let mut session = Session::default();
        let first = session.begin_submit(Calculator::Thalassemia);
        session.complete_submit(first.ticket, Ok(plot()));
        let before = session.results().clone();

        let second = session.begin_submit(Calculator::Thalassemia);
        let outcome = session.complete_submit(second.ticket, Err(RiskError::connection_failure("timed out")));

        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                notice: CONNECTION_NOTICE.to_string()
            }
        );
        assert_eq!(session.notice(), Some(CONNECTION_NOTICE));
        assert_eq!(session.results(), &before);
        assert!(session.results().is_visible());

        session.dismiss_notice();
        assert_eq!(session.notice(), None);
    }

    #[test]
    fn test_failure_with_hidden_panel_stays_hidden() {
        let mut session = Session::default();
        let submission = session.begin_submit(Calculator::Hemophilia);
        session.complete_submit(submission.ticket, Err(RiskError::connection_failure("refused")));
        assert!(!session.results().is_visible());
    }

    #[test]
    fn test_overlapping_submissions_last_issued_wins() {
        let mut session = Session::default();
        let first = session.begin_submit(Calculator::Hemophilia);
        let second = session.begin_submit(Calculator::Hemophilia);
        assert!(session.is_busy(Calculator::Hemophilia));

        // Newer resolves first, older straggles in afterwards
        assert_eq!(session.complete_submit(second.ticket, Ok(plot())), SubmitOutcome::Applied);
        assert!(session.is_busy(Calculator::Hemophilia));
        assert_eq!(session.complete_submit(first.ticket, Ok(bars())), SubmitOutcome::Stale);

        assert!(!session.is_busy(Calculator::Hemophilia));
        assert!(session.results().bars().is_empty());
        assert!(matches!(
            session.results().visualization(),
            Visualization::Plot { size: PlotSize::Large, .. }
        ));
    }

    #[test]
    fn test_overlapping_across_calculators() {
        let mut session = Session::default();
        let thal = session.begin_submit(Calculator::Thalassemia);
        let hemo = session.begin_submit(Calculator::Hemophilia);

        assert_eq!(session.complete_submit(thal.ticket, Ok(bars())), SubmitOutcome::Stale);
        assert_eq!(session.complete_submit(hemo.ticket, Ok(bars())), SubmitOutcome::Applied);
        assert_eq!(session.results().calculator(), Some(Calculator::Hemophilia));
        assert_eq!(session.results().bars().len(), 3);
        assert!(session.results().plot().is_none());
    }

    #[test]
    fn test_superseded_failure_still_raises_notice() {
        let mut session = Session::default();
        let first = session.begin_submit(Calculator::Thalassemia);
        let second = session.begin_submit(Calculator::Thalassemia);
        session.complete_submit(second.ticket, Ok(plot()));
        let before = session.results().clone();

        let outcome = session.complete_submit(first.ticket, Err(RiskError::connection_failure("refused")));
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                notice: CONNECTION_NOTICE.to_string()
            }
        );
        assert_eq!(session.notice(), Some(CONNECTION_NOTICE));
        assert_eq!(session.results(), &before);
    }

    #[test]
    fn test_failure_after_tab_switch_raises_notice() {
        let mut session = Session::default();
        let pending = session.begin_submit(Calculator::Thalassemia);
        session.switch_tab(Calculator::Hemophilia);

        let outcome = session.complete_submit(pending.ticket, Err(RiskError::connection_failure("refused")));
        assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
        assert_eq!(session.notice(), Some(CONNECTION_NOTICE));
        assert_eq!(session.submit_label(Calculator::Thalassemia), SUBMIT_LABEL);
        assert!(!session.results().is_visible());
    }

    #[test]
    fn test_tab_switch_hides_and_supersedes() {
        let mut session = Session::default();
        let done = session.begin_submit(Calculator::Thalassemia);
        session.complete_submit(done.ticket, Ok(plot()));
        assert!(session.results().is_visible());

        let pending = session.begin_submit(Calculator::Thalassemia);
        session.switch_tab(Calculator::Hemophilia);
        assert!(!session.results().is_visible());

        assert_eq!(session.complete_submit(pending.ticket, Ok(bars())), SubmitOutcome::Stale);
        assert!(!session.results().is_visible());
        assert_eq!(session.submit_label(Calculator::Thalassemia), SUBMIT_LABEL);
        assert_eq!(session.selection().active_tab(), Calculator::Hemophilia);
    }
}
