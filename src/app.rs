//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{
    AppState, CountryCatalog, FieldKind, FieldName, Form, SubmitDecision, SubmitPhase, Submission,
    View, ViewParams,
};
use crate::submit::{PendingSubmission, Submitter};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Performs submissions of a validated form
    submitter: Arc<dyn Submitter>,
    /// Submission in flight, if any
    pending: Option<PendingSubmission>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, catalog: CountryCatalog, submitter: Arc<dyn Submitter>) -> Self {
        let mut state = AppState::new(Arc::new(catalog));
        state.form.show_password = config.show_password();

        Self {
            state,
            submitter,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Whether a submission is in flight
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// How long the in-flight submission has been running
    pub fn submission_elapsed(&self) -> Option<Duration> {
        self.pending.as_ref().map(PendingSubmission::elapsed)
    }

    /// Navigate to a new view.
    ///
    /// The success view needs a submission; without one the app is sent
    /// back to the registration form, replacing the current entry.
    pub fn navigate(&mut self, view: View, params: ViewParams) {
        if view == View::Success && params.submission.is_none() {
            tracing::debug!("no submission to confirm, showing registration");
            self.state.current_view = View::Registration;
            self.state.view_params = ViewParams::default();
            return;
        }

        tracing::info!(from = ?self.state.current_view, to = ?view, "navigate");
        self.state.view_history.push((
            self.state.current_view.clone(),
            self.state.view_params.clone(),
        ));
        self.state.current_view = view;
        self.state.view_params = params;
    }

    /// Start over with an empty form
    pub fn back_to_registration(&mut self) {
        self.state.reset_form();
        self.navigate(View::Registration, ViewParams::default());
    }

    /// Submit the registration form.
    ///
    /// An invalid form only has its errors revealed. A submit while one is
    /// already in flight does nothing.
    pub fn submit(&mut self) {
        match self.state.form.attempt_submit() {
            SubmitDecision::Started(values) => {
                self.pending = Some(PendingSubmission::spawn(self.submitter.clone(), values));
            }
            SubmitDecision::Rejected => {
                let invalid: Vec<_> = self
                    .state
                    .form
                    .errors()
                    .invalid_fields()
                    .map(FieldName::key)
                    .collect();
                tracing::debug!(?invalid, "registration has errors");
            }
            SubmitDecision::Ignored => {}
        }
    }

    /// Collect the outcome of the in-flight submission, if it is done
    pub fn poll_submission(&mut self) {
        let Some(outcome) = self.pending.as_mut().and_then(PendingSubmission::try_outcome)
        else {
            return;
        };
        self.pending = None;

        match self.state.form.finish_submission(outcome) {
            Some(values) => {
                // The registration view is torn down on navigation
                self.state.reset_form();
                self.navigate(
                    View::Success,
                    ViewParams {
                        submission: Some(Submission::new(values)),
                    },
                );
            }
            None => {
                if let SubmitPhase::Failed(message) = self.state.form.phase() {
                    let message = message.clone();
                    self.state.push_error(message);
                }
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Error dialog is modal
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.current_view {
            View::Registration => self.handle_registration_key(key),
            View::Success => self.handle_success_key(key),
        }
    }

    /// Handle keys in Registration view
    fn handle_registration_key(&mut self, key: KeyEvent) {
        // Values are frozen while the submission is in flight
        if self.state.form.is_submitting() {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let form = &mut self.state.form;
        let on_submit_row = form.is_submit_row_active();
        let on_select = form.active().map(|f| f.kind()) == Some(FieldKind::Select);

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('p') if ctrl => form.toggle_password_visibility(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter => form.next_field(),
            KeyCode::Left if on_select => form.cycle_option(false),
            KeyCode::Right if on_select => form.cycle_option(true),
            KeyCode::Char(c) if !ctrl => form.input_char(c),
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Handle keys in Success view
    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('b') => self.back_to_registration(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }
}
