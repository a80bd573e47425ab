//! Application state definitions

use super::catalog::CountryCatalog;
use super::forms::{FormValues, RegistrationForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

/// Current view in the application
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Registration,
    Success,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Registration => "Personal Details",
            Self::Success => "Registration Successful!",
        }
    }
}

/// A completed registration, carried to the success view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub values: FormValues,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            submitted_at: Utc::now(),
        }
    }
}

/// View parameters for navigation
#[derive(Debug, Clone, Default)]
pub struct ViewParams {
    pub submission: Option<Submission>,
}

/// Main application state
#[derive(Debug)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_params: ViewParams,
    pub view_history: Vec<(View, ViewParams)>,

    // Registration form
    pub form: RegistrationForm,
    pub catalog: Arc<CountryCatalog>,

    /// Errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(catalog: Arc<CountryCatalog>) -> Self {
        Self {
            current_view: View::default(),
            view_params: ViewParams::default(),
            view_history: Vec::new(),
            form: RegistrationForm::new(catalog.clone()),
            catalog,
            error_queue: VecDeque::new(),
        }
    }

    /// Replace the form with an empty one
    pub fn reset_form(&mut self) {
        let show_password = self.form.show_password;
        self.form = RegistrationForm::new(self.catalog.clone());
        self.form.show_password = show_password;
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// The submission shown on the success view
    pub fn submission(&self) -> Option<&Submission> {
        self.view_params.submission.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(CountryCatalog::builtin()))
    }
}
