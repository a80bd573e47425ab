//! Registration form controller
//!
//! Owns the raw values and everything derived from them: the error map,
//! overall validity, the touched set, the city options for the selected
//! country, and the submission phase. Every change revalidates all fields.

use super::field::{FieldKind, FieldName};
use super::values::{FormErrors, FormValues, TouchedSet};
use crate::state::CountryCatalog;
use crate::submit::SubmitError;
use std::sync::Arc;

/// Where the form is in its submission lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    /// A submission is in flight; further submits are ignored
    Submitting,
    /// The last submission failed; the form can be submitted again
    Failed(String),
    /// Submitted and navigated away. Terminal.
    Completed,
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// The form is valid; submit these values
    Started(FormValues),
    /// The form is invalid; every error is now visible
    Rejected,
    /// A submission is already in flight or done
    Ignored,
}

/// Trait for moving focus between the rows of a form
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    values: FormValues,
    errors: FormErrors,
    touched: TouchedSet,
    city_options: Vec<String>,
    phase: SubmitPhase,
    catalog: Arc<CountryCatalog>,
    /// Focused row: 0-9 are the fields, 10 is the Register button
    pub active_field_index: usize,
    pub show_password: bool,
}

impl RegistrationForm {
    /// Row index of the Register button
    pub const SUBMIT_ROW: usize = FieldName::COUNT;

    pub fn new(catalog: Arc<CountryCatalog>) -> Self {
        let values = FormValues::default();
        Self {
            errors: FormErrors::compute(&values),
            values,
            touched: TouchedSet::default(),
            city_options: Vec::new(),
            phase: SubmitPhase::Idle,
            catalog,
            active_field_index: 0,
            show_password: false,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> &'static str {
        self.errors.get(field)
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(field)
    }

    /// The error to display for `field`, if it has one and was touched
    pub fn visible_error(&self, field: FieldName) -> Option<&'static str> {
        let message = self.error(field);
        (self.is_touched(field) && !message.is_empty()).then_some(message)
    }

    /// Cities selectable for the current country
    pub fn city_options(&self) -> &[String] {
        &self.city_options
    }

    /// True iff every field passes its rule
    pub fn is_valid(&self) -> bool {
        self.errors.is_clean()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    /// Overwrite one value, mark it touched, and revalidate.
    ///
    /// Country changes go through [`Self::on_country_change`]. A city that is
    /// not among the current options is ignored.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldName::Country => self.on_country_change(value),
            FieldName::City
                if !value.is_empty() && !self.catalog.contains_city(&self.values.country, &value) =>
            {
                tracing::debug!(country = %self.values.country, "ignoring city outside the selected country");
            }
            _ => {
                self.values.set(field, value);
                self.touched.touch(field);
                self.revalidate();
            }
        }
    }

    pub fn mark_touched(&mut self, field: FieldName) {
        self.touched.touch(field);
    }

    /// Set the country, refresh the city options, and drop a city that no
    /// longer belongs to it
    pub fn on_country_change(&mut self, country: impl Into<String>) {
        self.values.country = country.into();
        self.touched.touch(FieldName::Country);
        self.refresh_city_options();
        self.revalidate();
    }

    /// Recompute the city options from the catalog and enforce that the
    /// selected city is empty or one of them
    fn refresh_city_options(&mut self) {
        self.city_options = self
            .catalog
            .cities(&self.values.country)
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        if !self.values.city.is_empty() && !self.city_options.contains(&self.values.city) {
            tracing::debug!(
                country = %self.values.country,
                city = %self.values.city,
                "clearing city that does not belong to the selected country"
            );
            self.values.city.clear();
        }
    }

    fn revalidate(&mut self) {
        self.errors = FormErrors::compute(&self.values);
    }

    /// Reveal every error and, if the form is valid, enter the submitting
    /// phase
    pub fn attempt_submit(&mut self) -> SubmitDecision {
        if matches!(self.phase, SubmitPhase::Submitting | SubmitPhase::Completed) {
            tracing::debug!(phase = ?self.phase, "ignoring submit");
            return SubmitDecision::Ignored;
        }

        self.touched.touch_all();
        self.phase = SubmitPhase::Idle;

        if !self.is_valid() {
            return SubmitDecision::Rejected;
        }

        tracing::info!("submitting registration");
        self.phase = SubmitPhase::Submitting;
        SubmitDecision::Started(self.values.clone())
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Returns the values to navigate with when the submission succeeded.
    pub fn finish_submission(&mut self, outcome: Result<(), SubmitError>) -> Option<FormValues> {
        if !self.is_submitting() {
            return None;
        }
        match outcome {
            Ok(()) => {
                tracing::info!("registration submitted");
                self.phase = SubmitPhase::Completed;
                Some(self.values.clone())
            }
            Err(err) => {
                tracing::warn!(error = %err, "registration submit failed");
                self.phase = SubmitPhase::Failed(err.to_string());
                None
            }
        }
    }

    /// Field under the cursor, or None when the Register button is focused
    pub fn active(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_ROW
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.active() else { return };
        if field.kind() == FieldKind::Select {
            return;
        }
        let mut value = self.values.get(field).to_string();
        value.push(c);
        self.set_field(field, value);
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.active() else { return };
        if field.kind() == FieldKind::Select {
            return;
        }
        let mut value = self.values.get(field).to_string();
        if value.pop().is_some() {
            self.set_field(field, value);
        }
    }

    /// Step the focused select field to its next or previous option.
    ///
    /// The empty selection is part of the cycle.
    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.active() else { return };
        let options: Vec<String> = match field {
            FieldName::Country => self.catalog.country_names().map(str::to_string).collect(),
            FieldName::City if !self.values.country.is_empty() => self.city_options.clone(),
            _ => return,
        };

        // Slot 0 is "nothing selected"
        let slots = options.len() + 1;
        let current = options
            .iter()
            .position(|o| o == self.values.get(field))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        let value = if next == 0 {
            String::new()
        } else {
            options[next - 1].clone()
        };
        self.set_field(field, value);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Leaving a field counts as interacting with it
    fn blur_active(&mut self) {
        if let Some(field) = self.active() {
            self.mark_touched(field);
        }
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FieldName::COUNT + 1 // fields + Register button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.blur_active();
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
}
