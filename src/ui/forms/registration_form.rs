//! Registration form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldDisplay, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldKind, FieldName, RegistrationForm};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use std::time::Duration;

/// Fields per row, mirroring the two-column form layout
const ROWS: &[&[FieldName]] = &[
    &[FieldName::FirstName, FieldName::LastName],
    &[FieldName::Username, FieldName::Email],
    &[FieldName::Password],
    &[FieldName::PhoneNumber],
    &[FieldName::Country, FieldName::City],
    &[FieldName::PanNumber, FieldName::AadharNumber],
];

const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw registration form with action sidebar
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(24), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], &app.state.form);
    draw_action_panel(frame, main_chunks[1], app);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let border_color = if form.is_submit_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Personal Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints: Vec<Constraint> = ROWS
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    for (row_fields, row_area) in ROWS.iter().zip(rows.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, row_fields.len() as u32);
                row_fields.len()
            ])
            .spacing(1)
            .split(*row_area);

        for (field, column) in row_fields.iter().zip(columns.iter()) {
            draw_field(frame, *column, &field_display(form, *field));
        }
    }
}

/// How `field` should look given the current form state
fn field_display(form: &RegistrationForm, field: FieldName) -> FieldDisplay<'static> {
    let value = form.values().get(field);
    let is_active = form.active() == Some(field);
    let is_disabled = field == FieldName::City && form.values().country.is_empty();

    let (text, is_placeholder) = match field.kind() {
        FieldKind::Secret if form.show_password => (value.to_string(), false),
        FieldKind::Secret => ("•".repeat(value.chars().count()), false),
        FieldKind::Select if is_disabled => ("Select a country first".to_string(), true),
        FieldKind::Select => {
            let (shown, placeholder) = if value.is_empty() {
                (field.placeholder().unwrap_or_default(), true)
            } else {
                (value, false)
            };
            if is_active {
                (format!("◂ {shown} ▸"), placeholder)
            } else {
                (shown.to_string(), placeholder)
            }
        }
        FieldKind::Text => (value.to_string(), false),
    };

    FieldDisplay {
        label: field.label(),
        text,
        is_placeholder,
        is_active,
        is_disabled,
        error: form.visible_error(field),
    }
}

/// Label of the Register button
fn submit_label(elapsed: Option<Duration>) -> String {
    match elapsed {
        Some(elapsed) => {
            let frame = (elapsed.as_millis() / 80) as usize % SPINNER.len();
            format!("{} Processing...", SPINNER[frame])
        }
        None => "Register".to_string(),
    }
}

fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.is_submit_row_active();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Register
            Constraint::Length(1),             // spacer
            Constraint::Min(0),                // help
        ])
        .split(inner_area);

    let is_enabled = form.is_valid() && !app.is_submitting();
    render_action_button(
        frame,
        chunks[0],
        &submit_label(app.submission_elapsed()),
        is_focused,
        is_enabled,
        Some(Color::Green),
    );

    let invalid = form.errors().invalid_fields().count();
    let status = if form.touched().is_empty() {
        "Fill in your details.".to_string()
    } else if invalid == 0 {
        "All fields look good.".to_string()
    } else {
        format!("{invalid} field(s) to complete.")
    };
    let progress = format!(
        "{}/{} fields visited",
        form.touched().len(),
        FieldName::COUNT
    );
    draw_help_text(
        frame,
        chunks[2],
        &[
            status.as_str(),
            progress.as_str(),
            "",
            "Tab/↓  next field",
            "S-Tab/↑  previous",
            "←/→  choose option",
            "^P  show password",
            "^S  register",
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CountryCatalog;
    use std::sync::Arc;

    fn new_form() -> RegistrationForm {
        RegistrationForm::new(Arc::new(CountryCatalog::builtin()))
    }

    #[test]
    fn test_rows_cover_every_field_once() {
        let mut fields: Vec<FieldName> = ROWS.iter().flat_map(|r| r.iter().copied()).collect();
        fields.sort();
        assert_eq!(fields, FieldName::ALL.to_vec());
    }

    #[test]
    fn test_password_is_masked_unless_shown() {
        let mut form = new_form();
        form.set_field(FieldName::Password, "Abc123!@");

        let masked = field_display(&form, FieldName::Password);
        assert_eq!(masked.text, "••••••••");

        form.toggle_password_visibility();
        let shown = field_display(&form, FieldName::Password);
        assert_eq!(shown.text, "Abc123!@");
    }

    #[test]
    fn test_empty_select_shows_placeholder() {
        let form = new_form();
        let country = field_display(&form, FieldName::Country);
        assert_eq!(country.text, "Select Country");
        assert!(country.is_placeholder);
    }

    #[test]
    fn test_city_disabled_without_country() {
        let mut form = new_form();
        let city = field_display(&form, FieldName::City);
        assert!(city.is_disabled);

        form.on_country_change("India");
        let city = field_display(&form, FieldName::City);
        assert!(!city.is_disabled);
        assert_eq!(city.text, "Select City");
    }

    #[test]
    fn test_active_select_shows_arrows() {
        let mut form = new_form();
        form.on_country_change("Canada");
        form.active_field_index = FieldName::Country.index();
        assert_eq!(field_display(&form, FieldName::Country).text, "◂ Canada ▸");
    }

    #[test]
    fn test_error_only_when_touched() {
        let mut form = new_form();
        assert_eq!(field_display(&form, FieldName::Email).error, None);
        form.mark_touched(FieldName::Email);
        assert_eq!(
            field_display(&form, FieldName::Email).error,
            Some("Email is required")
        );
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(None), "Register");
        assert!(submit_label(Some(Duration::from_millis(250))).ends_with("Processing..."));
    }
}
