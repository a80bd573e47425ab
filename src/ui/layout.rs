//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let mut spans = vec![];

    let (marker, color) = if app.is_submitting() {
        (" ◌ ", Color::Yellow)
    } else if form.is_valid() {
        (" ● ", Color::Green)
    } else {
        (" ○ ", Color::Red)
    };
    spans.push(Span::styled(marker, Style::default().fg(color)));
    spans.push(Span::styled(
        format!("{} | ", app.state.current_view.title()),
        Style::default().fg(Color::White),
    ));

    spans.push(Span::styled(
        get_view_hints(&app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    let country = &form.values().country;
    if app.state.current_view == View::Registration && !country.is_empty() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{country}: {} cities", form.city_options().len()),
            Style::default().fg(Color::Blue),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> &'static str {
    match view {
        View::Registration => "Tab:next  ←/→:choose  ^P:password  ^S:register",
        View::Success => "Enter/b:back to registration  q:quit",
    }
}
