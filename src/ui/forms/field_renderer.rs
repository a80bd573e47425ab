//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus an error line
pub const FIELD_HEIGHT: u16 = 4;

/// What to draw for a single field
#[derive(Debug, Clone)]
pub struct FieldDisplay<'a> {
    pub label: &'a str,
    /// Text shown inside the box
    pub text: String,
    /// Draw `text` as a dimmed placeholder
    pub is_placeholder: bool,
    pub is_active: bool,
    pub is_disabled: bool,
    /// Error to show under the box
    pub error: Option<&'a str>,
}

/// Draw a bordered input with its error line underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldDisplay) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_color = if field.is_active {
        Color::Cyan
    } else if field.error.is_some() {
        Color::Red
    } else {
        Color::DarkGray
    };

    let text_style = if field.is_placeholder || field.is_disabled {
        Style::default().fg(Color::DarkGray)
    } else if field.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let mut spans = vec![Span::styled(field.text.as_str(), text_style)];
    if field.is_active && !field.is_disabled {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(error) = field.error {
        let error_line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(error_line, chunks[1]);
    }
}

/// Draw dimmed help text
pub fn draw_help_text(frame: &mut Frame, area: Rect, lines: &[&str]) {
    let text: Vec<Line> = lines
        .iter()
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(Color::DarkGray),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(text), area);
}
