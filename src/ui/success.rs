//! Confirmation view shown after a successful registration

use crate::state::{FieldName, Submission};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const PERSONAL: &[(&str, FieldName)] = &[
    ("First Name:", FieldName::FirstName),
    ("Last Name:", FieldName::LastName),
    ("Username:", FieldName::Username),
    ("Country:", FieldName::Country),
    ("City:", FieldName::City),
];

const COMMUNICATION: &[(&str, FieldName)] = &[
    ("Email:", FieldName::Email),
    ("Phone No.:", FieldName::PhoneNumber),
    ("PAN No.:", FieldName::PanNumber),
    ("Aadhar No.:", FieldName::AadharNumber),
];

const LABEL_WIDTH: usize = 13;

pub fn draw(frame: &mut Frame, area: Rect, submission: &Submission) {
    let block = Block::default()
        .title(" Registration Successful! ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),             // intro
            Constraint::Length(8),             // details
            Constraint::Length(2),             // timestamp
            Constraint::Length(BUTTON_HEIGHT), // back button
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    frame.render_widget(
        Paragraph::new("The details submitted to us are:"),
        chunks[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(2)
        .split(chunks[1]);
    draw_section(frame, columns[0], "Personal Details:", PERSONAL, submission);
    draw_section(
        frame,
        columns[1],
        "Communication Details:",
        COMMUNICATION,
        submission,
    );

    let submitted = submission
        .submitted_at
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M:%S");
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("Submitted at {submitted}"),
            Style::default().fg(Color::DarkGray),
        )),
        chunks[2],
    );

    let button_area = Rect {
        width: chunks[3].width.min(26),
        ..chunks[3]
    };
    render_action_button(
        frame,
        button_area,
        "Back to Registration",
        true,
        true,
        None,
    );
}

fn draw_section(
    frame: &mut Frame,
    area: Rect,
    heading: &str,
    rows: &[(&str, FieldName)],
    submission: &Submission,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            heading.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(rows.iter().map(|(label, field)| {
        Line::from(vec![
            Span::styled(
                format!("{label:<LABEL_WIDTH$}"),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(submission.values.get(*field).to_string()),
        ])
    }));
    frame.render_widget(Paragraph::new(lines), area);
}
