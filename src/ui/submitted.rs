//! Submission confirmation view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the confirmation screen with the submitted payload
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Submitted ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Thank you! The form was submitted.",
            Style::default().fg(Color::Green),
        )),
        Line::from(""),
    ];

    if let Some(submission) = &app.state.last_submission {
        lines.push(Line::from(Span::styled(
            format!("Submitted at {}", submission.submitted_at.to_rfc3339()),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));

        let payload = match serde_json::to_string_pretty(&submission.values) {
            Ok(json) => json,
            Err(_) => format!("{:?}", submission.values),
        };
        for line in payload.lines() {
            lines.push(Line::from(line.to_string()));
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
