//! Field rendering utilities for the contact form
//!
//! Every field row is a bordered input box with a one-line error slot
//! underneath; the slot stays empty while the field passes its rules.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn split_field_row(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Input box
            Constraint::Length(1), // Error line
        ])
        .split(area);
    (chunks[0], chunks[1])
}

fn border_style(is_active: bool, error: Option<&str>) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_error_line(frame: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let line = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(line, area);
    }
}

/// Draw a free-text field with its error slot
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
    error: Option<&str>,
) {
    let (box_area, error_area) = split_field_row(area);

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = value.lines().map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, text_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), box_area);
    draw_error_line(frame, error_area, error);
}

/// Draw a choice field (radio group or select) with its error slot.
///
/// The caller builds the display string; this keeps radio-style and
/// select-style presentation in one place per field.
pub fn draw_choice_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    display: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let (box_area, error_area) = split_field_row(area);

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error));

    let content = Paragraph::new(Line::from(Span::styled(display, text_style)));
    frame.render_widget(content.block(block), box_area);
    draw_error_line(frame, error_area, error);
}

/// Draw a checkbox field with its error slot
pub fn draw_checkbox_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    caption: &str,
    checked: bool,
    is_active: bool,
    error: Option<&str>,
) {
    let (box_area, error_area) = split_field_row(area);

    let mark = if checked { "[x]" } else { "[ ]" };
    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error));

    let content = Paragraph::new(Line::from(vec![
        Span::styled(mark, text_style),
        Span::raw(" "),
        Span::styled(caption, text_style),
    ]));
    frame.render_widget(content.block(block), box_area);
    draw_error_line(frame, error_area, error);
}
