//! Contact form rendering

use super::field_renderer::{draw_checkbox_field, draw_choice_field, draw_text_field};
use crate::app::App;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::validation::{FieldKey, Gender};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Row height of a single-line field: bordered box plus the error line
const FIELD_ROW: u16 = 4;

/// Draw the contact form with its submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let report = app.validation();
    let form = &app.state.form;
    let values = &form.values;

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_ROW),     // Name
            Constraint::Length(FIELD_ROW),     // Email
            Constraint::Length(FIELD_ROW),     // Gender
            Constraint::Min(5),                // Memo (multiline)
            Constraint::Length(FIELD_ROW),     // Country
            Constraint::Length(FIELD_ROW),     // Terms
            Constraint::Length(BUTTON_HEIGHT), // Submit
        ])
        .split(inner);

    let active = form.active_key();

    draw_text_field(
        frame,
        chunks[0],
        FieldKey::Name.label(),
        &values.name,
        active == Some(FieldKey::Name),
        false,
        report.error(FieldKey::Name),
    );

    draw_text_field(
        frame,
        chunks[1],
        FieldKey::Email.label(),
        &values.email,
        active == Some(FieldKey::Email),
        false,
        report.error(FieldKey::Email),
    );

    draw_choice_field(
        frame,
        chunks[2],
        FieldKey::Gender.label(),
        &gender_display(values.gender),
        active == Some(FieldKey::Gender),
        report.error(FieldKey::Gender),
    );

    draw_text_field(
        frame,
        chunks[3],
        FieldKey::Memo.label(),
        &values.memo,
        active == Some(FieldKey::Memo),
        true,
        report.error(FieldKey::Memo),
    );

    let country_display = match values.country {
        Some(country) => format!("< {} >", country.label()),
        None => "< Select... >".to_string(),
    };
    draw_choice_field(
        frame,
        chunks[4],
        FieldKey::Country.label(),
        &country_display,
        active == Some(FieldKey::Country),
        report.error(FieldKey::Country),
    );

    draw_checkbox_field(
        frame,
        chunks[5],
        FieldKey::AgreeToTerms.label(),
        "I agree to the terms of service",
        values.agree_to_terms,
        active == Some(FieldKey::AgreeToTerms),
        report.error(FieldKey::AgreeToTerms),
    );

    // The submit control is disabled whenever any field fails a rule.
    render_button(
        frame,
        chunks[6],
        "Submit",
        form.is_submit_row_active(),
        report.is_valid(),
    );
}

fn gender_display(gender: Option<Gender>) -> String {
    let mark = |g| if gender == Some(g) { "(•)" } else { "( )" };
    format!(
        "{} {}   {} {}",
        mark(Gender::Male),
        Gender::Male.label(),
        mark(Gender::Female),
        Gender::Female.label()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_display_marks_the_selection() {
        assert_eq!(gender_display(Some(Gender::Male)), "(•) Male   ( ) Female");
        assert_eq!(gender_display(Some(Gender::Female)), "( ) Male   (•) Female");
        assert_eq!(gender_display(None), "( ) Male   ( ) Female");
    }
}
