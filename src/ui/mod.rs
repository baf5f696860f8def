//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod submitted;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let content = layout::content_area(frame.area());

    match app.state.current_view {
        View::Form => forms::draw(frame, content, app),
        View::Submitted => submitted::draw(frame, content, app),
    }

    layout::draw_status_bar(frame, app);
}
