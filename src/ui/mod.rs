//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match (&app.state.current_view, app.state.submission()) {
        (View::Success, Some(submission)) => success::draw(frame, main_area, submission),
        // Without a payload there is nothing to confirm
        _ => forms::draw_registration(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message, app.state.error_queue.len() - 1);
    }
}
