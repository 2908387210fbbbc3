mod console;
mod input_box;
mod layout;
mod login;
pub mod markdown;
mod response;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

/// Session gate: the login screen while no token is held, the dashboard
/// otherwise.
pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(theme::Theme::BG_DARK)), area);

    if state.is_authenticated() {
        render_dashboard(frame, area, state);
    } else {
        let [body, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);
        login::render(frame, body, state);
        status_bar::render(frame, status, state);
    }
}

fn render_dashboard(frame: &mut Frame, area: Rect, state: &AppState) {
    let dashboard = layout::dashboard_layout(area, console::form_height(&state.console));

    console::render_header(frame, dashboard.header, state);
    console::render_tabs(frame, dashboard.tabs, state);
    console::render_form(frame, dashboard.form, state);
    response::render(frame, dashboard.response, state);
    status_bar::render(frame, dashboard.status_bar, state);
}
