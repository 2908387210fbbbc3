use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

pub struct DashboardLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub form: Rect,
    pub response: Rect,
    pub status_bar: Rect,
}

/// Split the dashboard. `form_height` is the height the active tab's form
/// needs, including borders.
pub fn dashboard_layout(area: Rect, form_height: u16) -> DashboardLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Header
            Constraint::Length(1),           // Tab strip
            Constraint::Length(form_height), // Form
            Constraint::Min(3),              // Response
            Constraint::Length(1),           // Status bar
        ])
        .split(area);

    DashboardLayout {
        header: main_chunks[0],
        tabs: main_chunks[1],
        form: main_chunks[2],
        response: main_chunks[3],
        status_bar: main_chunks[4],
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
