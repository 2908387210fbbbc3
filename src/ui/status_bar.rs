use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn hints(state: &AppState) -> &'static str {
    if state.is_authenticated() {
        "F1-F5 tabs  Tab field  ←/→ choose  Enter submit  ^Y copy  ^O logout  Esc quit"
    } else {
        "F1 login  F2 register  Tab field  Enter submit  Esc quit"
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let busy = state.auth.submitting || state.console.any_loading();
    if busy {
        let frame_idx = (state.tick_count as usize) % SPINNER.len();
        parts.push(Span::styled(
            format!(" {}", SPINNER[frame_idx]),
            Style::default().fg(Theme::ACCENT_AMBER).bg(Theme::BG_ELEVATED),
        ));
    }

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Toast replaces the key hints while it is visible
    let (right, right_style) = match &state.toast {
        Some(toast) => (format!(" {} ", toast.text), Theme::toast(toast.kind)),
        None => (
            format!(" {} ", hints(state)),
            Style::default().fg(Theme::TEXT_MUTED).bg(Theme::BG_ELEVATED),
        ),
    };

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + right.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(right, right_style));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
