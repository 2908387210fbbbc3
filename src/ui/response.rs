use crate::app::state::*;
use crate::ui::markdown::render_markdown;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};

/// Rows `lines` occupy once wrapped to `width` columns.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> usize {
    let width = width.max(1) as usize;
    lines
        .iter()
        .map(|l| l.width().max(1).div_ceil(width))
        .sum()
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let tab = state.console.tab;
    let view = state.console.view(tab);

    let mut block = Block::default()
        .title(format!(" {} ", tab.response_title()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Theme::panel_bg());
    if view.response.is_some() {
        block = block.title_bottom(Line::from(Span::styled(" ^Y copy ", Theme::hint())).right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(response) = &view.response else {
        let hint = if state.console.is_loading(tab) {
            tab.loading_label()
        } else {
            "Submit the form to see the tutor's answer here."
        };
        frame.render_widget(Paragraph::new(Span::styled(hint, Theme::hint())), inner);
        return;
    };

    let lines = render_markdown(response);
    let total = wrapped_height(&lines, inner.width);
    let available = inner.height as usize;
    let max_scroll = total.saturating_sub(available);
    view.max_scroll.set(u16::try_from(max_scroll).unwrap_or(u16::MAX));
    let scroll = (view.scroll as usize).min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, inner);

    // Scrollbar
    if total > available {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"))
            .thumb_style(Theme::scrollbar_thumb())
            .track_style(Theme::scrollbar_track());

        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}
