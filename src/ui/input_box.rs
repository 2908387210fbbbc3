use crate::app::state::InputState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of one bordered field.
pub const FIELD_HEIGHT: u16 = 3;

fn field_block(label: &str, focused: bool) -> Block<'static> {
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    Block::default()
        .title(format!(" {} ", label))
        .title_style(if focused { Theme::title() } else { Theme::label() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg)
}

/// Single-line text input. Masked inputs show one bullet per character.
pub fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &InputState,
    focused: bool,
    masked: bool,
) {
    let block = field_block(label, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let (shown, cursor_col) = if masked {
        (
            "•".repeat(input.text.chars().count()),
            input.cursor_chars(),
        )
    } else {
        (input.text.clone(), input.cursor_width())
    };

    // Scroll horizontally so the cursor stays visible
    let cursor_col = cursor_col as u16;
    let offset = cursor_col.saturating_sub(inner.width.saturating_sub(1));
    let paragraph = Paragraph::new(shown)
        .style(Theme::input_text())
        .scroll((0, offset));
    frame.render_widget(paragraph, inner);

    if focused {
        let cursor_x = inner.x + cursor_col - offset;
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

/// Value picked with Left/Right. `None` renders a placeholder.
pub fn render_selector(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: Option<&str>,
    placeholder: &str,
    focused: bool,
) {
    let block = field_block(label, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let arrow = if focused {
        Style::default().fg(Theme::ACCENT_TEAL)
    } else {
        Theme::hint()
    };
    let value_span = match value {
        Some(v) => Span::styled(v.to_string(), Theme::selector_value()),
        None => Span::styled(placeholder.to_string(), Theme::hint()),
    };
    let line = Line::from(vec![
        Span::styled("◀ ", arrow),
        value_span,
        Span::styled(" ▶", arrow),
    ]);
    frame.render_widget(Paragraph::new(line), inner);
}
