use crate::app::state::*;
use crate::app::tab::Tab;
use crate::ui::input_box::{self, FIELD_HEIGHT};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

/// Rows the active tab's form needs: borders, fields, error line, button.
pub fn form_height(console: &ConsoleModel) -> u16 {
    2 + console.fields().len() as u16 * FIELD_HEIGHT + 1 + 1
}

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let title = Span::styled(" Baccalaureate AI Tutor", Theme::title());
    let subject = match state.console.subject() {
        Some(s) => Span::styled(format!("  [{}]", s.label()), Theme::selector_value()),
        None => Span::styled("  [no subject]", Theme::hint()),
    };
    frame.render_widget(Paragraph::new(Line::from(vec![title, subject])), area);

    let logout = Paragraph::new(Span::styled("^O Logout ", Theme::hint()))
        .alignment(Alignment::Right);
    frame.render_widget(logout, area);
}

pub fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            let mut label = format!("F{} {}", i + 1, tab.label());
            if state.console.is_loading(*tab) {
                label.push_str(" …");
            }
            Line::from(label)
        })
        .collect();
    let tabs = Tabs::new(titles)
        .select(state.console.tab.index())
        .style(Theme::tab_normal())
        .highlight_style(Theme::tab_active())
        .divider(Span::styled("│", Theme::hint()));
    frame.render_widget(tabs, area);
}

pub fn render_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let console = &state.console;
    let tab = console.tab;

    let block = Block::default()
        .title(format!(" {} ", tab.label()))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border())
        .padding(Padding::horizontal(1))
        .style(Theme::panel_bg());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = console.fields();
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(inner);

    for (i, field) in fields.iter().enumerate() {
        let focused = console.focus == *field;
        let row = rows[i];
        match field {
            ConsoleField::Subject => input_box::render_selector(
                frame,
                row,
                field.label(),
                console.subject().map(|s| s.label()),
                "Select a subject",
                focused,
            ),
            ConsoleField::Difficulty => input_box::render_selector(
                frame,
                row,
                field.label(),
                Some(console.difficulty.label()),
                "",
                focused,
            ),
            _ => {
                if let Some(input) = console.input(*field) {
                    input_box::render_text_field(frame, row, field.label(), input, focused, false);
                }
            }
        }
    }

    if let Some(err) = &console.view(tab).error {
        frame.render_widget(
            Paragraph::new(Span::styled(err.clone(), Theme::error_message())),
            rows[fields.len()],
        );
    }

    let loading = console.is_loading(tab);
    let (label, style) = if loading {
        (tab.loading_label(), Theme::button_busy())
    } else {
        (tab.submit_label(), Theme::button())
    };
    let button = Paragraph::new(Line::from(vec![
        Span::styled(format!("  {}  ", label), style),
        Span::styled("  Enter", Theme::hint()),
    ]));
    frame.render_widget(button, rows[fields.len() + 1]);
}
