use crate::app::state::*;
use crate::ui::input_box::{self, FIELD_HEIGHT};
use crate::ui::layout::centered;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

const FORM_WIDTH: u16 = 54;

fn field_label(field: AuthField) -> &'static str {
    match field {
        AuthField::Username => "Username",
        AuthField::Password => "Password",
        AuthField::ConfirmPassword => "Confirm Password",
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let auth = &state.auth;
    let fields = auth.fields();
    // borders + padding + tab strip + gap + fields + message + button
    let height = 2 + 2 + 1 + 1 + fields.len() as u16 * FIELD_HEIGHT + 2 + 1;
    let rect = centered(area, FORM_WIDTH, height);

    let block = Block::default()
        .title(" Baccalaureate AI Tutor ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .padding(Padding::uniform(1))
        .style(Theme::panel_bg());
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    constraints.extend(fields.iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Length(1));
    let rows = Layout::vertical(constraints).split(inner);

    render_tab_strip(frame, rows[0], auth.tab);

    for (i, field) in fields.iter().enumerate() {
        let masked = *field != AuthField::Username;
        input_box::render_text_field(
            frame,
            rows[2 + i],
            field_label(*field),
            auth.input(*field),
            auth.focus == *field,
            masked,
        );
    }

    let message_row = rows[2 + fields.len()];
    let message = match (&auth.error, &auth.success) {
        (Some(err), _) => Some(Span::styled(err.clone(), Theme::error_message())),
        (None, Some(ok)) => Some(Span::styled(ok.clone(), Theme::success_message())),
        (None, None) => None,
    };
    if let Some(span) = message {
        frame.render_widget(
            Paragraph::new(Line::from(span)).wrap(Wrap { trim: true }),
            message_row,
        );
    }

    let label = match (auth.tab, auth.submitting) {
        (AuthTab::Login, false) => "Login",
        (AuthTab::Login, true) => "Logging in...",
        (AuthTab::Register, false) => "Register",
        (AuthTab::Register, true) => "Registering...",
    };
    let style = if auth.submitting {
        Theme::button_busy()
    } else {
        Theme::button()
    };
    let button = Paragraph::new(Line::from(Span::styled(format!("  {}  ", label), style)))
        .alignment(Alignment::Center);
    frame.render_widget(button, rows[3 + fields.len()]);
}

fn render_tab_strip(frame: &mut Frame, area: Rect, active: AuthTab) {
    let style_for = |tab: AuthTab| {
        if tab == active {
            Theme::tab_active()
        } else {
            Theme::tab_normal()
        }
    };
    let line = Line::from(vec![
        Span::styled("F1 Login", style_for(AuthTab::Login)),
        Span::styled("   │   ", Theme::hint()),
        Span::styled("F2 Register", style_for(AuthTab::Register)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
