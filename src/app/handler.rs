use crate::api::error::ApiError;
use crate::api::types::RegisterOutcome;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::app::tab::Tab;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;
use tracing::{debug, info, warn};

const PAGE_SCROLL: i32 = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::LoginFinished { result } => {
            handle_login_finished(state, result);
            vec![]
        }
        AppEvent::RegisterFinished { result } => {
            handle_register_finished(state, result);
            vec![]
        }
        AppEvent::TutorFinished { ticket, result } => {
            handle_tutor_finished(state, ticket, result);
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    state.expire_toast(Instant::now());
    // Keep the spinner moving while anything is in flight
    if state.auth.submitting || state.console.any_loading() {
        state.dirty = true;
    }
    vec![]
}

fn handle_login_finished(state: &mut AppState, result: Result<String, ApiError>) {
    state.auth.submitting = false;
    state.dirty = true;
    if state.is_authenticated() {
        debug!("Ignoring login completion while already authenticated");
        return;
    }
    match result {
        Ok(token) => match state.complete_login(token) {
            Ok(()) => info!("Logged in"),
            Err(e) => {
                warn!(error = %e, "Could not persist session token");
                state.auth.error = Some(format!("Could not save session: {}", e));
            }
        },
        Err(e) => {
            warn!(error = %e, "Login failed");
            state.auth.error = Some("Invalid username or password".to_string());
        }
    }
}

fn handle_register_finished(state: &mut AppState, result: Result<RegisterOutcome, ApiError>) {
    state.auth.submitting = false;
    state.dirty = true;
    match result {
        Ok(RegisterOutcome::Created) => {
            info!("Registration succeeded");
            state.auth.switch_tab(AuthTab::Login);
            state.auth.success = Some("Registration successful! You can now log in.".to_string());
        }
        Ok(RegisterOutcome::UnexpectedStatus(status)) => {
            warn!(status, "Registration returned an unexpected success status");
            state.auth.error = Some("Registration failed. Please try again.".to_string());
        }
        Err(e) => {
            warn!(error = %e, "Registration failed");
            let message = if e.status() == Some(422) {
                "Invalid input. Please check your username and password."
            } else {
                "Registration failed. Username may already exist."
            };
            state.auth.error = Some(message.to_string());
        }
    }
}

fn handle_tutor_finished(state: &mut AppState, ticket: Ticket, result: Result<String, ApiError>) {
    let Some(pending) = state.console.finish(ticket) else {
        debug!(tab = ticket.tab.slug(), id = ticket.id, "Discarding stale response");
        return;
    };
    let tab = ticket.tab;
    state.dirty = true;
    match result {
        Ok(text) => {
            if state.config.logging.transcripts {
                state.record_transcript(tab, pending.subject, &text);
            }
            let view = state.console.view_mut(tab);
            view.response = Some(text);
            view.error = None;
            view.scroll = 0;
            state.show_toast(tab.success_toast(), ToastKind::Success);
        }
        Err(e) => {
            warn!(tab = tab.slug(), error = %e, "Tutor request failed");
            state.console.view_mut(tab).error = Some(tab.error_message().to_string());
            state.show_toast(tab.error_toast(), ToastKind::Error);
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }
    if key.code == KeyCode::Esc {
        return vec![Action::Quit];
    }

    if state.is_authenticated() {
        handle_console_key(state, key)
    } else {
        handle_auth_key(state, key)
    }
}

fn handle_auth_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::F(1) => state.auth.switch_tab(AuthTab::Login),
        KeyCode::F(2) => state.auth.switch_tab(AuthTab::Register),
        KeyCode::Tab | KeyCode::Down => state.auth.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.auth.focus_prev(),
        KeyCode::Enter => return submit_auth(state),
        _ => edit_input(state.auth.focused_input_mut(), key),
    }
    vec![]
}

fn submit_auth(state: &mut AppState) -> Vec<Action> {
    if state.auth.submitting {
        return vec![];
    }
    let auth = &mut state.auth;
    auth.error = None;
    auth.success = None;
    if auth.fields().iter().any(|f| auth.input(*f).is_blank()) {
        auth.error = Some("Please fill in all fields.".to_string());
        return vec![];
    }
    let username = auth.username.text.clone();
    let password = auth.password.text.clone();
    match auth.tab {
        AuthTab::Login => {
            auth.submitting = true;
            vec![Action::Login { username, password }]
        }
        AuthTab::Register => {
            if auth.password.text != auth.confirm_password.text {
                auth.error = Some("Passwords don't match".to_string());
                return vec![];
            }
            auth.submitting = true;
            vec![Action::Register { username, password }]
        }
    }
}

fn handle_console_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('o') if ctrl => return logout(state),
        KeyCode::Char('y') if ctrl => return copy_response(state),
        KeyCode::Left if ctrl => state.console.select_tab(state.console.tab.prev()),
        KeyCode::Right if ctrl => state.console.select_tab(state.console.tab.next()),
        KeyCode::F(n) => {
            if let Some(tab) = Tab::from_index(usize::from(n).wrapping_sub(1)) {
                state.console.select_tab(tab);
            }
        }
        KeyCode::Tab => state.console.focus_next(),
        KeyCode::BackTab => state.console.focus_prev(),
        KeyCode::PageUp => state.console.scroll_response(-PAGE_SCROLL),
        KeyCode::PageDown => state.console.scroll_response(PAGE_SCROLL),
        KeyCode::Enter => return submit_console(state),
        KeyCode::Left | KeyCode::Right if state.console.focus.is_selector() => {
            let forward = key.code == KeyCode::Right;
            match state.console.focus {
                ConsoleField::Subject => state.console.cycle_subject(forward),
                _ => state.console.cycle_difficulty(forward),
            }
        }
        KeyCode::Up if state.console.focus.is_selector() => state.console.scroll_response(-1),
        KeyCode::Down if state.console.focus.is_selector() => state.console.scroll_response(1),
        _ => {
            if let Some(input) = state.console.focused_input_mut() {
                edit_input(input, key);
            }
        }
    }
    vec![]
}

fn submit_console(state: &mut AppState) -> Vec<Action> {
    let tab = state.console.tab;
    if state.console.is_loading(tab) {
        return vec![];
    }
    let request = match state.console.build_request() {
        Ok(request) => request,
        Err(message) => {
            state.console.view_mut(tab).error = Some(message.to_string());
            return vec![];
        }
    };
    let Some(bearer) = state.session.bearer().cloned() else {
        return vec![];
    };
    let ticket = state.allocate_ticket(tab);
    state.console.begin(ticket, request.subject());
    state.console.view_mut(tab).error = None;
    debug!(tab = tab.slug(), id = ticket.id, "Submitting tutor request");
    vec![Action::Submit {
        ticket,
        bearer,
        request,
    }]
}

fn copy_response(state: &mut AppState) -> Vec<Action> {
    let Some(text) = state.console.active_view().response.clone() else {
        return vec![];
    };
    state.show_toast("Copied to clipboard!", ToastKind::Success);
    vec![Action::CopyToClipboard { text }]
}

fn logout(state: &mut AppState) -> Vec<Action> {
    match state.logout() {
        Ok(()) => state.show_toast("Logged out.", ToastKind::Info),
        Err(e) => {
            warn!(error = %e, "Could not remove stored token");
            state.show_toast(format!("Could not remove stored token: {}", e), ToastKind::Error);
        }
    }
    info!("Logged out");
    vec![Action::CancelRequests]
}

fn edit_input(input: &mut InputState, key: KeyEvent) {
    match key.code {
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                input.delete_word_back();
            } else {
                input.delete_back();
            }
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.delete_word_back();
        }
        KeyCode::Delete => input.delete_forward(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{
        Difficulty, EvaluationRequest, PracticeRequest, QuestionRequest, Subject, TutorRequest,
    };
    use crate::config::AppConfig;
    use crate::session::{Session, TokenStore};
    use tempfile::TempDir;

    fn test_state(dir: &TempDir) -> AppState {
        let store = TokenStore::new(dir.path().join("token"));
        let session = Session::restore(store).unwrap();
        AppState::new(AppConfig::default(), session)
    }

    fn logged_in_state(dir: &TempDir) -> AppState {
        let mut state = test_state(dir);
        state.complete_login("T1".to_string()).unwrap();
        state
    }

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        press_with(state, code, KeyModifiers::NONE)
    }

    fn press_with(state: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> Vec<Action> {
        handle_event(state, AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, modifiers))))
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    fn submit(state: &mut AppState) -> (Ticket, TutorRequest) {
        let mut actions = press(state, KeyCode::Enter);
        assert_eq!(actions.len(), 1);
        match actions.remove(0) {
            Action::Submit {
                ticket,
                bearer,
                request,
            } => {
                assert_eq!(bearer.as_str(), "T1");
                (ticket, request)
            }
            other => panic!("expected Submit, got {:?}", other),
        }
    }

    fn finish(state: &mut AppState, ticket: Ticket, result: Result<String, ApiError>) {
        handle_event(state, AppEvent::TutorFinished { ticket, result });
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn login_issues_request_and_stores_token() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        type_text(&mut state, "ali");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "secret");

        let actions = press(&mut state, KeyCode::Enter);
        assert!(matches!(
            actions.as_slice(),
            [Action::Login { username, password }] if username == "ali" && password == "secret"
        ));
        assert!(state.auth.submitting);

        handle_event(
            &mut state,
            AppEvent::LoginFinished {
                result: Ok("T1".to_string()),
            },
        );
        assert!(state.is_authenticated());
        assert_eq!(state.session.bearer().map(|b| b.as_str()), Some("T1"));
        assert_eq!(std::fs::read_to_string(dir.path().join("token")).unwrap(), "T1");
        assert!(!state.auth.submitting);
    }

    fn fill_login(state: &mut AppState, username: &str, password: &str) {
        type_text(state, username);
        press(state, KeyCode::Tab);
        type_text(state, password);
    }

    #[test]
    fn login_failure_shows_generic_message() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        fill_login(&mut state, "ali", "wrong");
        press(&mut state, KeyCode::Enter);
        handle_event(
            &mut state,
            AppEvent::LoginFinished {
                result: Err(ApiError::Unauthorized),
            },
        );
        assert!(!state.is_authenticated());
        assert_eq!(state.auth.error.as_deref(), Some("Invalid username or password"));
    }

    #[test]
    fn login_ignores_enter_while_submitting() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        fill_login(&mut state, "ali", "secret");
        assert_eq!(press(&mut state, KeyCode::Enter).len(), 1);
        assert!(press(&mut state, KeyCode::Enter).is_empty());
    }

    #[test]
    fn blank_login_fields_make_no_request() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(state.auth.error.as_deref(), Some("Please fill in all fields."));
        assert!(!state.auth.submitting);

        type_text(&mut state, "ali");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "   ");
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert!(!state.auth.submitting);
    }

    #[test]
    fn blank_register_fields_make_no_request() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        press(&mut state, KeyCode::F(2));
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(state.auth.error.as_deref(), Some("Please fill in all fields."));

        // Empty password and confirmation match, but are still rejected
        type_text(&mut state, "bob");
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(state.auth.error.as_deref(), Some("Please fill in all fields."));
        assert!(!state.auth.submitting);
    }

    #[test]
    fn register_mismatch_makes_no_request() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        press(&mut state, KeyCode::F(2));
        type_text(&mut state, "bob");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "pw1");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "pw2");

        let actions = press(&mut state, KeyCode::Enter);
        assert!(actions.is_empty());
        assert_eq!(state.auth.error.as_deref(), Some("Passwords don't match"));
        assert!(!state.auth.submitting);
    }

    #[test]
    fn register_matching_passwords_issues_request() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        press(&mut state, KeyCode::F(2));
        type_text(&mut state, "bob");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "pw");
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "pw");

        let actions = press(&mut state, KeyCode::Enter);
        assert!(matches!(
            actions.as_slice(),
            [Action::Register { username, password }] if username == "bob" && password == "pw"
        ));
    }

    #[test]
    fn register_created_switches_to_login() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        press(&mut state, KeyCode::F(2));
        handle_event(
            &mut state,
            AppEvent::RegisterFinished {
                result: Ok(RegisterOutcome::Created),
            },
        );
        assert_eq!(state.auth.tab, AuthTab::Login);
        assert_eq!(
            state.auth.success.as_deref(),
            Some("Registration successful! You can now log in.")
        );
        assert!(state.auth.error.is_none());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn register_failures_map_to_messages() {
        let cases: Vec<(Result<RegisterOutcome, ApiError>, &str)> = vec![
            (
                Ok(RegisterOutcome::UnexpectedStatus(200)),
                "Registration failed. Please try again.",
            ),
            (
                Err(ApiError::Status {
                    status: 422,
                    message: String::new(),
                }),
                "Invalid input. Please check your username and password.",
            ),
            (
                Err(ApiError::Status {
                    status: 400,
                    message: "exists".to_string(),
                }),
                "Registration failed. Username may already exist.",
            ),
            (
                Err(ApiError::Unauthorized),
                "Registration failed. Username may already exist.",
            ),
        ];
        for (result, expected) in cases {
            let dir = tempfile::tempdir().unwrap();
            let mut state = test_state(&dir);
            press(&mut state, KeyCode::F(2));
            handle_event(&mut state, AppEvent::RegisterFinished { result });
            assert_eq!(state.auth.tab, AuthTab::Register);
            assert_eq!(state.auth.error.as_deref(), Some(expected));
        }
    }

    #[test]
    fn ask_flow_shows_response_on_ask_tab_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "2+2?");

        let (ticket, request) = submit(&mut state);
        assert_eq!(
            request,
            TutorRequest::Ask(QuestionRequest {
                subject: Subject::Mathematics,
                question: "2+2?".to_string(),
            })
        );
        assert!(state.console.is_loading(Tab::Ask));

        finish(&mut state, ticket, Ok("4".to_string()));
        assert!(!state.console.is_loading(Tab::Ask));
        assert_eq!(state.console.view(Tab::Ask).response.as_deref(), Some("4"));
        assert!(state.console.view(Tab::Practice).response.is_none());
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.text, "Question answered successfully!");
        assert_eq!(toast.kind, ToastKind::Success);
    }

    #[test]
    fn practice_flow_sends_topic_and_difficulty() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        press(&mut state, KeyCode::F(3));
        assert_eq!(state.console.tab, Tab::Practice);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "kinematics");
        press(&mut state, KeyCode::Tab);
        press(&mut state, KeyCode::Right);

        let (ticket, request) = submit(&mut state);
        assert_eq!(
            request,
            TutorRequest::Practice(PracticeRequest {
                subject: Subject::Physics,
                topic: "kinematics".to_string(),
                difficulty: Difficulty::Hard,
            })
        );

        finish(&mut state, ticket, Ok("Q1...".to_string()));
        assert_eq!(
            state.console.view(Tab::Practice).response.as_deref(),
            Some("Q1...")
        );
        assert_eq!(
            state.toast.as_ref().map(|t| t.text.as_str()),
            Some("Practice questions generated successfully!")
        );
    }

    #[test]
    fn evaluate_flow_sends_question_and_answer() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        press(&mut state, KeyCode::F(4));
        assert_eq!(state.console.tab, Tab::Evaluate);
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "Balance H2 + O2");

        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(
            state.console.view(Tab::Evaluate).error.as_deref(),
            Some("Please enter your answer.")
        );

        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "2H2 + O2 -> 2H2O");
        let (ticket, request) = submit(&mut state);
        assert_eq!(
            request,
            TutorRequest::Evaluate(EvaluationRequest {
                subject: Subject::Chemistry,
                question: "Balance H2 + O2".to_string(),
                student_answer: "2H2 + O2 -> 2H2O".to_string(),
            })
        );
        assert!(state.console.view(Tab::Evaluate).error.is_none());

        finish(&mut state, ticket, Ok("Correct.".to_string()));
        assert_eq!(
            state.console.view(Tab::Evaluate).response.as_deref(),
            Some("Correct.")
        );
        assert_eq!(
            state.toast.as_ref().map(|t| t.text.as_str()),
            Some("Answer evaluated successfully!")
        );
    }

    #[test]
    fn validation_failure_makes_no_request() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(
            state.console.view(Tab::Ask).error.as_deref(),
            Some("Please select a subject.")
        );

        press(&mut state, KeyCode::Right);
        assert!(press(&mut state, KeyCode::Enter).is_empty());
        assert_eq!(
            state.console.view(Tab::Ask).error.as_deref(),
            Some("Please enter your question.")
        );
        assert!(state.toast.is_none());
    }

    #[test]
    fn submit_is_ignored_while_tab_is_loading() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        press(&mut state, KeyCode::F(2));
        press(&mut state, KeyCode::Right);
        let (ticket, _) = submit(&mut state);
        assert!(press(&mut state, KeyCode::Enter).is_empty());

        // Other tabs are independent
        press(&mut state, KeyCode::F(5));
        let (other, request) = submit(&mut state);
        assert_ne!(other, ticket);
        assert_eq!(
            request,
            TutorRequest::Syllabus {
                subject: Subject::Mathematics
            }
        );
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        press(&mut state, KeyCode::F(2));
        press(&mut state, KeyCode::Right);
        let (ticket, _) = submit(&mut state);

        let stale = Ticket {
            tab: Tab::StudyTips,
            id: ticket.id + 100,
        };
        finish(&mut state, stale, Ok("old".to_string()));
        assert!(state.console.is_loading(Tab::StudyTips));
        assert!(state.console.view(Tab::StudyTips).response.is_none());
        assert!(state.toast.is_none());
    }

    #[test]
    fn completion_after_logout_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Tab);
        type_text(&mut state, "why?");
        let (ticket, _) = submit(&mut state);

        let actions = press_with(&mut state, KeyCode::Char('o'), KeyModifiers::CONTROL);
        assert!(matches!(actions.as_slice(), [Action::CancelRequests]));
        assert!(!state.is_authenticated());
        assert!(!dir.path().join("token").exists());

        assert_eq!(state.toast.as_ref().map(|t| t.kind), Some(ToastKind::Info));

        finish(&mut state, ticket, Ok("late".to_string()));
        assert!(state.console.view(Tab::Ask).response.is_none());
        assert_eq!(state.toast.as_ref().map(|t| t.text.as_str()), Some("Logged out."));
    }

    #[test]
    fn status_line_tells_signed_out_from_fresh_start() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        assert_eq!(state.status_line(), "Sign in to continue");

        let mut state = logged_in_state(&dir);
        press_with(&mut state, KeyCode::Char('o'), KeyModifiers::CONTROL);
        assert_eq!(state.status_line(), "Signed out. Sign in to continue");

        press(&mut state, KeyCode::F(2));
        assert_eq!(state.status_line(), "Create an account");
    }

    #[test]
    fn failure_keeps_previous_response() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        press(&mut state, KeyCode::F(2));
        press(&mut state, KeyCode::Right);
        let (first, _) = submit(&mut state);
        finish(&mut state, first, Ok("tips".to_string()));

        let (second, _) = submit(&mut state);
        finish(&mut state, second, Err(server_error()));
        let view = state.console.view(Tab::StudyTips);
        assert_eq!(view.response.as_deref(), Some("tips"));
        assert_eq!(
            view.error.as_deref(),
            Some("Failed to get study tips. Please try again.")
        );
        let toast = state.toast.as_ref().unwrap();
        assert_eq!(toast.text, "Error: Failed to get study tips");
        assert_eq!(toast.kind, ToastKind::Error);

        let (third, _) = submit(&mut state);
        finish(&mut state, third, Ok("more tips".to_string()));
        assert!(state.console.view(Tab::StudyTips).error.is_none());
    }

    #[test]
    fn copy_emits_action_and_toast() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        assert!(press_with(&mut state, KeyCode::Char('y'), KeyModifiers::CONTROL).is_empty());

        state.console.view_mut(Tab::Ask).response = Some("4".to_string());
        let actions = press_with(&mut state, KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert!(matches!(actions.as_slice(), [Action::CopyToClipboard { text }] if text == "4"));
        assert_eq!(
            state.toast.as_ref().map(|t| t.text.as_str()),
            Some("Copied to clipboard!")
        );
    }

    #[test]
    fn switching_tabs_keeps_subject() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        press(&mut state, KeyCode::Right);
        press(&mut state, KeyCode::Right);
        press_with(&mut state, KeyCode::Right, KeyModifiers::CONTROL);
        assert_eq!(state.console.tab, Tab::StudyTips);
        assert_eq!(state.console.subject(), Some(Subject::Physics));
        press_with(&mut state, KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(state.console.tab, Tab::Ask);
    }

    #[test]
    fn transcripts_are_recorded_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        state.config.logging.transcripts = true;
        press(&mut state, KeyCode::F(5));
        press(&mut state, KeyCode::Right);
        let (ticket, _) = submit(&mut state);
        finish(&mut state, ticket, Ok("Unit 1".to_string()));
        assert_eq!(state.new_transcripts.len(), 1);
        assert_eq!(state.new_transcripts[0].tab, Tab::Syllabus);
        assert_eq!(state.new_transcripts[0].text, "Unit 1");
    }

    #[test]
    fn tick_expires_toast() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = logged_in_state(&dir);
        state.config.ui.toast_secs = 0;
        state.show_toast("hi", ToastKind::Info);
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.toast.is_none());
        assert_eq!(state.tick_count, 1);
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = test_state(&dir);
        assert!(matches!(press(&mut state, KeyCode::Esc).as_slice(), [Action::Quit]));
        assert!(matches!(
            press_with(&mut state, KeyCode::Char('c'), KeyModifiers::CONTROL).as_slice(),
            [Action::Quit]
        ));
    }
}
