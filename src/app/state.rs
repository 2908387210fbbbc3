use crate::api::types::{
    Difficulty, EvaluationRequest, PracticeRequest, QuestionRequest, Subject, TutorRequest,
};
use crate::app::tab::Tab;
use crate::config::AppConfig;
use crate::session::{Session, SessionError, SessionState};
use chrono::{DateTime, Local};
use std::cell::Cell;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

pub type TicketId = u64;

/// Identifies one issued tutoring request. Only the latest ticket per tab is
/// accepted when its completion arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket {
    pub tab: Tab,
    pub id: TicketId,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Display width of the text before the cursor.
    pub fn cursor_width(&self) -> usize {
        self.text[..self.cursor].width()
    }

    /// Number of characters before the cursor (masked fields render one
    /// bullet per character).
    pub fn cursor_chars(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Username,
    Password,
    ConfirmPassword,
}

/// Login/register form shown while logged out.
#[derive(Debug)]
pub struct AuthForm {
    pub tab: AuthTab,
    pub focus: AuthField,
    pub username: InputState,
    pub password: InputState,
    pub confirm_password: InputState,
    pub error: Option<String>,
    pub success: Option<String>,
    /// A credential request is in flight.
    pub submitting: bool,
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            tab: AuthTab::Login,
            focus: AuthField::Username,
            username: InputState::new(),
            password: InputState::new(),
            confirm_password: InputState::new(),
            error: None,
            success: None,
            submitting: false,
        }
    }

    /// Toggle Login/Register. Clears both messages; session state is untouched.
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.error = None;
        self.success = None;
        if !self.fields().contains(&self.focus) {
            self.focus = AuthField::Username;
        }
    }

    pub fn fields(&self) -> &'static [AuthField] {
        match self.tab {
            AuthTab::Login => &[AuthField::Username, AuthField::Password],
            AuthTab::Register => &[
                AuthField::Username,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle(self.fields(), self.focus, true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = cycle(self.fields(), self.focus, false);
    }

    pub fn input(&self, field: AuthField) -> &InputState {
        match field {
            AuthField::Username => &self.username,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut InputState {
        match self.focus {
            AuthField::Username => &mut self.username,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleField {
    Subject,
    Question,
    Topic,
    Difficulty,
    StudentAnswer,
}

impl ConsoleField {
    pub fn label(&self) -> &'static str {
        match self {
            ConsoleField::Subject => "Subject",
            ConsoleField::Question => "Your Question",
            ConsoleField::Topic => "Topic",
            ConsoleField::Difficulty => "Difficulty",
            ConsoleField::StudentAnswer => "Your Answer",
        }
    }

    pub fn is_selector(&self) -> bool {
        matches!(self, ConsoleField::Subject | ConsoleField::Difficulty)
    }
}

/// Per-tab output: the last response and the last error.
#[derive(Debug, Default)]
pub struct TabView {
    pub response: Option<String>,
    pub error: Option<String>,
    pub scroll: u16,
    /// Largest useful scroll offset, recorded by the last render.
    pub max_scroll: Cell<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: TicketId,
    pub subject: Subject,
}

/// Dashboard view-model. The subject is shared by every tab and has exactly
/// one writer, [`ConsoleModel::set_subject`].
#[derive(Debug)]
pub struct ConsoleModel {
    subject: Option<Subject>,
    pub tab: Tab,
    pub focus: ConsoleField,
    pub question: InputState,
    pub topic: InputState,
    pub difficulty: Difficulty,
    pub student_answer: InputState,
    views: HashMap<Tab, TabView>,
    pending: HashMap<Tab, PendingRequest>,
}

impl ConsoleModel {
    pub fn new() -> Self {
        Self {
            subject: None,
            tab: Tab::Ask,
            focus: ConsoleField::Subject,
            question: InputState::new(),
            topic: InputState::new(),
            difficulty: Difficulty::default(),
            student_answer: InputState::new(),
            views: Tab::ALL.iter().map(|t| (*t, TabView::default())).collect(),
            pending: HashMap::new(),
        }
    }

    pub fn subject(&self) -> Option<Subject> {
        self.subject
    }

    pub fn set_subject(&mut self, subject: Subject) {
        self.subject = Some(subject);
    }

    pub fn cycle_subject(&mut self, forward: bool) {
        let next = match self.subject {
            None if forward => Subject::ALL[0],
            None => Subject::ALL[Subject::ALL.len() - 1],
            Some(current) => cycle(&Subject::ALL, current, forward),
        };
        self.set_subject(next);
    }

    pub fn cycle_difficulty(&mut self, forward: bool) {
        self.difficulty = cycle(&Difficulty::ALL, self.difficulty, forward);
    }

    /// Switch tabs. Transient inputs belong to the view being left and are
    /// discarded; the subject, responses and in-flight requests survive.
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.tab {
            return;
        }
        self.question.clear();
        self.topic.clear();
        self.student_answer.clear();
        self.difficulty = Difficulty::default();
        self.tab = tab;
        self.focus = ConsoleField::Subject;
    }

    pub fn fields(&self) -> &'static [ConsoleField] {
        match self.tab {
            Tab::Ask => &[ConsoleField::Subject, ConsoleField::Question],
            Tab::StudyTips | Tab::Syllabus => &[ConsoleField::Subject],
            Tab::Practice => &[
                ConsoleField::Subject,
                ConsoleField::Topic,
                ConsoleField::Difficulty,
            ],
            Tab::Evaluate => &[
                ConsoleField::Subject,
                ConsoleField::Question,
                ConsoleField::StudentAnswer,
            ],
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle(self.fields(), self.focus, true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = cycle(self.fields(), self.focus, false);
    }

    /// Text input behind `field`, or `None` for selectors.
    pub fn input(&self, field: ConsoleField) -> Option<&InputState> {
        match field {
            ConsoleField::Question => Some(&self.question),
            ConsoleField::Topic => Some(&self.topic),
            ConsoleField::StudentAnswer => Some(&self.student_answer),
            ConsoleField::Subject | ConsoleField::Difficulty => None,
        }
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut InputState> {
        match self.focus {
            ConsoleField::Question => Some(&mut self.question),
            ConsoleField::Topic => Some(&mut self.topic),
            ConsoleField::StudentAnswer => Some(&mut self.student_answer),
            ConsoleField::Subject | ConsoleField::Difficulty => None,
        }
    }

    pub fn view(&self, tab: Tab) -> &TabView {
        // Every tab is inserted in `new`.
        &self.views[&tab]
    }

    pub fn view_mut(&mut self, tab: Tab) -> &mut TabView {
        self.views.entry(tab).or_default()
    }

    pub fn active_view(&self) -> &TabView {
        self.view(self.tab)
    }

    pub fn is_loading(&self, tab: Tab) -> bool {
        self.pending.contains_key(&tab)
    }

    pub fn any_loading(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Check required fields for the active tab and build its request.
    /// Only presence is checked.
    pub fn build_request(&self) -> Result<TutorRequest, &'static str> {
        let subject = self.subject.ok_or("Please select a subject.")?;
        match self.tab {
            Tab::Ask => {
                if self.question.is_blank() {
                    return Err("Please enter your question.");
                }
                Ok(TutorRequest::Ask(QuestionRequest {
                    subject,
                    question: self.question.text.clone(),
                }))
            }
            Tab::StudyTips => Ok(TutorRequest::StudyTips { subject }),
            Tab::Practice => {
                if self.topic.is_blank() {
                    return Err("Please enter a topic.");
                }
                Ok(TutorRequest::Practice(PracticeRequest {
                    subject,
                    topic: self.topic.text.clone(),
                    difficulty: self.difficulty,
                }))
            }
            Tab::Evaluate => {
                if self.question.is_blank() {
                    return Err("Please enter your question.");
                }
                if self.student_answer.is_blank() {
                    return Err("Please enter your answer.");
                }
                Ok(TutorRequest::Evaluate(EvaluationRequest {
                    subject,
                    question: self.question.text.clone(),
                    student_answer: self.student_answer.text.clone(),
                }))
            }
            Tab::Syllabus => Ok(TutorRequest::Syllabus { subject }),
        }
    }

    /// Record `ticket` as the latest request for its tab.
    pub fn begin(&mut self, ticket: Ticket, subject: Subject) {
        self.pending.insert(
            ticket.tab,
            PendingRequest {
                id: ticket.id,
                subject,
            },
        );
    }

    /// Resolve `ticket`. Returns the pending record if it was the latest for
    /// its tab; a stale or unknown ticket returns `None` and changes nothing.
    pub fn finish(&mut self, ticket: Ticket) -> Option<PendingRequest> {
        match self.pending.get(&ticket.tab) {
            Some(p) if p.id == ticket.id => self.pending.remove(&ticket.tab),
            _ => None,
        }
    }

    pub fn scroll_response(&mut self, delta: i32) {
        let tab = self.tab;
        let view = self.view_mut(tab);
        let max = view.max_scroll.get();
        view.scroll = if delta < 0 {
            view.scroll.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            view.scroll.saturating_add(delta as u16)
        }
        .min(max);
    }
}

fn cycle<T: Copy + PartialEq>(items: &[T], current: T, forward: bool) -> T {
    let idx = items.iter().position(|i| *i == current).unwrap_or(0);
    let len = items.len();
    if forward {
        items[(idx + 1) % len]
    } else {
        items[(idx + len - 1) % len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    pub expires_at: Instant,
}

/// A successful tutor response waiting to be written to the transcript log.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub timestamp: DateTime<Local>,
    pub tab: Tab,
    pub subject: Subject,
    pub text: String,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub auth: AuthForm,
    pub console: ConsoleModel,
    pub toast: Option<Toast>,
    pub new_transcripts: Vec<TranscriptEntry>,
    pub next_ticket_id: TicketId,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, session: Session) -> Self {
        Self {
            config,
            session,
            auth: AuthForm::new(),
            console: ConsoleModel::new(),
            toast: None,
            new_transcripts: Vec::new(),
            next_ticket_id: 0,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    /// Session gate: the dashboard is shown exactly when a token is held.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn allocate_ticket(&mut self, tab: Tab) -> Ticket {
        let id = self.next_ticket_id;
        self.next_ticket_id += 1;
        Ticket { tab, id }
    }

    pub fn show_toast(&mut self, text: impl Into<String>, kind: ToastKind) {
        let ttl = Duration::from_secs(self.config.ui.toast_secs);
        self.toast = Some(Toast {
            text: text.into(),
            kind,
            expires_at: Instant::now() + ttl,
        });
        self.dirty = true;
    }

    /// Drop the toast once it has expired. Returns true if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
            self.dirty = true;
            return true;
        }
        false
    }

    /// Store the issued token and mount a fresh dashboard.
    pub fn complete_login(&mut self, token: String) -> Result<(), SessionError> {
        self.session.establish(token)?;
        self.auth = AuthForm::new();
        self.console = ConsoleModel::new();
        self.dirty = true;
        Ok(())
    }

    /// Clear the token and discard all dashboard state, including pending
    /// tickets so late completions are dropped.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.console = ConsoleModel::new();
        self.auth = AuthForm::new();
        self.toast = None;
        self.dirty = true;
        self.session.clear()
    }

    pub fn record_transcript(&mut self, tab: Tab, subject: Subject, text: &str) {
        self.new_transcripts.push(TranscriptEntry {
            timestamp: Local::now(),
            tab,
            subject,
            text: text.to_string(),
        });
    }

    pub fn status_line(&self) -> String {
        if !self.is_authenticated() {
            return match self.auth.tab {
                AuthTab::Login if matches!(self.session.state(), SessionState::Cleared) => {
                    "Signed out. Sign in to continue".to_string()
                }
                AuthTab::Login => "Sign in to continue".to_string(),
                AuthTab::Register => "Create an account".to_string(),
            };
        }
        let subject = self
            .console
            .subject()
            .map(|s| s.label())
            .unwrap_or("no subject");
        let mut s = format!("{} | {}", self.console.tab.label(), subject);
        if self.console.any_loading() {
            s.push_str(" | working...");
        }
        s
    }
}
