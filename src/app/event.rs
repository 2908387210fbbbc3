use crate::api::error::ApiError;
use crate::api::types::RegisterOutcome;
use crate::app::state::Ticket;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// `/token` call finished; `Ok` carries the access token.
    LoginFinished { result: Result<String, ApiError> },

    /// `/users` call finished.
    RegisterFinished {
        result: Result<RegisterOutcome, ApiError>,
    },

    /// A tutoring call finished; `Ok` carries the response text.
    TutorFinished {
        ticket: Ticket,
        result: Result<String, ApiError>,
    },

    /// Tick for UI refresh
    Tick,
}
