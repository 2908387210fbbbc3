use crate::api::types::TutorRequest;
use crate::app::state::Ticket;
use crate::session::Bearer;

/// Side effects requested by the handler, executed by the main loop.
#[derive(Debug)]
pub enum Action {
    Login { username: String, password: String },
    Register { username: String, password: String },
    Submit { ticket: Ticket, bearer: Bearer, request: TutorRequest },
    /// Abort every in-flight request (logout).
    CancelRequests,
    CopyToClipboard { text: String },
    Quit,
}
