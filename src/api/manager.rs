use crate::api::client::TutorClient;
use crate::api::types::TutorRequest;
use crate::app::event::AppEvent;
use crate::app::state::Ticket;
use crate::app::tab::Tab;
use crate::session::Bearer;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

/// Runs API calls on background tasks and reports completions as
/// [`AppEvent`]s. At most one tutoring call per tab is kept alive.
pub struct RequestManager {
    client: Arc<TutorClient>,
    in_flight: HashMap<Tab, AbortHandle>,
    auth: Option<AbortHandle>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl RequestManager {
    pub fn new(client: TutorClient, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            client: Arc::new(client),
            in_flight: HashMap::new(),
            auth: None,
            event_tx,
        }
    }

    pub fn login(&mut self, username: String, password: String) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            let result = client.login(&username, &password).await;
            let _ = tx.send(AppEvent::LoginFinished { result });
        });
        self.replace_auth(handle.abort_handle());
    }

    pub fn register(&mut self, username: String, password: String) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            let result = client.register(&username, &password).await;
            let _ = tx.send(AppEvent::RegisterFinished { result });
        });
        self.replace_auth(handle.abort_handle());
    }

    /// Start a tutoring call. A call still running for the same tab is
    /// aborted; its ticket is already stale.
    pub fn submit(&mut self, ticket: Ticket, bearer: Bearer, request: TutorRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            let result = client.run(&bearer, &request).await;
            let _ = tx.send(AppEvent::TutorFinished { ticket, result });
        });
        if let Some(previous) = self.in_flight.insert(ticket.tab, handle.abort_handle()) {
            previous.abort();
        }
    }

    /// Abort every running call. Aborted calls never report back.
    pub fn cancel_all(&mut self) {
        let count = self.in_flight.len();
        for (_, handle) in self.in_flight.drain() {
            handle.abort();
        }
        if let Some(handle) = self.auth.take() {
            handle.abort();
        }
        debug!(count, "Cancelled in-flight requests");
    }

    fn replace_auth(&mut self, handle: AbortHandle) {
        if let Some(previous) = self.auth.replace(handle) {
            previous.abort();
        }
    }
}
