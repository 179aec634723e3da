use std::sync::Arc;

use tokio::sync::Mutex;

use crate::export::Exporter;
use crate::session::Session;
use crate::storage::ResumeRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one editing session. Handlers hold the lock only for the duration
    /// of a synchronous update, never across storage or export awaits.
    pub session: Arc<Mutex<Session>>,
    pub repository: ResumeRepository,
    pub exporter: Arc<Exporter>,
}

impl AppState {
    pub fn new(
        session: Session,
        repository: ResumeRepository,
        exporter: Exporter,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            repository,
            exporter: Arc::new(exporter),
        }
    }
}
