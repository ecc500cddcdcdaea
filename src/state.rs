use crate::clock::Clock;
use crate::models::WeekWindow;
use crate::records::RecordSource;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state. The current window is replaced wholesale on
/// every navigation, never edited in place.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn RecordSource>,
    pub clock: Arc<dyn Clock>,
    pub current: Arc<Mutex<Option<WeekWindow>>>,
}

impl AppState {
    pub fn new(source: Arc<dyn RecordSource>, clock: Arc<dyn Clock>) -> Self {
        Self {
            source,
            clock,
            current: Arc::new(Mutex::new(None)),
        }
    }
}
