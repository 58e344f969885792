use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppState {
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
