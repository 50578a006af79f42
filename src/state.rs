use crate::widgets::DemoState;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub demo: Arc<Mutex<DemoState>>,
}

impl AppState {
    pub fn new(demo: DemoState) -> Self {
        Self {
            demo: Arc::new(Mutex::new(demo)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DemoState::default())
    }
}
