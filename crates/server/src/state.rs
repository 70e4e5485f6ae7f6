use std::sync::Arc;

use service::data_processor::{DataProcessorRepository, DataProcessorService};

/// Shared handler state. Cloned per request; the repository behind it is shared.
#[derive(Clone)]
pub struct AppState {
    pub data_processors: DataProcessorService<dyn DataProcessorRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn DataProcessorRepository>) -> Self {
        Self { data_processors: DataProcessorService::new(repo) }
    }
}
