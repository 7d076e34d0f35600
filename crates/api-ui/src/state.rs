use core_explorer::ExplorerService;
use std::sync::Arc;

// Shared services handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub explorer_svc: Arc<dyn ExplorerService>,
}

impl AppState {
    pub fn new(explorer_svc: Arc<dyn ExplorerService>) -> Self {
        Self { explorer_svc }
    }

    #[must_use]
    pub fn database_name(&self) -> String {
        self.explorer_svc.database_name().to_string()
    }
}
