//! Application state for the payroll engine API.

use std::sync::Arc;

use crate::config::PayrollConfig;
use crate::service::PayrollService;
use crate::store::LedgerStore;

/// Shared application state.
///
/// Holds the payroll service, which is shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    service: PayrollService,
}

impl AppState {
    /// Creates application state over the given store and configuration.
    pub fn new(store: Arc<dyn LedgerStore>, config: PayrollConfig) -> Self {
        Self {
            service: PayrollService::new(store, config),
        }
    }

    /// Returns the payroll service.
    pub fn service(&self) -> &PayrollService {
        &self.service
    }
}
