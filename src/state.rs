//! Shared application state for all routes. Assembled once at startup.

use crate::service::CustomerService;
use crate::store::CustomerStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub customers: Arc<CustomerService>,
}

impl AppState {
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        AppState {
            customers: Arc::new(CustomerService::new(store)),
        }
    }
}
