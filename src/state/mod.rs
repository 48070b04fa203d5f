use crate::repositories::OrderRepository;
use actix_web::web::Data;
use std::sync::Arc;

/// Shared by every worker; the store is chosen once at startup.
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn new<R: OrderRepository + 'static>(orders: R) -> Data<Self> {
        Self::with_store(Arc::new(orders))
    }

    pub fn with_store(orders: Arc<dyn OrderRepository>) -> Data<Self> {
        Data::new(Self { orders })
    }
}
