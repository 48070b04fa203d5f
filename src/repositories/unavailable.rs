use async_trait::async_trait;

use crate::entities::order::{NewOrder, Order};
use crate::errors::StoreError;
use crate::repositories::OrderRepository;

/// Stand-in used when no database client could be built at startup. The
/// server keeps serving; every store call fails with the startup cause.
#[derive(Debug, Clone)]
pub struct UnavailableOrderRepository {
    reason: String,
}

impl UnavailableOrderRepository {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, StoreError> {
        Err(StoreError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl OrderRepository for UnavailableOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        self.fail()
    }

    async fn get_by_id(&self, _id: &str) -> Result<Order, StoreError> {
        self.fail()
    }

    async fn create(&self, _new: NewOrder) -> Result<Order, StoreError> {
        self.fail()
    }

    async fn set_status(&self, _id: &str, _status: Option<String>) -> Result<Order, StoreError> {
        self.fail()
    }

    async fn reset(&self, _orders: Vec<NewOrder>) -> Result<usize, StoreError> {
        self.fail()
    }
}
