use crate::entities::order::{NewOrder, Order};
use crate::errors::StoreError;
use crate::repositories::OrderRepository;
use crate::utils::now;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local store. Keeps insertion order so that orders created within
/// the same millisecond still list newest first.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    inner: Arc<RwLock<Vec<Order>>>,
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let items = self.inner.read().await;
        let mut out: Vec<Order> = items.iter().rev().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn get_by_id(&self, id: &str) -> Result<Order, StoreError> {
        let items = self.inner.read().await;
        items
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, new: NewOrder) -> Result<Order, StoreError> {
        let mut items = self.inner.write().await;
        if items.iter().any(|o| o.id == new.id) {
            return Err(StoreError::Conflict { id: new.id });
        }
        let order = Order::new(new);
        items.push(order.clone());
        Ok(order)
    }

    async fn set_status(&self, id: &str, status: Option<String>) -> Result<Order, StoreError> {
        let mut items = self.inner.write().await;
        let o = items
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(StoreError::NotFound)?;
        match status {
            Some(status) => o.set_status(status),
            None => o.touch(),
        }
        Ok(o.clone())
    }

    async fn reset(&self, orders: Vec<NewOrder>) -> Result<usize, StoreError> {
        let mut items = self.inner.write().await;
        items.clear();
        let at = now();
        items.extend(orders.into_iter().map(|n| Order::stamped(n, at)));
        Ok(items.len())
    }
}
