pub mod in_memory;
pub mod mongo;
pub mod unavailable;

use async_trait::async_trait;

use crate::{
    entities::order::{NewOrder, Order},
    errors::StoreError,
};

/// Persistence for orders, keyed by the business `id` rather than any
/// storage-assigned identity.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// All orders, newest `created_at` first. Unpaginated.
    async fn list(&self) -> Result<Vec<Order>, StoreError>;
    async fn get_by_id(&self, id: &str) -> Result<Order, StoreError>;
    /// Fails with [`StoreError::Conflict`] if `id` is taken; the stored
    /// record is left untouched in that case.
    async fn create(&self, new: NewOrder) -> Result<Order, StoreError>;
    /// Replaces `status` only. Any string is accepted; `None` keeps the
    /// current status and just refreshes `updated_at`.
    async fn set_status(&self, id: &str, status: Option<String>) -> Result<Order, StoreError>;
    /// Drops every order, then stores `orders`. Returns how many were stored.
    async fn reset(&self, orders: Vec<NewOrder>) -> Result<usize, StoreError>;
}
