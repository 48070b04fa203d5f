use async_trait::async_trait;
use bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use futures_util::TryStreamExt;
use mongodb::{
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    Client, Collection, Database, IndexModel,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::entities::order::{Contact, NewOrder, Order};
use crate::errors::StoreError;
use crate::repositories::OrderRepository;
use crate::utils::now;

const COLLECTION: &str = "orders";
const DEFAULT_DATABASE: &str = "test";
const DUPLICATE_KEY: i32 = 11000;

/// Stored shape of an order. Same field names as the wire format, plus the
/// storage `_id`, with timestamps kept as native BSON dates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    object_id: Option<ObjectId>,
    id: String,
    customer: String,
    products: Vec<String>,
    total: f64,
    status: String,
    contact: Contact,
    payment_status: String,
    order_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    razorpay_payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    razorpay_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    razorpay_signature: Option<String>,
    created_at: BsonDateTime,
    updated_at: BsonDateTime,
}

impl From<&Order> for OrderDocument {
    fn from(o: &Order) -> Self {
        Self {
            object_id: None,
            id: o.id.clone(),
            customer: o.customer.clone(),
            products: o.products.clone(),
            total: o.total,
            status: o.status.clone(),
            contact: o.contact.clone(),
            payment_status: o.payment_status.clone(),
            order_date: o.order_date.clone(),
            razorpay_payment_id: o.razorpay_payment_id.clone(),
            razorpay_order_id: o.razorpay_order_id.clone(),
            razorpay_signature: o.razorpay_signature.clone(),
            created_at: BsonDateTime::from_chrono(o.created_at),
            updated_at: BsonDateTime::from_chrono(o.updated_at),
        }
    }
}

impl From<OrderDocument> for Order {
    fn from(d: OrderDocument) -> Self {
        Self {
            id: d.id,
            customer: d.customer,
            products: d.products,
            total: d.total,
            status: d.status,
            contact: d.contact,
            payment_status: d.payment_status,
            order_date: d.order_date,
            razorpay_payment_id: d.razorpay_payment_id,
            razorpay_order_id: d.razorpay_order_id,
            razorpay_signature: d.razorpay_signature,
            created_at: d.created_at.to_chrono(),
            updated_at: d.updated_at.to_chrono(),
        }
    }
}

#[derive(Clone)]
pub struct MongoOrderRepository {
    db: Database,
    orders: Collection<OrderDocument>,
    // Set once the unique index on `id` exists; shared by clones.
    id_index: Arc<OnceCell<()>>,
}

impl MongoOrderRepository {
    /// Builds the client. This only parses the connection string and does
    /// not talk to the server; see [`MongoOrderRepository::init`].
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await.map_err(db_error)?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        let orders = db.collection(COLLECTION);
        Ok(Self {
            db,
            orders,
            id_index: Arc::new(OnceCell::new()),
        })
    }

    /// Round-trips to the server. Writes do not depend on this having run.
    pub async fn init(&self) -> Result<(), StoreError> {
        self.db
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(db_error)?;
        Ok(())
    }

    /// Creates the unique index on the business `id` before the first write.
    /// A failed attempt is retried by the next write.
    async fn ensure_id_index(&self) -> Result<(), StoreError> {
        self.id_index
            .get_or_try_init(|| async {
                let index = IndexModel::builder()
                    .keys(doc! { "id": 1 })
                    .options(IndexOptions::builder().unique(true).build())
                    .build();
                self.orders.create_index(index).await.map_err(db_error)?;
                tracing::info!("unique index on orders.id ensured");
                Ok::<(), StoreError>(())
            })
            .await?;
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    async fn list(&self) -> Result<Vec<Order>, StoreError> {
        let cursor = self
            .orders
            .find(doc! {})
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .await
            .map_err(db_error)?;
        let docs: Vec<OrderDocument> = cursor.try_collect().await.map_err(db_error)?;
        Ok(docs.into_iter().map(Order::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Order, StoreError> {
        self.orders
            .find_one(doc! { "id": id })
            .await
            .map_err(db_error)?
            .map(Order::from)
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, new: NewOrder) -> Result<Order, StoreError> {
        self.ensure_id_index().await?;
        let order = Order::new(new);
        match self.orders.insert_one(OrderDocument::from(&order)).await {
            Ok(_) => Ok(order),
            Err(e) if is_duplicate_key(&e) => Err(StoreError::Conflict { id: order.id }),
            Err(e) => Err(db_error(e)),
        }
    }

    async fn set_status(&self, id: &str, status: Option<String>) -> Result<Order, StoreError> {
        let mut set = doc! { "updatedAt": BsonDateTime::from_chrono(now()) };
        if let Some(status) = status {
            set.insert("status", status);
        }
        let update = doc! { "$set": set };
        self.orders
            .find_one_and_update(doc! { "id": id }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(db_error)?
            .map(Order::from)
            .ok_or(StoreError::NotFound)
    }

    async fn reset(&self, orders: Vec<NewOrder>) -> Result<usize, StoreError> {
        self.ensure_id_index().await?;
        let removed = self.orders.delete_many(doc! {}).await.map_err(db_error)?;
        tracing::debug!(removed = removed.deleted_count, "cleared orders collection");
        if orders.is_empty() {
            return Ok(0);
        }
        let at = now();
        let docs: Vec<OrderDocument> = orders
            .into_iter()
            .map(|n| OrderDocument::from(&Order::stamped(n, at)))
            .collect();
        let inserted = self.orders.insert_many(docs).await.map_err(db_error)?;
        Ok(inserted.inserted_ids.len())
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == DUPLICATE_KEY
    )
}

fn db_error(err: MongoError) -> StoreError {
    StoreError::Database(err.to_string())
}
