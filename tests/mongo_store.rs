//! Store tests against a real MongoDB.
//!
//! They wipe the `orders` collection, so point `MONGO_URI` at a disposable
//! database and run with:
//!
//!   MONGO_URI=mongodb://localhost:27017/xefag_test \
//!     cargo test --test mongo_store -- --include-ignored --test-threads=1

use xefag_backend::{
    entities::{
        order::{Contact, NewOrder},
        seed::sample_orders,
    },
    errors::StoreError,
    repositories::{mongo::MongoOrderRepository, OrderRepository},
};

async fn fresh_repo() -> MongoOrderRepository {
    let uri = std::env::var("MONGO_URI").expect("MONGO_URI must be set for mongo tests");
    let repo = MongoOrderRepository::connect(&uri).await.unwrap();
    repo.init().await.unwrap();
    repo.reset(vec![]).await.unwrap();
    repo
}

fn new_order(id: &str) -> NewOrder {
    NewOrder {
        id: id.to_string(),
        customer: "A".into(),
        products: vec!["X".into()],
        total: 100.0,
        status: "Confirmed".into(),
        contact: Contact {
            email: "a@a.com".into(),
            phone: "1".into(),
            address: "addr".into(),
        },
        payment_status: "Paid".into(),
        order_date: "2024-01-01".into(),
        razorpay_payment_id: None,
        razorpay_order_id: Some("order_1".into()),
        razorpay_signature: None,
    }
}

#[tokio::test]
#[ignore]
async fn create_get_and_conflict() {
    let repo = fresh_repo().await;

    let created = repo.create(new_order("XEF001")).await.unwrap();
    let fetched = repo.get_by_id("XEF001").await.unwrap();
    assert_eq!(created, fetched);

    let mut dup = new_order("XEF001");
    dup.customer = "B".into();
    let err = repo.create(dup).await.unwrap_err();
    assert!(matches!(err, StoreError::Conflict { .. }));
    assert_eq!(repo.get_by_id("XEF001").await.unwrap().customer, "A");
}

#[tokio::test]
#[ignore]
async fn unique_id_holds_without_init() {
    let uri = std::env::var("MONGO_URI").expect("MONGO_URI must be set for mongo tests");
    let client = mongodb::Client::with_uri_str(&uri).await.unwrap();
    let db = client
        .default_database()
        .unwrap_or_else(|| client.database("test"));
    // Dropping the collection drops its indexes too.
    db.collection::<bson::Document>("orders").drop().await.unwrap();

    // A fresh client whose startup ping never ran.
    let repo = MongoOrderRepository::connect(&uri).await.unwrap();
    repo.create(new_order("XEF001")).await.unwrap();
    let err = repo.create(new_order("XEF001")).await.unwrap_err();
    assert!(matches!(err, StoreError::Conflict { ref id } if id == "XEF001"));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn set_status_and_missing_ids() {
    let repo = fresh_repo().await;
    let before = repo.create(new_order("XEF001")).await.unwrap();

    let after = repo.set_status("XEF001", Some("Shipped".into())).await.unwrap();
    assert_eq!(after.status, "Shipped");
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.products, before.products);
    assert_eq!(after.razorpay_order_id, before.razorpay_order_id);

    let untouched = repo.set_status("XEF001", None).await.unwrap();
    assert_eq!(untouched.status, "Shipped");
    assert!(untouched.updated_at >= after.updated_at);

    assert!(matches!(
        repo.set_status("NOPE", Some("Shipped".into())).await.unwrap_err(),
        StoreError::NotFound
    ));
    assert!(matches!(
        repo.get_by_id("NOPE").await.unwrap_err(),
        StoreError::NotFound
    ));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
#[ignore]
async fn list_order_and_reset() {
    let repo = fresh_repo().await;
    for id in ["XEF001", "XEF002", "XEF003"] {
        repo.create(new_order(id)).await.unwrap();
    }
    let ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|o| o.id).collect();
    assert_eq!(ids, vec!["XEF003", "XEF002", "XEF001"]);

    assert_eq!(repo.reset(sample_orders()).await.unwrap(), 2);
    let mut ids: Vec<String> = repo.list().await.unwrap().into_iter().map(|o| o.id).collect();
    ids.sort();
    assert_eq!(ids, vec!["XEF123456", "XEF789012"]);
}
