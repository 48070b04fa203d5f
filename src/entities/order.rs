use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::{now, rfc3339_millis};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: String,
    pub products: Vec<String>,
    pub total: f64,
    pub status: String,
    pub contact: Contact,
    pub payment_status: String,
    pub order_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razorpay_payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razorpay_order_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razorpay_signature: Option<String>,
    #[serde(with = "rfc3339_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "rfc3339_millis")]
    pub updated_at: DateTime<Utc>,
}

/// A validated order that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub id: String,
    pub customer: String,
    pub products: Vec<String>,
    pub total: f64,
    pub status: String,
    pub contact: Contact,
    pub payment_status: String,
    pub order_date: String,
    pub razorpay_payment_id: Option<String>,
    pub razorpay_order_id: Option<String>,
    pub razorpay_signature: Option<String>,
}

impl Order {
    pub fn new(new: NewOrder) -> Self {
        Self::stamped(new, now())
    }

    pub fn stamped(new: NewOrder, at: DateTime<Utc>) -> Self {
        Self {
            id: new.id,
            customer: new.customer,
            products: new.products,
            total: new.total,
            status: new.status,
            contact: new.contact,
            payment_status: new.payment_status,
            order_date: new.order_date,
            razorpay_payment_id: new.razorpay_payment_id,
            razorpay_order_id: new.razorpay_order_id,
            razorpay_signature: new.razorpay_signature,
            created_at: at,
            updated_at: at,
        }
    }

    pub fn set_status(&mut self, status: String) {
        self.status = status;
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = now();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn sample_new_order(id: &str) -> NewOrder {
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
            razorpay_order_id: None,
            razorpay_signature: None,
        }
    }

    #[test]
    fn order_new_stamps_both_timestamps() {
        let o = Order::new(sample_new_order("XEF001"));
        assert_eq!(o.id, "XEF001");
        assert_eq!(o.status, "Confirmed");
        assert_eq!(o.created_at, o.updated_at);
    }

    #[test]
    fn set_status_only_touches_status_and_updated_at() {
        let before = Order::stamped(
            sample_new_order("XEF001"),
            "2024-01-01T00:00:00Z".parse().unwrap(),
        );
        let mut after = before.clone();
        after.set_status("Shipped".into());

        assert_eq!(after.status, "Shipped");
        assert!(after.updated_at > before.updated_at);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(
            Order {
                status: before.status.clone(),
                updated_at: before.updated_at,
                ..after
            },
            before
        );
    }

    #[test]
    fn order_serializes_with_camel_case_names() {
        let o = Order::stamped(
            sample_new_order("XEF001"),
            "2024-01-01T00:00:00.250Z".parse().unwrap(),
        );
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(v["paymentStatus"], json!("Paid"));
        assert_eq!(v["orderDate"], json!("2024-01-01"));
        assert_eq!(v["contact"]["email"], json!("a@a.com"));
        assert_eq!(v["createdAt"], json!("2024-01-01T00:00:00.250Z"));
        assert!(v.get("razorpayPaymentId").is_none());
        assert!(v.get("_id").is_none());
    }

    #[test]
    fn whole_second_timestamps_serialize_with_millis() {
        let o = Order::stamped(
            sample_new_order("XEF001"),
            "2024-01-01T00:00:00Z".parse().unwrap(),
        );
        let v = serde_json::to_value(&o).unwrap();
        assert_eq!(v["createdAt"], json!("2024-01-01T00:00:00.000Z"));
        assert_eq!(v["updatedAt"], json!("2024-01-01T00:00:00.000Z"));

        let back: Order = serde_json::from_value(v).unwrap();
        assert_eq!(back, o);
    }

    #[test]
    fn optional_payment_fields_are_emitted_when_present() {
        let mut new = sample_new_order("XEF002");
        new.razorpay_order_id = Some("order_123".into());
        let v = serde_json::to_value(Order::new(new)).unwrap();
        assert_eq!(v["razorpayOrderId"], json!("order_123"));
        assert!(v.get("razorpaySignature").is_none());
    }
}
