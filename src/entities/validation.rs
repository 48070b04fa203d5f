use serde::Deserialize;

use crate::entities::order::{Contact, NewOrder};
use crate::errors::ValidationError;

/// Request body for order creation. Every field is optional here so that
/// presence is checked by [`validate`] rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub id: Option<String>,
    pub customer: Option<String>,
    pub products: Option<Vec<String>>,
    pub total: Option<f64>,
    pub status: Option<String>,
    pub contact: Option<ContactDraft>,
    pub payment_status: Option<String>,
    pub order_date: Option<String>,
    pub razorpay_payment_id: Option<String>,
    pub razorpay_order_id: Option<String>,
    pub razorpay_signature: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactDraft {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Checks that every required field is present. Strings must also be
/// non-empty. No cross-field rules apply: `total` is not checked against
/// `products` and `status` may be any string.
pub fn validate(draft: OrderDraft) -> Result<NewOrder, ValidationError> {
    let mut missing = Vec::new();

    let id = required(draft.id, "id", &mut missing);
    let customer = required(draft.customer, "customer", &mut missing);
    let products = draft.products;
    if products.is_none() {
        missing.push("products");
    }
    let total = draft.total;
    if total.is_none() {
        missing.push("total");
    }
    let status = required(draft.status, "status", &mut missing);
    let contact = draft.contact.unwrap_or_default();
    let email = required(contact.email, "contact.email", &mut missing);
    let phone = required(contact.phone, "contact.phone", &mut missing);
    let address = required(contact.address, "contact.address", &mut missing);
    let payment_status = required(draft.payment_status, "paymentStatus", &mut missing);
    let order_date = required(draft.order_date, "orderDate", &mut missing);

    match (
        id,
        customer,
        products,
        total,
        status,
        email,
        phone,
        address,
        payment_status,
        order_date,
    ) {
        (
            Some(id),
            Some(customer),
            Some(products),
            Some(total),
            Some(status),
            Some(email),
            Some(phone),
            Some(address),
            Some(payment_status),
            Some(order_date),
        ) => Ok(NewOrder {
            id,
            customer,
            products,
            total,
            status,
            contact: Contact {
                email,
                phone,
                address,
            },
            payment_status,
            order_date,
            razorpay_payment_id: draft.razorpay_payment_id,
            razorpay_order_id: draft.razorpay_order_id,
            razorpay_signature: draft.razorpay_signature,
        }),
        _ => Err(ValidationError::MissingFields(missing)),
    }
}

fn required(
    value: Option<String>,
    name: &'static str,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(v) if !v.is_empty() => Some(v),
        _ => {
            missing.push(name);
            None
        }
    }
}
