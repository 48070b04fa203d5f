use crate::entities::order::{Contact, NewOrder};

/// Fixed demo records written by the seed route. Not for production data.
pub fn sample_orders() -> Vec<NewOrder> {
    vec![
        NewOrder {
            id: "XEF123456".into(),
            customer: "John Doe".into(),
            products: vec!["VELAR x 2".into()],
            total: 410.0,
            status: "Processing".into(),
            contact: Contact {
                email: "john.doe@example.com".into(),
                phone: "123-456-7890".into(),
                address: "123 Main St, Anytown, USA".into(),
            },
            payment_status: "Pending".into(),
            order_date: "2023-10-26".into(),
            razorpay_payment_id: None,
            razorpay_order_id: None,
            razorpay_signature: None,
        },
        NewOrder {
            id: "XEF789012".into(),
            customer: "Jane Smith".into(),
            products: vec!["Premium Combo x 1".into()],
            total: 799.0,
            status: "Delivered".into(),
            contact: Contact {
                email: "jane.smith@example.com".into(),
                phone: "098-765-4321".into(),
                address: "456 Oak Ave, Anytown, USA".into(),
            },
            payment_status: "Paid".into(),
            order_date: "2023-10-20".into(),
            razorpay_payment_id: None,
            razorpay_order_id: None,
            razorpay_signature: None,
        },
    ]
}
