//! Stub data returned by the support tools.
//!
//! All values are fixed. The order `12346` was never delivered, which is
//! the case every demo conversation revolves around.

use helpdesk_core::context::SessionContext;
use serde_json::{Map, Value, json};

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// The case file loaded into a fresh session: who is writing in and which
/// order they are writing about.
pub fn initial_user_info() -> SessionContext {
    SessionContext::new(object(json!({
        "customer": {
            "email": "customer@example.com",
            "name": "John Doe",
            "phone": "555-0123",
            "address": "123 Main St, City, State"
        },
        "current_order": {
            "order_id": "12346",
            "order_date": "2024-03-15",
            "items": [
                { "name": "Burger Combo", "quantity": 1, "price": 15.99 },
                { "name": "Side Salad", "quantity": 1, "price": 5.99 }
            ],
            "total": 25.99,
            "restaurant": "Burger Palace",
            "status": "never_delivered"
        }
    })))
}

/// Customer profile and order history.
pub fn customer_profile() -> Value {
    json!({
        "email": "customer@example.com",
        "name": "John Doe",
        "order_history": [
            { "order_id": "12345", "status": "delivered", "date": "2024-03-01" },
            { "order_id": "12346", "status": "never_delivered", "date": "2024-03-15" }
        ]
    })
}

/// Latest delivery status.
pub fn delivery_status() -> Value {
    json!({
        "order_id": "12346",
        "status": "never_delivered",
        "delivery_time": "2024-03-15 14:30:00",
        "delivery_address": "123 Main St, City, State",
        "driver_notes": "Could not locate customer"
    })
}

/// Where the driver says the order was left.
pub fn dropoff_record() -> Value {
    json!({
        "order_id": "12346",
        "photo_url": "https://example.com/delivery_photo.jpg",
        "map_url": "https://example.com/delivery_map.jpg",
        "coordinates": { "lat": 37.7749, "lng": -122.4194 },
        "attempted_delivery_time": "2024-03-15 14:30:00"
    })
}

/// Full fraud report, used when no override is active.
pub fn fraud_report() -> Value {
    json!({
        "email": "customer@example.com",
        "is_fraud": false,
        "risk_score": 0.1,
        "account_age_days": 365,
        "previous_claims": 0
    })
}

/// Confirmation of an applied resolution.
pub fn resolution_receipt() -> Value {
    json!({
        "order_id": "12346",
        "resolution": "refund",
        "status": "completed",
        "timestamp": "2024-03-15 15:00:00",
        "amount": 25.99,
        "resolution_id": "res_123456"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_case_identifies_customer_and_order() {
        let ctx = initial_user_info();
        assert_eq!(ctx.customer_name(), Some("John Doe"));
        assert_eq!(ctx.customer_email(), Some("customer@example.com"));
        assert_eq!(ctx.current_order_id(), Some("12346"));
        assert_eq!(ctx.keys().collect::<Vec<_>>(), vec!["customer", "current_order"]);
        assert_eq!(ctx.get("current_order").unwrap()["total"], 25.99);
    }

    #[test]
    fn order_history_contains_the_missing_order() {
        let profile = customer_profile();
        let history = profile["order_history"].as_array().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1]["status"], "never_delivered");
    }
}
