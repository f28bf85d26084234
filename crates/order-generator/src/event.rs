//! The order event record published to Kafka.

use serde::{Deserialize, Serialize};

/// Format used for the `timestamp` field: local date-time, no offset, microseconds.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// A synthetic customer order.
///
/// Serialized as a flat JSON object with camelCase field names, which is the
/// shape order-processing consumers expect on the `orders` topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEvent {
    pub order_id: String,
    pub customer_id: String,
    pub product_ids: Vec<String>,
    pub timestamp: String,
}

impl OrderEvent {
    /// Message key for this event (the order id as UTF-8 bytes).
    pub fn key(&self) -> &[u8] {
        self.order_id.as_bytes()
    }

    /// Encode the event as a JSON payload.
    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
