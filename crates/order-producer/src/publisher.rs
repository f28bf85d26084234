//! Publishing seam between the send loop and the messaging client.

use crate::error::ProducerError;
use order_generator::OrderEvent;

/// Where a message ended up once the broker acknowledged it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub topic: String,
    pub partition: i32,
    pub offset: i64,
}

/// A messaging client able to publish keyed payloads to a topic.
///
/// Implementations wait for delivery confirmation (bounded by their own
/// timeout) before returning from `publish`.
#[async_trait::async_trait]
pub trait OrderPublisher: Send + Sync {
    /// Publish one message and wait for its delivery confirmation.
    async fn publish(
        &self,
        topic: &str,
        key: &[u8],
        payload: &[u8],
    ) -> Result<DeliveryReport, ProducerError>;

    /// Flush outstanding messages and release the client.
    async fn close(&self) -> Result<(), ProducerError>;
}

/// Publish an order event as JSON, keyed by its order id.
pub async fn publish_order<P>(
    publisher: &P,
    topic: &str,
    order: &OrderEvent,
) -> Result<DeliveryReport, ProducerError>
where
    P: OrderPublisher + ?Sized,
{
    let payload = order.to_json_bytes()?;
    publisher.publish(topic, order.key(), &payload).await
}
