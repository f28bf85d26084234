//! Error types for the order producer.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while publishing order events.
#[derive(Error, Debug)]
pub enum ProducerError {
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),

    /// The broker or client reported that a message could not be delivered.
    #[error("Delivery failed: {reason}")]
    Delivery { reason: String },

    #[error("Timed out after {0:?} waiting for delivery confirmation")]
    Timeout(Duration),

    #[error("Failed to encode order event: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Topic creation error: {0}")]
    TopicCreation(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ProducerError {
    /// Whether this error only affects a single message.
    ///
    /// Delivery failures are reported and the send loop moves on to the next
    /// message; everything else aborts the loop.
    pub fn is_delivery_failure(&self) -> bool {
        matches!(
            self,
            ProducerError::Delivery { .. } | ProducerError::Timeout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_failure_classification() {
        assert!(ProducerError::Delivery {
            reason: "Broker: Not leader for partition".to_string()
        }
        .is_delivery_failure());
        assert!(ProducerError::Timeout(Duration::from_secs(10)).is_delivery_failure());
        assert!(!ProducerError::TopicCreation("boom".to_string()).is_delivery_failure());
        assert!(!ProducerError::Io(std::io::Error::other("closed")).is_delivery_failure());
    }

    #[test]
    fn test_timeout_message() {
        let err = ProducerError::Timeout(Duration::from_secs(10));
        assert_eq!(
            err.to_string(),
            "Timed out after 10s waiting for delivery confirmation"
        );
    }
}
