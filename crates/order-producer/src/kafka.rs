//! Kafka-backed publisher built on `rdkafka`.

use crate::error::ProducerError;
use crate::publisher::{DeliveryReport, OrderPublisher};
use rdkafka::admin::{AdminClient, AdminOptions, NewTopic, TopicReplication};
use rdkafka::client::DefaultClientContext;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::ClientConfig;
use std::time::Duration;
use tracing::{debug, info};

/// Default time to wait for a delivery confirmation.
pub const DEFAULT_DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection settings for [`KafkaOrderPublisher`].
#[derive(Debug, Clone)]
pub struct ProducerSettings {
    /// Bootstrap servers (comma-separated, e.g. "localhost:9092")
    pub brokers: String,
    /// Upper bound on waiting for each delivery confirmation
    pub delivery_timeout: Duration,
    /// Extra librdkafka properties applied after the defaults
    pub properties: Vec<(String, String)>,
}

impl ProducerSettings {
    pub fn new(brokers: impl Into<String>) -> Self {
        Self {
            brokers: brokers.into(),
            delivery_timeout: DEFAULT_DELIVERY_TIMEOUT,
            properties: Vec::new(),
        }
    }

    pub fn with_delivery_timeout(mut self, timeout: Duration) -> Self {
        self.delivery_timeout = timeout;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    fn validate(&self) -> Result<(), ProducerError> {
        if self.brokers.trim().is_empty() {
            return Err(ProducerError::InvalidConfig(
                "at least one Kafka broker is required".to_string(),
            ));
        }
        // message.timeout.ms=0 means "no timeout" to librdkafka.
        if self.delivery_timeout.as_millis() == 0 {
            return Err(ProducerError::InvalidConfig(
                "delivery timeout must be at least 1 millisecond".to_string(),
            ));
        }
        Ok(())
    }

    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new();
        config
            .set("bootstrap.servers", &self.brokers)
            .set(
                "message.timeout.ms",
                self.delivery_timeout.as_millis().to_string(),
            );
        for (key, value) in &self.properties {
            config.set(key, value);
        }
        config
    }
}

/// Publishes order events to Kafka through a `FutureProducer`.
pub struct KafkaOrderPublisher {
    producer: FutureProducer,
    settings: ProducerSettings,
}

impl KafkaOrderPublisher {
    /// Create the underlying Kafka producer.
    ///
    /// librdkafka connects lazily, so an unreachable broker surfaces as a
    /// delivery failure on the first publish rather than here.
    pub fn connect(settings: &ProducerSettings) -> Result<Self, ProducerError> {
        settings.validate()?;

        let producer: FutureProducer = settings.client_config().create()?;
        info!("Created Kafka producer for brokers {}", settings.brokers);

        Ok(Self {
            producer,
            settings: settings.clone(),
        })
    }

    pub fn settings(&self) -> &ProducerSettings {
        &self.settings
    }

    /// Create a Kafka topic if it doesn't exist.
    pub async fn create_topic_if_not_exists(
        &self,
        topic: &str,
        partitions: i32,
    ) -> Result<(), ProducerError> {
        let admin_client: AdminClient<DefaultClientContext> =
            self.settings.client_config().create()?;

        let new_topic = NewTopic::new(topic, partitions, TopicReplication::Fixed(1));
        let opts = AdminOptions::new().operation_timeout(Some(self.settings.delivery_timeout));

        match admin_client.create_topics(&[new_topic], &opts).await {
            Ok(results) => {
                for result in results {
                    match result {
                        Ok(topic_name) => {
                            info!("Topic '{}' created successfully", topic_name);
                        }
                        Err((topic_name, err)) => {
                            let err_str = err.to_string();
                            if err_str.contains("already exists")
                                || err_str.contains("TopicExistsException")
                            {
                                info!("Topic '{}' already exists", topic_name);
                            } else {
                                return Err(ProducerError::TopicCreation(format!(
                                    "Failed to create topic {topic_name}: {err}"
                                )));
                            }
                        }
                    }
                }
            }
            Err(e) => {
                return Err(ProducerError::TopicCreation(format!(
                    "Failed to create topic: {e}"
                )));
            }
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl OrderPublisher for KafkaOrderPublisher {
    async fn publish(
        &self,
        topic: &str,
        key: &[u8],
        payload: &[u8],
    ) -> Result<DeliveryReport, ProducerError> {
        let timeout = self.settings.delivery_timeout;
        let record = FutureRecord::to(topic).key(key).payload(payload);

        let delivery = tokio::time::timeout(timeout, self.producer.send(record, timeout))
            .await
            .map_err(|_| ProducerError::Timeout(timeout))?;

        match delivery {
            Ok((partition, offset)) => {
                debug!(
                    "Delivered message to {} [{}] at offset {}",
                    topic, partition, offset
                );
                Ok(DeliveryReport {
                    topic: topic.to_string(),
                    partition,
                    offset,
                })
            }
            Err((err, _)) => Err(ProducerError::Delivery {
                reason: err.to_string(),
            }),
        }
    }

    async fn close(&self) -> Result<(), ProducerError> {
        debug!("Flushing Kafka producer");
        let producer = self.producer.clone();
        let timeout = self.settings.delivery_timeout;
        tokio::task::spawn_blocking(move || producer.flush(timeout)).await??;
        info!("Kafka producer closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = ProducerSettings::new("localhost:9092");
        assert_eq!(settings.delivery_timeout, DEFAULT_DELIVERY_TIMEOUT);
        assert!(settings.properties.is_empty());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_reject_empty_brokers() {
        let err = ProducerSettings::new("  ").validate().unwrap_err();
        assert!(matches!(err, ProducerError::InvalidConfig(_)));
    }

    #[test]
    fn test_settings_reject_zero_timeout() {
        let err = ProducerSettings::new("localhost:9092")
            .with_delivery_timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(matches!(err, ProducerError::InvalidConfig(_)));
    }

    #[test]
    fn test_settings_reject_sub_millisecond_timeout() {
        let err = ProducerSettings::new("localhost:9092")
            .with_delivery_timeout(Duration::from_micros(400))
            .validate()
            .unwrap_err();
        assert!(matches!(err, ProducerError::InvalidConfig(_)));

        assert!(ProducerSettings::new("localhost:9092")
            .with_delivery_timeout(Duration::from_millis(1))
            .validate()
            .is_ok());
    }

    #[tokio::test]
    async fn test_close_with_nothing_queued_does_not_block_runtime() {
        let settings = ProducerSettings::new("127.0.0.1:1")
            .with_delivery_timeout(Duration::from_millis(500));
        let publisher = KafkaOrderPublisher::connect(&settings).unwrap();

        let ticker = tokio::spawn(async { tokio::time::sleep(Duration::from_millis(1)).await });
        publisher.close().await.unwrap();
        ticker.await.unwrap();
    }

    #[test]
    fn test_client_config_applies_overrides() {
        let config = ProducerSettings::new("broker-1:9092,broker-2:9092")
            .with_delivery_timeout(Duration::from_millis(2500))
            .with_property("client.id", "order-test-producer")
            .client_config();

        assert_eq!(
            config.get("bootstrap.servers"),
            Some("broker-1:9092,broker-2:9092")
        );
        assert_eq!(config.get("message.timeout.ms"), Some("2500"));
        assert_eq!(config.get("client.id"), Some("order-test-producer"));
    }

    #[test]
    fn test_connect_is_lazy() {
        let publisher = KafkaOrderPublisher::connect(&ProducerSettings::new("127.0.0.1:1"));
        assert!(publisher.is_ok());
    }

    #[test]
    fn test_connect_rejects_unknown_property() {
        let settings =
            ProducerSettings::new("localhost:9092").with_property("no.such.property", "1");
        let err = KafkaOrderPublisher::connect(&settings).err().unwrap();
        assert!(matches!(err, ProducerError::Kafka(_)));
    }
}
