//! CLI argument definitions for the order producer.

use crate::kafka::ProducerSettings;
use crate::runner::SendOptions;
use clap::Args;
use std::time::Duration;

/// How many messages to send and how fast.
#[derive(Args, Clone, Debug)]
pub struct SendArgs {
    /// Number of messages to send
    #[arg(long, default_value = "10")]
    pub count: u64,

    /// Delay between messages in seconds
    #[arg(long, default_value = "2.0", value_parser = parse_seconds)]
    pub delay: Duration,

    /// Random seed for customer/product selection (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SendArgs {
    pub fn send_options(&self, topic: &str) -> SendOptions {
        SendOptions::new(topic)
            .with_count(self.count)
            .with_delay(self.delay)
    }
}

/// Kafka connection arguments.
#[derive(Args, Clone, Debug)]
pub struct KafkaArgs {
    /// Kafka brokers (comma-separated, e.g., "localhost:9092")
    #[arg(long, env = "KAFKA_BROKERS", default_value = "localhost:9092")]
    pub kafka_brokers: String,

    /// Topic to publish order events to
    #[arg(long, env = "KAFKA_TOPIC", default_value = "orders")]
    pub topic: String,

    /// Seconds to wait for each delivery confirmation
    #[arg(long, default_value = "10", value_parser = parse_seconds)]
    pub delivery_timeout: Duration,

    /// Extra producer properties passed to librdkafka (repeatable)
    #[arg(long = "producer-config", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub producer_config: Vec<(String, String)>,

    /// Create the topic before sending if it doesn't exist
    #[arg(long)]
    pub create_topic: bool,

    /// Number of partitions used with --create-topic
    #[arg(long, default_value = "3")]
    pub partitions: i32,
}

impl KafkaArgs {
    pub fn producer_settings(&self) -> ProducerSettings {
        self.producer_config.iter().fold(
            ProducerSettings::new(&self.kafka_brokers).with_delivery_timeout(self.delivery_timeout),
            |settings, (key, value)| settings.with_property(key, value),
        )
    }
}

/// Parse a non-negative, finite number of seconds.
pub fn parse_seconds(s: &str) -> Result<Duration, String> {
    let secs: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("invalid number of seconds '{s}': {e}"))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!(
            "seconds must be a non-negative finite number, got '{s}'"
        ));
    }
    Duration::try_from_secs_f64(secs)
        .map_err(|e| format!("invalid number of seconds '{s}': {e}"))
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("2.0").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_seconds("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_seconds("0.25").unwrap(), Duration::from_millis(250));
        assert!(parse_seconds("-1").is_err());
        assert!(parse_seconds("NaN").is_err());
        assert!(parse_seconds("inf").is_err());
        assert!(parse_seconds("soon").is_err());
        assert!(parse_seconds("1e30").is_err());
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("security.protocol=SASL_SSL").unwrap(),
            ("security.protocol".to_string(), "SASL_SSL".to_string())
        );
        assert_eq!(
            parse_key_value("sasl.password=a=b").unwrap(),
            ("sasl.password".to_string(), "a=b".to_string())
        );
        assert!(parse_key_value("linger.ms").is_err());
        assert!(parse_key_value("=5").is_err());
    }

    #[test]
    fn test_producer_settings_from_args() {
        let args = KafkaArgs {
            kafka_brokers: "kafka:9092".to_string(),
            topic: "orders".to_string(),
            delivery_timeout: Duration::from_secs(3),
            producer_config: vec![("acks".to_string(), "all".to_string())],
            create_topic: false,
            partitions: 3,
        };

        let settings = args.producer_settings();
        assert_eq!(settings.brokers, "kafka:9092");
        assert_eq!(settings.delivery_timeout, Duration::from_secs(3));
        assert_eq!(
            settings.properties,
            vec![("acks".to_string(), "all".to_string())]
        );
    }
}
