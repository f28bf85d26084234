//! Command-line parsing tests for send-test-messages.

use clap::Parser;
use send_test_messages::Cli;
use std::time::Duration;

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["send-test-messages"]).unwrap();

    assert_eq!(cli.send.count, 10);
    assert_eq!(cli.send.delay, Duration::from_secs(2));
    assert_eq!(cli.send.seed, None);
    assert_eq!(cli.kafka.delivery_timeout, Duration::from_secs(10));
    assert!(!cli.kafka.create_topic);
    assert_eq!(cli.kafka.partitions, 3);
    assert!(cli.kafka.producer_config.is_empty());

    // Only meaningful when the environment doesn't override them.
    if std::env::var("KAFKA_BROKERS").is_err() {
        assert_eq!(cli.kafka.kafka_brokers, "localhost:9092");
    }
    if std::env::var("KAFKA_TOPIC").is_err() {
        assert_eq!(cli.kafka.topic, "orders");
    }
}

#[test]
fn test_count_and_fractional_delay() {
    let cli = Cli::try_parse_from(["send-test-messages", "--count", "3", "--delay", "0.5"]).unwrap();

    let options = cli.send.send_options("orders");
    assert_eq!(options.count, 3);
    assert_eq!(options.delay, Duration::from_millis(500));
}

#[test]
fn test_zero_delay_is_allowed() {
    let cli = Cli::try_parse_from(["send-test-messages", "--delay", "0"]).unwrap();
    assert!(cli.send.delay.is_zero());
}

#[test]
fn test_rejects_negative_delay() {
    assert!(Cli::try_parse_from(["send-test-messages", "--delay", "-1"]).is_err());
}

#[test]
fn test_rejects_out_of_range_durations() {
    assert!(Cli::try_parse_from(["send-test-messages", "--delay", "1e30"]).is_err());
    assert!(Cli::try_parse_from(["send-test-messages", "--delivery-timeout", "1e30"]).is_err());
}

#[test]
fn test_rejects_non_numeric_count() {
    assert!(Cli::try_parse_from(["send-test-messages", "--count", "ten"]).is_err());
}

#[test]
fn test_kafka_overrides() {
    let cli = Cli::try_parse_from([
        "send-test-messages",
        "--kafka-brokers",
        "kafka-1:9092,kafka-2:9092",
        "--topic",
        "orders-dev",
        "--delivery-timeout",
        "2.5",
        "--producer-config",
        "acks=all",
        "--producer-config",
        "client.id=order-tester",
        "--create-topic",
        "--partitions",
        "6",
        "--seed",
        "42",
    ])
    .unwrap();

    assert_eq!(cli.kafka.topic, "orders-dev");
    assert!(cli.kafka.create_topic);
    assert_eq!(cli.kafka.partitions, 6);
    assert_eq!(cli.send.seed, Some(42));

    let settings = cli.kafka.producer_settings();
    assert_eq!(settings.brokers, "kafka-1:9092,kafka-2:9092");
    assert_eq!(settings.delivery_timeout, Duration::from_millis(2500));
    assert_eq!(
        settings.properties,
        vec![
            ("acks".to_string(), "all".to_string()),
            ("client.id".to_string(), "order-tester".to_string()),
        ]
    );
}

#[test]
fn test_rejects_malformed_producer_config() {
    assert!(Cli::try_parse_from(["send-test-messages", "--producer-config", "acks"]).is_err());
}
