//! Kafka publisher for synthetic order events.
//!
//! This crate drives the send loop of the `send-test-messages` tool: it builds
//! orders with [`order_generator::OrderGenerator`], publishes them through an
//! [`OrderPublisher`], and reports each delivery outcome to the operator.
//!
//! # Architecture
//!
//! ```text
//!  OrderGenerator ──► send_messages ──► OrderPublisher ──► Kafka topic
//!                          │                 (KafkaOrderPublisher)
//!                          ▼
//!                   DeliveryReporter
//!                   (ConsoleReporter)
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use order_generator::OrderGenerator;
//! use order_producer::{
//!     send_messages, ConsoleReporter, KafkaOrderPublisher, ProducerSettings, SendOptions,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let publisher = KafkaOrderPublisher::connect(&ProducerSettings::new("localhost:9092"))?;
//!     let mut generator = OrderGenerator::new();
//!     let mut reporter = ConsoleReporter::stdout();
//!     let options = SendOptions::new("orders").with_count(5);
//!
//!     let summary = send_messages(
//!         &publisher,
//!         &mut generator,
//!         &mut reporter,
//!         &options,
//!         &CancellationToken::new(),
//!     )
//!     .await?;
//!     println!("delivered {} of {}", summary.delivered, summary.attempted);
//!     Ok(())
//! }
//! ```

pub mod args;
pub mod error;
pub mod kafka;
pub mod publisher;
pub mod report;
pub mod runner;

// Re-exports for convenience
pub use args::{KafkaArgs, SendArgs};
pub use error::ProducerError;
pub use kafka::{KafkaOrderPublisher, ProducerSettings, DEFAULT_DELIVERY_TIMEOUT};
pub use publisher::{publish_order, DeliveryReport, OrderPublisher};
pub use report::{ConsoleReporter, DeliveryReporter};
pub use runner::{send_messages, SendOptions, SendSummary};
