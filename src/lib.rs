//! send-test-messages
//!
//! Publishes synthetic order events to a Kafka topic so order-processing
//! consumers can be exercised by hand.
//!
//! # Crates
//!
//! - `order_generator` - the `OrderEvent` record and its random generator
//! - `order_producer` - the Kafka publisher, send loop and console reporting
//!
//! # CLI Usage
//!
//! ```bash
//! # Send 10 orders to the `orders` topic, two seconds apart
//! send-test-messages
//!
//! # Send 50 orders as fast as the broker acknowledges them
//! send-test-messages --count 50 --delay 0
//!
//! # Target a different cluster and create the topic first
//! send-test-messages --kafka-brokers kafka:9092 --topic orders-dev --create-topic
//! ```

pub mod cli;
pub mod shutdown;

pub use cli::{run, Cli};
pub use shutdown::shutdown_on_ctrl_c;
