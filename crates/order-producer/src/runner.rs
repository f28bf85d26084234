//! The send loop: build, publish, report, pause, repeat.
//!
//! Each message walks through `idle -> building -> publishing -> reporting`,
//! followed by `sleeping` (or `done` after the last one). Once the loop ends,
//! for whatever reason, the publisher is closed exactly once.

use crate::error::ProducerError;
use crate::publisher::{publish_order, OrderPublisher};
use crate::report::DeliveryReporter;
use order_generator::OrderGenerator;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

pub const DEFAULT_COUNT: u64 = 10;
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_TOPIC: &str = "orders";

/// What to send and how fast.
#[derive(Debug, Clone)]
pub struct SendOptions {
    /// Topic every order is published to
    pub topic: String,
    /// Number of messages to send
    pub count: u64,
    /// Pause between consecutive sends
    pub delay: Duration,
}

impl SendOptions {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            count: DEFAULT_COUNT,
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for SendOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TOPIC)
    }
}

/// Outcome of a send loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendSummary {
    /// Messages handed to the publisher.
    pub attempted: u64,
    /// Messages acknowledged by the broker.
    pub delivered: u64,
    /// Messages that failed delivery or timed out.
    pub failed: u64,
    /// Whether the loop stopped early on an operator interrupt.
    pub interrupted: bool,
}

/// Send `options.count` generated orders through `publisher`.
///
/// Delivery failures are reported and skipped. Any other error stops the
/// loop and is returned. Cancelling `shutdown` stops the loop before the
/// next message is built, or immediately if it is pausing between sends; an
/// in-flight publish is always allowed to finish. The publisher is closed
/// before this function returns in every case.
pub async fn send_messages<P, R>(
    publisher: &P,
    generator: &mut OrderGenerator,
    reporter: &mut R,
    options: &SendOptions,
    shutdown: &CancellationToken,
) -> Result<SendSummary, ProducerError>
where
    P: OrderPublisher + ?Sized,
    R: DeliveryReporter + ?Sized,
{
    let result = run_loop(publisher, generator, reporter, options, shutdown).await;

    debug!("Closing publisher");
    let closed = publisher.close().await;

    match (result, closed) {
        (Ok(summary), Ok(())) => Ok(summary),
        (Ok(_), Err(close_err)) => Err(close_err),
        (Err(err), Ok(())) => Err(err),
        (Err(err), Err(close_err)) => {
            warn!("Failed to close publisher after error: {}", close_err);
            Err(err)
        }
    }
}

async fn run_loop<P, R>(
    publisher: &P,
    generator: &mut OrderGenerator,
    reporter: &mut R,
    options: &SendOptions,
    shutdown: &CancellationToken,
) -> Result<SendSummary, ProducerError>
where
    P: OrderPublisher + ?Sized,
    R: DeliveryReporter + ?Sized,
{
    let mut summary = SendSummary::default();

    info!(
        "Sending {} messages to topic '{}' (delay: {:?})",
        options.count, options.topic, options.delay
    );
    reporter.started(options)?;

    for index in 1..=options.count {
        if shutdown.is_cancelled() {
            summary.interrupted = true;
            break;
        }

        debug!(index, "building order");
        let order = generator.next_order();

        debug!(index, order_id = %order.order_id, "publishing order");
        let outcome = publish_order(publisher, &options.topic, &order).await;
        summary.attempted += 1;

        debug!(index, "reporting outcome");
        match outcome {
            Ok(report) => {
                summary.delivered += 1;
                reporter.delivered(index, options.count, &order, &report)?;
            }
            Err(err) if err.is_delivery_failure() => {
                summary.failed += 1;
                warn!("Failed to send message {} ({}): {}", index, order.order_id, err);
                reporter.failed(index, &order, &err)?;
            }
            Err(err) => return Err(err),
        }

        if index < options.count && !options.delay.is_zero() {
            debug!(index, "sleeping for {:?}", options.delay);
            tokio::select! {
                _ = shutdown.cancelled() => {
                    summary.interrupted = true;
                    break;
                }
                _ = tokio::time::sleep(options.delay) => {}
            }
        }
    }

    if summary.interrupted {
        info!(
            "Interrupted after {} of {} messages",
            summary.attempted, options.count
        );
        reporter.interrupted()?;
    } else {
        info!(
            "Send loop complete: {} delivered, {} failed",
            summary.delivered, summary.failed
        );
        reporter.finished(&summary)?;
    }

    Ok(summary)
}
