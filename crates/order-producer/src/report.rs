//! Operator-facing reporting of delivery outcomes.

use crate::error::ProducerError;
use crate::publisher::DeliveryReport;
use crate::runner::{SendOptions, SendSummary};
use order_generator::OrderEvent;
use std::io::{self, Write};

/// Receives the outcome of every step of the send loop.
pub trait DeliveryReporter {
    /// Called once before the first message is built.
    fn started(&mut self, options: &SendOptions) -> io::Result<()>;

    /// Called after message `index` (1-based) of `total` was acknowledged.
    fn delivered(
        &mut self,
        index: u64,
        total: u64,
        order: &OrderEvent,
        report: &DeliveryReport,
    ) -> io::Result<()>;

    /// Called after message `index` (1-based) could not be delivered.
    fn failed(&mut self, index: u64, order: &OrderEvent, error: &ProducerError) -> io::Result<()>;

    /// Called when the loop stops early because of an operator interrupt.
    fn interrupted(&mut self) -> io::Result<()>;

    /// Called after every requested message was attempted.
    fn finished(&mut self, summary: &SendSummary) -> io::Result<()>;
}

/// Plain-text reporter writing to any `Write` sink (stdout by default).
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DeliveryReporter for ConsoleReporter<W> {
    fn started(&mut self, options: &SendOptions) -> io::Result<()> {
        writeln!(
            self.out,
            "Sending {} test messages to Kafka...",
            options.count
        )?;
        writeln!(self.out, "Topic: {}", options.topic)?;
        writeln!(
            self.out,
            "Delay between messages: {} seconds",
            options.delay.as_secs_f64()
        )?;
        writeln!(self.out, "{}", "-".repeat(50))?;
        self.out.flush()
    }

    fn delivered(
        &mut self,
        index: u64,
        total: u64,
        order: &OrderEvent,
        report: &DeliveryReport,
    ) -> io::Result<()> {
        writeln!(self.out, "Message {index}/{total} sent successfully:")?;
        writeln!(self.out, "   Order ID: {}", order.order_id)?;
        writeln!(self.out, "   Customer: {}", order.customer_id)?;
        writeln!(self.out, "   Products: {:?}", order.product_ids)?;
        writeln!(self.out, "   Topic: {}", report.topic)?;
        writeln!(self.out, "   Partition: {}", report.partition)?;
        writeln!(self.out, "   Offset: {}", report.offset)?;
        writeln!(self.out)?;
        self.out.flush()
    }

    fn failed(&mut self, index: u64, order: &OrderEvent, error: &ProducerError) -> io::Result<()> {
        writeln!(
            self.out,
            "Failed to send message {index} ({}): {error}",
            order.order_id
        )?;
        self.out.flush()
    }

    fn interrupted(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Interrupted by user")?;
        self.out.flush()
    }

    fn finished(&mut self, summary: &SendSummary) -> io::Result<()> {
        if summary.failed == 0 {
            writeln!(self.out, "All messages sent!")?;
        } else {
            writeln!(
                self.out,
                "Finished: {} sent, {} failed",
                summary.delivered, summary.failed
            )?;
        }
        self.out.flush()
    }
}
