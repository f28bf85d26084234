//! Top-level command line and the wiring between its parts.

use anyhow::Context;
use clap::Parser;
use order_generator::OrderGenerator;
use order_producer::{
    send_messages, ConsoleReporter, KafkaArgs, KafkaOrderPublisher, SendArgs, SendSummary,
};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "send-test-messages")]
#[command(about = "Send test order messages to Kafka")]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub send: SendArgs,

    #[command(flatten)]
    pub kafka: KafkaArgs,
}

/// Connect to Kafka and run the send loop until it completes or `shutdown` fires.
pub async fn run(cli: Cli, shutdown: CancellationToken) -> anyhow::Result<SendSummary> {
    let publisher = KafkaOrderPublisher::connect(&cli.kafka.producer_settings())
        .context("Failed to create Kafka producer")?;

    if cli.kafka.create_topic {
        publisher
            .create_topic_if_not_exists(&cli.kafka.topic, cli.kafka.partitions)
            .await
            .context("Failed to prepare topic")?;
    }

    let mut generator = match cli.send.seed {
        Some(seed) => {
            info!("Using seed {} for order generation", seed);
            OrderGenerator::with_seed(seed)
        }
        None => OrderGenerator::new(),
    };
    let mut reporter = ConsoleReporter::stdout();
    let options = cli.send.send_options(&cli.kafka.topic);

    let summary = send_messages(
        &publisher,
        &mut generator,
        &mut reporter,
        &options,
        &shutdown,
    )
    .await?;

    Ok(summary)
}
