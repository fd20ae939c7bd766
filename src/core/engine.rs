use crate::core::generator::OrderGenerator;
use crate::core::{OrderSink, PublishOutcome, PublishReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;

pub struct PublishEngine<S: OrderSink> {
    generator: OrderGenerator,
    sink: S,
    order_count: usize,
    monitor: SystemMonitor,
}

impl<S: OrderSink> PublishEngine<S> {
    pub fn new(generator: OrderGenerator, sink: S, order_count: usize) -> Self {
        Self::new_with_monitoring(generator, sink, order_count, false)
    }

    pub fn new_with_monitoring(
        generator: OrderGenerator,
        sink: S,
        order_count: usize,
        monitor_enabled: bool,
    ) -> Self {
        Self {
            generator,
            sink,
            order_count,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Generates and publishes `order_count` orders one at a time.
    ///
    /// The first generation or transport error ends the run. Response
    /// statuses are recorded only.
    pub async fn run(&mut self) -> Result<PublishReport> {
        tracing::info!("Publishing {} orders", self.order_count);
        self.monitor.log_stats("Start");

        let started_at = Utc::now();
        let mut outcomes = Vec::with_capacity(self.order_count);

        for sequence in 1..=self.order_count {
            let order = self.generator.next_order()?;
            let status = self.sink.publish(&order).await?;

            tracing::debug!(
                "Order {} for customer {} ({} line items) -> {}",
                sequence,
                order.customer_id,
                order.line_items.len(),
                status
            );
            println!("posted order {}", sequence);

            outcomes.push(PublishOutcome {
                sequence,
                customer_id: order.customer_id,
                line_items: order.line_items.len(),
                status,
            });
        }

        let report = PublishReport {
            started_at,
            finished_at: Utc::now(),
            outcomes,
        };

        self.monitor.log_final_stats(report.total());
        report.log_summary();
        Ok(report)
    }
}
