use crate::{api::ticket::Status, source, Config, TicketStats};

/// Reads the configured stats document and logs its counters.
pub async fn run(config: &Config) -> Result<TicketStats, source::Error> {
    let stats = source::read(&config.source.path).await?;

    for status in Status::ALL {
        tracing::debug!(
            %status,
            count = stats.count(status),
            "tickets by status",
        );
    }

    tracing::info!(
        total = stats.total(),
        open = stats.open(),
        received = stats.received(),
        in_progress = stats.in_progress(),
        resolved = stats.resolved(),
        closed = stats.closed(),
        critical = stats.critical(),
        active_tickets = stats.active_tickets(),
        completion_rate = stats.completion_rate(),
        "ticket stats",
    );

    Ok(stats)
}
