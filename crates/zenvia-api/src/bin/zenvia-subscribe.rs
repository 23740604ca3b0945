//! Register the standard webhooks for a channel: incoming messages,
//! outgoing messages, and message status changes.
//!
//! Reads `ZENVIA_API_TOKEN` and `WEBHOOK_URL` (required), plus
//! `ZENVIA_CHANNEL` (default `WhatsApp`) and the optional `ZENVIA_*`
//! client settings.

use std::collections::HashMap;

use anyhow::Context;
use log::{error, info};
use zenvia_api::{ZenviaApi, ZvDirection, ZvEventType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();

    let api = ZenviaApi::from_env()?;
    let webhook_url = std::env::var("WEBHOOK_URL").context("WEBHOOK_URL is not set")?;
    let channel = std::env::var("ZENVIA_CHANNEL").unwrap_or_else(|_| "WhatsApp".to_string());

    let wanted = [
        (ZvEventType::Message, Some(ZvDirection::In)),
        (ZvEventType::Message, Some(ZvDirection::Out)),
        (ZvEventType::MessageStatus, None),
    ];

    let mut failures = 0;
    for (event_type, direction) in wanted {
        match api
            .webhook_create(event_type, &webhook_url, HashMap::new(), &channel, direction)
            .await
        {
            Ok(sub) => info!("{:?} {:?} → subscription {}", event_type, direction, sub.id),
            Err(e) => {
                error!("{:?} {:?} failed: {}", event_type, direction, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} subscriptions failed", failures, wanted.len());
    }
    Ok(())
}
