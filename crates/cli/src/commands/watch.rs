// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;

use clubsync::{Poller, Refresh};
use clubsync_core::EntityKind;

use crate::cli::OutputFormat;
use crate::context::Context;
use crate::error::Result;

/// One line of `watch` output.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct Change {
    kind: &'static str,
    count: usize,
    revision: u64,
}

impl Change {
    fn of(ctx: &Context, kind: EntityKind, revision: u64) -> Self {
        let count = match kind {
            EntityKind::Club => ctx.hub.clubs().len(),
            EntityKind::Event => ctx.hub.events().len(),
            EntityKind::JoinRequest => ctx.hub.join_requests().len(),
            EntityKind::Registration => ctx.hub.registrations().len(),
        };
        Change {
            kind: kind.plural_key(),
            count,
            revision,
        }
    }

    fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
            OutputFormat::Text => Ok(format!(
                "{}: {} records (revision {})",
                self.kind, self.count, self.revision
            )),
        }
    }
}

/// Polls until Ctrl-C or, with `for_secs`, until the time is up. Prints a
/// line whenever a collection's canonical state changes.
pub async fn run(ctx: &Context, for_secs: Option<u64>) -> Result<()> {
    let target: Arc<dyn Refresh> = Arc::clone(&ctx.hub) as Arc<dyn Refresh>;
    let poller = Poller::new(target, ctx.config.poll_interval());

    let [mut clubs, mut events, mut requests, mut registrations] =
        EntityKind::ALL.map(|kind| ctx.hub.subscribe(kind));

    poller.start();
    tracing::info!(api_url = %ctx.config.api_url, "watch started");
    eprintln!(
        "watching {} every {}s (Ctrl-C to stop)",
        ctx.config.api_url,
        poller.interval().as_secs_f64()
    );

    let deadline = async move {
        match for_secs {
            Some(secs) => tokio::time::sleep(Duration::from_secs(secs)).await,
            None => std::future::pending::<()>().await,
        }
    };
    tokio::pin!(deadline);
    let interrupted = tokio::signal::ctrl_c();
    tokio::pin!(interrupted);

    let result = loop {
        let kind = tokio::select! {
            _ = &mut interrupted => break Ok(()),
            _ = &mut deadline => break Ok(()),
            kind = changed(EntityKind::Club, &mut clubs) => kind,
            kind = changed(EntityKind::Event, &mut events) => kind,
            kind = changed(EntityKind::JoinRequest, &mut requests) => kind,
            kind = changed(EntityKind::Registration, &mut registrations) => kind,
        };
        let Some((kind, revision)) = kind else {
            break Ok(());
        };
        match Change::of(ctx, kind, revision).render(ctx.format) {
            Ok(line) => println!("{}", line),
            Err(e) => break Err(e),
        }
    };

    poller.shutdown().await;
    tracing::info!("watch stopped");
    result
}

/// Waits for the next revision of one collection. `None` once the
/// collection is gone.
async fn changed(
    kind: EntityKind,
    rx: &mut watch::Receiver<u64>,
) -> Option<(EntityKind, u64)> {
    rx.changed().await.ok()?;
    let revision = *rx.borrow_and_update();
    Some((kind, revision))
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
