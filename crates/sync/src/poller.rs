// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic refresh driver.
//!
//! The poller is either idle or polling. While polling, a background task
//! fires one refresh per tick, immediately on start and then once per
//! interval, plus on demand through [`Poller::trigger`]. Each refresh runs
//! as its own task, so a slow backend never delays the next tick and a
//! refresh already in flight at shutdown still completes.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Something the poller can refresh.
pub trait Refresh: Send + Sync + 'static {
    fn poll_tick(&self) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    Idle,
    Polling,
}

struct Running {
    cancel_token: CancellationToken,
    trigger: Arc<Notify>,
    handle: JoinHandle<()>,
}

pub struct Poller {
    target: Arc<dyn Refresh>,
    interval: Duration,
    running: Mutex<Option<Running>>,
}

impl Poller {
    pub fn new(target: Arc<dyn Refresh>, interval: Duration) -> Self {
        Poller {
            target,
            interval,
            running: Mutex::new(None),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn state(&self) -> PollerState {
        match self.running().as_ref() {
            Some(running) if !running.handle.is_finished() => PollerState::Polling,
            _ => PollerState::Idle,
        }
    }

    /// Moves from idle to polling. Returns false if already polling.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self) -> bool {
        let mut running = self.running();
        if running.as_ref().is_some_and(|r| !r.handle.is_finished()) {
            return false;
        }

        let cancel_token = CancellationToken::new();
        let trigger = Arc::new(Notify::new());
        let handle = tokio::spawn(poll_loop(
            Arc::clone(&self.target),
            self.interval,
            cancel_token.clone(),
            Arc::clone(&trigger),
        ));
        *running = Some(Running {
            cancel_token,
            trigger,
            handle,
        });
        tracing::info!(interval_ms = self.interval.as_millis() as u64, "poller started");
        true
    }

    /// Requests an immediate tick. Returns false while idle.
    pub fn trigger(&self) -> bool {
        match self.running().as_ref() {
            Some(running) if !running.handle.is_finished() => {
                running.trigger.notify_one();
                true
            }
            _ => false,
        }
    }

    /// Moves to idle. When this returns no further tick will fire.
    /// Calling it while idle does nothing.
    pub async fn shutdown(&self) {
        let running = self.running().take();
        let Some(running) = running else {
            return;
        };
        running.cancel_token.cancel();
        if let Err(e) = running.handle.await {
            tracing::warn!(error = %e, "poll loop ended abnormally");
        }
        tracing::info!("poller stopped");
    }

    fn running(&self) -> MutexGuard<'_, Option<Running>> {
        self.running.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        if let Some(running) = self.running().take() {
            running.cancel_token.cancel();
            running.handle.abort();
        }
    }
}

async fn poll_loop(
    target: Arc<dyn Refresh>,
    interval: Duration,
    cancel_token: CancellationToken,
    trigger: Arc<Notify>,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel_token.cancelled() => break,
            _ = ticker.tick() => {}
            _ = trigger.notified() => {}
        }

        let target = Arc::clone(&target);
        tokio::spawn(async move {
            target.poll_tick().await;
        });
    }
}

#[cfg(test)]
#[path = "poller_tests.rs"]
mod tests;
