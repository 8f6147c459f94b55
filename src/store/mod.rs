//! Observable position state for dashboard consumers.
//!
//! `positions` and `usdt_balance` are published together as one snapshot, so a
//! subscriber can never see one value from a fetch paired with the other from a
//! different fetch or a reset.
//!
//! Overlapping `refresh_positions` calls are not serialized: each publishes its
//! own result when it finishes, and the last one to finish wins.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::time::interval;
use tracing::{error, info};

use crate::api::{SpotResponse, SpotSource};
use crate::error::Error;
use crate::models::Position;

/// Values exposed to the UI.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PositionsSnapshot {
    pub positions: Vec<Position>,
    pub usdt_balance: f64,
}

/// Result of one refresh attempt before it is applied to the store.
#[derive(Debug)]
pub enum RefreshOutcome {
    Success(SpotResponse),
    Failure(Error),
}

impl RefreshOutcome {
    /// State the store should hold after this outcome.
    pub fn into_snapshot(self) -> PositionsSnapshot {
        match self {
            RefreshOutcome::Success(spot) => PositionsSnapshot {
                positions: spot.positions,
                usdt_balance: spot.usdt,
            },
            RefreshOutcome::Failure(_) => PositionsSnapshot::default(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RefreshOutcome::Success(_))
    }
}

impl From<crate::error::Result<SpotResponse>> for RefreshOutcome {
    fn from(result: crate::error::Result<SpotResponse>) -> Self {
        match result {
            Ok(spot) => RefreshOutcome::Success(spot),
            Err(e) => RefreshOutcome::Failure(e),
        }
    }
}

/// Latest spot positions and balance, refreshed from a `SpotSource`.
pub struct PositionStore<S> {
    source: S,
    state: watch::Sender<PositionsSnapshot>,
}

impl<S: SpotSource> PositionStore<S> {
    /// Create an empty store backed by `source`.
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(PositionsSnapshot::default());
        Self { source, state }
    }

    /// Reload from the source and replace the stored state.
    ///
    /// Failures are logged and leave the store empty. They are not returned.
    pub async fn refresh_positions(&self) {
        let outcome = RefreshOutcome::from(self.source.load_spot_data().await);

        match &outcome {
            RefreshOutcome::Success(spot) => info!(
                positions = spot.positions.len(),
                usdt = spot.usdt,
                "Refreshed positions"
            ),
            RefreshOutcome::Failure(e) => error!(error = %e, "Failed to refresh positions"),
        }

        self.replace_all(outcome.into_snapshot());
    }

    /// Refresh now and then once per `period` until `shutdown` resolves.
    ///
    /// Shutdown cuts the wait between refreshes short; a refresh already in
    /// flight still completes. Panics if `period` is zero.
    pub async fn refresh_every<F>(&self, period: Duration, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = interval(period);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                biased;
                _ = &mut shutdown => break,
                _ = ticker.tick() => self.refresh_positions().await,
            }
        }
    }

    fn replace_all(&self, snapshot: PositionsSnapshot) {
        self.state.send_replace(snapshot);
    }
}

impl<S> PositionStore<S> {
    /// Copy of the current state.
    pub fn snapshot(&self) -> PositionsSnapshot {
        self.state.borrow().clone()
    }

    pub fn positions(&self) -> Vec<Position> {
        self.state.borrow().positions.clone()
    }

    pub fn usdt_balance(&self) -> f64 {
        self.state.borrow().usdt_balance
    }

    /// Read-only handle notified after every refresh.
    pub fn subscribe(&self) -> watch::Receiver<PositionsSnapshot> {
        self.state.subscribe()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
