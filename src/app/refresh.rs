use std::{sync::Arc, time::Duration};

use anyhow::Result;
use log::{debug, error, info, warn};
use tokio::{
    sync::mpsc::UnboundedSender,
    time::{self, MissedTickBehavior},
};

use crate::{
    api::QuoteSource,
    app::{
        dashboard::{RefreshContext, SummaryCell, TableBody},
        table::{build_row, summarize},
    },
    models::{Quote, Summary},
};

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(15);

/// A finished fetch tagged with the sequence number it was started under.
pub type CycleResult = (u64, Result<Vec<Quote>>);

#[derive(Clone, Debug, PartialEq)]
pub enum CycleOutcome {
    Rendered(Summary),
    Failed,
    /// A newer cycle was already applied; this result was dropped.
    Stale,
}

/// Replaces the table body with one row per quote and writes both totals.
/// Totals are checked first, so an error leaves the context untouched.
pub fn render_quotes<B, C>(ctx: &mut RefreshContext<B, C>, quotes: &[Quote]) -> Result<Summary>
where
    B: TableBody,
    C: SummaryCell,
{
    let summary = summarize(quotes)?;

    let body = ctx.table_body_mut();
    body.clear();
    for quote in quotes {
        body.append_row(&build_row(quote));
    }

    ctx.average_value_sum_mut()
        .set_text(&summary.average_value_text());
    ctx.current_value_sum_mut()
        .set_text(&summary.current_value_text());

    Ok(summary)
}

/// Fetch-render-summarize cycle with single-flight scheduling.
pub struct RefreshLoop<S> {
    source: Arc<S>,
    interval: Duration,
    next_seq: u64,
    applied_seq: u64,
    in_flight: Option<u64>,
}

impl<S> RefreshLoop<S>
where
    S: QuoteSource + 'static,
{
    pub fn new(source: S, interval: Duration) -> Self {
        Self {
            source: Arc::new(source),
            interval,
            next_seq: 0,
            applied_seq: 0,
            in_flight: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Starts a cycle unless one is already running.
    pub fn try_begin(&mut self) -> Option<u64> {
        if let Some(seq) = self.in_flight {
            debug!("Refresh #{} still in flight, skipping trigger", seq);
            return None;
        }
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        Some(self.next_seq)
    }

    /// Applies a fetch result. On failure the context is left as it was.
    pub fn complete<B, C>(
        &mut self,
        seq: u64,
        result: Result<Vec<Quote>>,
        ctx: &mut RefreshContext<B, C>,
    ) -> CycleOutcome
    where
        B: TableBody,
        C: SummaryCell,
    {
        if self.in_flight == Some(seq) {
            self.in_flight = None;
        }

        if seq <= self.applied_seq {
            warn!(
                "Discarding refresh #{}, #{} was already rendered",
                seq, self.applied_seq
            );
            return CycleOutcome::Stale;
        }

        match result.and_then(|quotes| {
            let summary = render_quotes(ctx, &quotes)?;
            Ok((quotes.len(), summary))
        }) {
            Ok((count, summary)) => {
                self.applied_seq = seq;
                info!(
                    "Refresh #{} rendered {} quotes (average value {}, current value {})",
                    seq,
                    count,
                    summary.average_value_text(),
                    summary.current_value_text()
                );
                CycleOutcome::Rendered(summary)
            }
            Err(e) => {
                error!("Refresh #{} failed: {:?}", seq, e);
                CycleOutcome::Failed
            }
        }
    }

    /// Runs one full cycle in place. Returns `None` if a cycle is already running.
    pub async fn refresh_once<B, C>(
        &mut self,
        ctx: &mut RefreshContext<B, C>,
    ) -> Option<CycleOutcome>
    where
        B: TableBody,
        C: SummaryCell,
    {
        let seq = self.try_begin()?;
        let result = self.source.fetch_quotes().await;
        Some(self.complete(seq, result, ctx))
    }

    /// Starts a cycle on its own task and reports the result on `tx`.
    pub fn spawn_cycle(&mut self, tx: UnboundedSender<CycleResult>) -> Option<u64> {
        let seq = self.try_begin()?;
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let result = source.fetch_quotes().await;
            if tx.send((seq, result)).is_err() {
                debug!("Refresh #{} finished after the dashboard closed", seq);
            }
        });
        Some(seq)
    }

    /// Refreshes immediately, then once per interval, forever.
    pub async fn run<B, C, F>(&mut self, ctx: &mut RefreshContext<B, C>, mut after_cycle: F)
    where
        B: TableBody,
        C: SummaryCell,
        F: FnMut(&RefreshContext<B, C>, &CycleOutcome),
    {
        let mut ticker = time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;
            if let Some(outcome) = self.refresh_once(ctx).await {
                after_cycle(ctx, &outcome);
            }
        }
    }
}
