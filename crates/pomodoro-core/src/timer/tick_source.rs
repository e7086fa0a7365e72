//! Tick sources.
//!
//! The engine subscribes to a tick source while the countdown is running and
//! unsubscribes on pause, at every phase boundary, on reset and when dropped.
//! The source itself never touches timer state; whoever owns the loop pulls a
//! tick from it and calls `TimerEngine::tick()`.

use std::time::Duration;

use tokio::time::{Instant, Interval};

/// Default tick cadence.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

pub trait TickSource {
    /// Start delivering ticks. Subscribing twice is a no-op.
    fn subscribe(&mut self);
    /// Stop delivering ticks. Unsubscribing while idle is a no-op.
    fn unsubscribe(&mut self);
    fn is_subscribed(&self) -> bool;
}

/// Tick source driven by hand.
///
/// Records how often it was acquired and released so the pairing can be
/// asserted without any wall-clock waiting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualTickSource {
    subscribed: bool,
    subscriptions: usize,
    cancellations: usize,
}

impl ManualTickSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the source went from idle to subscribed.
    pub fn subscriptions(&self) -> usize {
        self.subscriptions
    }

    /// Number of times the source went from subscribed to idle.
    pub fn cancellations(&self) -> usize {
        self.cancellations
    }
}

impl TickSource for ManualTickSource {
    fn subscribe(&mut self) {
        if !self.subscribed {
            self.subscribed = true;
            self.subscriptions += 1;
        }
    }

    fn unsubscribe(&mut self) {
        if self.subscribed {
            self.subscribed = false;
            self.cancellations += 1;
        }
    }

    fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}

/// Wall-clock tick source backed by a tokio interval.
///
/// The interval only exists while subscribed; dropping it on unsubscribe is
/// the cancellation. Must be subscribed from inside a tokio runtime.
#[derive(Debug)]
pub struct IntervalTickSource {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalTickSource {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Wait for the next tick.
    ///
    /// Never resolves while unsubscribed, so it can sit in a `select!` next
    /// to other event sources.
    pub async fn next_tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for IntervalTickSource {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl TickSource for IntervalTickSource {
    fn subscribe(&mut self) {
        if self.interval.is_none() {
            // First tick lands one full period after resuming.
            let start = Instant::now() + self.period;
            self.interval = Some(tokio::time::interval_at(start, self.period));
        }
    }

    fn unsubscribe(&mut self) {
        self.interval = None;
    }

    fn is_subscribed(&self) -> bool {
        self.interval.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_source_counts_pairs() {
        let mut ticks = ManualTickSource::new();
        ticks.subscribe();
        ticks.subscribe();
        assert!(ticks.is_subscribed());
        assert_eq!(ticks.subscriptions(), 1);

        ticks.unsubscribe();
        ticks.unsubscribe();
        assert!(!ticks.is_subscribed());
        assert_eq!(ticks.cancellations(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn interval_source_ticks_once_per_period() {
        let mut ticks = IntervalTickSource::default();
        ticks.subscribe();

        let started = Instant::now();
        ticks.next_tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD);
        ticks.next_tick().await;
        assert_eq!(started.elapsed(), TICK_PERIOD * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn unsubscribed_interval_never_ticks() {
        let mut ticks = IntervalTickSource::default();
        ticks.subscribe();
        ticks.unsubscribe();

        let waited = tokio::time::timeout(Duration::from_secs(10), ticks.next_tick()).await;
        assert!(waited.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn resubscribe_restarts_the_period() {
        let mut ticks = IntervalTickSource::default();
        ticks.subscribe();
        tokio::time::advance(Duration::from_millis(700)).await;
        ticks.unsubscribe();
        ticks.subscribe();

        let resumed = Instant::now();
        ticks.next_tick().await;
        assert_eq!(resumed.elapsed(), TICK_PERIOD);
    }
}
