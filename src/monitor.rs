//! Periodic mailbox monitoring.
//!
//! [`PeriodicMonitor`] owns the repeating-timer lifecycle: on each tick it
//! pulls a fresh reading from its [`SampleSource`], delivers it to its
//! [`NotificationSink`] and stores it as the last known sample. The timer
//! is a spawned tokio task; its `JoinHandle` is the cancelable handle.

use crate::config::MonitorConfig;
use crate::error::Result;
use crate::notify::NotificationSink;
use crate::sensors::SampleSource;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

/// State shared between the monitor handle and its tick task.
struct MonitorState<S, N> {
    source: Mutex<S>,
    sink: N,
    last_sample: Mutex<f64>,
}

impl<S: SampleSource, N: NotificationSink> MonitorState<S, N> {
    /// One sample-produce-and-notify cycle.
    ///
    /// The sink always receives the freshly produced sample, never the
    /// stored previous one. A source failure skips delivery for this tick;
    /// a sink failure is logged. Neither stops the timer.
    fn tick(&self) {
        let sample = match self.source.lock().sample() {
            Ok(sample) => sample,
            Err(e) => {
                error!("Sample source failed, skipping this tick: {e}");
                return;
            }
        };
        info!("Mailbox state changed - light level: {sample:.2}");
        if let Err(e) = self.sink.notify(sample) {
            warn!("Notification sink failed: {e}");
        }
        *self.last_sample.lock() = sample;
    }
}

/// Monitors the light level inside an IoT enabled snail mailbox to detect
/// when the mailbox door has been opened.
///
/// At most one timer task is active per monitor instance: `start()` while
/// already running is a no-op, so handles cannot leak. `stop()` is
/// idempotent. Ticks never overlap; a single task runs them and the tick
/// body is synchronous.
pub struct PeriodicMonitor<S, N> {
    poll_interval: Duration,
    state: Arc<MonitorState<S, N>>,
    task: Option<JoinHandle<()>>,
}

impl<S, N> PeriodicMonitor<S, N>
where
    S: SampleSource + 'static,
    N: NotificationSink + 'static,
{
    /// Create a monitor from a validated configuration and its two
    /// collaborators. Fails with [`crate::MonitorError::Configuration`] if
    /// the poll interval is zero.
    pub fn new(config: &MonitorConfig, source: S, sink: N) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            poll_interval: config.poll_interval(),
            state: Arc::new(MonitorState {
                source: Mutex::new(source),
                sink,
                last_sample: Mutex::new(0.0),
            }),
            task: None,
        })
    }

    /// Start monitoring. No-op if the monitor is already running.
    pub fn start(&mut self) {
        if self.is_running() {
            debug!("Monitoring already active, ignoring start request");
            return;
        }
        info!("Starting monitoring of mailbox...");
        let state = self.state.clone();
        let period = self.poll_interval;
        // The timer epoch is this call, not the task's first poll: build
        // the interval here and move it into the task. First tick fires one
        // full interval after start, matching the repeating timer this
        // monitor replaces. Late ticks are delayed rather than bursted.
        let mut timer = interval_at(Instant::now() + period, period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.task = Some(tokio::spawn(async move {
            loop {
                timer.tick().await;
                state.tick();
            }
        }));
    }

    /// Stop monitoring. Safe to call repeatedly; only the call that
    /// actually cancels the timer logs.
    pub fn stop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        task.abort();
        info!("Mailbox monitoring stopped...");
    }

    /// Whether the timer task is currently active.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// The most recently produced sample (0.0 before the first tick).
    pub fn last_sample(&self) -> f64 {
        *self.state.last_sample.lock()
    }
}

impl<S, N> Drop for PeriodicMonitor<S, N> {
    fn drop(&mut self) {
        // Dropping without stop() must not leak the timer task.
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
