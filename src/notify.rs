//! Notification sinks for delivered light-level samples.
//!
//! The monitor pushes every sample to a [`NotificationSink`]; the sink
//! decides what, if anything, to do with it. The bundled [`MailNotifier`]
//! announces new mail when the light level crosses the door-open threshold.

use crate::error::Result;
use log::info;
use std::sync::atomic::{AtomicU32, Ordering};

/// Consumer-side reaction to each new sample.
///
/// Implementations should not fail; if they can, the monitor isolates the
/// failure to the current tick and keeps running.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, light_level: f64) -> Result<()>;
}

/// Reference sink: announces mail when the door-open threshold is crossed.
///
/// Only levels strictly greater than zero trigger an announcement. A level
/// of exactly zero counts as "open" on the sensor side but does not
/// announce; the asymmetric boundary is kept as-is.
#[derive(Debug, Default)]
pub struct MailNotifier {
    announced: AtomicU32,
}

impl MailNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of announcements made so far.
    pub fn announcements(&self) -> u32 {
        self.announced.load(Ordering::SeqCst)
    }
}

impl NotificationSink for MailNotifier {
    fn notify(&self, light_level: f64) -> Result<()> {
        if light_level > 0.0 {
            info!("You've got mail! (light level: {light_level:.2})");
            self.announced.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }
}
