//! Virtual Mailbox Monitor library.
//!
//! Monitors the light level inside an IoT enabled snail mailbox to detect
//! when the mailbox door has been opened. A [`monitor::PeriodicMonitor`]
//! owns a repeating timer, samples a pluggable light source on each tick
//! and forwards each reading to a pluggable notification sink.

pub mod config;
pub mod error;
pub mod monitor;
pub mod notify;
pub mod sensors;

pub use config::MonitorConfig;
pub use error::{MonitorError, Result};
pub use monitor::PeriodicMonitor;
pub use notify::{MailNotifier, NotificationSink};
pub use sensors::{MockLightSensor, SampleSource};
