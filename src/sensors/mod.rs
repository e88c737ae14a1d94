//! Light-level sources for the mailbox monitor.
//!
//! The monitor pulls one reading per tick from a [`SampleSource`]. The only
//! bundled source is a mock sensor; real hardware would plug in here.

pub mod light;

pub use light::MockLightSensor;

use crate::error::Result;

/// Produces the next raw light-level reading.
///
/// Readings encode the mailbox door state: non-negative means open,
/// negative means closed. Implementations must be non-blocking and return
/// a finite value.
pub trait SampleSource: Send {
    fn sample(&mut self) -> Result<f64>;
}
