//! Mock light sensor for the virtual mailbox.
//!
//! Simulates the light level inside the mailbox as the door swings between
//! open and closed. Depending on the sampling interval the door could be in
//! any position from fully closed to fully open, so the level varies from
//! reading to reading.

use super::SampleSource;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Simulated mailbox light sensor.
///
/// Alternates the sign of consecutive readings: after a non-negative level
/// (door open) the next reading is negative (door closed), and vice versa.
/// Levels are rounded to two decimals like the hardware it stands in for.
///
/// The generator is seeded at construction so sequences are reproducible
/// in tests.
pub struct MockLightSensor {
    rng: StdRng,
    last_level: f64,
}

impl MockLightSensor {
    /// Create a sensor with a fixed seed. Same seed, same reading sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            last_level: 0.0,
        }
    }

    /// Create a sensor seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            last_level: 0.0,
        }
    }
}

impl SampleSource for MockLightSensor {
    fn sample(&mut self) -> Result<f64> {
        // Levels are generated in whole hundredths. The closed branch
        // excludes zero so a closed reading is strictly negative and the
        // open/closed signal alternates on every single reading.
        let level = if self.last_level >= 0.0 {
            -f64::from(self.rng.gen_range(1..=100_u32)) / 100.0
        } else {
            f64::from(self.rng.gen_range(0..100_u32)) / 100.0
        };
        self.last_level = level;
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readings_alternate_sign() {
        let mut sensor = MockLightSensor::from_seed(42);
        let mut last = 0.0_f64;
        for _ in 0..200 {
            let level = sensor.sample().unwrap();
            if last >= 0.0 {
                assert!(level < 0.0, "expected closed after open, got {level}");
            } else {
                assert!(level >= 0.0, "expected open after closed, got {level}");
            }
            last = level;
        }
    }

    #[test]
    fn test_readings_stay_in_range() {
        let mut sensor = MockLightSensor::from_seed(7);
        for _ in 0..200 {
            let level = sensor.sample().unwrap();
            assert!((-1.0..1.0).contains(&level), "out of range: {level}");
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = MockLightSensor::from_seed(1234);
        let mut b = MockLightSensor::from_seed(1234);
        for _ in 0..50 {
            assert_eq!(a.sample().unwrap(), b.sample().unwrap());
        }
    }
}
