//! Sensor driver trait and sample types

use super::bus::BusError;

/// Errors from a sample attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus transaction failed mid-cycle
    Bus(BusError),
    /// The compensation math flagged the reading as not computable
    InvalidReading,
}

impl From<BusError> for SensorError {
    fn from(err: BusError) -> Self {
        SensorError::Bus(err)
    }
}

/// Three-axis reading in raw signed sensor counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisTriple {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

/// Compensated environmental sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EnvironmentSample {
    /// Temperature in hundredths of a degree Celsius
    pub centi_celsius: i16,
    /// Relative humidity in hundredths of a percent
    pub centi_percent: u16,
    /// Barometric pressure in pascals
    pub pascals: u32,
}

/// Motion sample in raw signed counts
///
/// Scaling to physical units depends on the configured full-scale
/// ranges and is left to the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionSample {
    pub accel: AxisTriple,
    pub gyro: AxisTriple,
}

/// One compensated sample, tagged with the producing sensor family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Measurement {
    Environment(EnvironmentSample),
    Motion(MotionSample),
}

/// A sensor producing tagged compensated samples
///
/// Construction is driver-specific and performs the startup contract
/// (identity check, calibration load, mode configuration), so a driver
/// value always holds everything its `sample` needs.
pub trait SensorDriver {
    /// Acquire and compensate one sample
    fn sample(&mut self) -> Result<Measurement, SensorError>;
}
