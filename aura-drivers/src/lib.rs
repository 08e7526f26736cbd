//! Sensor drivers for Aura sensor node firmware
//!
//! Implementations of the core `SensorDriver` trait for the supported
//! chips, plus the adapter that exposes an `embedded-hal` I2C bus as the
//! core `BusTransport`. Everything is testable on the host against a
//! scripted bus.

#![no_std]
#![deny(unsafe_code)]

pub mod bme280;
pub mod bus;
pub mod mpu6050;

#[cfg(test)]
pub(crate) mod testutil;
