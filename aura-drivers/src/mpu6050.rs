//! InvenSense MPU-6050 motion sensor driver
//!
//! Six-axis accelerometer/gyroscope. The data registers already hold
//! signed 16-bit big-endian counts, so there is no compensation step;
//! one burst read maps directly to the published axes.

use aura_core::traits::{
    AxisTriple, BusError, BusTransport, Measurement, MotionSample, SensorDriver, SensorError,
};

/// MPU-6050 register addresses
pub mod reg {
    /// Gyroscope full-scale range select
    pub const GYRO_CONFIG: u8 = 0x1B;
    /// Accelerometer full-scale range select
    pub const ACCEL_CONFIG: u8 = 0x1C;
    /// Start of the 14-byte accel/temperature/gyro data burst
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    /// Power management; clearing it wakes the chip
    pub const PWR_MGMT_1: u8 = 0x6B;
    /// Chip identity
    pub const WHO_AM_I: u8 = 0x75;
}

/// Expected identity register value
pub const DEVICE_ID: u8 = 0x68;

/// Accel (6) + die temperature (2) + gyro (6) bytes
const DATA_BURST_LEN: usize = 14;

/// MPU-6050 driver over any bus transport
#[derive(Debug)]
pub struct Mpu6050<B> {
    bus: B,
}

impl<B: BusTransport> Mpu6050<B> {
    /// Probe and wake the sensor
    ///
    /// The chip powers up asleep; clearing PWR_MGMT_1 starts conversions.
    /// Range selects are written to their defaults (±2 g, ±250 °/s) so
    /// the meaning of the raw counts does not depend on reset state.
    pub fn init(mut bus: B) -> Result<Self, BusError> {
        let found = bus.read_register(reg::WHO_AM_I)?;
        if found != DEVICE_ID {
            return Err(BusError::IdentityMismatch {
                expected: DEVICE_ID,
                found,
            });
        }

        bus.write_register(reg::PWR_MGMT_1, 0x00)?;
        bus.write_register(reg::ACCEL_CONFIG, 0x00)?;
        bus.write_register(reg::GYRO_CONFIG, 0x00)?;

        Ok(Self { bus })
    }
}

fn axis(data: &[u8], offset: usize) -> i16 {
    i16::from_be_bytes([data[offset], data[offset + 1]])
}

impl<B: BusTransport> SensorDriver for Mpu6050<B> {
    fn sample(&mut self) -> Result<Measurement, SensorError> {
        let mut data = [0u8; DATA_BURST_LEN];
        self.bus.read_burst(reg::ACCEL_XOUT_H, &mut data)?;

        // Bytes 6..8 are the die-temperature pair, which is not published.
        let accel = AxisTriple {
            x: axis(&data, 0),
            y: axis(&data, 2),
            z: axis(&data, 4),
        };
        let gyro = AxisTriple {
            x: axis(&data, 8),
            y: axis(&data, 10),
            z: axis(&data, 12),
        };

        Ok(Measurement::Motion(MotionSample { accel, gyro }))
    }
}
