//! Bosch BME280 environmental sensor driver
//!
//! Combined temperature/humidity/pressure sensor on the shared I2C bus.
//! Raw 20-bit (temperature, pressure) and 16-bit (humidity) ADC values
//! are converted to physical units with the chip's factory trim values
//! using the vendor's integer fixed-point algorithm; there is no
//! floating point anywhere in the path.
//!
//! `init` runs the startup contract: identity check, calibration load,
//! measurement configuration. A constructed driver therefore always
//! holds a complete trim set.

pub mod calibration;
pub mod compensation;

pub use calibration::Calibration;
pub use compensation::{
    compensate_humidity, compensate_pressure, compensate_temperature, humidity_centi_percent,
    FineTemperature, TemperatureReading,
};

use aura_core::traits::{
    BusError, BusTransport, EnvironmentSample, Measurement, SensorDriver, SensorError,
};

/// BME280 register addresses
pub mod reg {
    /// Chip identity
    pub const ID: u8 = 0xD0;
    /// Humidity oversampling control; latched by the next CTRL_MEAS write
    pub const CTRL_HUM: u8 = 0xF2;
    /// Mode and temperature/pressure oversampling control
    pub const CTRL_MEAS: u8 = 0xF4;
    /// Standby time and IIR filter configuration
    pub const CONFIG: u8 = 0xF5;
    /// Start of the 8-byte pressure/temperature/humidity data burst
    pub const PRESS_MSB: u8 = 0xF7;
    /// Start of the 24-byte temperature/pressure trim block
    pub const CALIB_TP: u8 = 0x88;
    /// Lone dig_H1 trim byte
    pub const CALIB_H1: u8 = 0xA1;
    /// Start of the 7-byte humidity trim block (dig_H2..dig_H6)
    pub const CALIB_H2: u8 = 0xE1;
}

/// Expected identity register value
pub const CHIP_ID: u8 = 0x60;

/// Humidity oversampling x1
const CTRL_HUM_OSRS_X1: u8 = 0x01;
/// Normal mode, temperature and pressure oversampling x1
const CTRL_MEAS_NORMAL_OSRS_X1: u8 = 0x27;
/// 1000 ms standby, IIR filter off
const CONFIG_STANDBY_1000MS: u8 = 0xA0;

/// One parsed raw ADC burst
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    /// 20-bit pressure ADC value
    pub pressure: i32,
    /// 20-bit temperature ADC value
    pub temperature: i32,
    /// 16-bit humidity ADC value
    pub humidity: i32,
}

impl RawSample {
    /// Parse the 8-byte data burst starting at `reg::PRESS_MSB`
    ///
    /// Pressure and temperature are 20-bit values split across three
    /// registers (the third holds only the top nibble); humidity is a
    /// plain big-endian 16-bit pair.
    pub fn from_burst(data: &[u8; 8]) -> Self {
        Self {
            pressure: ((data[0] as i32) << 12) | ((data[1] as i32) << 4) | ((data[2] as i32) >> 4),
            temperature: ((data[3] as i32) << 12)
                | ((data[4] as i32) << 4)
                | ((data[5] as i32) >> 4),
            humidity: ((data[6] as i32) << 8) | (data[7] as i32),
        }
    }
}

/// BME280 driver over any bus transport
#[derive(Debug)]
pub struct Bme280<B> {
    bus: B,
    calibration: Calibration,
}

impl<B: BusTransport> Bme280<B> {
    /// Probe and configure the sensor
    ///
    /// Identity check, calibration load, then measurement configuration,
    /// in that order. Any failure is fatal to startup and propagates.
    pub fn init(mut bus: B) -> Result<Self, BusError> {
        let found = bus.read_register(reg::ID)?;
        if found != CHIP_ID {
            return Err(BusError::IdentityMismatch {
                expected: CHIP_ID,
                found,
            });
        }

        let calibration = Calibration::load(&mut bus)?;

        bus.write_register(reg::CTRL_HUM, CTRL_HUM_OSRS_X1)?;
        bus.write_register(reg::CTRL_MEAS, CTRL_MEAS_NORMAL_OSRS_X1)?;
        bus.write_register(reg::CONFIG, CONFIG_STANDBY_1000MS)?;

        Ok(Self { bus, calibration })
    }

    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Read one raw ADC burst
    pub fn read_raw(&mut self) -> Result<RawSample, BusError> {
        let mut data = [0u8; 8];
        self.bus.read_burst(reg::PRESS_MSB, &mut data)?;
        Ok(RawSample::from_burst(&data))
    }
}

impl<B: BusTransport> SensorDriver for Bme280<B> {
    fn sample(&mut self) -> Result<Measurement, SensorError> {
        let raw = self.read_raw()?;

        // Temperature first: pressure and humidity consume its
        // fine-resolution intermediate.
        let temperature = compensate_temperature(raw.temperature, &self.calibration);
        let pressure = compensate_pressure(raw.pressure, temperature.fine, &self.calibration);
        if pressure == 0 {
            // Sentinel for "not computable"; never published as data.
            return Err(SensorError::InvalidReading);
        }
        let humidity = compensate_humidity(raw.humidity, temperature.fine, &self.calibration);

        Ok(Measurement::Environment(EnvironmentSample {
            centi_celsius: temperature.centi_celsius as i16,
            centi_percent: humidity_centi_percent(humidity),
            pascals: pressure,
        }))
    }
}
