//! Node configuration types

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of the advertised device name
pub const MAX_NAME_LEN: usize = 24;

/// Which sensor variant the node is built around
///
/// Exactly one sensor sits on the bus; the variant fixes the sample
/// period and the default bus address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorKind {
    /// Bosch BME280 environmental sensor (temperature/humidity/pressure)
    Bme280,
    /// InvenSense MPU-6050 motion sensor (accelerometer/gyroscope)
    Mpu6050,
}

impl SensorKind {
    /// Fixed sample period for this variant, in milliseconds
    pub const fn sample_period_ms(self) -> u64 {
        match self {
            SensorKind::Bme280 => 2000,
            SensorKind::Mpu6050 => 500,
        }
    }

    /// Default 7-bit bus address of the sensor
    pub const fn default_bus_address(self) -> u8 {
        match self {
            SensorKind::Bme280 => 0x76,
            SensorKind::Mpu6050 => 0x68,
        }
    }
}

/// Node-level configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeConfig {
    /// Name advertised on the telemetry channel
    pub device_name: String<MAX_NAME_LEN>,
    /// Active sensor variant
    pub sensor: SensorKind,
    /// 7-bit bus address of the sensor
    pub bus_address: u8,
}

impl NodeConfig {
    /// Configuration for a node built around the given sensor
    pub fn for_sensor(sensor: SensorKind) -> Self {
        Self {
            device_name: String::new(),
            sensor,
            bus_address: sensor.default_bus_address(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_periods_per_variant() {
        assert_eq!(SensorKind::Bme280.sample_period_ms(), 2000);
        assert_eq!(SensorKind::Mpu6050.sample_period_ms(), 500);
    }

    #[test]
    fn default_addresses_per_variant() {
        assert_eq!(SensorKind::Bme280.default_bus_address(), 0x76);
        assert_eq!(SensorKind::Mpu6050.default_bus_address(), 0x68);
    }

    #[test]
    fn for_sensor_picks_matching_address() {
        let config = NodeConfig::for_sensor(SensorKind::Mpu6050);
        assert_eq!(config.sensor, SensorKind::Mpu6050);
        assert_eq!(config.bus_address, 0x68);
        assert!(config.device_name.is_empty());
    }
}
