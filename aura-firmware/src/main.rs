//! Aura - Environmental Sensor Node Firmware
//!
//! Main firmware binary for RP2040-based sensor nodes. Samples the
//! configured I2C sensor at a fixed period and publishes compensated
//! readings as subscriber-gated telemetry attributes.
//!
//! Named after the Greek "aura" (αὔρα) meaning "breeze" - the air this
//! node measures, one fixed-period sample at a time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use aura_core::config::{NodeConfig, SensorKind};
use aura_drivers::bus::I2cTransport;

mod channels;
mod tasks;

#[cfg(all(feature = "sensor-bme280", feature = "sensor-mpu6050"))]
compile_error!("enable exactly one of sensor-bme280 / sensor-mpu6050");
#[cfg(not(any(feature = "sensor-bme280", feature = "sensor-mpu6050")))]
compile_error!("enable exactly one of sensor-bme280 / sensor-mpu6050");

#[cfg(feature = "sensor-bme280")]
const ACTIVE_SENSOR: SensorKind = SensorKind::Bme280;
#[cfg(feature = "sensor-mpu6050")]
const ACTIVE_SENSOR: SensorKind = SensorKind::Mpu6050;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Aura firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let mut config = NodeConfig::for_sensor(ACTIVE_SENSOR);
    let _ = config.device_name.push_str("Aura Sensor");
    info!(
        "Active sensor: {:?} at 0x{:x}, {} ms period",
        config.sensor,
        config.bus_address,
        config.sensor.sample_period_ms()
    );

    // I2C0 on the standard SDA=GPIO4 / SCL=GPIO5 pins
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, I2cConfig::default());
    let transport = I2cTransport::new(i2c, config.bus_address);

    // Startup contract: identity check, calibration load, and mode
    // configuration must all succeed before the pipeline starts.
    let sensor = match tasks::init_sensor(transport) {
        Ok(sensor) => sensor,
        Err(e) => {
            error!("Sensor startup failed: {:?}", e);
            panic!("sensor startup failed");
        }
    };
    info!("Sensor initialized");

    // Spawn tasks
    spawner
        .spawn(tasks::sampler_task(
            sensor,
            config.sensor.sample_period_ms(),
        ))
        .unwrap();
    spawner.spawn(tasks::telemetry_task()).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
