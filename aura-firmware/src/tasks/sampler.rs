//! Periodic sample-compensate-publish task
//!
//! One task owns the sensor, the bus underneath it, and the attribute
//! registry, so cycles can never overlap and a failed read leaves the
//! registry untouched until the next tick.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_time::{Duration, Ticker};

use aura_core::pipeline::run_cycle;
use aura_core::telemetry::{AttributeId, NotificationSink, TelemetryRegistry, MAX_VALUE_LEN};
use aura_core::traits::{BusError, Measurement};
use aura_drivers::bus::I2cTransport;

use crate::channels::{Notification, NOTIFICATIONS, SUBSCRIPTION_EVENTS};

/// The node's single I2C bus, owned by the active sensor
pub type Bus = I2cTransport<I2c<'static, Blocking>>;

#[cfg(feature = "sensor-bme280")]
pub type ActiveSensor = aura_drivers::bme280::Bme280<Bus>;
#[cfg(feature = "sensor-mpu6050")]
pub type ActiveSensor = aura_drivers::mpu6050::Mpu6050<Bus>;

/// Run the startup contract for the configured sensor variant
pub fn init_sensor(bus: Bus) -> Result<ActiveSensor, BusError> {
    #[cfg(feature = "sensor-bme280")]
    return aura_drivers::bme280::Bme280::init(bus);
    #[cfg(feature = "sensor-mpu6050")]
    return aura_drivers::mpu6050::Mpu6050::init(bus);
}

/// Forwards notifications to the telemetry channel
struct ChannelSink;

impl NotificationSink for ChannelSink {
    fn notify(&mut self, id: AttributeId, payload: &[u8]) {
        let mut bytes = [0u8; MAX_VALUE_LEN];
        bytes[..payload.len()].copy_from_slice(payload);
        // Best effort: a backed-up queue means nothing is draining it,
        // which is equivalent to no subscriber.
        let _ = NOTIFICATIONS.try_send(Notification {
            id,
            len: payload.len(),
            bytes,
        });
    }
}

/// Sampler task - one acquisition cycle per tick
#[embassy_executor::task]
pub async fn sampler_task(mut sensor: ActiveSensor, period_ms: u64) {
    info!("Sampler task started ({} ms period)", period_ms);

    let mut registry = TelemetryRegistry::new();
    let mut sink = ChannelSink;
    let mut ticker = Ticker::every(Duration::from_millis(period_ms));

    loop {
        ticker.next().await;

        // Apply subscription changes queued since the last cycle.
        while let Ok(event) = SUBSCRIPTION_EVENTS.try_receive() {
            info!(
                "Subscription change: {:?} -> {}",
                event.attribute,
                if event.enabled { "on" } else { "off" }
            );
            registry.set_subscription(event.attribute, event.enabled);
        }

        match run_cycle(&mut sensor, &mut registry, &mut sink) {
            Ok(Measurement::Environment(env)) => {
                info!(
                    "Temp: {}.{}°C | Humidity: {}.{}% | Pressure: {} Pa",
                    env.centi_celsius / 100,
                    (env.centi_celsius % 100).unsigned_abs(),
                    env.centi_percent / 100,
                    env.centi_percent % 100,
                    env.pascals
                );
            }
            Ok(Measurement::Motion(motion)) => {
                info!(
                    "Accel: [{}, {}, {}] | Gyro: [{}, {}, {}]",
                    motion.accel.x,
                    motion.accel.y,
                    motion.accel.z,
                    motion.gyro.x,
                    motion.gyro.y,
                    motion.gyro.z
                );
            }
            Err(e) => {
                // Cycle abandoned; the next tick starts fresh.
                warn!("Sample cycle failed: {:?}", e);
            }
        }
    }
}
