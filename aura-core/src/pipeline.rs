//! The sample-compensate-publish cycle
//!
//! One cycle per scheduler tick: acquire a sample, then publish every
//! attribute of the active sensor family. A failed acquisition abandons
//! the whole cycle with zero attribute mutations; the caller just waits
//! for the next tick. There is no retry and no backlog.

use crate::telemetry::{AttributeId, AttributeValue, NotificationSink, TelemetryRegistry};
use crate::traits::sensor::{Measurement, SensorDriver, SensorError};

/// Run one acquisition cycle
///
/// Publishes only after the sample succeeds, so the registry never holds
/// a partially updated cycle. Returns the measurement for diagnostics.
pub fn run_cycle<D, S>(
    sensor: &mut D,
    registry: &mut TelemetryRegistry,
    sink: &mut S,
) -> Result<Measurement, SensorError>
where
    D: SensorDriver,
    S: NotificationSink,
{
    let measurement = sensor.sample()?;

    match measurement {
        Measurement::Environment(env) => {
            registry.publish(
                AttributeId::Temperature,
                AttributeValue::Signed16(env.centi_celsius),
                sink,
            );
            registry.publish(
                AttributeId::Humidity,
                AttributeValue::Unsigned16(env.centi_percent),
                sink,
            );
            registry.publish(
                AttributeId::Pressure,
                AttributeValue::Unsigned32(env.pascals),
                sink,
            );
        }
        Measurement::Motion(motion) => {
            registry.publish(
                AttributeId::Acceleration,
                AttributeValue::Vector(motion.accel),
                sink,
            );
            registry.publish(
                AttributeId::AngularRate,
                AttributeValue::Vector(motion.gyro),
                sink,
            );
        }
    }

    Ok(measurement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::TelemetryRegistry;
    use crate::testutil::{RecordingSink, ScriptedSensor};
    use crate::traits::bus::BusError;
    use crate::traits::sensor::{AxisTriple, EnvironmentSample, MotionSample};

    fn environment() -> Measurement {
        Measurement::Environment(EnvironmentSample {
            centi_celsius: 2508,
            centi_percent: 6841,
            pascals: 100653,
        })
    }

    fn motion() -> Measurement {
        Measurement::Motion(MotionSample {
            accel: AxisTriple { x: 1, y: 2, z: 3 },
            gyro: AxisTriple { x: -1, y: -2, z: -3 },
        })
    }

    #[test]
    fn environment_cycle_publishes_all_three_attributes() {
        let mut sensor = ScriptedSensor::new(Ok(environment()));
        let mut registry = TelemetryRegistry::new();
        let mut sink = RecordingSink::default();

        run_cycle(&mut sensor, &mut registry, &mut sink).unwrap();

        assert_eq!(registry.read(AttributeId::Temperature), &2508i16.to_le_bytes());
        assert_eq!(registry.read(AttributeId::Humidity), &6841u16.to_le_bytes());
        assert_eq!(registry.read(AttributeId::Pressure), &100653u32.to_le_bytes());
        // Motion attributes stay untouched on an environmental node.
        assert!(registry.read(AttributeId::Acceleration).is_empty());
        assert!(registry.read(AttributeId::AngularRate).is_empty());
    }

    #[test]
    fn motion_cycle_publishes_both_vectors() {
        let mut sensor = ScriptedSensor::new(Ok(motion()));
        let mut registry = TelemetryRegistry::new();
        let mut sink = RecordingSink::default();

        run_cycle(&mut sensor, &mut registry, &mut sink).unwrap();

        assert_eq!(
            registry.read(AttributeId::Acceleration),
            [0x00, 0x01, 0x00, 0x02, 0x00, 0x03]
        );
        assert_eq!(
            registry.read(AttributeId::AngularRate),
            [0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFD]
        );
    }

    #[test]
    fn failed_sample_leaves_registry_untouched() {
        let mut sensor = ScriptedSensor::new(Err(SensorError::Bus(BusError::Transaction)));
        let mut registry = TelemetryRegistry::new();
        let mut sink = RecordingSink::default();
        registry.set_subscription(AttributeId::Temperature, true);

        let result = run_cycle(&mut sensor, &mut registry, &mut sink);

        assert_eq!(result, Err(SensorError::Bus(BusError::Transaction)));
        for id in AttributeId::ALL {
            assert!(registry.read(id).is_empty());
        }
        assert!(sink.notifications.is_empty());
    }

    #[test]
    fn subscribed_environment_cycle_notifies_once_per_attribute() {
        let mut sensor = ScriptedSensor::new(Ok(environment()));
        let mut registry = TelemetryRegistry::new();
        let mut sink = RecordingSink::default();
        registry.set_subscription(AttributeId::Temperature, true);
        registry.set_subscription(AttributeId::Pressure, true);

        run_cycle(&mut sensor, &mut registry, &mut sink).unwrap();

        let mut ids = sink.notifications.iter().map(|(id, _)| *id);
        assert_eq!(ids.next(), Some(AttributeId::Temperature));
        assert_eq!(ids.next(), Some(AttributeId::Pressure));
        assert_eq!(ids.next(), None);
    }

    #[test]
    fn cycle_samples_exactly_once() {
        let mut sensor = ScriptedSensor::new(Ok(environment()));
        let mut registry = TelemetryRegistry::new();
        let mut sink = RecordingSink::default();

        run_cycle(&mut sensor, &mut registry, &mut sink).unwrap();

        assert_eq!(sensor.samples, 1);
    }
}
