//! Shared doubles for host-side tests

use heapless::Vec;

use crate::telemetry::{AttributeId, NotificationSink, MAX_VALUE_LEN};
use crate::traits::sensor::{Measurement, SensorDriver, SensorError};

/// Sink that records every notification it receives
#[derive(Default)]
pub struct RecordingSink {
    pub notifications: Vec<(AttributeId, Vec<u8, MAX_VALUE_LEN>), 16>,
}

impl NotificationSink for RecordingSink {
    fn notify(&mut self, id: AttributeId, payload: &[u8]) {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(payload).unwrap();
        self.notifications.push((id, bytes)).unwrap();
    }
}

/// Sensor that returns a scripted result and counts sample calls
pub struct ScriptedSensor {
    pub result: Result<Measurement, SensorError>,
    pub samples: usize,
}

impl ScriptedSensor {
    pub fn new(result: Result<Measurement, SensorError>) -> Self {
        Self { result, samples: 0 }
    }
}

impl SensorDriver for ScriptedSensor {
    fn sample(&mut self) -> Result<Measurement, SensorError> {
        self.samples += 1;
        self.result
    }
}
