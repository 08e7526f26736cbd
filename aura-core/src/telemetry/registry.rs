//! Subscriber-gated attribute registry

use super::attribute::{AttributeId, AttributeValue, TelemetryAttribute};
use super::NotificationSink;

/// Table of all published attributes
///
/// `publish` stores the encoded value and raises exactly one notification
/// when the attribute has a subscriber, none otherwise. `read` always
/// reflects the last published value regardless of subscription state.
pub struct TelemetryRegistry {
    attributes: [TelemetryAttribute; AttributeId::ALL.len()],
}

impl TelemetryRegistry {
    pub const fn new() -> Self {
        Self {
            attributes: [
                TelemetryAttribute::new(AttributeId::Temperature),
                TelemetryAttribute::new(AttributeId::Humidity),
                TelemetryAttribute::new(AttributeId::Pressure),
                TelemetryAttribute::new(AttributeId::Acceleration),
                TelemetryAttribute::new(AttributeId::AngularRate),
            ],
        }
    }

    /// Last published encoded value (empty before the first publish)
    pub fn read(&self, id: AttributeId) -> &[u8] {
        self.attributes[id.index()].value()
    }

    /// Store a new value and notify the sink if a subscriber is attached
    pub fn publish<S: NotificationSink>(
        &mut self,
        id: AttributeId,
        value: AttributeValue,
        sink: &mut S,
    ) {
        let attr = &mut self.attributes[id.index()];
        attr.store(value);
        if attr.is_subscribed() {
            sink.notify(id, attr.value());
        }
    }

    /// Record a subscribe or unsubscribe from the telemetry channel
    ///
    /// Takes effect at the next publish; the stored value is untouched.
    pub fn set_subscription(&mut self, id: AttributeId, enabled: bool) {
        self.attributes[id.index()].set_subscribed(enabled);
    }

    pub fn is_subscribed(&self, id: AttributeId) -> bool {
        self.attributes[id.index()].is_subscribed()
    }
}

impl Default for TelemetryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
