//! Telemetry attribute table and notification gating
//!
//! The node exposes its readings as a small table of remotely observable
//! attributes. Observers read the last published value at any time;
//! attributes that have a subscriber additionally push a notification on
//! every publish. The transport that carries reads and notifications is
//! opaque to this crate and attaches through [`NotificationSink`].

pub mod attribute;
pub mod registry;

pub use attribute::{AttributeId, AttributeValue, ByteOrder, TelemetryAttribute, MAX_VALUE_LEN};
pub use registry::TelemetryRegistry;

/// Outbound seam to the telemetry channel
///
/// Notifications are best-effort: a channel with no connected observer
/// drops them silently, so `notify` has no error path.
pub trait NotificationSink {
    fn notify(&mut self, id: AttributeId, payload: &[u8]);
}
