//! Inter-task communication channels
//!
//! The telemetry channel (the wireless transport) is external to this
//! firmware: it drains `NOTIFICATIONS` and produces `SUBSCRIPTION_EVENTS`
//! from remote subscribe/unsubscribe requests. Bounded embassy-sync
//! channels keep the two contexts decoupled from the sampler.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use aura_core::telemetry::{AttributeId, MAX_VALUE_LEN};

/// Queue depth for outbound notifications
const NOTIFY_QUEUE_SIZE: usize = 8;

/// Queue depth for inbound subscription changes
const SUBSCRIPTION_QUEUE_SIZE: usize = 8;

/// One encoded push notification bound for the telemetry channel
#[derive(Clone, Copy)]
pub struct Notification {
    pub id: AttributeId,
    pub len: usize,
    pub bytes: [u8; MAX_VALUE_LEN],
}

impl Notification {
    pub fn payload(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// A remote observer subscribed to or unsubscribed from an attribute
#[derive(Clone, Copy)]
pub struct SubscriptionEvent {
    pub attribute: AttributeId,
    pub enabled: bool,
}

/// Sampler to telemetry channel, best effort
pub static NOTIFICATIONS: Channel<CriticalSectionRawMutex, Notification, NOTIFY_QUEUE_SIZE> =
    Channel::new();

/// Telemetry channel to sampler, applied between cycles
pub static SUBSCRIPTION_EVENTS: Channel<
    CriticalSectionRawMutex,
    SubscriptionEvent,
    SUBSCRIPTION_QUEUE_SIZE,
> = Channel::new();
