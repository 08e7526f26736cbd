//! Telemetry channel egress task
//!
//! Drains the notification queue on behalf of the wireless transport.
//! The transport itself (advertising, connections, observer management)
//! lives outside this firmware; it takes over this hand-off point and
//! produces `SUBSCRIPTION_EVENTS` from remote subscribe requests.

use defmt::*;

use crate::channels::NOTIFICATIONS;

#[embassy_executor::task]
pub async fn telemetry_task() {
    info!("Telemetry task started");

    loop {
        let notification = NOTIFICATIONS.receive().await;
        debug!(
            "notify {:?}: {=[u8]:x}",
            notification.id,
            notification.payload()
        );
    }
}
