//! Board-agnostic core logic for Aura sensor node firmware
//!
//! This crate contains all acquisition and telemetry logic that does not
//! depend on specific hardware:
//!
//! - Bus and sensor abstraction traits
//! - Telemetry attribute registry with subscriber-gated notifications
//! - The periodic sample-compensate-publish cycle
//! - Node configuration types
//!
//! All code is `no_std` compatible and testable on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod pipeline;
pub mod telemetry;
pub mod traits;

#[cfg(test)]
pub(crate) mod testutil;
