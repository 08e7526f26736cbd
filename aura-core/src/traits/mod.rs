//! Hardware abstraction traits
//!
//! These traits define the interfaces between core logic and hardware
//! implementations, allowing the acquisition pipeline to be tested with
//! scripted doubles on the host.

pub mod bus;
pub mod sensor;

pub use bus::{BusError, BusTransport};
pub use sensor::{
    AxisTriple, EnvironmentSample, Measurement, MotionSample, SensorDriver, SensorError,
};
