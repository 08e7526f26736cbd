//! Embassy tasks

pub mod sampler;
pub mod telemetry;

pub use sampler::{init_sensor, sampler_task, ActiveSensor};
pub use telemetry::telemetry_task;
