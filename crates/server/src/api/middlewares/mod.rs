mod tracing;

pub use self::tracing::{initialize_telemetry, TelemetryError};
