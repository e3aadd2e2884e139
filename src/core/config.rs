//! # Configuration
//!
//! The CLI surface is deliberately tiny: one optional positional argument
//! naming the device node. Everything else is a compiled-in default,
//! collapsed into a [`ResolvedConfig`] here so the rest of the crate never
//! reasons about fallbacks.

use std::time::Duration;

// ============================================================================
// Defaults
// ============================================================================

#[cfg(windows)]
pub const DEFAULT_DEVICE_PATH: &str = "COM1";
#[cfg(not(windows))]
pub const DEFAULT_DEVICE_PATH: &str = "/dev/ttyUSB0";

pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Read timeout on the serial handle. Bounds every blocking device
/// operation so the worker can observe shutdown between attempts.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1_000;

/// Buffered events before producers see backpressure (input pump) or
/// drops (worker notifications).
pub const EVENT_QUEUE_CAPACITY: usize = 64;

/// Placeholder worker timing: delay before the link reports active, and
/// how long it stays active before reporting idle.
pub const WORKER_SPINUP_MS: u64 = 1_500;
pub const WORKER_ACTIVE_WINDOW_MS: u64 = 3_000;

/// Status line shown while the worker reports the link active / idle.
pub const STATUS_ACTIVE: &str = "Device active";
pub const STATUS_IDLE: &str = "Device idle";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub device_path: String,
    pub baud_rate: u32,
    pub read_timeout: Duration,
    pub queue_capacity: usize,
    pub spinup_delay: Duration,
    pub active_window: Duration,
}

/// Collapse the override layers: defaults → CLI positional argument.
pub fn resolve(cli_device: Option<&str>) -> ResolvedConfig {
    let device_path = cli_device.unwrap_or(DEFAULT_DEVICE_PATH).to_string();

    ResolvedConfig {
        device_path,
        baud_rate: DEFAULT_BAUD_RATE,
        read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
        queue_capacity: EVENT_QUEUE_CAPACITY,
        spinup_delay: Duration::from_millis(WORKER_SPINUP_MS),
        active_window: Duration::from_millis(WORKER_ACTIVE_WINDOW_MS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_no_cli_path() {
        let resolved = resolve(None);
        assert_eq!(resolved.device_path, DEFAULT_DEVICE_PATH);
        assert_eq!(resolved.baud_rate, DEFAULT_BAUD_RATE);
        assert_eq!(resolved.queue_capacity, EVENT_QUEUE_CAPACITY);
    }

    #[test]
    fn test_resolve_cli_path_wins() {
        let resolved = resolve(Some("/dev/ttyACM3"));
        assert_eq!(resolved.device_path, "/dev/ttyACM3");
    }

    #[test]
    fn test_worker_timings_are_nonzero() {
        let resolved = resolve(None);
        assert!(resolved.spinup_delay > Duration::ZERO);
        assert!(resolved.active_window > Duration::ZERO);
    }
}
