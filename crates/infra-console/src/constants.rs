// Console channel constants (no magic values)
use std::time::Duration;

/// Simulated transmission time of one notification (100ms)
pub const DEFAULT_DELIVERY_LATENCY: Duration = Duration::from_millis(100);
