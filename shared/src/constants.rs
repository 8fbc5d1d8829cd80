pub const PERFORMANCE_ENDPOINT: &str = "/api/stats/performance";
pub const NOTIFICATION_EVENT: &str = "notification";

// Spin tuning defaults. A spin lasts roughly 460-530 ticks, about 9-10.5 seconds at 20ms per tick.
pub const MIN_SPIN_VELOCITY: f64 = 10.0;
pub const MAX_SPIN_VELOCITY: f64 = 20.0;
pub const SPIN_DECAY: f64 = 0.99;
pub const SPIN_STOP_THRESHOLD: f64 = 0.1;
pub const SPIN_TICK_MS: u32 = 20;

pub const MAX_SESSION_XP: u32 = 10;

pub const WHEEL_CANVAS_SIZE: u32 = 300;
pub const WHEEL_RIM_MARGIN: f64 = 10.0;
pub const WHEEL_HUB_RADIUS: f64 = 15.0;
pub const WHEEL_LABEL_INSET: f64 = 10.0;
pub const WHEEL_POINTER_SIZE: f64 = 10.0;

pub const PRIMARY_COLOR: &str = "#4cc9f0";
pub const SECONDARY_COLOR: &str = "#3a4353";
pub const HUB_COLOR: &str = "#1a2332";
pub const LABEL_COLOR: &str = "#ffffff";
pub const LABEL_FONT: &str = "bold 14px Arial";

pub const FALLBACK_DAYS: usize = 7;
pub const PERFORMANCE_FETCH_ERROR: &str = "Failed to fetch performance data";
