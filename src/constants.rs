/// Page behavior tuning constants.
///
/// Animation values mirror the site's floating-element effect. The clock
/// step is applied once per animation frame, so oscillation speed follows
/// the display refresh rate.

// Animation clock and pointer smoothing
pub const CLOCK_STEP_PER_FRAME: f64 = 0.01;
pub const POINTER_SMOOTHING: f64 = 0.08; // 0..1, larger is snappier

// Fallback when `data-speed` is missing or unusable
pub const DEFAULT_ELEMENT_SPEED: f64 = 0.02;

// Idle floating motion
pub const IDLE_AMPLITUDE_X_PX: f64 = 10.0;
pub const IDLE_AMPLITUDE_Y_PX: f64 = 8.0;
pub const IDLE_PHASE_STEP_X: f64 = 0.5; // per element index
pub const IDLE_PHASE_STEP_Y: f64 = 0.7; // per element index
pub const IDLE_FREQUENCY_Y: f64 = 0.8;

// Pointer parallax
pub const PARALLAX_GAIN_PX: f64 = 80.0;
pub const ROTATION_GAIN_DEG: f64 = 0.8;

// Depth and size
pub const DEPTH_BASE_PX: f64 = 30.0;
pub const DEPTH_AMPLITUDE_PX: f64 = 20.0;
pub const SCALE_GAIN: f64 = 2.0;

// Layout
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const ACTIVE_SECTION_PROBE_OFFSET_PX: f64 = 100.0;
pub const OUTSIDE_CLICK_ARM_DELAY_MS: i32 = 100;

// Persisted preference keys and their stored values
pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const SIDEBAR_COLLAPSED_ON: &str = "true";
pub const SIDEBAR_COLLAPSED_OFF: &str = "false";
pub const DARK_MODE_ON: &str = "enabled";
pub const DARK_MODE_OFF: &str = "disabled";
