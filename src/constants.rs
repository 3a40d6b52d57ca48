/// Page wiring and diagnostics constants for the web frontend.
///
/// Simulation tuning lives in `hero_core::constants`; this file only covers
/// how the field is hosted in the page.
// Id of the <canvas> the field draws into
pub const CANVAS_ID: &str = "hero-canvas";

// Console log level used by console_log
pub const LOG_LEVEL: log::Level = log::Level::Info;

// How often the frame meter reports fps (seconds)
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;

// Window/document events the frontend listens to
pub const EV_POINTER_MOVE: &str = "pointermove";
pub const EV_POINTER_LEAVE: &str = "pointerleave";
pub const EV_BLUR: &str = "blur";
pub const EV_RESIZE: &str = "resize";
pub const EV_PAGE_HIDE: &str = "pagehide";
pub const EV_PAGE_SHOW: &str = "pageshow";
