use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose lifecycle logs while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const THEME_KEY: &str = "theme";
pub const CONSENT_KEY: &str = "cookie-consent";

// Preloader timings, in milliseconds
pub const PRELOADER_TICK_MS: u32 = 20;
pub const PRELOADER_EXIT_DELAY_MS: u32 = 1500;
pub const CURTAIN_DELAY_MS: u32 = 200;
pub const CURTAIN_DURATION_MS: u32 = 1000;
pub const COUNTER_FADE_MS: u32 = 500;
pub const CONTENT_FADE_MS: u32 = 1000;

pub const CONSENT_BANNER_DELAY_MS: u32 = 2000;

/// Narrow viewports are strictly below this width.
pub const BREAKPOINT_MEDIUM: f64 = 768.0;
/// Wide viewports start at this width.
pub const BREAKPOINT_WIDE: f64 = 1024.0;

pub const MENU_SCROLL_DELAY_MS: u32 = 1000;
