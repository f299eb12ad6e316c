use log::Level;

pub const SITE_NAME: &str = "3DIMLI";
pub const SITE_VERSION: &str = "1.0.1";

pub const DISCORD_INVITE_URL: &str = "https://discord.gg/d48csuWe46";
pub const SEARCH_ROUTE: &str = "/search?page=1";

pub const LOGO_SRC: &str = "/logo.png";
pub const DISCORD_ICON_SRC: &str = "/discord-icon.png";
pub const UPLOAD_ICON_SRC: &str = "/upload-icon.png";
pub const USER_ICON_SRC: &str = "/user-icon.png";

/// Timings for the hero typewriter, all in milliseconds.
pub mod typewriter {
    pub const START_DELAY: u32 = 800;
    pub const TYPE_STEP: u32 = 80;
    pub const DELETE_STEP: u32 = 40;
    pub const READ_PAUSE: u32 = 1500;
    pub const BEFORE_DELETE_PAUSE: u32 = 1500;
    pub const BETWEEN_TEXTS_PAUSE: u32 = 300;
    pub const RESET_PAUSE: u32 = 800;
    pub const CURSOR_BLINK: u32 = 800;
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
