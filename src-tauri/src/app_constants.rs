pub(crate) const DEFAULT_TARGET_URL: &str = "https://example.com/flash-game";
pub(crate) const TARGET_URL_ENV: &str = "GAME_URL";
pub(crate) const PLUGINS_DIR_ENV: &str = "FLASH_SHELL_PLUGINS_DIR";
pub(crate) const LOG_DIR_ENV: &str = "FLASH_SHELL_LOG_DIR";

pub(crate) const DEFAULT_WINDOW_WIDTH: u32 = 1280;
pub(crate) const DEFAULT_WINDOW_HEIGHT: u32 = 800;

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Flash Player";
pub(crate) const URL_PROMPT_WINDOW_LABEL: &str = "url-prompt";
pub(crate) const FALLBACK_PAGE: &str = "index.html";
pub(crate) const URL_PROMPT_PAGE: &str = "url-prompt.html";

pub(crate) const DEFAULT_SHELL_LOCALE: &str = "en-US";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
