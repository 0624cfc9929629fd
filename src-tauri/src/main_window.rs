use std::path::PathBuf;

use tauri::{
    webview::NewWindowFeatures, AppHandle, Manager, Runtime, WebviewUrl, WebviewWindow,
    WebviewWindowBuilder,
};
use url::Url;

use crate::{
    app_types::ShellState, append_desktop_log, external_links, input_guard,
    plugin_activation::PluginActivation, shell_config::ShellConfig, FALLBACK_PAGE, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InitialPage {
    /// `target` is the configured string as given; `url` is its parsed form.
    Remote { target: String, url: Url },
    Fallback,
}

impl InitialPage {
    pub(crate) fn load_target(&self) -> String {
        match self {
            Self::Remote { target, .. } => target.clone(),
            Self::Fallback => FALLBACK_PAGE.to_string(),
        }
    }

    fn webview_url(&self) -> WebviewUrl {
        match self {
            Self::Remote { url, .. } => WebviewUrl::External(url.clone()),
            Self::Fallback => WebviewUrl::App(PathBuf::from(FALLBACK_PAGE)),
        }
    }
}

/// The remote page is only worth loading when the plugin was activated.
pub(crate) fn initial_page<F>(activated: bool, config: &ShellConfig, log: F) -> InitialPage
where
    F: Fn(&str),
{
    if !activated {
        return InitialPage::Fallback;
    }

    match Url::parse(&config.target_url) {
        Ok(url) => InitialPage::Remote {
            target: config.target_url.clone(),
            url,
        },
        Err(error) => {
            log(&format!(
                "target url {} is not loadable ({error}); using fallback page",
                config.target_url
            ));
            InitialPage::Fallback
        }
    }
}

fn main_window(app_handle: &AppHandle) -> Result<WebviewWindow, String> {
    app_handle
        .get_webview_window(MAIN_WINDOW_LABEL)
        .ok_or_else(|| "main window not found".to_string())
}

pub(crate) fn create_main_window<F>(app_handle: &AppHandle, log: F) -> Result<(), String>
where
    F: Fn(&str),
{
    if let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
        log("main window already exists; focusing it");
        show_and_focus(&window, &log);
        return Ok(());
    }

    let state = app_handle.state::<ShellState>();
    let config = state.config_snapshot();
    let page = initial_page(state.activation.activated, &config, &log);
    log(&format!("creating main window with page {}", page.load_target()));

    let builder = build_main_window(app_handle, &config, &state.activation, &page);
    builder
        .build()
        .map(|_| ())
        .map_err(|error| format!("Failed to create main window: {error}"))
}

fn build_main_window<'a>(
    app_handle: &'a AppHandle,
    config: &ShellConfig,
    activation: &PluginActivation,
    page: &InitialPage,
) -> WebviewWindowBuilder<'a, tauri::Wry, AppHandle> {
    let builder = WebviewWindowBuilder::new(app_handle, MAIN_WINDOW_LABEL, page.webview_url())
        .title(MAIN_WINDOW_TITLE)
        .inner_size(f64::from(config.width), f64::from(config.height))
        .resizable(config.resizable)
        .fullscreen(config.fullscreen)
        .center()
        .initialization_script(&input_guard::keyboard_guard_script())
        .initialization_script(external_links::NEW_WINDOW_BRIDGE_SCRIPT)
        .on_new_window(|url, _features: NewWindowFeatures| {
            external_links::deny_new_window(
                &url,
                &external_links::SystemBrowser,
                append_desktop_log,
            )
        });

    apply_activation_args(builder, activation)
}

/// All webviews share the default data directory, and the host refuses to
/// start one there with arguments differing from those already running.
pub(crate) fn apply_activation_args<'a, R, M>(
    builder: WebviewWindowBuilder<'a, R, M>,
    activation: &PluginActivation,
) -> WebviewWindowBuilder<'a, R, M>
where
    R: Runtime,
    M: Manager<R>,
{
    match activation.webview_browser_args() {
        Some(args) => builder.additional_browser_args(args),
        None => builder,
    }
}

fn show_and_focus<F>(window: &WebviewWindow, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

fn eval_in_main_window<F>(app_handle: &AppHandle, script: &str, action: &str, log: F)
where
    F: Fn(&str),
{
    let window = match main_window(app_handle) {
        Ok(window) => window,
        Err(error) => {
            log(&format!("{action} skipped: {error}"));
            return;
        }
    };
    if let Err(error) = window.eval(script) {
        log(&format!("failed to {action}: {error}"));
    }
}

pub(crate) fn navigation_script(url: &str) -> String {
    format!(
        "window.location.replace({});",
        serde_json::to_string(url).unwrap_or_else(|_| "\"/\"".to_string())
    )
}

pub(crate) fn navigate_main_window<F>(app_handle: &AppHandle, url: &str, log: F)
where
    F: Fn(&str),
{
    log(&format!("loading new url: {url}"));
    eval_in_main_window(app_handle, &navigation_script(url), "navigate main window", log);
}

pub(crate) fn reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    eval_in_main_window(
        app_handle,
        "window.location.reload();",
        "reload main window",
        log,
    );
}

pub(crate) fn hard_reload_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    match main_window(app_handle) {
        Ok(window) => {
            log("clearing site data (cache, cookies, storage) before reload");
            if let Err(error) = window.clear_all_browsing_data() {
                log(&format!("failed to clear browsing data: {error}"));
            }
        }
        Err(error) => {
            log(&format!("hard reload skipped: {error}"));
            return;
        }
    }
    reload_main_window(app_handle, log);
}

pub(crate) fn toggle_fullscreen<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let window = match main_window(app_handle) {
        Ok(window) => window,
        Err(error) => {
            log(&format!("toggle fullscreen skipped: {error}"));
            return;
        }
    };

    match window.is_fullscreen() {
        Ok(fullscreen) => {
            if let Err(error) = window.set_fullscreen(!fullscreen) {
                log(&format!("failed to toggle fullscreen: {error}"));
            }
        }
        Err(error) => log(&format!("failed to read fullscreen state: {error}")),
    }
}

pub(crate) fn set_main_window_zoom<F>(app_handle: &AppHandle, zoom: f64, log: F)
where
    F: Fn(&str),
{
    match main_window(app_handle) {
        Ok(window) => {
            if let Err(error) = window.set_zoom(zoom) {
                log(&format!("failed to set zoom to {zoom}: {error}"));
            }
        }
        Err(error) => log(&format!("set zoom skipped: {error}")),
    }
}

#[cfg(any(debug_assertions, feature = "devtools"))]
pub(crate) fn toggle_devtools<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    match main_window(app_handle) {
        Ok(window) => {
            if window.is_devtools_open() {
                window.close_devtools();
            } else {
                window.open_devtools();
            }
        }
        Err(error) => log(&format!("toggle devtools skipped: {error}")),
    }
}

#[cfg(not(any(debug_assertions, feature = "devtools")))]
pub(crate) fn toggle_devtools<F>(_app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    log("devtools are not available in this build");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_url(url: &str) -> ShellConfig {
        ShellConfig {
            target_url: url.to_string(),
            ..ShellConfig::default()
        }
    }

    #[test]
    fn initial_page_loads_target_url_when_activated() {
        let config = config_with_url("https://example.com/flash-game");
        let page = initial_page(true, &config, |_| {});
        assert_eq!(page.load_target(), config.target_url);
    }

    #[test]
    fn initial_page_keeps_target_url_verbatim() {
        let config = config_with_url("https://example.com");
        let page = initial_page(true, &config, |_| {});
        assert_eq!(page.load_target(), "https://example.com");
        assert!(matches!(
            page,
            InitialPage::Remote { ref url, .. } if url.as_str() == "https://example.com/"
        ));
    }

    #[test]
    fn initial_page_uses_fallback_when_not_activated() {
        let config = config_with_url("https://example.com/flash-game");
        let page = initial_page(false, &config, |_| {});
        assert_eq!(page, InitialPage::Fallback);
        assert_eq!(page.load_target(), FALLBACK_PAGE);
    }

    #[test]
    fn initial_page_falls_back_on_unparsable_target() {
        let lines = std::cell::RefCell::new(Vec::new());
        let page = initial_page(true, &config_with_url("not a url"), |line| {
            lines.borrow_mut().push(line.to_string())
        });
        assert_eq!(page, InitialPage::Fallback);
        assert_eq!(lines.borrow().len(), 1);
    }

    #[test]
    fn navigation_script_escapes_url() {
        assert_eq!(
            navigation_script("http://host/?q=\"x\""),
            r#"window.location.replace("http://host/?q=\"x\"");"#
        );
    }
}
