use std::{path::PathBuf, sync::Arc};

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tokio::sync::oneshot;

use crate::{
    append_desktop_log, main_window, shell_locale,
    url_prompt::{
        decide_url_change, PromptResolution, PromptSignal, UrlChangeDecision, UrlPromptSession,
    },
    BridgeResult, ShellState, UrlPromptState, DEFAULT_SHELL_LOCALE, MAIN_WINDOW_LABEL,
    URL_PROMPT_PAGE, URL_PROMPT_WINDOW_LABEL,
};

const PROMPT_WIDTH: f64 = 500.0;
const PROMPT_HEIGHT: f64 = 180.0;

pub(crate) fn prompt_init_script(current_url: &str, title: &str) -> String {
    let payload = serde_json::json!({
        "initialValue": current_url,
        "title": title,
    });
    format!("window.__FLASH_SHELL_URL_PROMPT__ = {payload};")
}

/// Opens the prompt and, once it resolves, applies the result to the shell.
pub(crate) fn request_url_change(app_handle: &AppHandle) {
    let app_handle = app_handle.clone();
    tauri::async_runtime::spawn(async move {
        let receiver = match open_url_prompt(&app_handle, append_desktop_log) {
            Ok(Some(receiver)) => receiver,
            Ok(None) => return,
            Err(error) => {
                append_desktop_log(&format!("failed to open url prompt: {error}"));
                return;
            }
        };

        let resolution = receiver.await.unwrap_or(None);
        apply_url_prompt_resolution(&app_handle, resolution, append_desktop_log);
    });
}

fn open_url_prompt<F>(
    app_handle: &AppHandle,
    log: F,
) -> Result<Option<oneshot::Receiver<PromptResolution>>, String>
where
    F: Fn(&str),
{
    let prompt_state = app_handle.state::<UrlPromptState>();
    let opened = {
        let mut active = prompt_state
            .active
            .lock()
            .map_err(|_| "URL prompt state lock poisoned.".to_string())?;
        if active.as_ref().is_some_and(|session| session.is_open()) {
            None
        } else {
            let (session, receiver) = UrlPromptSession::open();
            *active = Some(session.clone());
            Some((session, receiver))
        }
    };

    let Some((session, receiver)) = opened else {
        log("url prompt already open; focusing it");
        if let Some(window) = app_handle.get_webview_window(URL_PROMPT_WINDOW_LABEL) {
            if let Err(error) = window.set_focus() {
                log(&format!("failed to focus url prompt: {error}"));
            }
        }
        return Ok(None);
    };

    if let Err(error) = build_prompt_window(app_handle) {
        session.resolve(None);
        clear_active_session(&prompt_state, &session);
        return Err(error);
    }

    Ok(Some(receiver))
}

fn build_prompt_window(app_handle: &AppHandle) -> Result<(), String> {
    let state = app_handle.state::<ShellState>();
    let current_url = state.target_url();
    let texts =
        shell_locale::shell_texts_for_locale(shell_locale::resolve_shell_locale(DEFAULT_SHELL_LOCALE));
    let mut builder = WebviewWindowBuilder::new(
        app_handle,
        URL_PROMPT_WINDOW_LABEL,
        WebviewUrl::App(PathBuf::from(URL_PROMPT_PAGE)),
    )
    .title(texts.url_prompt_title)
    .inner_size(PROMPT_WIDTH, PROMPT_HEIGHT)
    .resizable(false)
    .minimizable(false)
    .maximizable(false)
    .center()
    .initialization_script(&prompt_init_script(&current_url, texts.url_prompt_title));
    builder = main_window::apply_activation_args(builder, &state.activation);

    if let Some(main) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) {
        builder = builder
            .parent(&main)
            .map_err(|error| format!("Failed to attach url prompt to main window: {error}"))?;
    }

    builder
        .build()
        .map(|_| ())
        .map_err(|error| format!("Failed to create url prompt window: {error}"))
}

fn clear_active_session(prompt_state: &UrlPromptState, session: &Arc<UrlPromptSession>) {
    if let Ok(mut active) = prompt_state.active.lock() {
        if active
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, session))
        {
            *active = None;
        }
    }
}

/// Routes a prompt signal to the active session. Returns true only for the
/// signal that resolved it; the prompt window is closed afterwards.
pub(crate) fn handle_prompt_signal<F>(app_handle: &AppHandle, signal: PromptSignal, log: F) -> bool
where
    F: Fn(&str),
{
    let Some(prompt_state) = app_handle.try_state::<UrlPromptState>() else {
        return false;
    };
    let session = match prompt_state.active.lock() {
        Ok(active) => active.clone(),
        Err(_) => {
            log("url prompt state lock poisoned; ignoring prompt signal");
            return false;
        }
    };
    let Some(session) = session else {
        return false;
    };

    let window_already_gone = signal == PromptSignal::WindowDestroyed;
    if !session.handle_signal(signal) {
        return false;
    }
    clear_active_session(&prompt_state, &session);

    if !window_already_gone {
        if let Some(window) = app_handle.get_webview_window(URL_PROMPT_WINDOW_LABEL) {
            if let Err(error) = window.close() {
                log(&format!("failed to close url prompt: {error}"));
            }
        }
    }
    true
}

fn apply_url_prompt_resolution<F>(app_handle: &AppHandle, resolution: PromptResolution, log: F)
where
    F: Fn(&str),
{
    let state = app_handle.state::<ShellState>();
    match decide_url_change(&state.target_url(), resolution) {
        UrlChangeDecision::Unchanged => log("url prompt closed without a new url"),
        UrlChangeDecision::Navigate(url) => {
            if let Err(error) = state.set_target_url(&url) {
                log(&format!("failed to store new target url: {error}"));
                return;
            }

            let main_app = app_handle.clone();
            if let Err(error) = app_handle.run_on_main_thread(move || {
                main_window::navigate_main_window(&main_app, &url, append_desktop_log);
            }) {
                log(&format!("failed to schedule navigation to new url: {error}"));
            }
        }
    }
}

fn dispatch_from_prompt(window: &WebviewWindow, signal: PromptSignal) -> BridgeResult {
    if window.label() != URL_PROMPT_WINDOW_LABEL {
        return BridgeResult::failed("Prompt commands are only accepted from the url prompt.");
    }

    if handle_prompt_signal(window.app_handle(), signal, append_desktop_log) {
        BridgeResult::ok()
    } else {
        BridgeResult::failed("URL prompt is not open.")
    }
}

#[tauri::command]
pub(crate) fn url_prompt_confirm(window: WebviewWindow, value: String) -> BridgeResult {
    dispatch_from_prompt(&window, PromptSignal::Confirm(value))
}

#[tauri::command]
pub(crate) fn url_prompt_cancel(window: WebviewWindow) -> BridgeResult {
    dispatch_from_prompt(&window, PromptSignal::Cancel)
}

#[tauri::command]
pub(crate) fn url_prompt_key(window: WebviewWindow, key: String, value: String) -> BridgeResult {
    dispatch_from_prompt(&window, PromptSignal::Key { key, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_init_script_embeds_escaped_current_url() {
        let script = prompt_init_script("http://host/?a=\"b\"", "Enter Server URL");
        assert!(script.starts_with("window.__FLASH_SHELL_URL_PROMPT__ = {"));
        assert!(script.contains(r#""initialValue":"http://host/?a=\"b\"""#));
        assert!(script.contains(r#""title":"Enter Server URL""#));
        assert!(script.ends_with("};"));
    }
}
