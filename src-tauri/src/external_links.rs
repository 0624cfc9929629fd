use std::process::{Command, Stdio};

use tauri::{webview::NewWindowResponse, Runtime};
use url::Url;

use crate::{append_desktop_log, BridgeResult};

/// Reroutes `window.open` and `target="_blank"` links to the system browser.
pub(crate) const NEW_WINDOW_BRIDGE_SCRIPT: &str = r#"
(function () {
  if (window.__flashShellLinkBridge) return;
  window.__flashShellLinkBridge = true;

  function openExternal(rawUrl) {
    var internals = window.__TAURI_INTERNALS__;
    if (!internals || !rawUrl) return;
    var resolved;
    try {
      resolved = new URL(String(rawUrl), window.location.href).href;
    } catch (_) {
      return;
    }
    internals.invoke('open_external_url', { url: resolved });
  }

  window.open = function (url) {
    openExternal(url);
    return null;
  };

  document.addEventListener('click', function (event) {
    var target = event.target;
    var anchor = target && target.closest ? target.closest('a[target="_blank"]') : null;
    if (!anchor || !anchor.href) return;
    event.preventDefault();
    openExternal(anchor.href);
  }, true);
})();
"#;

pub(crate) trait ExternalOpener {
    fn open(&self, url: &Url) -> Result<(), String>;
}

pub(crate) struct SystemBrowser;

impl ExternalOpener for SystemBrowser {
    fn open(&self, url: &Url) -> Result<(), String> {
        open_url_with_system_browser(url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum NewWindowOutcome {
    Dispatched(Url),
    Rejected(String),
    Failed(String),
}

/// Accepts only web links; anything else stays inside the game page.
pub(crate) fn parse_openable_url(raw_url: &str) -> Result<Url, String> {
    let candidate = raw_url.trim();
    if candidate.is_empty() {
        return Err("Game page asked for a new window without a URL.".to_string());
    }

    let url = Url::parse(candidate)
        .map_err(|error| format!("Game page link '{candidate}' is not a URL: {error}"))?;
    if matches!(url.scheme(), "http" | "https") {
        Ok(url)
    } else {
        Err(format!(
            "Game page link uses '{}:', only web links open in the browser.",
            url.scheme()
        ))
    }
}

/// New-window requests never create an in-app window: the URL is handed to
/// `opener` once, or dropped when it is not openable.
pub(crate) fn handle_new_window_request<O>(raw_url: &str, opener: &O) -> NewWindowOutcome
where
    O: ExternalOpener + ?Sized,
{
    let parsed = match parse_openable_url(raw_url) {
        Ok(parsed) => parsed,
        Err(reason) => return NewWindowOutcome::Rejected(reason),
    };

    match opener.open(&parsed) {
        Ok(()) => NewWindowOutcome::Dispatched(parsed),
        Err(reason) => NewWindowOutcome::Failed(reason),
    }
}

fn log_outcome<F>(raw_url: &str, outcome: &NewWindowOutcome, log: F)
where
    F: Fn(&str),
{
    match outcome {
        NewWindowOutcome::Dispatched(url) => log(&format!("new window sent to browser: {url}")),
        NewWindowOutcome::Rejected(reason) | NewWindowOutcome::Failed(reason) => {
            log(&format!("new window for {raw_url} dropped: {reason}"))
        }
    }
}

/// Host-level new-window hook. Covers requests the injected script never
/// sees (child frames, modified clicks, form targets).
pub(crate) fn deny_new_window<R, O, F>(url: &Url, opener: &O, log: F) -> NewWindowResponse<R>
where
    R: Runtime,
    O: ExternalOpener + ?Sized,
    F: Fn(&str),
{
    let outcome = handle_new_window_request(url.as_str(), opener);
    log_outcome(url.as_str(), &outcome, log);
    NewWindowResponse::Deny
}

fn browser_launcher(url: &str) -> Option<Command> {
    let (program, args): (&str, Vec<&str>) = if cfg!(target_os = "macos") {
        ("open", vec![url])
    } else if cfg!(target_os = "windows") {
        ("rundll32", vec!["url.dll,FileProtocolHandler", url])
    } else if cfg!(unix) {
        ("xdg-open", vec![url])
    } else {
        return None;
    };

    let mut command = Command::new(program);
    command
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    Some(command)
}

fn open_url_with_system_browser(url: &str) -> Result<(), String> {
    let mut command = browser_launcher(url)
        .ok_or_else(|| "No system browser launcher on this platform.".to_string())?;
    command
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Could not hand {url} to the system browser: {error}"))
}

#[tauri::command]
pub(crate) fn open_external_url(url: String) -> BridgeResult {
    let outcome = handle_new_window_request(&url, &SystemBrowser);
    log_outcome(&url, &outcome, append_desktop_log);
    match outcome {
        NewWindowOutcome::Dispatched(_) => BridgeResult::ok(),
        NewWindowOutcome::Rejected(reason) | NewWindowOutcome::Failed(reason) => {
            BridgeResult::failed(reason)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
        fail: bool,
    }

    impl ExternalOpener for RecordingOpener {
        fn open(&self, url: &Url) -> Result<(), String> {
            self.opened.borrow_mut().push(url.to_string());
            if self.fail {
                Err("no handler".to_string())
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn new_window_request_dispatches_once_to_external_handler() {
        let opener = RecordingOpener::default();

        let outcome = handle_new_window_request("https://example.com/help", &opener);

        assert!(matches!(outcome, NewWindowOutcome::Dispatched(_)));
        assert_eq!(
            opener.opened.borrow().as_slice(),
            ["https://example.com/help".to_string()]
        );
    }

    #[test]
    fn new_window_request_with_unsupported_scheme_is_not_dispatched() {
        let opener = RecordingOpener::default();

        let outcome = handle_new_window_request("file:///etc/passwd", &opener);

        assert!(matches!(outcome, NewWindowOutcome::Rejected(_)));
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn new_window_request_reports_opener_failure() {
        let opener = RecordingOpener {
            fail: true,
            ..RecordingOpener::default()
        };

        let outcome = handle_new_window_request("http://example.com/", &opener);

        assert_eq!(outcome, NewWindowOutcome::Failed("no handler".to_string()));
        assert_eq!(opener.opened.borrow().len(), 1);
    }

    #[test]
    fn host_new_window_hook_denies_and_dispatches_once() {
        let opener = RecordingOpener::default();
        let lines = RefCell::new(Vec::new());
        let url = Url::parse("https://example.com/forum").expect("url");

        let response = deny_new_window::<tauri::Wry, _, _>(&url, &opener, |line| {
            lines.borrow_mut().push(line.to_string())
        });

        assert!(matches!(response, NewWindowResponse::Deny));
        assert_eq!(
            opener.opened.borrow().as_slice(),
            ["https://example.com/forum".to_string()]
        );
        assert_eq!(lines.borrow().len(), 1);
    }

    #[test]
    fn host_new_window_hook_denies_non_web_links_without_dispatch() {
        let opener = RecordingOpener::default();
        let url = Url::parse("about:blank").expect("url");

        let response = deny_new_window::<tauri::Wry, _, _>(&url, &opener, |_| {});

        assert!(matches!(response, NewWindowResponse::Deny));
        assert!(opener.opened.borrow().is_empty());
    }

    #[test]
    fn parse_openable_url_rejects_blank_input() {
        assert!(parse_openable_url("   ").is_err());
    }

    #[test]
    fn browser_launcher_passes_url_through() {
        let Some(command) = browser_launcher("https://example.com/") else {
            return;
        };
        assert!(command
            .get_args()
            .any(|arg| arg == std::ffi::OsStr::new("https://example.com/")));
    }

    #[test]
    fn bridge_script_invokes_external_command() {
        assert!(NEW_WINDOW_BRIDGE_SCRIPT.contains("'open_external_url'"));
        assert!(NEW_WINDOW_BRIDGE_SCRIPT.contains("window.open = function"));
    }
}
