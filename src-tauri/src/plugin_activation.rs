use std::path::Path;

use crate::plugin_locator::{self, Platform, PluginLocation};

pub(crate) const FLASH_PLUGIN_VERSION: &str = "32.0.0.344";

const DISABLE_FEATURES_SWITCH: &str = "disable-features";

// Disabled by the host webview unless custom browser arguments replace them.
const HOST_DEFAULT_DISABLED_FEATURES: &[&str] =
    &["msWebOOUI", "msPdfOOUI", "msSmartScreenProtection"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuntimeDirective {
    pub(crate) switch: &'static str,
    pub(crate) value: Option<String>,
}

impl RuntimeDirective {
    fn flag(switch: &'static str) -> Self {
        Self {
            switch,
            value: None,
        }
    }

    fn with_value(switch: &'static str, value: impl Into<String>) -> Self {
        Self {
            switch,
            value: Some(value.into()),
        }
    }
}

pub(crate) trait DirectiveSink {
    fn append_switch(&mut self, directive: RuntimeDirective);
}

pub(crate) fn activation_directives(plugin_path: &Path) -> Vec<RuntimeDirective> {
    vec![
        RuntimeDirective::with_value(
            "ppapi-flash-path",
            plugin_path.to_string_lossy().to_string(),
        ),
        RuntimeDirective::with_value("ppapi-flash-version", FLASH_PLUGIN_VERSION),
        RuntimeDirective::flag("enable-plugins"),
        RuntimeDirective::flag("allow-outdated-plugins"),
        RuntimeDirective::flag("no-sandbox"),
        RuntimeDirective::flag("disable-web-security"),
        RuntimeDirective::flag("ignore-certificate-errors"),
        RuntimeDirective::with_value(
            DISABLE_FEATURES_SWITCH,
            "BlockInsecurePrivateNetworkRequests",
        ),
    ]
}

/// Issues the plugin directives to `sink` if the located binary exists.
/// Returns whether activation happened; nothing is issued otherwise.
pub(crate) fn activate<S>(location: &PluginLocation, sink: &mut S) -> bool
where
    S: DirectiveSink + ?Sized,
{
    let Some(path) = location.path.as_deref().filter(|_| location.exists) else {
        return false;
    };

    for directive in activation_directives(path) {
        sink.append_switch(directive);
    }
    true
}

/// Outcome of the startup plugin probe, kept for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PluginActivation {
    pub(crate) location: PluginLocation,
    pub(crate) activated: bool,
    pub(crate) browser_args: Option<String>,
}

impl PluginActivation {
    pub(crate) fn version_label(&self) -> Option<&'static str> {
        self.activated.then_some(FLASH_PLUGIN_VERSION)
    }

    /// Arguments every webview in the process must be started with.
    pub(crate) fn webview_browser_args(&self) -> Option<&str> {
        self.browser_args.as_deref().filter(|_| self.activated)
    }
}

pub(crate) fn initialize_flash<F>(platform: Platform, plugins_dir: &Path, log: F) -> PluginActivation
where
    F: Fn(&str),
{
    let location = plugin_locator::locate(platform, plugins_dir);
    let mut args = BrowserArgs::default();
    let activated = activate(&location, &mut args);

    match (&location.path, activated) {
        (Some(path), true) => log(&format!(
            "flash plugin activated: path={} version={}",
            path.display(),
            FLASH_PLUGIN_VERSION
        )),
        (Some(path), false) => log(&format!(
            "flash plugin not found at {}; using fallback page",
            path.display()
        )),
        (None, _) => log(&format!(
            "flash plugin unsupported on {platform:?}; using fallback page"
        )),
    }

    PluginActivation {
        location,
        activated,
        browser_args: (!args.is_empty()).then(|| args.render()),
    }
}

/// Collects directives into the webview's additional browser arguments.
#[derive(Debug, Default)]
pub(crate) struct BrowserArgs {
    switches: Vec<RuntimeDirective>,
    disabled_features: Vec<String>,
}

impl DirectiveSink for BrowserArgs {
    fn append_switch(&mut self, directive: RuntimeDirective) {
        if directive.switch == DISABLE_FEATURES_SWITCH {
            if let Some(value) = directive.value {
                self.disabled_features.extend(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|feature| !feature.is_empty())
                        .map(str::to_string),
                );
            }
            return;
        }
        self.switches.push(directive);
    }
}

impl BrowserArgs {
    pub(crate) fn is_empty(&self) -> bool {
        self.switches.is_empty() && self.disabled_features.is_empty()
    }

    pub(crate) fn render(&self) -> String {
        let mut parts: Vec<String> = self
            .switches
            .iter()
            .map(|directive| match &directive.value {
                Some(value) => format!("--{}={}", directive.switch, quote_arg_value(value)),
                None => format!("--{}", directive.switch),
            })
            .collect();

        let mut features: Vec<&str> = HOST_DEFAULT_DISABLED_FEATURES.to_vec();
        for feature in &self.disabled_features {
            if !features.contains(&feature.as_str()) {
                features.push(feature.as_str());
            }
        }
        parts.push(format!("--{}={}", DISABLE_FEATURES_SWITCH, features.join(",")));
        parts.join(" ")
    }
}

fn quote_arg_value(value: &str) -> String {
    if value.contains(char::is_whitespace) {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        directives: Vec<RuntimeDirective>,
    }

    impl DirectiveSink for RecordingSink {
        fn append_switch(&mut self, directive: RuntimeDirective) {
            self.directives.push(directive);
        }
    }

    fn location(path: &str, exists: bool) -> PluginLocation {
        PluginLocation {
            path: Some(PathBuf::from(path)),
            exists,
        }
    }

    #[test]
    fn activate_issues_directives_when_plugin_exists() {
        let mut sink = RecordingSink::default();
        assert!(activate(&location("/plugins/libpepflashplayer.so", true), &mut sink));

        let switches: Vec<&str> = sink.directives.iter().map(|d| d.switch).collect();
        assert_eq!(
            switches,
            vec![
                "ppapi-flash-path",
                "ppapi-flash-version",
                "enable-plugins",
                "allow-outdated-plugins",
                "no-sandbox",
                "disable-web-security",
                "ignore-certificate-errors",
                "disable-features",
            ]
        );
        assert_eq!(
            sink.directives[0].value.as_deref(),
            Some("/plugins/libpepflashplayer.so")
        );
        assert_eq!(sink.directives[1].value.as_deref(), Some(FLASH_PLUGIN_VERSION));
    }

    #[test]
    fn activate_issues_nothing_when_plugin_missing() {
        let mut sink = RecordingSink::default();
        assert!(!activate(&location("/plugins/libpepflashplayer.so", false), &mut sink));
        assert!(sink.directives.is_empty());
    }

    #[test]
    fn activate_issues_nothing_without_path() {
        let mut sink = RecordingSink::default();
        let location = PluginLocation {
            path: None,
            exists: false,
        };
        assert!(!activate(&location, &mut sink));
        assert!(sink.directives.is_empty());
    }

    #[test]
    fn initialize_flash_captures_browser_args_when_plugin_present() {
        let temp = tempfile::tempdir().expect("create temp dir");
        std::fs::write(temp.path().join("libpepflashplayer.so"), b"stub").expect("write plugin");
        let lines = std::cell::RefCell::new(Vec::new());

        let activation = initialize_flash(Platform::Linux, temp.path(), |line| {
            lines.borrow_mut().push(line.to_string())
        });

        assert!(activation.activated);
        assert_eq!(activation.version_label(), Some(FLASH_PLUGIN_VERSION));
        let args = activation.browser_args.expect("browser args");
        assert!(args.contains("--enable-plugins"));
        assert!(lines.borrow()[0].starts_with("flash plugin activated"));
    }

    #[test]
    fn webview_browser_args_are_the_rendered_activation_args() {
        let temp = tempfile::tempdir().expect("create temp dir");
        std::fs::write(temp.path().join("libpepflashplayer.so"), b"stub").expect("write plugin");

        let activation = initialize_flash(Platform::Linux, temp.path(), |_| {});
        let shared = activation.webview_browser_args().expect("shared args");

        assert_eq!(Some(shared), activation.browser_args.as_deref());
        assert!(shared.contains("--ppapi-flash-path="));
        assert!(shared.contains("--disable-features=msWebOOUI"));
    }

    #[test]
    fn webview_browser_args_absent_without_activation() {
        let temp = tempfile::tempdir().expect("create temp dir");

        let activation = initialize_flash(Platform::Linux, temp.path(), |_| {});

        assert_eq!(activation.webview_browser_args(), None);
    }

    #[test]
    fn initialize_flash_leaves_browser_args_empty_when_plugin_missing() {
        let temp = tempfile::tempdir().expect("create temp dir");

        let activation = initialize_flash(Platform::Linux, temp.path(), |_| {});

        assert!(!activation.activated);
        assert_eq!(activation.version_label(), None);
        assert_eq!(activation.browser_args, None);
    }

    #[test]
    fn initialize_flash_reports_unsupported_platform() {
        let lines = std::cell::RefCell::new(Vec::new());

        let activation = initialize_flash(Platform::Other, Path::new("/plugins"), |line| {
            lines.borrow_mut().push(line.to_string())
        });

        assert!(!activation.activated);
        assert_eq!(activation.location.path, None);
        assert!(lines.borrow()[0].contains("unsupported"));
    }

    #[test]
    fn browser_args_merge_disabled_features_with_host_defaults() {
        let mut args = BrowserArgs::default();
        assert!(args.is_empty());
        assert!(activate(
            &location("C:\\App\\resources\\plugins\\pepflashplayer64.dll", true),
            &mut args
        ));

        let rendered = args.render();
        assert!(rendered.starts_with(
            "--ppapi-flash-path=C:\\App\\resources\\plugins\\pepflashplayer64.dll \
             --ppapi-flash-version=32.0.0.344 --enable-plugins"
        ));
        assert!(rendered.ends_with(
            "--disable-features=msWebOOUI,msPdfOOUI,msSmartScreenProtection,BlockInsecurePrivateNetworkRequests"
        ));
        assert_eq!(rendered.matches("--disable-features").count(), 1);
    }

    #[test]
    fn browser_args_quote_paths_with_spaces() {
        let mut args = BrowserArgs::default();
        activate(
            &location(
                "/Library/Internet Plug-Ins/PepperFlashPlayer/PepperFlashPlayer.plugin",
                true,
            ),
            &mut args,
        );
        assert!(args.render().starts_with(
            "--ppapi-flash-path=\"/Library/Internet Plug-Ins/PepperFlashPlayer/PepperFlashPlayer.plugin\""
        ));
    }
}
