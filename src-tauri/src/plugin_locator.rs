use std::{
    fs,
    path::{Path, PathBuf},
};

pub(crate) const MACOS_SYSTEM_PLUGIN_PATH: &str =
    "/Library/Internet Plug-Ins/PepperFlashPlayer/PepperFlashPlayer.plugin";

const WINDOWS_PLUGIN_64: &str = "pepflashplayer64.dll";
const WINDOWS_PLUGIN_32: &str = "pepflashplayer.dll";
const MACOS_PLUGIN_BUNDLE: &str = "PepperFlashPlayer.plugin";
const LINUX_PLUGIN_SO: &str = "libpepflashplayer.so";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Platform {
    pub(crate) fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PluginLocation {
    pub(crate) path: Option<PathBuf>,
    pub(crate) exists: bool,
}

impl PluginLocation {
    fn unavailable() -> Self {
        Self {
            path: None,
            exists: false,
        }
    }
}

/// Candidate plugin binaries for `platform`, most preferred first.
pub(crate) fn candidate_paths(platform: Platform, plugins_dir: &Path) -> Vec<PathBuf> {
    match platform {
        Platform::Windows => vec![
            plugins_dir.join(WINDOWS_PLUGIN_64),
            plugins_dir.join(WINDOWS_PLUGIN_32),
        ],
        Platform::MacOs => vec![
            PathBuf::from(MACOS_SYSTEM_PLUGIN_PATH),
            plugins_dir.join(MACOS_PLUGIN_BUNDLE),
        ],
        Platform::Linux => vec![plugins_dir.join(LINUX_PLUGIN_SO)],
        Platform::Other => Vec::new(),
    }
}

/// Picks the first candidate accepted by `exists`. When none is accepted the
/// last candidate is still reported so callers can log where they looked.
pub(crate) fn locate_with<F>(platform: Platform, plugins_dir: &Path, exists: F) -> PluginLocation
where
    F: Fn(&Path) -> bool,
{
    let candidates = candidate_paths(platform, plugins_dir);
    if let Some(found) = candidates.iter().find(|candidate| exists(candidate)) {
        return PluginLocation {
            path: Some(found.clone()),
            exists: true,
        };
    }

    match candidates.into_iter().last() {
        Some(path) => PluginLocation {
            path: Some(path),
            exists: false,
        },
        None => PluginLocation::unavailable(),
    }
}

pub(crate) fn locate(platform: Platform, plugins_dir: &Path) -> PluginLocation {
    locate_with(platform, plugins_dir, path_exists)
}

// `.plugin` bundles are directories on macOS, so only presence is checked.
fn path_exists(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}
