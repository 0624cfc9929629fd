use std::{env, path::PathBuf};

use tauri::{path::BaseDirectory, AppHandle, Manager};

use crate::PLUGINS_DIR_ENV;

const PLUGINS_DIR_NAME: &str = "plugins";

pub(crate) fn source_plugins_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(PLUGINS_DIR_NAME)
}

fn plugins_dir_override() -> Option<PathBuf> {
    let raw = env::var(PLUGINS_DIR_ENV).ok()?;
    let path = PathBuf::from(raw.trim());
    if path.as_os_str().is_empty() {
        return None;
    }
    Some(path)
}

/// Directory holding the bundled plugin binaries: the override when set,
/// the crate's own `plugins/` in dev runs, the resource dir when packaged.
pub(crate) fn resolve_plugins_dir(app: &AppHandle) -> PathBuf {
    if let Some(path) = plugins_dir_override() {
        return path;
    }
    if tauri::is_dev() {
        return source_plugins_dir();
    }

    app.path()
        .resolve(PLUGINS_DIR_NAME, BaseDirectory::Resource)
        .unwrap_or_else(|_| source_plugins_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_plugins_dir_sits_next_to_manifest() {
        let dir = source_plugins_dir();
        assert!(dir.ends_with(PLUGINS_DIR_NAME));
        assert!(dir
            .parent()
            .map(|parent| parent.join("Cargo.toml").is_file())
            .unwrap_or(false));
    }
}
