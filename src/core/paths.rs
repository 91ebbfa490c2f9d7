use std::path::PathBuf;

const APP_DIR_NAME: &str = "Timestamper";

/// Per-user configuration folder.
pub fn app_config_root() -> PathBuf {
    let base = std::env::var("APPDATA")
        .or_else(|_| std::env::var("XDG_CONFIG_HOME"))
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|_| std::env::temp_dir());
    base.join(APP_DIR_NAME)
}
