//! Configuration file paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/gh-feed/config.toml`
//! - macOS: `~/Library/Application Support/gh-feed/config.toml`
//! - Windows: `%APPDATA%\gh-feed\config.toml`

use std::path::PathBuf;

const APP_NAME: &str = "gh-feed";

/// Config file name looked up in the current directory and in `$HOME`
pub const LOCAL_CONFIG_FILE: &str = ".gh-feed.toml";

/// Get the application config directory, if the platform has one
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// Get path to the global config file
pub fn global_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get path to the config file in the home directory
pub fn home_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(LOCAL_CONFIG_FILE))
}

/// Config file locations in lookup order
///
/// 1. `.gh-feed.toml` in the current directory
/// 2. `<config dir>/gh-feed/config.toml`
/// 3. `~/.gh-feed.toml`
pub fn config_candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    paths.extend(global_config_path());
    paths.extend(home_config_path());
    paths
}
