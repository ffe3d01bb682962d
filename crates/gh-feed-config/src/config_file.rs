use crate::paths::config_candidates;
use std::path::Path;

/// Load config file content from the first location that has one
///
/// Searches, in order, the current directory, the platform config
/// directory and the home directory (see [`config_candidates`]).
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    load_first_existing(&config_candidates())
}

/// Read the first readable file among `paths`
pub fn load_first_existing<P: AsRef<Path>>(paths: &[P]) -> Option<String> {
    for path in paths {
        let path = path.as_ref();
        if let Ok(content) = std::fs::read_to_string(path) {
            log::debug!("Loaded config from {}", path.display());
            return Some(content);
        }
    }

    None
}
