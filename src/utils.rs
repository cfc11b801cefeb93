/// Utility functions used throughout the application

use std::path::PathBuf;

/// Name of the debug log file inside the temp directory
pub const DEBUG_LOG_FILE: &str = "foliotui-debug.log";

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(DEBUG_LOG_FILE);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_log_lives_in_temp_dir() {
        let path = get_debug_log_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(DEBUG_LOG_FILE));
    }
}
