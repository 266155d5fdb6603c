//! Standard paths used by FlowForge

use std::path::PathBuf;

/// Standard FlowForge paths
pub struct Paths {
    /// Data directory (~/.local/share/flowforge)
    pub data: PathBuf,
    /// Config directory (~/.config/flowforge)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let data = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("flowforge");

        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("flowforge");

        Self { data, config }
    }

    /// Path of the JSON configuration file
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }

    /// Log file the background n8n process writes to
    pub fn server_log(&self) -> PathBuf {
        self.data.join("n8n.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_end_with_app_dirs() {
        let paths = Paths::new();
        assert!(paths.data.ends_with("flowforge"));
        assert!(paths.config.ends_with("flowforge"));
    }

    #[test]
    fn test_derived_files_live_under_their_dirs() {
        let paths = Paths::new();
        assert!(paths.config_file().starts_with(&paths.config));
        assert_eq!(paths.server_log().file_name().unwrap(), "n8n.log");
    }
}
