//! TOML config file loading

use crate::config::Config;
use crate::error::ConfigError;

use std::path::Path;

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file() {
        let result = ConfigFile::load("/nonexistent/path/config.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_tool_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[tool]\nprogram = \"/opt/pipeline/visualise_apertures.py\"\ninterpreter = \"python3\"\n\n[general]\ndry_run = true"
        )
        .unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.tool.program, "/opt/pipeline/visualise_apertures.py");
        assert_eq!(config.tool.interpreter.as_deref(), Some("python3"));
        assert!(config.general.dry_run);
        assert!(!config.general.verbose);
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[tool\nprogram =").unwrap();

        let result = ConfigFile::load(file.path());
        assert!(matches!(result, Err(ConfigError::TomlError(_))));
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.tool.program, crate::config::DEFAULT_TOOL);
    }
}
