//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::CacheConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<CacheConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CacheConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let path = write_temp(
            "cache_headers_valid.toml",
            r#"
            default = "page"

            [[rules]]
            pattern = "/assets/*"
            preset = "static"
            "#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.rules.len(), 1);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_semantic_errors_surface_in_display() {
        let path = write_temp(
            "cache_headers_invalid.toml",
            r#"
            [[rules]]
            pattern = "/x"
            "#,
        );
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("rule #0"));
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
