use std::path::{Path, PathBuf};

use cs2ts_core::Config;

use crate::{Error, Result, parse_config};

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_FILE_NAME: &str = "cs2ts.toml";

const DEFAULT_SETTINGS: &str = r#"# cs2ts settings

# Lower-case the first character of converted property names.
propertiesToCamelCase = false

# Postfixes removed from type and member names, tried in order.
trimPostfixes = []

# Keep removing postfixes until none of them matches.
recursiveTrimPostfixes = false
"#;

/// Contents written by `cs2ts init`.
pub fn default_settings_toml() -> &'static str {
    DEFAULT_SETTINGS
}

/// A settings file with both raw content and the parsed config.
#[derive(Debug)]
pub struct SettingsFile {
    path: PathBuf,
    content: String,
    config: Config,
}

impl SettingsFile {
    /// Open and parse a settings file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = parse_config(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Read the config at `path` if it exists, otherwise use the default.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }
        Ok(Self::open(path)?.into_config())
    }

    /// Write the default settings template to `path` and open it.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        std::fs::write(path, DEFAULT_SETTINGS).map_err(|e| {
            Box::new(Error::Write {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::open(path)
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Take the parsed config.
    pub fn into_config(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_parses_to_default() {
        let config = parse_config(default_settings_toml(), DEFAULT_FILE_NAME).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "trimPostfixes = \"Dto\"\n").unwrap();

        let file = SettingsFile::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.content(), "trimPostfixes = \"Dto\"\n");
        assert_eq!(file.config().trim_postfixes, vec!["Dto"]);
    }

    #[test]
    fn test_open_missing_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SettingsFile::open(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }

    #[test]
    fn test_open_or_default_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = SettingsFile::open_or_default(dir.path().join(DEFAULT_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_open_or_default_reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "propertiesToCamelCase = true\n").unwrap();

        let config = SettingsFile::open_or_default(&path).unwrap();
        assert!(config.properties_to_camel_case);
    }

    #[test]
    fn test_open_or_default_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "trimPostfixes = [\"\"]\n").unwrap();

        let err = SettingsFile::open_or_default(&path).unwrap_err();
        assert!(err.validation_message().is_some());
    }

    #[test]
    fn test_create_writes_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let file = SettingsFile::create(&path).unwrap();
        assert_eq!(file.content(), default_settings_toml());
        assert_eq!(file.into_config(), Config::default());
        assert!(path.exists());
    }
}
