use crate::utils::error::{AnalyzeError, Result};
use crate::utils::validation::{self, Validate, LOG_LEVELS};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| AnalyzeError::ConfigValidationError {
                field: path.display().to_string(),
                message: format!("Cannot read config file: {}", e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AnalyzeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MODULE_DIR})，未定義者保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn input_path(&self) -> Option<&str> {
        self.input.path.as_deref()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.input_path() {
            validation::validate_path("input.path", path)?;
        }
        if let Some(level) = self.log_level() {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[input]
path = "descriptors/ModuleInfo.txt"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.input_path(), Some("descriptors/ModuleInfo.txt"));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.input_path(), None);
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MODULE_INFO_COUNT_TEST_DIR", "/tmp/mods");
        let config = TomlConfig::from_toml_str(
            r#"
[input]
path = "${MODULE_INFO_COUNT_TEST_DIR}/ModuleInfo.txt"
"#,
        )
        .unwrap();

        assert_eq!(config.input_path(), Some("/tmp/mods/ModuleInfo.txt"));
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let config = TomlConfig::from_toml_str(
            r#"
[input]
path = "${MODULE_INFO_COUNT_SURELY_UNSET}/m.txt"
"#,
        )
        .unwrap();

        assert_eq!(
            config.input_path(),
            Some("${MODULE_INFO_COUNT_SURELY_UNSET}/m.txt")
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[input\npath = 1").unwrap_err();
        assert!(matches!(err, AnalyzeError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_invalid_log_level() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(AnalyzeError::InvalidConfigValueError { .. })
        ));
    }
}
