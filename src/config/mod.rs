pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate, LOG_LEVELS};
use toml_config::TomlConfig;

pub const DEFAULT_INPUT_PATH: &str = "ModuleInfo.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "module-info-count")]
#[command(about = "Count exports/opens package lines in a module descriptor listing")]
pub struct CliConfig {
    /// Input file (default: ModuleInfo.txt, or [input].path from the config file)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列與設定檔：命令列優先，其次設定檔，最後預設值
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        Ok(Settings::merge(self.input.as_deref(), &file_config))
    }
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input_path: String,
    pub log_level: Option<String>,
}

impl Settings {
    pub fn merge(input_override: Option<&str>, file_config: &TomlConfig) -> Self {
        let input_path = input_override
            .or_else(|| file_config.input_path())
            .unwrap_or(DEFAULT_INPUT_PATH)
            .to_string();

        Self {
            input_path,
            log_level: file_config.log_level().map(str::to_string),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::merge(None, &TomlConfig::default())
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input.path", &self.input_path)?;
        if let Some(level) = &self.log_level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_input_path() {
        assert_eq!(Settings::default().input_path, "ModuleInfo.txt");
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file_config =
            TomlConfig::from_toml_str("[input]\npath = \"from_file.txt\"\n").unwrap();

        assert_eq!(
            Settings::merge(Some("from_cli.txt"), &file_config).input_path,
            "from_cli.txt"
        );
        assert_eq!(
            Settings::merge(None, &file_config).input_path,
            "from_file.txt"
        );
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let settings = Settings::merge(Some(""), &TomlConfig::default());
        assert!(settings.validate().is_err());
    }
}
