// src/models/config.rs

//! Launcher configuration structures.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root launcher configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Interpreter and module names
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// How arguments are handed to the target module
    #[serde(default)]
    pub forward: ForwardConfig,

    /// Diagnostic printed when the runtime is missing
    #[serde(default)]
    pub messages: Messages,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading or validation fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path).and_then(|config| config.validate().map(|()| config)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Config load failed from {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("runtime.interpreter", &self.runtime.interpreter),
            ("runtime.probe_module", &self.runtime.probe_module),
            ("runtime.target_module", &self.runtime.target_module),
            ("messages.product", &self.messages.product),
            ("messages.install_command", &self.messages.install_command),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("{field} is empty")));
            }
        }
        Ok(())
    }
}

/// Interpreter and module names used to build child command lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Interpreter looked up on `$PATH`
    #[serde(default = "defaults::interpreter")]
    pub interpreter: String,

    /// Flag that makes the interpreter run a module
    #[serde(default = "defaults::module_flag")]
    pub module_flag: String,

    /// Package whose version query decides availability
    #[serde(default = "defaults::probe_module")]
    pub probe_module: String,

    /// Module that receives the forwarded arguments
    #[serde(default = "defaults::target_module")]
    pub target_module: String,

    /// Argument passed to the probe module
    #[serde(default = "defaults::version_flag")]
    pub version_flag: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            interpreter: defaults::interpreter(),
            module_flag: defaults::module_flag(),
            probe_module: defaults::probe_module(),
            target_module: defaults::target_module(),
            version_flag: defaults::version_flag(),
        }
    }
}

/// Argument forwarding settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForwardConfig {
    #[serde(default)]
    pub mode: ForwardMode,
}

/// How received arguments reach the target module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForwardMode {
    /// All arguments joined with spaces into one argument (legacy behaviour)
    #[default]
    Joined,
    /// Arguments passed through as separate, ordered arguments
    Split,
}

impl FromStr for ForwardMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "joined" => Ok(Self::Joined),
            "split" => Ok(Self::Split),
            other => Err(AppError::config(format!(
                "unknown forward mode '{other}' (expected 'joined' or 'split')"
            ))),
        }
    }
}

/// Diagnostic templates. `{product}` and `{install}` are substituted on render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "defaults::product")]
    pub product: String,
    #[serde(default = "defaults::install_command")]
    pub install_command: String,
    #[serde(default = "defaults::not_found")]
    pub not_found: String,
    #[serde(default = "defaults::install_hint")]
    pub install_hint: String,
    #[serde(default = "defaults::venv_hint")]
    pub venv_hint: String,
}

impl Messages {
    fn fill(&self, template: &str) -> String {
        template
            .replace("{product}", &self.product)
            .replace("{install}", &self.install_command)
    }

    /// Render the full not-found diagnostic, one trailing newline included.
    pub fn render(&self) -> String {
        format!(
            "{}\n{}\n\n{}\n",
            self.fill(&self.not_found),
            self.fill(&self.install_hint),
            self.fill(&self.venv_hint)
        )
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            product: defaults::product(),
            install_command: defaults::install_command(),
            not_found: defaults::not_found(),
            install_hint: defaults::install_hint(),
            venv_hint: defaults::venv_hint(),
        }
    }
}

mod defaults {
    pub fn interpreter() -> String {
        "python3".into()
    }
    pub fn module_flag() -> String {
        "-m".into()
    }
    pub fn probe_module() -> String {
        "django".into()
    }
    pub fn target_module() -> String {
        "archivebox".into()
    }
    pub fn version_flag() -> String {
        "--version".into()
    }

    // Message defaults
    pub fn product() -> String {
        "ArchiveBox".into()
    }
    pub fn install_command() -> String {
        "pip3 install archivebox".into()
    }
    pub fn not_found() -> String {
        "[X] {product} not found, is it installed and present in your $PATH?".into()
    }
    pub fn install_hint() -> String {
        "    {install}".into()
    }
    pub fn venv_hint() -> String {
        "Hint: Did you forget to activate a virtualenv?".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const DIAGNOSTIC: &str = "[X] ArchiveBox not found, is it installed and present in your $PATH?\n    pip3 install archivebox\n\nHint: Did you forget to activate a virtualenv?\n";

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_interpreter() {
        let mut config = Config::default();
        config.runtime.interpreter = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_messages_render_fixed_diagnostic() {
        assert_eq!(Messages::default().render(), DIAGNOSTIC);
    }

    #[test]
    fn custom_messages_fill_placeholders() {
        let messages = Messages {
            product: "Demo".to_string(),
            install_command: "cargo install demo".to_string(),
            ..Messages::default()
        };
        let rendered = messages.render();
        assert!(rendered.starts_with("[X] Demo not found"));
        assert!(rendered.contains("\n    cargo install demo\n"));
    }

    #[test]
    fn forward_mode_parses_case_insensitively() {
        assert_eq!("Split".parse::<ForwardMode>().unwrap(), ForwardMode::Split);
        assert_eq!(" joined ".parse::<ForwardMode>().unwrap(), ForwardMode::Joined);
        assert!("scatter".parse::<ForwardMode>().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [runtime]
            interpreter = "python3.12"

            [forward]
            mode = "split"
            "#,
        )
        .unwrap();
        assert_eq!(config.runtime.interpreter, "python3.12");
        assert_eq!(config.runtime.target_module, "archivebox");
        assert_eq!(config.forward.mode, ForwardMode::Split);
        assert_eq!(config.messages.render(), DIAGNOSTIC);
    }

    #[test]
    fn load_or_default_falls_back_on_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[runtime]\ninterpreter = \"\"").unwrap();
        let config = Config::load_or_default(file.path());
        assert_eq!(config.runtime.interpreter, "python3");
    }

    #[test]
    fn load_or_default_falls_back_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("absent.toml"));
        assert_eq!(config.forward.mode, ForwardMode::Joined);
    }

    #[test]
    fn load_reads_messages_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[messages]\nproduct = \"Archiver\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert!(config.messages.render().starts_with("[X] Archiver not found"));
    }
}
