//! Configuration module for grammar drift analysis.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `GD_` and use double underscores
//! to separate nested levels:
//! - `GD_PATHS__GRAMMAR=grammar/Lang.g4` sets `paths.grammar`
//! - `GD_STUBS__SCOPE=LangParser` sets `stubs.scope`
//! - `GD_EXTRACTION__SIGNATURE_STYLE=trailing` sets `extraction.signature_style`

use crate::error::{DriftError, DriftResult};
use crate::parsing::SignatureStyle;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the settings file, searched upward from the cwd
pub const CONFIG_DIR: &str = ".grammar-drift";

/// Settings file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "settings.toml";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Workspace root directory (where .grammar-drift is located)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_root: Option<PathBuf>,

    /// Global debug mode
    #[serde(default = "default_false")]
    pub debug: bool,

    /// Input file locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Method extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Stub generation settings
    #[serde(default)]
    pub stubs: StubsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PathsConfig {
    /// Directory relative paths resolve against (defaults to workspace root)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,

    /// Grammar file
    #[serde(default = "default_grammar_path")]
    pub grammar: PathBuf,

    /// Parser interface (header) file
    #[serde(default = "default_header_path")]
    pub header: PathBuf,

    /// Parser implementation file
    #[serde(default = "default_source_path")]
    pub source: PathBuf,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Signature shape parser methods are written in
    #[serde(default)]
    pub signature_style: SignatureStyle,

    /// Fold signatures spread over several lines before matching
    #[serde(default = "default_false")]
    pub join_multiline_signatures: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StubsConfig {
    /// Owning pointer wrapping node return types
    #[serde(default = "default_owning_pointer")]
    pub owning_pointer: String,

    /// Class qualifying out-of-line method definitions
    #[serde(default = "default_scope")]
    pub scope: String,

    /// Value returned by generated method bodies
    #[serde(default = "default_placeholder_return")]
    pub placeholder_return: String,

    /// Spaces used to indent declarations and stub bodies
    #[serde(default = "default_indent")]
    pub indent: usize,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_grammar_path() -> PathBuf {
    PathBuf::from("grammar/Zephyr.g4")
}
fn default_header_path() -> PathBuf {
    PathBuf::from("include/Parser.h")
}
fn default_source_path() -> PathBuf {
    PathBuf::from("src/Parser.cpp")
}
fn default_owning_pointer() -> String {
    "std::unique_ptr".to_string()
}
fn default_scope() -> String {
    "Parser".to_string()
}
fn default_placeholder_return() -> String {
    "nullptr".to_string()
}
fn default_indent() -> usize {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            workspace_root: None,
            debug: false,
            paths: PathsConfig::default(),
            extraction: ExtractionConfig::default(),
            stubs: StubsConfig::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            project_root: None,
            grammar: default_grammar_path(),
            header: default_header_path(),
            source: default_source_path(),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            signature_style: SignatureStyle::default(),
            join_multiline_signatures: false,
        }
    }
}

impl Default for StubsConfig {
    fn default() -> Self {
        Self {
            owning_pointer: default_owning_pointer(),
            scope: default_scope(),
            placeholder_return: default_placeholder_return(),
            indent: default_indent(),
        }
    }
}

impl Settings {
    /// Load configuration from all sources
    pub fn load() -> Result<Self, Box<figment::Error>> {
        // Try to find the workspace root by looking for .grammar-drift directory
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

        Self::figment(&config_path)
            .extract()
            .map_err(Box::new)
            .map(|mut settings: Settings| {
                if settings.workspace_root.is_none() {
                    settings.workspace_root = Self::workspace_root();
                }
                settings
            })
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Self::figment(path.as_ref()).extract().map_err(Box::new)
    }

    fn figment(config_path: &Path) -> Figment {
        Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Settings::default()))
            // Layer in config file if it exists
            .merge(Toml::file(config_path))
            // Double underscore separates nested levels, single underscore
            // stays inside field names
            .merge(Env::prefixed("GD_").map(|key| {
                key.as_str().to_lowercase().replace("__", ".").into()
            }))
    }

    /// Find the workspace settings file by looking for a .grammar-drift
    /// directory from the current directory up to root
    fn find_workspace_config() -> Option<PathBuf> {
        Self::workspace_root().map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Get the workspace root directory (where .grammar-drift is located)
    pub fn workspace_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        current
            .ancestors()
            .find(|ancestor| ancestor.join(CONFIG_DIR).is_dir())
            .map(Path::to_path_buf)
    }

    /// Directory relative input paths are resolved against.
    ///
    /// `paths.project_root` wins, then the detected workspace root, then the
    /// current directory.
    pub fn project_root(&self) -> PathBuf {
        self.paths
            .project_root
            .clone()
            .or_else(|| self.workspace_root.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve an input path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root().join(path)
        }
    }

    pub fn grammar_path(&self) -> PathBuf {
        self.resolve(&self.paths.grammar)
    }

    pub fn header_path(&self) -> PathBuf {
        self.resolve(&self.paths.header)
    }

    pub fn source_path(&self) -> PathBuf {
        self.resolve(&self.paths.source)
    }

    /// Create a default settings file with helpful comments in the current
    /// directory
    pub fn init_config_file(force: bool) -> DriftResult<PathBuf> {
        Self::init_config_file_at(&PathBuf::from(CONFIG_DIR).join(CONFIG_FILE), force)
    }

    /// Create a default settings file with helpful comments at `config_path`
    pub fn init_config_file_at(config_path: &Path, force: bool) -> DriftResult<PathBuf> {
        if !force && config_path.exists() {
            return Err(DriftError::ConfigError {
                reason: format!(
                    "configuration file already exists at {}. Use --force to overwrite",
                    config_path.display()
                ),
            });
        }

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| DriftError::FileWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(config_path, SETTINGS_TEMPLATE).map_err(|source| {
            DriftError::FileWrite {
                path: config_path.to_path_buf(),
                source,
            }
        })?;

        tracing::info!("wrote settings template to {}", config_path.display());
        Ok(config_path.to_path_buf())
    }
}

const SETTINGS_TEMPLATE: &str = r#"# grammar-drift configuration file

# Version of the configuration schema
version = 1

# Global debug mode (same as --verbose)
debug = false

[paths]
# Relative paths resolve against project_root, or the directory holding
# .grammar-drift when project_root is unset
# project_root = "."
grammar = "grammar/Zephyr.g4"
header = "include/Parser.h"
source = "src/Parser.cpp"

[extraction]
# Signature shape of parser methods:
#   "leading"  -> std::unique_ptr<Node> name(...)
#   "trailing" -> auto name(...) -> std::unique_ptr<Node>
#   "any"      -> either
signature_style = "leading"

# Join signatures whose parameter list spans several lines before matching
join_multiline_signatures = false

[stubs]
# Owning pointer wrapping the node type in generated stubs
owning_pointer = "std::unique_ptr"

# Class that qualifies method definitions (Parser::block)
scope = "Parser"

# Value returned from generated method bodies
placeholder_return = "nullptr"

# Indentation width for declarations and stub bodies
indent = 4
"#;
