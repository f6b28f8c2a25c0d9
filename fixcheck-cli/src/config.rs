//! Configuration file loading for fixcheck.
//!
//! Loads `fixcheck.toml` from a directory named with `--config-dir`. Nothing is discovered
//! implicitly. Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fixcheck_domain::{resolve_target, DEFAULT_TARGET_REL};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "fixcheck.toml";

/// Directory the default target is resolved from: the one holding the running executable.
///
/// For a workspace build (`target/<profile>/fixcheck`) two levels up is the workspace root.
pub fn default_anchor() -> anyhow::Result<Utf8PathBuf> {
    let exe = std::env::current_exe().context("locate running executable")?;
    let exe = Utf8PathBuf::from_path_buf(exe)
        .map_err(|p| anyhow::anyhow!("executable path is not UTF-8: {}", p.display()))?;
    exe.parent()
        .map(Utf8Path::to_path_buf)
        .ok_or_else(|| anyhow::anyhow!("executable path has no parent: {}", exe))
}

/// Top-level configuration from fixcheck.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixcheckConfig {
    /// Target file settings.
    pub target: TargetConfig,
}

/// Target section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    /// File to inspect. Relative paths resolve against the config directory.
    pub path: Option<Utf8PathBuf>,
}

/// Discover the fixcheck.toml config file.
///
/// Returns `None` if no config file is found in `config_dir`.
pub fn discover_config(config_dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = config_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a fixcheck.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<FixcheckConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<FixcheckConfig> {
    let config: FixcheckConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load config from `config_dir`, or return default if not found.
pub fn load_or_default(config_dir: &Utf8Path) -> anyhow::Result<FixcheckConfig> {
    match discover_config(config_dir) {
        Some(path) => load_config(&path),
        None => Ok(FixcheckConfig::default()),
    }
}

/// Where the effective target path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOrigin {
    Cli,
    ConfigFile,
    Default,
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone)]
pub struct MergedConfig {
    /// Resolved target path.
    pub target: Utf8PathBuf,
    pub origin: TargetOrigin,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: FixcheckConfig,
}

impl ConfigMerger {
    /// Create a new merger from a loaded config.
    pub fn new(config: FixcheckConfig) -> Self {
        Self { config }
    }

    /// Merge with check command CLI arguments.
    ///
    /// `--target` is used as given. A config file path resolves against `config_dir`;
    /// the built-in default resolves against `anchor`.
    pub fn merge_check_args(
        self,
        cli_target: Option<&Utf8Path>,
        config_dir: Option<&Utf8Path>,
        anchor: &Utf8Path,
    ) -> MergedConfig {
        if let Some(target) = cli_target {
            return MergedConfig {
                target: target.to_path_buf(),
                origin: TargetOrigin::Cli,
            };
        }
        if let (Some(path), Some(dir)) = (self.config.target.path, config_dir) {
            return MergedConfig {
                target: resolve_target(dir, &path),
                origin: TargetOrigin::ConfigFile,
            };
        }
        MergedConfig {
            target: resolve_target(anchor, Utf8Path::new(DEFAULT_TARGET_REL)),
            origin: TargetOrigin::Default,
        }
    }
}
