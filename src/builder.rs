use std::path::{Path, PathBuf};

use crate::env::{self, EnvCredentials, EnvSnapshot, EnvSource};
use crate::error::AwsConfigError;
use crate::file::{self, FileSource, OsFiles};
use crate::resolve::{self, ResolveInput};
use crate::types::{DEFAULT_PROFILE, ResolvedConfig};

/// Entry point for resolving AWS credentials and region.
pub struct AwsConfig;

impl AwsConfig {
    pub fn builder() -> AwsConfigBuilder {
        AwsConfigBuilder::new()
    }
}

/// Options controlling a resolution.
///
/// Every option is optional. Unset values fall back first to the matching
/// environment variable, then to the built-in default:
///
/// | option | env var | default |
/// |---|---|---|
/// | [`profile`](Self::profile) | `AWS_PROFILE` | `default` |
/// | [`credentials_file`](Self::credentials_file) | `AWS_SHARED_CREDENTIALS_FILE` | `~/.aws/credentials` |
/// | [`config_file`](Self::config_file) | `AWS_CONFIG_FILE` | `~/.aws/config` |
///
/// Each call to [`resolve`](Self::resolve) reads everything afresh; nothing
/// is cached between calls.
#[derive(Debug, Clone)]
pub struct AwsConfigBuilder {
    profile: Option<String>,
    credentials_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    env_enabled: bool,
    fs_enabled: bool,
}

impl Default for AwsConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AwsConfigBuilder {
    fn new() -> Self {
        Self {
            profile: None,
            credentials_file: None,
            config_file: None,
            env_enabled: true,
            fs_enabled: true,
        }
    }

    /// Select a named profile (default: `AWS_PROFILE`, then `"default"`).
    pub fn profile(mut self, name: &str) -> Self {
        self.profile = Some(name.to_string());
        self
    }

    /// Override the shared credentials file location.
    pub fn credentials_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_file = Some(path.into());
        self
    }

    /// Override the config file location.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Enable or disable environment variables (default: `true`).
    ///
    /// When disabled no variable is consulted at all, including
    /// `AWS_PROFILE` and the file location overrides.
    pub fn env(mut self, enabled: bool) -> Self {
        self.env_enabled = enabled;
        self
    }

    /// Disable environment variables entirely.
    pub fn no_env(self) -> Self {
        self.env(false)
    }

    /// Enable or disable reading the profile files (default: `true`).
    pub fn fs(mut self, enabled: bool) -> Self {
        self.fs_enabled = enabled;
        self
    }

    /// Disable reading the profile files entirely.
    pub fn no_fs(self) -> Self {
        self.fs(false)
    }

    /// Resolve the effective profile name.
    fn effective_profile(&self, env: &dyn EnvSource) -> String {
        self.profile
            .clone()
            .filter(|name| !name.is_empty())
            .or_else(|| env.non_empty(env::PROFILE))
            .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
    }

    /// Resolve the effective credentials file path (`None` if there is no home directory).
    fn effective_credentials_file(
        &self,
        env: &dyn EnvSource,
        home: Option<&Path>,
    ) -> Option<PathBuf> {
        self.credentials_file
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| env.non_empty(env::SHARED_CREDENTIALS_FILE).map(PathBuf::from))
            .or_else(|| home.map(file::default_credentials_path))
    }

    /// Resolve the effective config file path (`None` if there is no home directory).
    fn effective_config_file(
        &self,
        env: &dyn EnvSource,
        home: Option<&Path>,
    ) -> Option<PathBuf> {
        self.config_file
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| env.non_empty(env::CONFIG_FILE).map(PathBuf::from))
            .or_else(|| home.map(file::default_config_path))
    }

    /// Resolve against the process environment, the real filesystem and the
    /// current user's home directory.
    pub fn resolve(&self) -> Result<ResolvedConfig, AwsConfigError> {
        let env = if self.env_enabled {
            EnvSnapshot::from_process()
        } else {
            EnvSnapshot::empty()
        };
        self.resolve_with(&env, &OsFiles, file::home_dir().as_deref())
    }

    /// Resolve with explicit collaborators.
    ///
    /// 1. Environment has key id, secret and region → return those, no file access
    /// 2. File access disabled → empty result
    /// 3. Read both files (missing = empty), select the profile, merge
    pub fn resolve_with(
        &self,
        env: &impl EnvSource,
        files: &impl FileSource,
        home: Option<&Path>,
    ) -> Result<ResolvedConfig, AwsConfigError> {
        let disabled = EnvSnapshot::empty();
        let env: &dyn EnvSource = if self.env_enabled { env } else { &disabled };

        let env_credentials = EnvCredentials::from_env(env);
        if let Some(resolved) = resolve::short_circuit(&env_credentials) {
            tracing::debug!("resolved entirely from environment");
            return Ok(resolved);
        }

        if !self.fs_enabled {
            tracing::debug!("file access disabled, nothing to resolve");
            return Ok(ResolvedConfig::default());
        }

        let profile = self.effective_profile(env);
        let credentials_path = self.effective_credentials_file(env, home);
        let config_path = self.effective_config_file(env, home);
        tracing::debug!(
            profile = %profile,
            credentials = ?credentials_path,
            config = ?config_path,
            "resolving from profile files"
        );

        let input = ResolveInput {
            env: env_credentials,
            profile,
            credentials: read_optional(files, credentials_path.as_deref())?,
            config: read_optional(files, config_path.as_deref())?,
        };
        Ok(resolve::resolve(&input))
    }
}

fn read_optional(files: &impl FileSource, path: Option<&Path>) -> Result<String, AwsConfigError> {
    match path {
        Some(path) => file::load_text(files, path),
        None => {
            tracing::debug!("no home directory and no explicit path, using empty content");
            Ok(String::new())
        }
    }
}
