//! Environment variable access.
//!
//! The resolver never calls `std::env` directly. It reads through
//! [`EnvSource`], which is implemented for [`EnvSnapshot`] (a captured set
//! of variables) so tests can pass synthetic data instead of mutating the
//! process environment.
//!
//! Empty values are treated as unset. Whitespace is a value like any other.

use std::collections::HashMap;

pub const ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";
pub const REGION: &str = "AWS_REGION";
pub const DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
pub const PROFILE: &str = "AWS_PROFILE";
pub const SHARED_CREDENTIALS_FILE: &str = "AWS_SHARED_CREDENTIALS_FILE";
pub const CONFIG_FILE: &str = "AWS_CONFIG_FILE";

/// Read-only lookup of named environment variables.
pub trait EnvSource {
    /// Raw value of `key`, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Value of `key`, or `None` when unset or empty.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|v| !v.is_empty())
    }
}

/// Variables captured at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot(HashMap<String, String>);

impl EnvSnapshot {
    /// Takes an iterator so callers can pass `std::env::vars()` or synthetic pairs.
    pub fn new<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Snapshot of the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        Self::new(std::env::vars_os().filter_map(|(k, v)| {
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }))
    }

    /// A snapshot with no variables.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl EnvSource for EnvSnapshot {
    fn var(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// The credential and region variables, with empty values already dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvCredentials {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub session_token: Option<String>,
    /// `AWS_REGION`, falling back to `AWS_DEFAULT_REGION`.
    pub region: Option<String>,
}

impl EnvCredentials {
    pub fn from_env(env: &(impl EnvSource + ?Sized)) -> Self {
        Self {
            access_key_id: env.non_empty(ACCESS_KEY_ID),
            secret_access_key: env.non_empty(SECRET_ACCESS_KEY),
            session_token: env.non_empty(SESSION_TOKEN),
            region: env.non_empty(REGION).or_else(|| env.non_empty(DEFAULT_REGION)),
        }
    }

    /// Key id, secret and region are all set: enough to skip the files.
    pub fn is_complete(&self) -> bool {
        self.access_key_id.is_some() && self.secret_access_key.is_some() && self.region.is_some()
    }
}
