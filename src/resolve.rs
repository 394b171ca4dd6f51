//! Core resolution pipeline: combine the environment and both profile files.
//!
//! Operates on pre-loaded data ([`ResolveInput`]) with no I/O, so the whole
//! pipeline is testable with synthetic inputs. The builder is responsible
//! for deciding whether files are read at all (see [`short_circuit`]).
//!
//! Precedence, highest first:
//!
//! ```text
//! Environment variables       AWS_ACCESS_KEY_ID, ..., AWS_REGION
//!        ↓ falls back to
//! Credentials file profile    [name]
//!        ↓ falls back to
//! Config file profile         [profile name]
//! ```
//!
//! Passthrough keys never come from the environment; for those the
//! credentials profile is overlaid on the config profile.

use crate::env::EnvCredentials;
use crate::merge::{self, Source};
use crate::parse::parse;
use crate::types::ResolvedConfig;

/// All pre-loaded data needed to resolve a profile. No I/O happens here.
#[derive(Debug, Clone, Default)]
pub struct ResolveInput {
    /// Environment credentials; leave empty when the environment is disabled.
    pub env: EnvCredentials,
    /// Profile to select in both files.
    pub profile: String,
    /// Raw credentials file content (empty if the file is missing).
    pub credentials: String,
    /// Raw config file content (empty if the file is missing).
    pub config: String,
}

/// Environment-only result when key id, secret and region are all set.
///
/// The session token is carried along whether or not it is present. No
/// passthrough keys are produced on this path.
pub fn short_circuit(env: &EnvCredentials) -> Option<ResolvedConfig> {
    if !env.is_complete() {
        return None;
    }
    Some(ResolvedConfig {
        access_key_id: env.access_key_id.clone(),
        secret_access_key: env.secret_access_key.clone(),
        session_token: env.session_token.clone(),
        region: env.region.clone(),
        ..Default::default()
    })
}

/// Parse both files, select the profile and merge with the environment.
pub fn resolve(input: &ResolveInput) -> ResolvedConfig {
    let credentials = parse(&input.credentials);
    let config = parse(&input.config);

    let sources = [
        Source::Env(&input.env),
        Source::Profile {
            name: "credentials",
            settings: credentials.profile(&input.profile),
        },
        Source::Profile {
            name: "config",
            settings: config.profile(&input.profile),
        },
    ];

    merge::merge(&sources)
}
