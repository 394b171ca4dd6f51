use std::collections::BTreeMap;

use crate::env::EnvCredentials;
use crate::types::{Field, ResolvedConfig, Settings};

/// One input to the merge, listed highest priority first.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// Credential and region variables from the environment.
    Env(&'a EnvCredentials),
    /// The selected profile of a parsed file.
    Profile {
        name: &'static str,
        settings: &'a Settings,
    },
}

impl<'a> Source<'a> {
    pub fn name(&self) -> &'static str {
        match *self {
            Source::Env(_) => "environment",
            Source::Profile { name, .. } => name,
        }
    }

    /// Value this source provides for `field`. Empty values count as absent.
    ///
    /// Profiles check the field's primary key, then its fallback key.
    pub fn field(&self, field: Field) -> Option<&'a str> {
        match *self {
            Source::Env(env) => {
                let value = match field {
                    Field::AccessKeyId => &env.access_key_id,
                    Field::SecretAccessKey => &env.secret_access_key,
                    Field::SessionToken => &env.session_token,
                    Field::Region => &env.region,
                };
                value.as_deref()
            }
            Source::Profile { settings, .. } => {
                let primary = settings.get(field.key()).filter(|v| !v.is_empty());
                primary.or_else(|| {
                    let fallback = field.fallback_key()?;
                    settings.get(fallback).filter(|v| !v.is_empty())
                })
            }
        }
    }

    fn settings(&self) -> Option<&'a Settings> {
        match *self {
            Source::Env(_) => None,
            Source::Profile { settings, .. } => Some(settings),
        }
    }
}

/// Merge `sources` (highest priority first) into a [`ResolvedConfig`].
///
/// Each fixed [`Field`] takes the first value found walking the sources in
/// order. Every other key comes from overlaying the profile sources from
/// lowest to highest priority, so a higher source wins on collision.
pub fn merge(sources: &[Source<'_>]) -> ResolvedConfig {
    let mut resolved = ResolvedConfig {
        extra: overlay(sources.iter().rev().filter_map(Source::settings)),
        ..Default::default()
    };

    for field in Field::ALL {
        let found = sources
            .iter()
            .find_map(|source| source.field(field).map(|value| (source.name(), value)));
        if let Some((from, _)) = found {
            tracing::trace!(field = field.key(), source = from, "resolved field");
        }
        resolved.set_field(field, found.map(|(_, value)| value.to_string()));
    }

    resolved
}

/// Overlay settings in order (later wins), leaving out the fixed fields.
pub fn overlay<'a>(layers: impl IntoIterator<Item = &'a Settings>) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();
    for layer in layers {
        for (key, value) in layer.iter() {
            if Field::from_key(key).is_none() {
                merged.insert(key.to_string(), value.to_string());
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(pairs: &[(&str, &str)]) -> Settings {
        pairs.iter().copied().collect()
    }

    fn profile<'a>(name: &'static str, settings: &'a Settings) -> Source<'a> {
        Source::Profile { name, settings }
    }

    #[test]
    fn higher_source_wins_fixed_field() {
        let creds = settings(&[("accessKeyId", "A")]);
        let config = settings(&[("accessKeyId", "B")]);
        let merged = merge(&[profile("credentials", &creds), profile("config", &config)]);
        assert_eq!(merged.access_key_id.as_deref(), Some("A"));
    }

    #[test]
    fn env_beats_profiles() {
        let env = EnvCredentials {
            session_token: Some("ENV_TOKEN".into()),
            ..Default::default()
        };
        let creds = settings(&[("sessionToken", "FILE_TOKEN"), ("accessKeyId", "A")]);
        let merged = merge(&[Source::Env(&env), profile("credentials", &creds)]);
        assert_eq!(merged.session_token.as_deref(), Some("ENV_TOKEN"));
        assert_eq!(merged.access_key_id.as_deref(), Some("A"));
    }

    #[test]
    fn lower_source_fills_gaps() {
        let creds = settings(&[("accessKeyId", "A")]);
        let config = settings(&[("secretAccessKey", "S")]);
        let merged = merge(&[profile("credentials", &creds), profile("config", &config)]);
        assert_eq!(merged.access_key_id.as_deref(), Some("A"));
        assert_eq!(merged.secret_access_key.as_deref(), Some("S"));
        assert_eq!(merged.session_token, None);
    }

    #[test]
    fn region_falls_back_within_source_before_next() {
        let creds = settings(&[("defaultRegion", "from-creds")]);
        let config = settings(&[("region", "from-config")]);
        let merged = merge(&[profile("credentials", &creds), profile("config", &config)]);
        assert_eq!(merged.region.as_deref(), Some("from-creds"));
    }

    #[test]
    fn primary_region_key_beats_fallback() {
        let creds = settings(&[("region", "primary"), ("defaultRegion", "fallback")]);
        let merged = merge(&[profile("credentials", &creds)]);
        assert_eq!(merged.region.as_deref(), Some("primary"));
    }

    #[test]
    fn empty_value_falls_through() {
        let creds = settings(&[("region", "")]);
        let config = settings(&[("region", "us-east-1")]);
        let merged = merge(&[profile("credentials", &creds), profile("config", &config)]);
        assert_eq!(merged.region.as_deref(), Some("us-east-1"));
    }

    #[test]
    fn passthrough_credentials_overlay_config() {
        let creds = settings(&[("output", "json")]);
        let config = settings(&[("output", "text"), ("someOtherConfig", "FRAUD")]);
        let merged = merge(&[profile("credentials", &creds), profile("config", &config)]);
        assert_eq!(merged.extra.get("output").map(String::as_str), Some("json"));
        assert_eq!(
            merged.extra.get("someOtherConfig").map(String::as_str),
            Some("FRAUD")
        );
    }

    #[test]
    fn passthrough_excludes_fixed_fields_only() {
        let config = settings(&[("region", "x"), ("defaultRegion", "y"), ("roleArn", "z")]);
        let merged = merge(&[profile("config", &config)]);
        assert!(!merged.extra.contains_key("region"));
        assert_eq!(merged.extra.get("defaultRegion").map(String::as_str), Some("y"));
        assert_eq!(merged.extra.get("roleArn").map(String::as_str), Some("z"));
    }

    #[test]
    fn no_sources_is_empty() {
        assert!(merge(&[]).is_empty());
    }

    #[test]
    fn overlay_later_wins() {
        let a = settings(&[("k", "1"), ("only_a", "a")]);
        let b = settings(&[("k", "2")]);
        let merged = overlay([&a, &b]);
        assert_eq!(merged["k"], "2");
        assert_eq!(merged["only_a"], "a");
    }
}
