//! Data model shared by the parser and the resolver.
//!
//! Three shapes flow through the crate:
//!
//! - [`Settings`] — the normalized key/value pairs of a single profile.
//! - [`ProfileDocument`] — one parsed file: profile name to [`Settings`].
//! - [`ResolvedConfig`] — the merged result: four typed [`Field`]s plus
//!   passthrough keys carried over from the file profiles.

use std::collections::BTreeMap;

use serde::Serialize;

/// Name of the profile that is always present in a [`ProfileDocument`].
pub const DEFAULT_PROFILE: &str = "default";

static EMPTY_SETTINGS: Settings = Settings::new();

/// Normalized key/value pairs belonging to one profile.
///
/// Keys are stored in their canonical lower-camel-case form (see
/// [`normalize_key`](crate::normalize_key)). Iteration is ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, String>);

impl Settings {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set `key` to `value`, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Settings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A parsed credentials or config file.
///
/// Always contains the [`DEFAULT_PROFILE`]. Looking up any other profile
/// never fails: [`profile`](Self::profile) hands back an empty [`Settings`]
/// for names the file does not define.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProfileDocument(BTreeMap<String, Settings>);

impl Default for ProfileDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::len_without_is_empty)]
impl ProfileDocument {
    /// A document holding only an empty `default` profile.
    pub fn new() -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(DEFAULT_PROFILE.to_string(), Settings::new());
        Self(profiles)
    }

    /// Settings for `name`, or an empty [`Settings`] if the profile is absent.
    pub fn profile(&self, name: &str) -> &Settings {
        self.0.get(name).unwrap_or(&EMPTY_SETTINGS)
    }

    /// Settings for `name`, distinguishing an absent profile from an empty one.
    pub fn get(&self, name: &str) -> Option<&Settings> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of profiles. Never zero, since `default` is always present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Mutable settings for `name`, creating an empty profile on first use.
    pub(crate) fn profile_mut(&mut self, name: &str) -> &mut Settings {
        self.0.entry(name.to_string()).or_default()
    }
}

/// The four fields with fixed meaning in a [`ResolvedConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AccessKeyId,
    SecretAccessKey,
    SessionToken,
    Region,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::AccessKeyId,
        Field::SecretAccessKey,
        Field::SessionToken,
        Field::Region,
    ];

    /// Normalized settings key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::AccessKeyId => "accessKeyId",
            Field::SecretAccessKey => "secretAccessKey",
            Field::SessionToken => "sessionToken",
            Field::Region => "region",
        }
    }

    /// Secondary key consulted within the same source when [`key`](Self::key) is absent.
    pub fn fallback_key(self) -> Option<&'static str> {
        match self {
            Field::Region => Some("defaultRegion"),
            _ => None,
        }
    }

    /// Look up a normalized key among the fixed fields.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }
}

/// Credentials and region resolved from the environment and profile files.
///
/// Serializes to a flat camelCase object: the fixed fields (omitted when
/// unset) followed by every passthrough key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Every other key found in the selected file profiles.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl ResolvedConfig {
    pub fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::AccessKeyId => &self.access_key_id,
            Field::SecretAccessKey => &self.secret_access_key,
            Field::SessionToken => &self.session_token,
            Field::Region => &self.region,
        };
        value.as_deref()
    }

    pub(crate) fn set_field(&mut self, field: Field, value: Option<String>) {
        let slot = match field {
            Field::AccessKeyId => &mut self.access_key_id,
            Field::SecretAccessKey => &mut self.secret_access_key,
            Field::SessionToken => &mut self.session_token,
            Field::Region => &mut self.region,
        };
        *slot = value;
    }

    /// Look up any resolved key, fixed or passthrough, by its normalized name.
    pub fn get(&self, key: &str) -> Option<&str> {
        match Field::from_key(key) {
            Some(field) => self.field(field),
            None => self.extra.get(key).map(String::as_str),
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.field(*f).is_none()) && self.extra.is_empty()
    }
}
