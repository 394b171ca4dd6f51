//! Parser for the shared credentials and config file format.
//!
//! Both `~/.aws/credentials` and `~/.aws/config` use the same line-oriented,
//! INI-like layout:
//!
//! ```text
//! # comment
//! aws_access_key_id = AKID          <- before any header: "default"
//!
//! [profile work]                    <- config-file style header
//! region = "eu-west-1"
//!
//! [work]                            <- credentials-file style, same profile
//! aws_secret_access_key = secret
//! ```
//!
//! Rules, applied line by line after trimming:
//!
//! - Blank lines and lines starting with `#` are skipped. A `#` later in a
//!   line is part of the value.
//! - `[name]` and `[profile name]` both select profile `name`.
//! - Everything else is `key = value`, split on the first `=`. A line
//!   without `=` becomes a key with an empty value.
//! - One matching pair of surrounding quotes is removed from the value.
//! - Keys are normalized by [`normalize_key`].
//!
//! This is intentionally not a general INI parser: there are no nested
//! sections, continuation lines or escape sequences.

use crate::types::{DEFAULT_PROFILE, ProfileDocument};

/// Namespace segment dropped from the front of keys (`aws_region` → `region`).
const NAMESPACE_PREFIX: &str = "aws";

/// Word that may precede the profile name in a header (`[profile foo]`).
const PROFILE_KEYWORD: &str = "profile";

/// Opening and closing quote pairs stripped from values.
const QUOTE_PAIRS: [(char, char); 4] = [('"', '"'), ('\'', '\''), ('“', '”'), ('‘', '’')];

/// Parse file content into a [`ProfileDocument`].
///
/// Never fails. Empty input (or the content of a file that does not exist)
/// yields a document with a single empty `default` profile.
pub fn parse(text: &str) -> ProfileDocument {
    let mut doc = ProfileDocument::new();
    let mut current = DEFAULT_PROFILE.to_string();

    // `lines()` splits on `\n` and drops a trailing `\r`.
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            current = parse_header(line).to_string();
            doc.profile_mut(&current);
            tracing::trace!(profile = %current, "profile header");
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some((key, value)) => (key.trim(), strip_quotes(value.trim())),
            None => {
                tracing::debug!(line, "line has no '=', treating it as a key with an empty value");
                (line, "")
            }
        };

        doc.profile_mut(&current).insert(normalize_key(key), value);
    }

    doc
}

/// Normalize a settings key to lower camel case.
///
/// Segments are separated by `_`. Each segment is case-folded, a leading
/// `aws` segment is dropped, and the remaining segments are joined with
/// every segment after the first capitalized:
///
/// - `aws_secret_access_key` → `secretAccessKey`
/// - `AWS_SESSION_TOKEN` → `sessionToken`
/// - `role_arn` → `roleArn`
///
/// A segment that starts lowercase and continues in mixed case is taken to
/// be camel case already and kept as written; any other segment is
/// lower-cased whole. This makes the function idempotent
/// (`secretAccessKey` normalizes to itself) while `REGION`, `Region` and
/// `rEGION` all become `region`.
pub fn normalize_key(key: &str) -> String {
    let raw: Vec<&str> = key.split('_').collect();

    let raw = match raw.split_first() {
        Some((first, rest))
            if first.eq_ignore_ascii_case(NAMESPACE_PREFIX) && rest.iter().any(|s| !s.is_empty()) =>
        {
            rest
        }
        _ => &raw[..],
    };

    let mut out = String::with_capacity(key.len());
    for (i, segment) in raw.iter().map(|s| fold_segment(s)).enumerate() {
        if i == 0 {
            out.push_str(&segment);
        } else {
            push_capitalized(&mut out, &segment);
        }
    }
    out
}

fn fold_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    let starts_lower = chars.next().is_some_and(char::is_lowercase);
    let rest = chars.as_str();
    let is_camel = starts_lower
        && rest.chars().any(char::is_uppercase)
        && rest.chars().any(char::is_lowercase);

    if is_camel {
        segment.to_string()
    } else {
        segment.to_lowercase()
    }
}

fn push_capitalized(out: &mut String, segment: &str) {
    let mut chars = segment.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

/// Extract the profile name from a header line starting with `[`.
fn parse_header(line: &str) -> &str {
    let inner = &line[1..];
    let inner = match inner.find(']') {
        Some(end) => &inner[..end],
        None => inner,
    };
    strip_profile_keyword(inner.trim())
}

fn strip_profile_keyword(name: &str) -> &str {
    let Some(head) = name.get(..PROFILE_KEYWORD.len()) else {
        return name;
    };
    if !head.eq_ignore_ascii_case(PROFILE_KEYWORD) {
        return name;
    }

    let rest = &name[PROFILE_KEYWORD.len()..];
    match rest.chars().next() {
        Some(c) if c.is_whitespace() => rest.trim_start(),
        _ => name,
    }
}

/// Remove one matching pair of outer quotes. Mismatched pairs are kept.
fn strip_quotes(value: &str) -> &str {
    QUOTE_PAIRS
        .iter()
        .find_map(|&(open, close)| value.strip_prefix(open)?.strip_suffix(close))
        .unwrap_or(value)
}
