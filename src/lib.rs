//! Resolve AWS credentials and region the way the AWS tooling does: from
//! environment variables, the shared credentials file and the config file.
//!
//! ```no_run
//! use aws_shared_config::AwsConfig;
//!
//! let resolved = AwsConfig::builder().profile("work").resolve()?;
//! println!("region: {:?}", resolved.region);
//! # Ok::<(), aws_shared_config::AwsConfigError>(())
//! ```
//!
//! That call checks `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and
//! `AWS_REGION`/`AWS_DEFAULT_REGION`. If all three are set it returns them
//! without touching the disk. Otherwise it reads `~/.aws/credentials` and
//! `~/.aws/config`, selects the `work` profile in both, and merges.
//!
//! # Layer precedence
//!
//! ```text
//! Config file profile         [profile work] in ~/.aws/config
//!        ↑ overridden by
//! Credentials file profile    [work] in ~/.aws/credentials
//!        ↑ overridden by
//! Environment variables       AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY,
//!                             AWS_SESSION_TOKEN, AWS_REGION
//! ```
//!
//! The environment only contributes the four fixed fields (see [`Field`]).
//! Any other key in either profile, such as `role_arn` or `output`, is
//! passed through in [`ResolvedConfig::extra`], with the credentials file
//! winning over the config file on collision.
//!
//! The region additionally falls back to a `default_region` key inside each
//! profile before moving on to the next, lower layer.
//!
//! # Choosing what to read
//!
//! | option | env var | default |
//! |---|---|---|
//! | [`profile()`](AwsConfigBuilder::profile) | `AWS_PROFILE` | `default` |
//! | [`credentials_file()`](AwsConfigBuilder::credentials_file) | `AWS_SHARED_CREDENTIALS_FILE` | `~/.aws/credentials` |
//! | [`config_file()`](AwsConfigBuilder::config_file) | `AWS_CONFIG_FILE` | `~/.aws/config` |
//!
//! [`no_env()`](AwsConfigBuilder::no_env) ignores the environment entirely,
//! including the variables in the table above. [`no_fs()`](AwsConfigBuilder::no_fs)
//! never reads either file; unless the environment alone is complete, the
//! result is then empty.
//!
//! # File format
//!
//! Both files share one line-oriented format, handled by [`parse`]:
//!
//! ```text
//! # full-line comment
//! [default]
//! aws_access_key_id = AKIAEXAMPLE
//! aws_secret_access_key = "wJalrXUtnFEMI"
//!
//! [profile work]
//! region = eu-west-1
//! role_arn = arn:aws:iam::123456789012:role/dev
//! ```
//!
//! `[work]` and `[profile work]` name the same profile. Keys are normalized
//! to lower camel case with the `aws_` prefix removed (`aws_access_key_id`
//! becomes `accessKeyId`, see [`normalize_key`]).
//!
//! # Missing data is not an error
//!
//! A missing file reads as empty, a missing profile is an empty
//! [`Settings`], and a field nobody sets is `None`. The only error,
//! [`AwsConfigError::IoError`], is an actual read failure on a file that
//! exists.
//!
//! # Testing without the real environment
//!
//! [`AwsConfigBuilder::resolve_with`] takes the environment ([`EnvSource`]),
//! the filesystem ([`FileSource`]) and the home directory explicitly.
//! [`EnvSnapshot::new`] builds an environment from plain pairs, and
//! [`resolve::resolve`] runs the merge on already-loaded file contents.

pub mod error;
pub mod resolve;
pub mod types;

mod builder;
mod env;
mod file;
mod merge;
mod parse;

#[cfg(test)]
mod fixtures;

pub use builder::{AwsConfig, AwsConfigBuilder};
pub use env::{EnvCredentials, EnvSnapshot, EnvSource};
pub use error::AwsConfigError;
pub use file::{FileSource, OsFiles, default_config_path, default_credentials_path, home_dir};
pub use merge::Source;
pub use parse::{normalize_key, parse};
pub use resolve::ResolveInput;
pub use types::{DEFAULT_PROFILE, Field, ProfileDocument, ResolvedConfig, Settings};
