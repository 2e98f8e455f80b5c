//! Bounded-length label generation
//!
//! # Example
//!
//! ```
//! use mesh_labels::{LabelOptions, generate_label, generate_label_with};
//!
//! assert_eq!(generate_label("model", "app").unwrap(), "model-app");
//!
//! let options = LabelOptions::default()
//!     .with_prefix("juju.is/")
//!     .with_separator(".");
//! assert_eq!(
//!     generate_label_with("model", "app", &options).unwrap(),
//!     "juju.is/model.app"
//! );
//! ```

use serde::Deserialize;

use crate::digest::{HASH_LENGTH, content_digest};
use crate::error::{Error, Result};

/// Default length budget, the Kubernetes label value limit.
pub const DEFAULT_MAX_LENGTH: usize = 63;

/// Default separator between model, app and digest.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Separators in a truncated label: model/app and app/digest.
const SEPARATOR_COUNT: usize = 2;

/// Minimum characters kept from each of the model and app names.
const MIN_PART_LENGTH: usize = 1;

/// Settings that shape a generated label.
///
/// Deserializable so label settings can live next to other deployment config;
/// any omitted field takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    /// Prepended verbatim, never truncated.
    pub prefix: String,
    /// Appended verbatim, never truncated.
    pub suffix: String,
    /// Upper bound on the label length, in characters.
    pub max_length: usize,
    /// Joins model, app and (when truncated) the digest.
    pub separator: String,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            suffix: String::new(),
            max_length: DEFAULT_MAX_LENGTH,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl LabelOptions {
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

/// Generate a label for `model` and `app` using [`LabelOptions::default`].
pub fn generate_label(model: &str, app: &str) -> Result<String> {
    generate_label_with(model, app, &LabelOptions::default())
}

/// Generate a label of at most `options.max_length` characters.
///
/// The untruncated form `{prefix}{model}{separator}{app}{suffix}` is returned
/// as-is when it fits. Otherwise the label becomes
/// `{prefix}{model'}{separator}{app'}{separator}{digest}{suffix}`, where
/// `model'` and `app'` are prefixes of the names sized in proportion to their
/// original lengths and `digest` is [`content_digest`] of the full names.
///
/// # Errors
///
/// - [`Error::EmptyName`] if `model` or `app` is empty
/// - [`Error::FixedPortionTooLong`] if truncation is needed but the fixed
///   portion leaves less than one character for each name
pub fn generate_label_with(model: &str, app: &str, options: &LabelOptions) -> Result<String> {
    if model.is_empty() {
        return Err(Error::EmptyName { field: "model_name" });
    }
    if app.is_empty() {
        return Err(Error::EmptyName { field: "app_name" });
    }

    let LabelOptions {
        prefix,
        suffix,
        max_length,
        separator,
    } = options;
    let max_length = *max_length;

    let label = format!("{prefix}{model}{separator}{app}{suffix}");
    if label.chars().count() <= max_length {
        return Ok(label);
    }

    let fixed_length = prefix.chars().count()
        + suffix.chars().count()
        + HASH_LENGTH
        + SEPARATOR_COUNT * separator.chars().count();
    if fixed_length + 2 * MIN_PART_LENGTH > max_length {
        return Err(Error::FixedPortionTooLong {
            fixed_length,
            max_length,
        });
    }

    let digest = content_digest(model, separator, app);

    let model_chars = model.chars().count();
    let app_chars = app.chars().count();
    let available = max_length - fixed_length;
    let model_len = proportional_share(available, model_chars, app_chars).max(MIN_PART_LENGTH);
    let app_len = available.saturating_sub(model_len).max(MIN_PART_LENGTH);

    tracing::debug!(
        model,
        app,
        model_len,
        app_len,
        "Truncating label to fit {} characters",
        max_length
    );

    Ok(format!(
        "{prefix}{}{separator}{}{separator}{digest}{suffix}",
        take_chars(model, model_len),
        take_chars(app, app_len),
    ))
}

/// `floor(available * part / (part + rest))`, computed without overflow.
///
/// The result never exceeds `available`.
fn proportional_share(available: usize, part: usize, rest: usize) -> usize {
    let total = part as u128 + rest as u128;
    if total == 0 {
        return 0;
    }
    let share = available as u128 * part as u128 / total;
    usize::try_from(share).unwrap_or(available)
}

/// The first `count` characters of `s`, or all of `s` if it is shorter.
fn take_chars(s: &str, count: usize) -> &str {
    match s.char_indices().nth(count) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
