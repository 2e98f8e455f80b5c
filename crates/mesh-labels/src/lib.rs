//! Label generation for deployed applications
//!
//! Builds identifiers of the form `{prefix}{model}{separator}{app}{suffix}` that
//! always fit a fixed length budget (63 characters by default, the limit for
//! Kubernetes label values). When the full form does not fit, the model and
//! application names are truncated proportionally and a short content digest of
//! the untruncated names is appended so distinct inputs stay distinct.

pub mod digest;
pub mod error;
pub mod label;

pub use digest::{HASH_LENGTH, content_digest};
pub use error::{Error, Result};
pub use label::{
    DEFAULT_MAX_LENGTH, DEFAULT_SEPARATOR, LabelOptions, generate_label, generate_label_with,
};
