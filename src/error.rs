//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur when rendering a number through a formatter handle.
///
/// These are expected, recoverable conditions (a locale without spell-out
/// data, a non-finite value), not programming errors. The cached entry points
/// map them to an absent result; `try_format` exposes them directly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("value {value} is not finite")]
    NonFinite { value: f64 },

    #[error("locale '{locale}' has no {mode} data")]
    UnsupportedLocale { locale: String, mode: &'static str },

    #[error("value {value} is out of range for {mode} formatting")]
    OutOfRange { value: f64, mode: &'static str },
}
