//! Error types for the gridkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a grid page cannot be configured from the
//!   supplied template and layout metrics (missing anchor key, degenerate
//!   geometry, recents page without a settings store).
//! - [`InvariantError`]: Returned by [`GridCore::check_invariants`] when the
//!   internal order, positions or snapshot cache disagree.
//!
//! [`GridCore::check_invariants`]: crate::grid::GridCore::check_invariants
//!
//! ## Example Usage
//!
//! ```
//! use gridkit::error::ConfigError;
//! use gridkit::layout::{GridLayout, LayoutMetrics};
//!
//! // No anchor keys in an empty template.
//! let err: ConfigError = GridLayout::from_template(&[], LayoutMetrics::new(300, 0, 0))
//!     .unwrap_err();
//! assert!(err.to_string().contains("template key"));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal grid invariants are violated.
///
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when grid page configuration is invalid.
///
/// Produced by [`GridLayout::from_template`](crate::layout::GridLayout::from_template)
/// and [`GridPageBuilder::try_build`](crate::builder::GridPageBuilder::try_build).
/// A `ConfigError` means the caller's template or wiring is wrong; it is not a
/// condition to retry.
///
/// # Example
///
/// ```
/// use gridkit::builder::GridPageBuilder;
///
/// let err = GridPageBuilder::new(10).try_build().unwrap_err();
/// assert!(err.message().contains("template key"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
