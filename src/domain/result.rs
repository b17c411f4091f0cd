//! Result type alias for the registry
//!
//! This module provides a convenient Result type alias that uses
//! [`RegistryError`] as the error type.

use super::errors::RegistryError;

/// Result type alias for registry operations
///
/// # Examples
///
/// ```
/// use registry_guard::domain::result::Result;
/// use registry_guard::domain::errors::RegistryError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(RegistryError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, RegistryError>;
