//! Environment variable expansion for configuration strings.
//!
//! Supports:
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default

use crate::ConfigError;

/// Expand environment variable references in a string.
///
/// Returns the original string unchanged if no `${}` patterns are present.
/// Bare `$VAR` syntax is not expanded (only `${VAR}` with braces).
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, LookupError> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(LookupError {
                var_name: var.to_owned(),
            }),
        }
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{0}}} not set", e.cause.var_name),
    })
}

/// Error returned when environment variable lookup fails.
struct LookupError {
    var_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_simple_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("BLOCKWISE_TEST_ROOT", "prose");
        }
        let result = expand_env("${BLOCKWISE_TEST_ROOT}", "render.root_class").unwrap();
        assert_eq!(result, "prose");
        unsafe {
            std::env::remove_var("BLOCKWISE_TEST_ROOT");
        }
    }

    #[test]
    fn test_expand_with_default_uses_default() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("BLOCKWISE_TEST_UNSET");
        }
        let result = expand_env("${BLOCKWISE_TEST_UNSET:-/data}", "render.pointer").unwrap();
        assert_eq!(result, "/data");
    }

    #[test]
    fn test_expand_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("BLOCKWISE_TEST_THEME", "dark");
        }
        let result = expand_env("prose prose-${BLOCKWISE_TEST_THEME}", "render.root_class").unwrap();
        assert_eq!(result, "prose prose-dark");
        unsafe {
            std::env::remove_var("BLOCKWISE_TEST_THEME");
        }
    }

    #[test]
    fn test_expand_missing_var_error() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("BLOCKWISE_TEST_MISSING");
        }
        let err = expand_env("${BLOCKWISE_TEST_MISSING}", "render.pointer").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("BLOCKWISE_TEST_MISSING"));
        assert!(err.to_string().contains("render.pointer"));
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("prose", "f").unwrap(), "prose");
        assert_eq!(expand_env("$VAR", "f").unwrap(), "$VAR");
    }
}
