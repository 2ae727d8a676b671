//! Environment variable secret store.
//!
//! Read-only: credentials are set via shell config or a process manager,
//! never written by Wingman. An absent required credential is the one
//! fatal initialization error this system defines.

use secrecy::SecretString;

use wingman_types::error::ConfigError;

/// Read-only secret store over process environment variables.
pub struct EnvSecretStore;

impl EnvSecretStore {
    pub fn new() -> Self {
        Self
    }

    /// Look up an optional credential.
    ///
    /// A variable with invalid Unicode is treated as absent rather than an
    /// error, since credentials must be valid strings.
    pub fn get(&self, var: &str) -> Option<SecretString> {
        match std::env::var(var) {
            Ok(val) if !val.trim().is_empty() => Some(SecretString::from(val)),
            _ => None,
        }
    }

    /// Look up a required credential.
    ///
    /// Absence halts startup with a diagnostic naming the variable; no
    /// request is ever attempted without it.
    pub fn require(&self, var: &str) -> Result<SecretString, ConfigError> {
        self.get(var).ok_or_else(|| ConfigError::MissingCredential {
            var: var.to_string(),
        })
    }
}

impl Default for EnvSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_get_existing_var() {
        // SAFETY: tests in this module use unique variable names and clean up.
        unsafe { std::env::set_var("WINGMAN_TEST_SECRET_1", "gsk-test-123") };

        let store = EnvSecretStore::new();
        let secret = store.get("WINGMAN_TEST_SECRET_1").unwrap();
        assert_eq!(secret.expose_secret(), "gsk-test-123");

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("WINGMAN_TEST_SECRET_1") };
    }

    #[test]
    fn test_get_missing_var_is_none() {
        let store = EnvSecretStore::new();
        assert!(store.get("WINGMAN_NONEXISTENT_VAR_XYZ").is_none());
    }

    #[test]
    fn test_blank_var_is_treated_as_absent() {
        // SAFETY: unique variable name, removed below.
        unsafe { std::env::set_var("WINGMAN_TEST_SECRET_2", "   ") };

        let store = EnvSecretStore::new();
        assert!(store.get("WINGMAN_TEST_SECRET_2").is_none());

        // SAFETY: the var was just set above.
        unsafe { std::env::remove_var("WINGMAN_TEST_SECRET_2") };
    }

    #[test]
    fn test_require_missing_var_names_it() {
        let store = EnvSecretStore::new();
        let err = store.require("WINGMAN_NONEXISTENT_VAR_XYZ").unwrap_err();
        assert!(err.to_string().contains("WINGMAN_NONEXISTENT_VAR_XYZ"));
    }
}
