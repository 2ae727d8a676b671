use thiserror::Error;

/// Errors raised while assembling the application at startup.
///
/// These are the only unrecoverable failures Wingman defines: if the
/// credential or configuration cannot be resolved, startup halts before
/// any request is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} not found in the environment. Set it before starting wingman.")]
    MissingCredential { var: String },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_names_the_variable() {
        let err = ConfigError::MissingCredential {
            var: "GROQ_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }
}
