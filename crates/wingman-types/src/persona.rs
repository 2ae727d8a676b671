//! Expert persona types.
//!
//! A persona is a fixed instruction string that conditions the remote
//! model's answer style and scope for one topic domain. Personas are
//! defined at startup and never change for the lifetime of the process.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Topic domain an expert persona covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Aviation,
    Automobile,
}

impl Domain {
    /// All supported domains, in menu order.
    pub const ALL: [Domain; 2] = [Domain::Aviation, Domain::Automobile];
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Aviation => write!(f, "aviation"),
            Domain::Automobile => write!(f, "automobile"),
        }
    }
}

impl FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aviation" => Ok(Domain::Aviation),
            "automobile" => Ok(Domain::Automobile),
            other => Err(format!("unknown domain: '{other}'")),
        }
    }
}

impl Default for Domain {
    fn default() -> Self {
        Domain::Automobile
    }
}

/// A fixed expert persona: domain key, display label, instruction string.
///
/// The instruction is sent as the system message on every completion for
/// a session whose selected domain matches `domain`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub domain: Domain,
    /// Label shown in selector controls (e.g., "Aviation ✈️").
    pub label: String,
    /// System prompt conditioning the model. Never empty.
    pub instruction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_roundtrip() {
        for domain in Domain::ALL {
            let s = domain.to_string();
            let parsed: Domain = s.parse().unwrap();
            assert_eq!(domain, parsed);
        }
    }

    #[test]
    fn test_domain_from_str_case_insensitive() {
        assert_eq!("AVIATION".parse::<Domain>().unwrap(), Domain::Aviation);
        assert_eq!("  Automobile ".parse::<Domain>().unwrap(), Domain::Automobile);
    }

    #[test]
    fn test_domain_from_str_unknown() {
        assert!("maritime".parse::<Domain>().is_err());
    }

    #[test]
    fn test_domain_default_is_automobile() {
        assert_eq!(Domain::default(), Domain::Automobile);
    }

    #[test]
    fn test_domain_serde() {
        let json = serde_json::to_string(&Domain::Aviation).unwrap();
        assert_eq!(json, "\"aviation\"");
        let parsed: Domain = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Domain::Aviation);
    }
}
