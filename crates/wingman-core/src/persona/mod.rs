//! Fixed catalog of expert personas.
//!
//! The catalog is built once at startup and read-only thereafter. Lookup
//! is total: an unrecognized key or label resolves to the default
//! (automobile) persona rather than failing, so callers never have to
//! handle a missing persona.

use wingman_types::persona::{Domain, Persona};

const AVIATION_INSTRUCTION: &str = "You are an aviation expert with in-depth knowledge about aircraft, \
flight operations, aerodynamics, pilot training, airline industry, aviation safety, and aerospace \
technologies. Answer questions only related to aviation. If asked anything unrelated, respond with: \
'I don't know!'";

const AUTOMOBILE_INSTRUCTION: &str = "You are an automobile expert with in-depth knowledge about all \
things related to cars, bikes, trucks, and the automotive industry. You provide detailed, accurate, \
and up-to-date answers about vehicle specifications, maintenance tips, technologies, brands, \
comparisons, history, and trends. For any non-automobile question, respond with: 'I don't know!'";

/// Immutable persona catalog covering every supported domain.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
}

impl PersonaCatalog {
    /// Build the catalog with the built-in aviation and automobile personas.
    pub fn new() -> Self {
        Self {
            personas: vec![
                Persona {
                    domain: Domain::Aviation,
                    label: "Aviation ✈️".to_string(),
                    instruction: AVIATION_INSTRUCTION.to_string(),
                },
                Persona {
                    domain: Domain::Automobile,
                    label: "Automobile 🚗".to_string(),
                    instruction: AUTOMOBILE_INSTRUCTION.to_string(),
                },
            ],
        }
    }

    /// All personas, in menu order.
    pub fn all(&self) -> &[Persona] {
        &self.personas
    }

    /// Persona for a domain. Total: every domain has exactly one persona.
    pub fn get(&self, domain: Domain) -> &Persona {
        self.personas
            .iter()
            .find(|p| p.domain == domain)
            .unwrap_or(&self.personas[0])
    }

    /// Persona for an arbitrary key string (case-insensitive).
    ///
    /// Unknown keys resolve to the default persona. Never fails, never
    /// returns an empty instruction.
    pub fn resolve(&self, key: &str) -> &Persona {
        let domain = key.parse::<Domain>().unwrap_or_default();
        self.get(domain)
    }

    /// Persona for a selector label (exact match, as used by the web UI).
    ///
    /// Unknown labels resolve to the default persona.
    pub fn by_label(&self, label: &str) -> &Persona {
        self.personas
            .iter()
            .find(|p| p.label == label)
            .unwrap_or_else(|| self.get(Domain::default()))
    }
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_has_a_nonempty_instruction() {
        let catalog = PersonaCatalog::new();
        for domain in Domain::ALL {
            let persona = catalog.get(domain);
            assert_eq!(persona.domain, domain);
            assert!(!persona.instruction.is_empty());
        }
    }

    #[test]
    fn test_instructions_are_domain_specific() {
        let catalog = PersonaCatalog::new();
        assert!(catalog.get(Domain::Aviation).instruction.contains("aviation"));
        assert!(catalog.get(Domain::Automobile).instruction.contains("automobile"));
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let catalog = PersonaCatalog::new();
        assert_eq!(catalog.resolve("AVIATION").domain, Domain::Aviation);
        assert_eq!(catalog.resolve("Automobile").domain, Domain::Automobile);
    }

    #[test]
    fn test_resolve_unknown_key_falls_back_to_default() {
        let catalog = PersonaCatalog::new();
        let persona = catalog.resolve("maritime");
        assert_eq!(persona.domain, Domain::Automobile);
        assert!(!persona.instruction.is_empty());
    }

    #[test]
    fn test_by_label_exact_match() {
        let catalog = PersonaCatalog::new();
        assert_eq!(catalog.by_label("Aviation ✈️").domain, Domain::Aviation);
    }

    #[test]
    fn test_by_label_unknown_falls_back_to_default() {
        let catalog = PersonaCatalog::new();
        // Lookup is exact: a bare "aviation" label is not recognized.
        assert_eq!(catalog.by_label("aviation").domain, Domain::Automobile);
    }

    #[test]
    fn test_all_lists_every_persona_once() {
        let catalog = PersonaCatalog::new();
        assert_eq!(catalog.all().len(), Domain::ALL.len());
    }
}
