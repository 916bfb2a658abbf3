//! Parsed SAML2 assertion model.
//!
//! Values here arrive from an upstream XML parser already decoded: ids and
//! issuers as strings, temporal bounds as UTC timestamps. Nothing in this
//! module touches wire formats or validates content.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A SAML2 assertion identifier.
///
/// The surrounding framework generates a `_`-prefixed unique id when an
/// assertion is minted locally; parsed assertions carry whatever the wire
/// had, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Saml2Id {
    pub value: String,
}

impl Saml2Id {
    /// Wrap an identifier value as-is.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Generate a fresh unique identifier. SAML2 ids are NCNames, which may
    /// not start with a digit, hence the underscore prefix.
    pub fn generate() -> Self {
        Self {
            value: format!("_{}", Uuid::new_v4()),
        }
    }
}

impl Default for Saml2Id {
    fn default() -> Self {
        Self::generate()
    }
}

/// A SAML2 name identifier, used here for the assertion issuer.
///
/// Upstream this is a complex type (format, qualifiers, encryption); the
/// token layer only needs the resolved string value, with the format URI
/// kept as advisory metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saml2NameIdentifier {
    /// The resolved identifier string.
    pub value: String,

    /// Format URI (e.g. `urn:oasis:names:tc:SAML:2.0:nameid-format:entity`).
    #[serde(default)]
    pub format: Option<String>,
}

impl Saml2NameIdentifier {
    /// Create a name identifier with no format URI.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            format: None,
        }
    }

    /// Attach a format URI.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

/// The conditions block of an assertion: the temporal bounds under which the
/// assertion is to be considered valid. Either bound may be absent, leaving
/// that side of the validity window open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saml2Conditions {
    /// Instant before which the assertion is not valid.
    #[serde(default)]
    pub not_before: Option<DateTime<Utc>>,

    /// Instant at or after which the assertion is not valid.
    #[serde(default)]
    pub not_on_or_after: Option<DateTime<Utc>>,
}

impl Saml2Conditions {
    /// Conditions with both bounds set.
    pub fn window(not_before: DateTime<Utc>, not_on_or_after: DateTime<Utc>) -> Self {
        Self {
            not_before: Some(not_before),
            not_on_or_after: Some(not_on_or_after),
        }
    }
}

/// A parsed, immutable SAML2 assertion.
///
/// Produced by the upstream parser; the token adapter holds a shared
/// reference and never mutates or re-serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saml2Assertion {
    /// Assertion identifier.
    pub id: Saml2Id,

    /// Issuer identity.
    pub issuer: Saml2NameIdentifier,

    /// Temporal validity conditions, when the assertion carries them.
    #[serde(default)]
    pub conditions: Option<Saml2Conditions>,
}

impl Saml2Assertion {
    /// Create an assertion with a generated id and no conditions.
    pub fn new(issuer: Saml2NameIdentifier) -> Self {
        Self {
            id: Saml2Id::generate(),
            issuer,
            conditions: None,
        }
    }

    /// Replace the generated id with a parsed one.
    pub fn with_id(mut self, id: Saml2Id) -> Self {
        self.id = id;
        self
    }

    /// Attach a conditions block.
    pub fn with_conditions(mut self, conditions: Saml2Conditions) -> Self {
        self.conditions = Some(conditions);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique_and_prefixed() {
        let a = Saml2Id::generate();
        let b = Saml2Id::generate();
        assert!(a.value.starts_with('_'));
        assert!(b.value.starts_with('_'));
        assert_ne!(a, b);
    }

    #[test]
    fn test_assertion_builder() {
        let issuer = Saml2NameIdentifier::new("https://idp.example")
            .with_format("urn:oasis:names:tc:SAML:2.0:nameid-format:entity");
        let assertion = Saml2Assertion::new(issuer)
            .with_id(Saml2Id::new("A1"))
            .with_conditions(Saml2Conditions::default());

        assert_eq!(assertion.id.value, "A1");
        assert_eq!(assertion.issuer.value, "https://idp.example");
        assert_eq!(assertion.conditions, Some(Saml2Conditions::default()));
    }

    #[test]
    fn test_conditions_serde_roundtrip() {
        let now = Utc::now();
        let assertion = Saml2Assertion::new(Saml2NameIdentifier::new("https://idp.example"))
            .with_conditions(Saml2Conditions {
                not_before: Some(now),
                not_on_or_after: None,
            });

        let json = serde_json::to_string(&assertion).unwrap();
        let back: Saml2Assertion = serde_json::from_str(&json).unwrap();
        assert_eq!(assertion, back);
    }
}
