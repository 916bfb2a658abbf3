//! Opaque key material carried by security tokens.
//!
//! Tokens reference two distinct keys: the **signing key** that produced the
//! signature over the token bytes, and the **security key** asserted by the
//! token's own content (e.g. a holder-of-key claim). Both are represented as
//! [`SecurityKey`]: algorithm kind plus raw bytes. This crate only carries
//! key material between pipeline stages; signature verification happens
//! elsewhere.

use crate::error::TokenError;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// Algorithm family of a piece of key material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Ed25519 public key.
    Ed25519,
    /// RSA public key (DER-encoded SubjectPublicKeyInfo).
    Rsa,
    /// ECDSA P-256 public key.
    EcdsaP256,
    /// X.509 certificate (DER).
    X509Certificate,
    /// Symmetric secret.
    Symmetric,
}

/// Key material identified by algorithm kind and raw bytes.
///
/// Equality compares kind and bytes; the optional `key_id` is advisory
/// metadata (e.g. a KeyInfo reference) and does not participate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityKey {
    kind: KeyKind,
    #[serde(with = "bytes_base64")]
    bytes: Vec<u8>,
    #[serde(default)]
    key_id: Option<String>,
}

impl PartialEq for SecurityKey {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.bytes == other.bytes
    }
}

impl Eq for SecurityKey {}

impl SecurityKey {
    /// Create a key from raw bytes.
    pub fn new(kind: KeyKind, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
            key_id: None,
        }
    }

    /// Attach an advisory key id (e.g. a KeyInfo reference from the token).
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Decode a key from standard base64.
    pub fn from_base64(kind: KeyKind, encoded: &str) -> Result<Self, TokenError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| TokenError::InvalidKey(e.to_string()))?;
        Ok(Self::new(kind, bytes))
    }

    /// Decode a key from a hex string.
    pub fn from_hex(kind: KeyKind, encoded: &str) -> Result<Self, TokenError> {
        let bytes = hex::decode(encoded).map_err(|e| TokenError::InvalidKey(e.to_string()))?;
        Ok(Self::new(kind, bytes))
    }

    /// Algorithm kind of this key.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// Raw key bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Advisory key id, if any.
    pub fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }

    /// Encode the key bytes as standard base64.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Encode the key bytes as hex.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

mod bytes_base64 {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(de)?;
        base64::engine::general_purpose::STANDARD
            .decode(s)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenError;

    #[test]
    fn test_base64_roundtrip() {
        let key = SecurityKey::new(KeyKind::Ed25519, vec![1, 2, 3, 4]);
        let encoded = key.to_base64();
        let decoded = SecurityKey::from_base64(KeyKind::Ed25519, &encoded).unwrap();
        assert_eq!(key, decoded);
    }

    #[test]
    fn test_hex_roundtrip() {
        let key = SecurityKey::new(KeyKind::Symmetric, vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(key.to_hex(), "deadbeef");
        let decoded = SecurityKey::from_hex(KeyKind::Symmetric, &key.to_hex()).unwrap();
        assert_eq!(key, decoded);
    }

    #[test]
    fn test_invalid_material_rejected() {
        let err = SecurityKey::from_base64(KeyKind::Rsa, "not base64!!!").unwrap_err();
        assert!(matches!(err, TokenError::InvalidKey(_)));

        let err = SecurityKey::from_hex(KeyKind::Rsa, "xyz").unwrap_err();
        assert!(matches!(err, TokenError::InvalidKey(_)));
    }

    #[test]
    fn test_key_id_does_not_affect_equality() {
        let a = SecurityKey::new(KeyKind::X509Certificate, vec![9, 9]);
        let b = SecurityKey::new(KeyKind::X509Certificate, vec![9, 9]).with_key_id("kid-1");
        assert_eq!(a, b);
        assert_eq!(b.key_id(), Some("kid-1"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let key = SecurityKey::new(KeyKind::EcdsaP256, vec![7; 33]).with_key_id("signer");
        let json = serde_json::to_string(&key).unwrap();
        let back: SecurityKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, back);
        assert_eq!(back.key_id(), Some("signer"));
    }
}
