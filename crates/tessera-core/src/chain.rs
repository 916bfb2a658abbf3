//! Issuer-chain resolution.
//!
//! A token may be vouched for by another token (its issuer token), which may
//! itself be vouched for, and so on. Chains are modeled as lookup keys, not
//! direct references: a token records its issuer token's *id*, and the
//! registry resolves ids to tokens. Two tokens that vouch for each other are
//! therefore representable without any ownership cycle.

use crate::error::TokenError;
use crate::token::SecurityToken;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of tokens participating in issuer-chain resolution.
///
/// Holds shared references keyed by token id. Lookups return the registered
/// `Arc` itself, so identity is preserved across registration and resolution.
///
/// Not internally synchronized: populate the registry before sharing it, or
/// synchronize externally.
#[derive(Default)]
pub struct TokenChainRegistry {
    tokens: HashMap<String, Arc<dyn SecurityToken>>,
}

impl TokenChainRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token under its own id.
    ///
    /// Fails with [`TokenError::DuplicateTokenId`] if a token with the same
    /// id is already present; silently replacing a chain member would let a
    /// later registration redirect an already-resolved chain.
    pub fn register(&mut self, token: Arc<dyn SecurityToken>) -> Result<(), TokenError> {
        let id = token.id().to_string();
        if self.tokens.contains_key(&id) {
            return Err(TokenError::DuplicateTokenId { id });
        }

        tracing::debug!(token_id = %id, issuer = %token.issuer(), "token registered in chain");
        self.tokens.insert(id, token);
        Ok(())
    }

    /// Look up a token by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn SecurityToken>> {
        self.tokens.get(id).cloned()
    }

    /// Resolve an issuer-token id recorded on a token to the token it names.
    ///
    /// Returns `None` both when `issuer_token_id` is `None` (no chain link
    /// was established) and when the id names a token that was never
    /// registered; the pipeline decides which of those it tolerates.
    pub fn resolve_issuer(
        &self,
        issuer_token_id: Option<&str>,
    ) -> Option<Arc<dyn SecurityToken>> {
        let id = issuer_token_id?;
        let resolved = self.get(id);
        if resolved.is_none() {
            tracing::debug!(issuer_token_id = %id, "issuer token not present in chain registry");
        }
        resolved
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
