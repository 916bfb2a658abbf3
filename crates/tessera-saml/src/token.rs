//! The SAML2 security token adapter.

use crate::assertion::Saml2Assertion;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tessera_core::{MAX_TOKEN_TIME, MIN_TOKEN_TIME, SecurityKey, SecurityToken, TokenError};

/// A security token backed by a SAML2 assertion.
///
/// Two-phase lifecycle: the assertion and the asserted security key are fixed
/// at construction, while the resolution state (`signing_key`, the issuer
/// token link) is populated afterwards by the signature-verification and
/// chain-resolution pipeline stages, and not written again once the pipeline
/// completes. If the token is shared across threads, populate the resolution
/// state before sharing; no internal synchronization is provided.
///
/// The issuer link is a token *id* resolved through
/// [`TokenChainRegistry`](tessera_core::TokenChainRegistry), not a direct
/// reference, so issuer chains never create ownership cycles.
#[derive(Debug, Clone)]
pub struct Saml2SecurityToken {
    assertion: Arc<Saml2Assertion>,
    security_key: Option<SecurityKey>,
    signing_key: Option<SecurityKey>,
    issuer_token: Option<String>,
}

impl Saml2SecurityToken {
    /// Wrap an assertion.
    ///
    /// Fails with [`TokenError::ArgumentNull`] when the assertion is absent —
    /// a token cannot exist without one. This is the only check performed
    /// here: id format, issuer presence, and temporal sanity are all left to
    /// the validation pipeline.
    pub fn new(assertion: Option<Arc<Saml2Assertion>>) -> Result<Self, TokenError> {
        let Some(assertion) = assertion else {
            return Err(TokenError::argument_null("assertion"));
        };

        Ok(Self {
            assertion,
            security_key: None,
            signing_key: None,
            issuer_token: None,
        })
    }

    /// Attach the key material asserted by the token's own content (e.g. a
    /// holder-of-key claim). Part of construction: once the token is handed
    /// to the pipeline this key never changes, unlike the signing key.
    pub fn with_security_key(mut self, key: SecurityKey) -> Self {
        self.security_key = Some(key);
        self
    }

    /// The backing assertion.
    pub fn assertion(&self) -> &Saml2Assertion {
        &self.assertion
    }

    /// Id of the token vouching for this token's issuer, once the
    /// chain-resolution stage has established it.
    pub fn issuer_token(&self) -> Option<&str> {
        self.issuer_token.as_deref()
    }

    /// Record the issuer token link. Invoked by the chain-resolution stage;
    /// the id is resolved through the shared
    /// [`TokenChainRegistry`](tessera_core::TokenChainRegistry).
    pub fn set_issuer_token(&mut self, token_id: impl Into<String>) {
        let token_id = token_id.into();
        tracing::debug!(token_id = %self.id(), issuer_token_id = %token_id, "issuer token linked");
        self.issuer_token = Some(token_id);
    }

    /// Record the key that produced the signature over this token. Invoked
    /// by the signature-verification stage.
    pub fn set_signing_key(&mut self, key: SecurityKey) {
        self.signing_key = Some(key);
    }
}

impl SecurityToken for Saml2SecurityToken {
    /// Pass-through of `assertion.id`; an upstream-empty id surfaces as an
    /// empty string for the pipeline to reject.
    fn id(&self) -> &str {
        &self.assertion.id.value
    }

    /// Pass-through of the resolved issuer string, same policy as `id`.
    fn issuer(&self) -> &str {
        &self.assertion.issuer.value
    }

    fn valid_from(&self) -> DateTime<Utc> {
        self.assertion
            .conditions
            .as_ref()
            .and_then(|c| c.not_before)
            .unwrap_or(MIN_TOKEN_TIME)
    }

    fn valid_to(&self) -> DateTime<Utc> {
        self.assertion
            .conditions
            .as_ref()
            .and_then(|c| c.not_on_or_after)
            .unwrap_or(MAX_TOKEN_TIME)
    }

    fn signing_key(&self) -> Option<&SecurityKey> {
        self.signing_key.as_ref()
    }

    fn security_key(&self) -> Option<&SecurityKey> {
        self.security_key.as_ref()
    }
}
