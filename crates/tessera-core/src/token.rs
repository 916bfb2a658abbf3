//! The capability trait every token kind exposes to the validation pipeline.

use crate::key::SecurityKey;
use chrono::{DateTime, Utc};

/// Lower sentinel for an open validity window: a token whose assertion
/// carries no lower bound is valid from the beginning of representable time.
pub const MIN_TOKEN_TIME: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Upper sentinel for an open validity window.
pub const MAX_TOKEN_TIME: DateTime<Utc> = DateTime::<Utc>::MAX_UTC;

/// Uniform read contract over heterogeneous token kinds (SAML2 assertions,
/// JWTs, ...). The validation pipeline reasons about every token through this
/// trait; adapters normalize their backing format into it.
///
/// Implementations are pass-through, not defensive: an upstream-absent id or
/// issuer surfaces as an empty string, and absent temporal bounds surface as
/// [`MIN_TOKEN_TIME`] / [`MAX_TOKEN_TIME`]. Nothing here guarantees
/// `valid_from() <= valid_to()` — the pipeline must reject tokens with empty
/// identities or inverted windows itself.
pub trait SecurityToken {
    /// Token identifier, resolved from the backing assertion.
    fn id(&self) -> &str;

    /// Issuer identity, resolved to a single string.
    fn issuer(&self) -> &str;

    /// Start of the validity window. Defaults to an open lower bound.
    fn valid_from(&self) -> DateTime<Utc> {
        MIN_TOKEN_TIME
    }

    /// End of the validity window. Defaults to an open upper bound.
    fn valid_to(&self) -> DateTime<Utc> {
        MAX_TOKEN_TIME
    }

    /// The key that produced the signature over this token, once the
    /// signature-verification stage has determined it.
    fn signing_key(&self) -> Option<&SecurityKey> {
        None
    }

    /// Key material asserted by the token's own content, distinct from the
    /// signing key.
    fn security_key(&self) -> Option<&SecurityKey> {
        None
    }
}
