//! # tessera-saml
//!
//! SAML2 assertion model and security token adapter for the Tessera
//! validation framework.
//!
//! This crate provides:
//! - A parsed, immutable [`Saml2Assertion`] data model (identifier, issuer,
//!   optional conditions)
//! - [`Saml2SecurityToken`], the adapter that wraps an assertion and exposes
//!   the framework's uniform [`SecurityToken`](tessera_core::SecurityToken)
//!   contract
//!
//! ## Pipeline Position
//!
//! | Stage | Owner | Touches |
//! |-------|-------|---------|
//! | Parse XML into `Saml2Assertion` | upstream parser (out of scope) | — |
//! | Wrap in `Saml2SecurityToken` | this crate | construction |
//! | Verify signature | pipeline stage (out of scope) | `set_signing_key` |
//! | Resolve issuer chain | pipeline stage (out of scope) | `set_issuer_token` |
//! | Enforce policy | pipeline (out of scope) | read accessors |
//!
//! The adapter itself makes no trust decisions and performs no checks beyond
//! requiring an assertion to exist: empty ids, empty issuers, and inverted
//! validity windows all pass through for the pipeline to reject.

pub mod assertion;
pub mod token;

pub use assertion::{Saml2Assertion, Saml2Conditions, Saml2Id, Saml2NameIdentifier};
pub use token::Saml2SecurityToken;
