//! # tessera-core
//!
//! Token-kind-independent contracts for the Tessera validation framework.
//!
//! This crate provides:
//! - The [`SecurityToken`] capability trait that every token kind implements
//! - [`SecurityKey`], opaque key material carried by tokens
//! - The open validity-window sentinels [`MIN_TOKEN_TIME`] / [`MAX_TOKEN_TIME`]
//! - [`TokenChainRegistry`] for resolving issuer-token chains by id
//!
//! ## Division of Responsibility
//!
//! Token adapters built on this crate are deliberately permissive: absent
//! conditions become an open validity window, absent ids and issuers pass
//! through as empty strings, and nothing here checks that a window is
//! well-ordered. Strictness lives in the validation pipeline, which consumes
//! these contracts and must reject tokens with empty identities or with
//! `valid_from() > valid_to()`.

pub mod chain;
pub mod error;
pub mod key;
pub mod token;

pub use chain::TokenChainRegistry;
pub use error::TokenError;
pub use key::{KeyKind, SecurityKey};
pub use token::{MAX_TOKEN_TIME, MIN_TOKEN_TIME, SecurityToken};
