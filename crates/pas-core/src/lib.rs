#![deny(missing_docs)]

//! # pas-core — Foundational Types for the PAS Stack
//!
//! This crate defines the domain primitives that every other crate in the
//! personnel administration workspace depends on. It has no internal crate
//! dependencies — only `serde`, `thiserror`, `chrono`, and `uuid` from the
//! external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** Every identifier is a
//!    distinct type. You cannot pass a [`CommitteeId`] where an
//!    [`EmployeeId`] is expected.
//!
//! 2. **Validation at construction.** String-backed primitives
//!    ([`ComplaintNumber`], [`OffenseCode`]) and band primitives
//!    ([`SeverityLevel`], [`PunishmentBand`]) check their format once, in
//!    `new()`; everything downstream can rely on a well-formed value.
//!
//! 3. **UTC-only time.** All timestamps flow through [`Timestamp`], which
//!    serializes with second precision and a `Z` suffix. Local time is a
//!    presentation concern.
//!
//! 4. **[`ValidationError`] vocabulary.** Structured errors with `thiserror`
//!    — no `Box<dyn Error>`, no `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod severity;
pub mod temporal;

// Re-export primary types at crate root for ergonomic imports.
pub use error::ValidationError;
pub use identity::{
    CenterId, CommitteeId, ComplaintId, ComplaintNumber, EmployeeId, OffenseCode, TenantId,
};
pub use severity::{PunishmentBand, SeverityLevel};
pub use temporal::Timestamp;
