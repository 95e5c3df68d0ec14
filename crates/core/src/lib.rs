//! `finguard-core` — pure domain primitives for the FinGuard engine.
//!
//! This crate contains the actor and request-context model only. Policy
//! tables and decision logic live in `finguard-policy`; nothing here knows
//! which roles exist or what they may do.

pub mod actor;
pub mod attributes;
pub mod id;
pub mod roles;

pub use actor::Actor;
pub use attributes::{AccessScope, ClearanceLevel, ResourceContext, UserAttributes};
pub use id::ActorId;
pub use roles::Role;
