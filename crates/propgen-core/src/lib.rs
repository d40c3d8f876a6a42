//! # propgen-core
//!
//! Core types, name normalization, and error types for propgen.
//!
//! This crate provides the foundational types shared across all propgen crates:
//! - [`ComponentIdentity`]: the three canonical forms of a requested component name
//! - [`DependencyProfile`]: packages and primitive namespaces inferred from source text
//! - [`PropCandidate`]: one extracted or synthesized props declaration
//! - [`SubComponentRegistry`]: ordered set of sub-component tags
//! - Cross-cutting error types

pub mod candidate;
pub mod errors;
pub mod identity;
pub mod profile;
pub mod sub_components;

pub use candidate::PropCandidate;
pub use errors::CoreError;
pub use identity::ComponentIdentity;
pub use profile::DependencyProfile;
pub use sub_components::SubComponentRegistry;
