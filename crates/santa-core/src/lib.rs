#![deny(missing_docs)]
//! Core types for the santa gift-exchange matcher: the shared structured error
//! surface, the deterministic seeding policy and provenance descriptors.

pub mod errors;
pub mod provenance;
pub mod rng;

pub use errors::{ErrorInfo, SantaError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, fresh_master_seed, RngHandle};
