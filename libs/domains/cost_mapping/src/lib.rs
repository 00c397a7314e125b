//! Cost Mapping Domain
//!
//! This module maps provisioned cloud resources to the billable cost
//! components a pricing catalog can price.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Resources  │  ← per-resource mapping logic (KMS keys)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← cost components, product filters, enums
//! └─────────────┘
//! ```
//!
//! The mapping itself is a pure transformation: it never talks to a pricing
//! catalog or ingests usage data. Each produced [`models::CostComponent`]
//! carries the filter criteria a downstream lookup service needs to resolve
//! a unit price, and usage-driven components leave their monthly quantity
//! unset for the usage collaborator to fill in.

pub mod error;
pub mod kms_key;
pub mod models;

// Re-export commonly used types
pub use error::{CostMappingError, CostMappingResult};
pub use kms_key::KmsKey;
pub use models::{
    AttributeFilter, CloudProvider, CostComponent, CostMappedResource, KeySpec, MappedResource,
    ProductFilter,
};
