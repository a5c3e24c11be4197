//! Domain types: roles, usage kinds, observation/specification mappings.

pub mod collections;
pub mod location;
pub mod role;
pub mod usage;

pub use collections::{FxHashMap, FxHashSet};
pub use location::SourceLocation;
pub use role::ContractRole;
pub use usage::{ContractObservation, ContractSpecification, LimitMapping, UsageKind, UsageRecord, UsageSets};
