//! Reference classifier: tags every reference to a rate-limit identifier
//! with the way its enclosing function uses it.

pub mod observer;
pub mod vocabulary;
pub mod walk;

pub use observer::{classify_reference, observe, RoleObservations};
pub use vocabulary::{GuardModifier, HelperCall, CALL_PRIORITY};
pub use walk::{classify_usage, enclosing_usage, Unclassified, UsageContext};
