//! Cross-cutting pieces shared by the Bobatcal API.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
