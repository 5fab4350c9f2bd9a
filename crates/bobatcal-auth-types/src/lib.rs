//! Session types for the Bobatcal API.
//!
//! Provides JWT validation, the session cookie builders, and the `Identity`
//! extractor used by protected handlers.

pub mod cookie;
pub mod identity;
pub mod token;
