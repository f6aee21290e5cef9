//! Route handlers

pub mod error;
pub mod greeting;
pub mod health;
pub mod metrics;
