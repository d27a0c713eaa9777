//! Task storage and lifecycle for the task dashboard.
//!
//! A task is created from a validated payload, listed, partially overwritten
//! and permanently removed. The module follows hexagonal architecture:
//!
//! - Domain types and payload validation in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
