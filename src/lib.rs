//! Tasks dashboard: a task CRUD backend.
//!
//! This crate provides independently invocable handlers that create, list,
//! update and delete tasks, plus an HTTP server binary that mounts them.
//!
//! # Architecture
//!
//! The task module follows hexagonal architecture principles:
//!
//! - **Domain**: Task values and payload validation with no infrastructure
//!   dependencies
//! - **Ports**: The repository trait the handlers depend on
//! - **Adapters**: `PostgreSQL` and in-memory repository implementations
//!
//! # Modules
//!
//! - [`config`]: Environment-driven startup configuration
//! - [`handler`]: Request handlers, response envelopes and the HTTP router
//! - [`task`]: Task domain, persistence and orchestration

pub mod config;
pub mod handler;
pub mod task;
