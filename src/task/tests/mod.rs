//! Unit tests for the task module.
//!
//! Tests are organised by layer: domain types, payload validation, the
//! in-memory adapter and the orchestration service.
