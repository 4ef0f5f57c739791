//! Taskdeck: a demo task manager.
//!
//! This crate provides an in-memory task store and a JSON REST API over it.
//! Tasks carry an auto-incrementing integer id, a title, a completion flag,
//! and a creation timestamp.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`task`]: Task records, the store contract, and the task service
//! - [`api`]: HTTP routes and the JSON response envelope
//! - [`config`]: Layered server configuration
//! - [`server`]: Listener, middleware, and shutdown handling

pub mod api;
pub mod config;
pub mod server;
pub mod task;
pub mod telemetry;
