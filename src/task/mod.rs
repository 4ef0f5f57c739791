//! Task tracking for taskdeck.
//!
//! This module owns the task record lifecycle: creating tasks from a
//! title, listing and looking them up by numeric id, applying partial
//! updates, and removing them. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
