//! Stackplan - Layered dependency ordering for deployable service stacks
//!
//! This library computes build and teardown orderings for a set of
//! independently deployable services with declared inter-service
//! dependencies.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (registry, graph, layering, change filter)
//! - [`infra`] - Infrastructure layer (version-control diff collaborator)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
