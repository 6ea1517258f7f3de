//! Core business logic module
//!
//! This module contains all resolver logic for stackplan.
//! The only I/O here is declaration-file reads in [`registry`]; the
//! version-control diff lives in [`crate::infra`].
//!
//! # Submodules
//!
//! - [`service`] - Service model and declaration (service.toml) parsing
//! - [`registry`] - Service discovery (full and closure modes) and filtering
//! - [`graph`] - Dependency edge materialization and wildcard expansion
//! - [`layering`] - Layered topological ordering and cycle detection
//! - [`changes`] - Change-set filtering of layered output
//! - [`plan`] - Pipeline orchestration

pub mod changes;
pub mod graph;
pub mod layering;
pub mod plan;
pub mod registry;
pub mod service;
