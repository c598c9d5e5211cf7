//! Shared test fixtures for the hzcfg workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`workspace`] - [`workspace::TestWorkspace`], a temp directory split into
//!   a working directory and a classpath root
//! - [`xml`] - helpers that wrap element bodies in product root elements

pub mod workspace;
pub mod xml;
