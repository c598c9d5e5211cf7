//! Filesystem abstraction for hzcfg
//!
//! Provides normalized paths, classpath-style resource lookup and the
//! small amount of I/O the configuration loader needs.

pub mod classpath;
pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;
pub mod resource;

pub use classpath::ClassPath;
pub use config::ConfigStore;
pub use constants::ResourcePrefix;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use resource::{ResourceLocation, ResourceResolver};
