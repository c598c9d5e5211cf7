//! Command implementations for hzcfg-cli

pub mod locate;
pub mod resolve;

pub use locate::run_locate;
pub use resolve::run_resolve;
