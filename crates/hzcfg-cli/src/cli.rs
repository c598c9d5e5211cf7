//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use hzcfg_core::ConfigType;
use std::path::PathBuf;

/// hzcfg - Locate and resolve layered XML configuration
#[derive(Parser, Debug)]
#[command(name = "hzcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Product whose configuration is loaded [default: server]
    #[arg(short = 't', long = "type", value_enum, global = true)]
    pub config_type: Option<Product>,

    /// Define a property (repeatable)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE", global = true)]
    pub defines: Vec<String>,

    /// Add a classpath root directory (repeatable)
    #[arg(long = "classpath", value_name = "DIR", global = true)]
    pub classpath: Vec<PathBuf>,

    /// Explicit configuration: a file path or `classpath:<resource>`
    #[arg(long, value_name = "LOCATION", env = "HZCFG_CONFIG", global = true)]
    pub config: Option<String>,

    /// Launcher settings file (TOML, JSON or YAML)
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Do not import environment variables as properties
    #[arg(long, global = true)]
    pub no_env: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show which source the configuration would be loaded from
    Locate {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print the fully resolved configuration document
    ///
    /// Variables are substituted and imports expanded. The result is
    /// written to stdout unless --output is given.
    Resolve {
        /// Write the document to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Product names accepted by `--type`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Product {
    Server,
    Client,
    Jet,
}

impl From<Product> for ConfigType {
    fn from(product: Product) -> Self {
        match product {
            Product::Server => ConfigType::Server,
            Product::Client => ConfigType::Client,
            Product::Jet => ConfigType::Jet,
        }
    }
}
