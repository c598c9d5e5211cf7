//! Resolve command implementation

use std::path::Path;

use hzcfg_core::XmlConfigLoader;
use hzcfg_fs::io;

use crate::error::Result;

/// Run the resolve command
pub fn run_resolve(loader: &XmlConfigLoader, output: Option<&Path>) -> Result<()> {
    let loaded = loader.load()?;
    let xml = loaded.document.to_xml_string()?;

    match output {
        Some(path) => {
            let target = loader
                .resources()
                .working_dir()
                .resolve(&path.to_string_lossy());
            io::write_text(&target, &xml)?;
            tracing::info!(path = %target, "Wrote resolved configuration");
        }
        None => println!("{xml}"),
    }

    Ok(())
}
